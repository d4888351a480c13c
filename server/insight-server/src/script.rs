//! Scripted agent behavior for demo/development.
//!
//! Emits the same tool calls a hosted assistant would: periodic heartbeats,
//! a loading toggle followed by a refreshed dashboard payload, and page
//! navigation cycling through the report.

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use tokio::sync::broadcast;
use tokio::time::{interval, sleep};

use insight_core::{
    seed::seed_report, AgentCommand, CellValue, Record, Report, Section, SectionViz, PAGE_COUNT,
};

/// Multiply every numeric cell by a small random factor so refreshed
/// payloads are visibly different from the seed
fn jitter_record(record: &Record) -> Record {
    let mut rng = rand::thread_rng();
    Record::from_pairs(record.keys().map(|key| {
        let value = match record.get(key) {
            Some(CellValue::Number(n)) => {
                let factor = 1.0 + (rng.r#gen::<f64>() - 0.5) * 0.1;
                CellValue::Number((n * factor * 100.0).round() / 100.0)
            }
            Some(cell) => cell.clone(),
            None => CellValue::Text(String::new()),
        };
        (key.to_string(), value)
    }))
}

fn jitter_section(section: &Section) -> Section {
    let mut rng = rand::thread_rng();
    let viz = match &section.viz {
        SectionViz::Kpis { kpis } => SectionViz::Kpis {
            kpis: kpis
                .iter()
                .map(|kpi| {
                    let mut k = kpi.clone();
                    k.value *= 1.0 + (rng.r#gen::<f64>() - 0.5) * 0.08;
                    k.change += (rng.r#gen::<f64>() - 0.5) * 2.0;
                    k
                })
                .collect(),
        },
        SectionViz::Chart { kind, data, keys, scales } => SectionViz::Chart {
            kind: kind.clone(),
            data: data.iter().map(jitter_record).collect(),
            keys: keys.clone(),
            scales: *scales,
        },
        table @ SectionViz::Table { .. } => table.clone(),
    };

    Section {
        id: section.id.clone(),
        title: section.title.clone(),
        description: section.description.clone(),
        viz,
        wide: section.wide,
    }
}

fn refreshed_report() -> Report {
    let seed = seed_report();
    Report {
        title: seed.title.clone(),
        pages: seed
            .pages
            .iter()
            .map(|page| insight_core::ReportPage {
                number: page.number,
                title: page.title.clone(),
                sections: page.sections.iter().map(jitter_section).collect(),
            })
            .collect(),
    }
}

pub async fn run_scripted_agent(tx: broadcast::Sender<AgentCommand>) {
    tracing::info!("starting scripted agent");

    let mut heartbeat_interval = interval(Duration::from_secs(30));
    let mut refresh_interval = interval(Duration::from_secs(45));
    let mut navigate_interval = interval(Duration::from_secs(20));
    let mut next_page: u8 = 1;

    loop {
        tokio::select! {
            _ = heartbeat_interval.tick() => {
                let _ = tx.send(AgentCommand::Heartbeat {
                    timestamp: Utc::now().timestamp_millis(),
                });
            }

            _ = refresh_interval.tick() => {
                let _ = tx.send(AgentCommand::SetLoading {
                    is_loading: true,
                    message: "Refreshing business metrics...".to_string(),
                });

                // Simulate model latency before the payload lands
                sleep(Duration::from_millis(1500)).await;

                let report = refreshed_report();
                let title = report.title.clone();
                let _ = tx.send(AgentCommand::UpdateDashboard {
                    dashboard_data: report,
                    title,
                    insights: vec![
                        "Revenue is trending above target for the third straight month.".to_string(),
                        "Churn continues to decline across every segment.".to_string(),
                    ],
                    active_page: None,
                });
            }

            _ = navigate_interval.tick() => {
                let _ = tx.send(AgentCommand::NavigateToPage { page: next_page });
                next_page = next_page % PAGE_COUNT + 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jitter_preserves_shape_and_text() {
        let record = Record::new()
            .field("month", "Jan")
            .field("revenue", 1000.0);
        let out = jitter_record(&record);

        assert_eq!(out.keys().collect::<Vec<_>>(), vec!["month", "revenue"]);
        assert_eq!(out.display("month"), "Jan");

        let revenue = out.number("revenue").unwrap();
        assert!((900.0..=1100.0).contains(&revenue));
    }

    #[test]
    fn test_refreshed_report_keeps_page_structure() {
        let report = refreshed_report();
        let seed = seed_report();

        assert_eq!(report.pages.len(), seed.pages.len());
        for (fresh, original) in report.pages.iter().zip(&seed.pages) {
            assert_eq!(fresh.number, original.number);
            assert_eq!(fresh.sections.len(), original.sections.len());
        }
    }
}
