//! Searchable, filterable tabular data view.

use insight_core::{CellValue, Dataset};
use leptos::prelude::*;

/// Sentinel column meaning "match against every header"
pub const ALL_COLUMNS: &str = "all";

/// Case-insensitive display string for the cell a header names.
/// Header-to-key matching is itself case-insensitive; a missing key yields
/// an empty string, never an error.
fn cell_text(row: &insight_core::Record, header: &str) -> String {
    row.get_ci(header).map(CellValue::display).unwrap_or_default()
}

/// Filter rows by a live search predicate, preserving input order.
///
/// Case-insensitive substring match; `filter_column` is either a header name
/// or [`ALL_COLUMNS`]. An empty search term matches everything.
pub fn filter_rows(
    rows: &Dataset,
    headers: &[String],
    search_term: &str,
    filter_column: &str,
) -> Dataset {
    let term = search_term.trim().to_lowercase();
    if term.is_empty() {
        return rows.clone();
    }

    rows.iter()
        .filter(|row| {
            if filter_column == ALL_COLUMNS {
                headers
                    .iter()
                    .any(|h| cell_text(row, h).to_lowercase().contains(&term))
            } else {
                cell_text(row, filter_column).to_lowercase().contains(&term)
            }
        })
        .cloned()
        .collect()
}

/// Generic table with search box, column filter, and row-count footer
#[component]
pub fn DataTable(headers: Vec<String>, rows: Dataset) -> impl IntoView {
    let total = rows.len();
    let search = RwSignal::new(String::new());
    let column = RwSignal::new(ALL_COLUMNS.to_string());

    let all_headers = headers.clone();
    let filtered = Memo::new(move |_| {
        filter_rows(&rows, &all_headers, &search.get(), &column.get())
    });

    let option_headers = headers.clone();
    let body_headers = headers.clone();

    view! {
        <div class="data-table">
            <div class="dt-controls">
                <input
                    type="search"
                    class="dt-search"
                    placeholder="Search..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="dt-column-filter"
                    on:change=move |ev| column.set(event_target_value(&ev))
                >
                    <option value=ALL_COLUMNS selected=true>"All columns"</option>
                    {option_headers
                        .into_iter()
                        .map(|h| {
                            view! { <option value=h.clone()>{h.clone()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            <table class="dt-table">
                <thead>
                    <tr>
                        {headers
                            .iter()
                            .map(|h| view! { <th>{h.clone()}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let headers = body_headers.clone();
                        filtered
                            .get()
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr>
                                        {headers
                                            .iter()
                                            .map(|h| view! { <td>{cell_text(&row, h)}</td> })
                                            .collect_view()}
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <div class="dt-footer">
                {move || format!("Showing {} of {} rows", filtered.get().len(), total)}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insight_core::Record;

    fn headers() -> Vec<String> {
        vec!["Name".to_string(), "Revenue".to_string()]
    }

    fn rows() -> Dataset {
        vec![
            Record::new().field("name", "Acme").field("revenue", 500.0),
            Record::new().field("name", "Northwind").field("revenue", 1200.0),
            Record::new().field("name", "Initech").field("revenue", 500.0),
        ]
    }

    #[test]
    fn test_empty_term_returns_all_rows_in_order() {
        let out = filter_rows(&rows(), &headers(), "", ALL_COLUMNS);
        assert_eq!(out, rows());
    }

    #[test]
    fn test_case_insensitive_match_across_headers() {
        // Header "Name" matches record key "name" case-insensitively
        let out = filter_rows(&rows(), &headers(), "acme", ALL_COLUMNS);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].display("name"), "Acme");
    }

    #[test]
    fn test_named_column_restricts_scope() {
        // "500" appears in Revenue but not Name
        let by_name = filter_rows(&rows(), &headers(), "500", "Name");
        assert!(by_name.is_empty());

        let by_revenue = filter_rows(&rows(), &headers(), "500", "Revenue");
        assert_eq!(by_revenue.len(), 2);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_rows(&rows(), &headers(), "500", ALL_COLUMNS);
        let twice = filter_rows(&once, &headers(), "500", ALL_COLUMNS);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_missing_keys_are_non_matches() {
        let sparse = vec![
            Record::new().field("name", "NoRevenue"),
            Record::new().field("name", "HasRevenue").field("revenue", 42.0),
        ];
        let out = filter_rows(&sparse, &headers(), "42", ALL_COLUMNS);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].display("name"), "HasRevenue");
    }

    #[test]
    fn test_preserves_input_order() {
        let out = filter_rows(&rows(), &headers(), "i", ALL_COLUMNS);
        let names: Vec<String> = out.iter().map(|r| r.display("name")).collect();
        assert_eq!(names, vec!["Northwind", "Initech"]);
    }
}
