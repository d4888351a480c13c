//! Pre-seeded enterprise report rendered at startup.
//!
//! Six pages: executive summary, sales, products, marketing, customers,
//! operations. The agent runtime may replace this payload wholesale at any
//! time via `update_dashboard`.

use crate::{
    AxisScale, ChartKind, Dataset, KeySpec, Kpi, KpiFormat, Record, Report, ReportPage,
    ScaleDirectives, Section, SectionViz,
};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Build a 12-row monthly dataset; each row in `values` pairs positionally
/// with `keys`.
fn monthly(keys: &[&str], values: &[&[f64]]) -> Dataset {
    MONTHS
        .iter()
        .zip(values)
        .map(|(month, row)| {
            let mut record = Record::new().field("month", *month);
            for (key, v) in keys.iter().zip(row.iter()) {
                record = record.field(*key, *v);
            }
            record
        })
        .collect()
}

fn chart(kind: ChartKind, data: Dataset, keys: KeySpec) -> SectionViz {
    SectionViz::Chart {
        kind,
        data,
        keys,
        scales: ScaleDirectives::standard(),
    }
}

/// The static report shown before any agent activity
pub fn seed_report() -> Report {
    Report {
        title: "Business Performance Dashboard".to_string(),
        pages: vec![
            executive_summary(),
            sales_performance(),
            product_analytics(),
            marketing(),
            customer_insights(),
            operations(),
        ],
    }
}

fn executive_summary() -> ReportPage {
    let kpis = vec![
        Kpi::new("Total Revenue", 12_500_000.0, 15.3, 12_000_000.0, KpiFormat::Currency),
        Kpi::new("Net Profit", 2_850_000.0, 22.1, 2_500_000.0, KpiFormat::Currency),
        Kpi::new("Profit Margin", 22.8, 5.2, 20.0, KpiFormat::Percent),
        Kpi::new("Customer Acquisition", 8_540.0, -3.4, 9_000.0, KpiFormat::Number),
        Kpi::new("Customer Retention", 94.5, 2.1, 95.0, KpiFormat::Percent),
        Kpi::new("Market Share", 18.4, 1.8, 20.0, KpiFormat::Percent),
    ];

    let revenue_trend = monthly(
        &["revenue", "costs", "profit", "forecast"],
        &[
            &[980_000.0, 756_000.0, 224_000.0, 950_000.0],
            &[920_000.0, 710_000.0, 210_000.0, 930_000.0],
            &[1_050_000.0, 798_000.0, 252_000.0, 1_000_000.0],
            &[1_020_000.0, 780_000.0, 240_000.0, 1_020_000.0],
            &[1_150_000.0, 850_000.0, 300_000.0, 1_080_000.0],
            &[1_080_000.0, 820_000.0, 260_000.0, 1_100_000.0],
            &[1_200_000.0, 900_000.0, 300_000.0, 1_150_000.0],
            &[1_180_000.0, 880_000.0, 300_000.0, 1_180_000.0],
            &[1_250_000.0, 920_000.0, 330_000.0, 1_200_000.0],
            &[1_300_000.0, 960_000.0, 340_000.0, 1_250_000.0],
            &[1_350_000.0, 1_000_000.0, 350_000.0, 1_300_000.0],
            &[1_420_000.0, 1_050_000.0, 370_000.0, 1_380_000.0],
        ],
    );

    let revenue_vs_target = monthly(
        &["revenue", "target"],
        &[
            &[145_000.0, 150_000.0],
            &[162_000.0, 155_000.0],
            &[158_000.0, 160_000.0],
            &[171_000.0, 165_000.0],
            &[189_000.0, 170_000.0],
            &[195_000.0, 175_000.0],
            &[187_000.0, 180_000.0],
            &[203_000.0, 185_000.0],
            &[198_000.0, 190_000.0],
            &[215_000.0, 195_000.0],
            &[224_000.0, 200_000.0],
            &[236_000.0, 210_000.0],
        ],
    );

    let cost_structure = monthly(
        &["fixedCost", "varCost", "profitMargin"],
        &[
            &[45_000.0, 62_000.0, 110_000.0],
            &[45_000.0, 71_000.0, 120_000.0],
            &[45_000.0, 68_000.0, 118_000.0],
            &[46_000.0, 74_000.0, 125_000.0],
            &[46_000.0, 83_000.0, 135_000.0],
            &[47_000.0, 87_000.0, 130_000.0],
            &[47_000.0, 82_000.0, 128_000.0],
            &[48_000.0, 91_000.0, 133_000.0],
            &[48_000.0, 88_000.0, 130_000.0],
            &[49_000.0, 96_000.0, 135_000.0],
            &[49_000.0, 102_000.0, 138_000.0],
            &[50_000.0, 108_000.0, 140_000.0],
        ],
    );

    let quarters: Dataset = [
        ("Q1 2023", 2_650_000.0, 580_000.0, 2_070_000.0),
        ("Q2 2023", 2_980_000.0, 685_000.0, 2_295_000.0),
        ("Q3 2023", 3_250_000.0, 780_000.0, 2_470_000.0),
        ("Q4 2023", 3_580_000.0, 895_000.0, 2_685_000.0),
        ("Q1 2024", 2_950_000.0, 686_000.0, 2_264_000.0),
        ("Q2 2024", 3_250_000.0, 800_000.0, 2_450_000.0),
        ("Q3 2024", 3_630_000.0, 930_000.0, 2_700_000.0),
        ("Q4 2024", 4_070_000.0, 1_060_000.0, 3_010_000.0),
    ]
    .into_iter()
    .map(|(q, rev, profit, exp)| {
        Record::new()
            .field("quarter", q)
            .field("revenue", rev)
            .field("profit", profit)
            .field("expenses", exp)
    })
    .collect();

    let margins = monthly(
        &["margin", "industry_avg"],
        &[
            &[22.9, 20.5], &[22.8, 20.4], &[24.0, 20.6], &[23.5, 20.7],
            &[26.1, 20.8], &[24.1, 20.9], &[25.0, 21.0], &[25.4, 21.1],
            &[26.4, 21.2], &[26.2, 21.3], &[25.9, 21.4], &[26.1, 21.5],
        ],
    );

    ReportPage {
        number: 1,
        title: "Executive Summary".to_string(),
        sections: vec![
            Section::new("exec-kpis", "Key Performance Indicators", SectionViz::Kpis { kpis })
                .describe("Top-level business metrics at a glance")
                .wide(),
            Section::new(
                "revenue-trend",
                "12-Month Revenue Trend",
                chart(ChartKind::Line, revenue_trend, KeySpec::new().x("month").ys(["revenue", "costs", "profit", "forecast"])),
            )
            .describe("Monthly revenue, costs, and profit comparison")
            .wide(),
            Section::new(
                "revenue-vs-target",
                "Revenue Performance vs Target",
                chart(ChartKind::BarLine, revenue_vs_target, KeySpec::new().x("month").ys(["revenue", "target"])),
            )
            .describe("Actual revenue (bars) compared to monthly targets (line)"),
            Section::new(
                "cost-structure",
                "Cost Structure & Profitability",
                chart(ChartKind::StackedBarLine, cost_structure, KeySpec::new().x("month").ys(["fixedCost", "varCost", "profitMargin"])),
            )
            .describe("Fixed and variable costs (stacked) with profit trend (line)"),
            Section::new(
                "quarterly-comparison",
                "Quarterly Performance Comparison",
                chart(ChartKind::GroupedBar, quarters, KeySpec::new().x("quarter").ys(["revenue", "profit", "expenses"])),
            )
            .describe("Year-over-year quarterly revenue and profit comparison"),
            Section::new(
                "profit-margin-trend",
                "Profit Margin Evolution",
                SectionViz::Chart {
                    kind: ChartKind::Area,
                    data: margins,
                    keys: KeySpec::new().x("month").ys(["margin", "industry_avg"]),
                    scales: ScaleDirectives {
                        x: AxisScale::auto(),
                        y: AxisScale::percentage(),
                    },
                },
            )
            .describe("Monthly profit margin percentage over 12 months"),
        ],
    }
}

fn sales_performance() -> ReportPage {
    let regions: Dataset = [
        ("North America", 4_850_000.0),
        ("Europe", 3_200_000.0),
        ("Asia Pacific", 2_650_000.0),
        ("Latin America", 1_100_000.0),
        ("Middle East & Africa", 700_000.0),
    ]
    .into_iter()
    .map(|(region, rev)| Record::new().field("region", region).field("revenue", rev))
    .collect();

    let sales_reps: Dataset = [
        ("Sarah Chen", 1_420_000.0),
        ("Marcus Webb", 1_280_000.0),
        ("Elena Rodriguez", 1_150_000.0),
        ("James Okafor", 980_000.0),
        ("Priya Sharma", 940_000.0),
        ("Tom Bakker", 870_000.0),
        ("Lisa Fontaine", 790_000.0),
        ("Daniel Kim", 720_000.0),
    ]
    .into_iter()
    .map(|(name, rev)| Record::new().field("name", name).field("revenue", rev))
    .collect();

    let segments = monthly(
        &["enterprise", "midMarket", "smallBusiness"],
        &[
            &[420_000.0, 310_000.0, 250_000.0],
            &[400_000.0, 295_000.0, 225_000.0],
            &[460_000.0, 330_000.0, 260_000.0],
            &[445_000.0, 320_000.0, 255_000.0],
            &[505_000.0, 360_000.0, 285_000.0],
            &[470_000.0, 345_000.0, 265_000.0],
            &[525_000.0, 375_000.0, 300_000.0],
            &[515_000.0, 370_000.0, 295_000.0],
            &[550_000.0, 390_000.0, 310_000.0],
            &[570_000.0, 405_000.0, 325_000.0],
            &[595_000.0, 420_000.0, 335_000.0],
            &[625_000.0, 445_000.0, 350_000.0],
        ],
    );

    let acquisition = monthly(
        &["cac", "ltv", "conversionRate"],
        &[
            &[185.0, 2_450.0, 3.2], &[192.0, 2_480.0, 3.0], &[178.0, 2_520.0, 3.4],
            &[181.0, 2_560.0, 3.3], &[169.0, 2_610.0, 3.7], &[175.0, 2_650.0, 3.5],
            &[164.0, 2_700.0, 3.8], &[167.0, 2_740.0, 3.7], &[158.0, 2_790.0, 4.0],
            &[155.0, 2_840.0, 4.1], &[151.0, 2_890.0, 4.2], &[146.0, 2_950.0, 4.4],
        ],
    );

    let funnel: Dataset = [
        ("Website Visitors", 125_000.0, 100.0),
        ("Leads", 18_750.0, 15.0),
        ("Qualified Leads", 5_625.0, 4.5),
        ("Opportunities", 1_875.0, 1.5),
        ("Proposals", 938.0, 0.75),
        ("Closed Won", 563.0, 0.45),
    ]
    .into_iter()
    .map(|(stage, count, pct)| {
        Record::new()
            .field("stage", stage)
            .field("count", count)
            .field("percentage", pct)
    })
    .collect();

    ReportPage {
        number: 2,
        title: "Sales Performance".to_string(),
        sections: vec![
            Section::new(
                "sales-by-region",
                "Regional Sales Distribution",
                chart(ChartKind::Donut, regions, KeySpec::new().name("region").value("revenue")),
            )
            .describe("Revenue share by geographic region"),
            Section::new(
                "rep-performance",
                "Sales Representative Performance",
                chart(ChartKind::HorizontalBar, sales_reps, KeySpec::new().x("name").y("revenue")),
            )
            .describe("Annual revenue closed per representative"),
            Section::new(
                "customer-segments",
                "Customer Segmentation Analysis",
                chart(ChartKind::StackedBar, segments, KeySpec::new().x("month").ys(["enterprise", "midMarket", "smallBusiness"])),
            )
            .describe("Monthly revenue by customer segment")
            .wide(),
            Section::new(
                "acquisition-metrics",
                "Customer Acquisition Metrics",
                chart(ChartKind::Line, acquisition, KeySpec::new().x("month").ys(["cac", "ltv", "conversionRate"])),
            )
            .describe("CAC, LTV, and conversion rate trends")
            .wide(),
            Section::new(
                "sales-funnel",
                "Sales Funnel Conversion",
                chart(ChartKind::Funnel, funnel, KeySpec::new().name("stage").value("count")),
            )
            .describe("Pipeline stage conversion from visitor to closed deal")
            .wide(),
        ],
    }
}

fn product_analytics() -> ReportPage {
    let products: Dataset = [
        ("ELEC-4K-TV", 2_840_000.0),
        ("ELEC-LAPTOP", 2_120_000.0),
        ("APPL-FRIDGE", 1_560_000.0),
        ("ELEC-PHONE", 1_340_000.0),
        ("HOME-SOFA", 980_000.0),
        ("APPL-WASHER", 870_000.0),
        ("CLTH-JACKET", 620_000.0),
        ("HOME-DESK", 410_000.0),
    ]
    .into_iter()
    .map(|(sku, rev)| Record::new().field("sku", sku).field("revenue", rev))
    .collect();

    let category_growth: Dataset = [
        ("Electronics", 6_300_000.0, 18.4),
        ("Appliances", 2_430_000.0, 9.2),
        ("Home & Kitchen", 1_390_000.0, 14.7),
        ("Clothing", 620_000.0, -2.3),
        ("Outdoor", 480_000.0, 22.1),
        ("Toys", 310_000.0, 5.6),
    ]
    .into_iter()
    .map(|(cat, rev, growth)| {
        Record::new()
            .field("category", cat)
            .field("revenue", rev)
            .field("growthRate", growth)
    })
    .collect();

    let turnover = monthly(
        &["electronics", "appliances", "clothing", "homeKitchen"],
        &[
            &[8.2, 5.1, 3.8, 4.6], &[7.9, 5.0, 3.6, 4.4], &[8.6, 5.3, 4.0, 4.9],
            &[8.4, 5.2, 3.9, 4.7], &[9.1, 5.6, 4.3, 5.2], &[8.8, 5.4, 4.1, 5.0],
            &[9.4, 5.8, 4.4, 5.4], &[9.2, 5.7, 4.3, 5.3], &[9.7, 6.0, 4.6, 5.6],
            &[9.9, 6.1, 4.7, 5.8], &[10.2, 6.3, 4.8, 6.0], &[10.6, 6.6, 5.0, 6.2],
        ],
    );

    let stock_levels = monthly(
        &["electronics", "appliances", "clothing", "homeKitchen"],
        &[
            &[12_400.0, 5_600.0, 18_200.0, 8_900.0],
            &[11_800.0, 5_400.0, 17_500.0, 8_600.0],
            &[13_100.0, 5_900.0, 19_000.0, 9_300.0],
            &[12_700.0, 5_700.0, 18_400.0, 9_000.0],
            &[13_900.0, 6_200.0, 20_100.0, 9_800.0],
            &[13_300.0, 6_000.0, 19_300.0, 9_400.0],
            &[14_400.0, 6_500.0, 21_000.0, 10_200.0],
            &[14_100.0, 6_400.0, 20_500.0, 10_000.0],
            &[14_900.0, 6_700.0, 21_800.0, 10_600.0],
            &[15_300.0, 6_900.0, 22_400.0, 10_900.0],
            &[15_800.0, 7_100.0, 23_100.0, 11_300.0],
            &[16_400.0, 7_400.0, 24_000.0, 11_700.0],
        ],
    );

    let product_metrics: Dataset = [
        ("ELEC-4K-TV", "65\" 4K Smart TV", 4_050.0, 2_840_000.0, 2.1, 4.6),
        ("ELEC-LAPTOP", "UltraBook Pro 14", 2_420.0, 2_120_000.0, 1.4, 4.7),
        ("APPL-FRIDGE", "French Door Refrigerator", 1_180.0, 1_560_000.0, 3.2, 4.3),
        ("ELEC-PHONE", "Flagship Phone X", 3_350.0, 1_340_000.0, 1.8, 4.5),
        ("HOME-SOFA", "Modular Sectional Sofa", 820.0, 980_000.0, 4.5, 4.2),
        ("APPL-WASHER", "Front-Load Washer", 960.0, 870_000.0, 2.9, 4.4),
        ("CLTH-JACKET", "All-Weather Jacket", 5_180.0, 620_000.0, 6.1, 4.1),
        ("HOME-DESK", "Standing Desk Pro", 1_030.0, 410_000.0, 2.4, 4.5),
    ]
    .into_iter()
    .map(|(sku, name, units, rev, returns, rating)| {
        Record::new()
            .field("sku", sku)
            .field("product", name)
            .field("unitsSold", units)
            .field("revenue", rev)
            .field("returnRate", returns)
            .field("rating", rating)
    })
    .collect();

    let table_headers = product_metrics
        .first()
        .map(|r| r.keys().map(str::to_string).collect())
        .unwrap_or_default();

    ReportPage {
        number: 3,
        title: "Product Analytics".to_string(),
        sections: vec![
            Section::new(
                "product-revenue-mix",
                "Product Revenue Mix",
                chart(ChartKind::Treemap, products, KeySpec::new().name("sku").value("revenue")),
            )
            .describe("Revenue contribution by SKU"),
            Section::new(
                "category-growth",
                "Product Category Growth Rate",
                chart(ChartKind::Scatter, category_growth, KeySpec::new().x("revenue").y("growthRate").label("category")),
            )
            .describe("Revenue versus year-over-year growth by category"),
            Section::new(
                "inventory-turnover",
                "Inventory Turnover Rate",
                chart(ChartKind::Line, turnover, KeySpec::new().x("month").ys(["electronics", "appliances", "clothing", "homeKitchen"])),
            )
            .describe("Monthly turnover rate by category")
            .wide(),
            Section::new(
                "stock-levels",
                "Current Stock Levels by Category",
                chart(ChartKind::StackedArea, stock_levels, KeySpec::new().x("month").ys(["electronics", "appliances", "clothing", "homeKitchen"])),
            )
            .describe("Units in stock per category over time")
            .wide(),
            Section::new(
                "product-table",
                "Detailed Product Performance",
                SectionViz::Table {
                    headers: table_headers,
                    rows: product_metrics,
                },
            )
            .describe("Per-SKU sales, returns, and ratings")
            .wide(),
        ],
    }
}

fn marketing() -> ReportPage {
    let channels: Dataset = [
        ("Paid Search", 420_000.0, 1_850_000.0),
        ("Social Ads", 380_000.0, 1_420_000.0),
        ("Email", 95_000.0, 880_000.0),
        ("Content/SEO", 160_000.0, 1_100_000.0),
        ("Affiliates", 140_000.0, 560_000.0),
        ("Events", 210_000.0, 490_000.0),
    ]
    .into_iter()
    .map(|(channel, spend, rev)| {
        Record::new()
            .field("channel", channel)
            .field("spend", spend)
            .field("revenue", rev)
    })
    .collect();

    let campaigns = monthly(
        &["impressions", "clicks", "conversions"],
        &[
            &[2_100_000.0, 63_000.0, 1_890.0],
            &[1_950_000.0, 58_500.0, 1_760.0],
            &[2_350_000.0, 70_500.0, 2_120.0],
            &[2_250_000.0, 67_500.0, 2_030.0],
            &[2_600_000.0, 78_000.0, 2_340.0],
            &[2_450_000.0, 73_500.0, 2_210.0],
            &[2_750_000.0, 82_500.0, 2_480.0],
            &[2_700_000.0, 81_000.0, 2_430.0],
            &[2_900_000.0, 87_000.0, 2_610.0],
            &[3_000_000.0, 90_000.0, 2_700.0],
            &[3_150_000.0, 94_500.0, 2_840.0],
            &[3_350_000.0, 100_500.0, 3_020.0],
        ],
    );

    let social = monthly(
        &["followers", "engagement", "reach"],
        &[
            &[84_000.0, 4_100.0, 310_000.0], &[86_500.0, 4_300.0, 325_000.0],
            &[89_800.0, 4_700.0, 348_000.0], &[92_400.0, 4_900.0, 362_000.0],
            &[96_100.0, 5_400.0, 390_000.0], &[99_300.0, 5_600.0, 405_000.0],
            &[103_200.0, 6_000.0, 428_000.0], &[106_800.0, 6_200.0, 441_000.0],
            &[111_000.0, 6_700.0, 468_000.0], &[115_400.0, 7_000.0, 486_000.0],
            &[120_100.0, 7_400.0, 510_000.0], &[125_600.0, 7_900.0, 538_000.0],
        ],
    );

    let content: Dataset = [
        ("The 2024 Industry Benchmark Report", "Content/SEO", 148_000.0, 8.4, 920.0),
        ("How Acme Cut Costs by 30%", "Email", 96_000.0, 12.1, 710.0),
        ("Product Tour: What's New in v5", "Social Ads", 210_000.0, 6.2, 640.0),
        ("ROI Calculator", "Paid Search", 88_000.0, 9.8, 580.0),
        ("Customer Story: Northwind", "Content/SEO", 64_000.0, 11.3, 430.0),
        ("Webinar: Scaling Operations", "Events", 21_000.0, 18.6, 350.0),
    ]
    .into_iter()
    .map(|(title, channel, views, engagement, conversions)| {
        Record::new()
            .field("title", title)
            .field("channel", channel)
            .field("views", views)
            .field("engagementRate", engagement)
            .field("conversions", conversions)
    })
    .collect();

    let content_headers = content
        .first()
        .map(|r| r.keys().map(str::to_string).collect())
        .unwrap_or_default();

    ReportPage {
        number: 4,
        title: "Marketing".to_string(),
        sections: vec![
            Section::new(
                "channel-roi",
                "Marketing Channel ROI",
                chart(ChartKind::GroupedBar, channels, KeySpec::new().x("channel").ys(["spend", "revenue"])),
            )
            .describe("Spend versus attributed revenue per channel")
            .wide(),
            Section::new(
                "campaign-performance",
                "Campaign Performance Over Time",
                chart(ChartKind::Line, campaigns, KeySpec::new().x("month").ys(["impressions", "clicks", "conversions"])),
            )
            .describe("Monthly impressions, clicks, and conversions")
            .wide(),
            Section::new(
                "social-engagement",
                "Social Media Engagement Metrics",
                chart(ChartKind::Area, social, KeySpec::new().x("month").ys(["followers", "engagement", "reach"])),
            )
            .describe("Audience growth and engagement")
            .wide(),
            Section::new(
                "top-content",
                "Top Performing Content",
                SectionViz::Table {
                    headers: content_headers,
                    rows: content,
                },
            )
            .describe("Highest-converting content pieces this year")
            .wide(),
        ],
    }
}

fn customer_insights() -> ReportPage {
    let age_distribution: Dataset = [
        ("18-24", 6_200.0),
        ("25-34", 18_400.0),
        ("35-44", 15_100.0),
        ("45-54", 9_800.0),
        ("55+", 5_600.0),
    ]
    .into_iter()
    .map(|(group, count)| Record::new().field("ageGroup", group).field("count", count))
    .collect();

    let income_distribution: Dataset = [
        ("Under $40K", 7_300.0),
        ("$40K-$75K", 16_800.0),
        ("$75K-$120K", 17_900.0),
        ("$120K-$200K", 9_400.0),
        ("Over $200K", 3_700.0),
    ]
    .into_iter()
    .map(|(bracket, count)| Record::new().field("bracket", bracket).field("count", count))
    .collect();

    let satisfaction = monthly(
        &["csat", "nps", "ces"],
        &[
            &[84.0, 42.0, 71.0], &[83.0, 41.0, 70.0], &[85.0, 44.0, 72.0],
            &[85.0, 45.0, 73.0], &[87.0, 48.0, 75.0], &[86.0, 47.0, 74.0],
            &[88.0, 50.0, 76.0], &[88.0, 51.0, 77.0], &[89.0, 53.0, 78.0],
            &[90.0, 54.0, 79.0], &[90.0, 55.0, 80.0], &[91.0, 57.0, 81.0],
        ],
    );

    let tickets = monthly(
        &["technical", "billing", "shipping", "product", "other"],
        &[
            &[340.0, 180.0, 260.0, 150.0, 90.0], &[320.0, 170.0, 240.0, 140.0, 85.0],
            &[360.0, 190.0, 280.0, 160.0, 95.0], &[350.0, 185.0, 270.0, 155.0, 92.0],
            &[385.0, 205.0, 300.0, 170.0, 100.0], &[370.0, 195.0, 285.0, 165.0, 97.0],
            &[400.0, 215.0, 315.0, 180.0, 105.0], &[395.0, 210.0, 310.0, 175.0, 103.0],
            &[415.0, 225.0, 330.0, 185.0, 110.0], &[430.0, 230.0, 340.0, 190.0, 113.0],
            &[445.0, 240.0, 355.0, 200.0, 118.0], &[465.0, 250.0, 370.0, 205.0, 122.0],
        ],
    );

    let clv_segments: Dataset = [
        ("Champions", 8_400.0, 14.2),
        ("Loyal", 5_100.0, 9.8),
        ("Potential", 2_900.0, 5.4),
        ("New", 1_200.0, 2.1),
        ("At Risk", 3_600.0, 3.2),
    ]
    .into_iter()
    .map(|(segment, ltv, freq)| {
        Record::new()
            .field("segment", segment)
            .field("ltv", ltv)
            .field("frequency", freq)
    })
    .collect();

    let churn = monthly(
        &["overall", "enterprise", "midMarket", "smallBusiness"],
        &[
            &[3.2, 1.1, 2.8, 5.6], &[3.3, 1.2, 2.9, 5.8], &[3.1, 1.0, 2.7, 5.5],
            &[3.0, 1.0, 2.6, 5.3], &[2.8, 0.9, 2.4, 5.0], &[2.9, 0.9, 2.5, 5.1],
            &[2.7, 0.8, 2.3, 4.8], &[2.7, 0.8, 2.3, 4.7], &[2.5, 0.7, 2.1, 4.5],
            &[2.4, 0.7, 2.0, 4.3], &[2.3, 0.6, 1.9, 4.2], &[2.2, 0.6, 1.8, 4.0],
        ],
    );

    ReportPage {
        number: 5,
        title: "Customer Insights".to_string(),
        sections: vec![
            Section::new(
                "age-distribution",
                "Customer Age Distribution",
                chart(ChartKind::Pie, age_distribution, KeySpec::new().name("ageGroup").value("count")),
            )
            .describe("Demographics by age group"),
            Section::new(
                "income-distribution",
                "Customer Income Distribution",
                chart(ChartKind::Pie, income_distribution, KeySpec::new().name("bracket").value("count")),
            )
            .describe("Demographics by income bracket"),
            Section::new(
                "satisfaction-trend",
                "Customer Satisfaction Scores",
                chart(ChartKind::Line, satisfaction, KeySpec::new().x("month").ys(["csat", "nps", "ces"])),
            )
            .describe("CSAT, NPS, and CES trends")
            .wide(),
            Section::new(
                "support-tickets",
                "Customer Support Ticket Analysis",
                chart(ChartKind::StackedBar, tickets, KeySpec::new().x("month").ys(["technical", "billing", "shipping", "product", "other"])),
            )
            .describe("Ticket volume by category")
            .wide(),
            Section::new(
                "clv-segments",
                "Customer Lifetime Value Segments",
                chart(ChartKind::Scatter, clv_segments, KeySpec::new().x("ltv").y("frequency").label("segment")),
            )
            .describe("LTV versus purchase frequency by segment"),
            Section::new(
                "churn-analysis",
                "Customer Churn Rate Analysis",
                chart(ChartKind::StackedArea, churn, KeySpec::new().x("month").ys(["overall", "enterprise", "midMarket", "smallBusiness"])),
            )
            .describe("Monthly churn rate by segment"),
        ],
    }
}

fn operations() -> ReportPage {
    let fulfillment = monthly(
        &["processingTime", "shippingTime", "onTimeDelivery"],
        &[
            &[1.8, 3.4, 91.0], &[1.9, 3.5, 90.0], &[1.7, 3.2, 92.0],
            &[1.7, 3.3, 92.0], &[1.5, 3.0, 94.0], &[1.6, 3.1, 93.0],
            &[1.4, 2.9, 95.0], &[1.5, 2.9, 94.0], &[1.3, 2.7, 96.0],
            &[1.3, 2.6, 96.0], &[1.2, 2.5, 97.0], &[1.1, 2.4, 97.0],
        ],
    );

    let warehouses: Dataset = [
        ("Portland", 84.0, 99.1),
        ("Columbus", 78.0, 98.6),
        ("Atlanta", 91.0, 98.9),
        ("Dallas", 87.0, 99.3),
        ("Reno", 73.0, 98.2),
    ]
    .into_iter()
    .map(|(wh, util, acc)| {
        Record::new()
            .field("warehouse", wh)
            .field("utilization", util)
            .field("pickAccuracy", acc)
    })
    .collect();

    let suppliers: Dataset = [
        ("Vertex Manufacturing", 96.5, 9.2),
        ("Pacific Components", 92.1, 8.7),
        ("Nordic Textiles", 88.4, 8.1),
        ("Delta Plastics", 94.8, 8.9),
        ("Summit Electronics", 90.2, 9.4),
        ("Coastal Packaging", 85.7, 7.6),
    ]
    .into_iter()
    .map(|(supplier, on_time, quality)| {
        Record::new()
            .field("supplier", supplier)
            .field("onTimeRate", on_time)
            .field("qualityScore", quality)
    })
    .collect();

    let logistics = monthly(
        &["transportation", "warehousing", "handling", "packaging"],
        &[
            &[182_000.0, 94_000.0, 48_000.0, 31_000.0],
            &[176_000.0, 92_000.0, 46_000.0, 30_000.0],
            &[191_000.0, 97_000.0, 50_000.0, 32_000.0],
            &[187_000.0, 95_000.0, 49_000.0, 32_000.0],
            &[201_000.0, 101_000.0, 53_000.0, 34_000.0],
            &[194_000.0, 98_000.0, 51_000.0, 33_000.0],
            &[209_000.0, 105_000.0, 55_000.0, 35_000.0],
            &[205_000.0, 103_000.0, 54_000.0, 35_000.0],
            &[216_000.0, 108_000.0, 57_000.0, 36_000.0],
            &[223_000.0, 111_000.0, 58_000.0, 37_000.0],
            &[230_000.0, 114_000.0, 60_000.0, 38_000.0],
            &[239_000.0, 118_000.0, 62_000.0, 40_000.0],
        ],
    );

    let returns: Dataset = [
        ("Defective", 1_840.0),
        ("Wrong Item", 920.0),
        ("Not as Described", 1_260.0),
        ("Changed Mind", 2_110.0),
        ("Arrived Late", 640.0),
        ("Other", 380.0),
    ]
    .into_iter()
    .map(|(reason, count)| Record::new().field("reason", reason).field("count", count))
    .collect();

    let kpi_rows: Dataset = [
        ("Order Accuracy", "99.2%", "99.0%", "On Track"),
        ("Avg Fulfillment Time", "4.1 days", "4.5 days", "On Track"),
        ("Inventory Accuracy", "97.8%", "98.5%", "At Risk"),
        ("Return Rate", "2.9%", "3.0%", "On Track"),
        ("Warehouse Utilization", "82.6%", "85.0%", "At Risk"),
        ("Perfect Order Rate", "94.3%", "95.0%", "At Risk"),
        ("Freight Cost per Order", "$8.42", "$9.00", "On Track"),
        ("Dock-to-Stock Time", "6.2 hrs", "6.0 hrs", "At Risk"),
    ]
    .into_iter()
    .map(|(kpi, current, target, status)| {
        Record::new()
            .field("kpi", kpi)
            .field("current", current)
            .field("target", target)
            .field("status", status)
    })
    .collect();

    let kpi_headers = kpi_rows
        .first()
        .map(|r| r.keys().map(str::to_string).collect())
        .unwrap_or_default();

    ReportPage {
        number: 6,
        title: "Operations".to_string(),
        sections: vec![
            Section::new(
                "fulfillment-metrics",
                "Order Fulfillment Metrics",
                chart(ChartKind::Line, fulfillment, KeySpec::new().x("month").ys(["processingTime", "shippingTime", "onTimeDelivery"])),
            )
            .describe("Processing time, shipping time, and on-time delivery")
            .wide(),
            Section::new(
                "warehouse-performance",
                "Warehouse Performance Metrics",
                chart(ChartKind::GroupedBar, warehouses, KeySpec::new().x("warehouse").ys(["utilization", "pickAccuracy"])),
            )
            .describe("Utilization and pick accuracy per site"),
            Section::new(
                "supplier-scorecard",
                "Supplier Performance Scorecard",
                chart(ChartKind::Scatter, suppliers, KeySpec::new().x("onTimeRate").y("qualityScore").label("supplier")),
            )
            .describe("On-time rate versus quality score"),
            Section::new(
                "logistics-costs",
                "Logistics Cost Breakdown",
                chart(ChartKind::StackedArea, logistics, KeySpec::new().x("month").ys(["transportation", "warehousing", "handling", "packaging"])),
            )
            .describe("Monthly cost by logistics function")
            .wide(),
            Section::new(
                "return-reasons",
                "Product Returns & Reasons",
                chart(ChartKind::Pie, returns, KeySpec::new().name("reason").value("count")),
            )
            .describe("Return volume by stated reason"),
            Section::new(
                "operational-kpis",
                "Key Operational KPIs",
                SectionViz::Table {
                    headers: kpi_headers,
                    rows: kpi_rows,
                },
            )
            .describe("Current versus target operational metrics"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PAGE_COUNT;

    #[test]
    fn test_seed_report_has_six_numbered_pages() {
        let report = seed_report();
        assert_eq!(report.pages.len(), PAGE_COUNT as usize);
        for (i, page) in report.pages.iter().enumerate() {
            assert_eq!(page.number, (i + 1) as u8);
            assert!(!page.sections.is_empty(), "page {} has no sections", page.number);
        }
    }

    #[test]
    fn test_seed_sections_have_data() {
        let report = seed_report();
        for section in report.all_sections() {
            match &section.viz {
                SectionViz::Kpis { kpis } => assert!(!kpis.is_empty()),
                SectionViz::Chart { data, keys, .. } => {
                    assert!(!data.is_empty(), "empty dataset in {}", section.id);
                    assert!(
                        keys.index_key().is_some(),
                        "section {} missing index key",
                        section.id
                    );
                }
                SectionViz::Table { headers, rows } => {
                    assert!(!headers.is_empty());
                    assert!(!rows.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_seed_report_serde_roundtrip() {
        let report = seed_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_funnel_stages_preserve_input_order() {
        let report = seed_report();
        let funnel = report
            .all_sections()
            .find(|s| s.id == "sales-funnel")
            .expect("funnel section");
        if let SectionViz::Chart { data, .. } = &funnel.viz {
            assert_eq!(data[0].display("stage"), "Website Visitors");
            assert_eq!(data[5].display("stage"), "Closed Won");
        } else {
            panic!("funnel section is not a chart");
        }
    }
}
