//! # insight-components
//!
//! UI components for the Insight analytics dashboard: page shell,
//! section cards, KPI grid, searchable data table, chat panel.

pub mod chat;
pub mod dashboard;
pub mod data_table;
pub mod kpi;
pub mod navigation;

pub use chat::*;
pub use dashboard::*;
pub use data_table::*;
pub use kpi::*;
pub use navigation::*;
