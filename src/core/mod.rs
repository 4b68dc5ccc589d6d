pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{Person, PersonRecord, ReportRow, RosterReport};
pub use crate::domain::ports::{ConfigProvider, RosterPipeline, Storage};
pub use crate::utils::error::Result;
