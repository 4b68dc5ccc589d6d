pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::storage::LocalStorage;
pub use crate::core::{engine::RosterEngine, pipeline::FileRosterPipeline};
pub use domain::model::{Person, PersonRecord, ReportRow, RosterReport};
pub use utils::error::{Result, RosterError};
