use crate::domain::model::{Person, RosterReport};
use crate::utils::error::Result;
use chrono::NaiveDate;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    /// Reference date for age computation; `None` means today.
    fn as_of(&self) -> Option<NaiveDate>;
}

pub trait RosterPipeline: Send + Sync {
    fn extract(&self) -> Result<Vec<Person>>;
    fn transform(&self, people: Vec<Person>) -> Result<RosterReport>;
    fn load(&self, report: RosterReport) -> Result<String>;
}
