use crate::core::{
    ConfigProvider, Person, PersonRecord, ReportRow, RosterPipeline, RosterReport, Storage,
};
use crate::utils::error::{Result, RosterError};
use chrono::Local;
use std::path::Path;

pub const CSV_REPORT_FILENAME: &str = "roster_report.csv";
pub const JSON_REPORT_FILENAME: &str = "roster_report.json";

pub struct FileRosterPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> FileRosterPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn parse_csv(&self, data: &[u8]) -> Result<Vec<PersonRecord>> {
        let mut reader = csv::Reader::from_reader(data);
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: PersonRecord = row?;
            records.push(record);
        }
        Ok(records)
    }

    fn parse_json(&self, data: &[u8]) -> Result<Vec<PersonRecord>> {
        let records: Vec<PersonRecord> = serde_json::from_slice(data)?;
        Ok(records)
    }
}

fn render_csv(rows: &[ReportRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| RosterError::ProcessingError {
            message: format!("Failed to flush CSV report: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| RosterError::ProcessingError {
        message: format!("CSV report is not valid UTF-8: {}", e),
    })
}

impl<S: Storage, C: ConfigProvider> RosterPipeline for FileRosterPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Person>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading roster from: {}", input_path);
        let data = self.storage.read_file(input_path)?;

        let extension = Path::new(input_path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        let records = match extension {
            "csv" => self.parse_csv(&data)?,
            "json" => self.parse_json(&data)?,
            other => {
                return Err(RosterError::InvalidConfigValueError {
                    field: "input".to_string(),
                    value: input_path.to_string(),
                    reason: format!(
                        "Unsupported roster format '{}'. Allowed extensions: csv, json",
                        other
                    ),
                })
            }
        };

        let mut people = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            // Record numbers are 1-based to match what a user sees in the file.
            let person = Person::try_from(record).map_err(|e| RosterError::ProcessingError {
                message: format!("Record {} is not a valid person: {}", index + 1, e),
            })?;
            people.push(person);
        }

        Ok(people)
    }

    fn transform(&self, people: Vec<Person>) -> Result<RosterReport> {
        let as_of = self
            .config
            .as_of()
            .unwrap_or_else(|| Local::now().date_naive());
        tracing::debug!("Computing ages as of {}", as_of);

        let rows: Vec<ReportRow> = people
            .iter()
            .map(|person| ReportRow::for_person(person, as_of))
            .collect();

        let csv_output = render_csv(&rows)?;
        let json_output = serde_json::to_string_pretty(&rows)?;

        Ok(RosterReport {
            rows,
            csv_output,
            json_output,
        })
    }

    fn load(&self, report: RosterReport) -> Result<String> {
        let output_dir = self.config.output_path();

        let csv_path = Path::new(output_dir).join(CSV_REPORT_FILENAME);
        self.storage
            .write_file(&csv_path.to_string_lossy(), report.csv_output.as_bytes())?;

        let json_path = Path::new(output_dir).join(JSON_REPORT_FILENAME);
        self.storage
            .write_file(&json_path.to_string_lossy(), report.json_output.as_bytes())?;

        Ok(output_dir.to_string())
    }
}
