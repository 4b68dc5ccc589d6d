use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "person-roster")]
#[command(about = "Derives full names and ages from a person roster file")]
pub struct CliConfig {
    /// Roster file to read (.csv or .json)
    #[arg(long)]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output: String,

    /// Compute ages as of this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input", &self.input)?;
        validation::validate_file_extension("input", &self.input, &["csv", "json"])?;
        validation::validate_path("output", &self.output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(input: &str) -> CliConfig {
        CliConfig {
            input: input.to_string(),
            output: "./output".to_string(),
            as_of: None,
            verbose: false,
        }
    }

    #[test]
    fn test_validate_accepts_csv_and_json_input() {
        assert!(config("roster.csv").validate().is_ok());
        assert!(config("roster.json").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unsupported_input() {
        assert!(config("roster.txt").validate().is_err());
        assert!(config("").validate().is_err());
    }
}
