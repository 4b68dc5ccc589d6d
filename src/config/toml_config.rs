use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub roster: RosterMeta,
    pub source: SourceConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub output_path: String,
    /// ISO date string (quoted in the TOML file), e.g. "2024-06-15".
    pub as_of: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RosterError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RosterError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    pub fn parsed_as_of(&self) -> Result<Option<NaiveDate>> {
        match self.report.as_of.as_deref() {
            None => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|e| RosterError::InvalidConfigValueError {
                    field: "report.as_of".to_string(),
                    value: raw.to_string(),
                    reason: format!("Invalid date: {}", e),
                }),
        }
    }
}

/// Replaces `${VAR_NAME}` with the value of the environment variable, leaving
/// the placeholder in place when the variable is unset.
fn substitute_env_vars(content: &str) -> String {
    let re = regex::Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        self.source.path.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        &self.report.output_path
    }

    fn as_of(&self) -> Option<NaiveDate> {
        // validate() has already checked parseability.
        self.parsed_as_of().ok().flatten()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("roster.name", &self.roster.name)?;

        let source_path = validation::validate_required_field("source.path", &self.source.path)?;
        validation::validate_path("source.path", source_path)?;
        validation::validate_file_extension("source.path", source_path, &["csv", "json"])?;

        validation::validate_path("report.output_path", &self.report.output_path)?;
        self.parsed_as_of()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[roster]
name = "team-roster"
description = "Engineering team roster"

[source]
path = "./roster.csv"

[report]
output_path = "./report"
as_of = "2024-06-15"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.roster.name, "team-roster");
        assert_eq!(config.input_path(), "./roster.csv");
        assert_eq!(config.output_path(), "./report");
        assert_eq!(
            config.as_of(),
            Some(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_ROSTER_PATH", "./from-env.json");

        let toml_content = r#"
[roster]
name = "env-roster"

[source]
path = "${TEST_ROSTER_PATH}"

[report]
output_path = "./report"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input_path(), "./from-env.json");

        std::env::remove_var("TEST_ROSTER_PATH");
    }

    #[test]
    fn test_validation_rejects_missing_source_path() {
        let toml_content = r#"
[roster]
name = "broken"

[source]

[report]
output_path = "./report"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_as_of_date() {
        let toml_content = r#"
[roster]
name = "broken"

[source]
path = "./roster.csv"

[report]
output_path = "./report"
as_of = "not-a-date"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[roster]
name = "file-roster"

[source]
path = "./roster.json"

[report]
output_path = "./report"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.roster.name, "file-roster");
        assert!(config.validate().is_ok());
    }
}
