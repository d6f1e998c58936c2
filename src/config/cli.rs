use crate::core::report::OutputFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "student-records")]
#[command(about = "Load a roster of students, instructors and courses and print a report")]
pub struct CliConfig {
    /// TOML roster file; the built-in demo roster is used when omitted
    #[arg(long)]
    pub roster: Option<String>,

    /// Report format: text, json or csv
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(roster) = &self.roster {
            validate_non_empty_string("roster", roster)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["student-records"]);
        assert!(config.roster.is_none());
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from([
            "student-records",
            "--roster",
            "school.toml",
            "--format",
            "csv",
            "--verbose",
        ]);
        assert_eq!(config.roster.as_deref(), Some("school.toml"));
        assert_eq!(config.format, OutputFormat::Csv);
        assert!(config.verbose);
        assert!(!config.log_json);
    }

    #[test]
    fn test_blank_roster_path_is_rejected() {
        let config = CliConfig::parse_from(["student-records", "--roster", ""]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(CliConfig::try_parse_from(["student-records", "--format", "xml"]).is_err());
    }
}
