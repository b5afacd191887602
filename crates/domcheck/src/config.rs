//! Batch configuration

use serde::{Deserialize, Serialize};

use crate::error::{BatchError, BatchResult};

/// Names of the three columns appended to every row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputColumns {
    pub status: String,
    pub score: String,
    pub reason: String,
}

impl Default for OutputColumns {
    fn default() -> Self {
        Self {
            status: "Domain_Check_Status".to_string(),
            score: "Domain_Check_Score".to_string(),
            reason: "Domain_Check_Reason".to_string(),
        }
    }
}

impl OutputColumns {
    /// Status, score, reason
    pub fn names(&self) -> [&str; 3] {
        [&self.status, &self.score, &self.reason]
    }
}

/// Export format for annotated tables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    /// Array of objects keyed by header
    Json,
    /// Excel workbook with a single "Results" sheet
    Xlsx,
}

/// What to compare and how to label the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Header of the column holding company names
    pub company_column: String,
    /// Header of the column holding domains, URLs or email addresses
    pub domain_column: String,
    #[serde(default)]
    pub output: OutputColumns,
    /// Classify rows on the rayon pool (default: true)
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_parallel() -> bool {
    true
}

impl BatchConfig {
    pub fn new(company_column: impl Into<String>, domain_column: impl Into<String>) -> Self {
        Self {
            company_column: company_column.into(),
            domain_column: domain_column.into(),
            output: OutputColumns::default(),
            parallel: default_parallel(),
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_output(mut self, output: OutputColumns) -> Self {
        self.output = output;
        self
    }

    /// Reject blank column names and clashing output headers
    pub fn validate(&self) -> BatchResult<()> {
        if self.company_column.trim().is_empty() {
            return Err(BatchError::InvalidConfig(
                "company column name is empty".to_string(),
            ));
        }
        if self.domain_column.trim().is_empty() {
            return Err(BatchError::InvalidConfig(
                "domain column name is empty".to_string(),
            ));
        }

        let names = self.output.names();
        if names.iter().any(|n| n.trim().is_empty()) {
            return Err(BatchError::InvalidConfig(
                "output column names must not be empty".to_string(),
            ));
        }
        if names[0] == names[1] || names[0] == names[2] || names[1] == names[2] {
            return Err(BatchError::InvalidConfig(format!(
                "output column names must be distinct: {}",
                names.join(", ")
            )));
        }
        for selected in [&self.company_column, &self.domain_column] {
            if names.contains(&selected.as_str()) {
                return Err(BatchError::InvalidConfig(format!(
                    "output column '{selected}' would overwrite an input column"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_columns() {
        let config = BatchConfig::new("Company", "Website");
        assert_eq!(
            config.output.names(),
            ["Domain_Check_Status", "Domain_Check_Score", "Domain_Check_Reason"]
        );
        assert!(config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_columns_rejected() {
        assert!(matches!(
            BatchConfig::new(" ", "Website").validate(),
            Err(BatchError::InvalidConfig(_))
        ));
        assert!(matches!(
            BatchConfig::new("Company", "").validate(),
            Err(BatchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_clashing_output_columns_rejected() {
        let output = OutputColumns {
            status: "Result".to_string(),
            score: "Result".to_string(),
            reason: "Why".to_string(),
        };
        let config = BatchConfig::new("Company", "Website").with_output(output);
        assert!(matches!(config.validate(), Err(BatchError::InvalidConfig(_))));

        let config = BatchConfig::new("Domain_Check_Score", "Website");
        assert!(matches!(config.validate(), Err(BatchError::InvalidConfig(_))));
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: BatchConfig =
            serde_json::from_str(r#"{"company_column":"Company","domain_column":"Email"}"#)
                .unwrap();
        assert!(config.parallel);
        assert_eq!(config.output, OutputColumns::default());
    }
}
