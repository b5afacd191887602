//! Row-by-row classification of a dataset
//!
//! Each row is classified independently, so the rayon path and the
//! sequential path produce identical output in the same order.

use domcheck_core::{classify_opt, MatchStatus, MatchVerdict};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::BatchConfig;
use crate::dataset::Dataset;
use crate::error::{BatchError, BatchResult};

/// Verdict counts per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub likely_match: usize,
    pub unsure: usize,
    pub likely_not_match: usize,
}

impl Summary {
    fn from_verdicts(verdicts: &[MatchVerdict]) -> Self {
        let mut summary = Self::default();
        for verdict in verdicts {
            match verdict.status {
                MatchStatus::LikelyMatch => summary.likely_match += 1,
                MatchStatus::Unsure => summary.unsure += 1,
                MatchStatus::LikelyNotMatch => summary.likely_not_match += 1,
            }
        }
        summary
    }

    pub fn count(&self, status: MatchStatus) -> usize {
        match status {
            MatchStatus::LikelyMatch => self.likely_match,
            MatchStatus::Unsure => self.unsure,
            MatchStatus::LikelyNotMatch => self.likely_not_match,
        }
    }

    pub fn total(&self) -> usize {
        self.likely_match + self.unsure + self.likely_not_match
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = MatchStatus::ALL
            .iter()
            .map(|status| format!("{}: {}", status.label(), self.count(*status)))
            .collect();
        write!(f, "{}", parts.join(" · "))
    }
}

/// Input table with the three result columns filled in
#[derive(Debug, Clone)]
pub struct AnnotatedDataset {
    dataset: Dataset,
    verdicts: Vec<MatchVerdict>,
    company_idx: usize,
    domain_idx: usize,
    output_idx: [usize; 3],
}

impl AnnotatedDataset {
    /// Full table including the result columns
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// One verdict per row, in row order
    pub fn verdicts(&self) -> &[MatchVerdict] {
        &self.verdicts
    }

    pub fn summary(&self) -> Summary {
        Summary::from_verdicts(&self.verdicts)
    }

    /// First `limit` rows, reduced to the company, domain and result columns
    pub fn preview(&self, limit: usize) -> Dataset {
        let [status, score, reason] = self.output_idx;
        self.dataset
            .select(&[self.company_idx, self.domain_idx, status, score, reason], limit)
    }

    pub fn into_dataset(self) -> Dataset {
        self.dataset
    }
}

/// Treat empty cells as absent values
fn cell(row: &[String], idx: usize) -> Option<&str> {
    row.get(idx).map(String::as_str).filter(|s| !s.is_empty())
}

/// Classify every row of `dataset` and append the result columns.
///
/// Fails before classifying anything when the config is invalid, the dataset
/// has no rows, or a selected column is missing. An existing column with an
/// output name is overwritten in place.
pub fn annotate(dataset: Dataset, config: &BatchConfig) -> BatchResult<AnnotatedDataset> {
    config.validate()?;

    if dataset.is_empty() {
        return Err(BatchError::EmptyDataset);
    }

    let company_idx = dataset.column_index(&config.company_column)?;
    let domain_idx = dataset.column_index(&config.domain_column)?;

    debug!(
        rows = dataset.len(),
        parallel = config.parallel,
        company = %config.company_column,
        domain = %config.domain_column,
        "classifying rows"
    );

    let classify_row =
        |row: &Vec<String>| classify_opt(cell(row, company_idx), cell(row, domain_idx));

    let verdicts: Vec<MatchVerdict> = if config.parallel {
        dataset.rows().par_iter().map(classify_row).collect()
    } else {
        dataset.rows().iter().map(classify_row).collect()
    };

    let mut dataset = dataset;
    let output_idx = [
        dataset.ensure_column(&config.output.status),
        dataset.ensure_column(&config.output.score),
        dataset.ensure_column(&config.output.reason),
    ];

    for (row, verdict) in dataset.rows_mut().iter_mut().zip(&verdicts) {
        row[output_idx[0]] = verdict.status.label().to_string();
        row[output_idx[1]] = verdict.score.to_string();
        row[output_idx[2]] = verdict.reason.label().to_string();
    }

    let annotated = AnnotatedDataset {
        dataset,
        verdicts,
        company_idx,
        domain_idx,
        output_idx,
    };

    info!(rows = annotated.verdicts.len(), "{}", annotated.summary());
    Ok(annotated)
}
