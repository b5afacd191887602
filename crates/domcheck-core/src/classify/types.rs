//! Classification types

use serde::{Deserialize, Serialize};

use crate::error::{InputError, InputResult, ScoreOutOfRange};

/// One row to classify. Either side may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchInput<'a> {
    pub company: Option<&'a str>,
    pub domain: Option<&'a str>,
}

impl<'a> MatchInput<'a> {
    pub fn new(company: Option<&'a str>, domain: Option<&'a str>) -> Self {
        Self { company, domain }
    }

    /// Both fields, or the first one that is absent/empty
    pub fn validate(&self) -> InputResult<(&'a str, &'a str)> {
        let company = self
            .company
            .filter(|c| !c.is_empty())
            .ok_or(InputError::MissingCompany)?;
        let domain = self
            .domain
            .filter(|d| !d.is_empty())
            .ok_or(InputError::MissingDomain)?;
        Ok((company, domain))
    }
}

/// Overall verdict for a company/domain pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    LikelyMatch,
    /// Needs a human to look at it
    Unsure,
    LikelyNotMatch,
}

impl MatchStatus {
    pub const ALL: [MatchStatus; 3] = [Self::LikelyMatch, Self::Unsure, Self::LikelyNotMatch];

    /// Label shown to reviewers in tables and exports
    pub fn label(&self) -> &'static str {
        match self {
            Self::LikelyMatch => "Likely Match",
            Self::Unsure => "Unsure – Please Check",
            Self::LikelyNotMatch => "Likely NOT Match",
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which rule of the cascade produced the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    /// A field was empty, or the company normalized to nothing
    MissingInput,
    /// Domain label and squashed company name contain one another
    DirectContainment,
    /// A word of one side appears inside the other and the partial score held up
    TokenContainment,
    /// Shared industry term (bio, pharma, holdings...) with a decent partial score
    BrandSuffixMatch,
    StrongFuzzy,
    WeakFuzzy,
    LowSimilarity,
}

impl MatchReason {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MissingInput => "missing input",
            Self::DirectContainment => "direct containment",
            Self::TokenContainment => "token containment",
            Self::BrandSuffixMatch => "brand suffix match",
            Self::StrongFuzzy => "strong fuzzy",
            Self::WeakFuzzy => "weak fuzzy",
            Self::LowSimilarity => "low similarity",
        }
    }
}

impl std::fmt::Display for MatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawVerdict")]
pub struct MatchVerdict {
    pub status: MatchStatus,
    /// Confidence, 0-100
    pub score: u8,
    pub reason: MatchReason,
}

/// Wire form of [`MatchVerdict`] before the score range is checked
#[derive(Deserialize)]
struct RawVerdict {
    status: MatchStatus,
    score: u8,
    reason: MatchReason,
}

impl TryFrom<RawVerdict> for MatchVerdict {
    type Error = ScoreOutOfRange;

    fn try_from(raw: RawVerdict) -> Result<Self, Self::Error> {
        if raw.score > 100 {
            return Err(ScoreOutOfRange(raw.score));
        }
        Ok(Self::new(raw.status, raw.score, raw.reason))
    }
}

impl MatchVerdict {
    pub(crate) fn new(status: MatchStatus, score: u8, reason: MatchReason) -> Self {
        debug_assert!(score <= 100);
        Self {
            status,
            score,
            reason,
        }
    }

    pub(crate) fn missing_input() -> Self {
        Self::new(MatchStatus::Unsure, 0, MatchReason::MissingInput)
    }

    pub fn is_match(&self) -> bool {
        self.status == MatchStatus::LikelyMatch
    }
}

impl From<InputError> for MatchVerdict {
    fn from(_: InputError) -> Self {
        Self::missing_input()
    }
}
