//! Company ↔ Domain Match Classification
//!
//! Decides whether a company name and a domain refer to the same
//! organization:
//!
//! - **LikelyMatch**: containment, brand-term or strong fuzzy evidence
//! - **Unsure**: missing input or a middling fuzzy score, needs review
//! - **LikelyNotMatch**: low similarity
//!
//! # Score bands (fuzzy fallback)
//!
//! ```text
//! 0 ─── LikelyNotMatch ─── 70 ─── Unsure ─── 85 ─── LikelyMatch ─── 100
//! ```
//!
//! # Example
//!
//! ```rust
//! use domcheck_core::classify::{classify_opt, MatchReason, MatchStatus};
//!
//! let verdict = classify_opt(Some("Initech"), Some("initrode.com"));
//! assert_eq!(verdict.status, MatchStatus::Unsure);
//! assert_eq!(verdict.reason, MatchReason::WeakFuzzy);
//!
//! let verdict = classify_opt(None, Some("acme.com"));
//! assert_eq!(verdict.reason, MatchReason::MissingInput);
//! ```

pub mod classifier;
mod types;

pub use classifier::{classify, classify_input, classify_opt};
pub use types::{MatchInput, MatchReason, MatchStatus, MatchVerdict};
