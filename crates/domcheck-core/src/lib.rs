//! domcheck Core Engine
//!
//! Decides whether a company name and a domain (or email address) belong to
//! the same organization. Everything in this crate is pure and synchronous:
//! one row in, one [`MatchVerdict`] out, no I/O and no shared mutable state.
//!
//! # Features
//!
//! - `simd` - SIMD-accelerated substring search via memchr for containment rules
//!
//! # Example
//!
//! ```rust
//! use domcheck_core::{classify, normalize_company, normalize_domain, MatchReason, MatchStatus};
//!
//! assert_eq!(normalize_company("Acme Holdings, Inc."), "acme");
//! assert_eq!(normalize_domain("jane@Sub.Acme.COM"), "acme");
//!
//! let verdict = classify("Acme Corp", "www.acme.com");
//! assert_eq!(verdict.status, MatchStatus::LikelyMatch);
//! assert_eq!(verdict.score, 100);
//! assert_eq!(verdict.reason, MatchReason::DirectContainment);
//! ```

pub mod classify;
pub mod error;
pub mod normalize;
pub mod similarity;

// Re-export main types at crate root
pub use classify::{
    classify, classify_input, classify_opt, MatchInput, MatchReason, MatchStatus, MatchVerdict,
};
pub use error::{InputError, InputResult, ScoreOutOfRange};
pub use normalize::{company_tokens, normalize_company, normalize_domain};
pub use similarity::{partial_ratio, ratio, token_sort_ratio};
