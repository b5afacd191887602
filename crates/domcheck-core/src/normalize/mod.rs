//! Company and domain normalization
//!
//! Turns raw cell values into comparable forms:
//!
//! - **Company**: lowercase, punctuation to spaces, legal suffixes dropped
//!   (`"Acme Holdings, Inc."` → `"acme"`)
//! - **Domain**: email local part, scheme, `www.` and path stripped, then the
//!   second-to-last dotted label kept (`"https://www.acme.com/about"` → `"acme"`)
//!
//! The domain rule is a plain penultimate-label heuristic, not a public
//! suffix lookup: `"example.co.uk"` yields `"co"`.
//!
//! # Example
//!
//! ```rust
//! use domcheck_core::normalize::{normalize_company, normalize_domain};
//!
//! assert_eq!(normalize_company("Globex Corporation"), "globex");
//! assert_eq!(normalize_domain("http://www.globex.com/careers"), "globex");
//! ```

mod company;
mod domain;
mod vocab;

pub use company::{company_tokens, normalize_company};
pub use domain::normalize_domain;
pub use vocab::{is_brand_term, is_legal_suffix, BRAND_TERMS, LEGAL_SUFFIXES};
