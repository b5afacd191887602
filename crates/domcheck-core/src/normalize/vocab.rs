//! Fixed vocabularies shared by the normalizer and the classifier
//!
//! Both sets are built once on first use and only read afterwards.

use ahash::AHashSet;
use lazy_static::lazy_static;

/// Corporate entity-type tokens removed from company names.
///
/// `s.r.l` can never survive punctuation stripping; it is listed so the
/// vocabulary reads the same as the published one.
pub const LEGAL_SUFFIXES: &[&str] = &[
    "ltd", "limited", "co", "company", "corp", "corporation", "inc", "incorporated",
    "plc", "public", "llc", "lp", "llp", "ulc", "pc", "pllc", "sa", "ag", "nv", "se", "bv",
    "oy", "ab", "aps", "as", "kft", "zrt", "rt", "sarl", "sas", "spa", "gmbh", "ug", "bvba",
    "cvba", "nvsa", "pte", "pty", "bhd", "sdn", "kabushiki", "kaisha", "kk", "godo", "dk",
    "dmcc", "pjsc", "psc", "jsc", "ltda", "srl", "s.r.l", "group", "holdings",
    "limitedpartnership",
];

/// Industry/descriptor words that count as a weak positive signal when they
/// show up in both the company name and the domain.
pub const BRAND_TERMS: &[&str] = &[
    "bio",
    "pharma",
    "therapeutics",
    "health",
    "medical",
    "labs",
    "tech",
    "group",
    "holdings",
    "capital",
    "ventures",
    "partners",
];

lazy_static! {
    static ref LEGAL_SUFFIX_SET: AHashSet<&'static str> = LEGAL_SUFFIXES.iter().copied().collect();
    static ref BRAND_TERM_SET: AHashSet<&'static str> = BRAND_TERMS.iter().copied().collect();
}

/// Exact, case-sensitive membership test against [`LEGAL_SUFFIXES`].
/// Callers pass already-lowercased tokens.
#[inline]
pub fn is_legal_suffix(token: &str) -> bool {
    LEGAL_SUFFIX_SET.contains(token)
}

/// Exact, case-sensitive membership test against [`BRAND_TERMS`].
#[inline]
pub fn is_brand_term(token: &str) -> bool {
    BRAND_TERM_SET.contains(token)
}
