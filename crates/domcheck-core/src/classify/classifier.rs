//! Match classifier
//!
//! Runs the rule cascade over one normalized company/domain pair. Rules are
//! tried in order and the first one that fires decides the verdict:
//!
//! 1. Missing input (score: 0)
//! 2. Direct containment (score: 100)
//! 3. Token containment (score: partial ratio, at least 70)
//! 4. Brand-term match (score: 90)
//! 5. Fuzzy fallback (score: best of token-sort and partial ratio)

use tracing::trace;

use super::types::{MatchInput, MatchReason, MatchStatus, MatchVerdict};
use crate::error::InputError;
use crate::normalize::{company_tokens, is_brand_term, normalize_company, normalize_domain};
use crate::similarity::{partial_ratio, token_sort_ratio};

/// Score given when one side contains the other outright
pub const DIRECT_CONTAINMENT_SCORE: u8 = 100;
/// Score given by the brand-term rule
pub const BRAND_MATCH_SCORE: u8 = 90;
/// Minimum partial ratio for the containment and brand rules
pub const CONTAINMENT_FLOOR: u8 = 70;
/// Minimum fuzzy score for a strong match
pub const STRONG_FUZZY_FLOOR: u8 = 85;
/// Minimum fuzzy score for an unsure verdict; anything below is a non-match
pub const WEAK_FUZZY_FLOOR: u8 = 70;

/// Round a 0-100 similarity to an integer score
#[inline]
fn to_score(similarity: f64) -> u8 {
    similarity.round().clamp(0.0, 100.0) as u8
}

/// Substring test via SIMD memmem
#[cfg(feature = "simd")]
#[inline]
fn contains(haystack: &str, needle: &str) -> bool {
    memchr::memmem::find(haystack.as_bytes(), needle.as_bytes()).is_some()
}

/// Pure Rust fallback
#[cfg(not(feature = "simd"))]
#[inline]
fn contains(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}

/// Classify a company name against a domain or email address.
///
/// Empty strings are treated as missing.
pub fn classify(company: &str, domain: &str) -> MatchVerdict {
    classify_input(MatchInput::new(Some(company), Some(domain)))
}

/// Classify cells that may be absent (e.g. null CSV values)
pub fn classify_opt(company: Option<&str>, domain: Option<&str>) -> MatchVerdict {
    classify_input(MatchInput::new(company, domain))
}

/// Classify one row. Total over its input: never fails, never panics.
pub fn classify_input(input: MatchInput<'_>) -> MatchVerdict {
    let (company, domain) = match input.validate() {
        Ok(fields) => fields,
        Err(err) => {
            trace!(%err, "row skipped");
            return err.into();
        }
    };

    let c = normalize_company(company);
    if c.is_empty() {
        trace!(company, "company normalized to nothing");
        return InputError::MissingCompany.into();
    }
    let d = normalize_domain(domain);

    let verdict = run_cascade(&c, &d, company);
    trace!(
        company = %c,
        domain = %d,
        score = verdict.score,
        reason = %verdict.reason,
        "classified"
    );
    verdict
}

/// Rules 2-5 over the normalized forms. `raw_company` feeds the brand rule.
fn run_cascade(c: &str, d: &str, raw_company: &str) -> MatchVerdict {
    // 2. Direct containment
    if let Some(v) = direct_containment(c, d) {
        return v;
    }

    // 3. Token containment
    if let Some(v) = token_containment(c, d) {
        return v;
    }

    // 4. Brand-term heuristic
    if let Some(v) = brand_term_match(c, d, raw_company) {
        return v;
    }

    // 5. Fuzzy fallback
    fuzzy_fallback(c, d)
}

fn direct_containment(c: &str, d: &str) -> Option<MatchVerdict> {
    if d.is_empty() {
        return None;
    }

    let squashed = c.replace(' ', "");
    if contains(&squashed, d) || contains(d, &squashed) {
        Some(MatchVerdict::new(
            MatchStatus::LikelyMatch,
            DIRECT_CONTAINMENT_SCORE,
            MatchReason::DirectContainment,
        ))
    } else {
        None
    }
}

fn token_containment(c: &str, d: &str) -> Option<MatchVerdict> {
    let overlaps = d.split_whitespace().any(|word| contains(c, word))
        || c.split_whitespace().any(|word| contains(d, word));
    if !overlaps {
        return None;
    }

    let score = to_score(partial_ratio(c, d));
    if score >= CONTAINMENT_FLOOR {
        Some(MatchVerdict::new(
            MatchStatus::LikelyMatch,
            score,
            MatchReason::TokenContainment,
        ))
    } else {
        None
    }
}

/// Brand terms are looked up in the company's tokens *before* legal-suffix
/// removal, so words like "group" and "holdings" still count here.
fn brand_term_match(c: &str, d: &str, raw_company: &str) -> Option<MatchVerdict> {
    let shared = company_tokens(raw_company)
        .iter()
        .any(|token| is_brand_term(token) && contains(d, token));
    if !shared {
        return None;
    }

    if to_score(partial_ratio(c, d)) >= CONTAINMENT_FLOOR {
        Some(MatchVerdict::new(
            MatchStatus::LikelyMatch,
            BRAND_MATCH_SCORE,
            MatchReason::BrandSuffixMatch,
        ))
    } else {
        None
    }
}

fn fuzzy_fallback(c: &str, d: &str) -> MatchVerdict {
    let full = token_sort_ratio(c, d);
    let partial = partial_ratio(c, d);
    fuzzy_verdict(to_score(full.max(partial)))
}

/// Map a fuzzy score onto its band. Lower edges are inclusive.
pub(crate) fn fuzzy_verdict(score: u8) -> MatchVerdict {
    if score >= STRONG_FUZZY_FLOOR {
        MatchVerdict::new(MatchStatus::LikelyMatch, score, MatchReason::StrongFuzzy)
    } else if score >= WEAK_FUZZY_FLOOR {
        MatchVerdict::new(MatchStatus::Unsure, score, MatchReason::WeakFuzzy)
    } else {
        MatchVerdict::new(MatchStatus::LikelyNotMatch, score, MatchReason::LowSimilarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn verdict(status: MatchStatus, score: u8, reason: MatchReason) -> MatchVerdict {
        MatchVerdict::new(status, score, reason)
    }

    #[test]
    fn test_missing_input() {
        let missing = verdict(MatchStatus::Unsure, 0, MatchReason::MissingInput);
        assert_eq!(classify_opt(None, Some("acme.com")), missing);
        assert_eq!(classify_opt(Some("Acme Inc"), None), missing);
        assert_eq!(classify("", ""), missing);
        assert_eq!(classify("Acme", ""), missing);
    }

    #[test]
    fn test_company_of_only_suffixes_is_missing() {
        let missing = verdict(MatchStatus::Unsure, 0, MatchReason::MissingInput);
        assert_eq!(classify("Holdings Ltd", "holdings.com"), missing);
        assert_eq!(classify("   ", "acme.com"), missing);
        assert_eq!(classify("&&", "acme.com"), missing);
    }

    #[test]
    fn test_direct_containment() {
        let direct = verdict(
            MatchStatus::LikelyMatch,
            100,
            MatchReason::DirectContainment,
        );
        assert_eq!(classify("Acme Corp", "www.acme.com"), direct);
        assert_eq!(classify("Acme Holdings, Inc.", "jane@Sub.Acme.COM"), direct);
        assert_eq!(classify("Stark Industries", "starkind.com"), direct);
        assert_eq!(classify("Big Blue", "bigbluebubble.com"), direct);
    }

    #[test]
    fn test_direct_containment_wins_over_low_fuzzy() {
        // Fuzzy alone would give 75 ("a b c" vs "abc")
        assert_eq!(to_score(token_sort_ratio("a b c", "abc")), 75);
        assert_eq!(
            classify("A B C Corp", "abc.com"),
            verdict(MatchStatus::LikelyMatch, 100, MatchReason::DirectContainment)
        );
    }

    #[test]
    fn test_token_containment() {
        assert_eq!(
            classify("Ace Hardware", "acehw.com"),
            verdict(MatchStatus::LikelyMatch, 80, MatchReason::TokenContainment)
        );
        assert_eq!(
            classify("Vertex Therapeutics", "vrtxtherapeutics.com"),
            verdict(MatchStatus::LikelyMatch, 88, MatchReason::TokenContainment)
        );
    }

    #[test]
    fn test_token_containment_below_floor_falls_through() {
        // "star" is shared but the strings are otherwise unrelated
        assert_eq!(
            classify("North Star Mining", "starbucks.com"),
            verdict(MatchStatus::LikelyNotMatch, 44, MatchReason::LowSimilarity)
        );
    }

    #[test]
    fn test_token_containment_floor_is_inclusive() {
        // "initech" is shared in both pairs; only the partial score differs
        assert_eq!(to_score(partial_ratio("contoso initech", "ejyvxminitech")), 70);
        assert_eq!(
            classify("Contoso Initech", "ejyvxminitech.com"),
            verdict(MatchStatus::LikelyMatch, 70, MatchReason::TokenContainment)
        );

        assert_eq!(to_score(partial_ratio("initech northwind", "initechoalxtkj")), 69);
        assert_eq!(
            classify("Initech Northwind", "initechoalxtkj.com"),
            verdict(MatchStatus::LikelyNotMatch, 69, MatchReason::LowSimilarity)
        );
    }

    #[test]
    fn test_brand_suffix_match() {
        // "holdings" is dropped from the normalized name but still counts as a brand term
        assert_eq!(
            classify("Meridian Holdings", "meridanholdings.com"),
            verdict(MatchStatus::LikelyMatch, 90, MatchReason::BrandSuffixMatch)
        );
    }

    #[test]
    fn test_brand_term_needs_partial_score() {
        let v = classify("Orion Group", "bestgroup.com");
        assert_ne!(v.reason, MatchReason::BrandSuffixMatch);
    }

    #[test]
    fn test_fuzzy_bands() {
        assert_eq!(
            classify("Globex Holdings", "globx.com"),
            verdict(MatchStatus::LikelyMatch, 91, MatchReason::StrongFuzzy)
        );
        assert_eq!(
            classify("Initech", "initrode.com"),
            verdict(MatchStatus::Unsure, 73, MatchReason::WeakFuzzy)
        );
        assert_eq!(
            classify("Hooli", "piedpiper.com"),
            verdict(MatchStatus::LikelyNotMatch, 29, MatchReason::LowSimilarity)
        );
    }

    #[test]
    fn test_fuzzy_boundaries_end_to_end() {
        assert_eq!(
            classify("Massive Virtucon", "asivevietucon.com"),
            verdict(MatchStatus::LikelyMatch, 85, MatchReason::StrongFuzzy)
        );
        assert_eq!(
            classify("Northwind", "nokrthwiad.com"),
            verdict(MatchStatus::Unsure, 84, MatchReason::WeakFuzzy)
        );
        assert_eq!(
            classify("Yonder Hooli", "yaonerooli.com"),
            verdict(MatchStatus::Unsure, 70, MatchReason::WeakFuzzy)
        );
        assert_eq!(
            classify("Rekall Fabrikam", "rekkllfbrukam.com"),
            verdict(MatchStatus::LikelyNotMatch, 69, MatchReason::LowSimilarity)
        );
    }

    #[test]
    fn test_fuzzy_verdict_edges() {
        assert_eq!(fuzzy_verdict(100).reason, MatchReason::StrongFuzzy);
        assert_eq!(fuzzy_verdict(85).status, MatchStatus::LikelyMatch);
        assert_eq!(fuzzy_verdict(84).status, MatchStatus::Unsure);
        assert_eq!(fuzzy_verdict(70).reason, MatchReason::WeakFuzzy);
        assert_eq!(fuzzy_verdict(69).status, MatchStatus::LikelyNotMatch);
        assert_eq!(fuzzy_verdict(0).reason, MatchReason::LowSimilarity);
    }

    #[test]
    fn test_public_suffix_limitation_is_kept() {
        // "example.co.uk" normalizes to "co", which shares nothing with "example"
        assert_eq!(
            classify("Example Ltd", "example.co.uk"),
            verdict(MatchStatus::LikelyNotMatch, 0, MatchReason::LowSimilarity)
        );
    }

    #[test]
    fn test_empty_domain_label() {
        assert_eq!(
            classify("Acme", "jane@"),
            verdict(MatchStatus::LikelyNotMatch, 0, MatchReason::LowSimilarity)
        );
    }

    #[test]
    fn test_deterministic() {
        for (company, domain) in [("Initech", "initrode.com"), ("Acme", "acme.com")] {
            assert_eq!(classify(company, domain), classify(company, domain));
        }
    }
}
