//! Cross-module tests for the public classification API

use domcheck_core::{
    classify, classify_opt, normalize_company, normalize_domain, MatchReason, MatchStatus,
};

const COMPANIES: &[&str] = &[
    "",
    "   ",
    "Acme Corp",
    "Acme Holdings, Inc.",
    "A B C Corp",
    "Globex Holdings",
    "Meridian Holdings",
    "Nestlé S.A.",
    "North Star Mining",
    "Holdings Ltd",
    "Vertex Therapeutics",
    "株式会社",
];

const DOMAINS: &[&str] = &[
    "",
    "@",
    "acme.com",
    "www.acme.com",
    "https://globex.com/about",
    "jane@Sub.Acme.COM",
    "abc.com",
    "example.co.uk",
    "meridanholdings.com",
    "starbucks.com",
    "localhost",
    "ドメイン.jp",
];

#[test]
fn test_score_and_status_always_valid() {
    for company in COMPANIES {
        for domain in DOMAINS {
            let verdict = classify(company, domain);
            assert!(verdict.score <= 100, "{company:?} / {domain:?}: {verdict:?}");
            assert!(MatchStatus::ALL.contains(&verdict.status));
        }
    }
}

#[test]
fn test_classify_is_deterministic() {
    for company in COMPANIES {
        for domain in DOMAINS {
            assert_eq!(classify(company, domain), classify(company, domain));
        }
    }
}

#[test]
fn test_missing_input_always_unsure_zero() {
    for company in COMPANIES {
        for domain in DOMAINS {
            let verdict = classify(company, domain);
            if verdict.reason == MatchReason::MissingInput {
                assert_eq!(verdict.status, MatchStatus::Unsure);
                assert_eq!(verdict.score, 0);
            }
        }
    }
    assert_eq!(classify_opt(None, None).reason, MatchReason::MissingInput);
}

#[test]
fn test_status_follows_reason() {
    for company in COMPANIES {
        for domain in DOMAINS {
            let verdict = classify(company, domain);
            let expected = match verdict.reason {
                MatchReason::MissingInput | MatchReason::WeakFuzzy => MatchStatus::Unsure,
                MatchReason::LowSimilarity => MatchStatus::LikelyNotMatch,
                _ => MatchStatus::LikelyMatch,
            };
            assert_eq!(verdict.status, expected, "{company:?} / {domain:?}");
        }
    }
}

#[test]
fn test_normalization_is_idempotent() {
    for company in COMPANIES {
        let once = normalize_company(company);
        assert_eq!(normalize_company(&once), once);
    }
}

#[test]
fn test_normalized_company_is_ascii() {
    for company in COMPANIES {
        let normalized = normalize_company(company);
        assert!(normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '));
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(normalize_company("Acme Holdings, Inc."), "acme");
    assert_eq!(normalize_domain("jane@Sub.Acme.COM"), "acme");

    let verdict = classify("Acme Corp", "www.acme.com");
    assert_eq!(verdict.status, MatchStatus::LikelyMatch);
    assert_eq!(verdict.score, 100);
    assert_eq!(verdict.reason, MatchReason::DirectContainment);
}
