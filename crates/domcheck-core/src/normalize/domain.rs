//! Domain / email normalization

/// Reduce a domain, URL or email address to its second-level label.
///
/// Steps, in order:
/// 1. lowercase and trim
/// 2. keep everything after the last `@` (emails have no scheme, so this runs first)
/// 3. strip a leading `http://` or `https://`
/// 4. strip a leading `www.`
/// 5. cut at the first `/`
/// 6. with two or more dotted labels return the second-to-last, otherwise the whole string
pub fn normalize_domain(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let mut host = lowered.trim();

    if let Some(at) = host.rfind('@') {
        host = &host[at + 1..];
    }

    host = host
        .strip_prefix("http://")
        .or_else(|| host.strip_prefix("https://"))
        .unwrap_or(host);
    host = host.strip_prefix("www.").unwrap_or(host);

    if let Some(slash) = host.find('/') {
        host = &host[..slash];
    }

    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() >= 2 {
        labels[labels.len() - 2].to_string()
    } else {
        host.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_domain() {
        assert_eq!(normalize_domain("acme.com"), "acme");
        assert_eq!(normalize_domain("  ACME.COM  "), "acme");
    }

    #[test]
    fn test_url_parts_stripped() {
        assert_eq!(normalize_domain("https://www.acme.com/about?x=1"), "acme");
        assert_eq!(normalize_domain("http://acme.io"), "acme");
        assert_eq!(normalize_domain("www.acme.com"), "acme");
    }

    #[test]
    fn test_email_extraction() {
        assert_eq!(normalize_domain("jane@Sub.Acme.COM"), "acme");
        assert_eq!(normalize_domain("\"odd@name\"@globex.net"), "globex");
    }

    #[test]
    fn test_subdomains_use_penultimate_label() {
        assert_eq!(normalize_domain("mail.eu.initech.com"), "initech");
    }

    #[test]
    fn test_multi_label_public_suffix_limitation() {
        // Penultimate label, not a public suffix lookup
        assert_eq!(normalize_domain("example.co.uk"), "co");
        assert_eq!(normalize_domain("https://www.example.com.au/"), "com");
    }

    #[test]
    fn test_single_label_returned_whole() {
        assert_eq!(normalize_domain("localhost"), "localhost");
        assert_eq!(normalize_domain("https://intranet/home"), "intranet");
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(normalize_domain(""), "");
        assert_eq!(normalize_domain("   "), "");
        assert_eq!(normalize_domain("jane@"), "");
    }
}
