//! Syntactic format checks for URL and email fields.
//!
//! Only well-formedness is checked; nothing here resolves hosts or contacts
//! mailboxes.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Longest URL accepted, matching what common browsers handle.
pub const MAX_URL_LENGTH: usize = 2083;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_EMAIL_LOCAL_LENGTH: usize = 64;

/// Dot-atom local part; dotted domain of LDH labels ending in an alpha TLD.
const EMAIL_PATTERN: &str = r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$";

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN));

/// Return `true` when `raw` is a syntactically valid email address.
///
/// # Examples
/// ```
/// use backend::domain::schema::is_valid_email;
///
/// assert!(is_valid_email("alex@example.dev"));
/// assert!(!is_valid_email("alex@localhost"));
/// ```
#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    if raw.len() > MAX_EMAIL_LENGTH {
        return false;
    }
    let Some((local, _domain)) = raw.rsplit_once('@') else {
        return false;
    };
    local.len() <= MAX_EMAIL_LOCAL_LENGTH && EMAIL_RE.as_ref().is_ok_and(|re| re.is_match(raw))
}

/// Return `true` when `raw` is an absolute `http`/`https` URL with a host.
///
/// # Examples
/// ```
/// use backend::domain::schema::is_valid_http_url;
///
/// assert!(is_valid_http_url("https://github.com/example"));
/// assert!(!is_valid_http_url("ftp://example.com"));
/// ```
#[must_use]
pub fn is_valid_http_url(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > MAX_URL_LENGTH || raw.trim() != raw {
        return false;
    }
    Url::parse(raw).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|h| !h.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn email_pattern_compiles() {
        assert!(EMAIL_RE.is_ok());
    }

    #[rstest]
    #[case("alex@example.dev")]
    #[case("first.last+tag@sub.example.co.uk")]
    #[case("o'brien@example.com")]
    fn accepts_well_formed_emails(#[case] raw: &str) {
        assert!(is_valid_email(raw), "{raw} should be accepted");
    }

    #[rstest]
    #[case("")]
    #[case("plainaddress")]
    #[case("@example.com")]
    #[case("alex@")]
    #[case("alex@localhost")]
    #[case("alex@@example.com")]
    #[case(".alex@example.com")]
    #[case("alex.@example.com")]
    #[case("al..ex@example.com")]
    #[case("alex@-example.com")]
    #[case("alex example@example.com")]
    #[case("alex@example.c0m")]
    fn rejects_malformed_emails(#[case] raw: &str) {
        assert!(!is_valid_email(raw), "{raw} should be rejected");
    }

    #[rstest]
    fn rejects_overlong_local_part() {
        let raw = format!("{}@example.com", "a".repeat(MAX_EMAIL_LOCAL_LENGTH + 1));
        assert!(!is_valid_email(&raw));
    }

    #[rstest]
    #[case("https://github.com/example")]
    #[case("http://example.dev")]
    #[case("https://www.linkedin.com/in/example/")]
    #[case("https://saas.example.dev:8443/path?q=1#frag")]
    fn accepts_http_urls(#[case] raw: &str) {
        assert!(is_valid_http_url(raw), "{raw} should be accepted");
    }

    #[rstest]
    #[case("")]
    #[case("github.com/example")]
    #[case("ftp://example.com/file")]
    #[case("mailto:alex@example.dev")]
    #[case("https://")]
    #[case(" https://example.com")]
    #[case("not a url")]
    fn rejects_non_http_urls(#[case] raw: &str) {
        assert!(!is_valid_http_url(raw), "{raw} should be rejected");
    }

    #[rstest]
    fn rejects_overlong_urls() {
        let raw = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(!is_valid_http_url(&raw));
    }
}
