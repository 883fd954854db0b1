//! GitHub URL Parsing

use url::{ParseError, Url};

use crate::constants::network::GITHUB_HOST;
use crate::types::{LensError, RepoRef, Result};

/// Extract owner and repository from a `https://github.com/<owner>/<repo>` URL.
///
/// Extra path segments (`/tree/main/...`) are ignored and a trailing `.git`
/// is stripped from the repository name.
pub fn parse_github_url(input: &str) -> Result<RepoRef> {
    let input = input.trim();
    let url = match Url::parse(input) {
        Ok(url) => url,
        // No scheme means no host, which is not github.com
        Err(ParseError::RelativeUrlWithoutBase) => return Err(unsupported_host()),
        Err(_) => return Err(LensError::InvalidUrl("Invalid GitHub URL".to_string())),
    };

    // The parsed host is lowercased and loses a default port, so the authority
    // is also compared as written.
    let is_github = raw_authority(input) == Some(GITHUB_HOST)
        && url.host_str() == Some(GITHUB_HOST)
        && url.port().is_none()
        && url.username().is_empty()
        && url.password().is_none();
    if !is_github {
        return Err(unsupported_host());
    }

    let parts: Vec<&str> = url.path().split('/').filter(|p| !p.is_empty()).collect();
    let [owner, repo, ..] = parts.as_slice() else {
        return Err(LensError::InvalidUrl(
            "GitHub URL must include owner and repo".to_string(),
        ));
    };

    let repo = repo.strip_suffix(".git").unwrap_or(repo);
    if owner.is_empty() || repo.is_empty() {
        return Err(LensError::InvalidUrl(
            "Invalid GitHub URL format".to_string(),
        ));
    }

    Ok(RepoRef {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

/// Authority text exactly as it appears after `scheme://`
fn raw_authority(input: &str) -> Option<&str> {
    let (_, rest) = input.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(&rest[..end])
}

fn unsupported_host() -> LensError {
    LensError::InvalidUrl("Only github.com URLs are supported".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(input: &str) -> String {
        parse_github_url(input).unwrap_err().to_string()
    }

    #[test]
    fn test_parse_basic() {
        let repo = parse_github_url("https://github.com/psf/requests").unwrap();
        assert_eq!(repo.owner, "psf");
        assert_eq!(repo.repo, "requests");
        assert_eq!(repo.to_string(), "psf/requests");
    }

    #[test]
    fn test_parse_strips_git_suffix_and_extra_segments() {
        let repo = parse_github_url("https://github.com/rust-lang/cargo.git").unwrap();
        assert_eq!(repo.repo, "cargo");

        let repo = parse_github_url("https://github.com/tokio-rs/axum/tree/main/axum/src").unwrap();
        assert_eq!(repo.owner, "tokio-rs");
        assert_eq!(repo.repo, "axum");

        let repo = parse_github_url("https://github.com//owner//repo/").unwrap();
        assert_eq!(repo.to_string(), "owner/repo");
    }

    #[test]
    fn test_unsupported_hosts() {
        let expected = "Only github.com URLs are supported";
        assert_eq!(message("https://gitlab.com/a/b"), expected);
        assert_eq!(message("https://www.github.com/a/b"), expected);
        assert_eq!(message("https://github.com:8443/a/b"), expected);
        assert_eq!(message("github.com/a/b"), expected);
    }

    #[test]
    fn test_host_compared_as_written() {
        let expected = "Only github.com URLs are supported";
        assert_eq!(message("https://GitHub.com/a/b"), expected);
        assert_eq!(message("https://github.com:443/a/b"), expected);
        assert_eq!(message("https://user@github.com/a/b"), expected);
        assert!(parse_github_url("https://github.com?tab=readme").is_err());
    }

    #[test]
    fn test_raw_authority() {
        assert_eq!(raw_authority("https://github.com/a/b"), Some("github.com"));
        assert_eq!(raw_authority("https://github.com:443"), Some("github.com:443"));
        assert_eq!(raw_authority("https://GitHub.com?x=1"), Some("GitHub.com"));
        assert_eq!(raw_authority("github.com/a/b"), None);
    }

    #[test]
    fn test_missing_owner_or_repo() {
        let expected = "GitHub URL must include owner and repo";
        assert_eq!(message("https://github.com/"), expected);
        assert_eq!(message("https://github.com/only-owner"), expected);
    }

    #[test]
    fn test_empty_repo_after_suffix() {
        assert_eq!(message("https://github.com/owner/.git"), "Invalid GitHub URL format");
    }

    #[test]
    fn test_malformed_url() {
        assert_eq!(message("https://[::1"), "Invalid GitHub URL");
    }

    #[test]
    fn test_url_errors_are_bad_requests() {
        let err = parse_github_url("https://gitlab.com/a/b").unwrap_err();
        assert_eq!(err.http_status(), 400);
    }
}
