use crate::Error;

const SSH_SCHEME: &str = "ssh://";
const SCP_USER: &str = "git@";
const HTTPS_SCHEME: &str = "https://";

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum UrlKind {
    Ssh,
    Https,
}

pub fn classify(url: &str) -> Result<UrlKind, Error> {
    if url.starts_with(SCP_USER) || url.starts_with(SSH_SCHEME) {
        Ok(UrlKind::Ssh)
    } else if url.starts_with(HTTPS_SCHEME) {
        Ok(UrlKind::Https)
    } else {
        Err(Error::InvalidUrl(url.to_string()))
    }
}

/// Turns a remote url into the path it is cloned to, relative to `<root>/src`.
///
/// `git@github.com:chipp/gitext.git`, `ssh://git@github.com/chipp/gitext.git`
/// and `https://github.com/chipp/gitext` all map to `github.com/chipp/gitext`.
pub fn normalize_path(url: &str) -> Result<String, Error> {
    let kind = classify(url)?;

    let path = match kind {
        UrlKind::Ssh => strip_user(url.trim_start_matches(SSH_SCHEME)).replacen(':', "/", 1),
        UrlKind::Https => strip_user(url.trim_start_matches(HTTPS_SCHEME)).to_string(),
    };

    let path = strip_git_suffix(&path);

    if is_repository_path(path) {
        Ok(path.to_string())
    } else {
        Err(Error::InvalidUrl(url.to_string()))
    }
}

// A host followed by at least one segment, none of them `.` or `..`.
fn is_repository_path(path: &str) -> bool {
    let mut segments = path.split('/').filter(|segment| !segment.is_empty());

    let has_host = segments.next().map_or(false, is_plain_segment);
    let mut has_repo = false;

    for segment in segments {
        if !is_plain_segment(segment) {
            return false;
        }
        has_repo = true;
    }

    has_host && has_repo
}

fn is_plain_segment(segment: &str) -> bool {
    segment != "." && segment != ".."
}

/// Rewrites an https url into an ssh one, `https://host/path` becomes
/// `ssh://git@host/path.git`. Urls already in ssh form are kept as is.
pub fn rewrite_to_ssh(url: &str) -> Result<String, Error> {
    match classify(url)? {
        UrlKind::Ssh => Ok(url.to_string()),
        UrlKind::Https => {
            let rest = strip_git_suffix(url.trim_start_matches(HTTPS_SCHEME));
            if rest.is_empty() {
                return Err(Error::InvalidUrl(url.to_string()));
            }

            Ok(format!("{}{}{}.git", SSH_SCHEME, SCP_USER, rest))
        }
    }
}

/// The user an ssh url authenticates as, if it names one.
pub fn ssh_username(url: &str) -> Option<&str> {
    let rest = url.trim_start_matches(SSH_SCHEME);
    let (user, _) = rest.split_once('@')?;

    if user.is_empty() || user.contains(|c| c == '/' || c == ':') {
        None
    } else {
        Some(user)
    }
}

fn strip_user(rest: &str) -> &str {
    match rest.split_once('@') {
        Some((user, host)) if !user.contains(|c| c == '/' || c == ':') => host,
        _ => rest,
    }
}

fn strip_git_suffix(path: &str) -> &str {
    let path = path.trim_end_matches('/');
    path.strip_suffix(".git").unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_urls() {
        assert_eq!(classify("git@github.com:chipp/gitext.git").unwrap(), UrlKind::Ssh);
        assert_eq!(
            classify("ssh://git@github.com/chipp/gitext.git").unwrap(),
            UrlKind::Ssh
        );
        assert_eq!(
            classify("https://github.com/chipp/gitext").unwrap(),
            UrlKind::Https
        );

        assert!(matches!(
            classify("ftp://github.com/chipp/gitext"),
            Err(Error::InvalidUrl(url)) if url == "ftp://github.com/chipp/gitext"
        ));
        assert!(matches!(
            classify("http://github.com/chipp/gitext"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn normalize_https() {
        assert_eq!(
            normalize_path("https://github.com/chipp/gitext.git").unwrap(),
            "github.com/chipp/gitext"
        );
        assert_eq!(
            normalize_path("https://github.com/chipp/gitext").unwrap(),
            "github.com/chipp/gitext"
        );
        assert_eq!(
            normalize_path("https://github.com/chipp/gitext/").unwrap(),
            "github.com/chipp/gitext"
        );
    }

    #[test]
    fn normalize_scp_like() {
        assert_eq!(
            normalize_path("git@github.com:chipp/gitext.git").unwrap(),
            "github.com/chipp/gitext"
        );
        assert_eq!(
            normalize_path("git@gitlab.example.org:group/sub/project").unwrap(),
            "gitlab.example.org/group/sub/project"
        );
    }

    #[test]
    fn normalize_ssh_scheme() {
        assert_eq!(
            normalize_path("ssh://git@github.com/chipp/gitext.git").unwrap(),
            "github.com/chipp/gitext"
        );
        assert_eq!(
            normalize_path("ssh://github.com/chipp/gitext.git").unwrap(),
            "github.com/chipp/gitext"
        );
    }

    #[test]
    fn normalize_keeps_inner_git() {
        assert_eq!(
            normalize_path("https://github.com/chipp/gitext.github.io.git").unwrap(),
            "github.com/chipp/gitext.github.io"
        );
    }

    #[test]
    fn normalize_rejects_unknown_and_empty() {
        assert!(matches!(
            normalize_path("ftp://github.com/chipp/gitext"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(normalize_path("https://"), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn normalize_rejects_dot_segments() {
        for url in &[
            "https://github.com/../../../victim",
            "https://github.com/acme/../widgets",
            "https://github.com/./widgets",
            "https://../widgets",
            "git@github.com:../victim.git",
            "ssh://git@github.com/acme/..",
        ] {
            assert!(
                matches!(normalize_path(url), Err(Error::InvalidUrl(_))),
                "{} was accepted",
                url
            );
        }

        assert_eq!(
            normalize_path("https://github.com/acme/..widgets").unwrap(),
            "github.com/acme/..widgets"
        );
    }

    #[test]
    fn normalize_rejects_host_only() {
        for url in &[
            "https://github.com",
            "https://github.com/",
            "https://github.com//",
            "git@github.com:",
            "git@github.com:.git",
            "ssh://git@github.com/",
        ] {
            assert!(
                matches!(normalize_path(url), Err(Error::InvalidUrl(_))),
                "{} was accepted",
                url
            );
        }
    }

    #[test]
    fn rewrite_https() {
        assert_eq!(
            rewrite_to_ssh("https://github.com/acme/widgets").unwrap(),
            "ssh://git@github.com/acme/widgets.git"
        );
        assert_eq!(
            rewrite_to_ssh("https://github.com/acme/widgets.git").unwrap(),
            "ssh://git@github.com/acme/widgets.git"
        );
    }

    #[test]
    fn rewrite_keeps_ssh() {
        assert_eq!(
            rewrite_to_ssh("git@github.com:acme/widgets.git").unwrap(),
            "git@github.com:acme/widgets.git"
        );
        assert!(matches!(
            rewrite_to_ssh("ftp://github.com/acme/widgets"),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn rewritten_url_normalizes_to_same_path() {
        let url = "https://github.com/acme/widgets";
        let rewritten = rewrite_to_ssh(url).unwrap();

        assert_eq!(
            normalize_path(&rewritten).unwrap(),
            normalize_path(url).unwrap()
        );
    }

    #[test]
    fn username() {
        assert_eq!(ssh_username("git@github.com:acme/widgets.git"), Some("git"));
        assert_eq!(
            ssh_username("ssh://deploy@github.com/acme/widgets.git"),
            Some("deploy")
        );
        assert_eq!(ssh_username("ssh://github.com/acme/widgets.git"), None);
    }
}
