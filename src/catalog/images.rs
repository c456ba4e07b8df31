//! Allow-list for remote image URLs.
//!
//! Patterns look like `https://cdn.example.com/**` or
//! `https://*.example.com:8443/assets/*/thumb.png`. In the hostname `*`
//! matches one label and `**` any number of labels; in the path `*` matches
//! one segment and `**` any number of segments. A pattern without a path
//! allows every path.

use reqwest::Url;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImagePatternError {
    #[error("pattern '{0}' has no scheme")]
    MissingScheme(String),
    #[error("pattern '{0}' has no hostname")]
    MissingHost(String),
    #[error("pattern '{pattern}' has an invalid port '{port}'")]
    InvalidPort { pattern: String, port: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePattern {
    scheme: String,
    host: Vec<String>,
    port: Option<u16>,
    path: Vec<String>,
}

impl RemotePattern {
    pub fn parse(pattern: &str) -> Result<Self, ImagePatternError> {
        let (scheme, rest) = pattern
            .split_once("://")
            .filter(|(scheme, _)| !scheme.is_empty())
            .ok_or_else(|| ImagePatternError::MissingScheme(pattern.to_string()))?;

        let (authority, path) = match rest.find('/') {
            Some(idx) => (&rest[..idx], &rest[idx..]),
            None => (rest, "/**"),
        };

        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port)) => {
                let port = port.parse::<u16>().map_err(|_| ImagePatternError::InvalidPort {
                    pattern: pattern.to_string(),
                    port: port.to_string(),
                })?;
                (host, Some(port))
            }
            None => (authority, None),
        };

        if host.is_empty() {
            return Err(ImagePatternError::MissingHost(pattern.to_string()));
        }

        Ok(Self {
            scheme: scheme.to_ascii_lowercase(),
            host: host
                .to_ascii_lowercase()
                .split('.')
                .map(str::to_string)
                .collect(),
            port,
            path: path_segments(path).map(str::to_string).collect(),
        })
    }

    pub fn matches(&self, url: &Url) -> bool {
        if url.scheme() != self.scheme {
            return false;
        }
        let Some(host) = url.host_str() else {
            return false;
        };
        if let Some(port) = self.port {
            if url.port_or_known_default() != Some(port) {
                return false;
            }
        } else if url.port().is_some() {
            return false;
        }

        let host_labels: Vec<&str> = host.split('.').collect();
        let path: Vec<&str> = path_segments(url.path()).collect();
        glob_match(self.host.as_slice(), &host_labels) && glob_match(self.path.as_slice(), &path)
    }
}

/// Decides whether an item's image may be fetched.
#[derive(Debug, Clone, Default)]
pub struct ImagePolicy {
    patterns: Vec<RemotePattern>,
}

impl ImagePolicy {
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Self, ImagePatternError> {
        let patterns = patterns
            .iter()
            .map(|p| RemotePattern::parse(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn allows(&self, image_url: &str) -> bool {
        match Url::parse(image_url) {
            Ok(url) => self.patterns.iter().any(|p| p.matches(&url)),
            Err(_) => false,
        }
    }
}

fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn glob_match<P: AsRef<str>>(pattern: &[P], value: &[&str]) -> bool {
    match pattern.split_first() {
        None => value.is_empty(),
        Some((head, rest)) => match head.as_ref() {
            "**" => (0..=value.len()).any(|skip| glob_match(rest, &value[skip..])),
            "*" => !value.is_empty() && glob_match(rest, &value[1..]),
            literal => value
                .split_first()
                .is_some_and(|(first, tail)| *first == literal && glob_match(rest, tail)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOB: &str = "https://closetfrontrecruiting.blob.core.windows.net/**";

    #[test]
    fn double_star_path_allows_any_depth() {
        let policy = ImagePolicy::from_patterns(&[BLOB]).unwrap();
        assert!(policy.allows("https://closetfrontrecruiting.blob.core.windows.net/a/b/c.png"));
        assert!(policy.allows("https://closetfrontrecruiting.blob.core.windows.net/"));
    }

    #[test]
    fn other_hosts_and_schemes_are_blocked() {
        let policy = ImagePolicy::from_patterns(&[BLOB]).unwrap();
        assert!(!policy.allows("https://evil.example/x.png"));
        assert!(!policy.allows("http://closetfrontrecruiting.blob.core.windows.net/x.png"));
        assert!(!policy.allows("https://closetfrontrecruiting.blob.core.windows.net:444/x.png"));
        assert!(!policy.allows("not a url"));
    }

    #[test]
    fn single_star_matches_one_label_or_segment() {
        let policy = ImagePolicy::from_patterns(&["https://*.example.com/img/*"]).unwrap();
        assert!(policy.allows("https://cdn.example.com/img/a.png"));
        assert!(!policy.allows("https://a.b.example.com/img/a.png"));
        assert!(!policy.allows("https://cdn.example.com/img/a/b.png"));
    }

    #[test]
    fn explicit_port_must_match() {
        let policy = ImagePolicy::from_patterns(&["https://example.com:443/**"]).unwrap();
        assert!(policy.allows("https://example.com/a.png"));
        let policy = ImagePolicy::from_patterns(&["http://localhost:8080/**"]).unwrap();
        assert!(policy.allows("http://localhost:8080/a.png"));
        assert!(!policy.allows("http://localhost/a.png"));
    }

    #[test]
    fn malformed_patterns_are_rejected() {
        assert!(matches!(
            RemotePattern::parse("example.com/**"),
            Err(ImagePatternError::MissingScheme(_))
        ));
        assert!(matches!(
            RemotePattern::parse("https:///x"),
            Err(ImagePatternError::MissingHost(_))
        ));
        assert!(matches!(
            RemotePattern::parse("https://example.com:http/x"),
            Err(ImagePatternError::InvalidPort { .. })
        ));
    }
}
