use thiserror::Error;

/// Errors emitted while handing a link to the system.
#[derive(Debug, Error)]
pub(crate) enum LinkError {
    /// Only web pages and mail addresses are opened.
    #[error("unsupported link scheme in `{uri}`")]
    UnsupportedScheme { uri: String },
    /// The system launcher could not be started.
    #[error("failed to launch handler for `{uri}`")]
    Launch {
        uri: String,
        #[source]
        source: std::io::Error,
    },
}

/// An external link the page is allowed to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LinkTarget {
    Web(String),
    Mail(String),
}

impl LinkTarget {
    /// Classify a URI by scheme.
    pub(crate) fn parse(uri: &str) -> Result<Self, LinkError> {
        let uri = uri.trim();
        let scheme = uri
            .split_once(':')
            .map(|(scheme, _)| scheme.to_ascii_lowercase());

        match scheme.as_deref() {
            Some("http") | Some("https") if uri.contains("://") => {
                Ok(LinkTarget::Web(uri.to_string()))
            },
            Some("mailto") if uri.len() > "mailto:".len() => {
                Ok(LinkTarget::Mail(uri.to_string()))
            },
            _ => Err(LinkError::UnsupportedScheme {
                uri: uri.to_string(),
            }),
        }
    }

    pub(crate) fn uri(&self) -> &str {
        match self {
            LinkTarget::Web(uri) | LinkTarget::Mail(uri) => uri,
        }
    }
}

/// Open the link in the default browser or mail client without waiting
/// for the handler to exit.
pub(crate) fn open_link(uri: &str) -> Result<(), LinkError> {
    let target = LinkTarget::parse(uri)?;
    open::that_detached(target.uri()).map_err(|source| LinkError::Launch {
        uri: target.uri().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{LinkError, LinkTarget, open_link};

    #[test]
    fn given_web_and_mail_uris_when_parsed_then_targets_are_classified() {
        assert_eq!(
            LinkTarget::parse("https://github.com/codebyharman")
                .expect("https link should parse"),
            LinkTarget::Web(String::from("https://github.com/codebyharman"))
        );
        assert_eq!(
            LinkTarget::parse("mailto:someone@example.com")
                .expect("mailto link should parse"),
            LinkTarget::Mail(String::from("mailto:someone@example.com"))
        );
    }

    #[test]
    fn given_other_schemes_when_parsed_then_they_are_rejected() {
        for uri in ["file:///etc/passwd", "javascript:alert(1)", "mailto:", ""] {
            assert!(matches!(
                LinkTarget::parse(uri),
                Err(LinkError::UnsupportedScheme { .. })
            ));
        }
    }

    #[test]
    fn given_unsupported_uri_when_opening_then_launcher_is_not_invoked() {
        assert!(matches!(
            open_link("ftp://example.com"),
            Err(LinkError::UnsupportedScheme { .. })
        ));
    }
}
