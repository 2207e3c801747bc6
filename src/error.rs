use thiserror::Error;

/// Linksift error types.
///
/// Only construction-time operations (matcher compilation, URL parsing) can
/// fail. Domain splitting and span extraction are total functions and never
/// produce an error.
#[derive(Error, Debug)]
pub enum SiftError {
    #[error("Invalid matcher configuration: {0}")]
    InvalidConfig(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("URL syntax error: {0}")]
    UrlSyntax(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, SiftError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_is_matchable() {
        let err = SiftError::InvalidConfig("empty scheme override".into());
        match &err {
            SiftError::InvalidConfig(msg) => {
                assert!(msg.contains("scheme"));
            }
            _ => panic!("expected InvalidConfig"),
        }
    }

    #[test]
    fn test_regex_error_converts() {
        let err: SiftError = regex::Regex::new("(unclosed").unwrap_err().into();
        assert!(matches!(err, SiftError::Regex(_)));
    }

    #[test]
    fn test_url_syntax_error_converts() {
        let err: SiftError = url::Url::parse("http://[::1").unwrap_err().into();
        assert!(matches!(err, SiftError::UrlSyntax(_)));
    }

    #[test]
    fn test_display_includes_message() {
        let err = SiftError::InvalidConfig("empty host override".into());
        let display = format!("{}", err);
        assert!(display.contains("empty host override"), "got: {}", display);
    }
}
