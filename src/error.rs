use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TierError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("TextGrid error for '{}': {message}", .path.display())]
    TextGrid { path: PathBuf, message: String },
    #[error("tier '{tier}' not found in '{}'", .path.display())]
    MissingTier { path: PathBuf, tier: String },
    #[error("audio error while {context}: {source}")]
    Audio {
        context: &'static str,
        #[source]
        source: hound::Error,
    },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl TierError {
    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn textgrid(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        Self::TextGrid {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub(crate) fn missing_tier(path: impl Into<PathBuf>, tier: impl Into<String>) -> Self {
        Self::MissingTier {
            path: path.into(),
            tier: tier.into(),
        }
    }

    pub(crate) fn audio(context: &'static str, source: hound::Error) -> Self {
        Self::Audio { context, source }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

/// Why a span's phones could not be partitioned into syllables.
///
/// Span-level only: callers log it and move on to the next span.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyllabificationFailure {
    #[error("phone '{phone}' is not in the phone set")]
    UnknownPhone { phone: String },
    #[error("syllables cover {covered} of {expected} phones")]
    Inconsistent { covered: usize, expected: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tier_message_names_tier_and_file() {
        let err = TierError::missing_tier("data/utt1.TextGrid", "words");
        assert_eq!(
            err.to_string(),
            "tier 'words' not found in 'data/utt1.TextGrid'"
        );
    }

    #[test]
    fn io_error_keeps_source() {
        let err = TierError::io(
            "read phone set",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("I/O error while read phone set"));
    }

    #[test]
    fn failure_messages() {
        let unknown = SyllabificationFailure::UnknownPhone {
            phone: "q".to_string(),
        };
        assert_eq!(unknown.to_string(), "phone 'q' is not in the phone set");
        let inconsistent = SyllabificationFailure::Inconsistent {
            covered: 3,
            expected: 4,
        };
        assert_eq!(inconsistent.to_string(), "syllables cover 3 of 4 phones");
    }
}
