#![forbid(unsafe_code)]

//! Harness errors.

use std::fmt;
use std::io;

use lac_layout::LayoutError;

#[derive(Debug)]
pub enum HarnessError {
    /// The layout could not be built or solved.
    Layout(LayoutError),
    Io(io::Error),
    Json(serde_json::Error),
    /// An environment variable held a value that does not parse.
    InvalidEnv { name: &'static str, value: String },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "layout error: {err}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Json(err) => write!(f, "JSON error: {err}"),
            Self::InvalidEnv { name, value } => write!(f, "invalid value for {name}: {value:?}"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::InvalidEnv { .. } => None,
        }
    }
}

impl From<LayoutError> for HarnessError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}

impl From<io::Error> for HarnessError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for HarnessError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn layout_errors_convert_and_chain() {
        let err: HarnessError = LayoutError::ZeroWeightSum { id: "s".into() }.into();
        assert!(err.to_string().starts_with("layout error:"));
        assert!(err.source().is_some());
    }

    #[test]
    fn invalid_env_names_the_variable() {
        let err = HarnessError::InvalidEnv {
            name: "LAC_HARNESS_SEED",
            value: "x".into(),
        };
        assert_eq!(err.to_string(), "invalid value for LAC_HARNESS_SEED: \"x\"");
        assert!(err.source().is_none());
    }
}
