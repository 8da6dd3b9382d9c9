//! Crate-level error types.

use std::fmt;

/// Errors produced by the trackball crate.
#[derive(Debug)]
pub enum TrackballError {
    /// Viewport dimensions must both be positive.
    InvalidViewport {
        /// Rejected width in pixels.
        width: u32,
        /// Rejected height in pixels.
        height: u32,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for TrackballError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport { width, height } => {
                write!(f, "invalid viewport {width}x{height}: dimensions must be positive")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for TrackballError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TrackballError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_viewport_message_names_dimensions() {
        let err = TrackballError::InvalidViewport {
            width: 0,
            height: 600,
        };
        assert_eq!(
            err.to_string(),
            "invalid viewport 0x600: dimensions must be positive"
        );
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error;

        let err = TrackballError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(err.source().is_some());
        assert!(TrackballError::OptionsParse("bad".into()).source().is_none());
    }
}
