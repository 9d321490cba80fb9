use std::path::PathBuf;

/// Convenience result type used across cutin.
pub type CutinResult<T> = Result<T, CutinError>;

/// Top-level error taxonomy surfaced to callers.
#[derive(thiserror::Error, Debug)]
pub enum CutinError {
    /// An image asset could not be read or decoded (missing, corrupt, unsupported format).
    #[error("decode error: '{}': {source}", .path.display())]
    Decode {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// Required user input is absent.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// Creating the output directory or writing a frame failed.
    #[error("io error: '{}': {source}", .path.display())]
    Io {
        /// Path being written or created.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Invalid user-provided or configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing layout configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// A failure tied to one frame of the sequence.
    #[error("frame {frame}: {source}")]
    Frame {
        /// 1-based frame number.
        frame: u32,
        /// What went wrong for that frame.
        #[source]
        source: Box<CutinError>,
    },

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CutinError {
    /// Build a [`CutinError::MissingInput`] value.
    pub fn missing_input(msg: impl Into<String>) -> Self {
        Self::MissingInput(msg.into())
    }

    /// Build a [`CutinError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CutinError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Attach the frame number to an error raised while processing that frame.
    pub fn in_frame(self, frame: u32) -> Self {
        Self::Frame {
            frame,
            source: Box::new(self),
        }
    }

    /// Innermost error, looking through [`CutinError::Frame`] wrappers.
    pub fn root(&self) -> &CutinError {
        match self {
            Self::Frame { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
