use thiserror::Error;

/// Errors produced by the profile pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// A generation input was missing, non-finite or outside its domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The kernel radius rounds to something that cannot build a kernel.
    #[error("invalid kernel size: {0}")]
    InvalidKernelSize(f64),

    /// No kernel tap landed inside the profile at this position.
    #[error("zero-weight convolution window at position {position}")]
    DegenerateWindow { position: usize },

    /// Profile and mean line differ in length.
    #[error("length mismatch: profile has {profile} samples, mean line has {mean_line}")]
    LengthMismatch { profile: usize, mean_line: usize },

    /// Statistics were requested for a zero-length profile.
    #[error("cannot compute statistics of an empty profile")]
    EmptyProfile,
}

impl ProfileError {
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        ProfileError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for profile pipeline operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
