use thiserror::Error;

/// Errors raised while turning user input into ingredient quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Not a finite number greater than zero: empty or non-numeric text,
    /// zero, negatives, infinity and NaN all land here.
    #[error("{}", crate::ratio::constants::INVALID_VOLUME_MESSAGE)]
    InvalidVolume,
}

impl ConvertError {
    /// The fixed, human-readable message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            ConvertError::InvalidVolume => crate::ratio::constants::INVALID_VOLUME_MESSAGE,
        }
    }
}
