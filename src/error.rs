use thiserror::Error;

pub type LogoResult<T> = Result<T, LogoError>;

/// Coarse classification of [`LogoError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoErrorKind {
    Configuration,
    Precondition,
    Lookup,
    Ordering,
    Backend,
}

#[derive(Debug, Error)]
pub enum LogoError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("`{operation}` requires the logo to be drawn first")]
    NotDrawn { operation: &'static str },

    #[error("position {0} is not present in the matrix")]
    UnknownPosition(f64),

    #[error("character `{0}` is not present in the matrix")]
    UnknownCharacter(String),

    #[error("no glyph at position {position} for character `{character}`")]
    MissingGlyph { position: f64, character: String },

    #[error("sequence length {actual} does not match logo length {expected}")]
    SequenceLength { expected: usize, actual: usize },

    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}

impl LogoError {
    #[must_use]
    pub fn kind(&self) -> LogoErrorKind {
        match self {
            Self::InvalidConfig(_) => LogoErrorKind::Configuration,
            Self::NotDrawn { .. } => LogoErrorKind::Precondition,
            Self::UnknownPosition(_)
            | Self::UnknownCharacter(_)
            | Self::MissingGlyph { .. }
            | Self::SequenceLength { .. } => LogoErrorKind::Lookup,
            Self::InvalidRange(_) => LogoErrorKind::Ordering,
            Self::Backend(_) => LogoErrorKind::Backend,
        }
    }
}
