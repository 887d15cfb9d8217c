use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// Caller-provided buffer is shorter than the plane geometry requires.
    BufferTooShort { expected: usize, actual: usize },
    /// Numeric raster-op code outside 0..=15.
    InvalidRop { code: u8 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooShort { expected, actual } => {
                write!(f, "bit buffer expected {expected} bytes, got {actual}")
            }
            Self::InvalidRop { code } => {
                write!(f, "raster-op code {code} is outside 0..=15")
            }
        }
    }
}

impl std::error::Error for Error {}
