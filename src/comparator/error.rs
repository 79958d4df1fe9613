use std::fmt;

#[derive(Debug)]
pub enum CompareError {
    IoError(std::io::Error),
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(err) => write!(f, "read failed: {}", err),
        }
    }
}
