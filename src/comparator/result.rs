use crate::comparator::error::CompareError;

pub type Result<T> = std::result::Result<T, CompareError>;
