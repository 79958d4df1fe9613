mod comparator;

// Exported objects
pub use crate::comparator::comparison::Comparison;
pub use crate::comparator::error::CompareError;
pub use crate::comparator::{compare_files, MaskedComparison, COMMENT_LEN, COMMENT_START};

extern crate log;
