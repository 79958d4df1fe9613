use crate::comparator::algorithm::{first_difference, mask_comment};
use crate::comparator::comparison::Comparison;
use crate::comparator::error::CompareError;
use crate::comparator::helper::read_all;
use crate::comparator::result::Result;
use std::io::{BufReader, Read};
use std::path::Path;

pub mod comparison;
pub mod error;
pub mod result;

mod algorithm;
mod helper;

type Length = usize;

// On-disk layout of the comment field in 8xp program files
pub const COMMENT_START: usize = 11;
pub const COMMENT_LEN: usize = 42;
pub(crate) const COMMENT_END: usize = COMMENT_START + COMMENT_LEN;

/// Outcome of comparing two 8xp binaries with their comment fields zeroed out.
/// Carries both masked lengths for reporting.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MaskedComparison {
    comparison: Comparison,
    lengths: (Length, Length),
}

impl MaskedComparison {
    pub fn new<R: Read>(file1: &mut BufReader<R>, file2: &mut BufReader<R>) -> Result<Self> {
        let data1 = read_all(file1)?;
        let data2 = read_all(file2)?;
        Ok(Self::from_bytes(&data1, &data2))
    }

    pub fn from_bytes(data1: &[u8], data2: &[u8]) -> Self {
        let masked1 = mask_comment(data1);
        let masked2 = mask_comment(data2);
        log::debug!(
            "from_bytes(): masked lengths = {}, {}",
            masked1.len(),
            masked2.len()
        );
        Self {
            comparison: first_difference(&masked1, &masked2),
            lengths: (masked1.len(), masked2.len()),
        }
    }

    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    /// Masked lengths of (file1, file2). Masking preserves length, so these
    /// equal the original file sizes.
    pub fn lengths(&self) -> (Length, Length) {
        self.lengths
    }

    pub fn is_match(&self) -> bool {
        self.comparison == Comparison::Match
    }
}

/// Reads both files fully, then compares the masked contents.
pub fn compare_files<P: AsRef<Path>>(path1: P, path2: P) -> Result<MaskedComparison> {
    let file1 = std::fs::File::open(path1).map_err(CompareError::IoError)?;
    let file2 = std::fs::File::open(path2).map_err(CompareError::IoError)?;
    MaskedComparison::new(&mut BufReader::new(file1), &mut BufReader::new(file2))
}
