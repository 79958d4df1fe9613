use crate::comparator::error::CompareError;
use crate::comparator::result::Result;
use std::io::{BufReader, Read};

pub fn read_all<R: Read>(reader: &mut BufReader<R>) -> Result<Vec<u8>> {
    let mut buf = vec![];
    reader
        .read_to_end(&mut buf)
        .map_err(CompareError::IoError)?;
    Ok(buf)
}
