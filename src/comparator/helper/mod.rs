mod read_all;

pub(crate) use read_all::read_all;
