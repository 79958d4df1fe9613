mod first_difference;
mod mask_comment;

pub(crate) use first_difference::first_difference;
pub(crate) use mask_comment::mask_comment;
