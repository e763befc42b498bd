use crate::error::BacklogError;

pub type BacklogResult<T> = Result<T, BacklogError>;
