use thiserror::Error;

/// Failures raised by the role directory service.
///
/// None of these cross the loader seam: the loader adapter reports them
/// itself and resolves to an absent response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("invalid page size: {per_page}")]
    InvalidPageSize { per_page: u64 },

    #[error("unknown role: {id}")]
    UnknownRole { id: String },
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;
