//! Error types for the codec pipeline

use thiserror::Error;

/// Result type threaded through every pipeline stage
pub type IcfResult<T> = Result<T, IcfError>;

/// Errors a pipeline stage can report. A stage fails fast on the first one
/// it encounters and returns without further mutating its inputs.
#[derive(Error, Debug)]
pub enum IcfError {
    #[error("no file name was given")]
    MissingPath,

    #[error("could not open file: {0}")]
    OpenFailure(String),

    #[error("could not allocate image buffers")]
    AllocationFailure,

    #[error("the file is not a bitmap")]
    NotABitmap,

    #[error("could not create output file: {0}")]
    CreateFailure(String),

    #[error("pipeline stage invoked with no image descriptor")]
    MissingImage,

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
