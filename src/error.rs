use thiserror::Error;

pub type AxesResult<T> = Result<T, AxesError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AxesError {
    #[error("Only two y-axes are supported at this time. (Trying to use {count})")]
    TooManyYAxes { count: usize },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
