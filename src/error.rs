use thiserror::Error;

use crate::loader::LoadError;

pub type BarChartResult<T> = Result<T, BarChartError>;

#[derive(Debug, Error)]
pub enum BarChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("duplicate data point name: `{0}`")]
    DuplicateName(String),

    #[error(transparent)]
    Load(#[from] LoadError),
}
