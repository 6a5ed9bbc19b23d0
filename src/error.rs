use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no constructor registered for `{name}`")]
    ComponentNotFound { name: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
