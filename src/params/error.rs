use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamError {
    #[error("Parameters must be a mapping, got {0}")]
    NotAMapping(&'static str),

    #[error("Failed to decode parameters: {0}")]
    Json(String),
}
