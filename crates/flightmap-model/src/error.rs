use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid {name} value {value}: expected a number between 0 and 1")]
    InvalidThreshold { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, ModelError>;
