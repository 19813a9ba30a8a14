use thiserror::Error;

#[derive(Debug, Error)]
pub enum SigilError {
    #[error("Random source unavailable: {0}")]
    RandomSource(String),
}

pub type Result<T> = std::result::Result<T, SigilError>;
