use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("malformed identifier '{value}': expected TERMINOLOGY:CODE")]
    MalformedIdentifier { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
