use thiserror::Error;

#[derive(Debug, Error)]
pub enum MigrateError {
    #[error("legacy config root is not a mapping (found {0})")]
    RootNotAMapping(&'static str),

    #[error("legacy key '{0}' is not a mapping (found {1})")]
    NotAMapping(String, &'static str),

    #[error("destination path '{0}' has no file name")]
    InvalidDestination(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, MigrateError>;
