use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TodoError {
    pub fn title_required() -> Self {
        Self::Validation("Title is required".to_string())
    }
}
