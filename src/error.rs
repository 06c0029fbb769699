use thiserror::Error;

#[derive(Debug, Error)]
pub enum MealError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported image type: {0} (use JPG, PNG, or WebP)")]
    UnsupportedImageType(String),

    #[error("Image too large: {size} bytes (maximum is {max} bytes)")]
    ImageTooLarge { size: u64, max: u64 },

    #[error("Nothing to analyze: enter a meal name or attach an image")]
    EmptyRequest,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, MealError>;
