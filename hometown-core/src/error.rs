use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Unknown menu: {0} (expected one of furniture, kitchen, decor, furnishing, interiors, clearance)")]
    UnknownMenu(String),

    #[error("No category is linked at {0}")]
    UnknownRoute(String),

    #[error("Unknown sitemap format: {0} (expected text, json, csv or markdown)")]
    UnknownFormat(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
