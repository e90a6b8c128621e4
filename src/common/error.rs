use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} returned by {url}")]
    HttpStatus { status: u16, url: String },

    #[error("table '#{table_id}' not found in page (site layout may have changed)")]
    TableNotFound { table_id: String },

    #[error("invalid table selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("row {row} has {found} cells, expected {expected}")]
    MalformedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("cannot convert {column} value '{value}' for {ticker}: {reason}")]
    Conversion {
        column: String,
        ticker: String,
        value: String,
        reason: String,
    },

    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScreenerError>;
