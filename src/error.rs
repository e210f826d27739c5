use thiserror::Error;

/// Failures turning catalog text into a [`Catalog`](crate::catalog::Catalog).
///
/// Matching itself never fails; a malformed catalog is a configuration error and
/// is reported here, at load time.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to decode TOON catalog: {0}")]
    Toon(String),

    #[error("failed to decode JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{table} row {row}: missing required column '{column}'")]
    MissingColumn { table: &'static str, row: usize, column: &'static str },

    #[error("{table} row {row}: column '{column}' must be text or a number")]
    InvalidCell { table: &'static str, row: usize, column: String },
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("invalid JSON request body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request body must be a JSON object")]
    NotAnObject,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to decode TOON config: {0}")]
    Toon(String),
}
