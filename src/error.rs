use thiserror::Error;

/// Errors raised while loading the fixture or building statements
#[derive(Debug, Error)]
pub enum SeedError {
    /// The fixture text has no `export const <name> =` block for a required array
    #[error("fixture declaration `{0}` not found")]
    MissingDeclaration(String),

    /// A declaration was found but its body is not the expected JSON shape
    #[error("failed to parse `{source_name}`: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("table `{table}` has {expected} columns but {actual} values were given")]
    ColumnMismatch {
        table: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type SeedResult<T> = std::result::Result<T, SeedError>;
