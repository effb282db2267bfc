use std::path::PathBuf;
use thiserror::Error;

// The numerical core cannot fail; these only come out of loading and exporting.
#[derive(Error, Debug)]
pub enum RankingError {
    #[error("Could not access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid ranking context JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid ranking context: {0}")]
    InvalidContext(String),
}
