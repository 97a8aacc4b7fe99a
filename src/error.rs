use std::path::PathBuf;

/// Errors surfaced around the writer. The writer itself never fails; these
/// come from the text encoder, output files, and the opt-in presence check.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{structure}` is missing required fields: {}", .fields.join(", "))]
    MissingRequired {
        structure: &'static str,
        fields: Vec<&'static str>,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
