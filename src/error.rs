use std::path::PathBuf;

/// Failures outside the (total) inference core: reading and parsing input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse JSON source ({origin}): {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read source file ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid input pattern: {0}")]
    Glob(#[from] glob::PatternError),
    #[error("failed to resolve input path: {0}")]
    GlobEntry(#[from] glob::GlobError),
    #[error("glob pattern matched no files: {pattern}")]
    NoMatch { pattern: String },
    #[error("JSON pointer {pointer} selects nothing in {origin}")]
    PointerNotFound { pointer: String, origin: String },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
