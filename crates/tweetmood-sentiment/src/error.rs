use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
