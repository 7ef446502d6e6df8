//! Flat-file output: one display text per line, appended.

use std::path::{Path, PathBuf};

use tokio::fs::OpenOptions;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::SentimentError;
use crate::types::{ParsedPost, Sentiment};

/// Destination files for one run.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// Every collected post.
    pub all: PathBuf,
    /// Posts classified negative.
    pub negative: PathBuf,
}

/// Line counts written by [`write_outputs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteSummary {
    pub all_lines: usize,
    pub negative_lines: usize,
}

/// Posts classified [`Sentiment::Negative`], in order.
pub fn negative_posts(posts: &[ParsedPost]) -> impl Iterator<Item = &ParsedPost> {
    posts
        .iter()
        .filter(|post| post.sentiment == Sentiment::Negative)
}

/// Appends each line plus `\n` to `path`, creating the file if needed.
///
/// Returns the number of lines written.
///
/// # Errors
///
/// Returns [`SentimentError::Io`] if the file cannot be opened or written.
pub async fn append_lines<I, S>(path: &Path, lines: I) -> Result<usize, SentimentError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let io_err = |source: std::io::Error| SentimentError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    let mut written = 0;
    for line in lines {
        writer
            .write_all(line.as_ref().as_bytes())
            .await
            .map_err(io_err)?;
        writer.write_all(b"\n").await.map_err(io_err)?;
        written += 1;
    }
    writer.flush().await.map_err(io_err)?;

    Ok(written)
}

/// Appends every post's text to `paths.all` and the negative subset to
/// `paths.negative`. Both files are created even if nothing is written.
///
/// # Errors
///
/// Returns [`SentimentError::Io`] on the first file that fails.
pub async fn write_outputs(
    paths: &OutputPaths,
    posts: &[ParsedPost],
) -> Result<WriteSummary, SentimentError> {
    let all_lines = append_lines(&paths.all, posts.iter().map(|p| p.text.as_str())).await?;
    let negative_lines = append_lines(
        &paths.negative,
        negative_posts(posts).map(|p| p.text.as_str()),
    )
    .await?;

    tracing::info!(
        all = %paths.all.display(),
        negative = %paths.negative.display(),
        all_lines,
        negative_lines,
        "appended posts to output files"
    );

    Ok(WriteSummary {
        all_lines,
        negative_lines,
    })
}
