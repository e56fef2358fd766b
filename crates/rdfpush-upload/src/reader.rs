//! Batch readers for RDF files
//!
//! Line-delimited formats (N-Triples, N-Quads) carry one statement per
//! physical line and can be split into batches while streaming. Every other
//! format is submitted as a single whole-document batch.
//!
//! Strategy selection is purely extension-based; no syntax is parsed.

use crate::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};

/// One contiguous chunk of a file submitted as a single HTTP request body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    /// Raw document fragment used verbatim as the POST body
    pub payload: String,

    /// Number of RDF statements in the payload (approximate for
    /// whole-document formats)
    pub unit_count: usize,
}

/// Reader over one RDF file, polymorphic over the splitting strategy
#[derive(Debug, Clone)]
pub enum BatchReader {
    /// One statement per line; batches of `batch_size` statements
    LineDelimited { path: PathBuf },

    /// Not safely splittable; always a single batch with the whole file
    WholeDocument { path: PathBuf },
}

impl BatchReader {
    /// Select the reading strategy for a file by its extension
    pub fn for_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("nt") | Some("nq") | Some("nquads") => Self::LineDelimited {
                path: path.to_path_buf(),
            },
            _ => Self::WholeDocument {
                path: path.to_path_buf(),
            },
        }
    }

    /// Count the statements in the file.
    ///
    /// Line-delimited: non-blank, non-`#`-comment lines. Whole-document: an
    /// approximate heuristic over the raw text, not a parse.
    pub async fn count_units(&self) -> Result<usize> {
        match self {
            Self::LineDelimited { path } => {
                let file = File::open(path).await?;
                let mut lines = BufReader::new(file).lines();
                let mut count = 0;
                while let Some(line) = lines.next_line().await? {
                    if is_statement_line(&line) {
                        count += 1;
                    }
                }
                Ok(count)
            },
            Self::WholeDocument { path } => {
                let content = tokio::fs::read_to_string(path).await?;
                Ok(approximate_statement_count(&content))
            },
        }
    }

    /// Open a pull-based stream of batches.
    ///
    /// At most one batch is materialized at a time; the stream yields
    /// batches in file order. A `batch_size` of 0 is treated as 1.
    pub async fn read_batches(&self, batch_size: usize) -> Result<BatchStream> {
        let state = match self {
            Self::LineDelimited { path } => {
                let file = File::open(path).await?;
                StreamState::Lines {
                    lines: BufReader::new(file).lines(),
                    batch_size: batch_size.max(1),
                }
            },
            Self::WholeDocument { path } => {
                let content = tokio::fs::read_to_string(path).await?;
                let unit_count = approximate_statement_count(&content);
                StreamState::Whole {
                    batch: Some(Batch {
                        payload: content,
                        unit_count,
                    }),
                }
            },
        };

        Ok(BatchStream { state })
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        match self {
            Self::LineDelimited { path } | Self::WholeDocument { path } => path,
        }
    }
}

/// Ordered sequence of batches read from one file
pub struct BatchStream {
    state: StreamState,
}

enum StreamState {
    Lines {
        lines: Lines<BufReader<File>>,
        batch_size: usize,
    },
    Whole {
        batch: Option<Batch>,
    },
}

impl BatchStream {
    /// Pull the next batch, or `None` once the file is exhausted
    pub async fn next_batch(&mut self) -> Result<Option<Batch>> {
        match &mut self.state {
            StreamState::Lines { lines, batch_size } => {
                let mut statements: Vec<String> = Vec::new();
                while statements.len() < *batch_size {
                    match lines.next_line().await? {
                        Some(line) => {
                            if is_statement_line(&line) {
                                statements.push(line);
                            }
                        },
                        None => break,
                    }
                }

                if statements.is_empty() {
                    return Ok(None);
                }

                let unit_count = statements.len();
                Ok(Some(Batch {
                    payload: statements.join("\n"),
                    unit_count,
                }))
            },
            StreamState::Whole { batch } => Ok(batch.take()),
        }
    }
}

/// A line that carries a statement: non-blank and not a `#` comment
fn is_statement_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}

/// Rough statement count for non-streamable formats.
///
/// Counts `;` separators and ` .` terminators in the raw text. Intentionally
/// approximate; good enough to size progress bars.
pub(crate) fn approximate_statement_count(content: &str) -> usize {
    content.matches(';').count() + content.matches(" .").count()
}
