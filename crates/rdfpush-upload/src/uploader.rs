//! Upload orchestration
//!
//! Drives one file end-to-end (detect content type, resolve the client,
//! count statements, upload batches in order) and many files concurrently
//! under a bounded admission gate. One file's failure never aborts its
//! siblings; every input file ends up with exactly one result entry.

use crate::content_type::detect_content_type;
use crate::endpoint::client::DEFAULT_TIMEOUT_SECS;
use crate::endpoint::{ConnectionSettings, EndpointClient, EndpointType};
use crate::error::{Result, UploadError};
use crate::reader::BatchReader;
use crate::stats::{StatsCollector, StatsObserver};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

// ============================================================================
// Orchestration Constants
// ============================================================================

/// Maximum file uploads in flight at once when not configured.
pub const DEFAULT_CONCURRENT_LIMIT: usize = 5;

/// Statements per batch for streamable formats when not configured.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Callback fired once per file after its upload finished, either way
pub type FileCompleteCallback = Arc<dyn Fn(&Path, &FileResult) + Send + Sync>;

/// Options shared by every file in one upload run
#[derive(Clone)]
pub struct UploadOptions {
    /// Endpoint URL; falls back to environment resolution when `None`
    pub endpoint: Option<String>,

    /// Which store product the endpoint is
    pub endpoint_type: EndpointType,

    /// Named graph to upload into; absent means the default graph
    pub graph: Option<String>,

    /// Maximum concurrently uploading files
    pub concurrent_limit: usize,

    /// Username; falls back to environment resolution when `None`
    pub username: Option<String>,

    /// Password; falls back to environment resolution when `None`
    pub password: Option<String>,

    /// Content type override; detected from the extension when `None`
    pub content_type: Option<String>,

    /// Statements per batch for streamable formats
    pub batch_size: usize,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// RDFox datastore name; ignored by every other endpoint type
    pub store_name: Option<String>,

    /// Observer for per-batch progress snapshots
    pub stats_observer: Option<StatsObserver>,

    /// Notification fired as each file finishes
    pub on_file_complete: Option<FileCompleteCallback>,
}

impl Default for UploadOptions {
    fn default() -> Self {
        Self {
            endpoint: None,
            endpoint_type: EndpointType::Generic,
            graph: None,
            concurrent_limit: DEFAULT_CONCURRENT_LIMIT,
            username: None,
            password: None,
            content_type: None,
            batch_size: DEFAULT_BATCH_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            store_name: None,
            stats_observer: None,
            on_file_complete: None,
        }
    }
}

/// Outcome of one file's upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub success: bool,
    pub error_kind: Option<String>,
    pub error_message: Option<String>,
}

impl FileResult {
    fn ok() -> Self {
        Self {
            success: true,
            error_kind: None,
            error_message: None,
        }
    }

    fn from_error(err: &UploadError) -> Self {
        Self {
            success: false,
            error_kind: Some(err.kind().to_string()),
            error_message: Some(err.to_string()),
        }
    }
}

/// Upload a single RDF file, batches strictly in file order.
///
/// Fails fast: the first batch error aborts the file's remaining batches
/// and propagates. Configuration problems surface before any file or
/// network I/O.
pub async fn upload_file(file_path: &Path, options: &UploadOptions) -> Result<()> {
    let content_type = options
        .content_type
        .clone()
        .unwrap_or_else(|| detect_content_type(file_path).to_string());

    let settings = ConnectionSettings::resolve(
        options.endpoint.as_deref(),
        options.endpoint_type,
        options.username.as_deref(),
        options.password.as_deref(),
        Some(&content_type),
        options.store_name.as_deref(),
        Duration::from_secs(options.timeout_secs),
    )?;
    let client = EndpointClient::new(settings)?;

    let reader = BatchReader::for_path(file_path);
    let total_units = reader.count_units().await?;

    let mut stats = StatsCollector::new(file_path);
    stats.set_total_units(total_units);
    if let Some(observer) = &options.stats_observer {
        stats.set_observer(Arc::clone(observer));
    }

    info!(
        file = %file_path.display(),
        total_units,
        batch_size = options.batch_size,
        endpoint_type = %options.endpoint_type,
        "starting upload"
    );

    let mut batches = reader.read_batches(options.batch_size).await?;
    while let Some(batch) = batches.next_batch().await? {
        let status_code = client
            .upload_data(batch.payload, options.graph.as_deref(), None)
            .await?;
        stats.update(batch.unit_count, status_code);
    }

    info!(
        file = %file_path.display(),
        uploaded_units = stats.uploaded_units(),
        batches = stats.batch_number(),
        "upload complete"
    );

    Ok(())
}

/// Upload many RDF files concurrently under an admission gate.
///
/// At most `concurrent_limit` files upload at once; within a file, batches
/// stay sequential. Every failure is captured into that file's entry and
/// the returned map always holds one entry per input file.
pub async fn upload_files(
    files: &[PathBuf],
    options: &UploadOptions,
) -> HashMap<PathBuf, FileResult> {
    let semaphore = Arc::new(Semaphore::new(options.concurrent_limit.max(1)));
    let mut handles = Vec::with_capacity(files.len());

    for file_path in files {
        let file_path = file_path.clone();
        let options = options.clone();
        let semaphore = Arc::clone(&semaphore);

        handles.push((
            file_path.clone(),
            tokio::spawn(async move {
                // Closing never happens; a closed gate just means ungated.
                let _permit = semaphore.acquire_owned().await.ok();

                let result = match upload_file(&file_path, &options).await {
                    Ok(()) => FileResult::ok(),
                    Err(err) => {
                        warn!(
                            file = %file_path.display(),
                            error_kind = err.kind(),
                            error = %err,
                            "upload failed"
                        );
                        FileResult::from_error(&err)
                    },
                };

                if let Some(on_file_complete) = &options.on_file_complete {
                    on_file_complete(&file_path, &result);
                }

                result
            }),
        ));
    }

    let mut results = HashMap::with_capacity(handles.len());
    for (file_path, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(join_err) => {
                warn!(file = %file_path.display(), error = %join_err, "upload task aborted");
                FileResult {
                    success: false,
                    error_kind: Some("TaskPanic".to_string()),
                    error_message: Some(join_err.to_string()),
                }
            },
        };
        debug!(file = %file_path.display(), success = result.success, "recorded result");
        results.insert(file_path, result);
    }

    results
}
