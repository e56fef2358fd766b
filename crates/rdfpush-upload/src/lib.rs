//! RDFPush Upload Library
//!
//! Concurrent batch-upload pipeline for RDF documents.
//!
//! # Overview
//!
//! - **Content types**: map file extensions to RDF MIME types
//! - **Batch readers**: split streamable formats (N-Triples, N-Quads) into
//!   bounded batches; submit other formats whole
//! - **Endpoints**: one wire contract over Blazegraph, MarkLogic, Neptune,
//!   RDFox, Stardog, and generic SPARQL stores
//! - **Orchestration**: many files in parallel under a concurrency cap,
//!   batches within a file strictly in order, per-file failure isolation
//!
//! # Example
//!
//! ```no_run
//! use rdfpush_upload::{upload_files, EndpointType, UploadOptions};
//! use std::path::PathBuf;
//!
//! #[tokio::main]
//! async fn main() {
//!     let options = UploadOptions {
//!         endpoint: Some("http://localhost:9999/blazegraph".to_string()),
//!         endpoint_type: EndpointType::Blazegraph,
//!         ..UploadOptions::default()
//!     };
//!
//!     let files = vec![PathBuf::from("data.nt")];
//!     let results = upload_files(&files, &options).await;
//!     for (file, result) in &results {
//!         println!("{}: {}", file.display(), result.success);
//!     }
//! }
//! ```

pub mod content_type;
pub mod endpoint;
pub mod error;
pub mod reader;
pub mod stats;
pub mod uploader;

// Re-export commonly used types
pub use content_type::detect_content_type;
pub use endpoint::{AuthScheme, Credentials, EndpointClient, EndpointType};
pub use error::{Result, UploadError};
pub use reader::{Batch, BatchReader, BatchStream};
pub use stats::{StatsCollector, StatsObserver, UploadStats};
pub use uploader::{
    upload_file, upload_files, FileCompleteCallback, FileResult, UploadOptions,
};
