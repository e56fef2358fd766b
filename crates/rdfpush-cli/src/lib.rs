//! RDFPush CLI Library
//!
//! Command-line interface for uploading RDF data to SPARQL endpoints:
//!
//! - **Upload**: push one or more RDF files (`rdfpush upload data.nt ...`)
//!   with per-file progress bars and a colored results summary

pub mod commands;
pub mod progress;

use clap::{Args, Parser, Subcommand};
use rdfpush_upload::EndpointType;
use std::path::PathBuf;

/// RDFPush - Upload RDF data to SPARQL endpoints
#[derive(Parser, Debug)]
#[command(name = "rdfpush")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output showing batch details and server responses
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload RDF files to a SPARQL endpoint
    Upload(UploadArgs),
}

/// Arguments for the upload command
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// RDF files to upload (Turtle, N-Triples, N-Quads, RDF/XML, ...)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// SPARQL endpoint URL (falls back to RDF_ENDPOINT, then
    /// {TYPE}_ENDPOINT, then an .envrc scan)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Type of SPARQL endpoint
    #[arg(short = 't', long = "type", default_value = "generic")]
    pub endpoint_type: EndpointType,

    /// Named graph to upload to
    #[arg(short, long)]
    pub graph: Option<String>,

    /// Maximum number of concurrent file uploads
    #[arg(short, long, default_value_t = 5)]
    pub concurrent: usize,

    /// Username for authentication
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password for authentication
    #[arg(short, long)]
    pub password: Option<String>,

    /// Content type for RDF data (e.g., text/turtle, application/rdf+xml);
    /// detected from the file extension when omitted
    #[arg(long)]
    pub content_type: Option<String>,

    /// Number of triples per batch for streaming formats
    #[arg(short, long, default_value_t = 1000)]
    pub batch_size: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub timeout: u64,

    /// RDFox datastore name (only used with the rdfox endpoint type)
    #[arg(short, long, env = "RDFOX_STORE_NAME")]
    pub store_name: Option<String>,
}
