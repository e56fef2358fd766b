//! Content-type detection for RDF files
//!
//! The POST body's MIME type is derived from the file extension alone; no
//! content sniffing.

use std::path::Path;

/// Default content type when the extension is unknown or absent
pub const DEFAULT_CONTENT_TYPE: &str = "text/turtle";

/// Map a file extension to the RDF MIME type used for the upload body
pub fn detect_content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("ttl") | Some("turtle") => "text/turtle",
        Some("nt") => "application/n-triples",
        Some("n3") => "text/n3",
        Some("nq") | Some("nquads") => "application/n-quads",
        Some("rdf") | Some("xml") => "application/rdf+xml",
        Some("jsonld") => "application/ld+json",
        Some("json") => "application/rdf+json",
        Some("trig") => "application/trig",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
