//! `rdfpush upload` command implementation
//!
//! Wires the CLI arguments into the upload pipeline, renders live progress,
//! and prints the per-file results summary.

use crate::progress::ProgressRenderer;
use crate::UploadArgs;
use anyhow::Result;
use colored::Colorize;
use rdfpush_upload::{upload_files, UploadOptions, UploadStats};
use std::path::Path;
use std::sync::Arc;

/// Upload files per the CLI arguments
pub async fn run(args: UploadArgs, verbose: bool) -> Result<()> {
    let renderer = Arc::new(ProgressRenderer::new(verbose));
    let stats_renderer = Arc::clone(&renderer);
    let finish_renderer = Arc::clone(&renderer);

    let options = UploadOptions {
        endpoint: args.endpoint,
        endpoint_type: args.endpoint_type,
        graph: args.graph,
        concurrent_limit: args.concurrent,
        username: args.username,
        password: args.password,
        content_type: args.content_type,
        batch_size: args.batch_size,
        timeout_secs: args.timeout,
        store_name: args.store_name,
        stats_observer: Some(Arc::new(move |stats: &UploadStats| {
            stats_renderer.observe(stats);
        })),
        on_file_complete: Some(Arc::new(move |file: &Path, result| {
            finish_renderer.finish_file(file, result.success);
        })),
    };

    let results = upload_files(&args.files, &options).await;
    renderer.clear();

    println!("\nUpload Results:");
    let mut failed = 0usize;
    for file in &args.files {
        let Some(result) = results.get(file) else {
            continue;
        };
        if result.success {
            println!("{} {}", "✓".green(), file.display());
        } else {
            failed += 1;
            let kind = result.error_kind.as_deref().unwrap_or("UnknownError");
            let message = result
                .error_message
                .as_deref()
                .unwrap_or("no details available");
            println!(
                "{} {}: {} - {}",
                "✗".red(),
                file.display(),
                kind.red().bold(),
                message
            );
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} file(s) failed to upload", failed, args.files.len());
    }

    println!("\n{} All files uploaded", "✓".green().bold());
    Ok(())
}
