//! RDFPush Common Library
//!
//! Shared ambient concerns for the RDFPush workspace:
//!
//! - **Logging**: `tracing` subscriber setup with console/file targets
//! - **Environment**: env var lookups with `.envrc` fallback

pub mod env;
pub mod logging;
