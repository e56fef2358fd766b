//! Environment variable lookups with `.envrc` fallback
//!
//! Connection settings and credentials may live in the process environment
//! or in a direnv-style `.envrc` file in the working directory. Lookups
//! check the environment first, then scan `.envrc` for an `export` line.

use regex::Regex;
use std::path::Path;

/// Look up a key in the environment, falling back to `./.envrc`.
///
/// Returns `None` when the key is set nowhere.
pub fn lookup(key: &str) -> Option<String> {
    if let Ok(value) = std::env::var(key) {
        return Some(value);
    }

    let envrc = std::env::current_dir().ok()?.join(".envrc");
    lookup_envrc(&envrc, key)
}

/// Scan an `.envrc` file for `export KEY=value`.
///
/// Accepts double-quoted, single-quoted, and bare values.
pub fn lookup_envrc(path: &Path, key: &str) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let escaped = regex::escape(key);

    let patterns = [
        format!(r#"export\s+{escaped}="([^"]*)""#),
        format!(r#"export\s+{escaped}='([^']*)'"#),
        format!(r#"export\s+{escaped}=(\S+)"#),
    ];

    for pattern in &patterns {
        let re = Regex::new(pattern).ok()?;
        if let Some(captures) = re.captures(&content) {
            return Some(captures[1].to_string());
        }
    }

    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_envrc(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(".envrc");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_lookup_prefers_environment() {
        std::env::set_var("RDFPUSH_TEST_LOOKUP", "from-env");
        assert_eq!(lookup("RDFPUSH_TEST_LOOKUP").as_deref(), Some("from-env"));
        std::env::remove_var("RDFPUSH_TEST_LOOKUP");
    }

    #[test]
    fn test_lookup_missing_key() {
        assert_eq!(lookup("RDFPUSH_TEST_DOES_NOT_EXIST"), None);
    }

    #[test]
    fn test_envrc_double_quoted() {
        let dir = TempDir::new().unwrap();
        let path = write_envrc(&dir, "export RDF_ENDPOINT=\"http://localhost:3030\"\n");
        assert_eq!(
            lookup_envrc(&path, "RDF_ENDPOINT").as_deref(),
            Some("http://localhost:3030")
        );
    }

    #[test]
    fn test_envrc_single_quoted() {
        let dir = TempDir::new().unwrap();
        let path = write_envrc(&dir, "export RDF_PASSWORD='s3cret pass'\n");
        assert_eq!(
            lookup_envrc(&path, "RDF_PASSWORD").as_deref(),
            Some("s3cret pass")
        );
    }

    #[test]
    fn test_envrc_bare_value() {
        let dir = TempDir::new().unwrap();
        let path = write_envrc(&dir, "export RDF_USERNAME=admin\nexport OTHER=x\n");
        assert_eq!(lookup_envrc(&path, "RDF_USERNAME").as_deref(), Some("admin"));
    }

    #[test]
    fn test_envrc_missing_key() {
        let dir = TempDir::new().unwrap();
        let path = write_envrc(&dir, "export SOMETHING_ELSE=1\n");
        assert_eq!(lookup_envrc(&path, "RDF_ENDPOINT"), None);
    }

    #[test]
    fn test_envrc_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".envrc");
        assert_eq!(lookup_envrc(&path, "RDF_ENDPOINT"), None);
    }
}
