//! Code bundle derivation
//!
//! Wraps the canary source directory into an archive declaration at a
//! freshly generated, time-derived output path. Each build must be
//! observably distinct to the provisioning engine so code changes are
//! always redeployed; even byte-identical source produces a "changed"
//! artifact. The Blake3 content hash is recorded on the bundle as
//! metadata so downstream tooling can still recognize no-op rebuilds.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::ComposeError;

/// Last build stamp handed out, in milliseconds
///
/// Guarantees in-process strict monotonicity even when two builds land on
/// the same clock tick.
static LAST_STAMP: AtomicU64 = AtomicU64::new(0);

/// A derived code bundle declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBundle {
    source_dir: PathBuf,
    output_path: String,
    content_hash: [u8; 32],
}

impl CodeBundle {
    /// Directory the bundle was derived from
    #[inline]
    #[must_use]
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Freshly generated archive output path
    #[inline]
    #[must_use]
    pub fn output_path(&self) -> &str {
        &self.output_path
    }

    /// Blake3 hash of the source content (hex)
    #[inline]
    #[must_use]
    pub fn content_hash_hex(&self) -> String {
        hex::encode(self.content_hash)
    }
}

/// Derive a bundle declaration from a source directory
///
/// # Errors
/// Returns [`ComposeError::SourceMissing`] or
/// [`ComposeError::SourceNotADirectory`] for an invalid path, and
/// [`ComposeError::SourceRead`] if walking the directory fails.
pub fn bundle_source(source_dir: &Path) -> Result<CodeBundle, ComposeError> {
    if !source_dir.exists() {
        return Err(ComposeError::SourceMissing(source_dir.to_path_buf()));
    }
    if !source_dir.is_dir() {
        return Err(ComposeError::SourceNotADirectory(source_dir.to_path_buf()));
    }

    let content_hash = hash_directory(source_dir)?;
    let stamp = fresh_stamp(build_millis());
    let output_path = format!("index-{}.zip", base36(stamp));

    tracing::debug!(
        source = %source_dir.display(),
        output = %output_path,
        hash = %hex::encode(&content_hash[..8]),
        "derived code bundle"
    );

    Ok(CodeBundle {
        source_dir: source_dir.to_path_buf(),
        output_path,
        content_hash,
    })
}

fn build_millis() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Take a stamp strictly greater than any previously handed out
fn fresh_stamp(now_ms: u64) -> u64 {
    loop {
        let last = LAST_STAMP.load(Ordering::SeqCst);
        let stamp = now_ms.max(last + 1);
        if LAST_STAMP
            .compare_exchange(last, stamp, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            return stamp;
        }
    }
}

/// Lowercase base-36 rendering, matching the cache-busting name scheme
fn base36(mut value: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Hash every file under the directory, sorted by relative path
fn hash_directory(root: &Path) -> Result<[u8; 32], ComposeError> {
    let mut files = Vec::new();
    collect_files(root, root, &mut files)?;
    files.sort();

    let mut hasher = blake3::Hasher::new();
    for relative in files {
        hasher.update(relative.to_string_lossy().as_bytes());
        hasher.update(&[0]);
        let bytes = fs::read(root.join(&relative)).map_err(|source| ComposeError::SourceRead {
            path: root.join(&relative),
            source,
        })?;
        hasher.update(&bytes);
        hasher.update(&[0]);
    }
    Ok(*hasher.finalize().as_bytes())
}

fn collect_files(
    root: &Path,
    dir: &Path,
    files: &mut Vec<PathBuf>,
) -> Result<(), ComposeError> {
    let entries = fs::read_dir(dir).map_err(|source| ComposeError::SourceRead {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| ComposeError::SourceRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_dir() {
            collect_files(root, &path, files)?;
        } else if let Ok(relative) = path.strip_prefix(root) {
            files.push(relative.to_path_buf());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn source_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let mut f = File::create(dir.path().join("index.js")).unwrap();
        writeln!(f, "exports.handler = async () => {{}};").unwrap();
        dir
    }

    #[test]
    fn missing_source_rejected() {
        let result = bundle_source(Path::new("/nonexistent/canary/src"));
        assert!(matches!(result, Err(ComposeError::SourceMissing(_))));
    }

    #[test]
    fn file_source_rejected() {
        let dir = source_dir();
        let file = dir.path().join("index.js");
        let result = bundle_source(&file);
        assert!(matches!(result, Err(ComposeError::SourceNotADirectory(_))));
    }

    #[test]
    fn output_path_shape() {
        let dir = source_dir();
        let bundle = bundle_source(dir.path()).unwrap();
        let path = bundle.output_path();
        assert!(path.starts_with("index-"));
        assert!(path.ends_with(".zip"));
    }

    #[test]
    fn sequential_builds_produce_distinct_paths() {
        // freshness: identical source must still yield distinct artifacts
        let dir = source_dir();
        let first = bundle_source(dir.path()).unwrap();
        let second = bundle_source(dir.path()).unwrap();
        assert_ne!(first.output_path(), second.output_path());
        // same content, same recorded hash
        assert_eq!(first.content_hash_hex(), second.content_hash_hex());
    }

    #[test]
    fn content_hash_tracks_source_changes() {
        let dir = source_dir();
        let before = bundle_source(dir.path()).unwrap();
        let mut f = File::create(dir.path().join("helper.js")).unwrap();
        writeln!(f, "module.exports = 42;").unwrap();
        let after = bundle_source(dir.path()).unwrap();
        assert_ne!(before.content_hash_hex(), after.content_hash_hex());
    }

    #[test]
    fn nested_directories_are_hashed() {
        let dir = source_dir();
        fs::create_dir(dir.path().join("lib")).unwrap();
        let mut f = File::create(dir.path().join("lib/util.js")).unwrap();
        writeln!(f, "module.exports = {{}};").unwrap();
        let with_nested = bundle_source(dir.path()).unwrap();

        let flat = source_dir();
        let without = bundle_source(flat.path()).unwrap();
        assert_ne!(with_nested.content_hash_hex(), without.content_hash_hex());
    }

    #[test]
    fn base36_rendering() {
        assert_eq!(base36(0), "0");
        assert_eq!(base36(35), "z");
        assert_eq!(base36(36), "10");
        assert_eq!(base36(1_234_567_890), "kf12oi");
    }

    #[test]
    fn fresh_stamp_strictly_increases() {
        let a = fresh_stamp(1000);
        let b = fresh_stamp(1000);
        let c = fresh_stamp(999);
        assert!(b > a);
        assert!(c > b);
    }
}
