//! Conflict-safe file relocation.
//!
//! Moving a file into a destination directory must never overwrite an
//! existing file. When the naive destination is taken, a numeric suffix is
//! appended before the extension (`report_1.pdf`, `report_2.pdf`, ...) until
//! a free name is found. The undo path uses the same probe loop with a
//! `_restored_N` suffix, so the logic lives here once, parameterized by
//! suffix style.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Suffix convention used when the destination name is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixStyle {
    /// `name_1.ext`, `name_2.ext`, ... (organize).
    Numbered,
    /// `name_restored_1.ext`, `name_restored_2.ext`, ... (undo).
    Restored,
}

impl SuffixStyle {
    /// Builds the nth candidate file name for a (stem, extension) pair.
    fn candidate(&self, stem: &str, ext: Option<&str>, n: u32) -> String {
        let tag = match self {
            SuffixStyle::Numbered => format!("{}_{}", stem, n),
            SuffixStyle::Restored => format!("{}_restored_{}", stem, n),
        };
        match ext {
            Some(ext) => format!("{}.{}", tag, ext),
            None => tag,
        }
    }
}

/// Picks the first unoccupied destination path for `file_name` inside
/// `dest_dir`.
///
/// Returns the naive path when it is free; otherwise probes suffixed
/// candidates starting at `_1` and never reuses an occupied name.
pub fn resolve_destination(dest_dir: &Path, file_name: &str, style: SuffixStyle) -> PathBuf {
    let naive = dest_dir.join(file_name);
    if !naive.exists() {
        return naive;
    }

    let probe = Path::new(file_name);
    let stem = probe
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| file_name.to_string());
    let ext = probe.extension().map(|e| e.to_string_lossy().to_string());

    let mut counter = 1;
    loop {
        let candidate = dest_dir.join(style.candidate(&stem, ext.as_deref(), counter));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Moves `file_path` into `dest_dir` without clobbering anything there.
///
/// When `create_dir` is set the destination directory is created on demand
/// (the organize path; undo moves back into the root, which must already
/// exist). Returns the path the file ended up at.
pub fn move_into(
    file_path: &Path,
    dest_dir: &Path,
    style: SuffixStyle,
    create_dir: bool,
) -> io::Result<PathBuf> {
    if create_dir && !dest_dir.exists() {
        fs::create_dir_all(dest_dir)?;
    }

    let file_name = file_path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "file has no name component"))?
        .to_string_lossy()
        .to_string();

    let destination = resolve_destination(dest_dir, &file_name, style);
    fs::rename(file_path, &destination)?;
    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_destination_free_name() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dest = resolve_destination(temp_dir.path(), "foo.txt", SuffixStyle::Numbered);
        assert_eq!(dest, temp_dir.path().join("foo.txt"));
    }

    #[test]
    fn test_resolve_destination_numeric_suffix_sequence() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("foo.txt"), "a").expect("write");

        let dest = resolve_destination(temp_dir.path(), "foo.txt", SuffixStyle::Numbered);
        assert_eq!(dest, temp_dir.path().join("foo_1.txt"));

        fs::write(temp_dir.path().join("foo_1.txt"), "b").expect("write");
        let dest = resolve_destination(temp_dir.path(), "foo.txt", SuffixStyle::Numbered);
        assert_eq!(dest, temp_dir.path().join("foo_2.txt"));
    }

    #[test]
    fn test_resolve_destination_restored_suffix() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("foo.txt"), "a").expect("write");

        let dest = resolve_destination(temp_dir.path(), "foo.txt", SuffixStyle::Restored);
        assert_eq!(dest, temp_dir.path().join("foo_restored_1.txt"));
    }

    #[test]
    fn test_resolve_destination_no_extension() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        fs::write(temp_dir.path().join("Makefile"), "a").expect("write");

        let dest = resolve_destination(temp_dir.path(), "Makefile", SuffixStyle::Numbered);
        assert_eq!(dest, temp_dir.path().join("Makefile_1"));
    }

    #[test]
    fn test_move_into_creates_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let src = temp_dir.path().join("doc.pdf");
        fs::write(&src, "pdf").expect("write");

        let dest_dir = temp_dir.path().join("Documents");
        let moved = move_into(&src, &dest_dir, SuffixStyle::Numbered, true).expect("move");

        assert!(!src.exists());
        assert_eq!(moved, dest_dir.join("doc.pdf"));
        assert!(moved.exists());
    }

    #[test]
    fn test_move_into_never_overwrites() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dest_dir = temp_dir.path().join("Documents");
        fs::create_dir(&dest_dir).expect("mkdir");
        fs::write(dest_dir.join("doc.pdf"), "original").expect("write");

        let src = temp_dir.path().join("doc.pdf");
        fs::write(&src, "incoming").expect("write");

        let moved = move_into(&src, &dest_dir, SuffixStyle::Numbered, false).expect("move");
        assert_eq!(moved, dest_dir.join("doc_1.pdf"));

        let original = fs::read_to_string(dest_dir.join("doc.pdf")).expect("read");
        assert_eq!(original, "original");
        let incoming = fs::read_to_string(&moved).expect("read");
        assert_eq!(incoming, "incoming");
    }

    #[test]
    fn test_move_into_missing_directory_without_create_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let src = temp_dir.path().join("doc.pdf");
        fs::write(&src, "pdf").expect("write");

        let dest_dir = temp_dir.path().join("missing");
        let result = move_into(&src, &dest_dir, SuffixStyle::Numbered, false);
        assert!(result.is_err());
        assert!(src.exists());
    }
}
