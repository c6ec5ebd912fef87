//! Export helpers for writing a word list as a JSON array.
//!
//! - `render_json` produces the exact text written to disk: 2-space
//!   indentation, non-ASCII characters kept literal, no trailing newline.
//! - `save_words_json` writes that text atomically. The JSON goes to a
//!   temporary file next to the destination, which is renamed over the
//!   destination only once fully written. A failed run leaves any previous
//!   output untouched. A symlinked destination is followed and its target
//!   replaced; a read-only destination is refused.
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use tempfile::NamedTempFile;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot serialize word list: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub fn render_json(words: &[String]) -> Result<String, ExportError> {
    serde_json::to_string_pretty(words).map_err(ExportError::Serialize)
}

/// Stream the JSON rendering of `words` into `writer`.
pub fn write_json<W: Write>(words: &[String], writer: W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(writer, words)
}

pub fn save_words_json<P: AsRef<Path>>(words: &[String], path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    let io_err = |source: io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let dest = resolve_destination(path).map_err(io_err)?;
    if let Ok(meta) = fs::metadata(&dest) {
        if meta.permissions().readonly() {
            return Err(io_err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "destination is read-only",
            )));
        }
    }
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    {
        let mut w = BufWriter::new(tmp.as_file_mut());
        write_json(words, &mut w).map_err(|e| {
            if e.is_io() {
                io_err(e.into())
            } else {
                ExportError::Serialize(e)
            }
        })?;
        w.flush().map_err(io_err)?;
    }
    tmp.as_file().sync_all().map_err(io_err)?;
    if let Some(perms) = target_permissions(&dest) {
        tmp.as_file().set_permissions(perms).map_err(io_err)?;
    }
    debug!("renaming {} -> {}", tmp.path().display(), dest.display());
    tmp.persist(&dest).map_err(|e| io_err(e.error))?;
    Ok(())
}

/// The file a write to `path` lands on: symlinks are followed, including a
/// dangling one whose target does not exist yet.
fn resolve_destination(path: &Path) -> io::Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(path) {
            Ok(target) => Ok(target),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let target = fs::read_link(path)?;
                Ok(match path.parent() {
                    Some(dir) => dir.join(target),
                    None => target,
                })
            }
            Err(e) => Err(e),
        },
        _ => Ok(path.to_path_buf()),
    }
}

// Temp files are created 0600; give the result the permissions a plain
// create would have, or keep those of the file being replaced.
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    if let Ok(meta) = fs::metadata(path) {
        return Some(meta.permissions());
    }
    default_permissions()
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn renders_two_space_indented_array() {
        let s = render_json(&words(&["apple", "banana", "cherry"])).unwrap();
        insta::assert_snapshot!(s, @r#"
        [
          "apple",
          "banana",
          "cherry"
        ]
        "#);
    }

    #[test]
    fn renders_empty_list_compactly() {
        assert_eq!(render_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn keeps_non_ascii_literal() {
        let s = render_json(&words(&["café", "naïve", "日本"])).unwrap();
        assert!(s.contains("\"café\""));
        assert!(s.contains("\"日本\""));
        assert!(!s.contains("\\u"));
    }

    #[test]
    fn escapes_json_specials() {
        let s = render_json(&words(&["say \"hi\"", "a\\b"])).unwrap();
        let back: Vec<String> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, words(&["say \"hi\"", "a\\b"]));
    }

    #[test]
    fn save_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("words.json");
        std::fs::write(&out, "x".repeat(4096)).unwrap();
        save_words_json(&words(&["one"]), &out).unwrap();
        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(content, "[\n  \"one\"\n]");
        // only the destination remains, no stray temp file
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn save_through_symlink_replaces_target() {
        let dir = tempdir().unwrap();
        let real = dir.path().join("real.json");
        let link = dir.path().join("words.json");
        std::fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();
        save_words_json(&words(&["apple"]), &link).unwrap();
        assert!(
            std::fs::symlink_metadata(&link)
                .unwrap()
                .file_type()
                .is_symlink()
        );
        assert_eq!(
            std::fs::read_to_string(&real).unwrap(),
            "[\n  \"apple\"\n]"
        );
    }

    #[cfg(unix)]
    #[test]
    fn save_through_dangling_symlink_creates_target() {
        let dir = tempdir().unwrap();
        let link = dir.path().join("words.json");
        std::os::unix::fs::symlink("real.json", &link).unwrap();
        save_words_json(&words(&["apple"]), &link).unwrap();
        assert!(
            std::fs::symlink_metadata(&link)
                .unwrap()
                .file_type()
                .is_symlink()
        );
        assert_eq!(
            std::fs::read_to_string(dir.path().join("real.json")).unwrap(),
            "[\n  \"apple\"\n]"
        );
    }

    #[test]
    fn save_over_read_only_file_fails() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("words.json");
        std::fs::write(&out, "old").unwrap();
        let mut perms = std::fs::metadata(&out).unwrap().permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(&out, perms).unwrap();
        let err = save_words_json(&words(&["apple"]), &out).unwrap_err();
        match err {
            ExportError::Io { path, source } => {
                assert_eq!(path, out);
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(std::fs::read_to_string(&out).unwrap(), "old");
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nope").join("words.json");
        let err = save_words_json(&words(&["one"]), &out).unwrap_err();
        match err {
            ExportError::Io { path, source } => {
                assert_eq!(path, out);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!out.exists());
    }
}
