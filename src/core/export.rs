//! Save the on-screen text to a `.txt` file

use std::fs;
use std::path::{Path, PathBuf};

use directories::UserDirs;
use thiserror::Error;

/// Errors raised while writing an export
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing the file failed
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// No directory to write into could be determined
    #[error("No export directory available")]
    NoTargetDir,
}

/// A plain-text file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

impl ExportFile {
    /// Build `<title>.txt` holding `contents` verbatim
    pub fn new(title: &str, contents: &str) -> Self {
        Self {
            file_name: format!("{}.txt", sanitize_title(title)),
            contents: contents.to_string(),
        }
    }
}

/// Make a tab title safe to use as a file stem
pub fn sanitize_title(title: &str) -> String {
    let cleaned: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        "untitled".to_string()
    } else {
        cleaned
    }
}

/// Destination for exported files
pub trait ExportSink {
    /// Write the file. `Ok(None)` means the user backed out.
    fn deliver(&self, file: &ExportFile) -> Result<Option<PathBuf>, ExportError>;
}

/// Drops files straight into a directory, like a browser download
#[derive(Debug, Clone)]
pub struct DownloadDirSink {
    dir: Option<PathBuf>,
}

impl DownloadDirSink {
    /// Use `dir`, or the user's download folder when `None`
    pub fn new(dir: Option<PathBuf>) -> Self {
        let dir = dir.or_else(|| {
            UserDirs::new()
                .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
                .or_else(|| std::env::current_dir().ok())
        });
        Self { dir }
    }
}

impl ExportSink for DownloadDirSink {
    fn deliver(&self, file: &ExportFile) -> Result<Option<PathBuf>, ExportError> {
        let dir = self.dir.as_deref().ok_or(ExportError::NoTargetDir)?;
        let path = unique_path(dir, &file.file_name);
        write_file(&path, &file.contents)?;
        Ok(Some(path))
    }
}

/// Asks where to save with a native dialog
#[derive(Debug, Clone, Default)]
pub struct DialogSink {
    start_dir: Option<PathBuf>,
}

impl DialogSink {
    pub fn new(start_dir: Option<PathBuf>) -> Self {
        Self { start_dir }
    }
}

impl ExportSink for DialogSink {
    fn deliver(&self, file: &ExportFile) -> Result<Option<PathBuf>, ExportError> {
        let mut dialog = rfd::FileDialog::new()
            .set_file_name(&file.file_name)
            .add_filter("Text", &["txt"]);
        if let Some(ref dir) = self.start_dir {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.save_file() else {
            return Ok(None);
        };
        write_file(&path, &file.contents)?;
        Ok(Some(path))
    }
}

/// Pick `name`, or `stem (n).ext` if it already exists in `dir`
pub fn unique_path(dir: &Path, name: &str) -> PathBuf {
    let candidate = dir.join(name);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (name, None),
    };

    (1..)
        .map(|n| match ext {
            Some(ext) => dir.join(format!("{stem} ({n}).{ext}")),
            None => dir.join(format!("{stem} ({n})")),
        })
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}

fn write_file(path: &Path, contents: &str) -> Result<(), ExportError> {
    fs::write(path, contents.as_bytes()).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Deliver a file, logging the outcome instead of returning it
pub fn export(sink: &dyn ExportSink, file: &ExportFile) {
    match sink.deliver(file) {
        Ok(Some(path)) => tracing::info!("Exported {} to {}", file.file_name, path.display()),
        Ok(None) => tracing::debug!("Export of {} cancelled", file.file_name),
        Err(e) => tracing::error!("Export failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_title() {
        let file = ExportFile::new("about", "hello");
        assert_eq!(file.file_name, "about.txt");
        assert_eq!(file.contents, "hello");
    }

    #[test]
    fn test_sanitize_title() {
        assert_eq!(sanitize_title("a/b\\c"), "a_b_c");
        assert_eq!(sanitize_title("   "), "untitled");
        assert_eq!(sanitize_title(".."), "untitled");
        assert_eq!(sanitize_title("notes été"), "notes été");
    }

    #[test]
    fn test_download_dir_sink_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DownloadDirSink::new(Some(dir.path().to_path_buf()));

        let path = sink
            .deliver(&ExportFile::new("notes", "line one\nline two"))
            .unwrap()
            .unwrap();

        assert_eq!(path, dir.path().join("notes.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "line one\nline two");
    }

    #[test]
    fn test_download_dir_sink_avoids_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DownloadDirSink::new(Some(dir.path().to_path_buf()));
        let file = ExportFile::new("notes", "x");

        sink.deliver(&file).unwrap();
        let second = sink.deliver(&file).unwrap().unwrap();
        let third = sink.deliver(&file).unwrap().unwrap();

        assert_eq!(second, dir.path().join("notes (1).txt"));
        assert_eq!(third, dir.path().join("notes (2).txt"));
    }

    #[test]
    fn test_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DownloadDirSink::new(Some(dir.path().join("missing")));
        let err = sink.deliver(&ExportFile::new("notes", "x")).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
