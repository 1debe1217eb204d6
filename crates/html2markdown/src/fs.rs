//! File-based conversion on top of [`Converter::convert`].

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::converter::Converter;
use crate::{Html2MarkdownError, Result};

const SOURCE_EXTENSION: &str = "html";
const TARGET_EXTENSION: &str = "markdown";
const UTF8_BOM: &str = "\u{feff}";

impl Converter {
    /// Read an HTML file and convert its contents to Markdown
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Html2MarkdownError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let html = String::from_utf8_lossy(&bytes);
        debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(self.convert(html.strip_prefix(UTF8_BOM).unwrap_or(&html)))
    }

    /// Convert every `.html` file directly inside `dir` into a sibling
    /// `.markdown` file, then delete the original.
    ///
    /// Subdirectories are not visited. A destination that already exists
    /// aborts the run with [`Html2MarkdownError::DestinationExists`]; files
    /// converted before that point stay converted. Returns the written paths.
    pub fn convert_files_in_place(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let mut written = Vec::new();

        for source in html_files(dir)? {
            let markdown = self.convert_file(&source)?;
            let target = source.with_extension(TARGET_EXTENSION);
            write_new(&target, &markdown)?;
            fs::remove_file(&source).map_err(|err| Html2MarkdownError::Remove {
                path: source.clone(),
                source: err,
            })?;
            info!("Converted {} -> {}", source.display(), target.display());
            written.push(target);
        }

        Ok(written)
    }
}

/// Regular files in `dir` with an `.html` extension, sorted by path
fn html_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir_error = |source| Html2MarkdownError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let path = entry.path();
        let is_html = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION));
        if is_html && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Create `path` exclusively and write `contents` as UTF-8
fn write_new(path: &Path, contents: &str) -> Result<()> {
    let write_error = |source| Html2MarkdownError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|err| match err.kind() {
            ErrorKind::AlreadyExists => Html2MarkdownError::DestinationExists {
                path: path.to_path_buf(),
            },
            _ => write_error(err),
        })?;
    file.write_all(contents.as_bytes()).map_err(write_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_file_strips_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        fs::write(&path, "\u{feff}<h1>Title</h1>\n<p>Body</p>").unwrap();

        let markdown = Converter::new().convert_file(&path).unwrap();
        assert_eq!(markdown, "# Title\r\n\r\nBody");
    }

    #[test]
    fn test_convert_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Converter::new()
            .convert_file(dir.path().join("missing.html"))
            .unwrap_err();
        assert!(matches!(err, Html2MarkdownError::Read { .. }));
    }

    #[test]
    fn test_html_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.html", "a.HTML", "c.htm", "notes.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("nested.html")).unwrap();

        let files = html_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["a.HTML", "b.html"]);
    }

    #[test]
    fn test_write_new_is_exclusive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.markdown");
        write_new(&path, "first").unwrap();

        let err = write_new(&path, "second").unwrap_err();
        assert!(matches!(err, Html2MarkdownError::DestinationExists { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }
}
