use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SidediffError;

/// One input file, fully read into memory as UTF-8.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

impl SourceFile {
    /// Read a file whole. Missing paths and non-UTF-8 content are both
    /// fatal; the io::Error carries which one it was.
    pub fn load(path: &Path) -> Result<Self, SidediffError> {
        let content = fs::read_to_string(path).map_err(|source| SidediffError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "loaded file");
        Ok(SourceFile {
            path: path.to_path_buf(),
            content,
        })
    }

    /// First line of the content, for grammar detection on files
    /// without a telling extension.
    pub fn first_line(&self) -> &str {
        self.content.lines().next().unwrap_or("")
    }

    /// Display name for pane titles.
    pub fn name(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_reads_content() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "fn main() {{}}\n").unwrap();
        let source = SourceFile::load(tmp.path()).unwrap();
        assert_eq!(source.content, "fn main() {}\n");
        assert_eq!(source.path, tmp.path());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let err = SourceFile::load(Path::new("/no/such/file.rs")).unwrap_err();
        assert!(matches!(err, SidediffError::Read { .. }));
    }

    #[test]
    fn test_load_rejects_invalid_utf8() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();
        assert!(SourceFile::load(tmp.path()).is_err());
    }

    #[test]
    fn test_first_line() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        write!(tmp, "#!/usr/bin/env bash\necho hi\n").unwrap();
        let source = SourceFile::load(tmp.path()).unwrap();
        assert_eq!(source.first_line(), "#!/usr/bin/env bash");
    }

    #[test]
    fn test_first_line_of_empty_file() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let source = SourceFile::load(tmp.path()).unwrap();
        assert_eq!(source.first_line(), "");
    }
}
