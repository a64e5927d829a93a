use std::fs;
use std::path::Path;

use super::error::Result;

/// Read a text file verbatim. The content replaces the buffer wholesale.
pub fn load(path: &str) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Write the buffer's text bytes to `path` exactly as they are, regardless
/// of the chosen extension. The "Export PDF" action suggests a `.pdf` name
/// but the output is plain text, not a PDF container (see DESIGN.md).
pub fn export(path: &str, contents: &str) -> Result<()> {
    Ok(fs::write(path, contents)?)
}

/// Extract filename from a file path, or "Unknown" if it can't be extracted.
pub fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let content = "line one\nline two\n\ttabbed";
        fs::write(&path, content).unwrap();

        let loaded = load(path.to_str().unwrap()).unwrap();
        assert_eq!(loaded, content);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.txt");
        assert!(load(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn test_export_writes_raw_text_bytes() {
        let dir = tempfile::tempdir().unwrap();
        // The suggested extension is .pdf but the bytes are the buffer text
        let path = dir.path().join("report.pdf");
        let content = "not actually a pdf";
        export(path.to_str().unwrap(), content).unwrap();

        assert_eq!(fs::read(&path).unwrap(), content.as_bytes());
    }

    #[test]
    fn test_export_ignores_extension() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.pdf", "b.txt", "c"] {
            let path = dir.path().join(name);
            export(path.to_str().unwrap(), "same bytes").unwrap();
            assert_eq!(fs::read_to_string(&path).unwrap(), "same bytes");
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("/home/user/test.txt"), "test.txt");
        assert_eq!(display_name("test.txt"), "test.txt");
        assert_eq!(display_name(""), "Unknown");
    }
}
