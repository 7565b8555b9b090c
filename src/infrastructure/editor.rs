use crate::domain::{KeeperError, KeeperResult};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::process::Command;

/// Opens `editor` on a scratch file and returns whatever was saved into it.
///
/// The editor string may carry arguments (`code --wait`); it is split on
/// whitespace and the scratch path is appended last. The scratch file is
/// removed when this returns.
pub fn capture(editor: &str, max_bytes: usize) -> KeeperResult<String> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| KeeperError::Editor("no editor configured".to_string()))?;

    let scratch = tempfile::Builder::new()
        .prefix("keeper.")
        .suffix(".txt")
        .tempfile()?;

    tracing::debug!(editor = program, path = %scratch.path().display(), "launching editor");
    let status = Command::new(program)
        .args(parts)
        .arg(scratch.path())
        .status()
        .map_err(|e| KeeperError::Editor(format!("could not launch '{program}': {e}")))?;

    if !status.success() {
        return Err(KeeperError::Editor(format!("'{program}' exited with {status}")));
    }

    read_captured(scratch.path(), max_bytes)
}

/// Reads the whole captured file, refusing empty content and anything above `max_bytes`.
pub fn read_captured(path: &Path, max_bytes: usize) -> KeeperResult<String> {
    let file = File::open(path)?;
    let mut raw = Vec::new();
    // One byte past the limit is enough to tell "too large" apart from "exactly at the limit".
    file.take(max_bytes as u64 + 1).read_to_end(&mut raw)?;

    if raw.len() > max_bytes {
        let actual = std::fs::metadata(path).map(|m| m.len() as usize).unwrap_or(raw.len());
        return Err(KeeperError::ContentTooLarge {
            limit: max_bytes,
            actual,
        });
    }

    let text = String::from_utf8(raw)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if text.trim().is_empty() {
        return Err(KeeperError::EmptyContent);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_whole_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.txt");
        let body = "x".repeat(4000);
        fs::write(&path, &body).unwrap();

        assert_eq!(read_captured(&path, 8192).unwrap(), body);
    }

    #[test]
    fn test_content_at_limit_is_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.txt");
        fs::write(&path, "abcd").unwrap();

        assert_eq!(read_captured(&path, 4).unwrap(), "abcd");
    }

    #[test]
    fn test_content_over_limit_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.txt");
        fs::write(&path, "abcdef").unwrap();

        let err = read_captured(&path, 4).unwrap_err();
        assert!(matches!(err, KeeperError::ContentTooLarge { limit: 4, actual: 6 }));
    }

    #[test]
    fn test_blank_content_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.txt");
        fs::write(&path, " \n\n").unwrap();

        assert!(matches!(read_captured(&path, 64), Err(KeeperError::EmptyContent)));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(read_captured(&path, 64), Err(KeeperError::Io(_))));
    }

    #[test]
    fn test_blank_editor_is_rejected() {
        assert!(matches!(capture("  ", 64), Err(KeeperError::Editor(_))));
    }

    #[test]
    fn test_missing_editor_binary() {
        let err = capture("keeper-no-such-editor-binary", 64).unwrap_err();
        assert!(matches!(err, KeeperError::Editor(msg) if msg.contains("could not launch")));
    }

    #[cfg(unix)]
    #[test]
    fn test_editor_that_writes_nothing() {
        assert!(matches!(capture("true", 64), Err(KeeperError::EmptyContent)));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_editor() {
        assert!(matches!(capture("false", 64), Err(KeeperError::Editor(_))));
    }
}
