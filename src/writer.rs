use crate::config::AppendConfig;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/**
 * @brief Append raw bytes to a file, creating the file if missing.
 * @param path Target file.
 * @param payload Bytes to write after the existing contents.
 */
pub fn append_to(path: &Path, payload: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(payload)?;
    file.flush()
}

/**
 * @brief Append the configured content to the configured file.
 * @param cfg Resolved invocation.
 * @return Number of bytes appended.
 */
pub fn append(cfg: &AppendConfig) -> io::Result<u64> {
    let payload = cfg.payload();
    log::debug!("appending {} bytes to {}", payload.len(), cfg.file.display());
    append_to(&cfg.file, payload.as_bytes())
        .map_err(|e| io::Error::new(e.kind(), format!("{}: {}", cfg.file.display(), e)))?;
    Ok(payload.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NewlineFlag;

    #[test]
    fn creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("out.txt");
        let n = append(&AppendConfig::new(&p, "hello", NewlineFlag::Plain)).unwrap();
        assert_eq!(n, 5);
        assert_eq!(std::fs::read_to_string(&p).unwrap(), "hello");
    }

    #[test]
    fn empty_payload_still_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("empty.txt");
        assert_eq!(append(&AppendConfig::new(&p, "", NewlineFlag::Plain)).unwrap(), 0);
        assert!(p.exists());
        assert_eq!(std::fs::metadata(&p).unwrap().len(), 0);
    }

    #[test]
    fn directory_target_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(append_to(dir.path(), b"x").is_err());
    }

    #[test]
    fn error_names_the_target_path() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("missing").join("out.txt");
        let err = append(&AppendConfig::new(&p, "x", NewlineFlag::Plain)).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("out.txt"));
    }
}
