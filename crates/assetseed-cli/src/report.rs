use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Write `value` as pretty JSON through a temp file and rename.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let data = serde_json::to_vec_pretty(value)?;
    write_bytes_atomic(path, &data)
}

pub fn write_bytes_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let parent = path.parent().filter(|parent| !parent.as_os_str().is_empty());
    if let Some(parent) = parent {
        create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path)?;
    let mut file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;

    if let Some(parent) = parent {
        sync_dir(parent)?;
    }
    std::fs::rename(&tmp_path, path)?;
    if let Some(parent) = parent {
        sync_dir(parent)?;
    }

    Ok(())
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "invalid path for atomic write")
    })?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

fn sync_dir(path: &Path) -> io::Result<()> {
    let dir = OpenOptions::new().read(true).open(path)?;
    dir.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_pretty_json_and_leaves_no_temp_file() {
        let dir = std::env::temp_dir().join(format!("assetseed_report_{}", uuid::Uuid::new_v4()));
        let path = dir.join("nested").join("report.json");

        write_json_atomic(&path, &serde_json::json!({ "documents_written": 3 })).expect("write");

        let content = std::fs::read_to_string(&path).expect("read");
        assert_eq!(content, "{\n  \"documents_written\": 3\n}");
        assert!(!path.with_file_name("report.json.tmp").exists());
    }

    #[test]
    fn replaces_existing_report_in_synced_dir() {
        let dir = std::env::temp_dir().join(format!("assetseed_report_{}", uuid::Uuid::new_v4()));
        let path = dir.join("report.json");

        write_bytes_atomic(&path, b"{\"old\": true}").expect("first write");
        write_bytes_atomic(&path, b"{}").expect("second write");

        assert_eq!(std::fs::read(&path).expect("read"), b"{}");
        sync_dir(&dir).expect("sync dir");
        let entries: Vec<_> = std::fs::read_dir(&dir)
            .expect("read dir")
            .filter_map(Result::ok)
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, ["report.json"]);
    }

    #[test]
    fn sync_dir_fails_on_missing_directory() {
        let missing = std::env::temp_dir().join(format!("assetseed_missing_{}", uuid::Uuid::new_v4()));
        assert_eq!(
            sync_dir(&missing).expect_err("missing").kind(),
            io::ErrorKind::NotFound
        );
    }

    #[test]
    fn rejects_paths_without_file_name() {
        let err = write_bytes_atomic(Path::new("/"), b"{}").expect_err("no file name");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
