use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::application::ports::sign_off_log::SignOffLog;

/// Sign-off log kept as a plain text file, one entry per line.
pub struct FileSignOffLog {
    path: PathBuf,
}

impl FileSignOffLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SignOffLog for FileSignOffLog {
    async fn append(&self, line: &str) -> anyhow::Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn appends_lines_in_order() {
        let temp = TempDir::new().unwrap();
        let log = FileSignOffLog::new(temp.path().join("sign_off_log.txt"));
        log.append("first\n").await.unwrap();
        log.append("second\n").await.unwrap();
        let body = std::fs::read_to_string(log.path()).unwrap();
        assert_eq!(body, "first\nsecond\n");
    }

    #[tokio::test]
    async fn missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let log = FileSignOffLog::new(temp.path().join("absent").join("log.txt"));
        assert!(log.append("line\n").await.is_err());
    }
}
