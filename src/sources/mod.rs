//! Record sources
//!
//! A source produces the complete student table on demand. The record store
//! decides when to ask; sources never cache.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::{SourceError, SourceResult};
use crate::models::StudentRecord;

pub mod delimited;

pub use delimited::parse_records;

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Read and parse the whole table
    async fn load(&self) -> SourceResult<Vec<StudentRecord>>;

    /// Human-readable origin, used in log lines
    fn describe(&self) -> String;
}

/// Reads a headerless delimited file from local disk
pub struct FileRecordSource {
    path: PathBuf,
    delimiter: u8,
}

impl FileRecordSource {
    pub fn new<P: Into<PathBuf>>(path: P, delimiter: u8) -> Self {
        Self {
            path: path.into(),
            delimiter,
        }
    }
}

#[async_trait]
impl RecordSource for FileRecordSource {
    async fn load(&self) -> SourceResult<Vec<StudentRecord>> {
        debug!("Reading student table from {}", self.path.display());

        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SourceError::read(&self.path, e))?;

        parse_records(&text, self.delimiter, &self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tracing_test::traced_test;

    #[tokio::test]
    async fn test_file_source_reads_and_parses() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1,2024.2B,20190001,Lê Thị,Hoa,d,h,Nữ,Khá,m,c,2.9,s,Cử nhân").unwrap();
        writeln!(file, "too,short").unwrap();

        let source = FileRecordSource::new(file.path(), b',');
        let records = source.load().await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].full_name, "Lê Thị Hoa");
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileRecordSource::new(dir.path().join("absent.csv"), b',');

        let err = source.load().await.unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
    }

    #[tokio::test]
    #[traced_test]
    async fn test_read_failure_is_left_to_the_caller_to_log() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileRecordSource::new(dir.path().join("absent.csv"), b',');

        assert!(source.load().await.is_err());
        assert!(!logs_contain("ERROR"));
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, b',', b'\n']).unwrap();

        let source = FileRecordSource::new(file.path(), b',');
        assert!(source.load().await.is_err());
    }
}
