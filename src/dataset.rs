//! Read-only preview of the training dataset CSV.

use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::DatasetError;

/// Header plus the first few rows of the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetPreview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Number of data rows in the whole file.
    pub total_rows: usize,
}

/// Reads `path`, keeping at most `limit` rows. A missing file is reported as
/// [`DatasetError::NotFound`] so callers can degrade instead of failing.
pub fn load_preview(path: &Path, limit: usize) -> Result<DatasetPreview, DatasetError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => DatasetError::NotFound(path.to_path_buf()),
        _ => DatasetError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let mut rdr = csv::Reader::from_reader(file);

    let headers = rdr.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    let mut total_rows = 0;

    for result in rdr.records() {
        let record = result?;
        if rows.len() < limit {
            rows.push(record.iter().map(str::to_string).collect());
        }
        total_rows += 1;
    }

    Ok(DatasetPreview {
        headers,
        rows,
        total_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn preview_is_truncated_but_counts_everything() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tenure,Contract,Churn").unwrap();
        for i in 0..5 {
            writeln!(file, "{i},0,1").unwrap();
        }
        file.flush().unwrap();

        let preview = load_preview(file.path(), 2).unwrap();
        assert_eq!(preview.headers, vec!["tenure", "Contract", "Churn"]);
        assert_eq!(preview.rows.len(), 2);
        assert_eq!(preview.rows[1], vec!["1", "0", "1"]);
        assert_eq!(preview.total_rows, 5);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        assert!(matches!(
            load_preview(&path, 10),
            Err(DatasetError::NotFound(p)) if p == path
        ));
    }

    #[test]
    fn ragged_rows_are_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a,b").unwrap();
        writeln!(file, "1,2,3").unwrap();
        file.flush().unwrap();
        assert!(matches!(
            load_preview(file.path(), 10),
            Err(DatasetError::Csv(_))
        ));
    }
}
