//! JSON persistence for canonical datasets and legacy exports

use crate::import::RawSpecies;
use serde::de::DeserializeOwned;
use spectrum_core::{Dataset, SpectrumError, SpectrumResult};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

fn read_json<T: DeserializeOwned>(path: &Path) -> SpectrumResult<T> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| SpectrumError::Parse(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Parse a canonical dataset file
pub fn read_dataset<P: AsRef<Path>>(path: P) -> SpectrumResult<Dataset> {
    read_json(path.as_ref())
}

/// Parse a legacy export (a JSON array of loosely-typed records)
pub fn read_raw_records<P: AsRef<Path>>(path: P) -> SpectrumResult<Vec<RawSpecies>> {
    read_json(path.as_ref())
}

/// Pretty-print a dataset to any writer
pub fn write_dataset<W: Write>(writer: W, dataset: &Dataset) -> SpectrumResult<()> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, dataset)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write a dataset through a temporary file in the target directory and rename it
/// into place, so readers never observe a partial file.
pub fn write_dataset_atomic<P: AsRef<Path>>(path: P, dataset: &Dataset) -> SpectrumResult<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    write_dataset(temp.as_file_mut(), dataset)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| SpectrumError::Io(e.error))?;

    debug!("Wrote {} species to {}", dataset.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrum_core::{utc_now, YearRange};
    use tempfile::TempDir;

    fn empty_dataset() -> Dataset {
        Dataset::new(Vec::new(), utc_now(), YearRange::default())
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("species_data.json");

        write_dataset_atomic(&path, &empty_dataset()).unwrap();

        let loaded = read_dataset(&path).unwrap();
        assert_eq!(loaded.metadata.total_count, 0);
        assert_eq!(loaded.metadata.year_range, YearRange::default());
    }

    #[test]
    fn test_atomic_write_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("species_data.json");
        fs::write(&path, "stale").unwrap();

        write_dataset_atomic(&path, &empty_dataset()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"totalCount\": 0"));
        // Only the target remains; the temporary file was renamed
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_malformed_input_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "[{\"commonName\": ").unwrap();

        match read_raw_records(&path) {
            Err(SpectrumError::Parse(msg)) => assert!(msg.contains("broken.json")),
            other => panic!("Expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            read_dataset(dir.path().join("absent.json")),
            Err(SpectrumError::Io(_))
        ));
    }
}
