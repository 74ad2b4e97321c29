//! Load-once dataset cache
//!
//! [`DatasetStore`] fetches through a [`DatasetSource`] on the first
//! successful `load` and hands out the same `Arc<Dataset>` until `clear`.

use async_trait::async_trait;
use parking_lot::RwLock;
use spectrum_core::{Dataset, SpectrumError, SpectrumResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Where a dataset comes from
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetch and parse the full dataset
    async fn fetch(&self) -> SpectrumResult<Dataset>;

    /// Human-readable origin, used in log lines
    fn describe(&self) -> String;
}

/// Reads a canonical dataset JSON file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn fetch(&self) -> SpectrumResult<Dataset> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SpectrumError::NotFound(format!("Dataset file not found: {}", self.path.display()))
            } else {
                SpectrumError::Io(e)
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            SpectrumError::Parse(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub struct DatasetStore<S: DatasetSource> {
    source: S,
    cached: RwLock<Option<Arc<Dataset>>>,
}

impl<S: DatasetSource> DatasetStore<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cached: RwLock::new(None),
        }
    }

    /// Return the cached dataset, fetching it on first use.
    ///
    /// A failed fetch leaves the cache empty so a later call retries.
    /// Concurrent first calls may each fetch; the last success wins.
    pub async fn load(&self) -> SpectrumResult<Arc<Dataset>> {
        if let Some(dataset) = self.cached() {
            debug!("Dataset cache hit");
            return Ok(dataset);
        }

        let dataset = match self.source.fetch().await {
            Ok(dataset) => Arc::new(dataset),
            Err(e) => {
                warn!("Failed to load dataset from {}: {}", self.source.describe(), e);
                return Err(e);
            }
        };

        info!(
            species = dataset.len(),
            years = %dataset.metadata.year_range,
            "Loaded dataset from {}",
            self.source.describe()
        );
        *self.cached.write() = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    /// The cached dataset, if any, without fetching
    pub fn cached(&self) -> Option<Arc<Dataset>> {
        self.cached.read().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.cached.read().is_some()
    }

    /// Drop the cached dataset; the next `load` fetches again
    pub fn clear(&self) {
        *self.cached.write() = None;
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl DatasetStore<FileSource> {
    /// Store backed by a dataset file
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(FileSource::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectrum_core::{utc_now, YearRange};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
        fail_first: bool,
    }

    impl CountingSource {
        fn new(fail_first: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_first,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DatasetSource for CountingSource {
        async fn fetch(&self) -> SpectrumResult<Dataset> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_first && call == 0 {
                return Err(SpectrumError::Other("network unavailable".to_string()));
            }
            Ok(Dataset::new(Vec::new(), utc_now(), YearRange::default()))
        }

        fn describe(&self) -> String {
            "counting source".to_string()
        }
    }

    #[tokio::test]
    async fn test_load_fetches_once() {
        let store = DatasetStore::new(CountingSource::new(false));
        assert!(!store.is_loaded());

        let first = store.load().await.unwrap();
        let second = store.load().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.source().calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_load_leaves_cache_empty() {
        let store = DatasetStore::new(CountingSource::new(true));

        assert!(store.load().await.is_err());
        assert!(store.cached().is_none());

        assert!(store.load().await.is_ok());
        assert_eq!(store.source().calls(), 2);
    }

    #[tokio::test]
    async fn test_clear_forces_refetch() {
        let store = DatasetStore::new(CountingSource::new(false));
        store.load().await.unwrap();

        store.clear();
        assert!(!store.is_loaded());

        store.load().await.unwrap();
        assert_eq!(store.source().calls(), 2);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = DatasetStore::from_path(dir.path().join("species_data.json"));

        assert!(matches!(store.load().await, Err(SpectrumError::NotFound(_))));
        assert!(!store.is_loaded());
    }
}
