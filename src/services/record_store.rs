//! Time-bounded in-memory cache of the student table
//!
//! The store owns the current snapshot and the instant it was loaded. A
//! snapshot younger than the TTL is handed out as-is; anything older (or no
//! snapshot at all) triggers a reload from the [`RecordSource`]. Reloads are
//! single-flight: concurrent misses wait on one load instead of each reading
//! the file.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::config::DataConfig;
use crate::errors::AppResult;
use crate::models::StudentRecord;
use crate::sources::{FileRecordSource, RecordSource};
use crate::utils::{Clock, SystemClock};

/// Immutable view of the table as of one load
#[derive(Debug)]
pub struct Snapshot {
    records: Vec<StudentRecord>,
    loaded_at: Instant,
}

impl Snapshot {
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub struct RecordStore {
    source: Arc<dyn RecordSource>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    serve_stale_on_error: bool,
    snapshot: RwLock<Option<Arc<Snapshot>>>,
    reload_lock: Mutex<()>,
}

impl RecordStore {
    pub fn new(source: Arc<dyn RecordSource>, clock: Arc<dyn Clock>, ttl: Duration) -> Self {
        Self {
            source,
            clock,
            ttl,
            serve_stale_on_error: false,
            snapshot: RwLock::new(None),
            reload_lock: Mutex::new(()),
        }
    }

    /// Build a store reading the configured file with the system clock
    pub fn from_config(config: &DataConfig) -> anyhow::Result<Self> {
        let source = FileRecordSource::new(config.path.clone(), config.delimiter_byte()?);
        Ok(Self::new(Arc::new(source), Arc::new(SystemClock), config.cache_ttl)
            .with_serve_stale_on_error(config.serve_stale_on_error))
    }

    /// Keep serving the previous snapshot when a reload fails
    pub fn with_serve_stale_on_error(mut self, enabled: bool) -> Self {
        self.serve_stale_on_error = enabled;
        self
    }

    /// Current snapshot, reloading it first if it is missing or expired
    pub async fn get_records(&self) -> AppResult<Arc<Snapshot>> {
        if let Some(snapshot) = self.fresh_snapshot().await {
            return Ok(snapshot);
        }

        let _reload = self.reload_lock.lock().await;

        // Another caller may have finished a reload while we waited
        if let Some(snapshot) = self.fresh_snapshot().await {
            debug!("Snapshot refreshed by a concurrent caller");
            return Ok(snapshot);
        }

        let now = self.clock.now();
        match self.source.load().await {
            Ok(records) => {
                info!(
                    "Loaded {} student records from {}",
                    records.len(),
                    self.source.describe()
                );
                let snapshot = Arc::new(Snapshot {
                    records,
                    loaded_at: now,
                });
                *self.snapshot.write().await = Some(Arc::clone(&snapshot));
                Ok(snapshot)
            }
            Err(e) => {
                if self.serve_stale_on_error {
                    if let Some(stale) = self.snapshot.read().await.clone() {
                        warn!(
                            "Reload of {} failed, serving stale snapshot of {} records: {}",
                            self.source.describe(),
                            stale.len(),
                            e
                        );
                        return Ok(stale);
                    }
                }
                Err(e.into())
            }
        }
    }

    async fn fresh_snapshot(&self) -> Option<Arc<Snapshot>> {
        let guard = self.snapshot.read().await;
        let snapshot = guard.as_ref()?;
        let age = self.clock.now().saturating_duration_since(snapshot.loaded_at);
        if age < self.ttl {
            Some(Arc::clone(snapshot))
        } else {
            None
        }
    }
}
