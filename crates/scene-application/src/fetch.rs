//! Cached scene reads.

use scene_core::error::ViewerError;
use scene_core::page::FetchStatus;
use scene_core::scene::{SceneApi, SceneIdentifier};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{RwLock, watch};

type InFlight = watch::Sender<Option<FetchStatus>>;

/// Resolves scene identifiers into scene records through [`SceneApi`].
///
/// Results are cached per identifier, so mounting the same scene again does
/// not read it a second time. A caller that asks for a scene whose read is
/// still in flight joins that read instead of issuing another. Failed reads
/// are terminal and not retried unless [`SceneFetchGateway::refetch`] is
/// called.
pub struct SceneFetchGateway {
    api: Arc<dyn SceneApi>,
    /// Latest status per identifier
    entries: Arc<RwLock<HashMap<SceneIdentifier, FetchStatus>>>,
    /// Completion channels of reads started by `fetch`
    in_flight: Mutex<HashMap<SceneIdentifier, InFlight>>,
    revision: AtomicU64,
}

impl SceneFetchGateway {
    pub fn new(api: Arc<dyn SceneApi>) -> Self {
        Self {
            api,
            entries: Arc::new(RwLock::new(HashMap::new())),
            in_flight: Mutex::new(HashMap::new()),
            revision: AtomicU64::new(0),
        }
    }

    /// Cached status for `scene` without issuing a read.
    pub async fn status(&self, scene: Option<&SceneIdentifier>) -> FetchStatus {
        let Some(scene) = scene else {
            return FetchStatus::Disabled;
        };
        let entries = self.entries.read().await;
        entries.get(scene).cloned().unwrap_or(FetchStatus::Pending)
    }

    /// Returns the cached result for `scene`, reading it first if needed.
    ///
    /// With no identifier the read is disabled and never issued. While a read
    /// for the same identifier is in flight this waits for its result.
    pub async fn fetch(&self, scene: Option<&SceneIdentifier>) -> FetchStatus {
        let Some(scene) = scene else {
            return FetchStatus::Disabled;
        };

        loop {
            let waiter = {
                let mut entries = self.entries.write().await;
                if let Some(cached) = entries.get(scene).filter(|s| !matches!(s, FetchStatus::Pending)) {
                    tracing::debug!(scene = %scene, "scene served from cache");
                    return cached.clone();
                }
                entries.insert(scene.clone(), FetchStatus::Pending);

                let mut in_flight = self.in_flight();
                match in_flight.get(scene) {
                    Some(read) => Some(read.subscribe()),
                    None => {
                        in_flight.insert(scene.clone(), watch::channel(None).0);
                        None
                    }
                }
            };

            let Some(mut waiter) = waiter else {
                let pending = PendingRead {
                    in_flight: &self.in_flight,
                    scene,
                    finished: false,
                };
                let status = self.read(scene).await;
                pending.finish(&status);
                return status;
            };

            tracing::debug!(scene = %scene, "joining in-flight scene read");
            let joined = match waiter.wait_for(Option::is_some).await {
                Ok(done) => done.clone(),
                Err(_) => None,
            };
            if let Some(status) = joined {
                return status;
            }
            // The read we joined was abandoned; start over.
        }
    }

    /// Reads `scene` again, replacing any cached result wholesale.
    pub async fn refetch(&self, scene: Option<&SceneIdentifier>) -> FetchStatus {
        let Some(scene) = scene else {
            return FetchStatus::Disabled;
        };
        self.read(scene).await
    }

    /// Drops the cached result for `scene`.
    pub async fn invalidate(&self, scene: &SceneIdentifier) {
        let mut entries = self.entries.write().await;
        entries.remove(scene);
    }

    /// Clears all cached results.
    pub async fn clear(&self) {
        let mut entries = self.entries.write().await;
        entries.clear();
    }

    async fn read(&self, scene: &SceneIdentifier) -> FetchStatus {
        let status = match self.api.fetch_scene(scene).await {
            Ok(record) => {
                let revision = self.revision.fetch_add(1, Ordering::SeqCst) + 1;
                tracing::debug!(scene = %scene, revision, "scene loaded");
                FetchStatus::Success {
                    record: Arc::new(record),
                    revision,
                }
            }
            Err(e) => {
                tracing::warn!(scene = %scene, error = %e, "[SceneFetch] read failed");
                let error = if e.is_load_failure() {
                    e
                } else {
                    ViewerError::load_failure(scene.as_str(), e.to_string())
                };
                FetchStatus::Error(error)
            }
        };

        let mut entries = self.entries.write().await;
        entries.insert(scene.clone(), status.clone());
        status
    }

    fn in_flight(&self) -> MutexGuard<'_, HashMap<SceneIdentifier, InFlight>> {
        lock_in_flight(&self.in_flight)
    }
}

fn lock_in_flight(
    in_flight: &Mutex<HashMap<SceneIdentifier, InFlight>>,
) -> MutexGuard<'_, HashMap<SceneIdentifier, InFlight>> {
    in_flight.lock().unwrap_or_else(|e| e.into_inner())
}

/// Completion handle of a read started by `fetch`.
///
/// Dropping it unfinished (the read future was cancelled) releases any
/// joined callers and lets the next `fetch` start a new read.
struct PendingRead<'a> {
    in_flight: &'a Mutex<HashMap<SceneIdentifier, InFlight>>,
    scene: &'a SceneIdentifier,
    finished: bool,
}

impl PendingRead<'_> {
    fn finish(mut self, status: &FetchStatus) {
        self.finished = true;
        if let Some(read) = lock_in_flight(self.in_flight).remove(self.scene) {
            read.send_replace(Some(status.clone()));
        }
    }
}

impl Drop for PendingRead<'_> {
    fn drop(&mut self) {
        if !self.finished {
            tracing::debug!(scene = %self.scene, "scene read abandoned");
            lock_in_flight(self.in_flight).remove(self.scene);
        }
    }
}
