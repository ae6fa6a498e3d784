use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use take_me_hire::config::{StorageBackend, StorageConfig};
use take_me_hire::marketplace::{
    Availability, FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, UnknownAvailability,
};
use tracing::info;

/// Backend chosen at runtime from configuration.
pub(crate) type DynBackend = Arc<dyn KeyValueStore>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn open_backend(config: &StorageConfig) -> DynBackend {
    match config.backend {
        StorageBackend::File => {
            info!(data_dir = %config.data_dir.display(), "using file-backed candidate storage");
            Arc::new(FileKeyValueStore::new(config.data_dir.clone()))
        }
        StorageBackend::Memory => {
            info!("using in-memory candidate storage; profiles are lost on exit");
            Arc::new(MemoryKeyValueStore::new())
        }
    }
}

pub(crate) fn parse_availability(raw: &str) -> Result<Availability, String> {
    match Availability::parse_selection(raw) {
        Ok(Some(availability)) => Ok(availability),
        Ok(None) => Err("availability cannot be blank".to_string()),
        Err(UnknownAvailability(value)) => Err(format!(
            "unknown availability '{value}' (expected full-time, part-time or contract)"
        )),
    }
}
