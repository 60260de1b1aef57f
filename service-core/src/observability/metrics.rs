//! Prometheus recorder shared by every HTTP route.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the global Prometheus recorder.
///
/// Safe to call more than once; later calls return the handle installed by
/// the first one. Returns `None` if another recorder already owns the global
/// slot.
pub fn init_metrics() -> Option<PrometheusHandle> {
    if let Some(handle) = METRICS_HANDLE.get() {
        return Some(handle.clone());
    }

    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => Some(METRICS_HANDLE.get_or_init(|| handle).clone()),
        Err(e) => {
            tracing::warn!("Failed to install Prometheus recorder: {}", e);
            METRICS_HANDLE.get().cloned()
        }
    }
}

/// Current metrics in Prometheus text format, if the recorder is installed.
pub fn render_metrics() -> Option<String> {
    METRICS_HANDLE.get().map(|handle| handle.render())
}
