use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    series_requests: AtomicU64,
    summary_requests: AtomicU64,
    store_errors: AtomicU64,
    dropped_log_ids: AtomicU64,
    upload_requests: AtomicU64,
    upload_errors: AtomicU64,
}

impl Metrics {
    pub fn record_series_request(&self) {
        self.series_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_summary_request(&self) {
        self.summary_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_error(&self) {
        self.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dropped_log_ids(&self, count: u64) {
        self.dropped_log_ids.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_upload(&self) {
        self.upload_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_upload_error(&self) {
        self.upload_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let series = self.series_requests.load(Ordering::Relaxed);
        let summaries = self.summary_requests.load(Ordering::Relaxed);
        let store_errors = self.store_errors.load(Ordering::Relaxed);
        let dropped = self.dropped_log_ids.load(Ordering::Relaxed);
        let uploads = self.upload_requests.load(Ordering::Relaxed);
        let upload_errors = self.upload_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE depot_series_requests_total counter\n\
depot_series_requests_total {}\n\
# TYPE depot_summary_requests_total counter\n\
depot_summary_requests_total {}\n\
# TYPE depot_store_errors_total counter\n\
depot_store_errors_total {}\n\
# TYPE depot_dropped_log_ids_total counter\n\
depot_dropped_log_ids_total {}\n\
# TYPE depot_upload_requests_total counter\n\
depot_upload_requests_total {}\n\
# TYPE depot_upload_errors_total counter\n\
depot_upload_errors_total {}\n",
            series, summaries, store_errors, dropped, uploads, upload_errors
        )
    }
}
