use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    loads: AtomicU64,
    load_errors: AtomicU64,
    station_updates: AtomicU64,
    station_update_errors: AtomicU64,
    assignment_updates: AtomicU64,
    assignment_update_errors: AtomicU64,
    stale_guard_responses: AtomicU64,
}

impl Metrics {
    pub fn record_load(&self) {
        self.loads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_load_error(&self) {
        self.load_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_station_update(&self) {
        self.station_updates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_station_update_error(&self) {
        self.station_update_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_assignment_update(&self) {
        self.assignment_updates.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_assignment_update_error(&self) {
        self.assignment_update_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_stale_guard_response(&self) {
        self.stale_guard_responses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn stale_guard_responses(&self) -> u64 {
        self.stale_guard_responses.load(Ordering::Relaxed)
    }

    pub fn render_prometheus(&self) -> String {
        let loads = self.loads.load(Ordering::Relaxed);
        let load_errors = self.load_errors.load(Ordering::Relaxed);
        let station_updates = self.station_updates.load(Ordering::Relaxed);
        let station_update_errors = self.station_update_errors.load(Ordering::Relaxed);
        let assignment_updates = self.assignment_updates.load(Ordering::Relaxed);
        let assignment_update_errors = self.assignment_update_errors.load(Ordering::Relaxed);
        let stale = self.stale_guard_responses.load(Ordering::Relaxed);

        format!(
            "# TYPE gatepost_loads_total counter\n\
gatepost_loads_total {}\n\
# TYPE gatepost_load_errors_total counter\n\
gatepost_load_errors_total {}\n\
# TYPE gatepost_station_updates_total counter\n\
gatepost_station_updates_total {}\n\
# TYPE gatepost_station_update_errors_total counter\n\
gatepost_station_update_errors_total {}\n\
# TYPE gatepost_assignment_updates_total counter\n\
gatepost_assignment_updates_total {}\n\
# TYPE gatepost_assignment_update_errors_total counter\n\
gatepost_assignment_update_errors_total {}\n\
# TYPE gatepost_stale_guard_responses_total counter\n\
gatepost_stale_guard_responses_total {}\n",
            loads,
            load_errors,
            station_updates,
            station_update_errors,
            assignment_updates,
            assignment_update_errors,
            stale
        )
    }
}
