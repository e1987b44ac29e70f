pub mod guard_queries;
pub mod log_queries;
pub mod station_queries;

use crate::store::{DashboardStore, LoadStatus};
use crate::AppError;

/// Views are unavailable while the last load attempt failed.
pub(crate) fn ensure_available(store: &DashboardStore) -> Result<(), AppError> {
    match store.status() {
        LoadStatus::Failed { message } => Err(AppError::Fetch(message.clone())),
        _ => Ok(()),
    }
}
