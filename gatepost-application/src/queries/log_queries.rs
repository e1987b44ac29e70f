use gatepost_domain::{
    category_for_location, compute_stats, paginate, parse_date, today, LogStats,
};

use crate::dtos::{LogRow, LogView, StatsQuery};
use crate::queries::ensure_available;
use crate::{AppError, AppState};

/// Current page of the filtered log table.
pub async fn log_view(state: &AppState) -> Result<LogView, AppError> {
    let store = state.store.read().await;
    ensure_available(&store)?;
    let pagination = store.pagination();
    let snapshot = store.snapshot();
    let filtered = store.filtered_logs();
    let page = paginate(&filtered, pagination.page, pagination.page_size);

    let items = page
        .items
        .into_iter()
        .map(|entry| LogRow {
            active: snapshot.active_ids.is_active(entry.log_id),
            category: category_for_location(&entry.location, &snapshot.stations),
            entry: entry.clone(),
        })
        .collect();

    Ok(LogView {
        items,
        current_page: page.current_page,
        total_pages: page.total_pages,
        total_elements: page.total_elements,
        pagination,
    })
}

/// Summary cards over the whole loaded log set, independent of the filters.
pub async fn log_stats(state: &AppState, query: StatsQuery) -> Result<LogStats, AppError> {
    let date = match query.date {
        Some(date) => {
            parse_date(&date).map_err(|err| AppError::BadRequest(format!("invalid date: {}", err)))?;
            date
        }
        None => today(),
    };
    let store = state.store.read().await;
    ensure_available(&store)?;
    let snapshot = store.snapshot();
    Ok(compute_stats(&snapshot.logs, &snapshot.active_ids, &date))
}
