use crate::dtos::{CriteriaUpdate, PaginationUpdate, StationTabUpdate};
use crate::store::StationTab;
use crate::{AppError, AppState};

use gatepost_domain::{FilterCriteria, PaginationState};

pub async fn update_criteria(state: &AppState, update: CriteriaUpdate) -> FilterCriteria {
    let mut store = state.store.write().await;
    let mut criteria = store.criteria().clone();
    if let Some(search) = update.search {
        criteria.search = search;
    }
    if let Some(status) = update.status_filter {
        criteria.status_filter = status;
    }
    if let Some(location) = update.location_filter {
        criteria.location_filter = location;
    }
    store.set_criteria(criteria.clone());
    criteria
}

/// Page-size changes reset to the first page; a page given together with a
/// new size is ignored.
pub async fn update_pagination(
    state: &AppState,
    update: PaginationUpdate,
) -> Result<PaginationState, AppError> {
    let mut store = state.store.write().await;
    match (update.page_size, update.page) {
        (Some(page_size), _) => {
            if page_size == 0 || page_size > state.config.max_page_size {
                return Err(AppError::BadRequest(format!(
                    "page_size must be between 1 and {}",
                    state.config.max_page_size
                )));
            }
            store.set_page_size(page_size);
        }
        (None, Some(page)) => store.set_page(page),
        (None, None) => {}
    }
    Ok(store.pagination())
}

pub async fn update_station_tab(state: &AppState, update: StationTabUpdate) -> StationTab {
    let mut store = state.store.write().await;
    if let Some(category) = update.category {
        store.select_category(category);
    }
    if let Some(include_inactive) = update.include_inactive {
        store.set_include_inactive(include_inactive);
    }
    store.tab()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeGateway;
    use gatepost_domain::{LocationFilter, StationCategory, StatusFilter};

    #[tokio::test]
    async fn partial_criteria_update_keeps_other_fields() {
        let (state, _gateway) = FakeGateway::default().into_state();
        update_criteria(
            &state,
            CriteriaUpdate {
                search: Some("ana".to_string()),
                ..Default::default()
            },
        )
        .await;
        let criteria = update_criteria(
            &state,
            CriteriaUpdate {
                status_filter: Some(StatusFilter::Active),
                location_filter: Some(LocationFilter::from("Gate 1")),
                ..Default::default()
            },
        )
        .await;
        assert_eq!(criteria.search, "ana");
        assert_eq!(criteria.status_filter, StatusFilter::Active);
        assert_eq!(criteria.location_filter.named(), Some("Gate 1"));
    }

    #[tokio::test]
    async fn page_size_is_bounded() {
        let (state, _gateway) = FakeGateway::default().into_state();
        let err = update_pagination(
            &state,
            PaginationUpdate {
                page: None,
                page_size: Some(0),
            },
        )
        .await
        .expect_err("reject zero");
        assert!(matches!(err, AppError::BadRequest(_)));

        let pagination = update_pagination(
            &state,
            PaginationUpdate {
                page: Some(4),
                page_size: Some(25),
            },
        )
        .await
        .expect("valid size");
        assert_eq!(pagination, PaginationState { page: 0, page_size: 25 });
    }

    #[tokio::test]
    async fn station_tab_updates_are_partial() {
        let (state, _gateway) = FakeGateway::default().into_state();
        let tab = update_station_tab(
            &state,
            StationTabUpdate {
                category: Some(StationCategory::Building),
                include_inactive: None,
            },
        )
        .await;
        assert_eq!(tab.category, StationCategory::Building);
        assert!(!tab.include_inactive);
    }
}
