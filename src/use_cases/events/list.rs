use chrono::Utc;
use db_adapters::{
    event_adapter::{EventAdapter, EventFilter, EventOrder, EventQuery},
    Order::Asc,
};

use crate::{
    error_500,
    events::types::{EventListQuery, EventVisible},
    UseCaseError,
};

pub async fn list_published_events<'a>(
    query: EventListQuery,
    event_adapter: EventAdapter<'a>,
) -> Result<Vec<EventVisible>, UseCaseError> {
    let mut event_adapter = event_adapter.filter_eq_is_published(true);
    if query.upcoming.unwrap_or(false) {
        event_adapter = event_adapter.filter_start_at_gte(Utc::now().into());
    }
    if let Some(category) = query.category.as_deref().filter(|c| !c.is_empty()) {
        event_adapter = event_adapter.filter_eq_category(category);
    }
    event_adapter
        .order_by_start_at(Asc)
        .get_all()
        .await
        .map(|events| events.into_iter().map(EventVisible::from).collect())
        .map_err(error_500)
}
