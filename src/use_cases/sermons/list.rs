use db_adapters::{
    sermon_adapter::{SermonAdapter, SermonFilter, SermonOrder, SermonQuery},
    Order::Desc,
};

use crate::{
    error_500,
    sermons::types::{SermonListQuery, SermonVisible},
    UseCaseError,
};

pub async fn list_published_sermons<'a>(
    query: SermonListQuery,
    sermon_adapter: SermonAdapter<'a>,
) -> Result<Vec<SermonVisible>, UseCaseError> {
    let mut sermon_adapter = sermon_adapter.filter_eq_is_published(true);
    if let Some(series) = query.series.as_deref().filter(|s| !s.is_empty()) {
        sermon_adapter = sermon_adapter.filter_eq_series(series);
    }
    if let Some(speaker) = query.speaker.as_deref().filter(|s| !s.is_empty()) {
        sermon_adapter = sermon_adapter.filter_eq_speaker(speaker);
    }
    sermon_adapter
        .order_by_preached_on(Desc)
        .order_by_created_at(Desc)
        .get_all()
        .await
        .map(|sermons| sermons.into_iter().map(SermonVisible::from).collect())
        .map_err(error_500)
}
