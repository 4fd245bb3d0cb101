use actix_web::{
    get,
    web::{Data, Query},
    HttpResponse,
};
use db_adapters::sermon_adapter::SermonAdapter;
use sea_orm::DbConn;
use use_cases::sermons::{list::list_published_sermons, types::SermonListQuery};

use crate::utils::{response_200, response_from_use_case_error};

#[tracing::instrument(name = "Listing published sermons", skip(db))]
#[get("")]
pub async fn list_sermons_endpoint(db: Data<DbConn>, query: Query<SermonListQuery>) -> HttpResponse {
    match list_published_sermons(query.into_inner(), SermonAdapter::init(&db)).await {
        Ok(res) => response_200(res),
        Err(e) => response_from_use_case_error(e),
    }
}
