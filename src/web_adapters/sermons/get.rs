use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::sermon_adapter::SermonAdapter;
use sea_orm::DbConn;
use use_cases::sermons::get::get_published_sermon;

use crate::utils::{response_200, response_from_use_case_error};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    sermon_id: uuid::Uuid,
}

#[tracing::instrument(name = "Getting a sermon", skip(db))]
#[get("/{sermon_id}")]
pub async fn get_sermon_endpoint(db: Data<DbConn>, path_param: Path<PathParam>) -> HttpResponse {
    match get_published_sermon(path_param.sermon_id, SermonAdapter::init(&db)).await {
        Ok(res) => response_200(res),
        Err(e) => response_from_use_case_error(e),
    }
}
