use std::{io::ErrorKind, path::PathBuf};

use actix_web::{
    delete,
    web::{self, Data, Path, ReqData},
    HttpResponse,
};
use common::settings::types::Settings;
use entities::admin;
use use_cases::{
    require_role,
    uploads::{types::UploadKind, validation::validate_stored_file_name},
    ADMIN_OR_ABOVE,
};

use crate::utils::{
    response_400, response_401, response_404, response_500, response_from_use_case_error,
};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    kind: String,
    filename: String,
}

#[tracing::instrument(name = "Deleting an uploaded file", skip(settings, admin))]
#[delete("/{kind}/{filename}")]
pub async fn delete_upload_endpoint(
    settings: Data<Settings>,
    admin: Option<ReqData<admin::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    let admin = match admin {
        Some(admin) => admin.into_inner(),
        None => return response_401(),
    };
    if let Err(e) = require_role(&admin, ADMIN_OR_ABOVE) {
        return response_from_use_case_error(e);
    }
    let kind: UploadKind = match path_param.kind.parse() {
        Ok(kind) => kind,
        Err(_) => return response_400("Upload kind must be either 'images' or 'videos'."),
    };
    if let Err(e) = validate_stored_file_name(&path_param.filename) {
        return response_from_use_case_error(e);
    }

    let path = PathBuf::from(&settings.upload.dir)
        .join(kind.dir_name())
        .join(&path_param.filename);
    match web::block(move || std::fs::remove_file(path)).await {
        Ok(Ok(())) => HttpResponse::NoContent().finish(),
        Ok(Err(e)) if e.kind() == ErrorKind::NotFound => {
            response_404("File with this name was not found.")
        }
        Ok(Err(e)) => response_500(e),
        Err(e) => response_500(e),
    }
}
