use std::path::PathBuf;

use actix_multipart::{Field, Multipart};
use actix_web::{
    post,
    web::{self, Data, ReqData},
    HttpResponse,
};
use common::settings::types::Settings;
use entities::admin;
use futures::StreamExt;
use tracing::{event, Level};
use use_cases::{
    require_role,
    uploads::{
        types::{UploadKind, UploadVisible},
        validation::{new_file_name, public_url, validate_mime_type, validate_size},
    },
    UseCaseError, EDITOR_OR_ABOVE,
};

use crate::utils::{response_201, response_401, response_500, response_from_use_case_error};

const FILE_FIELD_NAME: &str = "file";

#[tracing::instrument(name = "Uploading an image", skip(settings, admin, payload))]
#[post("/image")]
pub async fn upload_image_endpoint(
    settings: Data<Settings>,
    admin: Option<ReqData<admin::Model>>,
    payload: Multipart,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            upload(
                admin.into_inner(),
                UploadKind::Image,
                payload,
                settings.upload.max_image_bytes,
                &settings.upload.dir,
            )
            .await
        }
        None => response_401(),
    }
}

#[tracing::instrument(name = "Uploading a video", skip(settings, admin, payload))]
#[post("/video")]
pub async fn upload_video_endpoint(
    settings: Data<Settings>,
    admin: Option<ReqData<admin::Model>>,
    payload: Multipart,
) -> HttpResponse {
    match admin {
        Some(admin) => {
            upload(
                admin.into_inner(),
                UploadKind::Video,
                payload,
                settings.upload.max_video_bytes,
                &settings.upload.dir,
            )
            .await
        }
        None => response_401(),
    }
}

struct ReceivedFile {
    mime_type: String,
    extension: &'static str,
    bytes: Vec<u8>,
}

async fn upload(
    admin: admin::Model,
    kind: UploadKind,
    payload: Multipart,
    limit: u64,
    upload_dir: &str,
) -> HttpResponse {
    if let Err(e) = require_role(&admin, EDITOR_OR_ABOVE) {
        return response_from_use_case_error(e);
    }
    let file = match receive_file(kind, payload, limit).await {
        Ok(file) => file,
        Err(e) => return response_from_use_case_error(e),
    };

    let file_name = new_file_name(file.extension);
    let dir = PathBuf::from(upload_dir).join(kind.dir_name());
    let path = dir.join(&file_name);
    let size = file.bytes.len() as u64;
    match web::block(move || {
        std::fs::create_dir_all(&dir)?;
        std::fs::write(&path, &file.bytes)
    })
    .await
    {
        Ok(Ok(())) => {
            event!(target: "backend", Level::INFO, "Stored upload {}/{} ({} bytes).", kind.dir_name(), file_name, size);
            response_201(UploadVisible {
                url: public_url(kind, &file_name),
                filename: file_name,
                size,
                mime_type: file.mime_type,
            })
        }
        Ok(Err(e)) => response_500(e),
        Err(e) => response_500(e),
    }
}

/// Reads the `file` field into memory, failing as soon as the size limit is crossed.
async fn receive_file(
    kind: UploadKind,
    mut payload: Multipart,
    limit: u64,
) -> Result<ReceivedFile, UseCaseError> {
    while let Some(field) = payload.next().await {
        let field = field.map_err(multipart_error)?;
        if field.name() != Some(FILE_FIELD_NAME) {
            drain(field).await?;
            continue;
        }
        let mime_type = field
            .content_type()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_default();
        let extension = validate_mime_type(kind, &mime_type)?;
        let bytes = read_field(field, limit).await?;
        return Ok(ReceivedFile {
            mime_type,
            extension,
            bytes,
        });
    }
    Err(UseCaseError::BadRequest(format!(
        "No file was uploaded. Send it in the '{}' field.",
        FILE_FIELD_NAME
    )))
}

async fn read_field(mut field: Field, limit: u64) -> Result<Vec<u8>, UseCaseError> {
    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(multipart_error)?;
        validate_size((bytes.len() + chunk.len()) as u64, limit)?;
        bytes.extend_from_slice(&chunk);
    }
    Ok(bytes)
}

async fn drain(mut field: Field) -> Result<(), UseCaseError> {
    while let Some(chunk) = field.next().await {
        chunk.map_err(multipart_error)?;
    }
    Ok(())
}

fn multipart_error(e: actix_multipart::MultipartError) -> UseCaseError {
    UseCaseError::BadRequest(format!("Malformed multipart body: {}", e))
}
