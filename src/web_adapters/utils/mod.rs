use std::fmt::Debug;

use actix_web::{
    error::{InternalError, JsonPayloadError, QueryPayloadError},
    HttpRequest, HttpResponse,
};
use serde::{Deserialize, Serialize};
use tracing::{event, Level};
use use_cases::UseCaseError;

pub mod auth;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

/// OK
pub fn response_200<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse {
        success: true,
        data,
    })
}

/// Created
pub fn response_201<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Created().json(ApiResponse {
        success: true,
        data,
    })
}

///Bad Request
pub fn response_400(error_message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Unauthorized
pub fn response_401() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse {
        error: "You are not logged in.".to_string(),
    })
}

/// Forbidden
pub fn response_403() -> HttpResponse {
    HttpResponse::Forbidden().json(ErrorResponse {
        error: "You do not have permission to perform this action.".to_string(),
    })
}

/// NotFound
pub fn response_404(error_message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Conflict
pub fn response_409(error_message: &str) -> HttpResponse {
    HttpResponse::Conflict().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Payload Too Large
pub fn response_413(error_message: &str) -> HttpResponse {
    HttpResponse::PayloadTooLarge().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Internal Server Error: with logging
pub fn response_500<T: Debug>(e: T) -> HttpResponse {
    event!(target: "backend", Level::ERROR, "{:?}", e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Some unexpected error happened. Please try again later.".to_string(),
    })
}

pub fn response_from_use_case_error(e: UseCaseError) -> HttpResponse {
    match &e {
        UseCaseError::BadRequest(message) => response_400(message),
        UseCaseError::Unauthorized => response_401(),
        UseCaseError::Forbidden => response_403(),
        UseCaseError::NotFound(message) => response_404(message),
        UseCaseError::Conflict(message) => response_409(message),
        UseCaseError::PayloadTooLarge(message) => response_413(message),
        UseCaseError::InternalServerError(_) => response_500(e),
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = match &err {
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            response_413(&err.to_string())
        }
        _ => response_400(&err.to_string()),
    };
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = response_400(&err.to_string());
    InternalError::from_response(err, response).into()
}
