use crate::{error::GenError, models::ErrorBody};
use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};

impl ResponseError for GenError {
    fn status_code(&self) -> StatusCode {
        match self {
            GenError::NotFound(_) => StatusCode::NOT_FOUND,
            GenError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            err if err.is_provider_failure() => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("❌ {}", self);
        }
        HttpResponse::build(status).json(ErrorBody {
            detail: self.detail(),
        })
    }
}

pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    GenError::ValidationError(err.to_string()).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    GenError::ValidationError(err.to_string()).into()
}
