use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use petadex_core::SourceError;
use serde::Serialize;

#[derive(thiserror::Error, Serialize, Debug, Clone)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Error {
    #[error("{entity} {key} not found")]
    NotFound { entity: String, key: String },
    #[error("{inner}")]
    SourceUnavailable {
        #[serde(skip)]
        inner: SourceError,
    },
    #[error("simple invalid data")]
    SimpleData { reason: String },
    #[error("malformed request")]
    MalformedRequest {
        #[serde(skip)]
        status: StatusCode,
        message: String,
    },
}
impl Error {
    fn status_code(&self) -> StatusCode {
        use Error::{MalformedRequest, NotFound, SimpleData, SourceUnavailable};

        match self {
            NotFound { .. } => StatusCode::NOT_FOUND,
            SourceUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            SimpleData { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            MalformedRequest { status, .. } => *status,
        }
    }
}

impl From<petadex_core::Error> for Error {
    fn from(err: petadex_core::Error) -> Self {
        match err {
            petadex_core::Error::NotFound { entity, key } => Self::NotFound { entity, key },
            petadex_core::Error::SourceUnavailable(inner) => Self::SourceUnavailable { inner },
        }
    }
}

impl From<PathRejection> for Error {
    fn from(err: PathRejection) -> Self {
        Self::MalformedRequest {
            status: err.status(),
            message: err.body_text(),
        }
    }
}

impl From<garde::Report> for Error {
    fn from(err: garde::Report) -> Self {
        Self::SimpleData {
            reason: format!("{err:#}"),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            status: u16,
            error: Option<Error>,
        }

        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = ?self);

            return (
                status,
                axum::Json(ErrorResponse {
                    status: status.as_u16(),
                    error: None,
                }),
            )
                .into_response();
        }

        tracing::debug!(error = ?self);

        (
            status,
            axum::Json(ErrorResponse {
                status: status.as_u16(),
                error: Some(self),
            }),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
