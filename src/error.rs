use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

const INTERNAL_MESSAGE: &str = "Internal server error";
const UNKNOWN_RECORD_MESSAGE: &str = "Record not found";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// Path segment that is not a valid record id, so no record can match.
    #[error("invalid record id: {0}")]
    InvalidId(String),

    #[error("invalid input: {0}")]
    Validation(String),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}

impl AppError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } | Self::InvalidId(_) => StatusCode::NOT_FOUND,
            // Bad input is reported the same way as a storage failure.
            Self::Validation(_) | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidId(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::NotFound { .. } => {
                tracing::debug!(error = %self, "record not found");
                self.to_string()
            }
            Self::InvalidId(msg) => {
                tracing::debug!(error = %msg, "unroutable record id");
                UNKNOWN_RECORD_MESSAGE.to_string()
            }
            Self::Validation(msg) => {
                tracing::warn!(error = %msg, "rejected request");
                INTERNAL_MESSAGE.to_string()
            }
            Self::Database(err) => {
                tracing::error!(error = %err, "database error");
                INTERNAL_MESSAGE.to_string()
            }
        };

        (self.status(), Json(message)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
