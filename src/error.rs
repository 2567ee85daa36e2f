use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A reservation points at a booker row that doesn't exist.
    #[error("booker {0} not found")]
    BookerNotFound(i32),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {:?}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_string()).into_response()
    }
}
