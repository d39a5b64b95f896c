use axum::response::{IntoResponse, Json};

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("please fill in all fields")]
    Validation,
    #[error("this task already exist and is not yet completed and stiil has a valid due date")]
    Duplicate,
    #[error("Task not found")]
    NotFound,
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl TaskError {
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Pool(_) | Self::Database(_) | Self::Join(_)
        )
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        let status = match &self {
            Self::Validation | Self::Duplicate => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Pool(_) | Self::Database(_) | Self::Join(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (
            status,
            Json(serde_json::json!({ "success": false, "message": self.to_string() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn validation_and_duplicate_map_to_bad_request() {
        assert_eq!(
            TaskError::Validation.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TaskError::Duplicate.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            TaskError::NotFound.into_response().status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn store_failures_map_to_500() {
        let err = TaskError::Database(diesel::result::Error::BrokenTransactionManager);
        assert!(err.is_internal());
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn user_facing_messages_match_the_api_contract() {
        assert_eq!(TaskError::Validation.to_string(), "please fill in all fields");
        assert_eq!(TaskError::NotFound.to_string(), "Task not found");
        assert_eq!(
            TaskError::Duplicate.to_string(),
            "this task already exist and is not yet completed and stiil has a valid due date"
        );
    }
}
