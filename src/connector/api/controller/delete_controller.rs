use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::super::request::path_id;
use super::super::{ApiError, Container};

pub struct DeleteController<'a> {
    container: &'a Container,
}

impl<'a> DeleteController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn delete(&self, path: &str) -> Result<Response, ApiError> {
        let id = path_id(path)?;

        self.container.delete_use_case().execute(id).await?;

        Ok(self.format_delete_success(id))
    }

    fn format_delete_success(&self, id: i64) -> Response {
        Json(json!({ "message": format!("user {} deleted", id) })).into_response()
    }
}
