use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::debug;

use super::super::request::{decode_payload, path_id};
use super::super::{ApiError, Container};

pub struct UpdateController<'a> {
    container: &'a Container,
}

impl<'a> UpdateController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn update(&self, path: &str, body: &[u8]) -> Result<Response, ApiError> {
        let id = path_id(path)?;
        let payload = decode_payload(body)?;

        if let Some(body_id) = payload.id().filter(|body_id| *body_id != id) {
            debug!("Ignoring body id {} in favour of path id {}", body_id, id);
        }

        let user = self
            .container
            .update_use_case()
            .execute(id, payload.into_candidate())
            .await?;

        Ok(Json(user).into_response())
    }
}
