use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::super::request::decode_payload;
use super::super::{ApiError, Container};

pub struct CreateController<'a> {
    container: &'a Container,
}

impl<'a> CreateController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn create(&self, body: &[u8]) -> Result<Response, ApiError> {
        let candidate = decode_payload(body)?.into_candidate();

        let user = self.container.create_use_case().execute(candidate).await?;

        Ok((StatusCode::ACCEPTED, Json(user)).into_response())
    }
}
