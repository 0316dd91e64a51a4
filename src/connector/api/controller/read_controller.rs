use axum::response::{IntoResponse, Response};
use axum::Json;

use super::super::request::parse_id;
use super::super::{ApiError, Container};

pub struct ReadController<'a> {
    container: &'a Container,
}

impl<'a> ReadController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Lists every user, or returns the one named by the `id` query value.
    pub async fn read(&self, id: Option<&str>) -> Result<Response, ApiError> {
        let use_case = self.container.get_use_case();

        match id {
            None => Ok(Json(use_case.list().await?).into_response()),
            Some(raw) => {
                let id = parse_id(raw)?;
                Ok(Json(use_case.get_by_id(id).await?).into_response())
            }
        }
    }
}
