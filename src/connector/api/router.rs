use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{DefaultBodyLimit, Path, Query, State};
use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use tracing::debug;

use super::container::Container;
use super::controller::{CreateController, DeleteController, ReadController, UpdateController};
use super::request::query_id;
use super::ApiError;

/// An inbound `/users` request, reduced to what the controllers read.
pub struct UserRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Bytes,
}

/// Picks the controller for a request by its HTTP method.
pub struct Dispatcher<'a> {
    create_controller: CreateController<'a>,
    read_controller: ReadController<'a>,
    update_controller: UpdateController<'a>,
    delete_controller: DeleteController<'a>,
}

impl<'a> Dispatcher<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            create_controller: CreateController::new(container),
            read_controller: ReadController::new(container),
            update_controller: UpdateController::new(container),
            delete_controller: DeleteController::new(container),
        }
    }

    pub async fn route(&self, request: UserRequest) -> Result<Response, ApiError> {
        let UserRequest {
            method,
            path,
            query,
            body,
        } = request;
        debug!("{} {}", method, path);

        match method {
            Method::POST => self.create_controller.create(&body).await,
            Method::GET => self.read_controller.read(query_id(&query)).await,
            Method::PUT => self.update_controller.update(&path, &body).await,
            Method::DELETE => self.delete_controller.delete(&path).await,
            other => Err(ApiError::UnsupportedMethod(other)),
        }
    }
}

/// The HTTP application: every method on `/users`, `/users/` and below.
///
/// Request bodies are unbounded.
pub fn routes(container: Arc<Container>) -> axum::Router {
    axum::Router::new()
        .route("/users", any(handle_users))
        .route("/users/", any(handle_users))
        .route("/users/{*rest}", any(handle_users))
        .layer(DefaultBodyLimit::disable())
        .with_state(container)
}

async fn handle_users(
    State(container): State<Arc<Container>>,
    method: Method,
    uri: Uri,
    rest: Result<Option<Path<String>>, PathRejection>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    body: Bytes,
) -> Response {
    // The wildcard capture is percent-decoded; the raw path is used only when
    // there is no capture or it does not decode.
    let path = match rest {
        Ok(Some(Path(rest))) => format!("/users/{}", rest),
        _ => uri.path().to_string(),
    };

    let request = UserRequest {
        method,
        path,
        query: query.map(|Query(pairs)| pairs).unwrap_or_default(),
        body,
    };

    match Dispatcher::new(&container).route(request).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;

    async fn call(
        container: &Container,
        method: Method,
        path: &str,
        body: &str,
    ) -> (StatusCode, String) {
        let request = UserRequest {
            method,
            path: path.to_string(),
            query: Vec::new(),
            body: Bytes::from(body.to_string()),
        };
        let response = match Dispatcher::new(container).route(request).await {
            Ok(response) => response,
            Err(err) => err.into_response(),
        };
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_unsupported_method_is_empty_400() {
        let container = Container::new(Default::default());

        let (status, body) = call(&container, Method::PATCH, "/users/1", "").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_update_via_dispatcher() {
        let container = Container::new(Default::default());

        let (status, body) = call(
            &container,
            Method::POST,
            "/users/",
            r#"{"name":"abc","email":"abc@gmail.com"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        assert_eq!(body, r#"{"id":2,"name":"abc","email":"abc@gmail.com"}"#);

        let (status, body) = call(
            &container,
            Method::PUT,
            "/users/2",
            r#"{"id":7,"name":"xyz","email":"xyz@gmail.com"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"id":2,"name":"xyz","email":"xyz@gmail.com"}"#);
    }

    #[tokio::test]
    async fn test_delete_bad_path() {
        let container = Container::new(Default::default());

        let (status, body) = call(&container, Method::DELETE, "/users", "").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.is_empty());
    }
}
