use greeter_shared::{users, AppState};
use lambda_http::{Body, Error, Request, Response};
use std::sync::Arc;

/// GET /users and GET /users/{username}
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    tracing::info!(
        "Users Lambda invoked - Method: {} Path: {}",
        event.method(),
        event.uri().path()
    );
    users::handle_users_request(state.directory.as_ref(), &state.config, &event).await
}
