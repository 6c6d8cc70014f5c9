use aws_sdk_cognitoidentityprovider::Client as CognitoClient;
use greeter_shared::config::DirectoryConfig;
use greeter_shared::AppState;
use lambda_http::{run, service_fn, tracing, Error, Request};
use std::sync::Arc;

mod http_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let directory_config = DirectoryConfig::from_env()?;

    // Initialize AWS clients once at startup
    let config = aws_config::load_from_env().await;
    let state = AppState::with_cognito(CognitoClient::new(&config), directory_config);

    run(service_fn(move |event: Request| {
        let state = Arc::clone(&state);
        async move { http_handler::function_handler(event, state).await }
    }))
    .await
}
