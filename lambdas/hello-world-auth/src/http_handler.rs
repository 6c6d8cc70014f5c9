use greeter_shared::greetings;
use lambda_http::{Body, Error, Request, Response};

/// GET /hello-auth (behind the Cognito authorizer)
pub(crate) async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    tracing::info!("Authenticated Hello World Lambda invoked");
    greetings::hello_world_authenticated(&event)
}
