use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use greeter_shared::{greetings, responses};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

/// GET /hello. The event is never inspected, so any payload gets the greeting.
pub(crate) async fn function_handler(
    _event: LambdaEvent<Value>,
) -> Result<ApiGatewayProxyResponse, Error> {
    tracing::info!("Hello World Lambda invoked");
    Ok(responses::into_proxy_response(greetings::hello_world()?))
}
