use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
pub const CORS_ALLOW_METHODS: &str = "GET,OPTIONS";

/// JSON response carrying only `Content-Type`
pub fn json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    body: &T,
) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(body)?.into())
        .map_err(Box::new)?)
}

/// JSON response with the fixed CORS headers
pub fn cors_json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    body: &T,
) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", CORS_ALLOW_ORIGIN)
        .header("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS)
        .header("Access-Control-Allow-Methods", CORS_ALLOW_METHODS)
        .body(serde_json::to_string(body)?.into())
        .map_err(Box::new)?)
}

/// Proxy integration payload for lambdas that take the raw event
pub fn into_proxy_response(response: Response<Body>) -> ApiGatewayProxyResponse {
    let (parts, body) = response.into_parts();
    ApiGatewayProxyResponse {
        status_code: i64::from(parts.status.as_u16()),
        headers: parts.headers,
        body: Some(body),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn plain_response_has_only_content_type() {
        let resp = json_response(StatusCode::UNAUTHORIZED, &json!({"message": "Unauthorized"})).unwrap();
        assert_eq!(resp.status(), 401);
        assert_eq!(resp.headers().len(), 1);
        assert_eq!(resp.headers()["Content-Type"], "application/json");

        let body: Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body, json!({"message": "Unauthorized"}));
    }

    #[test]
    fn cors_response_carries_all_headers() {
        let resp = cors_json_response(StatusCode::OK, &json!({})).unwrap();
        let headers = resp.headers();
        assert_eq!(headers.len(), 4);
        assert_eq!(headers["Content-Type"], "application/json");
        assert_eq!(headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(headers["Access-Control-Allow-Methods"], "GET,OPTIONS");
        assert_eq!(
            headers["Access-Control-Allow-Headers"],
            "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token"
        );
    }

    #[test]
    fn proxy_response_keeps_status_headers_and_body() {
        let resp = into_proxy_response(
            json_response(StatusCode::OK, &json!({"message": "Hello World!"})).unwrap(),
        );
        assert_eq!(resp.status_code, 200);
        assert_eq!(resp.headers["Content-Type"], "application/json");
        match resp.body {
            Some(Body::Text(text)) => assert_eq!(text, r#"{"message":"Hello World!"}"#),
            other => panic!("unexpected body: {:?}", other),
        }
    }
}
