use crate::claims::{Claims, UNKNOWN};
use crate::responses::{cors_json_response, json_response};
use lambda_http::{http::StatusCode, Body, Error, Request, Response};
use serde::Serialize;

pub const HELLO_MESSAGE: &str = "Hello World!";

#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedGreeting {
    pub message: &'static str,
    pub authenticated: bool,
    pub user: String,
    pub is_admin: bool,
}

/// Public greeting. Nothing about the request is inspected.
pub fn hello_world() -> Result<Response<Body>, Error> {
    json_response(StatusCode::OK, &Greeting { message: HELLO_MESSAGE })
}

/// Greeting for callers behind the Cognito authorizer. Missing claims
/// degrade to defaults instead of rejecting the request.
pub fn hello_world_authenticated(request: &Request) -> Result<Response<Body>, Error> {
    let (user, sub, is_admin) = match Claims::from_request(request) {
        Some(claims) => (
            claims.email_or_default().to_string(),
            claims.sub_or_default().to_string(),
            claims.is_admin(),
        ),
        None => (UNKNOWN.to_string(), UNKNOWN.to_string(), false),
    };

    tracing::info!("Authenticated greeting for sub: {:?} (admin: {})", sub, is_admin);

    let greeting = AuthenticatedGreeting {
        message: HELLO_MESSAGE,
        authenticated: true,
        user,
        is_admin,
    };
    cors_json_response(StatusCode::OK, &greeting)
}
