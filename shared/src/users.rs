use crate::accounts::{Account, AccountDetail, AccountList};
use crate::claims;
use crate::config::DirectoryConfig;
use crate::directory::{DirectoryError, UserDirectory, LIST_USERS_LIMIT};
use crate::responses::{cors_json_response, json_response};
use lambda_http::{http::StatusCode, Body, Error, Request, RequestExt, Response};

/// List the first page of accounts in the pool
pub async fn list_users(
    directory: &dyn UserDirectory,
    pool_id: &str,
) -> Result<Vec<Account>, DirectoryError> {
    let users = directory.list_users(pool_id, LIST_USERS_LIMIT).await?;
    Ok(users.into_iter().map(Account::from).collect())
}

/// Fetch one account together with its group memberships
pub async fn get_user(
    directory: &dyn UserDirectory,
    pool_id: &str,
    username: &str,
) -> Result<Account, DirectoryError> {
    let user = directory.get_user(pool_id, username).await?;
    let groups = directory.list_groups_for_user(pool_id, username).await?;
    Ok(Account::from(user).with_groups(groups))
}

fn error_response(err: &DirectoryError) -> Result<Response<Body>, Error> {
    match err {
        DirectoryError::UserNotFound(username) => {
            tracing::warn!("User not found: {:?}", username);
            cors_json_response(
                StatusCode::NOT_FOUND,
                &serde_json::json!({ "message": err.to_string() }),
            )
        }
        DirectoryError::Service(_) => cors_json_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &serde_json::json!({ "message": format!("Error: {}", err) }),
        ),
    }
}

/// `username` path parameter, `None` when missing or empty
fn requested_username(request: &Request) -> Option<&str> {
    request
        .path_parameters_ref()
        .and_then(|params| params.first("username"))
        .filter(|username| !username.is_empty())
}

/// Users endpoint: `GET /users` and `GET /users/{username}`
pub async fn handle_users_request(
    directory: &dyn UserDirectory,
    config: &DirectoryConfig,
    request: &Request,
) -> Result<Response<Body>, Error> {
    if claims::authorizer(request).is_none() {
        tracing::warn!("Rejecting users request without authorizer context");
        // no CORS headers on this path
        return json_response(
            StatusCode::UNAUTHORIZED,
            &serde_json::json!({ "message": "Unauthorized" }),
        );
    }

    let pool_id = config.user_pool_id.as_str();

    match requested_username(request) {
        Some(username) => {
            tracing::info!("Fetching user {:?} from pool {}", username, pool_id);
            match get_user(directory, pool_id, username).await {
                Ok(user) => cors_json_response(StatusCode::OK, &AccountDetail { user }),
                Err(e) => error_response(&e),
            }
        }
        None => {
            tracing::info!("Listing users in pool {}", pool_id);
            match list_users(directory, pool_id).await {
                Ok(users) => {
                    tracing::info!("Returning {} users", users.len());
                    cors_json_response(StatusCode::OK, &AccountList { users })
                }
                Err(e) => error_response(&e),
            }
        }
    }
}
