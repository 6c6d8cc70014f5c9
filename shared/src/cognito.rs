use crate::directory::{
    DirectoryAttribute, DirectoryError, DirectoryGroup, DirectoryUser, UserDirectory,
};
use async_trait::async_trait;
use aws_sdk_cognitoidentityprovider::error::{DisplayErrorContext, SdkError};
use aws_sdk_cognitoidentityprovider::primitives::DateTime as SdkDateTime;
use aws_sdk_cognitoidentityprovider::operation::admin_get_user::AdminGetUserError;
use aws_sdk_cognitoidentityprovider::operation::admin_list_groups_for_user::AdminListGroupsForUserError;
use aws_sdk_cognitoidentityprovider::types::{AttributeType, GroupType, UserStatusType, UserType};
use aws_sdk_cognitoidentityprovider::Client as CognitoClient;
use chrono::{DateTime, Utc};
use std::error::Error as StdError;
use std::fmt::Debug;

/// `UserDirectory` backed by a Cognito user pool
pub struct CognitoDirectory {
    client: CognitoClient,
}

impl CognitoDirectory {
    pub fn new(client: CognitoClient) -> Self {
        Self { client }
    }
}

fn to_utc(ts: Option<&SdkDateTime>) -> Option<DateTime<Utc>> {
    ts.and_then(|ts| DateTime::from_timestamp(ts.secs(), ts.subsec_nanos()))
}

fn to_status(status: Option<&UserStatusType>) -> Option<String> {
    status.map(|s| s.as_str().to_string())
}

fn to_attributes(attributes: &[AttributeType]) -> Vec<DirectoryAttribute> {
    attributes
        .iter()
        .map(|attr| DirectoryAttribute {
            name: attr.name().to_string(),
            value: attr.value().map(|v| v.to_string()),
        })
        .collect()
}

fn to_user(user: &UserType) -> DirectoryUser {
    DirectoryUser {
        username: user.username().map(|s| s.to_string()),
        enabled: user.enabled(),
        status: to_status(user.user_status()),
        created: to_utc(user.user_create_date()),
        attributes: to_attributes(user.attributes()),
    }
}

fn to_group(group: &GroupType) -> DirectoryGroup {
    DirectoryGroup {
        name: group.group_name().map(|s| s.to_string()),
        description: group.description().map(|s| s.to_string()),
        precedence: group.precedence(),
    }
}

/// Not-found for the named user becomes `UserNotFound`, anything else is a
/// `Service` error carrying the full SDK error context.
fn classify<E, R>(
    operation: &str,
    err: SdkError<E, R>,
    username: Option<&str>,
    is_not_found: impl Fn(&E) -> bool,
) -> DirectoryError
where
    E: StdError + 'static,
    R: Debug,
{
    if let Some(username) = username {
        if err.as_service_error().map(&is_not_found).unwrap_or(false) {
            return DirectoryError::UserNotFound(username.to_string());
        }
    }
    tracing::error!("Cognito {} error: {:?}", operation, err);
    DirectoryError::Service(DisplayErrorContext(&err).to_string())
}

#[async_trait]
impl UserDirectory for CognitoDirectory {
    async fn list_users(&self, pool_id: &str, limit: i32) -> Result<Vec<DirectoryUser>, DirectoryError> {
        let response = self
            .client
            .list_users()
            .user_pool_id(pool_id)
            .limit(limit)
            .send()
            .await
            .map_err(|e| classify("ListUsers", e, None, |_| false))?;

        Ok(response.users().iter().map(to_user).collect())
    }

    async fn get_user(&self, pool_id: &str, username: &str) -> Result<DirectoryUser, DirectoryError> {
        let response = self
            .client
            .admin_get_user()
            .user_pool_id(pool_id)
            .username(username)
            .send()
            .await
            .map_err(|e| {
                classify(
                    "AdminGetUser",
                    e,
                    Some(username),
                    AdminGetUserError::is_user_not_found_exception,
                )
            })?;

        Ok(DirectoryUser {
            username: Some(response.username().to_string()),
            enabled: response.enabled(),
            status: to_status(response.user_status()),
            created: to_utc(response.user_create_date()),
            attributes: to_attributes(response.user_attributes()),
        })
    }

    async fn list_groups_for_user(
        &self,
        pool_id: &str,
        username: &str,
    ) -> Result<Vec<DirectoryGroup>, DirectoryError> {
        let response = self
            .client
            .admin_list_groups_for_user()
            .user_pool_id(pool_id)
            .username(username)
            .send()
            .await
            .map_err(|e| {
                classify(
                    "AdminListGroupsForUser",
                    e,
                    Some(username),
                    AdminListGroupsForUserError::is_user_not_found_exception,
                )
            })?;

        Ok(response.groups().iter().map(to_group).collect())
    }
}
