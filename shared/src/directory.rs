use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Page size for user listings. Only the first page is ever fetched.
pub const LIST_USERS_LIMIT: i32 = 60;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("User {0} not found")]
    UserNotFound(String),
    #[error("{0}")]
    Service(String),
}

// ========== RECORDS ==========
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryAttribute {
    pub name: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryUser {
    pub username: Option<String>,
    pub enabled: bool,
    pub status: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub attributes: Vec<DirectoryAttribute>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryGroup {
    pub name: Option<String>,
    pub description: Option<String>,
    pub precedence: Option<i32>,
}

/// Identity-management operations the users endpoint depends on
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn list_users(&self, pool_id: &str, limit: i32) -> Result<Vec<DirectoryUser>, DirectoryError>;

    async fn get_user(&self, pool_id: &str, username: &str) -> Result<DirectoryUser, DirectoryError>;

    async fn list_groups_for_user(
        &self,
        pool_id: &str,
        username: &str,
    ) -> Result<Vec<DirectoryGroup>, DirectoryError>;
}
