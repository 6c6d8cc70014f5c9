use crate::directory::{DirectoryGroup, DirectoryUser};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

// ========== ACCOUNT ==========
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    pub username: Option<String>,
    pub enabled: bool,
    pub status: Option<String>,
    pub created: Option<String>, // RFC 3339, e.g. 2023-01-01T12:00:00+00:00
    pub attributes: BTreeMap<String, Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<AccountGroup>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountGroup {
    pub name: Option<String>,
    pub description: Option<String>,
    pub precedence: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct AccountList {
    pub users: Vec<Account>,
}

#[derive(Debug, Serialize)]
pub struct AccountDetail {
    pub user: Account,
}

fn format_created(created: Option<DateTime<Utc>>) -> Option<String> {
    created.map(|ts| ts.to_rfc3339())
}

impl From<DirectoryUser> for Account {
    fn from(user: DirectoryUser) -> Self {
        // later duplicates overwrite earlier ones
        let attributes = user
            .attributes
            .into_iter()
            .map(|attr| (attr.name, attr.value))
            .collect();

        Account {
            username: user.username,
            enabled: user.enabled,
            status: user.status,
            created: format_created(user.created),
            attributes,
            groups: None,
        }
    }
}

impl From<DirectoryGroup> for AccountGroup {
    fn from(group: DirectoryGroup) -> Self {
        AccountGroup {
            name: group.name,
            description: group.description,
            precedence: group.precedence,
        }
    }
}

impl Account {
    pub fn with_groups(mut self, groups: Vec<DirectoryGroup>) -> Self {
        self.groups = Some(groups.into_iter().map(AccountGroup::from).collect());
        self
    }
}
