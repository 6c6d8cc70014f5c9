pub mod responses;
pub mod claims;
pub mod config;
pub mod directory;
pub mod cognito;
pub mod accounts;
pub mod greetings;
pub mod users;

use cognito::CognitoDirectory;
use config::DirectoryConfig;
use directory::UserDirectory;
use std::sync::Arc;

/// Shared application state for the users lambda
pub struct AppState {
    pub directory: Box<dyn UserDirectory>,
    pub config: DirectoryConfig,
}

impl AppState {
    pub fn new(directory: Box<dyn UserDirectory>, config: DirectoryConfig) -> Arc<Self> {
        Arc::new(Self { directory, config })
    }

    pub fn with_cognito(
        cognito_client: aws_sdk_cognitoidentityprovider::Client,
        config: DirectoryConfig,
    ) -> Arc<Self> {
        Self::new(Box::new(CognitoDirectory::new(cognito_client)), config)
    }
}
