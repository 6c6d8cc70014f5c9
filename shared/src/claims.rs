use aws_lambda_events::apigw::ApiGatewayRequestAuthorizer;
use lambda_http::{Request, RequestExt};
use serde::Deserialize;
use serde_json::Value;

pub const ADMIN_GROUP: &str = "admin-users";
pub const GROUPS_CLAIM: &str = "cognito:groups";
pub const UNKNOWN: &str = "Unknown";

/// `cognito:groups` claim. REST API authorizers pass it as one string,
/// other sources pass a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum GroupMembership {
    Single(String),
    Many(Vec<String>),
}

impl GroupMembership {
    /// Substring match for the string form, exact match for the list form.
    pub fn contains(&self, group: &str) -> bool {
        match self {
            GroupMembership::Single(groups) => groups.contains(group),
            GroupMembership::Many(groups) => groups.iter().any(|g| g == group),
        }
    }
}

/// Authorizer context attached by API Gateway. An authorizer with no fields
/// at all counts as absent.
pub fn authorizer(request: &Request) -> Option<&ApiGatewayRequestAuthorizer> {
    request
        .request_context_ref()
        .and_then(|ctx| ctx.authorizer())
        .filter(|auth| auth.jwt.is_some() || !auth.fields.is_empty())
}

/// Identity claims attached by the Cognito authorizer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims {
    pub email: Option<String>,
    pub sub: Option<String>,
    pub groups: Option<GroupMembership>,
}

fn string_claim(claims: &Value, name: &str) -> Option<String> {
    claims.get(name).and_then(Value::as_str).map(|s| s.to_string())
}

impl Claims {
    /// Reads claims leniently: values of the wrong type are treated as missing.
    pub fn from_value(claims: &Value) -> Self {
        Claims {
            email: string_claim(claims, "email"),
            sub: string_claim(claims, "sub"),
            groups: claims
                .get(GROUPS_CLAIM)
                .and_then(|groups| GroupMembership::deserialize(groups).ok()),
        }
    }

    /// REST API authorizers put claims under `claims`, HTTP API JWT
    /// authorizers under `jwt.claims`.
    pub fn from_authorizer(auth: &ApiGatewayRequestAuthorizer) -> Option<Self> {
        if let Some(claims) = auth.fields.get("claims") {
            return Some(Self::from_value(claims));
        }

        auth.jwt.as_ref().map(|jwt| Claims {
            email: jwt.claims.get("email").map(|s| s.to_string()),
            sub: jwt.claims.get("sub").map(|s| s.to_string()),
            groups: jwt
                .claims
                .get(GROUPS_CLAIM)
                .map(|s| GroupMembership::Single(s.to_string())),
        })
    }

    pub fn from_request(request: &Request) -> Option<Self> {
        authorizer(request).and_then(Self::from_authorizer)
    }

    pub fn email_or_default(&self) -> &str {
        self.email.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn sub_or_default(&self) -> &str {
        self.sub.as_deref().unwrap_or(UNKNOWN)
    }

    pub fn is_admin(&self) -> bool {
        self.groups
            .as_ref()
            .map(|groups| groups.contains(ADMIN_GROUP))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_lambda_events::apigw::ApiGatewayProxyRequestContext;
    use lambda_http::request::RequestContext;
    use serde_json::json;

    fn request_with_authorizer(fields: Value) -> Request {
        let mut context = ApiGatewayProxyRequestContext::default();
        if let Value::Object(fields) = fields {
            context.authorizer.fields = fields.into_iter().collect();
        }
        Request::default().with_request_context(RequestContext::ApiGatewayV1(context))
    }

    #[test]
    fn missing_fields_fall_back_to_unknown() {
        let c = Claims::from_value(&json!({}));
        assert_eq!(c.email_or_default(), "Unknown");
        assert_eq!(c.sub_or_default(), "Unknown");
        assert!(c.groups.is_none());
        assert!(!c.is_admin());
    }

    #[test]
    fn non_string_claims_are_ignored() {
        let c = Claims::from_value(&json!({
            "email": 5,
            "sub": ["x"],
            "cognito:groups": { "admin-users": true }
        }));
        assert_eq!(c, Claims::default());
    }

    #[test]
    fn string_groups_use_substring_match() {
        let c = Claims::from_value(&json!({ "cognito:groups": "admin-users" }));
        assert!(c.is_admin());

        let c = Claims::from_value(&json!({ "cognito:groups": "standard-users" }));
        assert!(!c.is_admin());

        // looser than a group-name match, kept as observed behaviour
        let c = Claims::from_value(&json!({ "cognito:groups": "super-admin-users-2" }));
        assert!(c.is_admin());
    }

    #[test]
    fn list_groups_use_exact_match() {
        let c = Claims::from_value(&json!({ "cognito:groups": ["standard-users", "admin-users"] }));
        assert!(c.is_admin());

        let c = Claims::from_value(&json!({ "cognito:groups": ["super-admin-users-2"] }));
        assert!(!c.is_admin());
    }

    #[test]
    fn null_groups_claim_is_not_admin() {
        let c = Claims::from_value(&json!({ "email": "a@example.com", "cognito:groups": null }));
        assert_eq!(c.email_or_default(), "a@example.com");
        assert!(!c.is_admin());
    }

    #[test]
    fn request_without_context_has_no_authorizer() {
        let request = Request::default();
        assert!(authorizer(&request).is_none());
        assert!(Claims::from_request(&request).is_none());
    }

    #[test]
    fn empty_authorizer_counts_as_absent() {
        let request = request_with_authorizer(json!({}));
        assert!(authorizer(&request).is_none());
    }

    #[test]
    fn null_claims_still_mark_the_authorizer_present() {
        let request = request_with_authorizer(json!({ "claims": null }));
        assert!(authorizer(&request).is_some());
        assert_eq!(Claims::from_request(&request), Some(Claims::default()));
    }

    #[test]
    fn reads_rest_api_claims() {
        let request = request_with_authorizer(json!({
            "claims": {
                "email": "user@example.com",
                "sub": "12345",
                "cognito:groups": "standard-users"
            }
        }));
        let claims = Claims::from_request(&request).unwrap();
        assert_eq!(claims.email_or_default(), "user@example.com");
        assert_eq!(claims.sub_or_default(), "12345");
        assert!(!claims.is_admin());
    }
}
