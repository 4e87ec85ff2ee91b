//! Explicit auth capability for tenant-admin calls.
//!
//! There is no ambient session state: every protected call takes an
//! [`AuthContext`] argument, and constructing one without a token fails
//! closed. The login flow that produces the token lives outside this
//! crate.

use marquee_core::types::DbId;

use crate::error::{ClientError, ClientResult};

/// Proof of an authenticated tenant-admin session.
#[derive(Debug, Clone)]
pub struct AuthContext {
    bearer_token: String,
    tenant_id: DbId,
}

impl AuthContext {
    /// Build an auth context from a bearer token and the tenant it
    /// belongs to. An empty token is rejected immediately rather than
    /// producing 401s downstream.
    pub fn new(bearer_token: impl Into<String>, tenant_id: DbId) -> ClientResult<Self> {
        let bearer_token = bearer_token.into();
        if bearer_token.trim().is_empty() {
            return Err(ClientError::Unauthenticated(
                "missing bearer token".to_string(),
            ));
        }
        Ok(Self {
            bearer_token,
            tenant_id,
        })
    }

    pub fn tenant_id(&self) -> DbId {
        self.tenant_id
    }

    /// Attach the bearer credential to an outgoing request.
    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request.bearer_auth(&self.bearer_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn empty_token_fails_closed() {
        assert_matches!(
            AuthContext::new("", 1),
            Err(ClientError::Unauthenticated(_))
        );
        assert_matches!(
            AuthContext::new("   ", 1),
            Err(ClientError::Unauthenticated(_))
        );
    }

    #[test]
    fn valid_token_is_accepted() {
        let auth = AuthContext::new("token-abc", 42).unwrap();
        assert_eq!(auth.tenant_id(), 42);
    }
}
