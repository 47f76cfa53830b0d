//! Explicit session state for the HTTP layer.
//!
//! The access token is issued by the hub's login flow. It is carried here and
//! handed to the client builder, never read from ambient state by the
//! processors.

use std::fmt;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Session {
    access_token: Option<String>,
}

impl Session {
    pub fn new(access_token: Option<String>) -> Self {
        // A blank token is the same as none
        let access_token = access_token.filter(|token| !token.trim().is_empty());
        Self { access_token }
    }

    /// Session without credentials; public endpoints only.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Value for the `Authorization` header, if a token is present.
    pub fn authorization_header(&self) -> Option<String> {
        self.access_token
            .as_ref()
            .map(|token| format!("Bearer {token}"))
    }
}

// Never leak the token into logs
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}
