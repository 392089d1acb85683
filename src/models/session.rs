use serde::Deserialize;

/// An authenticated session. Lives in memory only.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// Account email, when the user info lookup succeeded
    pub email: Option<String>,
    pub access_token: String,
}

impl Session {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            email: None,
            access_token: access_token.into(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

// Keeps the token out of debug output and logs.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("email", &self.email)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Subset of the OpenID user info response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let session = Session::new("ya29.secret").with_email("mestre@ie-gornal.cat");
        let debug = format!("{:?}", session);
        assert!(!debug.contains("ya29.secret"));
        assert!(debug.contains("mestre@ie-gornal.cat"));
    }

    #[test]
    fn test_user_info_tolerates_missing_fields() {
        let info: UserInfo = serde_json::from_str(r#"{"id":"123"}"#).unwrap();
        assert!(info.email.is_none());
    }
}
