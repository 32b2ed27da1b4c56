/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Credentials for an account on the photo service.
///
/// No validation is done on any of the fields. Checking the credentials is left
/// up to whatever authenticates against the service.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Account {
    pub username: String,
    pub password: String,

    /// Assigned by the service once authenticated
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,

    #[serde(default, rename = "keyAccessToken")]
    pub key_access_token: String,
}

impl Account {
    /// Creates account credentials. A missing access token is stored as ""
    pub fn new(
        username: &str,
        password: &str,
        user_id: Option<&str>,
        key_access_token: Option<&str>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            user_id: user_id.map(Into::into),
            key_access_token: key_access_token.unwrap_or_default().into(),
        }
    }

    /// Fixed credentials for use in test fixtures
    pub fn create_test_account() -> Self {
        Self::new("testuser", "testpass", Some("12345"), Some("test-token"))
    }

    /// Flat mapping of the four account fields as sent in API requests.
    ///
    /// An unset `userId` is kept as `null`. The password is not redacted.
    pub fn to_json(&self) -> Value {
        json!({
            "username": self.username,
            "password": self.password,
            "userId": self.user_id,
            "keyAccessToken": self.key_access_token,
        })
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password", &"xxx")
            .field("user_id", &self.user_id)
            .field("key_access_token", &"xxx")
            .finish()
    }
}
