/// Basic Authorization header parsing
///
/// Protected routes receive credentials as
/// `Authorization: Basic base64(user_name:password)`. This module decodes
/// the token portion into a [`Credentials`] pair; the middleware decides
/// what to do with parse failures.

use base64::{engine::general_purpose::STANDARD, Engine};

/// Credentials supplied with a Basic Authorization header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Supplied user name (may be empty)
    pub user_name: String,

    /// Supplied plaintext password (may be empty)
    pub password: String,
}

impl Credentials {
    /// Decodes the base64 token of a `Basic` header into credentials
    ///
    /// Returns `None` if the token is not valid base64, is not UTF-8, or
    /// does not contain a `:` separator. The password portion may itself
    /// contain colons; only the first one separates the fields.
    ///
    /// # Example
    ///
    /// ```
    /// use thingful_shared::auth::basic::Credentials;
    ///
    /// // base64("demo:My@Passw0rd")
    /// let creds = Credentials::from_basic_token("ZGVtbzpNeUBQYXNzdzByZA==").unwrap();
    /// assert_eq!(creds.user_name, "demo");
    /// assert_eq!(creds.password, "My@Passw0rd");
    /// ```
    pub fn from_basic_token(token: &str) -> Option<Self> {
        let decoded = STANDARD.decode(token.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;

        let (user_name, password) = decoded.split_once(':')?;

        Some(Self {
            user_name: user_name.to_string(),
            password: password.to_string(),
        })
    }

    /// True if either field is empty
    pub fn is_empty(&self) -> bool {
        self.user_name.is_empty() || self.password.is_empty()
    }
}
