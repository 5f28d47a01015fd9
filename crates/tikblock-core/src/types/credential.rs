use crate::{Result, SyncError};
use std::fmt;

/// Minimum length, in characters, of both the username and the secret
pub const MIN_CREDENTIAL_LEN: usize = 3;

/// Username and secret used for HTTP Basic Authentication against the device.
///
/// Both parts are trimmed and must be at least [`MIN_CREDENTIAL_LEN`] characters long.
/// The secret never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    username: String,
    secret: String,
}

impl Credential {
    /// Validate and build a credential
    pub fn new(username: impl AsRef<str>, secret: impl AsRef<str>) -> Result<Self> {
        let username = username.as_ref().trim();
        let secret = secret.as_ref().trim();

        if username.chars().count() < MIN_CREDENTIAL_LEN
            || secret.chars().count() < MIN_CREDENTIAL_LEN
        {
            return Err(SyncError::Input(format!(
                "username and password must be at least {MIN_CREDENTIAL_LEN} characters long"
            )));
        }

        Ok(Self {
            username: username.to_owned(),
            secret: secret.to_owned(),
        })
    }

    /// Username part
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Secret part
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}
