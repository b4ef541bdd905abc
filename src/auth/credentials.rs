//! Credential types produced by resolution.

use std::fmt;

use zeroize::Zeroizing;

/// Credential resolved for a protection space.
///
/// Immutable once constructed. The username is always present; the secret
/// may be empty but is never absent.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Plain username/password pair.
    Basic {
        /// Account name.
        username: String,
        /// Password, possibly empty.
        secret: String,
    },
    /// Domain-qualified credential for NTLM-family schemes.
    Ntlm {
        /// Account name; may itself encode `DOMAIN\user`.
        username: String,
        /// Password, possibly empty.
        secret: String,
        /// Windows domain, when configured separately from the username.
        domain: Option<String>,
    },
}

impl Credentials {
    /// Plain username/password credential.
    pub fn basic(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            secret: secret.into(),
        }
    }

    /// NTLM credential with an optional domain.
    pub fn ntlm(
        username: impl Into<String>,
        secret: impl Into<String>,
        domain: Option<String>,
    ) -> Self {
        Self::Ntlm {
            username: username.into(),
            secret: secret.into(),
            domain,
        }
    }

    /// Account name.
    pub fn username(&self) -> &str {
        match self {
            Self::Basic { username, .. } | Self::Ntlm { username, .. } => username,
        }
    }

    /// Password or other secret; may be empty.
    pub fn secret(&self) -> &str {
        match self {
            Self::Basic { secret, .. } | Self::Ntlm { secret, .. } => secret,
        }
    }

    /// Windows domain for NTLM credentials, `None` otherwise.
    pub fn domain(&self) -> Option<&str> {
        match self {
            Self::Basic { .. } => None,
            Self::Ntlm { domain, .. } => domain.as_deref(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("secret", &"***")
                .finish(),
            Self::Ntlm {
                username, domain, ..
            } => f
                .debug_struct("Ntlm")
                .field("username", username)
                .field("secret", &"***")
                .field("domain", domain)
                .finish(),
        }
    }
}

/// Transient raw credential produced by the host prompt or the proxy
/// environment fallback.
///
/// Consumed within a single resolution call and never persisted; the secret
/// is wiped from memory on drop.
pub struct SystemPassword {
    username: String,
    secret: Zeroizing<String>,
}

impl SystemPassword {
    /// Wrap a raw username/secret pair.
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: Zeroizing::new(secret.into()),
        }
    }

    /// Account name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Secret; may be empty.
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for SystemPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemPassword")
            .field("username", &self.username)
            .field("secret", &"***")
            .finish()
    }
}
