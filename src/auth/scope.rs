//! Protection-space keys for credential registration and lookup.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Origin host of the request being authenticated, when known.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    scheme: String,
    host: String,
    port: u16,
}

impl Origin {
    /// Create a new origin from a URL scheme name, host and port.
    pub fn new(scheme: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
        }
    }

    /// URL scheme name of the origin (`http`, `https`, ...).
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Origin hostname.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Origin port.
    pub fn port(&self) -> u16 {
        self.port
    }
}

/// Protection-space key a credential applies to.
///
/// `None` fields act as wildcards matching any value. The host is normalized
/// to lowercase at construction; schemes compare case-insensitively. The
/// optional origin is advisory (used to derive the protocol passed to the
/// host prompt) and takes no part in equality or matching.
#[derive(Debug, Clone)]
pub struct AuthScope {
    host: Option<String>,
    port: Option<u16>,
    realm: Option<String>,
    scheme: Option<String>,
    origin: Option<Origin>,
}

impl AuthScope {
    /// Scope for a concrete host and port, matching any realm and scheme.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: Some(host.into().to_ascii_lowercase()),
            port: Some(port),
            realm: None,
            scheme: None,
            origin: None,
        }
    }

    /// Scope matching any host, port, realm and scheme.
    pub fn any() -> Self {
        Self {
            host: None,
            port: None,
            realm: None,
            scheme: None,
            origin: None,
        }
    }

    /// Restrict the scope to a protection-space realm.
    #[must_use]
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    /// Restrict the scope to an authentication scheme.
    ///
    /// The token keeps its original spelling; comparisons are
    /// case-insensitive.
    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Attach the origin host of the request being authenticated.
    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Hostname, if not a wildcard.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Port, if not a wildcard.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Realm, if not a wildcard.
    pub fn realm(&self) -> Option<&str> {
        self.realm.as_deref()
    }

    /// Scheme token, if not a wildcard.
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Origin of the request, when known.
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    /// Specificity comparison against another scope.
    ///
    /// Returns `-1` when the scopes cannot match (both sides concrete but
    /// unequal on some field). Otherwise returns an accumulated factor:
    /// scheme adds 1, realm 2, port 4, host 8, each counted when the field
    /// is equal on both sides or a wildcard on both. A non-negative result
    /// means the scopes match; a higher factor means a more specific match.
    pub fn match_score(&self, that: &AuthScope) -> i32 {
        let mut factor = 0;
        match (self.scheme.as_deref(), that.scheme.as_deref()) {
            (None, None) => factor += 1,
            (Some(a), Some(b)) if a.eq_ignore_ascii_case(b) => factor += 1,
            (Some(_), Some(_)) => return -1,
            _ => {}
        }
        match (self.realm.as_deref(), that.realm.as_deref()) {
            (None, None) => factor += 2,
            (Some(a), Some(b)) if a == b => factor += 2,
            (Some(_), Some(_)) => return -1,
            _ => {}
        }
        match (self.port, that.port) {
            (None, None) => factor += 4,
            (Some(a), Some(b)) if a == b => factor += 4,
            (Some(_), Some(_)) => return -1,
            _ => {}
        }
        match (self.host.as_deref(), that.host.as_deref()) {
            (None, None) => factor += 8,
            (Some(a), Some(b)) if a == b => factor += 8,
            (Some(_), Some(_)) => return -1,
            _ => {}
        }
        factor
    }
}

impl PartialEq for AuthScope {
    fn eq(&self, other: &Self) -> bool {
        self.host == other.host
            && self.port == other.port
            && self.realm == other.realm
            && match (self.scheme.as_deref(), other.scheme.as_deref()) {
                (None, None) => true,
                (Some(a), Some(b)) => a.eq_ignore_ascii_case(b),
                _ => false,
            }
    }
}

impl Eq for AuthScope {}

impl Hash for AuthScope {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.host.hash(state);
        self.port.hash(state);
        self.realm.hash(state);
        // Scheme hashes case-folded so hashing agrees with equality.
        self.scheme
            .as_deref()
            .map(str::to_ascii_uppercase)
            .hash(state);
    }
}

impl fmt::Display for AuthScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{scheme} ")?;
        }
        if let Some(realm) = &self.realm {
            write!(f, "'{realm}' ")?;
        }
        match &self.host {
            Some(host) => write!(f, "{host}")?,
            None => f.write_str("<any host>")?,
        }
        match self.port {
            Some(port) => write!(f, ":{port}"),
            None => f.write_str(":<any port>"),
        }
    }
}
