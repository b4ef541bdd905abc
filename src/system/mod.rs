//! Host-level credential capabilities: the interactive authenticator prompt
//! and ambient proxy/domain configuration.

pub mod builder;
pub mod resolver;

use url::Url;

use crate::auth::SystemPassword;
use crate::error::BoxError;

/// Environment key naming the proxy host.
pub const PROXY_HOST: &str = "http.proxyHost";
/// Environment key naming the proxy port.
pub const PROXY_PORT: &str = "http.proxyPort";
/// Environment key naming the proxy account.
pub const PROXY_USER: &str = "http.proxyUser";
/// Environment key naming the proxy password.
pub const PROXY_PASSWORD: &str = "http.proxyPassword";
/// Environment key forcing NTLM credentials with the given domain.
pub const NTLM_DOMAIN: &str = "http.auth.ntlm.domain";

/// Which party is being authenticated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestorType {
    /// The origin server.
    Server,
    /// An intermediary proxy.
    Proxy,
}

/// Host interactive-prompt capability.
///
/// Implementations may block on interactive I/O; resolution must be invoked
/// off latency-sensitive paths.
pub trait Authenticator: Send + Sync {
    /// Ask the host for a credential for the given protection space.
    ///
    /// No local-address hint is ever supplied, so realm matching cannot be
    /// defeated by an address mismatch.
    ///
    /// # Errors
    ///
    /// A failure of the capability itself propagates to the caller; it is
    /// never folded into "no credentials".
    #[allow(clippy::too_many_arguments)]
    fn request_password_authentication(
        &self,
        hostname: &str,
        port: Option<u16>,
        protocol: &str,
        realm: Option<&str>,
        scheme_name: Option<&str>,
        target_url: Option<&Url>,
        requestor_type: RequestorType,
    ) -> Result<Option<SystemPassword>, BoxError>;
}

/// Authenticator for hosts with no interactive prompt registered.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAuthenticator;

impl Authenticator for NoAuthenticator {
    fn request_password_authentication(
        &self,
        _hostname: &str,
        _port: Option<u16>,
        _protocol: &str,
        _realm: Option<&str>,
        _scheme_name: Option<&str>,
        _target_url: Option<&Url>,
        _requestor_type: RequestorType,
    ) -> Result<Option<SystemPassword>, BoxError> {
        Ok(None)
    }
}

/// Ambient configuration lookup. Keys are queried verbatim.
pub trait Properties: Send + Sync {
    /// Value for the given key, if configured.
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads configuration from process environment variables.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvProperties;

impl Properties for EnvProperties {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
