//! System credential resolution: interactive prompts, then the proxy
//! environment.

use std::sync::Arc;

use tracing::debug;
use url::Url;

use super::{Authenticator, Properties, RequestorType};
use super::{PROXY_HOST, PROXY_PASSWORD, PROXY_PORT, PROXY_USER};
use crate::auth::{AuthScope, SystemPassword, translate_scheme};
use crate::context::RequestContext;
use crate::error::{Error, Result};

/// Resolves raw credentials from host-level sources.
///
/// The interactive authenticator is asked for a server credential first,
/// then a proxy credential; environment-configured proxy settings are the
/// last fallback. First success wins.
pub struct SystemCredentialResolver {
    authenticator: Arc<dyn Authenticator>,
    properties: Arc<dyn Properties>,
}

impl SystemCredentialResolver {
    /// Resolver over the given host capabilities.
    pub fn new(authenticator: Arc<dyn Authenticator>, properties: Arc<dyn Properties>) -> Self {
        Self {
            authenticator,
            properties,
        }
    }

    /// Resolve a raw credential for the scope.
    ///
    /// May block while the host prompts interactively.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedTargetUri`] when a context is supplied whose
    /// request URI does not parse; [`Error::Authenticator`] when the prompt
    /// capability itself fails.
    pub fn resolve(
        &self,
        scope: &AuthScope,
        context: Option<&dyn RequestContext>,
    ) -> Result<Option<SystemPassword>> {
        let Some(hostname) = scope.host() else {
            // System resolution needs a concrete host.
            return Ok(None);
        };
        let protocol = match scope.origin() {
            Some(origin) => origin.scheme(),
            None if scope.port() == Some(443) => "https",
            None => "http",
        };
        let target_url = target_host_url(context)?;

        // Server credentials must be attempted before proxy credentials.
        for requestor_type in [RequestorType::Server, RequestorType::Proxy] {
            let found = self
                .authenticator
                .request_password_authentication(
                    hostname,
                    scope.port(),
                    protocol,
                    scope.realm(),
                    translate_scheme(scope.scheme()),
                    target_url.as_ref(),
                    requestor_type,
                )
                .map_err(Error::Authenticator)?;
            if let Some(raw) = found {
                debug!(
                    target: "syscreds::resolver",
                    scope = %scope,
                    ?requestor_type,
                    "host authenticator supplied credentials"
                );
                return Ok(Some(raw));
            }
        }
        Ok(self.proxy_environment(scope))
    }

    /// Environment-configured proxy fallback.
    ///
    /// The four `http.proxy*` keys are read as one logical snapshot at entry.
    fn proxy_environment(&self, scope: &AuthScope) -> Option<SystemPassword> {
        let proxy_host = self.properties.get(PROXY_HOST)?;
        let proxy_port = self.properties.get(PROXY_PORT)?;
        let proxy_user = self.properties.get(PROXY_USER);
        let proxy_password = self.properties.get(PROXY_PASSWORD);

        let port: u16 = match proxy_port.parse() {
            Ok(port) => port,
            Err(_) => {
                // A malformed port means no environment proxy is configured.
                debug!(
                    target: "syscreds::resolver",
                    port = %proxy_port,
                    "ignoring non-numeric http.proxyPort"
                );
                return None;
            }
        };
        let proxy_scope = AuthScope::new(proxy_host, port);
        if scope.match_score(&proxy_scope) < 0 {
            return None;
        }
        let user = proxy_user?;
        debug!(
            target: "syscreds::resolver",
            scope = %scope,
            "using proxy credentials from the environment"
        );
        Some(SystemPassword::new(user, proxy_password.unwrap_or_default()))
    }
}

/// URL of the in-flight request, when a context carries one.
fn target_host_url(context: Option<&dyn RequestContext>) -> Result<Option<Url>> {
    let Some(context) = context else {
        // Fluent case: resolution without an attached request.
        return Ok(None);
    };
    let Some(uri) = context.current_request_uri() else {
        return Ok(None);
    };
    match Url::parse(uri) {
        Ok(url) => Ok(Some(url)),
        Err(source) => Err(Error::MalformedTargetUri {
            uri: uri.to_string(),
            source,
        }),
    }
}
