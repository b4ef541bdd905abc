//! Credential resolution orchestration.

use std::sync::Arc;

use tracing::debug;

use crate::auth::{AuthScope, Credentials};
use crate::context::RequestContext;
use crate::error::Result;
use crate::store::{BasicCredentialsStore, CredentialsStore};
use crate::system::builder::build_credentials;
use crate::system::resolver::SystemCredentialResolver;
use crate::system::{Authenticator, EnvProperties, NoAuthenticator, Properties};

/// Read side of credential resolution.
pub trait CredentialsProvider: Send + Sync {
    /// Resolve a credential for the given protection space.
    ///
    /// `Ok(None)` means no credential is available; it is not an error.
    /// May block while the host prompts interactively.
    ///
    /// # Errors
    ///
    /// See [`Error`](crate::error::Error) for the failure taxonomy.
    fn get_credentials(
        &self,
        scope: &AuthScope,
        context: Option<&dyn RequestContext>,
    ) -> Result<Option<Credentials>>;
}

/// Credential store backed by explicit registrations with a fallback to
/// host-level system credentials.
///
/// Explicit registrations always win and are never merged with system
/// credentials; system resolution is consulted only on a store miss and
/// never mutates the store.
pub struct SystemCredentialsProvider {
    store: BasicCredentialsStore,
    resolver: SystemCredentialResolver,
    properties: Arc<dyn Properties>,
}

impl SystemCredentialsProvider {
    /// Provider reading process environment configuration, with no
    /// interactive authenticator registered.
    pub fn new() -> Self {
        Self::with_capabilities(Arc::new(NoAuthenticator), Arc::new(EnvProperties))
    }

    /// Provider over explicit host capabilities, letting callers (and
    /// tests) supply their own prompt and configuration sources.
    pub fn with_capabilities(
        authenticator: Arc<dyn Authenticator>,
        properties: Arc<dyn Properties>,
    ) -> Self {
        Self {
            store: BasicCredentialsStore::new(),
            resolver: SystemCredentialResolver::new(authenticator, Arc::clone(&properties)),
            properties,
        }
    }
}

impl Default for SystemCredentialsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialsProvider for SystemCredentialsProvider {
    fn get_credentials(
        &self,
        scope: &AuthScope,
        context: Option<&dyn RequestContext>,
    ) -> Result<Option<Credentials>> {
        if let Some(credentials) = self.store.get_credentials(scope, context)? {
            debug!(
                target: "syscreds::provider",
                scope = %scope,
                "explicit credentials hit"
            );
            return Ok(Some(credentials));
        }
        if scope.host().is_none() {
            // System resolution needs a concrete host.
            return Ok(None);
        }
        match self.resolver.resolve(scope, context)? {
            Some(raw) => Ok(Some(build_credentials(
                raw,
                scope,
                self.properties.as_ref(),
            ))),
            None => Ok(None),
        }
    }
}

impl CredentialsStore for SystemCredentialsProvider {
    fn set_credentials(&self, scope: AuthScope, credentials: Credentials) {
        self.store.set_credentials(scope, credentials);
    }

    fn clear(&self) {
        self.store.clear();
    }
}
