//! Explicit credential store with best-match scope lookup.

use dashmap::DashMap;
use tracing::debug;

use crate::auth::{AuthScope, Credentials};
use crate::context::RequestContext;
use crate::error::Result;
use crate::provider::CredentialsProvider;

/// Write side of a caller-managed credential store.
///
/// Entries are inserted via [`set_credentials`](Self::set_credentials)
/// (overwriting any previous registration for the scope) and removed only
/// by [`clear`](Self::clear); there is no per-entry delete.
pub trait CredentialsStore: CredentialsProvider {
    /// Register a credential for a protection space.
    fn set_credentials(&self, scope: AuthScope, credentials: Credentials);

    /// Remove all registrations.
    fn clear(&self);
}

/// Thread-safe in-memory credential store.
///
/// Lookup tries an exact scope match first, then falls back to the
/// registered scope matching with the highest specificity.
#[derive(Debug, Default)]
pub struct BasicCredentialsStore {
    entries: DashMap<AuthScope, Credentials>,
}

impl BasicCredentialsStore {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl CredentialsProvider for BasicCredentialsStore {
    fn get_credentials(
        &self,
        scope: &AuthScope,
        _context: Option<&dyn RequestContext>,
    ) -> Result<Option<Credentials>> {
        if let Some(entry) = self.entries.get(scope) {
            return Ok(Some(entry.value().clone()));
        }
        // No exact hit: pick the registered scope matching with the highest
        // specificity.
        let mut best: Option<(i32, Credentials)> = None;
        for entry in self.entries.iter() {
            let score = scope.match_score(entry.key());
            if score >= 0 && best.as_ref().is_none_or(|(s, _)| score > *s) {
                best = Some((score, entry.value().clone()));
            }
        }
        if let Some((score, _)) = &best {
            debug!(
                target: "syscreds::store",
                scope = %scope,
                score,
                "best-match credentials hit"
            );
        }
        Ok(best.map(|(_, credentials)| credentials))
    }
}

impl CredentialsStore for BasicCredentialsStore {
    fn set_credentials(&self, scope: AuthScope, credentials: Credentials) {
        self.entries.insert(scope, credentials);
    }

    fn clear(&self) {
        self.entries.clear();
    }
}
