//! Essential types for credential resolution.
//!
//! Only canonical types that are part of the public API belong here.

pub use crate::auth::{AuthScope, Credentials, Origin, SystemPassword};
pub use crate::context::{ExecutionContext, RequestContext};

// Error types
pub use crate::error::{BoxError, Error, Result};

// Resolution surface
pub use crate::provider::{CredentialsProvider, SystemCredentialsProvider};
pub use crate::store::{BasicCredentialsStore, CredentialsStore};

// Host capability seams
pub use crate::system::{
    Authenticator, EnvProperties, NoAuthenticator, Properties, RequestorType,
};

// URL handling
pub use url::Url;
