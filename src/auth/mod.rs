//! Authentication scopes, credential types and scheme translation.

pub mod basic;
pub mod credentials;
pub mod scheme;
pub mod scope;

// Re-export specific types to avoid conflicts
pub use basic::{basic_auth, decode_basic_auth, encode_basic_auth};
pub use credentials::{Credentials, SystemPassword};
pub use scheme::translate_scheme;
pub use scope::{AuthScope, Origin};
