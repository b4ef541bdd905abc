//! # syscreds
//!
//! HTTP credential resolution composing an explicit in-memory credential
//! store with a fallback to host-level system credentials (interactive
//! authenticator prompts, environment proxy configuration).
//!
//! ## Features
//!
//! - **Explicit registrations win** - credentials registered against an
//!   [`AuthScope`](auth::AuthScope) short-circuit system resolution
//! - **Best-match scope lookup** with wildcard host/port/realm/scheme
//! - **System fallback** via a pluggable [`Authenticator`](system::Authenticator)
//!   prompt capability (server requestor first, then proxy) and
//!   `http.proxy*` environment configuration
//! - **Scheme translation** from internal tokens to the names host
//!   credential subsystems expect (`basic` -> `Basic`, ...)
//! - **NTLM domain handling** including the `http.auth.ntlm.domain`
//!   global override
//!
//! Resolution may block: the host prompt capability can involve interactive
//! I/O. Invoke [`CredentialsProvider::get_credentials`](provider::CredentialsProvider)
//! off any latency-sensitive path, or wrap it in a dedicated worker.

#![deny(unsafe_code)]
#![warn(clippy::all)]

// Core modules
pub mod auth;
pub mod context;
pub mod error;
pub mod provider;
pub mod store;
pub mod system;

// Prelude with canonical types
pub mod prelude;

// Essential public API - only what end users actually need
pub use crate::prelude::*;
