//! Error types for credential resolution.

/// Boxed error for capability failures crossing the trait seams.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A Result alias where the Err case is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by credential resolution.
///
/// "No credential found" is never an error; it is represented as `Ok(None)`
/// at every layer. A malformed `http.proxyPort` is likewise not an error:
/// it is treated as "no environment proxy configured".
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The in-flight request carries a URI that does not parse as a URL.
    ///
    /// A request should always carry a well-formed URI, so this indicates an
    /// internal-consistency bug upstream and is never softened into "no
    /// credentials".
    #[error("unexpected request url format: {uri}")]
    MalformedTargetUri {
        /// The URI string that failed to parse.
        uri: String,
        /// The underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// The host authenticator capability itself failed.
    ///
    /// A broken prompt subsystem is a configuration error the caller must
    /// see; it is never masked as an absent credential.
    #[error("system authenticator failure")]
    Authenticator(#[source] BoxError),

    /// Credentials could not be encoded into a header value.
    #[error("invalid authorization header")]
    InvalidHeader(#[source] BoxError),
}

/// Creates an `Error` for an invalid header value.
pub(crate) fn invalid_header<E: Into<BoxError>>(e: E) -> Error {
    Error::InvalidHeader(e.into())
}
