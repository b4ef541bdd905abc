//! Basic authentication utilities.

use std::io::Write;

use base64::prelude::BASE64_STANDARD;
use base64::{Engine, write::EncoderWriter};
use http::HeaderValue;

use super::credentials::Credentials;
use crate::error::{self, Error};

/// Encode a username/password pair as a Basic `Authorization` header value.
///
/// The resulting header is marked sensitive so it is not logged by HTTP
/// machinery that honors the flag.
pub fn basic_auth<U, P>(username: U, password: Option<P>) -> Result<HeaderValue, Error>
where
    U: std::fmt::Display,
    P: std::fmt::Display,
{
    let mut buf = b"Basic ".to_vec();
    {
        let mut encoder = EncoderWriter::new(&mut buf, &BASE64_STANDARD);
        let _ = write!(encoder, "{username}:");
        if let Some(password) = password {
            let _ = write!(encoder, "{password}");
        }
    }
    let mut header = HeaderValue::from_bytes(&buf).map_err(|_e| {
        error::invalid_header(format!(
            "Invalid authorization header: {}",
            String::from_utf8_lossy(&buf)
        ))
    })?;
    header.set_sensitive(true);
    Ok(header)
}

/// Encode basic authentication credentials for compatibility.
pub fn encode_basic_auth(username: &str, password: &str) -> String {
    let credentials = format!("{username}:{password}");
    BASE64_STANDARD.encode(credentials.as_bytes())
}

/// Decode basic authentication credentials.
pub fn decode_basic_auth(encoded: &str) -> Result<(String, String), Error> {
    let decoded = BASE64_STANDARD
        .decode(encoded)
        .map_err(|_| error::invalid_header("Invalid base64 encoding in authorization header"))?;

    let credentials = String::from_utf8(decoded)
        .map_err(|_| error::invalid_header("Invalid UTF-8 in authorization header"))?;

    let parts: Vec<&str> = credentials.splitn(2, ':').collect();
    if parts.len() != 2 {
        return Err(error::invalid_header(
            "Invalid format in authorization header",
        ));
    }

    Ok((parts[0].to_string(), parts[1].to_string()))
}

impl Credentials {
    /// Encode as a Basic `Authorization` header value.
    ///
    /// # Errors
    ///
    /// NTLM credentials carry domain state that a Basic header cannot
    /// express; encoding them is rejected.
    pub fn basic_header(&self) -> Result<HeaderValue, Error> {
        match self {
            Self::Basic { username, secret } => basic_auth(username, Some(secret)),
            Self::Ntlm { .. } => Err(error::invalid_header(
                "NTLM credentials cannot be encoded as a Basic authorization header",
            )),
        }
    }
}
