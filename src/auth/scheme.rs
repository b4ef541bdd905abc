//! Scheme-name translation for host credential subsystems.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Uppercased internal scheme token to the canonical host-facing name.
/// Read-only after initialization.
static SCHEME_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("BASIC", "Basic"),
        ("DIGEST", "Digest"),
        ("NTLM", "NTLM"),
        ("SPNEGO", "SPNEGO"),
        ("KERBEROS", "Kerberos"),
    ])
});

/// Translate an internal scheme token to the name the host credential
/// subsystem expects.
///
/// Lookup is case-insensitive. Unknown tokens pass through unchanged so
/// they still reach the host prompt under their original spelling.
pub fn translate_scheme(token: Option<&str>) -> Option<&str> {
    let token = token?;
    match SCHEME_MAP.get(token.to_ascii_uppercase().as_str()) {
        Some(name) => Some(name),
        None => Some(token),
    }
}
