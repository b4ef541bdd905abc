//! Typed credential construction from raw system pairs.

use super::{NTLM_DOMAIN, Properties};
use crate::auth::{AuthScope, Credentials, SystemPassword};

/// Build a typed credential from the raw pair the system produced.
///
/// When `http.auth.ntlm.domain` is configured, the result is an NTLM
/// credential with that domain regardless of the scheme being answered.
/// Otherwise an NTLM scheme yields a domain-less NTLM credential (the
/// domain may already be carried in a `DOMAIN\user` name, which is not
/// split here), and anything else yields a plain username/password pair.
pub fn build_credentials(
    raw: SystemPassword,
    scope: &AuthScope,
    properties: &dyn Properties,
) -> Credentials {
    if let Some(domain) = properties.get(NTLM_DOMAIN) {
        return Credentials::ntlm(raw.username(), raw.secret(), Some(domain));
    }
    if scope
        .scheme()
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("ntlm"))
    {
        return Credentials::ntlm(raw.username(), raw.secret(), None);
    }
    Credentials::basic(raw.username(), raw.secret())
}
