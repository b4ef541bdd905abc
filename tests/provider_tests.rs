//! Tests for the credential provider orchestration.

mod common;

use std::sync::Arc;

use common::{MapProperties, PanickingAuthenticator, ScriptedAuthenticator};
use syscreds::{
    AuthScope, Credentials, CredentialsProvider, CredentialsStore, RequestorType,
    SystemCredentialsProvider,
};

fn provider_with(
    authenticator: ScriptedAuthenticator,
    properties: MapProperties,
) -> SystemCredentialsProvider {
    SystemCredentialsProvider::with_capabilities(Arc::new(authenticator), Arc::new(properties))
}

#[test]
fn explicit_registrations_win_without_consulting_the_system() {
    // A prompt that panics on use proves the system path is never taken.
    let provider = SystemCredentialsProvider::with_capabilities(
        Arc::new(PanickingAuthenticator),
        Arc::new(MapProperties::empty()),
    );

    let scope = AuthScope::new("host.example.com", 80).with_realm("realm");
    let creds = Credentials::basic("alice", "secret");
    provider.set_credentials(scope.clone(), creds.clone());

    let resolved = provider
        .get_credentials(&scope, None)
        .expect("resolve")
        .expect("credentials");
    assert_eq!(resolved, creds);
}

#[test]
fn best_match_registration_short_circuits_too() {
    let provider = SystemCredentialsProvider::with_capabilities(
        Arc::new(PanickingAuthenticator),
        Arc::new(MapProperties::empty()),
    );

    provider.set_credentials(
        AuthScope::new("host.example.com", 80),
        Credentials::basic("alice", "secret"),
    );

    let narrower = AuthScope::new("host.example.com", 80)
        .with_realm("realm")
        .with_scheme("basic");
    let resolved = provider
        .get_credentials(&narrower, None)
        .expect("resolve")
        .expect("credentials");
    assert_eq!(resolved, Credentials::basic("alice", "secret"));
}

#[test]
fn clear_falls_through_to_system_resolution() {
    let provider = provider_with(
        ScriptedAuthenticator::new().answer(RequestorType::Server, "system-user", "system-pw"),
        MapProperties::empty(),
    );

    let scope = AuthScope::new("host.example.com", 80);
    provider.set_credentials(scope.clone(), Credentials::basic("explicit", "pw"));
    provider.clear();

    let resolved = provider
        .get_credentials(&scope, None)
        .expect("resolve")
        .expect("credentials");
    assert_eq!(resolved, Credentials::basic("system-user", "system-pw"));
}

#[test]
fn wildcard_host_scope_skips_system_resolution() {
    let provider = SystemCredentialsProvider::with_capabilities(
        Arc::new(PanickingAuthenticator),
        Arc::new(MapProperties::empty()),
    );

    let resolved = provider
        .get_credentials(&AuthScope::any().with_scheme("basic"), None)
        .expect("resolve");
    assert!(resolved.is_none());
}

#[test]
fn ntlm_domain_override_applies_to_any_scheme() {
    let provider = provider_with(
        ScriptedAuthenticator::new().answer(RequestorType::Server, "alice", "secret"),
        MapProperties::new(&[("http.auth.ntlm.domain", "CORP")]),
    );

    let scope = AuthScope::new("host.example.com", 80).with_scheme("Basic");
    let resolved = provider
        .get_credentials(&scope, None)
        .expect("resolve")
        .expect("credentials");
    assert_eq!(
        resolved,
        Credentials::ntlm("alice", "secret", Some("CORP".into()))
    );
}

#[test]
fn ntlm_scheme_yields_domainless_ntlm_credentials() {
    for spelling in ["NTLM", "ntlm", "Ntlm"] {
        let provider = provider_with(
            ScriptedAuthenticator::new().answer(RequestorType::Server, "corp\\alice", "secret"),
            MapProperties::empty(),
        );

        let scope = AuthScope::new("host.example.com", 80).with_scheme(spelling);
        let resolved = provider
            .get_credentials(&scope, None)
            .expect("resolve")
            .expect("credentials");
        assert_eq!(resolved, Credentials::ntlm("corp\\alice", "secret", None));
    }
}

#[test]
fn other_schemes_yield_plain_credentials() {
    let provider = provider_with(
        ScriptedAuthenticator::new().answer(RequestorType::Server, "alice", "secret"),
        MapProperties::empty(),
    );

    let scope = AuthScope::new("host.example.com", 80).with_scheme("digest");
    let resolved = provider
        .get_credentials(&scope, None)
        .expect("resolve")
        .expect("credentials");
    assert_eq!(resolved, Credentials::basic("alice", "secret"));
}

#[test]
fn proxy_environment_flows_through_the_provider() {
    let provider = provider_with(
        ScriptedAuthenticator::new(),
        MapProperties::new(&[
            ("http.proxyHost", "proxy.example.com"),
            ("http.proxyPort", "8080"),
            ("http.proxyUser", "alice"),
            ("http.proxyPassword", "secret"),
        ]),
    );

    let resolved = provider
        .get_credentials(&AuthScope::new("proxy.example.com", 8080), None)
        .expect("resolve")
        .expect("credentials");
    assert_eq!(resolved, Credentials::basic("alice", "secret"));

    let unrelated = provider
        .get_credentials(&AuthScope::new("other.example.com", 80), None)
        .expect("resolve");
    assert!(unrelated.is_none());
}

#[test]
fn absent_everywhere_is_not_an_error() {
    let provider = provider_with(ScriptedAuthenticator::new(), MapProperties::empty());

    let resolved = provider
        .get_credentials(&AuthScope::new("host.example.com", 80), None)
        .expect("resolve");
    assert!(resolved.is_none());
}

#[test]
fn resolution_does_not_mutate_the_store() {
    let authenticator = Arc::new(
        ScriptedAuthenticator::new().answer(RequestorType::Server, "system-user", "system-pw"),
    );
    let shared: Arc<dyn syscreds::Authenticator> = authenticator.clone();
    let provider =
        SystemCredentialsProvider::with_capabilities(shared, Arc::new(MapProperties::empty()));

    let scope = AuthScope::new("host.example.com", 80);
    provider
        .get_credentials(&scope, None)
        .expect("resolve")
        .expect("credentials");
    provider
        .get_credentials(&scope, None)
        .expect("resolve")
        .expect("credentials");

    // Both resolutions prompted: nothing was cached in the explicit store.
    assert_eq!(authenticator.recorded().len(), 2);
}
