//! Shared fakes for exercising resolution without touching the process
//! environment or a real host prompt.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use syscreds::{Authenticator, BoxError, Properties, RequestorType, SystemPassword, Url};

/// Configuration lookup backed by a fixed map.
pub struct MapProperties(HashMap<String, String>);

impl MapProperties {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    pub fn empty() -> Self {
        Self(HashMap::new())
    }
}

impl Properties for MapProperties {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

/// One recorded prompt invocation.
#[derive(Debug, Clone)]
pub struct PromptCall {
    pub hostname: String,
    pub port: Option<u16>,
    pub protocol: String,
    pub realm: Option<String>,
    pub scheme_name: Option<String>,
    pub target_url: Option<Url>,
    pub requestor_type: RequestorType,
}

/// Records every prompt and answers from a fixed per-requestor script.
#[derive(Default)]
pub struct ScriptedAuthenticator {
    answers: HashMap<RequestorType, (String, String)>,
    pub calls: Mutex<Vec<PromptCall>>,
}

impl ScriptedAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, requestor_type: RequestorType, username: &str, secret: &str) -> Self {
        self.answers
            .insert(requestor_type, (username.to_string(), secret.to_string()));
        self
    }

    pub fn recorded(&self) -> Vec<PromptCall> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl Authenticator for ScriptedAuthenticator {
    fn request_password_authentication(
        &self,
        hostname: &str,
        port: Option<u16>,
        protocol: &str,
        realm: Option<&str>,
        scheme_name: Option<&str>,
        target_url: Option<&Url>,
        requestor_type: RequestorType,
    ) -> Result<Option<SystemPassword>, BoxError> {
        self.calls.lock().expect("calls lock").push(PromptCall {
            hostname: hostname.to_string(),
            port,
            protocol: protocol.to_string(),
            realm: realm.map(str::to_string),
            scheme_name: scheme_name.map(str::to_string),
            target_url: target_url.cloned(),
            requestor_type,
        });
        Ok(self
            .answers
            .get(&requestor_type)
            .map(|(user, secret)| SystemPassword::new(user.clone(), secret.clone())))
    }
}

/// Panics if the prompt is ever consulted.
pub struct PanickingAuthenticator;

impl Authenticator for PanickingAuthenticator {
    fn request_password_authentication(
        &self,
        _hostname: &str,
        _port: Option<u16>,
        _protocol: &str,
        _realm: Option<&str>,
        _scheme_name: Option<&str>,
        _target_url: Option<&Url>,
        _requestor_type: RequestorType,
    ) -> Result<Option<SystemPassword>, BoxError> {
        panic!("host prompt must not be consulted");
    }
}

/// Fails every prompt, standing in for a broken prompt subsystem.
pub struct FailingAuthenticator;

impl Authenticator for FailingAuthenticator {
    fn request_password_authentication(
        &self,
        _hostname: &str,
        _port: Option<u16>,
        _protocol: &str,
        _realm: Option<&str>,
        _scheme_name: Option<&str>,
        _target_url: Option<&Url>,
        _requestor_type: RequestorType,
    ) -> Result<Option<SystemPassword>, BoxError> {
        Err("prompt subsystem broken".into())
    }
}
