use crate::domain::authorization::{AuthorizationFlag, AuthorizationState};
use crate::domain::ports::Authorizer;

/// Authorizes through a code sent by SMS.
#[derive(Debug, Default)]
pub struct SmsAuthorizer {
    flag: AuthorizationFlag,
}

impl SmsAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Authorizer for SmsAuthorizer {
    fn channel(&self) -> &'static str {
        "SMS"
    }

    fn verify_code(&self, code: &str) {
        tracing::info!(channel = self.channel(), code, "Verifying SMS code");
        self.flag.grant();
    }

    fn state(&self) -> AuthorizationState {
        self.flag.state()
    }
}

/// Authorizes through a Google Authenticator (TOTP) code.
#[derive(Debug, Default)]
pub struct GoogleAuthorizer {
    flag: AuthorizationFlag,
}

impl GoogleAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Authorizer for GoogleAuthorizer {
    fn channel(&self) -> &'static str {
        "Google"
    }

    fn verify_code(&self, code: &str) {
        tracing::info!(channel = self.channel(), code, "Verifying google auth code");
        self.flag.grant();
    }

    fn state(&self) -> AuthorizationState {
        self.flag.state()
    }
}
