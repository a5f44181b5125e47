use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum AuthorizationState {
    #[default]
    Unauthorized,
    Authorized,
}

/// One-way authorization switch shared by every authorizer variant.
///
/// Starts [`AuthorizationState::Unauthorized`] and can only be flipped to
/// [`AuthorizationState::Authorized`]. There is no reset.
#[derive(Debug, Default)]
pub struct AuthorizationFlag {
    authorized: AtomicBool,
}

impl AuthorizationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(&self) {
        self.authorized.store(true, Ordering::Release);
    }

    pub fn state(&self) -> AuthorizationState {
        if self.authorized.load(Ordering::Acquire) {
            AuthorizationState::Authorized
        } else {
            AuthorizationState::Unauthorized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_flag_starts_unauthorized() {
        let flag = AuthorizationFlag::new();
        assert_eq!(flag.state(), AuthorizationState::Unauthorized);
    }

    #[test]
    fn test_grant_is_one_way() {
        let flag = AuthorizationFlag::new();
        flag.grant();
        flag.grant();
        assert_eq!(flag.state(), AuthorizationState::Authorized);
    }

    #[test]
    fn test_grant_is_visible_across_threads() {
        let flag = Arc::new(AuthorizationFlag::new());
        let granter = Arc::clone(&flag);
        thread::spawn(move || granter.grant()).join().unwrap();
        assert_eq!(flag.state(), AuthorizationState::Authorized);
    }
}
