// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use sha2::{Digest, Sha256};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// `None` leaves the admin routes open.
    pub admin_token: Option<AdminToken>,
}

/// Configured admin bearer token, kept only as a SHA-256 digest.
#[derive(Clone)]
pub struct AdminToken([u8; 32]);

impl AdminToken {
    pub fn new(token: &str) -> Self {
        Self(Sha256::digest(token.as_bytes()).into())
    }

    /// Compares digests without short-circuiting on the first mismatch.
    pub fn matches(&self, presented: &str) -> bool {
        let digest: [u8; 32] = Sha256::digest(presented.as_bytes()).into();
        digest
            .iter()
            .zip(self.0.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl fmt::Debug for AdminToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminToken(<redacted>)")
    }
}
