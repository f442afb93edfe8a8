pub mod auth;

pub use auth::{require_identity, require_platform_admin, IdentityVerifier};
