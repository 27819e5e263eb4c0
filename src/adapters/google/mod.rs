//! Google Sign-In adapters: the production JWKS verifier and a mock for
//! tests.

mod mock;
mod verifier;

pub use mock::MockIdentityVerifier;
pub use verifier::GoogleIdentityVerifier;
