//! Built-in collaborator implementations.
//!
//! Stock authenticator, access decider, and run-as resolver, meant for
//! development setups, tests, and as reference points for real providers.
//! The stock `AttributeSource` is [`crate::StaticAttributeCatalog`]; the
//! no-op `NullRunAsResolver` lives in `gatekit-sdk` because it is the
//! guard's default.

pub mod authn;
pub mod authz;
pub mod run_as;

pub use authn::{PrincipalConfig, StaticAuthenticator, StaticAuthenticatorConfig};
pub use authz::AuthorityDecider;
pub use run_as::PrefixRunAsResolver;
