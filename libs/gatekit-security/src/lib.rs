#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
pub mod attributes;
pub mod context;
pub mod identity;
pub mod operation;

pub use attributes::{AccessAttribute, AttributeSet};
pub use context::{ContextSnapshot, SecurityContext};
pub use identity::{Identity, IdentityBuilder};
pub use operation::Operation;
