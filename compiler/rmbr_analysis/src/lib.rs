//! Analysis phases: declaration → class model → resolved class.
//!
//! All three phases are pure functions of their inputs:
//!
//! - [`extract`] classifies markers into a [`ClassModel`], collecting every
//!   parameter error of the class.
//! - [`validate`] checks cross-member invariants and stops at the first
//!   failure.
//! - [`resolve`] turns each [`DefaultPolicy`] into a [`ResolvedDefault`].
//!
//! [`ClassModel`]: rmbr_ir::ClassModel
//! [`DefaultPolicy`]: rmbr_ir::DefaultPolicy
//! [`ResolvedDefault`]: rmbr_ir::ResolvedDefault

mod extract;
mod resolve;
mod validate;

pub use extract::extract;
pub use resolve::{resolve, resolve_param, ResolveContext};
pub use validate::validate;
