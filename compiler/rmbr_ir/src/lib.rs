//! Intermediate representation for the rmbr generator.
//!
//! Two layers live here:
//!
//! - **Declarations** ([`decl`]): the input contract. A front-end (a host
//!   compiler shim, a JSON dump) describes each annotated type as a
//!   [`TypeDecl`] with raw, unvalidated [`Marker`]s.
//! - **Class model** ([`model`]): the typed form produced by extraction. Every
//!   parameter carries exactly one [`DefaultPolicy`], so later phases never
//!   look at markers again.
//!
//! # Architecture
//!
//! ```text
//! TypeDecl ──extract──► ClassModel ──validate──► ClassModel
//!                                                    │
//!                                                 resolve
//!                                                    ▼
//!                                              ResolvedClass ──emit──► text
//! ```

pub mod decl;
pub mod host;
pub mod model;
pub mod resolved;
pub mod ty;

pub use decl::{ClassMarker, InjectionMode, Marker, ParamDecl, PropertyDecl, TypeDecl};
pub use model::{ClassModel, DefaultPolicy, GenerationMode, ParamSpec, PropertySaveSpec};
pub use resolved::{DefaultExpr, ResolvedClass, ResolvedDefault};
pub use ty::{TypeParseError, TypeRef};

/// Last dot-separated segment of a qualified name.
///
/// `"com.example.Counter"` yields `"Counter"`; a name without dots is returned
/// unchanged.
pub fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}

/// Everything before the last dot of a qualified name, or `""`.
pub fn package_of(qualified: &str) -> &str {
    qualified.rfind('.').map_or("", |idx| &qualified[..idx])
}
