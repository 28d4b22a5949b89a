//! Diagnostic system for generator errors.
//!
//! Every per-class failure is first described as a structured [`Problem`]
//! (what went wrong, on which class and member) and then rendered into a
//! [`Diagnostic`] with an error code, labels, notes and help text.
//!
//! Error codes are grouped by phase:
//! - `E1xxx`: extraction (marker shape)
//! - `E2xxx`: default resolution
//! - `E3xxx`: persistence keys
//! - `E9xxx`: driver (input and output)

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;
mod problem;

pub use diagnostic::{Diagnostic, Label, Location, Member, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use problem::Problem;
