//! Text emitters for resolved classes.
//!
//! Each emitter turns a [`ResolvedClass`] into one [`OutputUnit`] of Kotlin
//! source. Emission is a pure function of the class and an optional
//! timestamp, so identical input yields byte-identical text.
//!
//! # Units
//!
//! | mode | units |
//! |---|---|
//! | plain | `Remember<Simple>.kt` |
//! | persistent | `Remember<Simple>.kt`, `RememberSaveable<Simple>.kt` |

mod context;
mod factory;
mod imports;
mod persist;
mod unit;

pub use context::EmitContext;
pub use factory::{emit_factory, factory_name};
pub use imports::ImportTable;
pub use persist::{
    emit_persistence, persistent_factory_name, saver_name, RestoreArg, RestoreSource, SaveEntry,
    SaverPlan,
};
pub use unit::{strip_timestamp, OutputUnit, HEADER};

use rmbr_ir::ResolvedClass;

/// Emit every unit of a class: the factory, plus the persistence unit in
/// persistent mode.
#[tracing::instrument(level = "debug", skip_all, fields(class = %class.model.qualified_name))]
pub fn emit_class(class: &ResolvedClass, stamp: Option<u64>) -> Vec<OutputUnit> {
    let mut units = vec![emit_factory(class, stamp)];
    if class.model.mode.is_persistent() {
        units.push(emit_persistence(class, stamp));
    }
    tracing::debug!(units = units.len(), "emitted");
    units
}
