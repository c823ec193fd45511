//! Fixture-to-SQL emission
//!
//! `SeedEmitter` walks the fixture tree once and turns each record into an
//! `InsertStatement`. Foreign-key parents are always emitted before their
//! children so the script can be replayed top to bottom.

pub mod emitter;
pub mod types;

pub use emitter::SeedEmitter;
pub use types::{EmitConfig, EmitSummary, DEFAULT_OUTPUT_FILE};
