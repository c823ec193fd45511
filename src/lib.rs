//! # Seedkiln - fixture to SQL seed generator
//!
//! Turns the hand-authored workspace/book/task fixture into a flat file of
//! PostgreSQL `INSERT` statements for seeding a development database.
//!
//! ## Modules
//!
//! - **fixture**: Typed records and the loader for the embedded fixture
//! - **sql**: Literal formatting, target tables, and statement rendering
//! - **emit**: The tree walk that turns records into statements
//!
//! ## Quick Start
//!
//! ```rust
//! use seedkiln::{render_seed_sql, Fixture};
//!
//! # fn main() -> anyhow::Result<()> {
//! let fixture = Fixture::embedded()?;
//! let sql = render_seed_sql(&fixture)?;
//!
//! assert!(sql.starts_with("INSERT INTO users"));
//! # Ok(())
//! # }
//! ```

#![recursion_limit = "256"]

use anyhow::{Context, Result};
use std::io::Write;
use tracing::debug;

pub mod emit;
pub mod error;
pub mod fixture;
pub mod sql;

pub use emit::{EmitConfig, EmitSummary, SeedEmitter};
pub use error::{SeedError, SeedResult};
pub use fixture::Fixture;
pub use sql::{InsertStatement, SqlValue, StatementWriter, Table};

/// Main entry point: emit every statement for a fixture and write it out
pub fn seed_sql<W: Write>(fixture: &Fixture, writer: &mut StatementWriter<W>) -> Result<EmitSummary> {
    let emitter = SeedEmitter::new();
    let statements = emitter
        .emit(fixture)
        .context("Failed to build insert statements")?;

    writer.write_statements(&statements)?;
    writer.flush()?;

    Ok(EmitSummary::from_statements(
        &statements,
        emitter.skipped_comments(),
    ))
}

/// Load the configured fixture and write its seed script to the configured file
pub fn run(config: &EmitConfig) -> Result<EmitSummary> {
    let fixture = config
        .load_fixture()
        .context("Failed to parse seed fixture")?;
    debug!(
        users = fixture.users.len(),
        workspaces = fixture.workspaces.len(),
        "fixture loaded"
    );

    let mut writer = StatementWriter::new_file_writer(&config.output_file)?;
    seed_sql(&fixture, &mut writer)
}

/// Render the whole seed script to a string
pub fn render_seed_sql(fixture: &Fixture) -> Result<String> {
    let mut buffer = Vec::new();
    {
        let mut writer = StatementWriter::new(&mut buffer);
        seed_sql(fixture, &mut writer)?;
    }
    String::from_utf8(buffer).context("Seed output is not valid UTF-8")
}
