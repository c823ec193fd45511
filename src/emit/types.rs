use crate::error::SeedResult;
use crate::fixture::{Fixture, EMBEDDED_FIXTURE};
use crate::sql::{InsertStatement, Table};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

/// Default output file, written to the current directory
pub const DEFAULT_OUTPUT_FILE: &str = "insert_dummy_data.sql";

/// Settings for a seed run. Fixed at build time; nothing reads flags or env
#[derive(Debug, Clone)]
pub struct EmitConfig {
    /// Where the SQL file is written
    pub output_file: PathBuf,

    /// Module text holding the `dummyUsers` and `dummyWorkspaces` declarations
    pub fixture_source: &'static str,
}

impl Default for EmitConfig {
    fn default() -> Self {
        EmitConfig {
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            fixture_source: EMBEDDED_FIXTURE,
        }
    }
}

impl EmitConfig {
    pub fn load_fixture(&self) -> SeedResult<Fixture> {
        Fixture::from_module_source(self.fixture_source)
    }
}

/// Row counts per table for one emission
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmitSummary {
    pub per_table: BTreeMap<Table, usize>,
    /// Comments dropped by the presence check
    pub skipped_comments: usize,
}

impl EmitSummary {
    pub fn from_statements(statements: &[InsertStatement], skipped_comments: usize) -> Self {
        let mut per_table = BTreeMap::new();
        for statement in statements {
            *per_table.entry(statement.table).or_insert(0) += 1;
        }
        EmitSummary {
            per_table,
            skipped_comments,
        }
    }

    pub fn count(&self, table: Table) -> usize {
        self.per_table.get(&table).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.per_table.values().sum()
    }

    pub fn log(&self) {
        for (table, rows) in &self.per_table {
            info!(table = table.name(), rows, "emitted rows");
        }
        if self.skipped_comments > 0 {
            info!(skipped = self.skipped_comments, "skipped incomplete comments");
        }
        info!(total = self.total(), "emission complete");
    }
}
