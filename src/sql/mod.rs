//! SQL rendering - literals, target tables, and `INSERT` statements
//!
//! Output targets PostgreSQL: timestamps are passed as ISO-8601 text,
//! settings documents are cast to `jsonb`, and string lists become
//! `ARRAY[...]` literals.

pub mod literal;
pub mod statement;
pub mod table;
pub mod writer;

pub use literal::{escape_quotes, SqlValue};
pub use statement::InsertStatement;
pub use table::Table;
pub use writer::StatementWriter;
