use crate::sql::statement::InsertStatement;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes statements one per line to a single output
pub struct StatementWriter<W: Write> {
    writer: W,
    written: usize,
}

impl StatementWriter<BufWriter<File>> {
    /// Create (or truncate) the output file
    pub fn new_file_writer<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(StatementWriter::new(BufWriter::new(file)))
    }
}

impl<W: Write> StatementWriter<W> {
    pub fn new(writer: W) -> Self {
        StatementWriter { writer, written: 0 }
    }

    pub fn write_statements(&mut self, statements: &[InsertStatement]) -> Result<()> {
        for statement in statements {
            writeln!(self.writer, "{}", statement).context("Failed to write statement")?;
            self.written += 1;
        }
        Ok(())
    }

    /// Number of statements written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("Failed to flush writer")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::{SqlValue, Table};
    use tempfile::TempDir;

    fn member_row() -> InsertStatement {
        InsertStatement::new(
            Table::BookMembers,
            vec![
                SqlValue::text(Some("m1")),
                SqlValue::text(Some("user_1")),
                SqlValue::text(Some("b1")),
                SqlValue::timestamp(None),
                SqlValue::timestamp(None),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_one_statement_per_line() {
        let mut buffer = Vec::new();
        let mut writer = StatementWriter::new(&mut buffer);

        let stmt = member_row();
        writer.write_statements(&[stmt.clone(), stmt]).unwrap();
        writer.flush().unwrap();
        assert_eq!(writer.written(), 2);

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(output.ends_with(");\n"));
        assert!(lines[0].starts_with("INSERT INTO book_members (id, user_id, book_id"));
    }

    #[test]
    fn test_file_writer_truncates_existing_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("insert_dummy_data.sql");
        std::fs::write(&path, "-- old seed\n-- more old seed\n").unwrap();

        let mut writer = StatementWriter::new_file_writer(&path).unwrap();
        writer.write_statements(&[member_row()]).unwrap();
        writer.flush().unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, format!("{}\n", member_row()));
    }

    #[test]
    fn test_file_writer_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("seed.sql");

        let err = StatementWriter::new_file_writer(&path).err().unwrap();
        assert!(err.to_string().contains("Failed to create output file"));
    }
}
