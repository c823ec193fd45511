use crate::error::{SeedError, SeedResult};
use crate::sql::literal::SqlValue;
use crate::sql::table::Table;
use std::fmt;

/// One single-row `INSERT INTO ... VALUES (...);`
#[derive(Debug, Clone, PartialEq)]
pub struct InsertStatement {
    pub table: Table,
    pub values: Vec<SqlValue>,
}

impl InsertStatement {
    /// Values must line up one-to-one with `table.columns()`
    pub fn new(table: Table, values: Vec<SqlValue>) -> SeedResult<Self> {
        let expected = table.columns().len();
        if values.len() != expected {
            return Err(SeedError::ColumnMismatch {
                table: table.name(),
                expected,
                actual: values.len(),
            });
        }
        Ok(InsertStatement { table, values })
    }

    /// Look up the value bound to a column
    pub fn value(&self, column: &str) -> Option<&SqlValue> {
        self.table
            .columns()
            .iter()
            .position(|c| *c == column)
            .and_then(|idx| self.values.get(idx))
    }
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "INSERT INTO {} ({}) VALUES (",
            self.table.name(),
            self.table.column_list()
        )?;
        for (idx, value) in self.values.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str(");")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_user_row() {
        let stmt = InsertStatement::new(
            Table::Users,
            vec![
                SqlValue::text(Some("user_1")),
                SqlValue::text(Some("Alex Smith")),
                SqlValue::text(Some("alexsmith@example.com")),
                SqlValue::text(None),
                SqlValue::timestamp(Some("2025-10-06T11:04:03.485Z")),
                SqlValue::timestamp(Some("2025-10-06T11:04:03.485Z")),
            ],
        )
        .unwrap();

        assert_eq!(
            stmt.to_string(),
            "INSERT INTO users (id, name, email, image, created_at, updated_at) VALUES \
             ('user_1', 'Alex Smith', 'alexsmith@example.com', NULL, \
             '2025-10-06T11:04:03.485Z', '2025-10-06T11:04:03.485Z');"
        );
        assert_eq!(stmt.value("name"), Some(&SqlValue::Text("Alex Smith".into())));
        assert_eq!(stmt.value("missing"), None);
    }

    #[test]
    fn test_column_mismatch() {
        let err = InsertStatement::new(Table::BookMembers, vec![SqlValue::Null]).unwrap_err();
        match err {
            SeedError::ColumnMismatch {
                table,
                expected,
                actual,
            } => {
                assert_eq!(table, "book_members");
                assert_eq!(expected, 5);
                assert_eq!(actual, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
