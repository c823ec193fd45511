//! Locating and parsing the fixture's `export const` declarations
//!
//! The fixture is authored as a JavaScript module so the same text can be
//! dropped into a front-end codebase. Each declaration body is a plain JSON
//! array; everything around the arrays is ignored.

use crate::error::{SeedError, SeedResult};
use crate::fixture::types::{Fixture, User, Workspace};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;

/// The fixture compiled into the binary
pub const EMBEDDED_FIXTURE: &str = include_str!("../../fixtures/dummy_data.js");

pub const USERS_DECLARATION: &str = "dummyUsers";
pub const WORKSPACES_DECLARATION: &str = "dummyWorkspaces";

static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"export\s+const\s+([A-Za-z_$][A-Za-z0-9_$]*)\s*=\s*").unwrap());

/// One `export const <name> = ...` block, sliced out of the module text
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration<'a> {
    pub name: &'a str,
    pub body: &'a str,
}

/// Split module text into its declarations, in source order.
///
/// A body runs from the end of its `=` to the last `]` before the next
/// declaration (or before the end of the text for the final one).
pub fn declarations(source: &str) -> Vec<Declaration<'_>> {
    let heads: Vec<(usize, usize, &str)> = DECLARATION
        .captures_iter(source)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some((whole.start(), whole.end(), name.as_str()))
        })
        .collect();

    heads
        .iter()
        .enumerate()
        .map(|(idx, &(_, body_start, name))| {
            let region_end = heads
                .get(idx + 1)
                .map(|&(next_start, _, _)| next_start)
                .unwrap_or(source.len());
            let region = &source[body_start..region_end];
            let body = match region.rfind(']') {
                Some(close) => &region[..=close],
                None => region,
            };
            Declaration {
                name,
                body: body.trim(),
            }
        })
        .collect()
}

/// Find a declaration by name and deserialize its body
pub fn parse_declaration<T: DeserializeOwned>(source: &str, name: &str) -> SeedResult<T> {
    let declaration = declarations(source)
        .into_iter()
        .find(|d| d.name == name)
        .ok_or_else(|| SeedError::MissingDeclaration(name.to_string()))?;

    parse_json(declaration.body, name)
}

/// Parse a JSON document into typed records.
///
/// serde_json runs with `arbitrary_precision`, so every number keeps the
/// literal text it was written with.
pub fn parse_json<T: DeserializeOwned>(text: &str, source_name: &str) -> SeedResult<T> {
    serde_json::from_str(text).map_err(|e| SeedError::Parse {
        source_name: source_name.to_string(),
        message: e.to_string(),
    })
}

impl Fixture {
    /// Parse the fixture compiled into the binary
    pub fn embedded() -> SeedResult<Self> {
        Self::from_module_source(EMBEDDED_FIXTURE)
    }

    /// Parse module text holding `dummyUsers` and `dummyWorkspaces` declarations
    pub fn from_module_source(source: &str) -> SeedResult<Self> {
        let users: Vec<User> = parse_declaration(source, USERS_DECLARATION)?;
        let workspaces: Vec<Workspace> = parse_declaration(source, WORKSPACES_DECLARATION)?;
        Ok(Fixture { users, workspaces })
    }

    /// Parse a plain JSON document of the form `{"users": [...], "workspaces": [...]}`
    pub fn from_json(text: &str) -> SeedResult<Self> {
        parse_json(text, "fixture")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const MODULE: &str = r#"
export const dummyUsers = [
    { "id": "user_1", "name": "Alex", "email": "a@example.com", "image": null,
      "createdAt": "2025-10-06T11:04:03.485Z", "updatedAt": "2025-10-06T11:04:03.485Z" }
]

export const dummyWorkspaces = [
    { "id": "org_1", "name": "Corp", "slug": "corp", "description": null, "settings": {},
      "ownerId": "user_1", "image_url": "img", "createdAt": "2025-10-13T06:55:44.423Z",
      "updatedAt": "2025-10-13T07:17:36.890Z", "members": [] }
]
"#;

    #[test]
    fn test_declarations_are_sliced_in_order() {
        let decls = declarations(MODULE);
        assert_eq!(decls.len(), 2);
        assert_eq!(decls[0].name, "dummyUsers");
        assert_eq!(decls[1].name, "dummyWorkspaces");
        assert!(decls[0].body.starts_with('['));
        assert!(decls[0].body.ends_with(']'));
        assert!(!decls[0].body.contains("export"));
    }

    #[test]
    fn test_parse_declaration_body() {
        let users: Value = parse_declaration(MODULE, "dummyUsers").unwrap();
        assert_eq!(users[0]["id"], "user_1");
    }

    #[test]
    fn test_missing_declaration() {
        let err = parse_declaration::<Value>(MODULE, "dummyBooks").unwrap_err();
        assert!(matches!(err, SeedError::MissingDeclaration(ref name) if name == "dummyBooks"));
    }

    #[test]
    fn test_from_module_source() {
        let fixture = Fixture::from_module_source(MODULE).unwrap();
        assert_eq!(fixture.users.len(), 1);
        assert_eq!(fixture.workspaces.len(), 1);
        assert!(fixture.workspaces[0].books.is_empty());
        assert_eq!(fixture.workspaces[0].description, None);
    }

    #[test]
    fn test_from_json_document() {
        let fixture = Fixture::from_json(r#"{"users": [], "workspaces": []}"#).unwrap();
        assert!(fixture.users.is_empty());
        assert!(fixture.workspaces.is_empty());
    }

    #[test]
    fn test_malformed_body_reports_declaration() {
        let broken = "export const dummyUsers = [ { \"id\": ] \nexport const dummyWorkspaces = []";
        let err = Fixture::from_module_source(broken).unwrap_err();
        match err {
            SeedError::Parse { source_name, .. } => assert_eq!(source_name, "dummyUsers"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_embedded_fixture_parses() {
        let fixture = Fixture::embedded().unwrap();
        assert_eq!(fixture.users.len(), 3);
        assert_eq!(fixture.workspaces.len(), 2);
        assert_eq!(fixture.workspaces[0].books.len(), 2);
    }

    #[test]
    fn test_number_literals_survive_parsing() {
        let body = r#"[{"id": "roy_1", "sharePercentage": 50, "earnings": 100000000000000000000,
                        "authorBookId": "b1"}]"#;
        let royalties: Vec<crate::fixture::Royalty> = parse_json(body, "royalties").unwrap();
        assert_eq!(royalties[0].earnings.to_string(), "100000000000000000000");
        assert_eq!(royalties[0].share_percentage.to_string(), "50");
    }
}
