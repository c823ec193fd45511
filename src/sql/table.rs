use std::fmt;

/// Column names PostgreSQL treats as keywords; these get double-quoted
const RESERVED_COLUMNS: &[&str] = &["order"];

/// Target tables, in the order the seed script first touches them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Users,
    Workspaces,
    WorkspaceMembers,
    Books,
    BookMembers,
    PublishingStages,
    Tasks,
    Comments,
    Royalties,
    LaunchPlans,
}

impl Table {
    pub const ALL: [Table; 10] = [
        Table::Users,
        Table::Workspaces,
        Table::WorkspaceMembers,
        Table::Books,
        Table::BookMembers,
        Table::PublishingStages,
        Table::Tasks,
        Table::Comments,
        Table::Royalties,
        Table::LaunchPlans,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::Workspaces => "workspaces",
            Table::WorkspaceMembers => "workspace_members",
            Table::Books => "books",
            Table::BookMembers => "book_members",
            Table::PublishingStages => "publishing_stages",
            Table::Tasks => "tasks",
            Table::Comments => "comments",
            Table::Royalties => "royalties",
            Table::LaunchPlans => "launch_plans",
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Table::Users => &["id", "name", "email", "image", "created_at", "updated_at"],
            Table::Workspaces => &[
                "id",
                "name",
                "slug",
                "description",
                "settings",
                "owner_id",
                "image_url",
                "created_at",
                "updated_at",
            ],
            Table::WorkspaceMembers => &[
                "id",
                "user_id",
                "workspace_id",
                "role",
                "message",
                "created_at",
                "updated_at",
            ],
            Table::Books => &[
                "id",
                "workspace_id",
                "name",
                "description",
                "priority",
                "status",
                "type",
                "start_date",
                "end_date",
                "team_lead",
                "progress",
                "created_at",
                "updated_at",
            ],
            Table::BookMembers => &["id", "user_id", "book_id", "created_at", "updated_at"],
            Table::PublishingStages => &[
                "id",
                "author_book_id",
                "name",
                "description",
                "order",
                "created_at",
                "updated_at",
            ],
            Table::Tasks => &[
                "id",
                "book_id",
                "publishing_stage_id",
                "title",
                "description",
                "status",
                "type",
                "priority",
                "assignee_id",
                "due_date",
                "created_at",
                "updated_at",
            ],
            Table::Comments => &["id", "task_id", "user_id", "content", "created_at", "updated_at"],
            Table::Royalties => &[
                "id",
                "author_book_id",
                "share_percentage",
                "earnings",
                "created_at",
                "updated_at",
            ],
            Table::LaunchPlans => &[
                "id",
                "author_book_id",
                "launch_date",
                "status",
                "marketing_budget",
                "promotion_channels",
                "notes",
                "created_at",
                "updated_at",
            ],
        }
    }

    /// Comma-separated column list with reserved names quoted
    pub fn column_list(self) -> String {
        self.columns()
            .iter()
            .map(|col| quote_identifier(col))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn quote_identifier(name: &str) -> String {
    if RESERVED_COLUMNS.contains(&name) {
        format!("\"{}\"", name)
    } else {
        name.to_string()
    }
}
