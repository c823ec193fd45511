use crate::error::SeedResult;
use crate::fixture::{
    Book, BookMember, Comment, Fixture, LaunchPlan, PublishingStage, Royalty, Task, User,
    Workspace, WorkspaceMember,
};
use crate::sql::{InsertStatement, SqlValue, Table};
use std::cell::Cell;
use tracing::{debug, trace};

/// Walks a fixture and produces one `INSERT` per record, parents before children
pub struct SeedEmitter {
    skipped_comments: Cell<usize>,
}

impl Default for SeedEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedEmitter {
    pub fn new() -> Self {
        SeedEmitter {
            skipped_comments: Cell::new(0),
        }
    }

    /// Emit statements for the whole fixture.
    ///
    /// Order: all users, then per workspace its row, its members, and for each
    /// book the book row, book members, publishing stages, tasks (each followed
    /// by its comments), royalties, and launch plans.
    pub fn emit(&self, fixture: &Fixture) -> SeedResult<Vec<InsertStatement>> {
        let mut statements = Vec::new();

        for user in &fixture.users {
            statements.push(user_row(user)?);
        }

        for workspace in &fixture.workspaces {
            self.emit_workspace(workspace, &mut statements)?;
        }

        Ok(statements)
    }

    /// Comments dropped so far by this emitter
    pub fn skipped_comments(&self) -> usize {
        self.skipped_comments.get()
    }

    fn emit_workspace(
        &self,
        workspace: &Workspace,
        statements: &mut Vec<InsertStatement>,
    ) -> SeedResult<()> {
        trace!(workspace = ?workspace.id, "emitting workspace");
        statements.push(workspace_row(workspace)?);

        for member in &workspace.members {
            statements.push(workspace_member_row(member)?);
        }

        for book in &workspace.books {
            self.emit_book(book, statements)?;
        }

        Ok(())
    }

    fn emit_book(&self, book: &Book, statements: &mut Vec<InsertStatement>) -> SeedResult<()> {
        trace!(book = ?book.id, "emitting book");
        statements.push(book_row(book)?);

        for member in &book.members {
            statements.push(book_member_row(member)?);
        }

        for stage in &book.publishing_stages {
            statements.push(publishing_stage_row(stage, book)?);
        }

        for task in &book.tasks {
            statements.push(task_row(task)?);
            for comment in &task.comments {
                self.emit_comment(comment, task, statements)?;
            }
        }

        for royalty in &book.royalties {
            statements.push(royalty_row(royalty, book)?);
        }

        for plan in &book.launch_plans {
            statements.push(launch_plan_row(plan, book)?);
        }

        Ok(())
    }

    fn emit_comment(
        &self,
        comment: &Comment,
        task: &Task,
        statements: &mut Vec<InsertStatement>,
    ) -> SeedResult<()> {
        if !comment.is_complete() {
            debug!(comment = ?comment.id, task = ?task.id, "skipping comment missing user, content, or timestamp");
            self.skipped_comments.set(self.skipped_comments.get() + 1);
            return Ok(());
        }

        statements.push(InsertStatement::new(
            Table::Comments,
            vec![
                text(&comment.id),
                text(&task.id),
                text(&comment.user_id),
                text(&comment.content),
                timestamp(&comment.created_at),
                timestamp(&comment.updated_at),
            ],
        )?);
        Ok(())
    }
}

fn text(value: &Option<String>) -> SqlValue {
    SqlValue::text(value.as_deref())
}

fn timestamp(value: &Option<String>) -> SqlValue {
    SqlValue::timestamp(value.as_deref())
}

fn user_row(user: &User) -> SeedResult<InsertStatement> {
    InsertStatement::new(
        Table::Users,
        vec![
            text(&user.id),
            text(&user.name),
            text(&user.email),
            text(&user.image),
            timestamp(&user.created_at),
            timestamp(&user.updated_at),
        ],
    )
}

fn workspace_row(workspace: &Workspace) -> SeedResult<InsertStatement> {
    InsertStatement::new(
        Table::Workspaces,
        vec![
            text(&workspace.id),
            text(&workspace.name),
            text(&workspace.slug),
            text(&workspace.description),
            SqlValue::jsonb(&workspace.settings)?,
            text(&workspace.owner_id),
            text(&workspace.image_url),
            timestamp(&workspace.created_at),
            timestamp(&workspace.updated_at),
        ],
    )
}

/// Membership rows borrow their timestamps from the embedded user record
fn workspace_member_row(member: &WorkspaceMember) -> SeedResult<InsertStatement> {
    InsertStatement::new(
        Table::WorkspaceMembers,
        vec![
            text(&member.id),
            text(&member.user_id),
            text(&member.workspace_id),
            text(&member.role),
            text(&member.message),
            timestamp(&member.user.created_at),
            timestamp(&member.user.updated_at),
        ],
    )
}

fn book_row(book: &Book) -> SeedResult<InsertStatement> {
    InsertStatement::new(
        Table::Books,
        vec![
            text(&book.id),
            text(&book.workspace_id),
            text(&book.name),
            text(&book.description),
            text(&book.priority),
            text(&book.status),
            text(&book.kind),
            timestamp(&book.start_date),
            timestamp(&book.end_date),
            text(&book.team_lead),
            SqlValue::number(&book.progress),
            timestamp(&book.created_at),
            timestamp(&book.updated_at),
        ],
    )
}

fn book_member_row(member: &BookMember) -> SeedResult<InsertStatement> {
    InsertStatement::new(
        Table::BookMembers,
        vec![
            text(&member.id),
            text(&member.user_id),
            text(&member.book_id),
            timestamp(&member.user.created_at),
            timestamp(&member.user.updated_at),
        ],
    )
}

// Stages, royalties, and launch plans carry no timestamps of their own;
// they take the enclosing book's.

fn publishing_stage_row(stage: &PublishingStage, book: &Book) -> SeedResult<InsertStatement> {
    InsertStatement::new(
        Table::PublishingStages,
        vec![
            text(&stage.id),
            text(&stage.author_book_id),
            text(&stage.name),
            text(&stage.description),
            SqlValue::number(&stage.order),
            timestamp(&book.created_at),
            timestamp(&book.updated_at),
        ],
    )
}

fn task_row(task: &Task) -> SeedResult<InsertStatement> {
    InsertStatement::new(
        Table::Tasks,
        vec![
            text(&task.id),
            text(&task.book_id),
            text(&task.publishing_stage_id),
            text(&task.title),
            text(&task.description),
            text(&task.status),
            text(&task.kind),
            text(&task.priority),
            text(&task.assignee_id),
            timestamp(&task.due_date),
            timestamp(&task.created_at),
            timestamp(&task.updated_at),
        ],
    )
}

fn royalty_row(royalty: &Royalty, book: &Book) -> SeedResult<InsertStatement> {
    InsertStatement::new(
        Table::Royalties,
        vec![
            text(&royalty.id),
            text(&royalty.author_book_id),
            SqlValue::number(&royalty.share_percentage),
            SqlValue::number(&royalty.earnings),
            timestamp(&book.created_at),
            timestamp(&book.updated_at),
        ],
    )
}

fn launch_plan_row(plan: &LaunchPlan, book: &Book) -> SeedResult<InsertStatement> {
    InsertStatement::new(
        Table::LaunchPlans,
        vec![
            text(&plan.id),
            text(&plan.author_book_id),
            timestamp(&plan.launch_date),
            text(&plan.status),
            SqlValue::number(&plan.marketing_budget),
            SqlValue::text_array(plan.promotion_channels.as_deref()),
            text(&plan.notes),
            timestamp(&book.created_at),
            timestamp(&book.updated_at),
        ],
    )
}
