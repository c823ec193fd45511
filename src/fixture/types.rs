use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Key must be present, value may be `null`
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::deserialize(deserializer)
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "nullable")]
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub email: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub image: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    #[serde(deserialize_with = "nullable")]
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub slug: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
    /// Free-form settings document, stored as jsonb
    pub settings: Value,
    #[serde(deserialize_with = "nullable")]
    pub owner_id: Option<String>,
    #[serde(rename = "image_url", deserialize_with = "nullable")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub updated_at: Option<String>,
    pub members: Vec<WorkspaceMember>,
    #[serde(default)]
    pub books: Vec<Book>,
    /// Denormalized copy of the owning user; rows come from `owner_id`
    #[serde(default)]
    pub owner: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceMember {
    #[serde(deserialize_with = "nullable")]
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub user_id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub workspace_id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub message: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub role: Option<String>,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(deserialize_with = "nullable")]
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub priority: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub status: Option<String>,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: Option<String>,
    #[serde(rename = "start_date", deserialize_with = "nullable")]
    pub start_date: Option<String>,
    #[serde(rename = "end_date", deserialize_with = "nullable")]
    pub end_date: Option<String>,
    #[serde(rename = "team_lead", deserialize_with = "nullable")]
    pub team_lead: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub workspace_id: Option<String>,
    pub progress: Number,
    #[serde(deserialize_with = "nullable")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub members: Vec<BookMember>,
    #[serde(default)]
    pub publishing_stages: Vec<PublishingStage>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub royalties: Vec<Royalty>,
    #[serde(default)]
    pub launch_plans: Vec<LaunchPlan>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookMember {
    #[serde(deserialize_with = "nullable")]
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub user_id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub book_id: Option<String>,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishingStage {
    #[serde(deserialize_with = "nullable")]
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
    pub order: Number,
    #[serde(deserialize_with = "nullable")]
    pub author_book_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(deserialize_with = "nullable")]
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub book_id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub title: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub status: Option<String>,
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub priority: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub assignee_id: Option<String>,
    #[serde(rename = "due_date", deserialize_with = "nullable")]
    pub due_date: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub publishing_stage_id: Option<String>,
    #[serde(default)]
    pub assignee: Option<User>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Comments are loosely shaped; incomplete ones are skipped at emit time
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(deserialize_with = "nullable")]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Comment {
    /// True when user, content, and creation time are all present and non-empty
    pub fn is_complete(&self) -> bool {
        [&self.user_id, &self.content, &self.created_at]
            .iter()
            .all(|field| field.as_deref().is_some_and(|s| !s.is_empty()))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Royalty {
    #[serde(deserialize_with = "nullable")]
    pub id: Option<String>,
    pub share_percentage: Number,
    pub earnings: Number,
    #[serde(deserialize_with = "nullable")]
    pub author_book_id: Option<String>,
    #[serde(default)]
    pub book_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchPlan {
    #[serde(deserialize_with = "nullable")]
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub launch_date: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub status: Option<String>,
    pub marketing_budget: Number,
    #[serde(default)]
    pub promotion_channels: Option<Vec<Option<String>>>,
    #[serde(deserialize_with = "nullable")]
    pub notes: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub author_book_id: Option<String>,
}

/// The whole dataset: users plus workspaces with everything nested under them
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixture {
    pub users: Vec<User>,
    pub workspaces: Vec<Workspace>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nullable_field_must_be_present() {
        let missing = json!({
            "id": "user_1",
            "name": "Alex Smith",
            "email": "alexsmith@example.com",
            "image": null,
            "createdAt": "2025-10-06T11:04:03.485Z"
        });
        assert!(serde_json::from_value::<User>(missing).is_err());

        let present = json!({
            "id": "user_1",
            "name": "Alex Smith",
            "email": "alexsmith@example.com",
            "image": null,
            "createdAt": "2025-10-06T11:04:03.485Z",
            "updatedAt": "2025-10-06T11:04:03.485Z"
        });
        let user: User = serde_json::from_value(present).unwrap();
        assert_eq!(user.image, None);
        assert_eq!(user.name.as_deref(), Some("Alex Smith"));
    }

    #[test]
    fn test_book_collections_default_to_empty() {
        let book: Book = serde_json::from_value(json!({
            "id": "b1",
            "name": "LaunchPad CRM",
            "description": null,
            "priority": "HIGH",
            "status": "ACTIVE",
            "type": "HYBRID",
            "start_date": "2025-10-10T00:00:00.000Z",
            "end_date": null,
            "team_lead": "user_3",
            "workspaceId": "org_1",
            "progress": 65,
            "createdAt": "2025-10-13T08:01:35.491Z",
            "updatedAt": "2025-10-13T08:01:45.620Z"
        }))
        .unwrap();

        assert_eq!(book.kind.as_deref(), Some("HYBRID"));
        assert!(book.members.is_empty());
        assert!(book.tasks.is_empty());
        assert!(book.launch_plans.is_empty());
        assert_eq!(book.progress.to_string(), "65");
    }

    #[test]
    fn test_comment_completeness() {
        let full = Comment {
            id: Some("c1".into()),
            user_id: Some("user_1".into()),
            content: Some("Looks good".into()),
            created_at: Some("2025-10-13T08:04:04.084Z".into()),
            updated_at: None,
        };
        assert!(full.is_complete());

        let blank_content = Comment {
            content: Some(String::new()),
            ..full.clone()
        };
        assert!(!blank_content.is_complete());

        let no_user = Comment {
            user_id: None,
            ..full
        };
        assert!(!no_user.is_complete());
    }
}
