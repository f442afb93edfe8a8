use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Per-user module customization, in the legacy persisted shape.
///
/// `modules` (membership) and `module_order` (render order) are stored as
/// two independent JSONB fields and are allowed to desync; the composition
/// engine reconciles them at read time. Do not reason about ordering from
/// this struct directly — convert to a `ModuleSelection` first.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserModulePreference {
    pub user_id: Uuid,

    #[sqlx(json)]
    pub modules: Vec<String>,

    #[sqlx(json)]
    pub module_order: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
