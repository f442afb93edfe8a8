use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Catalog entry for a dashboard module
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Module {
    /// Stable string key, unique across the catalog
    pub id: String,

    pub name: String,
    pub description: Option<String>,

    pub category: ModuleCategory,

    /// Minimum account tier required to see this module
    pub required_tier: AccountTier,

    /// Roles allowed to see this module; empty = any role
    #[sqlx(json)]
    pub required_roles: Vec<String>,

    pub is_enabled: bool,

    /// Core modules cannot be deleted or bulk-disabled by tenant admins
    pub is_core: bool,

    /// Catalog default ordering (ties broken by name)
    pub display_order: i32,

    /// Opaque component reference resolved by the rendering layer
    pub component: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Module category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
    /// Always-on platform modules
    Core,

    /// Read-only data browsing (companies, deals, grants, trials)
    Data,

    /// Interactive tools
    Tools,

    /// Charts and aggregate views
    Analytics,

    /// Admin-surface modules, never shown in the user customizer
    Admin,
}

impl std::fmt::Display for ModuleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModuleCategory::Core => write!(f, "core"),
            ModuleCategory::Data => write!(f, "data"),
            ModuleCategory::Tools => write!(f, "tools"),
            ModuleCategory::Analytics => write!(f, "analytics"),
            ModuleCategory::Admin => write!(f, "admin"),
        }
    }
}

// SQLx implementation for ModuleCategory
impl sqlx::Type<sqlx::Postgres> for ModuleCategory {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        sqlx::postgres::PgTypeInfo::with_name("TEXT")
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for ModuleCategory {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        match s.as_str() {
            "core" => Ok(ModuleCategory::Core),
            "data" => Ok(ModuleCategory::Data),
            "tools" => Ok(ModuleCategory::Tools),
            "analytics" => Ok(ModuleCategory::Analytics),
            "admin" => Ok(ModuleCategory::Admin),
            _ => Err(format!("Invalid module category: {}", s).into()),
        }
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for ModuleCategory {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, Box<dyn std::error::Error + Send + Sync>> {
        let s = self.to_string();
        <&str as sqlx::Encode<sqlx::Postgres>>::encode(&s.as_str(), buf)
    }
}

/// Account subscription tier
///
/// `free < paid`; `academic` and `enterprise` are independent top-tier
/// branches, not a linear extension of `paid`. The comparison table lives
/// in the policy evaluator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountTier {
    Free,
    Paid,
    Academic,
    Enterprise,
}

impl std::fmt::Display for AccountTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountTier::Free => write!(f, "free"),
            AccountTier::Paid => write!(f, "paid"),
            AccountTier::Academic => write!(f, "academic"),
            AccountTier::Enterprise => write!(f, "enterprise"),
        }
    }
}

// SQLx implementation for AccountTier
impl sqlx::Type<sqlx::Postgres> for AccountTier {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        sqlx::postgres::PgTypeInfo::with_name("TEXT")
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for AccountTier {
    fn decode(
        value: sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        match s.as_str() {
            "free" => Ok(AccountTier::Free),
            "paid" => Ok(AccountTier::Paid),
            "academic" => Ok(AccountTier::Academic),
            "enterprise" => Ok(AccountTier::Enterprise),
            _ => Err(format!("Invalid account tier: {}", s).into()),
        }
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for AccountTier {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, Box<dyn std::error::Error + Send + Sync>> {
        let s = self.to_string();
        <&str as sqlx::Encode<sqlx::Postgres>>::encode(&s.as_str(), buf)
    }
}

// Module id validation regex
lazy_static::lazy_static! {
    static ref MODULE_ID_REGEX: regex::Regex = regex::Regex::new(r"^[a-z0-9_]+$").unwrap();
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewModule {
    #[validate(regex(
        path = *MODULE_ID_REGEX,
        message = "module id must be lowercase letters, digits, and underscores"
    ))]
    pub id: String,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    pub description: Option<String>,

    pub category: ModuleCategory,

    pub required_tier: AccountTier,

    #[serde(default)]
    pub required_roles: Vec<String>,

    #[serde(default = "default_true")]
    pub is_enabled: bool,

    #[serde(default)]
    pub is_core: bool,

    #[serde(default)]
    pub display_order: i32,

    /// Defaults to the module id when omitted
    pub component: Option<String>,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateModule {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    pub description: Option<String>,

    pub category: Option<ModuleCategory>,

    pub required_tier: Option<AccountTier>,

    pub required_roles: Option<Vec<String>>,

    pub is_enabled: Option<bool>,

    pub display_order: Option<i32>,

    pub component: Option<String>,
}

/// Catalog listing filter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleFilter {
    /// Case-insensitive substring over name and description
    pub search: Option<String>,

    pub category: Option<ModuleCategory>,

    #[serde(default)]
    pub enabled_only: bool,
}

/// Bulk catalog action
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BulkAction {
    Enable,
    Disable,
    Delete,
}

/// Bulk action request: core modules are silently excluded from the
/// effective set; the response reports only the affected count.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkModuleAction {
    pub action: BulkAction,
    pub module_ids: Vec<String>,
}
