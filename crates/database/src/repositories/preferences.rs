use crate::error::Result;
use helix_models::UserModulePreference;
use sqlx::PgPool;
use uuid::Uuid;

pub struct PreferenceRepository {
    pool: PgPool,
}

impl PreferenceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load a user's stored preference, if any. Absence means the user has
    /// never customized; the service layer substitutes the starter set.
    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserModulePreference>> {
        let preference = sqlx::query_as::<_, UserModulePreference>(
            "SELECT * FROM user_module_preferences WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(preference)
    }

    /// Persist the dual-field shape verbatim. Concurrent writers are
    /// last-write-wins at the row level.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        modules: &[String],
        module_order: &[String],
    ) -> Result<UserModulePreference> {
        let preference = sqlx::query_as::<_, UserModulePreference>(
            r#"
            INSERT INTO user_module_preferences (user_id, modules, module_order)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO UPDATE
            SET modules = EXCLUDED.modules,
                module_order = EXCLUDED.module_order,
                updated_at = NOW()
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(sqlx::types::Json(modules))
        .bind(sqlx::types::Json(module_order))
        .fetch_one(&self.pool)
        .await?;

        Ok(preference)
    }
}
