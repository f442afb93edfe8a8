use crate::error::{DatabaseError, Result};
use helix_models::{Module, ModuleFilter, NewModule, UpdateModule};
use sqlx::PgPool;

pub struct ModuleRepository {
    pool: PgPool,
}

impl ModuleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List catalog modules, ordered by (display_order, name)
    pub async fn list(&self, filter: &ModuleFilter) -> Result<Vec<Module>> {
        let mut query_builder =
            sqlx::QueryBuilder::new("SELECT * FROM dashboard_modules WHERE 1 = 1");

        if let Some(category) = filter.category {
            query_builder.push(" AND category = ");
            query_builder.push_bind(category);
        }

        if filter.enabled_only {
            query_builder.push(" AND is_enabled = true");
        }

        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", search);
            query_builder.push(" AND (name ILIKE ");
            query_builder.push_bind(pattern.clone());
            query_builder.push(" OR description ILIKE ");
            query_builder.push_bind(pattern);
            query_builder.push(")");
        }

        query_builder.push(" ORDER BY display_order ASC, name ASC");

        let modules = query_builder
            .build_query_as::<Module>()
            .fetch_all(&self.pool)
            .await?;

        Ok(modules)
    }

    /// Find a module by id
    pub async fn find_by_id(&self, id: &str) -> Result<Module> {
        self.find_optional(id)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Module", id))
    }

    /// Find a module by id, returning None when absent
    pub async fn find_optional(&self, id: &str) -> Result<Option<Module>> {
        let module = sqlx::query_as::<_, Module>("SELECT * FROM dashboard_modules WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(module)
    }

    /// Insert a new catalog module. The component reference default is
    /// resolved by the service layer.
    pub async fn insert(&self, new_module: &NewModule, component: &str) -> Result<Module> {
        let inserted = sqlx::query_as::<_, Module>(
            r#"
            INSERT INTO dashboard_modules
                (id, name, description, category, required_tier, required_roles,
                 is_enabled, is_core, display_order, component)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&new_module.id)
        .bind(&new_module.name)
        .bind(&new_module.description)
        .bind(new_module.category)
        .bind(new_module.required_tier)
        .bind(sqlx::types::Json(&new_module.required_roles))
        .bind(new_module.is_enabled)
        .bind(new_module.is_core)
        .bind(new_module.display_order)
        .bind(component)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }

    /// Partial update of a catalog module
    pub async fn update(&self, id: &str, update: &UpdateModule) -> Result<Module> {
        let mut query_builder =
            sqlx::QueryBuilder::new("UPDATE dashboard_modules SET updated_at = NOW()");

        let mut has_updates = false;

        if let Some(ref name) = update.name {
            query_builder.push(", name = ");
            query_builder.push_bind(name);
            has_updates = true;
        }

        if let Some(ref description) = update.description {
            query_builder.push(", description = ");
            query_builder.push_bind(description);
            has_updates = true;
        }

        if let Some(category) = update.category {
            query_builder.push(", category = ");
            query_builder.push_bind(category);
            has_updates = true;
        }

        if let Some(required_tier) = update.required_tier {
            query_builder.push(", required_tier = ");
            query_builder.push_bind(required_tier);
            has_updates = true;
        }

        if let Some(ref required_roles) = update.required_roles {
            query_builder.push(", required_roles = ");
            query_builder.push_bind(sqlx::types::Json(required_roles));
            has_updates = true;
        }

        if let Some(is_enabled) = update.is_enabled {
            query_builder.push(", is_enabled = ");
            query_builder.push_bind(is_enabled);
            has_updates = true;
        }

        if let Some(display_order) = update.display_order {
            query_builder.push(", display_order = ");
            query_builder.push_bind(display_order);
            has_updates = true;
        }

        if let Some(ref component) = update.component {
            query_builder.push(", component = ");
            query_builder.push_bind(component);
            has_updates = true;
        }

        if !has_updates {
            return self.find_by_id(id).await;
        }

        query_builder.push(" WHERE id = ");
        query_builder.push_bind(id);
        query_builder.push(" RETURNING *");

        let module = query_builder
            .build_query_as::<Module>()
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::not_found("Module", id))?;

        Ok(module)
    }

    /// Delete a catalog module. Core protection is enforced by the service
    /// layer before calling this.
    pub async fn delete(&self, id: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM dashboard_modules WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Set is_enabled on a set of modules. Core rows are excluded in SQL so
    /// they can never be toggled in bulk; the caller learns the exclusion
    /// only through the affected count.
    pub async fn bulk_set_enabled(&self, ids: &[String], enabled: bool) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE dashboard_modules
            SET is_enabled = $1, updated_at = NOW()
            WHERE id = ANY($2) AND is_core = false
            "#,
        )
        .bind(enabled)
        .bind(ids)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete a set of modules, excluding core rows
    pub async fn bulk_delete(&self, ids: &[String]) -> Result<u64> {
        let result =
            sqlx::query("DELETE FROM dashboard_modules WHERE id = ANY($1) AND is_core = false")
                .bind(ids)
                .execute(&self.pool)
                .await?;

        Ok(result.rows_affected())
    }
}
