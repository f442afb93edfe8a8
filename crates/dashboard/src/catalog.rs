use crate::error::{DashboardError, Result};
use helix_database::{Database, ModuleRepository};
use helix_models::{BulkAction, BulkModuleAction, Module, ModuleFilter, NewModule, UpdateModule};
use validator::Validate;

/// Admin-facing catalog operations: create/update/delete with core-module
/// protection, and bulk actions with silent core exclusion.
pub struct CatalogService {
    modules: ModuleRepository,
}

impl CatalogService {
    pub fn new(database: Database) -> Self {
        Self {
            modules: ModuleRepository::new(database.pool().clone()),
        }
    }

    pub async fn list(&self, filter: &ModuleFilter) -> Result<Vec<Module>> {
        Ok(self.modules.list(filter).await?)
    }

    pub async fn get(&self, id: &str) -> Result<Module> {
        Ok(self.modules.find_by_id(id).await?)
    }

    pub async fn create(&self, new_module: NewModule) -> Result<Module> {
        new_module.validate()?;

        if self.modules.find_optional(&new_module.id).await?.is_some() {
            return Err(DashboardError::DuplicateId(new_module.id));
        }

        let component = new_module
            .component
            .clone()
            .unwrap_or_else(|| new_module.id.clone());

        let module = self.modules.insert(&new_module, &component).await?;
        tracing::info!(module_id = %module.id, "Catalog module created");

        Ok(module)
    }

    pub async fn update(&self, id: &str, update: UpdateModule) -> Result<Module> {
        update.validate()?;
        Ok(self.modules.update(id, &update).await?)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let module = self.modules.find_by_id(id).await?;
        if module.is_core {
            return Err(DashboardError::CoreModuleProtected(module.id));
        }

        self.modules.delete(id).await?;
        tracing::info!(module_id = %id, "Catalog module deleted");

        Ok(())
    }

    /// Apply a bulk request. Core modules are silently excluded from the
    /// effective set; the affected count is the only signal of the
    /// exclusion.
    pub async fn bulk(&self, request: &BulkModuleAction) -> Result<u64> {
        let affected = match request.action {
            BulkAction::Enable => {
                self.modules
                    .bulk_set_enabled(&request.module_ids, true)
                    .await?
            }
            BulkAction::Disable => {
                self.modules
                    .bulk_set_enabled(&request.module_ids, false)
                    .await?
            }
            BulkAction::Delete => self.modules.bulk_delete(&request.module_ids).await?,
        };

        tracing::info!(action = ?request.action, affected, "Bulk catalog action applied");
        Ok(affected)
    }
}
