use crate::compose::is_implicit;
use crate::error::{DashboardError, Result};
use crate::selection::ModuleSelection;
use helix_database::{Database, ModuleRepository, PreferenceRepository};
use helix_models::{AccountTier, Identity, UserModulePreference};

/// Tier-appropriate starter set used until the user first customizes.
/// The implicit `dashboard`/`my_profile` pair is never stored.
pub fn starter_modules(identity: &Identity) -> Vec<String> {
    let mut ids = vec!["companies", "deals"];
    match identity.tier {
        AccountTier::Free => {}
        AccountTier::Paid => ids.push("investors"),
        AccountTier::Academic => {
            ids.push("investors");
            ids.push("grants");
        }
        AccountTier::Enterprise => {
            ids.push("investors");
            ids.push("ai_tools");
        }
    }
    ids.into_iter().map(String::from).collect()
}

/// Per-user module customization: lazy defaulting, verbatim save, and the
/// add/remove/reorder operations with protection rules.
pub struct PreferenceService {
    preferences: PreferenceRepository,
    modules: ModuleRepository,
}

impl PreferenceService {
    pub fn new(database: Database) -> Self {
        Self {
            preferences: PreferenceRepository::new(database.pool().clone()),
            modules: ModuleRepository::new(database.pool().clone()),
        }
    }

    /// Stored preference in the legacy `(modules, module_order)` shape, or
    /// the starter set when the user has never customized.
    pub async fn get(&self, identity: &Identity) -> Result<(Vec<String>, Vec<String>)> {
        match self.preferences.find_by_user(identity.user_id).await? {
            Some(preference) => Ok((preference.modules, preference.module_order)),
            None => {
                let starter = starter_modules(identity);
                Ok((starter.clone(), starter))
            }
        }
    }

    /// Persist the dual shape verbatim. No permutation validation happens
    /// here; the composition engine reconciles at read time.
    pub async fn save(
        &self,
        identity: &Identity,
        modules: Vec<String>,
        module_order: Vec<String>,
    ) -> Result<UserModulePreference> {
        Ok(self
            .preferences
            .upsert(identity.user_id, &modules, &module_order)
            .await?)
    }

    pub async fn add_module(
        &self,
        identity: &Identity,
        module_id: &str,
    ) -> Result<UserModulePreference> {
        // Unknown ids are rejected up front; visibility churn is handled
        // at compose time instead.
        self.modules.find_by_id(module_id).await?;

        let (modules, module_order) = self.get(identity).await?;
        let mut selection = ModuleSelection::from_stored(&modules, &module_order);

        if !selection.add(module_id) {
            return Err(DashboardError::AlreadyPresent(module_id.to_string()));
        }

        let (modules, module_order) = selection.to_stored();
        Ok(self
            .preferences
            .upsert(identity.user_id, &modules, &module_order)
            .await?)
    }

    pub async fn remove_module(
        &self,
        identity: &Identity,
        module_id: &str,
    ) -> Result<UserModulePreference> {
        if is_implicit(module_id) {
            return Err(DashboardError::ProtectedModule(module_id.to_string()));
        }

        if let Some(module) = self.modules.find_optional(module_id).await? {
            if module.is_core {
                return Err(DashboardError::ProtectedModule(module_id.to_string()));
            }
        }

        let (modules, module_order) = self.get(identity).await?;
        let mut selection = ModuleSelection::from_stored(&modules, &module_order);

        if !selection.remove(module_id) {
            return Err(DashboardError::NotFound(format!(
                "Module {} is not on the dashboard",
                module_id
            )));
        }

        let (modules, module_order) = selection.to_stored();
        Ok(self
            .preferences
            .upsert(identity.user_id, &modules, &module_order)
            .await?)
    }

    /// Replace the stored order directly — no permutation check, matching
    /// the legacy contract; membership is left as-is.
    pub async fn reorder(
        &self,
        identity: &Identity,
        new_order: Vec<String>,
    ) -> Result<UserModulePreference> {
        let (modules, _) = self.get(identity).await?;
        Ok(self
            .preferences
            .upsert(identity.user_id, &modules, &new_order)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn identity(tier: AccountTier) -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            role: None,
            tier,
            is_admin: false,
        }
    }

    #[test]
    fn test_free_starter_set() {
        assert_eq!(
            starter_modules(&identity(AccountTier::Free)),
            vec!["companies", "deals"]
        );
    }

    #[test]
    fn test_paid_starter_set_adds_investors() {
        assert_eq!(
            starter_modules(&identity(AccountTier::Paid)),
            vec!["companies", "deals", "investors"]
        );
    }

    #[test]
    fn test_academic_starter_set_adds_grants() {
        assert_eq!(
            starter_modules(&identity(AccountTier::Academic)),
            vec!["companies", "deals", "investors", "grants"]
        );
    }

    #[test]
    fn test_enterprise_starter_set_adds_ai_tools() {
        assert_eq!(
            starter_modules(&identity(AccountTier::Enterprise)),
            vec!["companies", "deals", "investors", "ai_tools"]
        );
    }

    #[test]
    fn test_starter_sets_never_contain_the_implicit_pair() {
        for tier in [
            AccountTier::Free,
            AccountTier::Paid,
            AccountTier::Academic,
            AccountTier::Enterprise,
        ] {
            let starter = starter_modules(&identity(tier));
            assert!(!starter.iter().any(|id| is_implicit(id)));
        }
    }
}
