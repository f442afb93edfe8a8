use serde::Serialize;
use std::collections::HashMap;

/// Renderable unit for a resolved module id.
///
/// The registry never fails a lookup: unknown ids bind to a labeled
/// placeholder so a stale catalog row degrades to a visible marker instead
/// of a crash.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComponentBinding {
    Component { name: String },
    Placeholder { module_id: String },
}

/// Legacy id aliases, resolved in one normalization pass before lookup.
pub fn normalize_module_id(id: &str) -> &str {
    match id {
        "home" => super::MODULE_DASHBOARD,
        "profile" => super::MODULE_MY_PROFILE,
        "trials" => "clinical_trials",
        "ai-tools" | "aitools" => "ai_tools",
        "user_manager" => "users_manager",
        "ad_manager" => "ads_manager",
        other => other,
    }
}

/// Module id → component dispatch table, built once at startup.
pub struct ComponentRegistry {
    bindings: HashMap<String, String>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Registry preloaded with the platform's known module set.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (id, component) in [
            (super::MODULE_DASHBOARD, "DashboardHome"),
            (super::MODULE_MY_PROFILE, "MyProfile"),
            ("companies", "CompanyBrowser"),
            ("deals", "DealBrowser"),
            ("grants", "GrantBrowser"),
            ("investors", "InvestorDirectory"),
            ("clinical_trials", "ClinicalTrialBrowser"),
            ("ai_tools", "AiToolsPanel"),
            ("newsletter", "NewsletterCenter"),
            ("saved_searches", "SavedSearches"),
            ("users_manager", "UsersManager"),
            ("ads_manager", "AdsManager"),
            ("blog_manager", "BlogManager"),
        ] {
            registry.register(id, component);
        }
        registry
    }

    pub fn register(&mut self, id: &str, component: &str) {
        self.bindings.insert(id.to_string(), component.to_string());
    }

    pub fn resolve(&self, id: &str) -> ComponentBinding {
        let canonical = normalize_module_id(id);
        match self.bindings.get(canonical) {
            Some(component) => ComponentBinding::Component {
                name: component.clone(),
            },
            None => ComponentBinding::Placeholder {
                module_id: canonical.to_string(),
            },
        }
    }
}

impl Default for ComponentRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_id_resolves_to_component() {
        let registry = ComponentRegistry::with_defaults();

        assert_eq!(
            registry.resolve("deals"),
            ComponentBinding::Component {
                name: "DealBrowser".to_string()
            }
        );
    }

    #[test]
    fn test_aliases_normalize_before_lookup() {
        let registry = ComponentRegistry::with_defaults();

        assert_eq!(
            registry.resolve("trials"),
            ComponentBinding::Component {
                name: "ClinicalTrialBrowser".to_string()
            }
        );
        assert_eq!(
            registry.resolve("ai-tools"),
            registry.resolve("ai_tools")
        );
        assert_eq!(
            registry.resolve("user_manager"),
            registry.resolve("users_manager")
        );
    }

    #[test]
    fn test_unknown_id_binds_to_placeholder() {
        let registry = ComponentRegistry::with_defaults();

        assert_eq!(
            registry.resolve("ghost_module"),
            ComponentBinding::Placeholder {
                module_id: "ghost_module".to_string()
            }
        );
    }

    #[test]
    fn test_custom_registration_overrides_placeholder() {
        let mut registry = ComponentRegistry::with_defaults();
        registry.register("pipeline", "PipelineBoard");

        assert_eq!(
            registry.resolve("pipeline"),
            ComponentBinding::Component {
                name: "PipelineBoard".to_string()
            }
        );
    }
}
