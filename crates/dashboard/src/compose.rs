use helix_models::{Identity, Module, ModuleCategory};
use helix_policy::visible_catalog;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Implicit entries: always rendered first, never removable, never listed
/// in the customizer.
pub const MODULE_DASHBOARD: &str = "dashboard";
pub const MODULE_MY_PROFILE: &str = "my_profile";

pub fn is_implicit(id: &str) -> bool {
    id == MODULE_DASHBOARD || id == MODULE_MY_PROFILE
}

/// One entry of the final render sequence.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComposedModule {
    pub id: String,
    pub name: String,
    pub category: ModuleCategory,

    /// Opaque component reference for the rendering layer
    pub component: String,

    /// Implicit entries render but are hidden from the customizer
    pub implicit: bool,
}

impl ComposedModule {
    fn from_catalog(module: &Module, implicit: bool) -> Self {
        Self {
            id: module.id.clone(),
            name: module.name.clone(),
            category: module.category,
            component: module.component.clone(),
            implicit,
        }
    }

    /// Implicit entries render even when their catalog row is missing.
    fn implicit_fallback(id: &str) -> Self {
        let name = match id {
            MODULE_DASHBOARD => "Dashboard",
            MODULE_MY_PROFILE => "My Profile",
            other => other,
        };
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category: ModuleCategory::Core,
            component: id.to_string(),
            implicit: true,
        }
    }
}

/// Merge catalog, access policy, and stored preference into the final
/// ordered module sequence.
///
/// Pure and idempotent; never fails. Dangling ids, invisible modules, and
/// membership/order desync are reconciled silently:
/// 1. the catalog is filtered to what the identity may see,
/// 2. `module_order` is filtered to visible ids, user order preserved,
/// 3. visible members missing from the order are appended in catalog
///    (display_order, name) order,
/// 4. the implicit `dashboard` / `my_profile` pair is prepended,
/// 5. admin-category modules are dropped — they live on the admin
///    navigation surface, not the user dashboard.
pub fn compose(
    identity: &Identity,
    catalog: &[Module],
    modules: &[String],
    module_order: &[String],
) -> Vec<ComposedModule> {
    let by_id: HashMap<&str, &Module> = visible_catalog(identity, catalog)
        .into_iter()
        .map(|m| (m.id.as_str(), m))
        .collect();

    let eligible = |m: &Module| !is_implicit(&m.id) && m.category != ModuleCategory::Admin;

    let mut seen: HashSet<&str> = HashSet::new();
    let mut ordered: Vec<&Module> = Vec::new();

    for id in module_order {
        if let Some(&module) = by_id.get(id.as_str()) {
            if eligible(module) && seen.insert(module.id.as_str()) {
                ordered.push(module);
            }
        }
    }

    let mut stragglers: Vec<&Module> = modules
        .iter()
        .filter_map(|id| by_id.get(id.as_str()).copied())
        .filter(|m| eligible(m) && !seen.contains(m.id.as_str()))
        .collect();
    stragglers.sort_by(|a, b| {
        a.display_order
            .cmp(&b.display_order)
            .then_with(|| a.name.cmp(&b.name))
    });

    for module in stragglers {
        if seen.insert(module.id.as_str()) {
            ordered.push(module);
        }
    }

    let mut result = Vec::with_capacity(ordered.len() + 2);
    for id in [MODULE_DASHBOARD, MODULE_MY_PROFILE] {
        match catalog.iter().find(|m| m.id == id) {
            Some(module) => result.push(ComposedModule::from_catalog(module, true)),
            None => result.push(ComposedModule::implicit_fallback(id)),
        }
    }
    result.extend(
        ordered
            .into_iter()
            .map(|m| ComposedModule::from_catalog(m, false)),
    );

    result
}

/// Modules the identity could still add in the customizer: visible, not
/// already selected, not implicit, not admin-surface. Catalog order is
/// preserved.
pub fn available_modules<'a>(
    identity: &Identity,
    catalog: &'a [Module],
    modules: &[String],
    module_order: &[String],
) -> Vec<&'a Module> {
    let present: HashSet<&str> = modules
        .iter()
        .chain(module_order.iter())
        .map(String::as_str)
        .collect();

    visible_catalog(identity, catalog)
        .into_iter()
        .filter(|m| {
            !is_implicit(&m.id)
                && m.category != ModuleCategory::Admin
                && !present.contains(m.id.as_str())
        })
        .collect()
}
