use helix_models::{AccountTier, Identity, Module};

/// Tier comparison table.
///
/// `free < paid`; `academic` and `enterprise` both satisfy `paid`
/// requirements but are independent branches — neither satisfies a module
/// that requires the other.
pub fn tier_satisfies(have: AccountTier, required: AccountTier) -> bool {
    match required {
        AccountTier::Free => true,
        AccountTier::Paid => matches!(
            have,
            AccountTier::Paid | AccountTier::Academic | AccountTier::Enterprise
        ),
        AccountTier::Academic => have == AccountTier::Academic,
        AccountTier::Enterprise => have == AccountTier::Enterprise,
    }
}

/// Whether a catalog module is visible to the given identity.
///
/// Disabled modules are invisible to everyone. Admins bypass the tier
/// check only; a non-empty role restriction applies regardless of tier or
/// admin status. Modules failing the check are excluded from listings
/// entirely, never shown as locked.
pub fn module_visible(identity: &Identity, module: &Module) -> bool {
    if !module.is_enabled {
        return false;
    }

    if !identity.is_admin && !tier_satisfies(identity.tier, module.required_tier) {
        return false;
    }

    if !module.required_roles.is_empty() {
        match identity.role.as_deref() {
            Some(role) => module.required_roles.iter().any(|r| r == role),
            None => false,
        }
    } else {
        true
    }
}

/// Filter a catalog down to the modules visible to the identity,
/// preserving catalog order.
pub fn visible_catalog<'a>(identity: &Identity, catalog: &'a [Module]) -> Vec<&'a Module> {
    catalog
        .iter()
        .filter(|m| module_visible(identity, m))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use helix_models::ModuleCategory;
    use uuid::Uuid;

    fn identity(tier: AccountTier) -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            role: Some("investor".to_string()),
            tier,
            is_admin: false,
        }
    }

    fn module(id: &str, required_tier: AccountTier) -> Module {
        Module {
            id: id.to_string(),
            name: id.to_string(),
            description: None,
            category: ModuleCategory::Data,
            required_tier,
            required_roles: vec![],
            is_enabled: true,
            is_core: false,
            display_order: 0,
            component: id.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_free_tier_satisfies_only_free() {
        assert!(tier_satisfies(AccountTier::Free, AccountTier::Free));
        assert!(!tier_satisfies(AccountTier::Free, AccountTier::Paid));
        assert!(!tier_satisfies(AccountTier::Free, AccountTier::Academic));
        assert!(!tier_satisfies(AccountTier::Free, AccountTier::Enterprise));
    }

    #[test]
    fn test_top_branches_satisfy_paid_but_not_each_other() {
        assert!(tier_satisfies(AccountTier::Academic, AccountTier::Paid));
        assert!(tier_satisfies(AccountTier::Enterprise, AccountTier::Paid));
        assert!(!tier_satisfies(AccountTier::Academic, AccountTier::Enterprise));
        assert!(!tier_satisfies(AccountTier::Enterprise, AccountTier::Academic));
    }

    #[test]
    fn test_disabled_module_invisible_even_to_admin() {
        let mut admin = identity(AccountTier::Enterprise);
        admin.is_admin = true;

        let mut m = module("deals", AccountTier::Free);
        m.is_enabled = false;

        assert!(!module_visible(&admin, &m));
    }

    #[test]
    fn test_admin_bypasses_tier_check() {
        let mut admin = identity(AccountTier::Free);
        admin.is_admin = true;

        let m = module("ai_tools", AccountTier::Enterprise);
        assert!(module_visible(&admin, &m));
    }

    #[test]
    fn test_role_restriction_applies_regardless_of_tier() {
        let mut m = module("grants", AccountTier::Free);
        m.required_roles = vec!["academic".to_string()];

        let user = identity(AccountTier::Enterprise);
        assert!(!module_visible(&user, &m));

        let mut academic = identity(AccountTier::Free);
        academic.role = Some("academic".to_string());
        assert!(module_visible(&academic, &m));
    }

    #[test]
    fn test_role_restriction_fails_with_no_role() {
        let mut m = module("grants", AccountTier::Free);
        m.required_roles = vec!["academic".to_string()];

        let mut user = identity(AccountTier::Enterprise);
        user.role = None;
        assert!(!module_visible(&user, &m));
    }

    #[test]
    fn test_visible_catalog_preserves_order_and_filters() {
        let user = identity(AccountTier::Free);
        let catalog = vec![
            module("companies", AccountTier::Free),
            module("ai_tools", AccountTier::Paid),
            module("deals", AccountTier::Free),
        ];

        let visible = visible_catalog(&user, &catalog);
        let ids: Vec<&str> = visible.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["companies", "deals"]);
    }
}
