use helix_models::{AccountTier, Identity};
use serde::{Deserialize, Serialize};

/// Where advertisement slots may be shown for a caller.
///
/// Orthogonal to module visibility: it gates the ads/announcements surface
/// using the same identity inputs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AdPolicy {
    None,
    BlogOnly,
    All,
}

/// (role, tier) lookup for the ad surface.
///
/// Admins and free-tier accounts see ads everywhere; academic accounts see
/// sponsored content only on the blog; paid and enterprise see none.
pub fn ad_policy(identity: &Identity) -> AdPolicy {
    if identity.is_admin {
        return AdPolicy::All;
    }

    match identity.tier {
        AccountTier::Free => AdPolicy::All,
        AccountTier::Academic => AdPolicy::BlogOnly,
        AccountTier::Paid | AccountTier::Enterprise => AdPolicy::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn identity(tier: AccountTier, is_admin: bool) -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            email: "user@example.com".to_string(),
            role: None,
            tier,
            is_admin,
        }
    }

    #[test]
    fn test_admin_sees_all_ads_on_any_tier() {
        assert_eq!(ad_policy(&identity(AccountTier::Enterprise, true)), AdPolicy::All);
    }

    #[test]
    fn test_free_tier_sees_all_ads() {
        assert_eq!(ad_policy(&identity(AccountTier::Free, false)), AdPolicy::All);
    }

    #[test]
    fn test_paid_tiers_see_none() {
        assert_eq!(ad_policy(&identity(AccountTier::Paid, false)), AdPolicy::None);
        assert_eq!(ad_policy(&identity(AccountTier::Enterprise, false)), AdPolicy::None);
    }

    #[test]
    fn test_academic_sees_blog_only() {
        assert_eq!(ad_policy(&identity(AccountTier::Academic, false)), AdPolicy::BlogOnly);
    }

    #[test]
    fn test_serialized_form_is_kebab_case() {
        let s = serde_json::to_string(&AdPolicy::BlogOnly).unwrap();
        assert_eq!(s, "\"blog-only\"");
    }
}
