use crate::module::AccountTier;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims as issued by the platform's session layer.
///
/// The payload carries several generations of role fields (`role`,
/// `user_type`, `app_roles`). Nothing outside this module should read them
/// directly; `Identity::from_claims` is the single reconciliation point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub sub: String, // User ID
    pub email: String,

    /// Legacy role string (admin, investor, analyst, ...)
    #[serde(default)]
    pub role: Option<String>,

    /// Older legacy field, superseded by `role`
    #[serde(default)]
    pub user_type: Option<String>,

    #[serde(default)]
    pub account_tier: Option<AccountTier>,

    #[serde(default)]
    pub is_admin: bool,

    /// Role-set, may include `super_admin`
    #[serde(default)]
    pub app_roles: Vec<String>,

    pub exp: i64, // Expiration time
    pub iat: i64, // Issued at
}

/// Resolved caller identity, normalized once at the access boundary.
///
/// Everything downstream (policy evaluator, composition engine, handlers)
/// consumes this value object and never re-derives admin/role/tier from raw
/// claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub email: String,

    /// Normalized role string; `role` wins over `user_type` when both exist
    pub role: Option<String>,

    pub tier: AccountTier,

    pub is_admin: bool,
}

impl Identity {
    /// Reconcile the historical claim fields into one identity.
    ///
    /// Admin precedence: explicit `is_admin` flag, then `app_roles`
    /// containing `super_admin`, then the legacy role string.
    pub fn from_claims(claims: &IdentityClaims) -> Result<Self, uuid::Error> {
        let user_id = Uuid::parse_str(&claims.sub)?;

        let role = claims
            .role
            .clone()
            .or_else(|| claims.user_type.clone());

        let is_admin = claims.is_admin
            || claims.app_roles.iter().any(|r| r == "super_admin")
            || role.as_deref() == Some("admin");

        Ok(Self {
            user_id,
            email: claims.email.clone(),
            role,
            tier: claims.account_tier.unwrap_or(AccountTier::Free),
            is_admin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> IdentityClaims {
        IdentityClaims {
            sub: Uuid::new_v4().to_string(),
            email: "analyst@example.com".to_string(),
            role: None,
            user_type: None,
            account_tier: None,
            is_admin: false,
            app_roles: vec![],
            exp: 0,
            iat: 0,
        }
    }

    #[test]
    fn test_admin_flag_wins() {
        let mut c = claims();
        c.is_admin = true;

        let identity = Identity::from_claims(&c).unwrap();
        assert!(identity.is_admin);
    }

    #[test]
    fn test_super_admin_role_set_confers_admin() {
        let mut c = claims();
        c.app_roles = vec!["editor".to_string(), "super_admin".to_string()];

        let identity = Identity::from_claims(&c).unwrap();
        assert!(identity.is_admin);
    }

    #[test]
    fn test_legacy_admin_role_string_confers_admin() {
        let mut c = claims();
        c.role = Some("admin".to_string());

        let identity = Identity::from_claims(&c).unwrap();
        assert!(identity.is_admin);
    }

    #[test]
    fn test_plain_user_is_not_admin() {
        let mut c = claims();
        c.role = Some("investor".to_string());
        c.app_roles = vec!["editor".to_string()];

        let identity = Identity::from_claims(&c).unwrap();
        assert!(!identity.is_admin);
        assert_eq!(identity.role.as_deref(), Some("investor"));
    }

    #[test]
    fn test_role_wins_over_user_type() {
        let mut c = claims();
        c.role = Some("investor".to_string());
        c.user_type = Some("academic".to_string());

        let identity = Identity::from_claims(&c).unwrap();
        assert_eq!(identity.role.as_deref(), Some("investor"));
    }

    #[test]
    fn test_user_type_consulted_when_role_absent() {
        let mut c = claims();
        c.user_type = Some("academic".to_string());

        let identity = Identity::from_claims(&c).unwrap();
        assert_eq!(identity.role.as_deref(), Some("academic"));
    }

    #[test]
    fn test_missing_tier_defaults_to_free() {
        let identity = Identity::from_claims(&claims()).unwrap();
        assert_eq!(identity.tier, AccountTier::Free);
    }

    #[test]
    fn test_invalid_sub_is_rejected() {
        let mut c = claims();
        c.sub = "not-a-uuid".to_string();

        assert!(Identity::from_claims(&c).is_err());
    }
}
