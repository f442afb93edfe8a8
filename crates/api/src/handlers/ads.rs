use axum::{extract::Extension, Json};
use helix_models::Identity;
use helix_policy::{ad_policy, AdPolicy};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AdPolicyResponse {
    pub policy: AdPolicy,
}

/// Ad surface decision for the caller
/// GET /api/ads/policy
pub async fn get_ad_policy(Extension(identity): Extension<Identity>) -> Json<AdPolicyResponse> {
    Json(AdPolicyResponse {
        policy: ad_policy(&identity),
    })
}
