//! Wire models for the role-strategy plugin endpoints

use serde::Deserialize;
use std::collections::BTreeMap;

/// Subject a role is granted to
#[derive(Debug, Clone, Deserialize)]
pub struct RoleMember {
    pub sid: String,
}

/// `getAllRoles` response: role name -> members
pub type RolesResponse = BTreeMap<String, Vec<RoleMember>>;

/// `getRole` response. Only the keys of `permissionIds` matter.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolePermissionsResponse {
    #[serde(default)]
    pub permission_ids: BTreeMap<String, serde_json::Value>,
}
