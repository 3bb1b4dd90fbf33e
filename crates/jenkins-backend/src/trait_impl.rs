//! Implementation of AccessSource for JenkinsClient

use crate::client::JenkinsClient;
use crate::convert::{convert_permissions, convert_roles, convert_users};
use access_core::{AccessError, AccessSource, Permission, Result, RoleMembers, RoleScope, User};

impl AccessSource for JenkinsClient {
    fn list_users(&self) -> Result<Vec<User>> {
        self.get_users()
            .map(convert_users)
            .map_err(AccessError::from)
    }

    fn list_role_members(&self, scope: RoleScope) -> Result<Vec<RoleMembers>> {
        self.get_all_roles(scope)
            .map(convert_roles)
            .map_err(AccessError::from)
    }

    fn get_role_permissions(
        &self,
        scope: RoleScope,
        role_name: &str,
    ) -> Result<Vec<Permission>> {
        self.get_role(scope, role_name)
            .map(convert_permissions)
            .map_err(AccessError::from)
    }
}
