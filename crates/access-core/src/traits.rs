use crate::error::Result;
use crate::models::*;

/// Read-only view of a server's users and role-strategy configuration
///
/// Implemented by each server backend. The normalizer only talks to this trait,
/// so it can be driven by an in-memory source in tests.
pub trait AccessSource: Send + Sync {
    /// List every known user
    fn list_users(&self) -> Result<Vec<User>>;

    /// List the roles of one scope, each with the subjects granted to it
    fn list_role_members(&self, scope: RoleScope) -> Result<Vec<RoleMembers>>;

    /// Get the permission set of a single role
    fn get_role_permissions(&self, scope: RoleScope, role_name: &str) -> Result<Vec<Permission>>;
}
