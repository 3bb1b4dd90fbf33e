use serde::{Deserialize, Serialize};
use std::fmt;

/// Complete access-control snapshot written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportData {
    /// Date the snapshot was taken (YYYY-MM-DD)
    pub extract_date: String,
    /// Server base URL, as configured
    pub jenkins_url: String,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub global_roles: Vec<Role>,
    #[serde(default)]
    pub items_roles: Vec<Role>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slave_roles: Vec<Role>,
    #[serde(default)]
    pub membership: Vec<Membership>,
}

impl ExportData {
    pub fn new(jenkins_url: impl Into<String>, extract_date: impl Into<String>) -> Self {
        Self {
            extract_date: extract_date.into(),
            jenkins_url: jenkins_url.into(),
            users: Vec::new(),
            global_roles: Vec::new(),
            items_roles: Vec::new(),
            slave_roles: Vec::new(),
            membership: Vec::new(),
        }
    }

    /// Role list that holds the roles of the given scope
    pub fn roles(&self, scope: RoleScope) -> &[Role] {
        match scope {
            RoleScope::Global => &self.global_roles,
            RoleScope::Project => &self.items_roles,
            RoleScope::Agent => &self.slave_roles,
        }
    }

    pub fn roles_mut(&mut self, scope: RoleScope) -> &mut Vec<Role> {
        match scope {
            RoleScope::Global => &mut self.global_roles,
            RoleScope::Project => &mut self.items_roles,
            RoleScope::Agent => &mut self.slave_roles,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Internal user id on the server
    pub login: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,
}

/// A named capability. Serialized as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permission {
    pub name: String,
}

impl Permission {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl From<&str> for Permission {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Permission {
    fn from(name: String) -> Self {
        Self { name }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    /// Sorted ascending once resolved
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

impl Role {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            permissions: Vec::new(),
        }
    }
}

/// Subjects granted one role, tagged with the role's type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub role_name: String,
    pub role_type: RoleType,
    #[serde(default)]
    pub members: Vec<String>,
}

/// Tag written into `Membership::role_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleType {
    #[default]
    Global,
    Item,
    Agent,
}

impl RoleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Global => "global",
            RoleType::Item => "item",
            RoleType::Agent => "agent",
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Administrative partition of roles on the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleScope {
    /// Instance-wide roles
    Global,
    /// Per-job (item) roles
    Project,
    /// Per-node (agent) roles
    Agent,
}

impl RoleScope {
    /// Scopes in export order
    pub const ALL: [RoleScope; 3] = [RoleScope::Global, RoleScope::Project, RoleScope::Agent];

    /// Scope name understood by the role-strategy endpoints
    pub fn api_name(&self) -> &'static str {
        match self {
            RoleScope::Global => "globalRoles",
            RoleScope::Project => "projectRoles",
            RoleScope::Agent => "slaveRoles",
        }
    }

    /// Membership tag for this scope. Agent roles take `agent_tag`.
    pub fn role_type(&self, agent_tag: RoleType) -> RoleType {
        match self {
            RoleScope::Global => RoleType::Global,
            RoleScope::Project => RoleType::Item,
            RoleScope::Agent => agent_tag,
        }
    }
}

impl fmt::Display for RoleScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}

/// One role with the subjects it is granted to, as listed by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleMembers {
    pub name: String,
    pub members: Vec<String>,
}
