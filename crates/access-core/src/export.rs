//! Builds an [`ExportData`] snapshot out of an [`AccessSource`]

use crate::error::Result;
use crate::models::*;
use crate::traits::AccessSource;
use chrono::Local;

/// Date format used for `extract_date`
pub const EXTRACT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Settings for one export run
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Copied verbatim into the snapshot
    pub jenkins_url: String,
    pub extract_date: String,
    /// Tag used for agent-scoped memberships (`item` unless configured otherwise)
    pub agent_role_type: RoleType,
}

impl ExportOptions {
    /// Options stamped with today's local date
    pub fn new(jenkins_url: impl Into<String>) -> Self {
        Self {
            jenkins_url: jenkins_url.into(),
            extract_date: Local::now().format(EXTRACT_DATE_FORMAT).to_string(),
            agent_role_type: RoleType::Item,
        }
    }

    pub fn with_agent_role_type(mut self, role_type: RoleType) -> Self {
        self.agent_role_type = role_type;
        self
    }

    pub fn with_extract_date(mut self, date: impl Into<String>) -> Self {
        self.extract_date = date.into();
        self
    }
}

/// Collect users, roles, memberships and permissions into one snapshot
///
/// Roles are discovered per scope first, then each discovered role gets its
/// permission set resolved with one extra request. Roles and memberships come
/// out sorted by role name within each scope; members keep the server order;
/// permissions are sorted ascending. The first failing request aborts the run.
pub fn collect_export(source: &dyn AccessSource, options: &ExportOptions) -> Result<ExportData> {
    let mut data = ExportData::new(options.jenkins_url.clone(), options.extract_date.clone());

    data.users = source.list_users()?;
    tracing::info!(count = data.users.len(), "Fetched users");

    for scope in RoleScope::ALL {
        let mut listed = source.list_role_members(scope)?;
        listed.sort_by(|a, b| a.name.cmp(&b.name));
        tracing::info!(scope = %scope, count = listed.len(), "Fetched roles");

        let role_type = scope.role_type(options.agent_role_type);
        for role in listed {
            data.roles_mut(scope).push(Role::new(role.name.clone()));
            data.membership.push(Membership {
                role_name: role.name,
                role_type,
                members: role.members,
            });
        }
    }

    for scope in RoleScope::ALL {
        for role in data.roles_mut(scope).iter_mut() {
            let mut permissions = source.get_role_permissions(scope, &role.name)?;
            permissions.sort();
            tracing::debug!(
                scope = %scope,
                role = %role.name,
                count = permissions.len(),
                "Resolved role permissions"
            );
            role.permissions = permissions;
        }
    }

    Ok(data)
}
