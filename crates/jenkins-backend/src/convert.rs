//! Conversions from Jenkins wire models to access-core domain types

use crate::models::*;
use access_core::{Permission, RoleMembers, User};

impl From<UserDetails> for User {
    fn from(details: UserDetails) -> Self {
        let mail = details.mail_address().map(str::to_string);
        User {
            login: details.id,
            full_name: details.full_name.unwrap_or_default(),
            mail,
        }
    }
}

pub(crate) fn convert_users(response: UsersResponse) -> Vec<User> {
    response
        .users
        .unwrap_or_default()
        .into_iter()
        .map(|entry| entry.user.into())
        .collect()
}

pub(crate) fn convert_roles(response: RolesResponse) -> Vec<RoleMembers> {
    response
        .into_iter()
        .map(|(name, members)| RoleMembers {
            name,
            members: members.into_iter().map(|m| m.sid).collect(),
        })
        .collect()
}

pub(crate) fn convert_permissions(response: RolePermissionsResponse) -> Vec<Permission> {
    response
        .permission_ids
        .into_keys()
        .map(Permission::from)
        .collect()
}
