//! Wire models for the `asynchPeople` user listing

use serde::Deserialize;

/// `_class` of the user property that carries the e-mail address
pub const MAILER_PROPERTY_CLASS: &str = "hudson.tasks.Mailer$UserProperty";

#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Option<Vec<UserEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserEntry {
    pub user: UserDetails,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetails {
    /// `null` for accounts without a display name
    #[serde(default)]
    pub full_name: Option<String>,
    pub id: String,
    #[serde(default)]
    pub property: Option<Vec<UserProperty>>,
}

/// Typed user property. Only the mailer property has an address.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProperty {
    #[serde(rename = "_class", default)]
    pub class: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl UserDetails {
    /// Address of the first mailer property, if any
    pub fn mail_address(&self) -> Option<&str> {
        self.property
            .iter()
            .flatten()
            .find(|p| p.class.as_deref() == Some(MAILER_PROPERTY_CLASS))
            .and_then(|p| p.address.as_deref())
    }
}
