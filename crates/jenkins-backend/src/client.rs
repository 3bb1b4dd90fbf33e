use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::de::DeserializeOwned;
use std::time::Duration;
use ureq::Agent;

use crate::error::{JenkinsError, Result};
use crate::models::*;
use access_core::RoleScope;

const USERS_PATH: &str = "asynchPeople/api/json?tree=users[user[fullName,id,mail,property[address]]]";
const ALL_ROLES_PATH: &str = "role-strategy/strategy/getAllRoles";
const ROLE_PATH: &str = "role-strategy/strategy/getRole";

/// Error bodies longer than this are usually HTML pages, not messages
const MAX_ERROR_BODY_LEN: usize = 200;

/// How requests authenticate against the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Login plus API token
    Basic { user: String, token: String },
    Bearer(String),
}

impl Credentials {
    pub fn basic(user: &str, token: &str) -> Self {
        Credentials::Basic {
            user: user.to_string(),
            token: token.to_string(),
        }
    }

    pub fn bearer(token: &str) -> Self {
        Credentials::Bearer(token.to_string())
    }

    /// Value for the `Authorization` header
    pub fn header_value(&self) -> String {
        match self {
            Credentials::Basic { user, token } => {
                format!("Basic {}", STANDARD.encode(format!("{}:{}", user, token)))
            }
            Credentials::Bearer(token) => format!("Bearer {}", token),
        }
    }
}

/// Jenkins REST client for the user listing and the role-strategy plugin
pub struct JenkinsClient {
    agent: Agent,
    base_url: String,
    auth_header: String,
}

impl JenkinsClient {
    pub fn new(base_url: &str, credentials: Credentials) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            // Status codes are checked in check_response
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_header: credentials.header_value(),
        }
    }

    /// Full URL for a path relative to the server root
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn handle_error(&self, err: ureq::Error) -> JenkinsError {
        match &err {
            ureq::Error::StatusCode(status) => status_error(*status, String::new()),
            _ => JenkinsError::Http(err),
        }
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        url: &str,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());
        tracing::debug!(url, status, body = %body, "Request failed");

        Err(status_error(status, body))
    }

    /// GET a path and return the raw response body
    pub fn fetch(&self, path: &str) -> Result<String> {
        let url = self.url(path);
        tracing::debug!(url = %url, "GET");

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header)
            .header("Accept", "application/json")
            .call()
            .map_err(|e| self.handle_error(e))?;

        let mut response = self.check_response(&url, response)?;
        let body = response.body_mut().read_to_string()?;
        tracing::debug!(url = %url, response = %body, "Response");

        Ok(body)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.fetch(path)?;
        Ok(serde_json::from_str(&body)?)
    }

    pub fn get_users(&self) -> Result<UsersResponse> {
        self.get_json(USERS_PATH)
    }

    pub fn get_all_roles(&self, scope: RoleScope) -> Result<RolesResponse> {
        self.get_json(&format!("{}?type={}", ALL_ROLES_PATH, scope.api_name()))
    }

    pub fn get_role(&self, scope: RoleScope, role_name: &str) -> Result<RolePermissionsResponse> {
        self.get_json(&format!(
            "{}?type={}&roleName={}",
            ROLE_PATH,
            scope.api_name(),
            urlencoding::encode(role_name)
        ))
    }
}

fn status_error(status: u16, body: String) -> JenkinsError {
    match status {
        401 => JenkinsError::Unauthorized,
        403 => JenkinsError::Forbidden,
        404 => JenkinsError::Api {
            status,
            message: "Not found (is the role-strategy plugin installed?)".to_string(),
        },
        _ => {
            let message = body.trim();
            JenkinsError::Api {
                status,
                message: if message.is_empty() || message.len() > MAX_ERROR_BODY_LEN {
                    format!("HTTP {}", status)
                } else {
                    message.to_string()
                },
            }
        }
    }
}
