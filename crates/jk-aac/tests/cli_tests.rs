use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::path::Path;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASIC_AUTH: &str = "Basic YWRtaW46c2VjcmV0";

/// Command with an isolated HOME and no credentials leaking in from the environment
fn jk_aac(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("jk-aac");
    cmd.current_dir(home)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("JENKINS_URL")
        .env_remove("ADMIN_USER")
        .env_remove("ADMIN_TOKEN")
        .env_remove("BEARER_TOKEN");
    for (key, _) in std::env::vars() {
        if key.starts_with("JK_AAC_") {
            cmd.env_remove(key);
        }
    }
    cmd
}

async fn mount_jenkins(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/asynchPeople/api/json"))
        .and(header("Authorization", BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [
                {"user": {"fullName": "Jane Doe", "id": "jdoe", "property": [
                    {"_class": "hudson.tasks.Mailer$UserProperty", "address": "jane@x.com"}
                ]}},
                {"user": {"fullName": "CI Bot", "id": "ci", "property": []}}
            ]
        })))
        .mount(server)
        .await;

    let roles = [
        ("globalRoles", json!({"admin": [{"type": "USER", "sid": "jdoe"}]})),
        ("projectRoles", json!({"dev": [{"type": "GROUP", "sid": "developers"}]})),
        ("slaveRoles", json!({"builder": [{"type": "USER", "sid": "ci"}]})),
    ];
    for (scope, body) in roles {
        Mock::given(method("GET"))
            .and(path("/role-strategy/strategy/getAllRoles"))
            .and(query_param("type", scope))
            .and(header("Authorization", BASIC_AUTH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    let permissions = [
        ("globalRoles", "admin", json!({"hudson.model.Hudson.Read": true, "hudson.model.Hudson.Administer": true})),
        ("projectRoles", "dev", json!({"Job.Read": true, "Job.Build": true, "Overall.Read": true})),
        ("slaveRoles", "builder", json!({"hudson.model.Computer.Build": true})),
    ];
    for (scope, role, ids) in permissions {
        Mock::given(method("GET"))
            .and(path("/role-strategy/strategy/getRole"))
            .and(query_param("type", scope))
            .and(query_param("roleName", role))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"permissionIds": ids})))
            .mount(server)
            .await;
    }
}

#[test]
fn test_help_command() {
    let home = tempfile::tempdir().unwrap();
    jk_aac(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Export Jenkins access control"));
}

#[test]
fn test_export_help_lists_flags() {
    let home = tempfile::tempdir().unwrap();
    jk_aac(home.path())
        .args(["export", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--path"))
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_missing_url() {
    let home = tempfile::tempdir().unwrap();
    jk_aac(home.path())
        .arg("export")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("URL not configured"));
}

#[test]
fn test_missing_credentials() {
    let home = tempfile::tempdir().unwrap();
    jk_aac(home.path())
        .args(["export", "--url", "http://127.0.0.1:9/"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Credentials not configured"));
}

#[test]
fn test_missing_config_file() {
    let home = tempfile::tempdir().unwrap();
    jk_aac(home.path())
        .args(["export", "--config", "does-not-exist.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[tokio::test]
async fn test_export_yaml_default_path() {
    let server = MockServer::start().await;
    mount_jenkins(&server).await;
    let home = tempfile::tempdir().unwrap();
    let url = format!("{}/", server.uri());

    jk_aac(home.path())
        .args(["export", "--url", url.as_str(), "--user", "admin", "--token", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("access-config.yaml"));

    let content = std::fs::read_to_string(home.path().join("access-config.yaml")).unwrap();
    assert!(content.contains(&format!("jenkins_url: {}", url)));
    assert!(content.contains("login: jdoe"));
    assert!(content.contains("mail: jane@x.com"));
    assert!(content.contains("role_type: global"));
    assert!(content.contains("slave_roles:"));
}

#[tokio::test]
async fn test_export_json_with_config_file() {
    let server = MockServer::start().await;
    mount_jenkins(&server).await;
    let home = tempfile::tempdir().unwrap();
    let url = format!("{}/", server.uri());
    std::fs::write(
        home.path().join("aac.yaml"),
        format!("jenkins_url: {}\nadmin_user: admin\nadmin_token: secret\n", url),
    )
    .unwrap();

    jk_aac(home.path())
        .args(["export", "--config", "aac.yaml", "-p", "snapshot", "-f", "json"])
        .assert()
        .success();

    let content = std::fs::read_to_string(home.path().join("snapshot.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();

    assert_eq!(value["jenkins_url"], json!(url));
    assert_eq!(
        value["items_roles"][0]["permissions"],
        json!(["Job.Build", "Job.Read", "Overall.Read"])
    );
    assert_eq!(
        value["membership"],
        json!([
            {"role_name": "admin", "role_type": "global", "members": ["jdoe"]},
            {"role_name": "dev", "role_type": "item", "members": ["developers"]},
            {"role_name": "builder", "role_type": "item", "members": ["ci"]}
        ])
    );
    assert!(content.starts_with("{\n  \"extract_date\""));
}

#[tokio::test]
async fn test_export_agent_role_tag_from_env() {
    let server = MockServer::start().await;
    mount_jenkins(&server).await;
    let home = tempfile::tempdir().unwrap();

    jk_aac(home.path())
        .env("JENKINS_URL", format!("{}/", server.uri()))
        .env("ADMIN_USER", "admin")
        .env("ADMIN_TOKEN", "secret")
        .args(["export", "--format", "json", "--agent-role-type", "agent"])
        .assert()
        .success();

    let content = std::fs::read_to_string(home.path().join("access-config.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["membership"][2]["role_type"], json!("agent"));
}

#[tokio::test]
async fn test_unauthorized_aborts_without_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let home = tempfile::tempdir().unwrap();
    let uri = server.uri();

    jk_aac(home.path())
        .args(["export", "--url", uri.as_str(), "--user", "admin", "--token", "wrong"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Authentication failed"));

    assert!(!home.path().join("access-config.yaml").exists());
}

#[tokio::test]
async fn test_server_error_on_permissions_aborts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/role-strategy/strategy/getRole"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_jenkins(&server).await;
    let home = tempfile::tempdir().unwrap();
    let uri = server.uri();

    jk_aac(home.path())
        .args(["export", "--url", uri.as_str(), "--user", "admin", "--token", "secret"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("API error (500)"));

    assert!(!home.path().join("access-config.yaml").exists());
}

#[tokio::test]
async fn test_verbose_logs_responses() {
    let server = MockServer::start().await;
    mount_jenkins(&server).await;
    let home = tempfile::tempdir().unwrap();
    let uri = format!("{}/", server.uri());

    jk_aac(home.path())
        .args(["export", "-v", "--url", uri.as_str(), "--user", "admin", "--token", "secret"])
        .assert()
        .success()
        .stderr(predicate::str::contains("getRole?type=projectRoles&roleName=dev"))
        .stderr(predicate::str::contains("Overall.Read"));
}

#[tokio::test]
async fn test_export_reports_config_file_without_verbose() {
    let server = MockServer::start().await;
    mount_jenkins(&server).await;
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("aac.yaml"),
        format!("jenkins_url: {}/\nadmin_user: admin\nadmin_token: secret\n", server.uri()),
    )
    .unwrap();

    jk_aac(home.path())
        .args(["export", "--config", "aac.yaml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Using config file"))
        .stderr(predicate::str::contains("aac.yaml"))
        .stderr(predicate::str::contains("Fetched users"))
        .stderr(predicate::str::contains("getRole?type=").not());
}

#[test]
fn test_init_creates_org_directory() {
    let home = tempfile::tempdir().unwrap();

    jk_aac(home.path())
        .args(["init", "acme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization completed in"));

    let content =
        std::fs::read_to_string(home.path().join("acme").join("jenkins-access-config.yaml"))
            .unwrap();
    assert_eq!(content, "organizations:\n");

    jk_aac(home.path())
        .args(["init", "acme"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create directory"));
}

#[test]
fn test_show_snapshot() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(
        home.path().join("snap.yaml"),
        "extract_date: 2024-01-15\n\
         jenkins_url: https://ci.example.com/\n\
         users:\n\
         - login: jdoe\n  full_name: Jane Doe\n  mail: jane@x.com\n\
         global_roles:\n\
         - name: admin\n  permissions:\n  - hudson.model.Hudson.Administer\n\
         items_roles: []\n\
         membership:\n\
         - role_name: admin\n  role_type: global\n  members:\n  - jdoe\n",
    )
    .unwrap();

    jk_aac(home.path())
        .args(["show", "snap.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://ci.example.com/"))
        .stdout(predicate::str::contains("jdoe (Jane Doe) <jane@x.com>"))
        .stdout(predicate::str::contains("hudson.model.Hudson.Administer"))
        .stdout(predicate::str::contains("admin (global): jdoe"));
}

#[test]
fn test_show_rejects_invalid_file() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("broken.json"), "[1, 2").unwrap();

    jk_aac(home.path())
        .args(["show", "broken.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load broken.json"));
}

#[test]
fn test_completions() {
    let home = tempfile::tempdir().unwrap();
    jk_aac(home.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jk-aac"));
}
