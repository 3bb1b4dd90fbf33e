use access_core::{ExportData, Membership, Role, RoleScope, User};
use colored::Colorize;
use std::path::Path;

pub fn output_error(err: &anyhow::Error) {
    eprintln!("{}: {:#}", "Error".red().bold(), err);
}

pub trait Displayable {
    fn display(&self) -> String;
}

impl Displayable for User {
    fn display(&self) -> String {
        match &self.mail {
            Some(mail) => format!("{} ({}) <{}>", self.login.cyan(), self.full_name, mail.dimmed()),
            None => format!("{} ({})", self.login.cyan(), self.full_name),
        }
    }
}

impl Displayable for Role {
    fn display(&self) -> String {
        let mut output = format!(
            "{} {}",
            self.name.white().bold(),
            format!("[{} permissions]", self.permissions.len()).dimmed()
        );
        for permission in &self.permissions {
            output.push_str(&format!("\n      {}", permission));
        }
        output
    }
}

impl Displayable for Membership {
    fn display(&self) -> String {
        let members = if self.members.is_empty() {
            "-".dimmed().to_string()
        } else {
            self.members.join(", ")
        };
        format!(
            "{} ({}): {}",
            self.role_name.white().bold(),
            self.role_type.to_string().magenta(),
            members
        )
    }
}

/// One-line-per-section summary printed after a successful export
pub fn print_export_summary(data: &ExportData, path: &Path) {
    println!("{} {}", "Exported".green().bold(), path.display());
    println!("  Users: {}", data.users.len());
    for scope in RoleScope::ALL {
        println!("  {} roles: {}", scope_label(scope), data.roles(scope).len());
    }
    println!("  Memberships: {}", data.membership.len());
}

/// Full listing of a loaded snapshot
pub fn print_snapshot(data: &ExportData) {
    println!(
        "{} {}  {} {}",
        "Jenkins:".dimmed(),
        data.jenkins_url.cyan().bold(),
        "Extracted:".dimmed(),
        data.extract_date
    );

    println!();
    println!("Users ({}):", data.users.len());
    for user in &data.users {
        println!("  {}", user.display());
    }

    for scope in RoleScope::ALL {
        let roles = data.roles(scope);
        if roles.is_empty() && scope == RoleScope::Agent {
            continue;
        }
        println!();
        println!("{} roles ({}):", scope_label(scope), roles.len());
        for role in roles {
            println!("  {}", role.display());
        }
    }

    println!();
    println!("Memberships ({}):", data.membership.len());
    for membership in &data.membership {
        println!("  {}", membership.display());
    }
}

fn scope_label(scope: RoleScope) -> &'static str {
    match scope {
        RoleScope::Global => "Global",
        RoleScope::Project => "Item",
        RoleScope::Agent => "Agent",
    }
}
