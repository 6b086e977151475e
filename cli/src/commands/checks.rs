use tidy_common::config::Config;
use tidy_common::models::account::Account;
use tidy_core::understandability::{self, ACCESS_RESOURCE};
use tracing::debug;

use crate::terminal::print;

pub fn authorize(is_active: bool, permissions: Vec<String>, required: Option<&str>, cfg: &Config) {
    let mut account = Account::new(0, "cli");
    account.is_active = is_active;
    for permission in permissions {
        account = account.with_permission(permission);
    }

    let required: &str = required.unwrap_or(ACCESS_RESOURCE);
    debug!(?account, required, "checking authorization");

    if cfg.quiet < 2 {
        print::aligned_line("Active", account.is_active.to_string(), cfg.quiet);
        print::aligned_line("Required", required, cfg.quiet);
    }
    print::verdict(
        "Authorized",
        understandability::is_user_authorized_for(&account, required),
        cfg.quiet,
    );
}

pub fn email(address: &str, cfg: &Config) {
    print::verdict("Valid", understandability::is_valid_email(address), cfg.quiet);
}
