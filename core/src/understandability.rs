//! # Positive Conditionals
//!
//! Predicates are named and phrased so that their `true` branch reads as an
//! affirmative statement. Callers write `if is_user_authorized(user)` and, when
//! they need the negative, `if !is_valid_email(email)`; there is never an
//! `is_not_*` function to negate a second time.

use tidy_common::models::account::User;

/// Permission required by [`is_user_authorized`].
pub const ACCESS_RESOURCE: &str = "access_resource";

/// Returns `true` when the user is active and may access the resource.
pub fn is_user_authorized(user: &impl User) -> bool {
    is_user_authorized_for(user, ACCESS_RESOURCE)
}

/// Returns `true` when the user is active and holds `permission`.
pub fn is_user_authorized_for(user: &impl User, permission: &str) -> bool {
    user.is_active() && user.has_permission(permission)
}

/// Returns `true` when `email` contains both an `@` and a `.`.
///
/// Deliberately simplistic; this is not an RFC 5322 validator.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidy_common::models::account::Account;

    #[test]
    fn test_active_user_with_permission_is_authorized() {
        let user = Account::new(1, "ada").with_permission(ACCESS_RESOURCE);
        assert!(is_user_authorized(&user));
    }

    #[test]
    fn test_inactive_user_is_not_authorized() {
        let user = Account::new(1, "ada")
            .with_permission(ACCESS_RESOURCE)
            .deactivated();
        assert!(!is_user_authorized(&user));
    }

    #[test]
    fn test_active_user_without_permission_is_not_authorized() {
        let user = Account::new(1, "ada").with_permission("read_reports");
        assert!(!is_user_authorized(&user));
        assert!(is_user_authorized_for(&user, "read_reports"));
    }

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("test@example.com"));
    }

    #[test]
    fn test_email_missing_at_or_dot() {
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("testexample.com"));
        assert!(!is_valid_email("test@"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_email_check_ignores_order() {
        // Only presence is checked, not position.
        assert!(is_valid_email(".@"));
    }
}
