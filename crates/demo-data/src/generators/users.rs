//! The fixed demo accounts.

use polls::auth;
use polls::errors::AppError;
use polls::models::User;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin";
pub const STAFF_USERNAME: &str = "staff_user";
pub const REGULAR_USERNAME: &str = "regular_user";
pub const DEFAULT_PASSWORD: &str = "test123";

/// Builds the three demo accounts: an admin (staff + superuser), a staff
/// member, and a regular user.
///
/// Passwords are hashed with the same algorithm the auth module uses.
pub fn demo_users() -> Result<Vec<User>, AppError> {
    Ok(vec![
        User::new(
            ADMIN_USERNAME,
            auth::hash_password(ADMIN_PASSWORD)?,
            true,
            true,
        ),
        User::new(
            STAFF_USERNAME,
            auth::hash_password(DEFAULT_PASSWORD)?,
            true,
            false,
        ),
        User::new(
            REGULAR_USERNAME,
            auth::hash_password(DEFAULT_PASSWORD)?,
            false,
            false,
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_the_three_accounts() {
        let users = demo_users().unwrap();
        assert_eq!(users.len(), 3);

        let admin = users.iter().find(|u| u.username == ADMIN_USERNAME).unwrap();
        assert!(admin.is_staff);
        assert!(admin.is_superuser);

        let staff = users.iter().find(|u| u.username == STAFF_USERNAME).unwrap();
        assert!(staff.is_staff);
        assert!(!staff.is_superuser);

        let regular = users
            .iter()
            .find(|u| u.username == REGULAR_USERNAME)
            .unwrap();
        assert!(!regular.is_staff);
        assert!(!regular.is_superuser);
    }

    #[test]
    fn usernames_are_unique() {
        let users = demo_users().unwrap();
        let names: std::collections::HashSet<_> =
            users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names.len(), users.len());
    }

    #[test]
    fn passwords_verify_against_stored_hashes() {
        let users = demo_users().unwrap();

        let admin = users.iter().find(|u| u.username == ADMIN_USERNAME).unwrap();
        assert!(auth::verify_password(ADMIN_PASSWORD, &admin.password_hash).unwrap());

        let staff = users.iter().find(|u| u.username == STAFF_USERNAME).unwrap();
        assert!(auth::verify_password(DEFAULT_PASSWORD, &staff.password_hash).unwrap());
    }
}
