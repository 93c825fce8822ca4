//! Domain-level constants.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "user";

/// Administrator role
pub const ROLE_ADMIN: &str = "admin";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_USER, ROLE_ADMIN];

/// Check if a role value is valid
pub fn is_valid_role(role: &str) -> bool {
    VALID_ROLES.contains(&role)
}

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum name length requirement (after trimming)
pub const MIN_NAME_LENGTH: usize = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_roles() {
        assert!(is_valid_role("user"));
        assert!(is_valid_role("admin"));
        assert!(!is_valid_role("ADMIN"));
        assert!(!is_valid_role("root"));
    }
}
