//! User roles.
//!
//! Recruiters belong to a company and are removed with it; candidates are
//! free-standing.

use std::str::FromStr;

use crate::error::CoreError;

/// User works for a company and assigns assessments.
pub const ROLE_RECRUITER: &str = "RECRUITER";

/// User takes assessments.
pub const ROLE_CANDIDATE: &str = "CANDIDATE";

/// All valid user role values.
pub const VALID_ROLES: &[&str] = &[ROLE_RECRUITER, ROLE_CANDIDATE];

/// Role a user plays in the assessment workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Recruiter,
    Candidate,
}

impl UserRole {
    /// Return the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recruiter => ROLE_RECRUITER,
            Self::Candidate => ROLE_CANDIDATE,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_RECRUITER => Ok(Self::Recruiter),
            ROLE_CANDIDATE => Ok(Self::Candidate),
            other => Err(CoreError::Validation(format!(
                "Invalid role '{other}'. Must be one of: {}",
                VALID_ROLES.join(", ")
            ))),
        }
    }
}

/// Validate that a role string is one of the accepted values.
pub fn validate_role(role: &str) -> Result<(), CoreError> {
    role.parse::<UserRole>().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        assert_eq!("RECRUITER".parse::<UserRole>().unwrap(), UserRole::Recruiter);
        assert_eq!("CANDIDATE".parse::<UserRole>().unwrap(), UserRole::Candidate);
    }

    #[test]
    fn rejects_unknown_role() {
        assert!(validate_role("ADMIN").is_err());
        assert!(validate_role("recruiter").is_err());
    }
}
