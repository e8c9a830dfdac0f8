//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid value: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an invalid value validation error.
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes for every failure the ledger can signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation
    ValidationFailed,

    // Not found
    PlanNotFound,
    MemberNotFound,
    MembershipNotFound,
    CompanyNotFound,

    // Lifecycle rules
    NoActiveMembership,
    AlreadyCheckedIn,
    HasPaymentHistory,
    NoMembersAssigned,
    InvalidStateTransition,

    // Infrastructure
    StoreUnavailable,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::PlanNotFound => "PLAN_NOT_FOUND",
            ErrorCode::MemberNotFound => "MEMBER_NOT_FOUND",
            ErrorCode::MembershipNotFound => "MEMBERSHIP_NOT_FOUND",
            ErrorCode::CompanyNotFound => "COMPANY_NOT_FOUND",
            ErrorCode::NoActiveMembership => "NO_ACTIVE_MEMBERSHIP",
            ErrorCode::AlreadyCheckedIn => "ALREADY_CHECKED_IN",
            ErrorCode::HasPaymentHistory => "HAS_PAYMENT_HISTORY",
            ErrorCode::NoMembersAssigned => "NO_MEMBERS_ASSIGNED",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::StoreUnavailable => "STORE_UNAVAILABLE",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ValidationFailed,
            format!("{}: {}", field.into(), message.into()),
        )
    }

    /// Wraps an underlying store failure.
    pub fn store(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreUnavailable, message)
    }

    pub fn plan_not_found(category: impl fmt::Display, duration: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::PlanNotFound,
            format!("No plan for category {} with duration {}", category, duration),
        )
    }

    pub fn no_active_membership(member: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::NoActiveMembership,
            format!("Member {} has no active membership", member),
        )
    }

    pub fn already_checked_in(member: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::AlreadyCheckedIn,
            format!("Member {} already checked in today", member),
        )
    }

    pub fn has_payment_history(member: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::HasPaymentHistory,
            format!(
                "Member {} has payment history and cannot be deleted; deactivate instead",
                member
            ),
        )
    }

    pub fn no_members_assigned(company: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::NoMembersAssigned,
            format!("Company {} has no active members assigned", company),
        )
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::new(ErrorCode::ValidationFailed, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_display_as_screaming_snake() {
        assert_eq!(ErrorCode::PlanNotFound.to_string(), "PLAN_NOT_FOUND");
        assert_eq!(ErrorCode::AlreadyCheckedIn.to_string(), "ALREADY_CHECKED_IN");
        assert_eq!(ErrorCode::StoreUnavailable.to_string(), "STORE_UNAVAILABLE");
    }

    #[test]
    fn validation_error_converts_to_domain_error() {
        let err: DomainError = ValidationError::empty_field("full_name").into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("full_name"));
    }

    #[test]
    fn constructor_helpers_carry_the_right_code() {
        assert_eq!(
            DomainError::plan_not_found("corporate", "annual").code,
            ErrorCode::PlanNotFound
        );
        assert_eq!(
            DomainError::has_payment_history("m-1").code,
            ErrorCode::HasPaymentHistory
        );
        assert_eq!(
            DomainError::no_members_assigned("c-1").code,
            ErrorCode::NoMembersAssigned
        );
    }

    #[test]
    fn display_includes_code_and_message() {
        let err = DomainError::store("connection refused");
        let rendered = err.to_string();
        assert!(rendered.contains("STORE_UNAVAILABLE"));
        assert!(rendered.contains("connection refused"));
    }
}
