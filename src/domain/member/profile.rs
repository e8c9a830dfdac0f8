//! Member profile entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CompanyId, MemberId, Timestamp, ValidationError};

use super::MemberRole;

/// Identity record for a registered gym patron.
///
/// Deletion is guarded: a profile with payment history is never
/// hard-deleted, only its membership is deactivated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub id: MemberId,
    pub full_name: String,
    pub phone: String,
    /// Sponsoring company for corporate members.
    pub corporate_id: Option<CompanyId>,
    pub role: Option<MemberRole>,
    pub created_at: Timestamp,
}

impl MemberProfile {
    /// Creates a new profile after validating required fields.
    pub fn new(
        id: MemberId,
        full_name: impl Into<String>,
        phone: impl Into<String>,
        corporate_id: Option<CompanyId>,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let full_name = full_name.into();
        if full_name.trim().is_empty() {
            return Err(ValidationError::empty_field("full_name"));
        }
        let phone = phone.into();
        if phone.trim().is_empty() {
            return Err(ValidationError::empty_field("phone"));
        }
        Ok(Self {
            id,
            full_name,
            phone,
            corporate_id,
            role: Some(MemberRole::Member),
            created_at,
        })
    }

    /// Applies an edit to the mutable contact fields.
    pub fn update_contact(
        &mut self,
        full_name: impl Into<String>,
        phone: impl Into<String>,
        corporate_id: Option<CompanyId>,
    ) -> Result<(), ValidationError> {
        let full_name = full_name.into();
        if full_name.trim().is_empty() {
            return Err(ValidationError::empty_field("full_name"));
        }
        let phone = phone.into();
        if phone.trim().is_empty() {
            return Err(ValidationError::empty_field("phone"));
        }
        self.full_name = full_name;
        self.phone = phone;
        self.corporate_id = corporate_id;
        Ok(())
    }

    pub fn is_corporate(&self) -> bool {
        self.corporate_id.is_some()
    }
}
