//! Corporate sponsor companies.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CompanyId, Money, Timestamp, ValidationError};

/// Default per-member monthly rate, in minor units (KES 5,000.00).
pub const DEFAULT_RATE_PER_MEMBER: Money = Money::from_minor(500_000);

/// A company sponsoring memberships for its staff.
///
/// Companies are billed monthly at a flat per-member rate; they are
/// deactivated rather than deleted so past billing runs keep their
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub company_name: String,
    pub contact_person: String,
    pub contact_phone: String,
    pub rate_per_member: Money,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl Company {
    pub fn new(
        id: CompanyId,
        company_name: impl Into<String>,
        contact_person: impl Into<String>,
        contact_phone: impl Into<String>,
        rate_per_member: Option<Money>,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let company_name = company_name.into();
        if company_name.trim().is_empty() {
            return Err(ValidationError::empty_field("company_name"));
        }
        let rate = rate_per_member.unwrap_or(DEFAULT_RATE_PER_MEMBER);
        if rate.as_minor() <= 0 {
            return Err(ValidationError::invalid_value(
                "rate_per_member",
                "rate must be positive",
            ));
        }
        Ok(Self {
            id,
            company_name,
            contact_person: contact_person.into(),
            contact_phone: contact_phone.into(),
            rate_per_member: rate,
            is_active: true,
            created_at,
        })
    }

    pub fn update_details(
        &mut self,
        company_name: impl Into<String>,
        contact_person: impl Into<String>,
        contact_phone: impl Into<String>,
        rate_per_member: Money,
    ) -> Result<(), ValidationError> {
        let company_name = company_name.into();
        if company_name.trim().is_empty() {
            return Err(ValidationError::empty_field("company_name"));
        }
        if rate_per_member.as_minor() <= 0 {
            return Err(ValidationError::invalid_value(
                "rate_per_member",
                "rate must be positive",
            ));
        }
        self.company_name = company_name;
        self.contact_person = contact_person.into();
        self.contact_phone = contact_phone.into();
        self.rate_per_member = rate_per_member;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_rate_when_none_supplied() {
        let company = Company::new(
            CompanyId::new(),
            "Acme Ltd",
            "John Mwangi",
            "0722000000",
            None,
            Timestamp::now(),
        )
        .unwrap();
        assert_eq!(company.rate_per_member, DEFAULT_RATE_PER_MEMBER);
        assert!(company.is_active);
    }

    #[test]
    fn rejects_blank_company_name() {
        let result = Company::new(
            CompanyId::new(),
            " ",
            "John Mwangi",
            "0722000000",
            None,
            Timestamp::now(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_positive_rate() {
        let result = Company::new(
            CompanyId::new(),
            "Acme Ltd",
            "John Mwangi",
            "0722000000",
            Some(Money::from_minor(0)),
            Timestamp::now(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn deactivate_clears_the_flag() {
        let mut company = Company::new(
            CompanyId::new(),
            "Acme Ltd",
            "John Mwangi",
            "0722000000",
            None,
            Timestamp::now(),
        )
        .unwrap();
        company.deactivate();
        assert!(!company.is_active);
    }
}
