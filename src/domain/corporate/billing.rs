//! Corporate billing runs.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    BillingMonth, CompanyId, CorporatePaymentId, DomainError, Money, Timestamp,
};

use super::Company;

/// Invoice produced by one corporate billing run: the company's active
/// member count at billing time multiplied by its per-member rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporatePayment {
    pub id: CorporatePaymentId,
    pub company_id: CompanyId,
    pub amount: Money,
    pub members_count: u64,
    pub billing_month: BillingMonth,
    pub paid_at: Timestamp,
}

impl CorporatePayment {
    /// Prices a billing run for `company` covering `billing_month`.
    ///
    /// Fails with `NO_MEMBERS_ASSIGNED` when the company has no active
    /// members, so billing never produces zero-amount invoices.
    pub fn for_billing_run(
        id: CorporatePaymentId,
        company: &Company,
        members_count: u64,
        billing_month: BillingMonth,
        paid_at: Timestamp,
    ) -> Result<Self, DomainError> {
        if members_count == 0 {
            return Err(DomainError::no_members_assigned(&company.company_name));
        }
        Ok(Self {
            id,
            company_id: company.id,
            amount: company.rate_per_member.times(members_count),
            members_count,
            billing_month,
            paid_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn company(rate_minor: i64) -> Company {
        Company::new(
            CompanyId::new(),
            "Acme Ltd",
            "John Mwangi",
            "0722000000",
            Some(Money::from_minor(rate_minor)),
            Timestamp::now(),
        )
        .unwrap()
    }

    #[test]
    fn amount_is_rate_times_member_count() {
        let payment = CorporatePayment::for_billing_run(
            CorporatePaymentId::new(),
            &company(500_000),
            12,
            BillingMonth::new(2024, 3).unwrap(),
            Timestamp::now(),
        )
        .unwrap();
        assert_eq!(payment.amount, Money::from_minor(6_000_000));
        assert_eq!(payment.members_count, 12);
    }

    #[test]
    fn zero_members_is_rejected() {
        let err = CorporatePayment::for_billing_run(
            CorporatePaymentId::new(),
            &company(500_000),
            0,
            BillingMonth::new(2024, 3).unwrap(),
            Timestamp::now(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::NoMembersAssigned);
    }
}
