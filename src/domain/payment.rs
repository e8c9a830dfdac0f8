//! Payment records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{
    MemberId, MembershipId, Money, PaymentId, Timestamp, ValidationError,
};

/// How a payment was collected at the desk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Mpesa,
    Card,
    Bank,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Mpesa => "mpesa",
            PaymentMethod::Card => "card",
            PaymentMethod::Bank => "bank",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cash" => Ok(PaymentMethod::Cash),
            "mpesa" => Ok(PaymentMethod::Mpesa),
            "card" => Ok(PaymentMethod::Card),
            "bank" => Ok(PaymentMethod::Bank),
            other => Err(ValidationError::invalid_value(
                "payment_method",
                format!("unknown payment method '{}'", other),
            )),
        }
    }
}

/// An individual payment applied to a membership.
///
/// Payments are append-only; their existence blocks hard deletion of
/// the paying member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub member_id: MemberId,
    pub membership_id: MembershipId,
    pub amount: Money,
    pub method: PaymentMethod,
    pub paid_at: Timestamp,
}

impl Payment {
    pub fn new(
        id: PaymentId,
        member_id: MemberId,
        membership_id: MembershipId,
        amount: Money,
        method: PaymentMethod,
        paid_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        if amount.as_minor() <= 0 {
            return Err(ValidationError::invalid_value(
                "amount",
                "payment amount must be positive",
            ));
        }
        Ok(Self {
            id,
            member_id,
            membership_id,
            amount,
            method,
            paid_at,
        })
    }
}
