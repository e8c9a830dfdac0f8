//! Request and response DTOs for the HTTP API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::member::MemberProfile;
use crate::domain::membership::Membership;
use crate::domain::payment::Payment;

/// Standard error body: machine-readable code plus human message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

/// DomainError rendered as an HTTP response.
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.code {
            ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
            ErrorCode::PlanNotFound
            | ErrorCode::MemberNotFound
            | ErrorCode::MembershipNotFound
            | ErrorCode::CompanyNotFound => StatusCode::NOT_FOUND,
            ErrorCode::NoActiveMembership
            | ErrorCode::AlreadyCheckedIn
            | ErrorCode::HasPaymentHistory
            | ErrorCode::NoMembersAssigned
            | ErrorCode::InvalidStateTransition => StatusCode::CONFLICT,
            ErrorCode::StoreUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = ErrorResponse {
            code: self.0.code.to_string(),
            message: self.0.message,
        };
        (status, Json(body)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Deserialize)]
pub struct RegisterMemberRequest {
    pub full_name: String,
    pub phone: String,
    pub corporate_id: Option<Uuid>,
    pub category: String,
    pub duration: String,
    pub payment_method: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMemberRequest {
    pub full_name: String,
    pub phone: String,
    pub corporate_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct RecordPaymentRequest {
    pub amount_cents: i64,
    pub payment_method: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePlanPriceRequest {
    pub price_cents: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
    pub company_name: String,
    pub contact_person: String,
    pub contact_phone: String,
    pub rate_per_member_cents: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCompanyRequest {
    pub company_name: String,
    pub contact_person: String,
    pub contact_phone: String,
    pub rate_per_member_cents: i64,
}

#[derive(Debug, Deserialize)]
pub struct RunBillingRequest {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct FinancialReportParams {
    pub year: i32,
    pub month: u32,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
pub struct MembershipResponse {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub start_date: String,
    pub expiry_date: String,
    pub status: String,
}

impl From<&Membership> for MembershipResponse {
    fn from(m: &Membership) -> Self {
        Self {
            id: *m.id.as_uuid(),
            plan_id: *m.plan_id.as_uuid(),
            start_date: m.start_date.to_string(),
            expiry_date: m.expiry_date.to_string(),
            status: m.status.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub id: Uuid,
    pub amount_cents: i64,
    pub method: String,
    pub paid_at: String,
}

impl From<&Payment> for PaymentResponse {
    fn from(p: &Payment) -> Self {
        Self {
            id: *p.id.as_uuid(),
            amount_cents: p.amount.as_minor(),
            method: p.method.to_string(),
            paid_at: p.paid_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub corporate_id: Option<Uuid>,
}

impl From<&MemberProfile> for MemberResponse {
    fn from(p: &MemberProfile) -> Self {
        Self {
            id: *p.id.as_uuid(),
            full_name: p.full_name.clone(),
            phone: p.phone.clone(),
            corporate_id: p.corporate_id.map(|c| *c.as_uuid()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterMemberResponse {
    pub member: MemberResponse,
    pub membership: MembershipResponse,
    pub payment: PaymentResponse,
}

#[derive(Debug, Serialize)]
pub struct RecordPaymentResponse {
    pub membership: MembershipResponse,
    pub payment: PaymentResponse,
}

#[derive(Debug, Serialize)]
pub struct CheckInResponse {
    pub attendance_id: Uuid,
    pub attendance_date: String,
    pub checked_in_at: String,
}

#[derive(Debug, Serialize)]
pub struct ExpireLapsedResponse {
    pub expired_count: u64,
}

#[derive(Debug, Serialize)]
pub struct BillingRunResponse {
    pub payment_id: Uuid,
    pub amount_cents: i64,
    pub members_count: u64,
    pub billing_month: String,
    pub memberships_reset: u64,
}
