//! HTTP handlers connecting axum routes to application handlers.

use std::str::FromStr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use uuid::Uuid;

use crate::application::handlers::attendance::{CheckInCommand, CheckInHandler};
use crate::application::handlers::corporate::{
    CreateCompanyCommand, CreateCompanyHandler, DeactivateCompanyCommand,
    DeactivateCompanyHandler, RunCorporateBillingCommand, RunCorporateBillingHandler,
    UpdateCompanyCommand, UpdateCompanyHandler,
};
use crate::application::handlers::member::{
    DeleteMemberCommand, DeleteMemberHandler, RegisterMemberCommand, RegisterMemberHandler,
    UpdateMemberCommand, UpdateMemberHandler,
};
use crate::application::handlers::membership::{
    DeactivateMembershipCommand, DeactivateMembershipHandler, ExpireLapsedHandler,
};
use crate::application::handlers::payment::{RecordPaymentCommand, RecordPaymentHandler};
use crate::application::handlers::plans::{
    ListPlansHandler, UpdatePlanPriceCommand, UpdatePlanPriceHandler,
};
use crate::application::handlers::reports::{
    DashboardOverview, FinancialReport, GetDashboardOverviewHandler, GetFinancialReportHandler,
    GetFinancialReportQuery,
};
use crate::domain::foundation::{
    BillingMonth, CompanyId, DomainError, MemberId, MembershipId, Money, PlanId,
};
use crate::domain::plan::Plan;
use crate::ports::{
    AttendanceRepository, CorporateRepository, EnrollmentRepository, MemberRepository,
    MembershipRepository, PlanCatalog, ReportReader,
};

use super::dto::{
    ApiError, BillingRunResponse, CheckInResponse, CreateCompanyRequest, ExpireLapsedResponse,
    FinancialReportParams, MemberResponse, MembershipResponse, PaymentResponse,
    RecordPaymentRequest, RecordPaymentResponse, RegisterMemberRequest, RegisterMemberResponse,
    RunBillingRequest, UpdateCompanyRequest, UpdateMemberRequest, UpdatePlanPriceRequest,
};

/// Shared application state, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub plan_catalog: Arc<dyn PlanCatalog>,
    pub members: Arc<dyn MemberRepository>,
    pub memberships: Arc<dyn MembershipRepository>,
    pub enrollments: Arc<dyn EnrollmentRepository>,
    pub attendance: Arc<dyn AttendanceRepository>,
    pub corporates: Arc<dyn CorporateRepository>,
    pub reports: Arc<dyn ReportReader>,
}

impl AppState {
    fn register_member_handler(&self) -> RegisterMemberHandler {
        RegisterMemberHandler::new(self.plan_catalog.clone(), self.enrollments.clone())
    }

    fn record_payment_handler(&self) -> RecordPaymentHandler {
        RecordPaymentHandler::new(
            self.plan_catalog.clone(),
            self.memberships.clone(),
            self.enrollments.clone(),
        )
    }

    fn check_in_handler(&self) -> CheckInHandler {
        CheckInHandler::new(self.memberships.clone(), self.attendance.clone())
    }

    fn billing_handler(&self) -> RunCorporateBillingHandler {
        RunCorporateBillingHandler::new(self.corporates.clone())
    }
}

fn parse_field<T: FromStr>(value: &str, field: &str) -> Result<T, ApiError> {
    value
        .parse()
        .map_err(|_| ApiError(DomainError::validation(field, format!("invalid value '{}'", value))))
}

fn billing_month(year: i32, month: u32) -> Result<BillingMonth, ApiError> {
    BillingMonth::new(year, month)
        .ok_or_else(|| ApiError(DomainError::validation("month", "must be between 1 and 12")))
}

// ════════════════════════════════════════════════════════════════════════════
// Members
// ════════════════════════════════════════════════════════════════════════════

pub async fn register_member(
    State(state): State<AppState>,
    Json(req): Json<RegisterMemberRequest>,
) -> Result<(StatusCode, Json<RegisterMemberResponse>), ApiError> {
    let cmd = RegisterMemberCommand {
        full_name: req.full_name,
        phone: req.phone,
        corporate_id: req.corporate_id.map(CompanyId::from_uuid),
        category: parse_field(&req.category, "category")?,
        duration: parse_field(&req.duration, "duration")?,
        payment_method: parse_field(&req.payment_method, "payment_method")?,
    };
    let result = state.register_member_handler().handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterMemberResponse {
            member: MemberResponse::from(&result.profile),
            membership: MembershipResponse::from(&result.membership),
            payment: PaymentResponse::from(&result.payment),
        }),
    ))
}

pub async fn update_member(
    State(state): State<AppState>,
    Path(member_id): Path<Uuid>,
    Json(req): Json<UpdateMemberRequest>,
) -> Result<Json<MemberResponse>, ApiError> {
    let handler = UpdateMemberHandler::new(state.members.clone());
    let profile = handler
        .handle(UpdateMemberCommand {
            member_id: MemberId::from_uuid(member_id),
            full_name: req.full_name,
            phone: req.phone,
            corporate_id: req.corporate_id.map(CompanyId::from_uuid),
        })
        .await?;

    Ok(Json(MemberResponse::from(&profile)))
}

pub async fn delete_member(
    State(state): State<AppState>,
    Path(member_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let handler = DeleteMemberHandler::new(state.members.clone());
    handler
        .handle(DeleteMemberCommand {
            member_id: MemberId::from_uuid(member_id),
        })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

// ════════════════════════════════════════════════════════════════════════════
// Payments and attendance
// ════════════════════════════════════════════════════════════════════════════

pub async fn record_payment(
    State(state): State<AppState>,
    Path(member_id): Path<Uuid>,
    Json(req): Json<RecordPaymentRequest>,
) -> Result<(StatusCode, Json<RecordPaymentResponse>), ApiError> {
    let cmd = RecordPaymentCommand {
        member_id: MemberId::from_uuid(member_id),
        amount: Money::from_minor(req.amount_cents),
        payment_method: parse_field(&req.payment_method, "payment_method")?,
    };
    let result = state.record_payment_handler().handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(RecordPaymentResponse {
            membership: MembershipResponse::from(&result.membership),
            payment: PaymentResponse::from(&result.payment),
        }),
    ))
}

pub async fn check_in(
    State(state): State<AppState>,
    Path(member_id): Path<Uuid>,
) -> Result<(StatusCode, Json<CheckInResponse>), ApiError> {
    let record = state
        .check_in_handler()
        .handle(CheckInCommand {
            member_id: MemberId::from_uuid(member_id),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CheckInResponse {
            attendance_id: *record.id.as_uuid(),
            attendance_date: record.attendance_date.to_string(),
            checked_in_at: record.checked_in_at.to_string(),
        }),
    ))
}

// ════════════════════════════════════════════════════════════════════════════
// Memberships
// ════════════════════════════════════════════════════════════════════════════

pub async fn deactivate_membership(
    State(state): State<AppState>,
    Path(membership_id): Path<Uuid>,
) -> Result<Json<MembershipResponse>, ApiError> {
    let handler = DeactivateMembershipHandler::new(state.memberships.clone());
    let membership = handler
        .handle(DeactivateMembershipCommand {
            membership_id: MembershipId::from_uuid(membership_id),
        })
        .await?;

    Ok(Json(MembershipResponse::from(&membership)))
}

pub async fn expire_lapsed(
    State(state): State<AppState>,
) -> Result<Json<ExpireLapsedResponse>, ApiError> {
    let handler = ExpireLapsedHandler::new(state.memberships.clone());
    let result = handler.handle().await?;

    Ok(Json(ExpireLapsedResponse {
        expired_count: result.expired_count,
    }))
}

// ════════════════════════════════════════════════════════════════════════════
// Plans
// ════════════════════════════════════════════════════════════════════════════

pub async fn list_plans(State(state): State<AppState>) -> Result<Json<Vec<Plan>>, ApiError> {
    let handler = ListPlansHandler::new(state.plan_catalog.clone());
    Ok(Json(handler.handle().await?))
}

pub async fn update_plan_price(
    State(state): State<AppState>,
    Path(plan_id): Path<Uuid>,
    Json(req): Json<UpdatePlanPriceRequest>,
) -> Result<Json<Plan>, ApiError> {
    let handler = UpdatePlanPriceHandler::new(state.plan_catalog.clone());
    let plan = handler
        .handle(UpdatePlanPriceCommand {
            plan_id: PlanId::from_uuid(plan_id),
            price: Money::from_minor(req.price_cents),
        })
        .await?;

    Ok(Json(plan))
}

// ════════════════════════════════════════════════════════════════════════════
// Corporates
// ════════════════════════════════════════════════════════════════════════════

pub async fn create_company(
    State(state): State<AppState>,
    Json(req): Json<CreateCompanyRequest>,
) -> Result<(StatusCode, Json<crate::domain::corporate::Company>), ApiError> {
    let handler = CreateCompanyHandler::new(state.corporates.clone());
    let company = handler
        .handle(CreateCompanyCommand {
            company_name: req.company_name,
            contact_person: req.contact_person,
            contact_phone: req.contact_phone,
            rate_per_member: req.rate_per_member_cents.map(Money::from_minor),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(company)))
}

pub async fn list_companies(
    State(state): State<AppState>,
) -> Result<Json<Vec<crate::domain::corporate::Company>>, ApiError> {
    Ok(Json(state.corporates.list().await?))
}

pub async fn update_company(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(req): Json<UpdateCompanyRequest>,
) -> Result<Json<crate::domain::corporate::Company>, ApiError> {
    let handler = UpdateCompanyHandler::new(state.corporates.clone());
    let company = handler
        .handle(UpdateCompanyCommand {
            company_id: CompanyId::from_uuid(company_id),
            company_name: req.company_name,
            contact_person: req.contact_person,
            contact_phone: req.contact_phone,
            rate_per_member: Money::from_minor(req.rate_per_member_cents),
        })
        .await?;

    Ok(Json(company))
}

pub async fn deactivate_company(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<crate::domain::corporate::Company>, ApiError> {
    let handler = DeactivateCompanyHandler::new(state.corporates.clone());
    let company = handler
        .handle(DeactivateCompanyCommand {
            company_id: CompanyId::from_uuid(company_id),
        })
        .await?;

    Ok(Json(company))
}

pub async fn run_corporate_billing(
    State(state): State<AppState>,
    Path(company_id): Path<Uuid>,
    Json(req): Json<RunBillingRequest>,
) -> Result<(StatusCode, Json<BillingRunResponse>), ApiError> {
    let month = match (req.year, req.month) {
        (Some(year), Some(month)) => Some(billing_month(year, month)?),
        (None, None) => None,
        _ => {
            return Err(ApiError(DomainError::validation(
                "billing_month",
                "year and month must be given together",
            )))
        }
    };

    let result = state
        .billing_handler()
        .handle(RunCorporateBillingCommand {
            company_id: CompanyId::from_uuid(company_id),
            billing_month: month,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BillingRunResponse {
            payment_id: *result.payment_id.as_uuid(),
            amount_cents: result.amount.as_minor(),
            members_count: result.members_count,
            billing_month: result.billing_month.to_string(),
            memberships_reset: result.memberships_reset,
        }),
    ))
}

// ════════════════════════════════════════════════════════════════════════════
// Reports
// ════════════════════════════════════════════════════════════════════════════

pub async fn dashboard_overview(
    State(state): State<AppState>,
) -> Result<Json<DashboardOverview>, ApiError> {
    let handler = GetDashboardOverviewHandler::new(state.reports.clone());
    Ok(Json(handler.handle().await?))
}

pub async fn financial_report(
    State(state): State<AppState>,
    Query(params): Query<FinancialReportParams>,
) -> Result<Json<FinancialReport>, ApiError> {
    let handler = GetFinancialReportHandler::new(state.reports.clone());
    let report = handler
        .handle(GetFinancialReportQuery {
            month: billing_month(params.year, params.month)?,
        })
        .await?;

    Ok(Json(report))
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
