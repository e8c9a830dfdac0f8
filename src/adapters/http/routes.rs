//! Axum router for the ledger API.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::handlers::{
    check_in, create_company, dashboard_overview, deactivate_company, deactivate_membership,
    delete_member, expire_lapsed, financial_report, health, list_companies, list_plans,
    record_payment, register_member, run_corporate_billing, update_company, update_member,
    update_plan_price, AppState,
};

/// Builds the complete API router.
///
/// # Routes
///
/// ## Members
/// - `POST /api/members` - Register a member with first membership and payment
/// - `PUT /api/members/:id` - Edit contact details
/// - `DELETE /api/members/:id` - Delete (blocked by payment history)
/// - `POST /api/members/:id/payments` - Record a renewal payment
/// - `POST /api/members/:id/check-in` - Record today's gym visit
///
/// ## Memberships
/// - `POST /api/memberships/:id/deactivate` - Expire a membership early
/// - `POST /api/memberships/expire-lapsed` - Sweep lapsed memberships
///
/// ## Plans
/// - `GET /api/plans` - Price list
/// - `PUT /api/plans/:id/price` - Reprice a plan
///
/// ## Corporates
/// - `GET /api/corporates` / `POST /api/corporates`
/// - `PUT /api/corporates/:id` / `POST /api/corporates/:id/deactivate`
/// - `POST /api/corporates/:id/billing-runs` - Monthly billing run
///
/// ## Reports
/// - `GET /api/reports/dashboard`
/// - `GET /api/reports/financial?year=&month=`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/members", post(register_member))
        .route("/api/members/:id", put(update_member))
        .route("/api/members/:id", delete(delete_member))
        .route("/api/members/:id/payments", post(record_payment))
        .route("/api/members/:id/check-in", post(check_in))
        .route("/api/memberships/:id/deactivate", post(deactivate_membership))
        .route("/api/memberships/expire-lapsed", post(expire_lapsed))
        .route("/api/plans", get(list_plans))
        .route("/api/plans/:id/price", put(update_plan_price))
        .route("/api/corporates", get(list_companies).post(create_company))
        .route("/api/corporates/:id", put(update_company))
        .route("/api/corporates/:id/deactivate", post(deactivate_company))
        .route("/api/corporates/:id/billing-runs", post(run_corporate_billing))
        .route("/api/reports/dashboard", get(dashboard_overview))
        .route("/api/reports/financial", get(financial_report))
}
