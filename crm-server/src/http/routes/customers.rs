//! Customer endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::CustomerRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{CustomerId, JsonBody, QueryParams};
use crate::http::server::AppState;
use crate::models::{Customer, CustomerPatch, NewCustomer};

/// Create customer request
#[derive(Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
    pub status: String,
}

/// List filter
#[derive(Debug, Deserialize)]
pub struct ListCustomersParams {
    pub status: Option<String>,
}

/// Customer response
#[derive(Debug, Serialize)]
pub struct CustomerResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub status: String,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            status: c.status,
        }
    }
}

/// POST /customers - create a new customer
async fn create_customer(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    let draft = NewCustomer::new(req.name, req.email, req.status)?;
    let customer = CustomerRepo::new(&state.pool).create(draft).await?;

    tracing::info!(id = customer.id, "Created customer");
    Ok((StatusCode::CREATED, Json(CustomerResponse::from(customer))))
}

/// GET /customers - list customers, optionally filtered by status
async fn list_customers(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<ListCustomersParams>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let customers = CustomerRepo::new(&state.pool)
        .list(params.status.as_deref())
        .await?;

    Ok(Json(
        customers.into_iter().map(CustomerResponse::from).collect(),
    ))
}

/// GET /customers/{id} - get a single customer
async fn get_customer(
    State(state): State<Arc<AppState>>,
    CustomerId(id): CustomerId,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer = CustomerRepo::new(&state.pool).get(id).await?;
    Ok(Json(CustomerResponse::from(customer)))
}

/// PUT /customers/{id} - overlay the supplied fields
async fn update_customer(
    State(state): State<Arc<AppState>>,
    CustomerId(id): CustomerId,
    JsonBody(patch): JsonBody<CustomerPatch>,
) -> Result<Json<CustomerResponse>, ApiError> {
    patch.validate()?;
    let customer = CustomerRepo::new(&state.pool).update(id, patch).await?;

    tracing::info!(id, "Updated customer");
    Ok(Json(CustomerResponse::from(customer)))
}

/// DELETE /customers/{id} - remove a customer
async fn delete_customer(
    State(state): State<Arc<AppState>>,
    CustomerId(id): CustomerId,
) -> Result<StatusCode, ApiError> {
    CustomerRepo::new(&state.pool).delete(id).await?;

    tracing::info!(id, "Deleted customer");
    Ok(StatusCode::NO_CONTENT)
}

/// Customer routes
///
/// The collection is reachable with and without a trailing slash.
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/customers", get(list_customers).post(create_customer))
        .route("/customers/", get(list_customers).post(create_customer))
        .route(
            "/customers/{id}",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}
