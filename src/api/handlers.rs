//! HTTP API handlers.

use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::config::Config;
use crate::error::ValidationError;
use crate::metrics;

/// Id assigned to every created user. The service keeps no user store, so
/// creation is a stub that always answers with the same id.
const CREATED_USER_ID: i64 = 3;

/// Application state shared with handlers.
///
/// Carries only the static configuration surfaced by the health check;
/// handlers hold no cross-request state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Version string reported by the health check.
    pub version: String,
    /// Deployment environment reported by the health check.
    pub environment: String,
}

impl AppState {
    /// Build state from loaded configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            version: config.app_version.clone(),
            environment: config.environment.clone(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    /// Current UTC time, ISO-8601.
    pub timestamp: String,
    /// Configured application version.
    pub version: String,
    /// Configured deployment environment.
    pub environment: String,
}

/// A user as exposed by the API. Ephemeral, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// User id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

/// Response for the user listing.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    /// The users.
    pub users: Vec<User>,
    /// Number of users in the list.
    pub count: usize,
}

/// Response for user creation.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    /// The created user.
    pub user: User,
}

/// Validated user-creation input.
#[derive(Debug, PartialEq, Eq)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl NewUser {
    /// Validate a raw JSON body into a typed request.
    ///
    /// The body must be an object with string `name` and `email` fields;
    /// any other shape is the one user-data validation error.
    pub fn from_value(body: &Value) -> Result<Self, ValidationError> {
        let object = body.as_object().ok_or(ValidationError::InvalidUserData)?;
        let field = |key: &str| {
            object
                .get(key)
                .and_then(Value::as_str)
                .map(str::to_owned)
                .ok_or(ValidationError::InvalidUserData)
        };

        Ok(Self {
            name: field("name")?,
            email: field("email")?,
        })
    }
}

/// Validated data-processing input.
#[derive(Debug)]
pub struct ProcessRequest {
    /// The request's `values` array, echoed back verbatim.
    original: Vec<Value>,
    /// The same values as numbers.
    numbers: Vec<f64>,
}

impl ProcessRequest {
    /// Validate a raw JSON body into a typed request.
    ///
    /// A missing `values` key is distinct from a present-but-malformed one:
    /// the former reports "No values provided", the latter "Values must be
    /// a list of numbers". JSON booleans are not numbers.
    pub fn from_value(body: &Value) -> Result<Self, ValidationError> {
        let values = body.get("values").ok_or(ValidationError::NoValuesProvided)?;
        let list = values.as_array().ok_or(ValidationError::NotNumberList)?;

        let mut numbers = Vec::with_capacity(list.len());
        for value in list {
            numbers.push(value.as_f64().ok_or(ValidationError::NotNumberList)?);
        }

        Ok(Self {
            original: list.clone(),
            numbers,
        })
    }

    /// Aggregate the values into the response statistics.
    ///
    /// The empty list is a defined degenerate case: every statistic is 0.
    pub fn aggregate(self) -> ProcessResult {
        let count = self.numbers.len();
        let sum: f64 = self.numbers.iter().sum();
        let average = if count > 0 { sum / count as f64 } else { 0.0 };
        let min = self.numbers.iter().copied().reduce(f64::min).unwrap_or(0.0);
        let max = self.numbers.iter().copied().reduce(f64::max).unwrap_or(0.0);

        ProcessResult {
            original_values: self.original,
            sum,
            average,
            min,
            max,
            count,
        }
    }
}

/// Aggregation result for a processed value list.
#[derive(Debug, Serialize)]
pub struct ProcessResult {
    /// The input values, unchanged.
    pub original_values: Vec<Value>,
    /// Arithmetic sum.
    pub sum: f64,
    /// `sum / count`, or 0 for the empty list.
    pub average: f64,
    /// Minimum value, or 0 for the empty list.
    pub min: f64,
    /// Maximum value, or 0 for the empty list.
    pub max: f64,
    /// Number of input values.
    pub count: usize,
}

/// Response wrapper for data processing.
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    /// The aggregation result.
    pub result: ProcessResult,
}

/// Health check handler - always returns 200.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    metrics::record_request("health");

    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        version: state.version,
        environment: state.environment,
    })
}

/// List users handler - returns the fixed sample listing.
pub async fn get_users() -> impl IntoResponse {
    metrics::record_request("get_users");

    let users = sample_users();
    info!("Retrieved {} users", users.len());

    Json(UsersResponse {
        count: users.len(),
        users,
    })
}

/// Create user handler - validates the payload and echoes it with a stub id.
///
/// Malformed or unparsable bodies take the same 400 path as missing fields.
pub async fn create_user(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ValidationError> {
    metrics::record_request("create_user");

    let Json(body) = payload.map_err(|_| ValidationError::InvalidUserData)?;
    let new_user = NewUser::from_value(&body)?;

    let user = User {
        id: CREATED_USER_ID,
        name: new_user.name,
        email: new_user.email,
    };

    info!("Created user: {}", user.name);
    Ok((StatusCode::CREATED, Json(CreatedResponse { user })))
}

/// Process data handler - validates `values` and returns aggregate statistics.
pub async fn process_data(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ProcessResponse>, ValidationError> {
    metrics::record_request("process_data");

    let Json(body) = payload.map_err(|_| ValidationError::NoValuesProvided)?;
    let request = ProcessRequest::from_value(&body)?;
    let result = request.aggregate();

    info!("Processed {} values", result.count);
    Ok(Json(ProcessResponse { result }))
}

/// The fixed two-element user listing.
fn sample_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        },
        User {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
        },
    ]
}
