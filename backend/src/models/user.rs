//! User data model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User record as returned by the API.
///
/// Never persisted: each value is built for a single response and discarded.
/// Optional fields other than `id` are omitted from the JSON when absent;
/// `id` is always serialised and becomes `null` when a path segment fails
/// integer parsing.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier; `null` when the requested id was not numeric.
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Full name of the user.
    #[schema(example = "John Doe")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email address of the user.
    #[schema(example = "john@example.com")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Age in years.
    #[schema(example = 28, minimum = 0)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// When the user was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request body for `POST /api/v1/users`.
///
/// Every field is optional and no validation is applied; absent fields stay
/// absent on the created record. Unknown keys are ignored rather than
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Full name of the user.
    #[schema(example = "Jane Smith")]
    pub name: Option<String>,
    /// Email address of the user.
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    /// Age in years.
    #[schema(example = 28, minimum = 0)]
    pub age: Option<u32>,
}
