//! Users API handlers.
//!
//! ```text
//! GET /api/v1/users
//! POST /api/v1/users {"name":"Jane Smith","email":"jane@example.com","age":28}
//! GET /api/v1/users/42
//! ```
//!
//! Handlers return canned or request-echoing data; nothing is stored and no
//! validation is applied.

use crate::models::{NewUser, User};
use actix_web::{get, post, web, HttpResponse};
use chrono::Utc;
use rand::Rng;

/// Name returned for every lookup by id.
const PLACEHOLDER_NAME: &str = "Sample User";
/// Email returned for every lookup by id.
const PLACEHOLDER_EMAIL: &str = "user@example.com";

fn canned_user(id: i64, name: &str, email: &str) -> User {
    User {
        id: Some(id),
        name: Some(name.to_owned()),
        email: Some(email.to_owned()),
        age: None,
        created_at: None,
    }
}

/// Get all users.
///
/// Retrieve a list of all users. The list is a fixed pair of records and is
/// identical on every call.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Successful response", body = [User])
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users() -> web::Json<Vec<User>> {
    web::Json(vec![
        canned_user(1, "John Doe", "john@example.com"),
        canned_user(2, "Jane Smith", "jane@example.com"),
    ])
}

/// Create a new user.
///
/// Create a new user in the system. The id is drawn at random from
/// `0..1000` on every call, so uniqueness is not guaranteed, and absent body
/// fields stay absent on the created record.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Bad request - invalid input")
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(payload: web::Json<NewUser>) -> HttpResponse {
    let NewUser { name, email, age } = payload.into_inner();
    let user = User {
        id: Some(rand::thread_rng().gen_range(0..1000)),
        name,
        email,
        age,
        created_at: Some(Utc::now()),
    };
    HttpResponse::Created().json(user)
}

/// Get user by ID.
///
/// Returns a placeholder user echoing the requested id. The path segment is
/// parsed as an integer; a non-numeric segment is echoed back as `null`.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    ),
    tags = ["users"],
    operation_id = "getUserById"
)]
#[get("/users/{id}")]
pub async fn get_user(path: web::Path<String>) -> web::Json<User> {
    let id = path.into_inner().parse::<i64>().ok();
    web::Json(User {
        id,
        ..canned_user(0, PLACEHOLDER_NAME, PLACEHOLDER_EMAIL)
    })
}
