//! In-process backend for client tests.
//!
//! Serves the Devfolio routes from an axum router bound to `127.0.0.1:0`.
//! Only [`VALID_TOKEN`] is accepted as a bearer token, and only the password
//! `correct-horse` logs in.

use axum::extract::{Multipart, Path};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

pub const VALID_TOKEN: &str = "tok-ada-1";
pub const PASSWORD: &str = "correct-horse";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        == Some(VALID_TOKEN)
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, "Invalid token").into_response()
}

fn user_json(username: &str) -> Value {
    json!({
        "id": 1,
        "username": username,
        "email": format!("{username}@example.com"),
        "first_name": "Ada",
        "last_name": "Lovelace",
        "bio": "",
        "followers": 1200,
        "following": 3
    })
}

fn project_json(id: i64, code: &str, likes: u64) -> Value {
    json!({
        "id": id,
        "code": code,
        "name": format!("Project {id}"),
        "description": "Test project",
        "status": "Under Development",
        "general_tags": ["fintech", ""],
        "programming_tags": null,
        "images": [],
        "developer": {"username": "ada", "first_name": "Ada", "last_name": "Lovelace"},
        "likes": likes,
        "stars": 1
    })
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] != PASSWORD {
        return (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response();
    }
    let email = body["email"].as_str().unwrap_or_default();
    if email == "blank@example.com" {
        return Json(json!({"token": "", "user": user_json("blank")})).into_response();
    }
    let username = email.split('@').next().unwrap_or_default();
    Json(json!({"token": VALID_TOKEN, "user": user_json(username)})).into_response()
}

async fn signup(Json(body): Json<Value>) -> Response {
    let Some(username) = body["username"].as_str() else {
        return (StatusCode::BAD_REQUEST, "").into_response();
    };
    if username == "taken" {
        return (StatusCode::CONFLICT, "Username already exists\n").into_response();
    }
    let mut user = user_json(username);
    user["user_type"] = body["userType"].clone();
    Json(json!({"token": VALID_TOKEN, "user": user})).into_response()
}

async fn logout(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({"message": "Logged out"})).into_response()
}

async fn validate(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({"message": "Token is valid"})).into_response()
}

async fn profile(headers: HeaderMap, Path(username): Path<String>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if username == "ghost" {
        return StatusCode::NOT_FOUND.into_response();
    }
    let mut body = user_json(&username);
    body["projects"] = json!([project_json(7, "engine-abc123", 3)]);
    Json(body).into_response()
}

async fn user_projects(headers: HeaderMap, Path(username): Path<String>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    match username.as_str() {
        "broken" => (StatusCode::OK, "<html>oops</html>").into_response(),
        "nobody" => (StatusCode::OK, "null").into_response(),
        _ => Json(json!([project_json(7, "engine-abc123", 3)])).into_response(),
    }
}

async fn project_detail(
    headers: HeaderMap,
    Path((username, code)): Path<(String, String)>,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut project = project_json(7, &code, 3);
    project["developer"]["username"] = json!(username);
    Json(project).into_response()
}

async fn follow(headers: HeaderMap, Path(_username): Path<String>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    StatusCode::OK.into_response()
}

async fn unfollow(headers: HeaderMap, Path(username): Path<String>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if username == "stranger" {
        return (StatusCode::BAD_REQUEST, "").into_response();
    }
    Json(json!({"message": "Unfollowed"})).into_response()
}

async fn follow_status(headers: HeaderMap, Path(username): Path<String>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({"following": username == "grace"})).into_response()
}

/// Echoes the received part names in `bio` and the picture file name in
/// `profile_picture`.
async fn update_profile(headers: HeaderMap, mut multipart: Multipart) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    let mut user = user_json("ada");
    let mut names = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await.unwrap_or_default();
        match name.as_str() {
            "first_name" => user["first_name"] = json!(String::from_utf8_lossy(&data)),
            "profile_picture" => user["profile_picture"] = json!(file_name),
            _ => {}
        }
        names.push(name);
    }
    user["bio"] = json!(names.join(","));
    Json(user).into_response()
}

async fn list_projects(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!([
        project_json(1, "a-000001", 5),
        project_json(2, "b-000002", 20),
        project_json(3, "c-000003", 1)
    ]))
    .into_response()
}

async fn create_project(headers: HeaderMap, Json(mut body): Json<Value>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    body["id"] = json!(99);
    body["developer"] = json!({"username": "ada"});
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn saved_projects(headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    (StatusCode::OK, "null").into_response()
}

async fn save(headers: HeaderMap, Path(id): Path<i64>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    if id == 13 {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(json!({"message": "Project saved"})).into_response()
}

async fn unsave(headers: HeaderMap, Path(_id): Path<i64>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({"message": "Project unsaved"})).into_response()
}

fn router() -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
        .route("/logout", post(logout))
        .route("/validate", get(validate))
        .route("/dev/{username}", get(profile))
        .route("/dev/{username}/projects", get(user_projects))
        .route("/dev/{username}/{code}", get(project_detail))
        .route("/users/{username}/follow", post(follow))
        .route("/users/{username}/unfollow", delete(unfollow))
        .route("/users/{username}/follow/status", get(follow_status))
        .route("/profile/update", put(update_profile))
        .route("/projects", get(list_projects))
        .route("/projects/create", post(create_project))
        .route("/projects/saved", get(saved_projects))
        .route("/projects/{id}/save", post(save).delete(unsave))
}

/// Start the backend and return its base URL.
pub async fn spawn_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router()).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
