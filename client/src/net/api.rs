//! Typed calls against the CMS REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these with the token they read from the session; nothing here
//! looks the token up on its own. Responses are normalized through
//! [`normalize_list`] / [`normalize_object`] so both server envelope styles
//! reach callers as plain typed values.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{ApiClient, ApiError, Method, normalize_list, normalize_object};
use super::types::{LoginRequest, LoginResponse, RegisterRequest, UserProfile};
use crate::state::resource::Resource;

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const REGISTER_PATH: &str = "/api/auth/register";
pub const PROFILE_PATH: &str = "/api/user";

/// `{collection}/{id}` for a single record.
#[must_use]
pub fn member_path(collection: &str, id: i64) -> String {
    format!("{collection}/{id}")
}

/// Exchange credentials for a bearer token via `POST /api/auth/login`.
///
/// # Errors
///
/// Any [`ApiError`]; a `200` without `access_token` is [`ApiError::Json`].
pub async fn login(client: &ApiClient, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let body = client.send_json(Method::Post, LOGIN_PATH, None, request).await?;
    normalize_object(body)
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<(), ApiError> {
    client.send_json(Method::Post, REGISTER_PATH, None, request).await?;
    Ok(())
}

/// Fetch the signed-in user's profile via `GET /api/user`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn fetch_profile(client: &ApiClient, token: &str) -> Result<UserProfile, ApiError> {
    let body = client.send_empty(Method::Get, PROFILE_PATH, Some(token)).await?;
    normalize_object(body)
}

/// Fetch every record of `T`.
///
/// # Errors
///
/// Transport and status failures only; an unexpected body shape yields an
/// empty list.
pub async fn list<T: Resource>(client: &ApiClient, token: &str) -> Result<Vec<T>, ApiError> {
    let body = client.send_empty(Method::Get, T::COLLECTION, Some(token)).await?;
    Ok(normalize_list(body))
}

/// Create a record of `T` from `draft`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn create<T: Resource>(client: &ApiClient, token: &str, draft: &T::Draft) -> Result<(), ApiError> {
    client.send_json(Method::Post, T::COLLECTION, Some(token), draft).await?;
    Ok(())
}

/// Submit an edited draft for record `id`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn update<T: Resource>(client: &ApiClient, token: &str, id: i64, draft: &T::Draft) -> Result<(), ApiError> {
    let path = member_path(T::COLLECTION, id);
    client.send_json(T::UPDATE_METHOD, &path, Some(token), draft).await?;
    Ok(())
}

/// Delete record `id` of `T`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn delete<T: Resource>(client: &ApiClient, token: &str, id: i64) -> Result<(), ApiError> {
    let path = member_path(T::COLLECTION, id);
    client.send_empty(Method::Delete, &path, Some(token)).await?;
    Ok(())
}
