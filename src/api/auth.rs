//! Auth Endpoints

use std::future::Future;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiResult};
use crate::models::User;

// ========================
// Request / Response Bodies
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    /// Email address or username
    pub login_identifier: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordData {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

// ========================
// Endpoints
// ========================

pub async fn register(api: &ApiClient, data: &RegisterData) -> ApiResult<()> {
    api.send_empty(api.public_request(Method::POST, "/auth/register").json(data))
        .await
}

pub async fn login(api: &ApiClient, data: &LoginData) -> ApiResult<LoginResponse> {
    api.send(api.public_request(Method::POST, "/auth/login").json(data))
        .await
}

/// The request, token included, is built before this returns, so the local
/// session can be cleared while it is still in flight.
pub fn logout(api: &ApiClient) -> impl Future<Output = ApiResult<()>> + 'static {
    let api = api.clone();
    let builder = api.request(Method::POST, "/auth/logout");
    async move { api.send_empty(builder).await }
}

pub async fn update_password(api: &ApiClient, data: &UpdatePasswordData) -> ApiResult<()> {
    api.send_empty(api.request(Method::PATCH, "/auth/password").json(data))
        .await
}
