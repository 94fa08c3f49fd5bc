//! User Endpoints

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiResult};
use crate::models::User;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// An image file picked for upload, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Deserialize)]
struct UserResponse {
    user: User,
}

pub async fn get_profile(api: &ApiClient) -> ApiResult<User> {
    let response: UserResponse = api.send(api.request(Method::GET, "/user")).await?;
    Ok(response.user)
}

pub async fn update_profile(api: &ApiClient, data: &UpdateUserData) -> ApiResult<User> {
    let response: UserResponse = api.send(api.request(Method::PATCH, "/user").json(data)).await?;
    Ok(response.user)
}

pub async fn upload_avatar(api: &ApiClient, upload: AvatarUpload) -> ApiResult<User> {
    let part = Part::bytes(upload.bytes)
        .file_name(upload.file_name)
        .mime_str(&upload.content_type)?;
    let form = Form::new().part("avatar", part);
    let response: UserResponse = api
        .send(api.request(Method::POST, "/user/avatar").multipart(form))
        .await?;
    Ok(response.user)
}
