//! Task Endpoints

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::{path_segment, ApiClient, ApiResult};
use crate::models::Task;
use crate::reconcile::ListView;

// ========================
// Request / Response Bodies
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTaskData {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateTaskData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Deserialize)]
struct TasksResponse {
    tasks: Vec<Task>,
}

#[derive(Deserialize)]
struct TaskResponse {
    task: Task,
}

// ========================
// Endpoints
// ========================

fn list_path(view: ListView) -> &'static str {
    match view {
        ListView::Active => "/tasks",
        ListView::Completed => "/tasks/completed",
        ListView::Trash => "/tasks/trash",
    }
}

/// Fetch the slice of tasks a list view shows.
pub async fn list_tasks(api: &ApiClient, view: ListView) -> ApiResult<Vec<Task>> {
    let response: TasksResponse = api.send(api.request(Method::GET, list_path(view))).await?;
    Ok(response.tasks)
}

pub async fn get_task(api: &ApiClient, id: &str) -> ApiResult<Task> {
    let path = format!("/tasks/{}", path_segment(id));
    let response: TaskResponse = api.send(api.request(Method::GET, &path)).await?;
    Ok(response.task)
}

pub async fn create_task(api: &ApiClient, data: &CreateTaskData) -> ApiResult<Task> {
    let response: TaskResponse = api.send(api.request(Method::POST, "/tasks").json(data)).await?;
    Ok(response.task)
}

pub async fn update_task(api: &ApiClient, id: &str, data: &UpdateTaskData) -> ApiResult<Task> {
    let path = format!("/tasks/{}", path_segment(id));
    let response: TaskResponse = api.send(api.request(Method::PATCH, &path).json(data)).await?;
    Ok(response.task)
}

/// Soft-delete: the task moves to the trash.
pub async fn delete_task(api: &ApiClient, id: &str) -> ApiResult<Task> {
    let path = format!("/tasks/{}", path_segment(id));
    let response: TaskResponse = api.send(api.request(Method::DELETE, &path)).await?;
    Ok(response.task)
}

pub async fn restore_task(api: &ApiClient, id: &str) -> ApiResult<Task> {
    transition(api, "restore", id).await
}

pub async fn complete_task(api: &ApiClient, id: &str) -> ApiResult<Task> {
    transition(api, "complete", id).await
}

pub async fn incomplete_task(api: &ApiClient, id: &str) -> ApiResult<Task> {
    transition(api, "incomplete", id).await
}

async fn transition(api: &ApiClient, action: &str, id: &str) -> ApiResult<Task> {
    let path = format!("/tasks/{}/{}", action, path_segment(id));
    let response: TaskResponse = api.send(api.request(Method::PATCH, &path)).await?;
    Ok(response.task)
}
