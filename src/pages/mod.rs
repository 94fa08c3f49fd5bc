//! Pages
//!
//! One component per route.

mod auth;
mod profile;
mod task_form;
mod task_list;

pub use auth::{LandingPage, LoginPage, RegisterPage};
pub use profile::ProfilePage;
pub use task_form::{TaskFormMode, TaskFormPage};
pub use task_list::TaskListPage;
