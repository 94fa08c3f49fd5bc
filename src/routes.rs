//! Routes
//!
//! Hash-based page routing (`#/tasks/trash`).

use percent_encoding::percent_decode_str;

use crate::api::path_segment;
use crate::reconcile::ListView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Register,
    Tasks(ListView),
    NewTask,
    UpdateTask(String),
    Profile,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let path = path.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["tasks"] => Route::Tasks(ListView::Active),
            ["tasks", "completed"] => Route::Tasks(ListView::Completed),
            ["tasks", "trash"] => Route::Tasks(ListView::Trash),
            ["tasks", "new"] => Route::NewTask,
            ["tasks", "update", id] => {
                Route::UpdateTask(percent_decode_str(id).decode_utf8_lossy().into_owned())
            }
            ["profile"] => Route::Profile,
            _ => Route::Landing,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Tasks(ListView::Active) => "/tasks".to_string(),
            Route::Tasks(ListView::Completed) => "/tasks/completed".to_string(),
            Route::Tasks(ListView::Trash) => "/tasks/trash".to_string(),
            Route::NewTask => "/tasks/new".to_string(),
            Route::UpdateTask(id) => format!("/tasks/update/{}", path_segment(id)),
            Route::Profile => "/profile".to_string(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Landing | Route::Login | Route::Register)
    }

    /// The page actually shown: protected routes fall back to login.
    pub fn resolve(&self, authenticated: bool) -> Route {
        if self.requires_auth() && !authenticated {
            Route::Login
        } else {
            self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_path_round_trip() {
        let routes = [
            Route::Landing,
            Route::Login,
            Route::Register,
            Route::Tasks(ListView::Active),
            Route::Tasks(ListView::Completed),
            Route::Tasks(ListView::Trash),
            Route::NewTask,
            Route::UpdateTask("abc123".to_string()),
            Route::Profile,
        ];
        for route in routes {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_update_id_is_escaped_once() {
        let route = Route::UpdateTask("a/b%c".to_string());
        assert_eq!(route.path(), "/tasks/update/a%2Fb%25c");
        assert_eq!(Route::parse(&format!("#{}", route.path())), route);
        assert_eq!(
            Route::parse("#/tasks/update/a%2Fb"),
            Route::UpdateTask("a/b".to_string())
        );
    }

    #[test]
    fn test_parse_hash_forms() {
        assert_eq!(Route::parse("#/tasks/trash"), Route::Tasks(ListView::Trash));
        assert_eq!(Route::parse("#/tasks/"), Route::Tasks(ListView::Active));
        assert_eq!(Route::parse(""), Route::Landing);
        assert_eq!(Route::parse("#/nowhere"), Route::Landing);
        assert_eq!(Route::parse("/tasks/update"), Route::Landing);
    }

    #[test]
    fn test_protected_routes_resolve_to_login() {
        assert_eq!(Route::Profile.resolve(false), Route::Login);
        assert_eq!(
            Route::Tasks(ListView::Trash).resolve(false),
            Route::Login
        );
        assert_eq!(Route::Register.resolve(false), Route::Register);
        assert_eq!(Route::Profile.resolve(true), Route::Profile);
    }
}
