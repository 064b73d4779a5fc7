//! Static page route table.
//!
//! Maps request paths to the page identifiers of the task manager UI. The
//! table holds one nested group (the `/tasks` section), one dynamic segment
//! (`:id`), and a catch-all NotFound fallback. Resolution takes the first
//! matching route; literal children are registered ahead of dynamic ones,
//! so `/tasks/new` is the create form rather than an edit page with
//! `id = "new"`.

use std::collections::HashMap;

/// Identifier of a UI page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Landing page at `/`.
    Home,
    /// Task list at `/tasks`.
    Tasks,
    /// Task creation form at `/tasks/new`.
    TaskNew,
    /// Task edit form at `/tasks/:id/edit`.
    TaskEdit,
    /// Catch-all for paths no route matches.
    NotFound,
}

impl Page {
    /// Stable route name, usable in logs and templates.
    pub fn name(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Tasks => "tasks",
            Page::TaskNew => "task-new",
            Page::TaskEdit => "task-edit",
            Page::NotFound => "not-found",
        }
    }
}

/// Outcome of resolving a path: the page to display and the path parameters
/// bound along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The matched page.
    pub page: Page,
    /// Parameters bound from dynamic segments, keyed by name.
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    /// Returns a bound path parameter by name.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    fn not_found() -> Self {
        Self {
            page: Page::NotFound,
            params: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment {
    Literal(&'static str),
    Param(&'static str),
}

#[derive(Debug)]
struct Route {
    segments: Vec<Segment>,
    page: Page,
}

impl Route {
    fn new(pattern: &'static str, page: Page) -> Self {
        let segments = pattern
            .split('/')
            .filter(|part| !part.is_empty())
            .map(|part| match part.strip_prefix(':') {
                Some(name) => Segment::Param(name),
                None => Segment::Literal(part),
            })
            .collect();

        Self { segments, page }
    }

    fn matches(&self, path_segments: &[&str]) -> Option<HashMap<String, String>> {
        if path_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, part) in self.segments.iter().zip(path_segments) {
            match segment {
                Segment::Literal(expected) => {
                    if expected != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert((*name).to_owned(), (*part).to_owned());
                }
            }
        }

        Some(params)
    }
}

/// Static table mapping URL paths to pages.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Builds the application route table.
    pub fn new() -> Self {
        // The /tasks section nests the list page, the create form, and the
        // edit form with its dynamic :id segment. Order matters: "new" must
        // be tried before ":id/edit" would ever see it.
        let routes = vec![
            Route::new("/", Page::Home),
            Route::new("/tasks", Page::Tasks),
            Route::new("/tasks/new", Page::TaskNew),
            Route::new("/tasks/:id/edit", Page::TaskEdit),
        ];

        Self { routes }
    }

    /// Resolves a request path to a page, binding any dynamic parameters.
    ///
    /// Unmatched paths fall through to [`Page::NotFound`]. Trailing slashes
    /// are tolerated; query strings and fragments are not part of the path.
    pub fn resolve(&self, path: &str) -> RouteMatch {
        let path = match path.find(['?', '#']) {
            Some(index) => &path[..index],
            None => path,
        };
        let segments: Vec<&str> = path.split('/').filter(|part| !part.is_empty()).collect();

        for route in &self.routes {
            if let Some(params) = route.matches(&segments) {
                return RouteMatch {
                    page: route.page,
                    params,
                };
            }
        }

        RouteMatch::not_found()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_home() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("/").page, Page::Home);
    }

    #[test]
    fn test_resolves_task_list_with_and_without_trailing_slash() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("/tasks").page, Page::Tasks);
        assert_eq!(table.resolve("/tasks/").page, Page::Tasks);
    }

    #[test]
    fn test_literal_new_wins_over_dynamic_id() {
        let table = RouteTable::new();

        let matched = table.resolve("/tasks/new");
        assert_eq!(matched.page, Page::TaskNew);
        assert!(matched.params.is_empty());
    }

    #[test]
    fn test_edit_route_binds_id_parameter() {
        let table = RouteTable::new();

        let matched = table.resolve("/tasks/42/edit");
        assert_eq!(matched.page, Page::TaskEdit);
        assert_eq!(matched.param("id"), Some("42"));
    }

    #[test]
    fn test_unmatched_paths_fall_through_to_not_found() {
        let table = RouteTable::new();

        for path in ["/nope", "/tasks/42", "/tasks/42/edit/extra", "/api"] {
            let matched = table.resolve(path);
            assert_eq!(matched.page, Page::NotFound, "path {path}");
            assert!(matched.params.is_empty());
        }
    }

    #[test]
    fn test_query_string_is_not_part_of_the_path() {
        let table = RouteTable::new();
        assert_eq!(table.resolve("/tasks?completed=1").page, Page::Tasks);
        assert_eq!(
            table.resolve("/tasks/7/edit?focus=title").param("id"),
            Some("7")
        );
    }

    #[test]
    fn test_route_names_are_stable() {
        assert_eq!(Page::TaskEdit.name(), "task-edit");
        assert_eq!(Page::NotFound.name(), "not-found");
    }
}
