//! Site routes and the in-app router.

pub mod pages;

/// A page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    About,
    Projects,
    NotFound,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/home" => Route::Landing,
            "/about" => Route::About,
            "/projects" => Route::Projects,
            _ => Route::NotFound,
        }
    }

    /// Title shown in the header tab bar.
    pub fn title(self) -> &'static str {
        match self {
            Route::Landing => "Home",
            Route::About => "About",
            Route::Projects => "Projects",
            Route::NotFound => "Not Found",
        }
    }
}

/// Header navigation, left to right.
pub const NAV_ROUTES: [(Route, &str); 3] = [
    (Route::Landing, "/"),
    (Route::About, "/about"),
    (Route::Projects, "/projects"),
];

/// Client-side router: tracks the current path and a back-history.
#[derive(Debug, Clone)]
pub struct Router {
    current: String,
    history: Vec<String>,
}

impl Router {
    pub fn new(start: &str) -> Self {
        Self {
            current: normalize(start),
            history: Vec::new(),
        }
    }

    pub fn navigate_to(&mut self, path: &str) {
        let path = normalize(path);
        if path == self.current {
            return;
        }
        tracing::info!(from = %self.current, to = %path, "route change");
        let previous = std::mem::replace(&mut self.current, path);
        self.history.push(previous);
    }

    /// Go back one entry. Returns false when there is no history.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                tracing::info!(from = %self.current, to = %previous, "route back");
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn current_path(&self) -> &str {
        &self.current
    }

    pub fn route(&self) -> Route {
        Route::from_path(&self.current)
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

fn normalize(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// Join the site base URL with a route path.
pub fn page_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    if path == "/" {
        format!("{}/", base)
    } else {
        format!("{}{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_from_path() {
        assert_eq!(Route::from_path("/"), Route::Landing);
        assert_eq!(Route::from_path("/home"), Route::Landing);
        assert_eq!(Route::from_path("/about/"), Route::About);
        assert_eq!(Route::from_path("/projects"), Route::Projects);
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
    }

    #[test]
    fn test_router_history() {
        let mut router = Router::new("/");
        router.navigate_to("/about");
        router.navigate_to("/about");
        router.navigate_to("projects");
        assert_eq!(router.current_path(), "/projects");
        assert!(router.back());
        assert_eq!(router.current_path(), "/about");
        assert!(router.back());
        assert_eq!(router.route(), Route::Landing);
        assert!(!router.back());
    }

    #[test]
    fn test_page_url() {
        assert_eq!(page_url("https://example.com/", "/"), "https://example.com/");
        assert_eq!(page_url("https://example.com", "/about"), "https://example.com/about");
    }
}
