use log::debug;

/// One navigable view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Splash,
    Login,
    Signup,
    Home,
    Categories,
    Category(String),
    Search,
    Profile,
    EditProfile,
    DarkMode,
    Language,
    Privacy,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Splash => "/splash".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Home => "/home".to_string(),
            Route::Categories => "/categories".to_string(),
            Route::Category(slug) => format!("/categories/{}", slug),
            Route::Search => "/search".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::EditProfile => "/profile/edit".to_string(),
            Route::DarkMode => "/profile/darkmode".to_string(),
            Route::Language => "/profile/language".to_string(),
            Route::Privacy => "/profile/privacy".to_string(),
        }
    }

    /// Tabs of the main navigation bar
    pub fn is_tab(&self) -> bool {
        matches!(self, Route::Home | Route::Categories | Route::Search | Route::Profile)
    }
}

/// Stack of visited routes
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Splash)
    }
}

impl Navigator {
    pub fn new(initial: Route) -> Self {
        Self { stack: vec![initial] }
    }

    pub fn current(&self) -> &Route {
        // The stack is never empty: back() refuses to pop the last route
        &self.stack[self.stack.len() - 1]
    }

    pub fn push(&mut self, route: Route) {
        debug!("push {}", route.path());
        self.stack.push(route);
    }

    /// Replaces the current route, so back() can't return to it
    pub fn replace(&mut self, route: Route) {
        debug!("replace {} -> {}", self.current().path(), route.path());
        let last = self.stack.len() - 1;
        self.stack[last] = route;
    }

    /// Pops the current route; false at the root
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
