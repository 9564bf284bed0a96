//! Application routes.
//!
//! Every view the plugin can show is addressed by a [`Route`]. Routes carry the
//! same paths as the web application so links and redirects read identically in
//! both clients.

use std::fmt;

/// A navigable view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Landing page with the hero search and the latest jobs feed (`/`).
    #[default]
    Home,
    /// Search results for the committed query (`/browse`).
    Browse,
    /// Full job list (`/jobs`).
    Jobs,
    /// Detail page for one posting (`/description/{id}`).
    Description(String),
    Login,
    Signup,
    Profile,
    /// Recruiter company administration (`/admin/companies`).
    AdminCompanies,
    /// Recruiter job administration (`/admin/jobs`).
    AdminJobs,
}

impl Route {
    /// Returns the path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Browse => "/browse".to_string(),
            Self::Jobs => "/jobs".to_string(),
            Self::Description(id) => format!("/description/{id}"),
            Self::Login => "/login".to_string(),
            Self::Signup => "/signup".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::AdminCompanies => "/admin/companies".to_string(),
            Self::AdminJobs => "/admin/jobs".to_string(),
        }
    }

    /// Parses a path back into a route.
    ///
    /// Returns `None` for paths the plugin does not know, including
    /// `/description/` without an identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use hirepoint::domain::Route;
    ///
    /// assert_eq!(Route::parse("/description/42"), Some(Route::Description("42".into())));
    /// assert_eq!(Route::parse("/nowhere"), None);
    /// ```
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let route = match path {
            "/" => Self::Home,
            "/browse" => Self::Browse,
            "/jobs" => Self::Jobs,
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            "/profile" => Self::Profile,
            "/admin/companies" => Self::AdminCompanies,
            "/admin/jobs" => Self::AdminJobs,
            other => {
                let id = other.strip_prefix("/description/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Self::Description(id.to_string())
            }
        };
        Some(route)
    }

    /// Page title shown in the header.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Browse => "Search Results",
            Self::Jobs => "Jobs",
            Self::Description(_) => "Job Description",
            Self::Login => "Login",
            Self::Signup => "Signup",
            Self::Profile => "Profile",
            Self::AdminCompanies => "Companies",
            Self::AdminJobs => "Admin Jobs",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
