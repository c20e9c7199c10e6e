//! Request routing decisions based on authentication state.
//!
//! Pure policy: the web layer supplies the path, whether a session is
//! authenticated and the stored locale cookie, and performs the redirect.

use giantytalk_core::Locale;

use crate::config::AuthConfig;

/// Path prefixes that require an authenticated session.
pub const PROTECTED_PREFIXES: [&str; 3] = ["/dashboard", "/workspaces", "/glossaries"];

/// Pages that an authenticated user is sent away from.
pub const AUTH_ROUTES: [&str; 2] = ["/auth/sign-in", "/auth/sign-up"];

const PASSTHROUGH_PREFIXES: [&str; 3] = ["/static/", "/_next/", "/favicon.ico"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Pass,
    Redirect(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteGuard {
    default_locale: Locale,
}

impl RouteGuard {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            default_locale: config.default_locale,
        }
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    pub fn decide(&self, path: &str, authenticated: bool, cookie_locale: Option<&str>) -> RouteDecision {
        if PASSTHROUGH_PREFIXES.iter().any(|p| path.starts_with(p)) {
            return RouteDecision::Pass;
        }

        if path == "/" {
            let locale = cookie_locale
                .and_then(Locale::from_tag)
                .unwrap_or(self.default_locale);
            return self.redirect(path, format!("/{locale}"));
        }

        let (path_locale, rest) = Locale::strip_prefix(path);
        let locale = path_locale.unwrap_or(self.default_locale);

        if authenticated && AUTH_ROUTES.contains(&rest) {
            return self.redirect(path, format!("/{locale}/dashboard"));
        }

        if !authenticated && PROTECTED_PREFIXES.iter().any(|p| rest.starts_with(p)) {
            return self.redirect(path, format!("/{locale}/auth/sign-in"));
        }

        RouteDecision::Pass
    }

    /// Locale to persist in the locale cookie for this request, if any.
    ///
    /// Only set when the path names a locale and no cookie exists yet.
    pub fn locale_cookie_to_set(&self, path: &str, existing_cookie: Option<&str>) -> Option<Locale> {
        if existing_cookie.is_some() {
            return None;
        }
        Locale::strip_prefix(path).0
    }

    fn redirect(&self, from: &str, to: String) -> RouteDecision {
        tracing::debug!(from, to = %to, "route redirect");
        RouteDecision::Redirect(to)
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirect(to: &str) -> RouteDecision {
        RouteDecision::Redirect(to.to_string())
    }

    #[test]
    fn static_assets_always_pass() {
        let guard = RouteGuard::default();
        for path in ["/_next/chunk.js", "/static/logo.svg", "/favicon.ico"] {
            assert_eq!(guard.decide(path, false, None), RouteDecision::Pass);
        }
    }

    #[test]
    fn root_redirects_to_cookie_locale_or_default() {
        let guard = RouteGuard::default();
        assert_eq!(guard.decide("/", false, Some("vi")), redirect("/vi"));
        assert_eq!(guard.decide("/", true, Some("de")), redirect("/en"));
        assert_eq!(guard.decide("/", false, None), redirect("/en"));
    }

    #[test]
    fn protected_routes_require_session() {
        let guard = RouteGuard::default();
        assert_eq!(guard.decide("/ja/dashboard/users", false, None), redirect("/ja/auth/sign-in"));
        assert_eq!(guard.decide("/glossaries", false, None), redirect("/en/auth/sign-in"));
        assert_eq!(guard.decide("/vi/workspaces/create", true, None), RouteDecision::Pass);
    }

    #[test]
    fn auth_pages_bounce_signed_in_users() {
        let guard = RouteGuard::default();
        assert_eq!(guard.decide("/vi/auth/sign-in", true, None), redirect("/vi/dashboard"));
        assert_eq!(guard.decide("/auth/sign-up", true, None), redirect("/en/dashboard"));
        assert_eq!(guard.decide("/vi/auth/sign-in", false, None), RouteDecision::Pass);
        // Only exact auth routes, not the oauth callback.
        assert_eq!(guard.decide("/en/auth/callback", true, None), RouteDecision::Pass);
    }

    #[test]
    fn public_pages_pass() {
        let guard = RouteGuard::default();
        assert_eq!(guard.decide("/en", false, None), RouteDecision::Pass);
        assert_eq!(guard.decide("/en/conference/ABC123", false, None), RouteDecision::Pass);
    }

    #[test]
    fn default_locale_comes_from_config() {
        let config = AuthConfig {
            default_locale: Locale::Ja,
            ..AuthConfig::default()
        };
        let guard = RouteGuard::new(&config);
        assert_eq!(guard.decide("/dashboard", false, None), redirect("/ja/auth/sign-in"));
    }

    #[test]
    fn locale_cookie_only_set_once() {
        let guard = RouteGuard::default();
        assert_eq!(guard.locale_cookie_to_set("/vi/dashboard", None), Some(Locale::Vi));
        assert_eq!(guard.locale_cookie_to_set("/vi/dashboard", Some("en")), None);
        assert_eq!(guard.locale_cookie_to_set("/dashboard", None), None);
    }
}
