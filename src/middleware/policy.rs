//! Route policy table.
//!
//! Every gated operation is keyed by `(method, matched route pattern)`, with
//! scope entries (a route prefix, the controller-wide default) overridable
//! field-by-field by operation entries. Populated once at registration time,
//! read-only afterwards.

use std::collections::HashMap;

use axum::http::Method;

use crate::models::Role;

/// Effective policy for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutePolicy {
    pub public: bool,
    pub required_role: Option<Role>,
}

#[derive(Debug, Clone, Copy, Default)]
struct PolicyEntry {
    public: Option<bool>,
    required_role: Option<Role>,
}

#[derive(Debug, Default)]
pub struct PolicyTable {
    routes: HashMap<(Method, String), PolicyEntry>,
    scopes: HashMap<String, PolicyEntry>,
}

impl PolicyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark one operation public: neither gate inspects the request.
    pub fn public_route(mut self, method: Method, pattern: &str) -> Self {
        self.routes
            .entry((method, pattern.to_string()))
            .or_default()
            .public = Some(true);
        self
    }

    /// Require a role for one operation, overriding any scope default.
    pub fn route(mut self, method: Method, pattern: &str, role: Role) -> Self {
        self.routes
            .entry((method, pattern.to_string()))
            .or_default()
            .required_role = Some(role);
        self
    }

    /// Require a role for every operation under a route prefix.
    pub fn scope_role(mut self, prefix: &str, role: Role) -> Self {
        self.scopes
            .entry(prefix.to_string())
            .or_default()
            .required_role = Some(role);
        self
    }

    /// Resolve the effective policy for an operation.
    ///
    /// Operation-level entries win over scope-level entries field by field;
    /// an unregistered operation is non-public with no role requirement.
    pub fn resolve(&self, method: &Method, path: &str) -> RoutePolicy {
        let route = self.routes.get(&(method.clone(), path.to_string()));
        let scope = self.scope_entry(path);

        RoutePolicy {
            public: route
                .and_then(|e| e.public)
                .or(scope.and_then(|e| e.public))
                .unwrap_or(false),
            required_role: route
                .and_then(|e| e.required_role)
                .or(scope.and_then(|e| e.required_role)),
        }
    }

    fn scope_entry(&self, path: &str) -> Option<&PolicyEntry> {
        self.scopes
            .iter()
            .filter(|(prefix, _)| {
                path == prefix.as_str()
                    || (path.starts_with(prefix.as_str())
                        && path[prefix.len()..].starts_with('/'))
            })
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, entry)| entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PolicyTable {
        PolicyTable::new()
            .public_route(Method::POST, "/auth/signup")
            .route(Method::GET, "/auth/profile", Role::User)
            .scope_role("/breeds", Role::User)
            .route(Method::PATCH, "/breeds/:id", Role::Admin)
    }

    #[test]
    fn unregistered_operation_is_protected_with_no_role() {
        let policy = table().resolve(&Method::GET, "/cats");
        assert_eq!(
            policy,
            RoutePolicy {
                public: false,
                required_role: None
            }
        );
    }

    #[test]
    fn public_route_resolves_public() {
        let policy = table().resolve(&Method::POST, "/auth/signup");
        assert!(policy.public);
        assert_eq!(policy.required_role, None);
    }

    #[test]
    fn scope_default_applies_to_routes_under_prefix() {
        let policy = table().resolve(&Method::GET, "/breeds");
        assert_eq!(policy.required_role, Some(Role::User));
        assert!(!policy.public);

        let policy = table().resolve(&Method::GET, "/breeds/:id");
        assert_eq!(policy.required_role, Some(Role::User));
    }

    #[test]
    fn operation_entry_overrides_scope_default() {
        let policy = table().resolve(&Method::PATCH, "/breeds/:id");
        assert_eq!(policy.required_role, Some(Role::Admin));
    }

    #[test]
    fn scope_prefix_does_not_match_partial_segments() {
        let table = PolicyTable::new().scope_role("/breeds", Role::Admin);
        let policy = table.resolve(&Method::GET, "/breedsplus");
        assert_eq!(policy.required_role, None);
    }

    #[test]
    fn merge_is_field_by_field() {
        // A role-only operation entry inherits nothing for `public`; a
        // public-only entry inherits the scope role untouched.
        let table = PolicyTable::new()
            .scope_role("/widgets", Role::User)
            .public_route(Method::GET, "/widgets/ping");

        let policy = table.resolve(&Method::GET, "/widgets/ping");
        assert!(policy.public);
        assert_eq!(policy.required_role, Some(Role::User));
    }

    #[test]
    fn method_distinguishes_operations() {
        let policy = table().resolve(&Method::DELETE, "/breeds/:id");
        assert_eq!(policy.required_role, Some(Role::User));

        let policy = table().resolve(&Method::PATCH, "/breeds/:id");
        assert_eq!(policy.required_role, Some(Role::Admin));
    }
}
