#![allow(dead_code)]

use pathtrie::PathRouter;
use std::sync::Arc;

// ============================================================================
// Test Value Types
// ============================================================================

/// Stand-in for what a dispatcher would store per route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
}

pub fn endpoint(name: &'static str) -> Endpoint {
    Endpoint { name }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Build a router from `(pattern, value)` pairs, panicking on rejection.
pub fn router_with<V: Clone>(routes: &[(&str, V)]) -> PathRouter<V> {
    let router = PathRouter::new();
    for (pattern, value) in routes {
        router
            .insert(pattern, value.clone())
            .unwrap_or_else(|e| panic!("failed to insert {pattern:?}: {e}"));
    }
    router
}

/// A router shaped like a small HTTP service.
pub fn service_router() -> Arc<PathRouter<Endpoint>> {
    Arc::new(router_with(&[
        ("/", endpoint("index")),
        ("/health", endpoint("health")),
        ("/api/v1/users", endpoint("list-users")),
        ("/api/v1/users/*", endpoint("get-user")),
        ("/api/v1/users/*/orders", endpoint("user-orders")),
        ("/static/**", endpoint("assets")),
    ]))
}

pub fn matched<V>(router: &PathRouter<V>, path: &str) -> Option<V>
where
    V: Clone,
{
    router.resolve(path).matched()
}
