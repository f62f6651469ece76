//! Tests for the routing system
//!
//! Validates route definitions and path recognition for the storefront.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use yew_router::Routable;

    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::Admin.to_path(), "/admin");
        assert_eq!(MainRoute::NotFound.to_path(), "/404");
    }

    #[test]
    fn test_route_recognition() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Home));
        assert_eq!(MainRoute::recognize("/admin"), Some(MainRoute::Admin));
        assert_eq!(
            MainRoute::recognize("/does-not-exist"),
            Some(MainRoute::NotFound)
        );
    }

    #[test]
    fn test_route_equality() {
        assert_eq!(MainRoute::Home, MainRoute::Home);
        assert_ne!(MainRoute::Home, MainRoute::Admin);
    }
}
