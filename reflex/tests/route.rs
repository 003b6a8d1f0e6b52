//! Tests for client-side route matching.

use reflex::route::Router;

fn site_router() -> Router {
    Router::new()
        .route("home", "/")
        .unwrap()
        .route("about", "/about")
        .unwrap()
        .route("product", "/product/:id")
        .unwrap()
        .route("blog_index", "/blog")
        .unwrap()
        .route("blog_post", "/blog/:id")
        .unwrap()
        .route("not_found", "*")
        .unwrap()
}

#[test]
fn test_static_routes() {
    let router = site_router();
    assert_eq!(router.resolve("/").unwrap().name, "home");
    assert_eq!(router.resolve("/about").unwrap().name, "about");
}

#[test]
fn test_param_capture() {
    let router = site_router();
    let m = router.resolve("/product/42").unwrap();
    assert_eq!(m.name, "product");
    assert_eq!(m.params["id"], "42");
}

#[test]
fn test_nested_index_and_child() {
    let router = site_router();
    assert_eq!(router.resolve("/blog").unwrap().name, "blog_index");
    let post = router.resolve("/blog/3").unwrap();
    assert_eq!(post.name, "blog_post");
    assert_eq!(post.params["id"], "3");
}

#[test]
fn test_catch_all_fallback() {
    let router = site_router();
    for path in ["/invalid-route", "/not-found", "/random-page", "/blog/1/extra"] {
        let m = router.resolve(path).unwrap();
        assert_eq!(m.name, "not_found", "path {path}");
        assert!(m.params.is_empty());
    }
}

#[test]
fn test_declaration_order_wins() {
    // A param route declared before a static route shadows it.
    let router = Router::new()
        .route("any_product", "/product/:id")
        .unwrap()
        .route("featured", "/product/featured")
        .unwrap();
    assert_eq!(router.resolve("/product/featured").unwrap().name, "any_product");
}

#[test]
fn test_trailing_slash_matches() {
    let router = site_router();
    assert_eq!(router.resolve("/about/").unwrap().name, "about");
}

#[test]
fn test_no_catch_all_means_none() {
    let router = Router::new().route("home", "/").unwrap();
    assert!(router.resolve("/missing").is_none());
}
