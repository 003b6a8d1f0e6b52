//! Exercises 16-20: client-side routing.

use reflex::route::{RouteMatch, Router};
use reflex::state::State;

/// Exercise 16: home and about pages.
pub fn basic_router() -> Router {
    Router::new()
        .route("home", "/")
        .expect("valid pattern")
        .route("about", "/about")
        .expect("valid pattern")
}

/// A product for the dynamic-route lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
}

const PRODUCTS: &[Product] = &[
    Product { id: "1", name: "Laptop" },
    Product { id: "2", name: "Headphones" },
    Product { id: "3", name: "Keyboard" },
];

/// Exercise 17: product list plus a dynamic details route.
pub fn product_router() -> Router {
    Router::new()
        .route("product_list", "/")
        .expect("valid pattern")
        .route("product_details", "/product/:id")
        .expect("valid pattern")
}

/// Exercise 17: resolve a path to the product it points at.
pub fn product_for(router: &Router, path: &str) -> Option<Product> {
    let matched = router.resolve(path)?;
    if matched.name != "product_details" {
        return None;
    }
    let id = matched.params.get("id")?;
    PRODUCTS.iter().find(|p| p.id == id).cloned()
}

/// Exercise 18: a navigation bar tracking the active route.
#[derive(Debug, Clone)]
pub struct NavBar {
    router: Router,
    current: State<String>,
}

impl NavBar {
    /// A bar over the given router, starting at `/`.
    pub fn new(router: Router) -> Self {
        Self {
            router,
            current: State::new("/".to_string()),
        }
    }

    /// Link click handler.
    pub fn navigate(&self, path: impl Into<String>) {
        self.current.set(path.into());
    }

    pub fn current_path(&self) -> String {
        self.current.get()
    }

    /// The resolved route for the current path.
    pub fn active(&self) -> Option<RouteMatch> {
        self.router.resolve(&self.current.get())
    }

    /// Whether the link for `route_name` should be highlighted.
    pub fn is_active(&self, route_name: &str) -> bool {
        self.active().is_some_and(|m| m.name == route_name)
    }
}

/// Exercise 19: known routes plus a wildcard 404 fallback.
pub fn router_with_not_found() -> Router {
    Router::new()
        .route("home", "/")
        .expect("valid pattern")
        .route("about", "/about")
        .expect("valid pattern")
        .route("not_found", "*")
        .expect("valid pattern")
}

/// A blog post for the nested-routes lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
}

const POSTS: &[BlogPost] = &[
    BlogPost {
        id: "1",
        title: "Getting Started",
        excerpt: "Learn the basics and build your first component.",
    },
    BlogPost {
        id: "2",
        title: "Understanding State",
        excerpt: "A deep dive into view state and how to manage it.",
    },
    BlogPost {
        id: "3",
        title: "Router Guide",
        excerpt: "Master navigation in single-page applications.",
    },
];

/// Exercise 20: index route for the list, child route for one post.
pub fn blog_router() -> Router {
    Router::new()
        .route("blog_index", "/blog")
        .expect("valid pattern")
        .route("blog_post", "/blog/:id")
        .expect("valid pattern")
}

/// Exercise 20: all posts, for the index page.
pub fn blog_posts() -> &'static [BlogPost] {
    POSTS
}

/// Exercise 20: resolve a path to the post it points at.
pub fn blog_post_for(router: &Router, path: &str) -> Option<BlogPost> {
    let matched = router.resolve(path)?;
    if matched.name != "blog_post" {
        return None;
    }
    let id = matched.params.get("id")?;
    POSTS.iter().find(|p| p.id == id).cloned()
}
