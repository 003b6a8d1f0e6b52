//! Client-side route matching.
//!
//! Routes are declared in order; the first pattern that matches wins.
//! Patterns are `/`-separated segments: a literal segment matches itself,
//! a `:name` segment matches any single segment and captures it as a
//! parameter, and the pattern `*` matches any path (the 404 fallback).
//!
//! # Example
//!
//! ```
//! use reflex::route::Router;
//!
//! let router = Router::new()
//!     .route("home", "/").unwrap()
//!     .route("product", "/product/:id").unwrap()
//!     .route("not_found", "*").unwrap();
//!
//! let m = router.resolve("/product/42").unwrap();
//! assert_eq!(m.name, "product");
//! assert_eq!(m.params["id"], "42");
//!
//! assert_eq!(router.resolve("/missing").unwrap().name, "not_found");
//! ```

use std::collections::HashMap;

use log::trace;

use crate::error::RouteError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

#[derive(Debug, Clone)]
enum Pattern {
    Segments(Vec<Segment>),
    CatchAll,
}

#[derive(Debug, Clone)]
struct Route {
    name: String,
    pattern: Pattern,
}

/// A successful route resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Name of the matched route.
    pub name: String,
    /// Captured `:param` values.
    pub params: HashMap<String, String>,
}

/// Declaration-ordered route table.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    /// Create an empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route. Declaration order is match order.
    pub fn route(mut self, name: impl Into<String>, pattern: &str) -> Result<Self, RouteError> {
        let parsed = parse_pattern(pattern)?;
        self.routes.push(Route {
            name: name.into(),
            pattern: parsed,
        });
        Ok(self)
    }

    /// Resolve a path to the first matching route.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let segments = split_path(path);
        for route in &self.routes {
            if let Some(params) = match_pattern(&route.pattern, &segments) {
                trace!("route '{}' matched path '{}'", route.name, path);
                return Some(RouteMatch {
                    name: route.name.clone(),
                    params,
                });
            }
        }
        None
    }
}

/// Split a path into segments, ignoring empty segments from leading,
/// trailing or doubled slashes. `/` becomes the empty segment list.
fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn parse_pattern(pattern: &str) -> Result<Pattern, RouteError> {
    if pattern == "*" {
        return Ok(Pattern::CatchAll);
    }
    if !pattern.starts_with('/') {
        return Err(RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: "must start with '/' or be '*'".to_string(),
        });
    }

    let mut segments = Vec::new();
    for raw in split_path(pattern) {
        if let Some(name) = raw.strip_prefix(':') {
            if name.is_empty() {
                return Err(RouteError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: "parameter segment needs a name".to_string(),
                });
            }
            segments.push(Segment::Param(name.to_string()));
        } else if raw.contains('*') {
            return Err(RouteError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: "'*' is only valid as the whole pattern".to_string(),
            });
        } else {
            segments.push(Segment::Literal(raw.to_string()));
        }
    }
    Ok(Pattern::Segments(segments))
}

fn match_pattern(pattern: &Pattern, path: &[&str]) -> Option<HashMap<String, String>> {
    let segments = match pattern {
        Pattern::CatchAll => return Some(HashMap::new()),
        Pattern::Segments(segments) => segments,
    };
    if segments.len() != path.len() {
        return None;
    }

    let mut params = HashMap::new();
    for (segment, part) in segments.iter().zip(path) {
        match segment {
            Segment::Literal(literal) if literal == part => {}
            Segment::Literal(_) => return None,
            Segment::Param(name) => {
                params.insert(name.clone(), (*part).to_string());
            }
        }
    }
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_must_be_rooted() {
        assert!(parse_pattern("about").is_err());
        assert!(parse_pattern("/about").is_ok());
        assert!(parse_pattern("*").is_ok());
    }

    #[test]
    fn test_embedded_wildcard_is_rejected() {
        assert!(parse_pattern("/blog/*").is_err());
        assert!(parse_pattern("/:").is_err());
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        assert_eq!(split_path("/about/"), vec!["about"]);
        assert_eq!(split_path("/"), Vec::<&str>::new());
        assert_eq!(split_path("//blog//1"), vec!["blog", "1"]);
    }
}
