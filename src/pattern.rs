//! Route templates for dynamic pages.
//!
//! A page's `pattern` describes the trailing, dynamic part of its URL,
//! relative to its parent's composed path. The matcher prefixes it with the
//! parent path and compiles the result into a [`RoutePattern`].
//!
//! # Syntax
//!
//! Templates are `/`-separated components. Each component is a literal or a
//! parameter:
//!
//! | Component | Matches                                   |
//! |-----------|-------------------------------------------|
//! | `orders`  | exactly `orders`                          |
//! | `:id`     | one non-empty component                   |
//! | `:id?`    | zero or one component                     |
//! | `:path+`  | one or more components (joined with `/`)  |
//! | `:path*`  | zero or more components                   |
//!
//! Matching is anchored: the whole path must be consumed.
//!
//! ```
//! use dashboard_navigator::RoutePattern;
//!
//! let pattern = RoutePattern::parse("/users/:user/files/:path*").unwrap();
//! let params = pattern.matches("/users/ada/files/docs/cv.pdf").unwrap();
//! assert_eq!(params.get("user"), Some(&"ada".to_string()));
//! assert_eq!(params.get("path"), Some(&"docs/cv.pdf".to_string()));
//!
//! assert!(pattern.matches("/users/ada").is_none());
//! ```

use crate::error::NavigationError;
use crate::params::RouteParams;
use std::fmt;

/// How many path components a parameter consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    /// `:name`
    One,
    /// `:name?`
    Optional,
    /// `:name+`
    OneOrMore,
    /// `:name*`
    ZeroOrMore,
}

impl Repeat {
    fn bounds(self, available: usize) -> (usize, usize) {
        match self {
            Repeat::One => (1, 1),
            Repeat::Optional => (0, 1),
            Repeat::OneOrMore => (1, available),
            Repeat::ZeroOrMore => (0, available),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Component {
    Literal(String),
    Param { name: String, repeat: Repeat },
}

/// A compiled route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    source: String,
    components: Vec<Component>,
}

impl RoutePattern {
    /// Compile a template such as `"/orders/:id"`.
    ///
    /// Leading and trailing slashes are ignored; `"/"` and `""` compile to
    /// the root template that only matches `/`.
    pub fn parse(template: &str) -> Result<Self, NavigationError> {
        let body = template.trim_start_matches('/').trim_end_matches('/');
        let invalid = |reason: &str| NavigationError::InvalidPattern {
            pattern: template.to_string(),
            reason: reason.to_string(),
        };

        let mut components = Vec::new();
        if !body.is_empty() {
            for raw in body.split('/') {
                if raw.is_empty() {
                    return Err(invalid("empty path component"));
                }
                components.push(parse_component(raw).map_err(invalid)?);
            }
        }

        Ok(Self {
            source: template.to_string(),
            components,
        })
    }

    /// The template this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Names of all parameters, in template order.
    pub fn param_names(&self) -> Vec<&str> {
        self.components
            .iter()
            .filter_map(|component| match component {
                Component::Param { name, .. } => Some(name.as_str()),
                Component::Literal(_) => None,
            })
            .collect()
    }

    /// `true` if the template has at least one parameter.
    pub fn is_dynamic(&self) -> bool {
        self.components
            .iter()
            .any(|component| matches!(component, Component::Param { .. }))
    }

    /// Match a whole absolute path, returning the bound parameters.
    ///
    /// Paths that do not start with `/` never match.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let body = path.strip_prefix('/')?;
        let segments: Vec<&str> = if body.is_empty() {
            vec![]
        } else {
            body.split('/').collect()
        };
        self.match_segments(&segments)
    }

    /// Match pre-split path components. Empty components never match.
    pub fn match_segments(&self, segments: &[&str]) -> Option<RouteParams> {
        let mut params = RouteParams::new();
        if match_from(&self.components, segments, &mut params) {
            Some(params)
        } else {
            None
        }
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn parse_component(raw: &str) -> Result<Component, &'static str> {
    let Some(param) = raw.strip_prefix(':') else {
        return Ok(Component::Literal(raw.to_string()));
    };

    let (name, repeat) = match param.chars().last() {
        Some('?') => (&param[..param.len() - 1], Repeat::Optional),
        Some('+') => (&param[..param.len() - 1], Repeat::OneOrMore),
        Some('*') => (&param[..param.len() - 1], Repeat::ZeroOrMore),
        _ => (param, Repeat::One),
    };

    if name.is_empty() {
        return Err("empty parameter name");
    }
    if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err("parameter names may only contain letters, digits and '_'");
    }

    Ok(Component::Param {
        name: name.to_string(),
        repeat,
    })
}

/// Greedy match with backtracking; `params` is only written on success.
fn match_from(components: &[Component], segments: &[&str], params: &mut RouteParams) -> bool {
    let Some((component, rest)) = components.split_first() else {
        return segments.is_empty();
    };

    match component {
        Component::Literal(literal) => match segments.split_first() {
            Some((segment, remaining)) if *segment == literal.as_str() => {
                match_from(rest, remaining, params)
            }
            _ => false,
        },
        Component::Param { name, repeat } => {
            let (min, max) = repeat.bounds(segments.len());
            let max = max.min(segments.len());
            if min > max {
                return false;
            }

            for take in (min..=max).rev() {
                let (bound, remaining) = segments.split_at(take);
                if bound.iter().any(|segment| segment.is_empty()) {
                    continue;
                }

                let mut attempt = params.clone();
                if take > 0 {
                    attempt.insert(name.clone(), bound.join("/"));
                }
                if match_from(rest, remaining, &mut attempt) {
                    *params = attempt;
                    return true;
                }
            }
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_param() {
        let pattern = RoutePattern::parse("/orders/:id").unwrap();
        let params = pattern.matches("/orders/123").unwrap();
        assert_eq!(params.get("id"), Some(&"123".to_string()));
        assert_eq!(pattern.param_names(), vec!["id"]);
        assert!(pattern.is_dynamic());
    }

    #[test]
    fn test_param_requires_non_empty_component() {
        let pattern = RoutePattern::parse("/orders/:id").unwrap();
        assert!(pattern.matches("/orders/").is_none());
        assert!(pattern.matches("/orders").is_none());
        assert!(pattern.matches("/orders//x").is_none());
    }

    #[test]
    fn test_anchored_match() {
        let pattern = RoutePattern::parse("/orders/:id").unwrap();
        assert!(pattern.matches("/orders/1/items").is_none());
        assert!(pattern.matches("/archive/orders/1").is_none());
        assert!(pattern.matches("/orders/1/").is_none());
    }

    #[test]
    fn test_relative_path_never_matches() {
        let pattern = RoutePattern::parse("orders/:id").unwrap();
        assert!(pattern.matches("orders/1").is_none());
        assert!(pattern.matches("").is_none());
        assert!(pattern.matches("/orders/1").is_some());
    }

    #[test]
    fn test_literal_mismatch() {
        let pattern = RoutePattern::parse("/users/:id/profile").unwrap();
        assert!(pattern.matches("/users/1/settings").is_none());
        assert!(pattern.matches("/users/1/profile").is_some());
    }

    #[test]
    fn test_optional_param() {
        let pattern = RoutePattern::parse("/reports/:year?").unwrap();
        assert!(pattern.matches("/reports").unwrap().is_empty());
        assert_eq!(
            pattern.matches("/reports/2024").unwrap().get_as::<u32>("year"),
            Some(2024)
        );
        assert!(pattern.matches("/reports/2024/q1").is_none());
    }

    #[test]
    fn test_one_or_more() {
        let pattern = RoutePattern::parse("/files/:path+").unwrap();
        assert!(pattern.matches("/files").is_none());
        assert_eq!(
            pattern.matches("/files/a/b/c").unwrap().get("path"),
            Some(&"a/b/c".to_string())
        );
    }

    #[test]
    fn test_zero_or_more_backtracks() {
        let pattern = RoutePattern::parse("/docs/:rest*/edit").unwrap();
        assert_eq!(
            pattern.matches("/docs/a/b/edit").unwrap().get("rest"),
            Some(&"a/b".to_string())
        );
        assert!(pattern.matches("/docs/edit").unwrap().is_empty());
        assert!(pattern.matches("/docs/a/b").is_none());
    }

    #[test]
    fn test_root_template() {
        let pattern = RoutePattern::parse("/").unwrap();
        assert!(pattern.matches("/").is_some());
        assert!(pattern.matches("/a").is_none());
        assert!(!pattern.is_dynamic());
    }

    #[test]
    fn test_invalid_templates() {
        assert!(matches!(
            RoutePattern::parse("/orders/:"),
            Err(NavigationError::InvalidPattern { .. })
        ));
        assert!(RoutePattern::parse("/orders/:?").is_err());
        assert!(RoutePattern::parse("/orders/:a-b").is_err());
        assert!(RoutePattern::parse("/orders//:id").is_err());
    }

    #[test]
    fn test_display_is_source() {
        let pattern = RoutePattern::parse("orders/:id").unwrap();
        assert_eq!(pattern.to_string(), "orders/:id");
        assert_eq!(pattern.as_str(), "orders/:id");
    }
}
