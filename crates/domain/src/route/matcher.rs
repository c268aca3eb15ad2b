//! Matching an edited path back to a route definition

use regex::Regex;

use super::Route;
use super::path::{PARAM_SEGMENT, extract_param_names};
use crate::request::{HttpMethod, KeyValueParameter, RequestKind};

/// A route path pattern compiled to an anchored regular expression.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    regex: Regex,
    names: Vec<String>,
}

impl RoutePattern {
    /// Compiles a pattern, turning each `:name` or `{name}` segment into a
    /// single-segment capture group. `:name?` makes the segment optional,
    /// `*` matches any run of characters and a trailing `/*` also matches
    /// the bare prefix. Other literal text is matched verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting expression is rejected by the
    /// regex engine (for example when it exceeds the size limit).
    pub fn compile(pattern: &str) -> Result<Self, regex::Error> {
        let (body, wildcard_tail) = pattern
            .strip_suffix("/*")
            .map_or((pattern, false), |prefix| (prefix, true));

        let mut source = String::from("^");
        let mut names = Vec::new();
        let mut last = 0;

        for captures in PARAM_SEGMENT.captures_iter(body) {
            let whole = captures.get(0);
            let name = captures.get(1).or_else(|| captures.get(2));
            let (Some(whole), Some(name)) = (whole, name) else {
                continue;
            };
            push_literal(&mut source, &body[last..whole.start()]);
            last = whole.end();

            if body[last..].starts_with('?') {
                source.push_str("(?:/([^/]+))?");
                last += 1;
            } else {
                source.push_str("/([^/]+)");
            }
            names.push(name.as_str().to_string());
        }
        push_literal(&mut source, &body[last..]);
        if wildcard_tail {
            source.push_str("(?:/.*)?");
        }
        source.push('$');

        Ok(Self {
            regex: Regex::new(&source)?,
            names,
        })
    }

    /// Returns the parameter names in pattern order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Matches `path`, returning `(name, value)` pairs for each parameter.
    ///
    /// A captured value that is the literal `:name` (or `{name}`) token is
    /// reported as blank: the user has not filled that segment in yet.
    #[must_use]
    pub fn captures(&self, path: &str) -> Option<Vec<(String, String)>> {
        let captures = self.regex.captures(path)?;
        let values = self
            .names
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let raw = captures.get(index + 1).map_or("", |m| m.as_str());
                let value = if is_placeholder(raw, name) { "" } else { raw };
                (name.clone(), value.to_string())
            })
            .collect();
        Some(values)
    }
}

fn push_literal(source: &mut String, literal: &str) {
    for (index, piece) in literal.split('*').enumerate() {
        if index > 0 {
            source.push_str(".*");
        }
        source.push_str(&regex::escape(piece));
    }
}

fn is_placeholder(value: &str, name: &str) -> bool {
    value.strip_prefix(':') == Some(name)
        || value
            .strip_prefix('{')
            .and_then(|v| v.strip_suffix('}'))
            == Some(name)
}

/// The outcome of a successful route match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    /// The matched route
    pub route: &'a Route,
    /// Parameter values in pattern order
    pub param_values: Vec<(String, String)>,
}

impl RouteMatch<'_> {
    /// Builds path parameter rows from the matched values.
    #[must_use]
    pub fn path_param_rows(&self) -> Vec<KeyValueParameter> {
        self.param_values
            .iter()
            .map(|(name, value)| KeyValueParameter::matched_path_param(name, value))
            .collect()
    }
}

/// Finds the route that best matches `path` for the given method and kind.
///
/// Registered routes are searched before unregistered ones. Within each
/// tier an exact path match wins over a pattern match, and pattern matches
/// on discovered routes win over matches on user drafts. Any query string
/// or fragment on `path` is ignored.
#[must_use]
pub fn match_route<'a>(
    routes: &'a [Route],
    path: &str,
    method: HttpMethod,
    request_kind: RequestKind,
) -> Option<RouteMatch<'a>> {
    let path = strip_query(path);
    let candidates: Vec<&Route> = routes
        .iter()
        .filter(|route| route.accepts(method, request_kind))
        .collect();

    [true, false].into_iter().find_map(|registered| {
        let tier: Vec<&Route> = candidates
            .iter()
            .copied()
            .filter(|route| route.currently_registered == registered)
            .collect();
        match_in_tier(&tier, path)
    })
}

fn match_in_tier<'a>(tier: &[&'a Route], path: &str) -> Option<RouteMatch<'a>> {
    if let Some(route) = tier.iter().copied().find(|route| route.path == path) {
        tracing::trace!(route = %route.path, "exact route match");
        let param_values = extract_param_names(&route.path)
            .into_iter()
            .map(|name| (name, String::new()))
            .collect();
        return Some(RouteMatch {
            route,
            param_values,
        });
    }

    let mut draft_match = None;
    for route in tier.iter().copied() {
        let pattern = match RoutePattern::compile(&route.path) {
            Ok(pattern) => pattern,
            Err(error) => {
                tracing::warn!(route = %route.path, %error, "skipping unmatchable route pattern");
                continue;
            }
        };
        let Some(param_values) = pattern.captures(path) else {
            continue;
        };
        tracing::trace!(route = %route.path, draft = route.is_draft, "pattern route match");

        let found = RouteMatch {
            route,
            param_values,
        };
        if !route.is_draft {
            return Some(found);
        }
        if draft_match.is_none() {
            draft_match = Some(found);
        }
    }
    draft_match
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}
