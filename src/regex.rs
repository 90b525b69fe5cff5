//! Variable route matching backed by the `regex` crate.
//!
//! All patterns registered for a method are combined into a single
//! [`RegexSet`], so a lookup is one pass over the path to find the candidate
//! routes, followed by a capture pass with the winning route only.

use crate::{InsertError, Match, Params, VariableRouteMatcher};

use ::regex::{Regex, RegexSet};
use std::fmt;

/// Compiled variable routes for a single method.
///
/// Each pattern is a regular expression that must match the entire path.
/// Named capture groups become route parameters; unnamed groups are ignored.
/// When several patterns match, the one registered first wins.
///
/// ```rust
/// use dispatchit::{RegexMatcher, RegexRoutes, VariableRouteMatcher};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let routes = RegexRoutes::new([
///     (r"/users/(?P<id>\d+)", "user"),
///     (r"/users/(?P<name>[^/]+)", "user by name"),
/// ])?;
///
/// let matched = RegexMatcher.matches(&routes, "/users/42").unwrap();
/// assert_eq!(*matched.handler, "user");
/// assert_eq!(matched.params.get("id"), Some("42"));
///
/// assert!(RegexMatcher.matches(&routes, "/users/42/posts").is_none());
/// # Ok(())
/// # }
/// ```
pub struct RegexRoutes<H> {
    set: RegexSet,
    routes: Vec<RegexRoute<H>>,
}

struct RegexRoute<H> {
    pattern: String,
    regex: Regex,
    handler: H,
}

impl<H> RegexRoutes<H> {
    /// Compiles an ordered list of `(pattern, handler)` pairs.
    pub fn new<I, P>(routes: I) -> Result<Self, InsertError>
    where
        I: IntoIterator<Item = (P, H)>,
        P: AsRef<str>,
    {
        let mut sources = Vec::new();
        let mut compiled = Vec::new();

        for (pattern, handler) in routes {
            let pattern = pattern.as_ref();
            let source = anchored(pattern);
            let regex = Regex::new(&source).map_err(|source| InsertError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })?;

            sources.push(source);
            compiled.push(RegexRoute {
                pattern: pattern.to_owned(),
                regex,
                handler,
            });
        }

        // every pattern compiled on its own, so this can only trip the size limit
        let set = RegexSet::new(&sources).map_err(|source| InsertError::InvalidPattern {
            pattern: sources.join("|"),
            source,
        })?;

        Ok(RegexRoutes {
            set,
            routes: compiled,
        })
    }

    /// Returns the number of compiled routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no routes were compiled.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns the registered patterns, in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.pattern.as_str())
    }

    fn find(&self, path: &str) -> Option<Match<'_, H>> {
        let index = self.set.matches(path).into_iter().next()?;
        let route = &self.routes[index];
        let captures = route.regex.captures(path)?;

        let mut params = Params::new();
        for name in route.regex.capture_names().flatten() {
            // optional groups that did not participate are left out
            if let Some(value) = captures.name(name) {
                params.push(name, value.as_str());
            }
        }

        Some(Match {
            handler: &route.handler,
            params,
        })
    }
}

impl<H> fmt::Debug for RegexRoutes<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.patterns()).finish()
    }
}

fn anchored(pattern: &str) -> String {
    format!("^(?:{})$", pattern)
}

/// Matches paths against [`RegexRoutes`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexMatcher;

impl<H> VariableRouteMatcher<H> for RegexMatcher {
    type Data = RegexRoutes<H>;

    fn matches<'d>(&self, data: &'d Self::Data, path: &str) -> Option<Match<'d, H>> {
        data.find(path)
    }
}
