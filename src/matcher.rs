use crate::Params;

/// A successful variable-route match: the registered handler and the
/// parameters captured from the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'d, H> {
    /// The handler registered for the matched route.
    pub handler: &'d H,
    /// Parameters extracted from the path, in capture order.
    pub params: Params,
}

/// Matches a path against one method's compiled variable routes.
///
/// The compiled form is opaque to the [`Dispatcher`](crate::Dispatcher), which
/// only stores it per method and hands it back here. Implementations decide how
/// routes are compiled and how overlapping patterns are resolved.
///
/// `matches` is called once per method during primary resolution and up to
/// once per registered method when computing the allowed methods of a path,
/// so it must be pure and cheap enough to run several times per request.
/// Nothing is cached between calls.
///
/// ```rust
/// use dispatchit::{Match, Params, VariableRouteMatcher};
///
/// // Matches any path under a fixed prefix, capturing the rest.
/// struct PrefixMatcher;
///
/// impl<H> VariableRouteMatcher<H> for PrefixMatcher {
///     type Data = (&'static str, H);
///
///     fn matches<'d>(&self, data: &'d Self::Data, path: &str) -> Option<Match<'d, H>> {
///         let rest = path.strip_prefix(data.0)?;
///         let mut params = Params::new();
///         params.push("rest", rest);
///         Some(Match { handler: &data.1, params })
///     }
/// }
///
/// let data = ("/static/", 1);
/// let found = PrefixMatcher.matches(&data, "/static/app.js").unwrap();
/// assert_eq!(*found.handler, 1);
/// assert_eq!(found.params.get("rest"), Some("app.js"));
/// ```
pub trait VariableRouteMatcher<H> {
    /// The compiled pattern data for a single method.
    type Data;

    /// Returns the matching route for `path`, or `None` if no route matches.
    fn matches<'d>(&self, data: &'d Self::Data, path: &str) -> Option<Match<'d, H>>;
}
