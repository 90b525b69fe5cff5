use crate::{AllowedMethods, DispatchResult, Params, RegexMatcher, RoutingTable, VariableRouteMatcher};

/// The pseudo-method for routes that match regardless of the request method.
///
/// Wildcard routes are only tried after every attempt with the concrete
/// request method has failed.
pub const ANY: &str = "*";

const HEAD: &str = "HEAD";
const GET: &str = "GET";

/// Resolves a method and path against an immutable [`RoutingTable`].
///
/// The table is built ahead of time and owned by the dispatcher. Variable
/// routes are matched through the `M` strategy, which is the only component
/// that understands the compiled data stored in the table.
///
/// A dispatcher holds no interior state, so a single instance can be shared
/// between threads and queried concurrently.
///
/// ```rust
/// use dispatchit::{DispatchResult, Dispatcher, RegexMatcher, RegexRoutes, RoutingTable};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut table = RoutingTable::new();
/// table.insert_static("GET", "/widgets", "list widgets")?;
/// table.insert_static("POST", "/widgets", "create widget")?;
/// table.insert_variable("GET", RegexRoutes::new([(r"/widgets/(?P<id>\d+)", "show widget")])?)?;
///
/// let dispatcher = Dispatcher::new(table, RegexMatcher);
///
/// // HEAD reuses the GET routes
/// match dispatcher.dispatch("HEAD", "/widgets/7") {
///     DispatchResult::Found { handler, params } => {
///         assert_eq!(*handler, "show widget");
///         assert_eq!(params.get("id"), Some("7"));
///     }
///     _ => unreachable!(),
/// }
///
/// match dispatcher.dispatch("DELETE", "/widgets") {
///     DispatchResult::MethodNotAllowed { allowed } => {
///         assert!(allowed.contains("GET"));
///         assert!(allowed.contains("POST"));
///     }
///     _ => unreachable!(),
/// }
///
/// assert_eq!(dispatcher.dispatch("GET", "/gadgets"), DispatchResult::NotFound);
/// # Ok(())
/// # }
/// ```
pub struct Dispatcher<H, M = RegexMatcher>
where
    M: VariableRouteMatcher<H>,
{
    table: RoutingTable<H, M::Data>,
    matcher: M,

    /// If enabled, a `HEAD` request that matches no `HEAD` route is resolved
    /// against the `GET` routes instead. The caller is expected to drop the
    /// response body.
    pub head_fallback: bool,

    /// If enabled, a request that matches no route is checked against every
    /// other registered method. When the path matches under any of them, the
    /// verdict is [`DispatchResult::MethodNotAllowed`] carrying those methods.
    /// Otherwise, or when disabled, the verdict is [`DispatchResult::NotFound`].
    pub handle_method_not_allowed: bool,
}

impl<H, M> Dispatcher<H, M>
where
    M: VariableRouteMatcher<H>,
{
    /// Create a dispatcher over a fully built table.
    pub fn new(table: RoutingTable<H, M::Data>, matcher: M) -> Self {
        Self {
            table,
            matcher,
            head_fallback: true,
            handle_method_not_allowed: true,
        }
    }

    /// Returns the routing table.
    pub fn table(&self) -> &RoutingTable<H, M::Data> {
        &self.table
    }

    /// Returns the variable route matcher.
    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    /// Resolve a request method and path.
    ///
    /// Resolution tries, in order, and stops at the first match:
    ///
    /// 1. the requested method, static routes before variable routes
    /// 2. `GET`, if the request method is `HEAD`
    /// 3. the [`ANY`] pseudo-method
    ///
    /// If nothing matches, the other registered methods are checked to decide
    /// between [`MethodNotAllowed`](DispatchResult::MethodNotAllowed) and
    /// [`NotFound`](DispatchResult::NotFound).
    ///
    /// Methods are compared case-sensitively and the path is used as given.
    pub fn dispatch<'a>(&'a self, method: &str, path: &str) -> DispatchResult<'a, H> {
        if let Some(found) = self.resolve(method, path) {
            return found;
        }

        if self.head_fallback && method == HEAD {
            if let Some(found) = self.resolve(GET, path) {
                trace!("{} {}: resolved through GET", method, path);
                return found;
            }
        }

        if method != ANY {
            if let Some(found) = self.resolve(ANY, path) {
                trace!("{} {}: resolved through wildcard route", method, path);
                return found;
            }
        }

        if self.handle_method_not_allowed {
            let allowed = self.allowed_methods(method, path);
            if !allowed.is_empty() {
                debug!("{} {}: method not allowed, allowed: {:?}", method, path, allowed);
                return DispatchResult::MethodNotAllowed { allowed };
            }
        }

        debug!("{} {}: no route found", method, path);
        DispatchResult::NotFound
    }

    // Resolves against a single method, exact paths first.
    fn resolve<'a>(&'a self, method: &str, path: &str) -> Option<DispatchResult<'a, H>> {
        if let Some(handler) = self.table.static_route(method, path) {
            trace!("{} {}: static route", method, path);
            return Some(DispatchResult::Found {
                handler,
                params: Params::new(),
            });
        }

        let data = self.table.variable_data(method)?;
        let found = self.matcher.matches(data, path)?;
        trace!("{} {}: variable route {:?}", method, path, found.params);
        Some(found.into())
    }

    // Collects every other method the path would match under.
    fn allowed_methods(&self, requested: &str, path: &str) -> AllowedMethods {
        let mut allowed = AllowedMethods::new();

        for (method, paths) in self.table.static_methods() {
            if method != requested && paths.contains_key(path) {
                allowed.insert(method);
            }
        }

        for (method, data) in self.table.variable_methods() {
            if method == requested || allowed.contains(method) {
                continue;
            }

            if self.matcher.matches(data, path).is_some() {
                allowed.insert(method);
            }
        }

        allowed
    }
}

impl<H, M> Default for Dispatcher<H, M>
where
    M: VariableRouteMatcher<H> + Default,
{
    fn default() -> Self {
        Self::new(RoutingTable::new(), M::default())
    }
}
