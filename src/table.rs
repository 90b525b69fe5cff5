use crate::InsertError;

use std::collections::hash_map::{self, Entry, HashMap};

/// The precompiled routing table consumed by a [`Dispatcher`](crate::Dispatcher).
///
/// A table holds two mappings keyed by HTTP method: one from exact paths to
/// handlers, and one from the method to its compiled variable-route data `D`,
/// which only the matcher understands. A method may appear in either mapping,
/// both, or neither. The special method [`ANY`](crate::ANY) holds routes that
/// match regardless of the request method.
///
/// Method names are compared as exact, case-sensitive strings.
///
/// ```rust
/// use dispatchit::{RegexRoutes, RoutingTable};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut table = RoutingTable::new();
/// table.insert_static("GET", "/home", "Welcome!")?;
/// table.insert_variable("GET", RegexRoutes::new([(r"/posts/(?P<id>\d+)", "A post.")])?)?;
///
/// assert_eq!(table.static_route("GET", "/home"), Some(&"Welcome!"));
/// assert!(table.static_route("POST", "/home").is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RoutingTable<H, D> {
    static_routes: HashMap<String, HashMap<String, H>>,
    variable_routes: HashMap<String, D>,
}

impl<H, D> RoutingTable<H, D> {
    /// Construct a new, empty routing table.
    pub fn new() -> Self {
        Self {
            static_routes: HashMap::new(),
            variable_routes: HashMap::new(),
        }
    }

    /// Construct a table from mappings built elsewhere.
    pub fn from_parts(
        static_routes: HashMap<String, HashMap<String, H>>,
        variable_routes: HashMap<String, D>,
    ) -> Self {
        Self {
            static_routes,
            variable_routes,
        }
    }

    /// Register a handler for an exact path under the given method.
    pub fn insert_static(
        &mut self,
        method: impl Into<String>,
        path: impl Into<String>,
        handler: H,
    ) -> Result<(), InsertError> {
        let method = method.into();
        let path = path.into();

        if self.static_route(&method, &path).is_some() {
            return Err(InsertError::conflict(&method, &path));
        }

        self.static_routes
            .entry(method)
            .or_default()
            .insert(path, handler);
        Ok(())
    }

    /// Register the compiled variable-route data for the given method.
    ///
    /// Each method carries a single compiled blob; supplying a second one for
    /// the same method is a conflict.
    pub fn insert_variable(&mut self, method: impl Into<String>, data: D) -> Result<(), InsertError> {
        match self.variable_routes.entry(method.into()) {
            Entry::Occupied(entry) => Err(InsertError::VariableConflict {
                method: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(data);
                Ok(())
            }
        }
    }

    /// Returns the handler registered for exactly this method and path.
    pub fn static_route(&self, method: &str, path: &str) -> Option<&H> {
        self.static_routes.get(method)?.get(path)
    }

    /// Returns the compiled variable-route data for the method, if any.
    pub fn variable_data(&self, method: &str) -> Option<&D> {
        self.variable_routes.get(method)
    }

    /// Iterates over the methods with static routes, paired with their
    /// path → handler mapping.
    pub fn static_methods(&self) -> StaticMethods<'_, H> {
        StaticMethods {
            inner: self.static_routes.iter(),
        }
    }

    /// Iterates over the methods with compiled variable routes.
    pub fn variable_methods(&self) -> VariableMethods<'_, D> {
        VariableMethods {
            inner: self.variable_routes.iter(),
        }
    }

    /// Returns `true` if no route is registered under any method.
    pub fn is_empty(&self) -> bool {
        self.static_routes.values().all(HashMap::is_empty) && self.variable_routes.is_empty()
    }
}

impl<H, D> Default for RoutingTable<H, D> {
    fn default() -> Self {
        Self::new()
    }
}

/// An iterator over the static routes of a [`RoutingTable`], grouped by method.
pub struct StaticMethods<'t, H> {
    inner: hash_map::Iter<'t, String, HashMap<String, H>>,
}

impl<'t, H> Iterator for StaticMethods<'t, H> {
    type Item = (&'t str, &'t HashMap<String, H>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(method, paths)| (method.as_str(), paths))
    }
}

/// An iterator over the compiled variable routes of a [`RoutingTable`].
pub struct VariableMethods<'t, D> {
    inner: hash_map::Iter<'t, String, D>,
}

impl<'t, D> Iterator for VariableMethods<'t, D> {
    type Item = (&'t str, &'t D);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(method, data)| (method.as_str(), data))
    }
}
