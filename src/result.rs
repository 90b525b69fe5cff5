use crate::{Match, Params};

use std::slice;

/// The verdict of [`Dispatcher::dispatch`](crate::Dispatcher::dispatch).
///
/// None of the variants is an error: a missing route is an ordinary outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult<'a, H> {
    /// A route matched the method and path.
    Found {
        /// The handler registered for the route.
        handler: &'a H,
        /// Parameters extracted from the path. Empty for static routes.
        params: Params,
    },
    /// The path matches under other methods, but not the requested one.
    MethodNotAllowed {
        /// The methods the path would have matched under.
        allowed: AllowedMethods,
    },
    /// No route matches the path under any method.
    NotFound,
}

impl<'a, H> DispatchResult<'a, H> {
    /// Returns `true` if a route was found.
    pub fn is_found(&self) -> bool {
        matches!(self, DispatchResult::Found { .. })
    }

    /// Returns the matched handler, if any.
    pub fn handler(&self) -> Option<&'a H> {
        match self {
            DispatchResult::Found { handler, .. } => Some(*handler),
            _ => None,
        }
    }
}

impl<'a, H> From<Match<'a, H>> for DispatchResult<'a, H> {
    fn from(found: Match<'a, H>) -> Self {
        DispatchResult::Found {
            handler: found.handler,
            params: found.params,
        }
    }
}

/// The methods a path would have matched under, in discovery order.
///
/// Each method appears at most once. The order follows the routing table's
/// internal iteration and carries no meaning, so equality ignores it.
#[derive(Debug, Clone, Default, Eq)]
pub struct AllowedMethods {
    methods: Vec<String>,
}

impl PartialEq for AllowedMethods {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|method| other.contains(method))
    }
}

impl AllowedMethods {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, method: &str) {
        if !self.contains(method) {
            self.methods.push(method.to_owned());
        }
    }

    /// Returns `true` if the method is allowed.
    pub fn contains(&self, method: &str) -> bool {
        self.methods.iter().any(|allowed| allowed == method)
    }

    /// Returns the number of allowed methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Returns `true` if no method is allowed.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Returns an iterator over the allowed methods.
    pub fn iter(&self) -> AllowedMethodsIter<'_> {
        AllowedMethodsIter {
            inner: self.methods.iter(),
        }
    }

    /// The value of an `Allow` header listing these methods, or `None` if
    /// there are none.
    ///
    /// ```rust
    /// # use dispatchit::{DispatchResult, Dispatcher, RegexMatcher, RoutingTable};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut table = RoutingTable::new();
    /// table.insert_static("GET", "/items", "list")?;
    /// let dispatcher = Dispatcher::new(table, RegexMatcher);
    ///
    /// match dispatcher.dispatch("DELETE", "/items") {
    ///     DispatchResult::MethodNotAllowed { allowed } => {
    ///         assert_eq!(allowed.allow_header_value().as_deref(), Some("GET"));
    ///     }
    ///     _ => unreachable!(),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn allow_header_value(&self) -> Option<String> {
        if self.methods.is_empty() {
            None
        } else {
            Some(self.methods.join(", "))
        }
    }
}

impl<'m> IntoIterator for &'m AllowedMethods {
    type Item = &'m str;
    type IntoIter = AllowedMethodsIter<'m>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over [`AllowedMethods`].
pub struct AllowedMethodsIter<'m> {
    inner: slice::Iter<'m, String>,
}

impl<'m> Iterator for AllowedMethodsIter<'m> {
    type Item = &'m str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_dedup() {
        let mut allowed = AllowedMethods::new();
        allowed.insert("GET");
        allowed.insert("POST");
        allowed.insert("GET");

        assert_eq!(allowed.len(), 2);
        assert!(allowed.contains("POST"));
        assert!(!allowed.contains("post"));
        assert_eq!(allowed.iter().collect::<Vec<_>>(), vec!["GET", "POST"]);
        assert_eq!(allowed.allow_header_value().as_deref(), Some("GET, POST"));
    }

    #[test]
    fn unordered_eq() {
        let mut a = AllowedMethods::new();
        a.insert("GET");
        a.insert("POST");

        let mut b = AllowedMethods::new();
        b.insert("POST");
        b.insert("GET");
        assert_eq!(a, b);

        b.insert("PUT");
        assert_ne!(a, b);
    }

    #[test]
    fn empty_header() {
        assert!(AllowedMethods::new().allow_header_value().is_none());
    }

    #[test]
    fn found_accessors() {
        let handler = 7;
        let result = DispatchResult::from(Match {
            handler: &handler,
            params: Params::new(),
        });

        assert!(result.is_found());
        assert_eq!(result.handler(), Some(&7));
        assert_eq!(DispatchResult::<i32>::NotFound.handler(), None);
    }
}
