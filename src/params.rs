use std::{fmt, slice};

/// A single path parameter, consisting of a key and a value.
#[derive(PartialEq, Eq, Ord, PartialOrd, Default, Clone)]
struct Param {
    key: String,
    value: String,
}

/// A list of parameters extracted from the path by a route match.
///
/// Parameters keep the order in which the matcher produced them, so the
/// first parameter of the route is also the first entry in the list.
///
/// ```rust
/// # use dispatchit::{DispatchResult, Dispatcher, RegexMatcher, RegexRoutes, RoutingTable};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut table = RoutingTable::new();
/// table.insert_variable("GET", RegexRoutes::new([(r"/users/(?P<id>\d+)", "user")])?)?;
/// let dispatcher = Dispatcher::new(table, RegexMatcher);
///
/// if let DispatchResult::Found { params, .. } = dispatcher.dispatch("GET", "/users/1") {
///     // Iterate through the keys and values.
///     for (key, value) in params.iter() {
///         println!("key: {}, value: {}", key, value);
///     }
///
///     // Get a specific value by name.
///     assert_eq!(params.get("id"), Some("1"));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(PartialEq, Eq, Ord, PartialOrd, Default, Clone)]
pub struct Params {
    list: Vec<Param>,
}

impl Params {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns the value of the first parameter registered under the given key.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
        let key = key.as_ref();

        self.list
            .iter()
            .find(|param| param.key == key)
            .map(|param| param.value.as_str())
    }

    /// Returns an iterator over the parameters in the list.
    pub fn iter(&self) -> ParamsIter<'_> {
        ParamsIter {
            inner: self.list.iter(),
        }
    }

    /// Returns `true` if there are no parameters in the list.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Appends a key value parameter pair to the list.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.list.push(Param {
            key: key.into(),
            value: value.into(),
        });
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}

impl<'ps> IntoIterator for &'ps Params {
    type Item = (&'ps str, &'ps str);
    type IntoIter = ParamsIter<'ps>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the keys and values of a route's [parameters](crate::Params).
pub struct ParamsIter<'ps> {
    inner: slice::Iter<'ps, Param>,
}

impl<'ps> Iterator for ParamsIter<'ps> {
    type Item = (&'ps str, &'ps str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|p| (p.key.as_str(), p.value.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for ParamsIter<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order() {
        let vec = vec![("hello", "hello"), ("world", "world"), ("baz", "baz")];

        let mut params = Params::new();
        for (key, value) in vec.clone() {
            params.push(key, value);
            assert_eq!(params.get(key), Some(value));
        }

        assert_eq!(params.len(), 3);
        assert!(params.iter().eq(vec));
    }

    #[test]
    fn first_key_wins() {
        let params: Params = [("id", "1"), ("id", "2")].into_iter().collect();
        assert_eq!(params.get("id"), Some("1"));
        assert_eq!(params.iter().len(), 2);
    }

    #[test]
    fn empty() {
        let params = Params::new();
        assert!(params.is_empty());
        assert!(params.get("").is_none());
        assert_eq!(format!("{:?}", params), "[]");
    }
}
