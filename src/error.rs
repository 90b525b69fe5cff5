use thiserror::Error;

/// Represents errors that can occur while building a routing table.
///
/// Dispatching itself never fails: every outcome of
/// [`Dispatcher::dispatch`](crate::Dispatcher::dispatch) is a
/// [`DispatchResult`](crate::DispatchResult) variant.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum InsertError {
    /// Attempted to register a route that is already present for the method.
    #[error("insertion failed due to conflict with previously registered {method} route: {path}")]
    Conflict {
        /// The method the conflicting route is registered under.
        method: String,
        /// The conflicting path.
        path: String,
    },
    /// Attempted to register a second set of compiled variable routes for a
    /// method.
    #[error("insertion failed: variable routes for {method} are already registered")]
    VariableConflict {
        /// The method that already carries variable routes.
        method: String,
    },
    /// A variable route pattern failed to compile.
    #[error("invalid route pattern `{pattern}`")]
    InvalidPattern {
        /// The pattern source as supplied.
        pattern: String,
        #[source]
        source: ::regex::Error,
    },
}

impl InsertError {
    pub(crate) fn conflict(method: &str, path: &str) -> Self {
        InsertError::Conflict {
            method: method.to_owned(),
            path: path.to_owned(),
        }
    }
}
