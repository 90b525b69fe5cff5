//! Method-aware request dispatch over a precompiled routing table.
//!
//! A [`RoutingTable`] maps each HTTP method to its exact-path routes and to the
//! compiled form of its variable routes. A [`Dispatcher`] owns the table and
//! turns a `(method, path)` pair into a [`DispatchResult`]:
//!
//! - [`Found`](DispatchResult::Found): a route matched, with the handler and
//!   the parameters extracted from the path.
//! - [`MethodNotAllowed`](DispatchResult::MethodNotAllowed): the path matches,
//!   but only under other methods, which are listed.
//! - [`NotFound`](DispatchResult::NotFound): the path matches nothing.
//!
//! ```rust
//! use dispatchit::{DispatchResult, Dispatcher, RegexMatcher, RegexRoutes, RoutingTable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut table = RoutingTable::new();
//! table.insert_static("GET", "/home", "Welcome!")?;
//! table.insert_variable("GET", RegexRoutes::new([(r"/users/(?P<id>\d+)", "A User")])?)?;
//! table.insert_static("*", "/health", "OK")?;
//!
//! let dispatcher = Dispatcher::new(table, RegexMatcher);
//!
//! match dispatcher.dispatch("GET", "/users/978") {
//!     DispatchResult::Found { handler, params } => {
//!         assert_eq!(params.get("id"), Some("978"));
//!         assert_eq!(*handler, "A User");
//!     }
//!     _ => unreachable!(),
//! }
//!
//! // wildcard routes answer any method
//! assert_eq!(dispatcher.dispatch("PATCH", "/health").handler(), Some(&"OK"));
//! # Ok(())
//! # }
//! ```
//!
//! # Resolution order
//!
//! For a request method `M` and path `P`, the first of these to match wins:
//!
//! 1. the static route `M P`, then `M`'s variable routes
//! 2. if `M` is `HEAD`, the same lookup with `GET`
//! 3. the same lookup with the wildcard method [`ANY`] (`*`)
//!
//! A wildcard match is returned as is. Only when all three fail are the other
//! registered methods checked to build the allowed-methods list.
//!
//! # Variable routes
//!
//! The dispatcher never inspects compiled variable routes itself; it hands them
//! to a [`VariableRouteMatcher`]. [`RegexMatcher`] is the bundled strategy,
//! matching [`RegexRoutes`] built from regular expressions whose named groups
//! become parameters. Other compiled representations plug in by implementing
//! the trait.
//!
//! # Logging
//!
//! Resolution steps are reported through the [`log`](https://docs.rs/log)
//! facade at `trace` and `debug` level.
#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod dispatcher;
mod error;
#[cfg(feature = "http")]
mod http;
mod matcher;
mod params;
mod regex;
mod result;
mod table;

pub use dispatcher::{Dispatcher, ANY};
pub use error::InsertError;
pub use matcher::{Match, VariableRouteMatcher};
pub use params::{Params, ParamsIter};
pub use crate::regex::{RegexMatcher, RegexRoutes};
pub use result::{AllowedMethods, AllowedMethodsIter, DispatchResult};
pub use table::{RoutingTable, StaticMethods, VariableMethods};
