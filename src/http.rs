use crate::{DispatchResult, Dispatcher, VariableRouteMatcher};

impl<H, M> Dispatcher<H, M>
where
    M: VariableRouteMatcher<H>,
{
    /// Resolve an [`http::Request`] by its method and URI path.
    ///
    /// The path is used exactly as it appears in the URI; percent-decoding and
    /// trailing-slash policy are left to the caller.
    ///
    /// ```rust
    /// use dispatchit::{Dispatcher, RegexMatcher, RoutingTable};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut table = RoutingTable::new();
    /// table.insert_static("GET", "/home", "Welcome!")?;
    /// let dispatcher = Dispatcher::new(table, RegexMatcher);
    ///
    /// let req = http::Request::get("/home?lang=en").body(())?;
    /// assert_eq!(dispatcher.dispatch_request(&req).handler(), Some(&"Welcome!"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn dispatch_request<B>(&self, req: &http::Request<B>) -> DispatchResult<'_, H> {
        self.dispatch(req.method().as_str(), req.uri().path())
    }
}

#[cfg(test)]
mod tests {
    use crate::{DispatchResult, Dispatcher, RegexMatcher, RoutingTable, ANY};
    use http::{Method, Request};

    #[test]
    fn custom_methods() {
        let mut table = RoutingTable::new();
        table.insert_static("PURGE", "/cache", "purge").unwrap();
        table.insert_static(ANY, "/ping", "pong").unwrap();
        let dispatcher = Dispatcher::new(table, RegexMatcher);

        let purge = Method::from_bytes(b"PURGE").unwrap();
        let req = Request::builder().method(purge).uri("/cache").body(()).unwrap();
        assert_eq!(dispatcher.dispatch_request(&req).handler(), Some(&"purge"));

        let req = Request::builder().method(Method::OPTIONS).uri("/ping").body(()).unwrap();
        assert_eq!(dispatcher.dispatch_request(&req).handler(), Some(&"pong"));

        let req = Request::get("/cache").body(()).unwrap();
        assert!(matches!(
            dispatcher.dispatch_request(&req),
            DispatchResult::MethodNotAllowed { .. }
        ));
    }
}
