use std::convert::Infallible;
use std::sync::Arc;

use dispatchit::{DispatchResult, Dispatcher, Params, RegexMatcher, RegexRoutes, RoutingTable, ANY};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::header::ALLOW;
use hyper::server::conn::http1::Builder as ConnectionBuilder;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;

type Body = Full<Bytes>;

// Handlers only see the captured path parameters.
type Handler = fn(&Params) -> String;

// GET /
fn index(_: &Params) -> String {
    "Hello, world!".into()
}

// GET /blog
fn blog(_: &Params) -> String {
    "...".into()
}

// GET /blog/{slug}
fn post(params: &Params) -> String {
    format!("post: {}", params.get("slug").unwrap_or_default())
}

// * /health
fn health(_: &Params) -> String {
    "OK".into()
}

fn empty(status: StatusCode) -> Response<Body> {
    let mut res = Response::new(Full::new(Bytes::new()));
    *res.status_mut() = status;
    res
}

async fn route(
    dispatcher: Arc<Dispatcher<Handler>>,
    req: Request<Incoming>,
) -> Result<Response<Body>, Infallible> {
    let res = match dispatcher.dispatch_request(&req) {
        DispatchResult::Found { handler, params } => {
            let body = handler(&params);
            // HEAD requests reuse GET handlers, but never carry a body
            if req.method() == Method::HEAD {
                empty(StatusCode::OK)
            } else {
                Response::new(Body::from(body))
            }
        }
        DispatchResult::MethodNotAllowed { allowed } => {
            let mut res = empty(StatusCode::METHOD_NOT_ALLOWED);
            if let Some(value) = allowed.allow_header_value() {
                if let Ok(value) = value.parse() {
                    res.headers_mut().insert(ALLOW, value);
                }
            }
            res
        }
        DispatchResult::NotFound => empty(StatusCode::NOT_FOUND),
    };

    Ok(res)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Build the routing table up front; it is read-only once served.
    let mut table = RoutingTable::new();
    table.insert_static("GET", "/", index as Handler)?;
    table.insert_static("GET", "/blog", blog as Handler)?;
    table.insert_static(ANY, "/health", health as Handler)?;
    table.insert_variable(
        "GET",
        RegexRoutes::new([(r"/blog/(?P<slug>[a-z0-9-]+)", post as Handler)])?,
    )?;

    let dispatcher = Arc::new(Dispatcher::new(table, RegexMatcher));
    let listener = TcpListener::bind(("127.0.0.1", 3000)).await?;

    loop {
        let dispatcher = dispatcher.clone();
        let (tcp, _) = listener.accept().await?;
        tokio::task::spawn(async move {
            if let Err(err) = ConnectionBuilder::new()
                .serve_connection(
                    TokioIo::new(tcp),
                    hyper::service::service_fn(|request| route(dispatcher.clone(), request)),
                )
                .await
            {
                println!("Error serving connection: {:?}", err);
            }
        });
    }
}
