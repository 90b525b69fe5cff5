use dispatchit::{InsertError, RegexRoutes, RoutingTable};

use std::collections::HashMap;

struct InsertTest(Vec<(&'static str, &'static str, Result<(), &'static str>)>);

impl InsertTest {
    fn run(self) {
        let mut table = RoutingTable::<String, ()>::new();
        for (method, path, expected) in self.0 {
            let got = table
                .insert_static(method, path, format!("{} {}", method, path))
                .map_err(|err| match err {
                    InsertError::Conflict { method, .. } => method,
                    err => panic!("unexpected error: {}", err),
                });

            assert_eq!(
                got,
                expected.map_err(str::to_owned),
                "{} {}",
                method,
                path
            );
        }
    }
}

#[test]
fn static_conflicts() {
    InsertTest(vec![
        ("GET", "/items", Ok(())),
        ("POST", "/items", Ok(())),
        ("GET", "/items/", Ok(())),
        ("get", "/items", Ok(())),
        ("*", "/items", Ok(())),
        ("GET", "/items", Err("GET")),
        ("POST", "/items", Err("POST")),
        ("*", "/items", Err("*")),
    ])
    .run()
}

#[test]
fn variable_conflict() {
    let mut table = RoutingTable::<(), _>::new();
    table
        .insert_variable("GET", RegexRoutes::new([(r"/a/(?P<id>\d+)", 1)]).unwrap())
        .unwrap();

    let err = table
        .insert_variable("GET", RegexRoutes::new([(r"/b/(?P<id>\d+)", 2)]).unwrap())
        .unwrap_err();
    assert!(matches!(err, InsertError::VariableConflict { ref method } if method == "GET"));
    assert!(!err.to_string().contains('*'));

    table
        .insert_variable("POST", RegexRoutes::new([(r"/b/(?P<id>\d+)", 2)]).unwrap())
        .unwrap();
    assert_eq!(table.variable_methods().count(), 2);
    assert!(table.static_route("GET", "/a/1").is_none());
}

#[test]
fn invalid_pattern() {
    let err = RegexRoutes::new([(r"/users/(?P<id>\d+", "user")]).unwrap_err();
    assert!(matches!(err, InsertError::InvalidPattern { .. }));
    assert!(err.to_string().contains(r"/users/(?P<id>\d+"));
}

#[test]
fn from_parts() {
    let mut gets = HashMap::new();
    gets.insert("/home".to_owned(), "home");

    let mut statics = HashMap::new();
    statics.insert("GET".to_owned(), gets);

    let mut variables = HashMap::new();
    variables.insert(
        "GET".to_owned(),
        RegexRoutes::new([(r"/posts/(?P<slug>[a-z-]+)", "post")]).unwrap(),
    );

    let table = RoutingTable::from_parts(statics, variables);
    assert_eq!(table.static_route("GET", "/home"), Some(&"home"));
    assert_eq!(table.variable_data("GET").map(RegexRoutes::len), Some(1));
    assert!(table.variable_data("POST").is_none());
    assert!(!table.is_empty());
}
