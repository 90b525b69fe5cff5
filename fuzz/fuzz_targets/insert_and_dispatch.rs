#![no_main]
use dispatchit::{Dispatcher, RegexMatcher, RegexRoutes, RoutingTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<(String, String, i32)>, Vec<(String, i32)>, String, String)| {
    let (statics, patterns, method, path) = data;

    let mut table = RoutingTable::new();
    for (method, path, item) in statics {
        let _ = table.insert_static(method, path, item);
    }

    if let Ok(routes) = RegexRoutes::new(patterns) {
        let _ = table.insert_variable("GET", routes);
    }

    let dispatcher = Dispatcher::new(table, RegexMatcher);
    assert_eq!(dispatcher.dispatch(&method, &path), dispatcher.dispatch(&method, &path));
});
