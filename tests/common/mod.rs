//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_feed;

use health_feed::feed::HealthItem;
use health_feed::store::CounterStore;
use health_feed::ui::app::App;

/// `n` items with every optional field filled in.
pub fn full_items(n: usize) -> Vec<HealthItem> {
    (0..n)
        .map(|i| HealthItem {
            description: Some(format!("Description {i}")),
            image: Some(format!("https://img.example/{i}.png")),
            category: Some("Dinner".to_string()),
            ..HealthItem::new(i.to_string(), format!("Recipe {i}"))
        })
        .collect()
}

/// JSON array body with `n` items, numeric ids like the live API.
pub fn items_json(n: usize) -> String {
    let entries: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"id":{i},"title":"Recipe {i}","description":"Description {i}","category":"Dinner","calories":{}}}"#,
                100 + i
            )
        })
        .collect();
    format!("[{}]", entries.join(","))
}

// -- App helpers --------------------------------------------------------------

/// Mounted app sized like an 80x40 terminal.
pub fn make_app(username: &str) -> (App, CounterStore) {
    let store = CounterStore::new();
    let mut app = App::new(username, store.clone());
    app.on_resize(80, 40);
    let _scope = app.mount().expect("first mount yields a scope");
    (app, store)
}

pub fn make_app_with_items(n: usize) -> (App, CounterStore) {
    let (mut app, store) = make_app("Alex");
    app.on_items_loaded(full_items(n));
    (app, store)
}
