#![cfg(test)]

use indexmap::IndexMap;
use serde_json::{json, Value};

use crate::shortcode::traits::{ArgumentValidator, Arguments};
use crate::widget::traits::{View, Widget};

// --- Mock view and widget exercising the contract ---
struct ListView;

impl View for ListView {
    fn slug(&self) -> &str {
        "list"
    }

    fn html(&self) -> String {
        "<ul class=\"marquee-list\"></ul>".to_string()
    }
}

struct MockWidget {
    arguments: Arguments,
    aliases: IndexMap<String, String>,
    view: Option<Box<dyn View>>,
}

impl MockWidget {
    fn new() -> Self {
        Self {
            arguments: Arguments::new(),
            aliases: IndexMap::new(),
            view: None,
        }
    }
}

impl Widget for MockWidget {
    fn registration_slug(&self) -> &str {
        "events-list-widget"
    }

    fn update(&mut self, new_instance: Arguments, old_instance: Arguments) -> Arguments {
        // Invalid new values fall back to the old instance
        let mut merged = old_instance;
        for (index, value) in self.validate_arguments(new_instance) {
            if !value.is_null() {
                merged.insert(index, value);
            }
        }
        self.arguments = merged.clone();
        merged
    }

    fn form(&self) -> String {
        "<p><label>Title</label><input name=\"title\"></p>".to_string()
    }

    fn set_aliased_arguments(&mut self, alias_map: IndexMap<String, String>) {
        self.aliases = alias_map;
    }

    fn aliased_arguments(&self) -> IndexMap<String, String> {
        self.aliases.clone()
    }

    fn parse_arguments(&self, arguments: Arguments) -> Arguments {
        let mut parsed = self.filter_default_arguments(self.default_arguments());
        for (index, value) in arguments {
            let canonical = self.aliases.get(&index).cloned().unwrap_or(index);
            parsed.insert(canonical, value);
        }
        self.filter_arguments(self.validate_arguments(parsed))
    }

    fn validate_arguments(&self, arguments: Arguments) -> Arguments {
        let validators = self.validated_arguments_map();
        arguments
            .into_iter()
            .map(|(index, value)| {
                let value = match validators.get(&index) {
                    Some(validator) => (**validator)(value),
                    None => value,
                };
                (index, value)
            })
            .collect()
    }

    fn validated_arguments_map(&self) -> IndexMap<String, ArgumentValidator> {
        let mut map: IndexMap<String, ArgumentValidator> = IndexMap::new();
        map.insert(
            "title".to_string(),
            std::sync::Arc::new(|value: Value| if value.is_string() { value } else { Value::Null }),
        );
        map
    }

    fn arguments(&self) -> Arguments {
        self.arguments.clone()
    }

    fn filter_arguments(&self, arguments: Arguments) -> Arguments {
        arguments
    }

    fn argument(&self, index: &str, default: Option<Value>) -> Option<Value> {
        self.arguments.get(index).cloned().or(default)
    }

    fn filter_argument(&self, argument: Option<Value>, _index: &str, default: Option<Value>) -> Option<Value> {
        argument.or(default)
    }

    fn default_arguments(&self) -> Arguments {
        let mut defaults = Arguments::new();
        defaults.insert("title".to_string(), json!("Upcoming Events"));
        defaults
    }

    fn filter_default_arguments(&self, default_arguments: Arguments) -> Arguments {
        default_arguments
    }

    fn html(&self) -> String {
        match &self.view {
            Some(view) => view.html(),
            None => String::new(),
        }
    }

    fn set_view(&mut self, view: Box<dyn View>) {
        self.view = Some(view);
    }

    fn view(&self) -> Option<&dyn View> {
        self.view.as_deref()
    }
}

#[test]
fn test_alias_map_round_trip() {
    let mut widget = MockWidget::new();
    let mut aliases = IndexMap::new();
    aliases.insert("events".to_string(), "count".to_string());
    widget.set_aliased_arguments(aliases.clone());

    assert_eq!(widget.aliased_arguments(), aliases);

    // Parsing resolves the alias to its canonical name
    let mut arguments = Arguments::new();
    arguments.insert("events".to_string(), json!(5));
    let parsed = widget.parse_arguments(arguments);
    assert_eq!(parsed.get("count"), Some(&json!(5)));
    assert!(!parsed.contains_key("events"));
}

#[test]
fn test_update_keeps_old_values_for_invalid_input() {
    let mut widget = MockWidget::new();
    let mut old_instance = Arguments::new();
    old_instance.insert("title".to_string(), json!("Old Title"));

    let mut new_instance = Arguments::new();
    new_instance.insert("title".to_string(), json!(42)); // not a string

    let merged = widget.update(new_instance, old_instance);
    assert_eq!(merged.get("title"), Some(&json!("Old Title")));
}

#[test]
fn test_defaults_and_argument_fallback() {
    let widget = MockWidget::new();
    let parsed = widget.parse_arguments(Arguments::new());
    assert_eq!(parsed.get("title"), Some(&json!("Upcoming Events")));

    assert_eq!(widget.argument("title", Some(json!("fallback"))), Some(json!("fallback")));
    assert_eq!(
        widget.filter_argument(None, "title", Some(json!("fallback"))),
        Some(json!("fallback"))
    );
}

#[test]
fn test_view_install_and_render() {
    let mut widget = MockWidget::new();
    assert!(widget.view().is_none());
    assert_eq!(widget.html(), "");

    widget.set_view(Box::new(ListView));
    assert_eq!(widget.view().map(|view| view.slug().to_string()), Some("list".to_string()));
    assert_eq!(widget.html(), "<ul class=\"marquee-list\"></ul>");
}
