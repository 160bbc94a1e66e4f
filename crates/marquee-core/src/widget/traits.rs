use indexmap::IndexMap;
use serde_json::Value;

use crate::shortcode::traits::{ArgumentValidator, Arguments};

/// Rendering seam a widget draws through.
///
/// The widget contract only needs to hold a view and ask it for markup;
/// everything else about views is out of scope here.
pub trait View {
    /// The view's registration slug.
    fn slug(&self) -> &str;

    /// The view's rendered HTML.
    fn html(&self) -> String;
}

/// The contract every widget in the family satisfies.
///
/// A capability set, not a behavior. The `filter_*` methods are the
/// widget's named extension points: implementations run any externally
/// installed overrides over the given values and return the result,
/// defaulting to pass-through when nothing is installed.
pub trait Widget {
    /// The slug the widget registers under.
    fn registration_slug(&self) -> &str;

    /// Checks a saved-settings update and returns the instance to persist;
    /// expected to fall back to `old_instance` values for anything invalid
    /// in `new_instance`.
    fn update(&mut self, new_instance: Arguments, old_instance: Arguments) -> Arguments;

    /// The widget's settings form markup.
    fn form(&self) -> String;

    /// Installs the map from user-facing argument aliases to canonical
    /// argument names.
    fn set_aliased_arguments(&mut self, alias_map: IndexMap<String, String>);

    /// The installed alias map.
    fn aliased_arguments(&self) -> IndexMap<String, String>;

    /// The arguments parsed correctly, with aliases resolved and defaults
    /// applied.
    fn parse_arguments(&self, arguments: Arguments) -> Arguments;

    /// The arguments after the validation callbacks have run.
    fn validate_arguments(&self, arguments: Arguments) -> Arguments;

    /// Per-argument validation callbacks.
    fn validated_arguments_map(&self) -> IndexMap<String, ArgumentValidator>;

    /// The arguments as set up on this instance.
    fn arguments(&self) -> Arguments;

    /// Runs the widget's argument extension point over the full map.
    fn filter_arguments(&self, arguments: Arguments) -> Arguments;

    /// A single argument by name, or `default` when it is not set.
    fn argument(&self, index: &str, default: Option<Value>) -> Option<Value>;

    /// Runs the widget's single-argument extension point.
    fn filter_argument(&self, argument: Option<Value>, index: &str, default: Option<Value>) -> Option<Value>;

    /// This widget's default arguments.
    fn default_arguments(&self) -> Arguments;

    /// Runs the widget's default-arguments extension point.
    fn filter_default_arguments(&self, default_arguments: Arguments) -> Arguments;

    /// The widget's rendered HTML.
    fn html(&self) -> String;

    /// Installs the view the widget renders through.
    fn set_view(&mut self, view: Box<dyn View>);

    /// The installed view, if any.
    fn view(&self) -> Option<&dyn View>;
}
