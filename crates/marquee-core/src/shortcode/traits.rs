use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

/// Parsed shortcode/widget arguments, keyed by argument name.
///
/// Values are dynamic JSON values because shortcode attributes arrive as
/// loosely typed user input; declaration order is preserved.
pub type Arguments = IndexMap<String, Value>;

/// Validation callback applied to a single argument value.
pub type ArgumentValidator = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// The contract every shortcode in the family satisfies.
///
/// This is a capability set, not a behavior: how arguments are parsed,
/// validated and rendered belongs entirely to the implementor.
pub trait Shortcode {
    /// The slug the shortcode registers under; dispatch is keyed by it.
    fn registration_slug(&self) -> &str;

    /// Configures the instance from the raw arguments and the content
    /// enclosed between the shortcode's brackets.
    fn setup(&mut self, arguments: Arguments, content: &str);

    /// The arguments parsed correctly, with defaults applied.
    fn parse_arguments(&self, arguments: Arguments) -> Arguments;

    /// The arguments after the validation callbacks have run.
    fn validate_arguments(&self, arguments: Arguments) -> Arguments;

    /// Per-argument validation callbacks.
    fn validate_arguments_map(&self) -> IndexMap<String, ArgumentValidator>;

    /// This shortcode's default arguments.
    fn default_arguments(&self) -> Arguments;

    /// The arguments as set up on this instance.
    fn arguments(&self) -> Arguments;

    /// A single argument by name, or `default` when it is not set.
    fn argument(&self, index: &str, default: Option<Value>) -> Option<Value>;

    /// The shortcode's rendered HTML.
    fn html(&self) -> String;
}
