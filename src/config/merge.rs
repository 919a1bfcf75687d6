//! Deep merge of a loaded configuration over the built-in defaults.
//!
//! Implements field-by-field merging where the loaded value overrides the
//! defaults. Arrays are replaced entirely, not concatenated: a config that
//! declares `required` replaces the default list rather than extending it.

use serde_json::Value;

/// Deep merge two JSON values, with `overlay` taking precedence over `base`.
///
/// - Objects are merged recursively: keys in overlay override keys in base
/// - Arrays, strings, numbers, booleans are replaced entirely
/// - If overlay is null, the base value is preserved (null means "not specified")
///
/// # Example
/// ```
/// use serde_json::json;
/// use clean_env::config::deep_merge;
///
/// let defaults = json!({
///     "required": [],
///     "translations": { "yes": "yes", "errorStatement": "The environment is not clean." }
/// });
/// let loaded = json!({
///     "required": ["API_KEY"],
///     "translations": { "yes": "ship it" }
/// });
/// let result = deep_merge(defaults, loaded);
/// // required is replaced, translations merge key-by-key:
/// // { "required": ["API_KEY"],
/// //   "translations": { "yes": "ship it", "errorStatement": "The environment is not clean." } }
/// ```
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        // Overlay is null: preserve base (null means "not specified")
        (base, Value::Null) => base,
        // Both are objects: merge recursively
        (Value::Object(mut merged), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let value = match merged.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                merged.insert(key, value);
            }
            Value::Object(merged)
        }
        // Any other case: overlay replaces base entirely
        (_, overlay) => overlay,
    }
}
