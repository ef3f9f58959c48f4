//! Dynamic tab parameter rewrite
//!
//! The `ArcTab` and `SqlTab` parameters originally held static values, so
//! switching the `ResourceType` selector left a stale tab selected. Each is
//! rewritten into a query parameter whose Resource Graph query emits the
//! tab's own value while its resource type is active and `"overview"`
//! otherwise.
//!
//! Only parameter blocks in the top-level `items` array are considered;
//! same-named parameters nested anywhere else are left alone. Missing or
//! ill-typed nesting means there is nothing to update, never an error.

use serde_json::{json, Map, Value};

/// Item `type` tag of a parameter block
pub const PARAMETER_BLOCK_TYPE: u64 = 9;

/// Resource type routing Resource Graph queries
pub const RESOURCE_GRAPH_RESOURCE_TYPE: &str = "microsoft.resourcegraph/resources";

/// Fallback tab value when no resource-specific tab applies
pub const DEFAULT_TAB_VALUE: &str = "overview";

/// Query computing the `ArcTab` value from the active `ResourceType`
pub const ARC_TAB_QUERY: &str = "print result = iff('{ResourceType}' == 'arc', '{ArcTab:value}', 'overview')\\r\\n| project result = iff(result == '', 'overview', result)";

/// Query computing the `SqlTab` value from the active `ResourceType`
pub const SQL_TAB_QUERY: &str = "print result = iff('{ResourceType}' == 'sql', '{SqlTab:value}', 'overview')\\r\\n| project result = iff(result == '', 'overview', result)";

/// Query template for a tab parameter name, `None` for non-tab parameters
fn tab_query(name: &str) -> Option<&'static str> {
    match name {
        "ArcTab" => Some(ARC_TAB_QUERY),
        "SqlTab" => Some(SQL_TAB_QUERY),
        _ => None,
    }
}

/// Rewrite the `ArcTab`/`SqlTab` parameters of every top-level parameter block
///
/// Returns the number of parameters rewritten.
pub fn update_tab_parameters(root: &mut Value) -> usize {
    let Some(items) = root.get_mut("items").and_then(Value::as_array_mut) else {
        return 0;
    };

    let mut rewritten = 0;
    for item in items.iter_mut() {
        if item.get("type").and_then(Value::as_u64) != Some(PARAMETER_BLOCK_TYPE) {
            continue;
        }
        let parameters = item
            .get_mut("content")
            .and_then(|content| content.get_mut("parameters"))
            .and_then(Value::as_array_mut);
        let Some(parameters) = parameters else {
            continue;
        };
        for parameter in parameters.iter_mut() {
            let Some(fields) = parameter.as_object_mut() else {
                continue;
            };
            let query = fields
                .get("name")
                .and_then(Value::as_str)
                .and_then(tab_query);
            let Some(query) = query else {
                continue;
            };
            rewrite_parameter(fields, query);
            rewritten += 1;
        }
    }
    rewritten
}

/// Overwrite a tab parameter's fields with the dynamic-query configuration
///
/// `value` is only defaulted when absent; an existing value survives.
fn rewrite_parameter(fields: &mut Map<String, Value>, query: &'static str) {
    fields.insert("type".to_owned(), Value::from(1));
    fields.insert("query".to_owned(), Value::from(query));
    fields.insert("crossComponentResources".to_owned(), json!(["value::all"]));
    fields.insert("isHiddenWhenLocked".to_owned(), Value::Bool(true));
    fields.insert("queryType".to_owned(), Value::from(0));
    fields.insert(
        "resourceType".to_owned(),
        Value::from(RESOURCE_GRAPH_RESOURCE_TYPE),
    );
    fields
        .entry("value")
        .or_insert_with(|| Value::from(DEFAULT_TAB_VALUE));
}
