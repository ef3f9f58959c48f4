//! Conditional visibility migration
//!
//! Azure Monitor workbooks grew a multi-condition `conditionalVisibilities`
//! field superseding the single-condition `conditionalVisibility`. Elements
//! gated on the `ArcTab` parameter must additionally be gated on
//! `ResourceType == "arc"`, so each legacy rule becomes a two-condition
//! sequence: the fixed `ResourceType` condition first, then the original
//! `ArcTab` condition.
//!
//! Nodes that already carry `conditionalVisibilities` are skipped, never
//! merged, which makes the walk idempotent.

use serde_json::{json, Map, Value};

/// Parameter name the legacy rules are keyed on
pub const ARC_TAB: &str = "ArcTab";

const RESOURCE_TYPE: &str = "ResourceType";
const IS_EQUAL_TO: &str = "isEqualTo";
const LEGACY_FIELD: &str = "conditionalVisibility";
const MULTI_FIELD: &str = "conditionalVisibilities";

/// Migrate every legacy `ArcTab` visibility rule in the tree
///
/// Walks the whole document: objects are inspected (and possibly rewritten)
/// before recursing into their children, arrays recurse into every element,
/// scalars are leaves. Returns the number of nodes migrated.
pub fn migrate_arc_tab_visibility(node: &mut Value) -> usize {
    match node {
        Value::Object(map) => {
            let migrated = usize::from(migrate_node(map));
            migrated
                + map
                    .values_mut()
                    .map(migrate_arc_tab_visibility)
                    .sum::<usize>()
        }
        Value::Array(elements) => elements
            .iter_mut()
            .map(migrate_arc_tab_visibility)
            .sum(),
        _ => 0,
    }
}

/// Rewrite a single object if it carries a legacy `ArcTab` rule
fn migrate_node(map: &mut Map<String, Value>) -> bool {
    let targets_arc_tab = map
        .get(LEGACY_FIELD)
        .and_then(Value::as_object)
        .and_then(|condition| condition.get("parameterName"))
        .and_then(Value::as_str)
        == Some(ARC_TAB);

    if !targets_arc_tab || map.contains_key(MULTI_FIELD) {
        return false;
    }

    let tab_value = map
        .get(LEGACY_FIELD)
        .and_then(|condition| condition.get("value"))
        .cloned()
        .unwrap_or(Value::Null);

    map.insert(
        MULTI_FIELD.to_owned(),
        json!([
            {
                "parameterName": RESOURCE_TYPE,
                "comparison": IS_EQUAL_TO,
                "value": "arc"
            },
            {
                "parameterName": ARC_TAB,
                "comparison": IS_EQUAL_TO,
                "value": tab_value
            }
        ]),
    );
    map.remove(LEGACY_FIELD);
    true
}
