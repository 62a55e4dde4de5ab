use super::TYPE_NAME;

use crate::dataset::Dataset;

use std::{borrow::Cow, sync::LazyLock};

use {regex::Regex, serde_json::Value};

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier regex is valid"));

/// Render the interface for the dataset's rows.
///
/// Fields are the keys of the first record, in that record's order, all typed
/// `string`.
pub fn render(dataset: &Dataset) -> String {
    let mut declaration = format!("interface {TYPE_NAME} {{\n");

    for key in dataset.first().keys() {
        declaration.push_str(&format!("  {}: string;\n", property_name(key)));
    }

    declaration.push_str("}\n\n");
    declaration
}

/// Names that aren't plain identifiers are written as string literals.
fn property_name(key: &str) -> Cow<'_, str> {
    if IDENTIFIER.is_match(key) {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(Value::from(key).to_string())
    }
}
