use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RequestError;

/// One menu entry. `Name`, `Size` and `Crust` are required; `Type` is empty for
/// menus without categories. Any other column (e.g. `Toppings veg`) is kept in
/// `columns` as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Size")]
    pub size: String,
    #[serde(rename = "Crust")]
    pub crust: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(flatten)]
    pub columns: BTreeMap<String, String>,
}

impl CatalogRow {
    pub fn new(name: impl Into<String>, size: impl Into<String>, crust: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: size.into(),
            crust: crust.into(),
            kind: kind.into(),
            columns: BTreeMap::new(),
        }
    }

    pub fn with_column(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.columns.insert(column.into(), value.into());
        self
    }

    pub fn column(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }
}

/// A row of the dedicated toppings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToppingRow {
    #[serde(rename = "Toppings")]
    pub toppings: String,
}

impl ToppingRow {
    pub fn new(toppings: impl Into<String>) -> Self {
        Self { toppings: toppings.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    //kept as text, never used arithmetically
    pub quantity: String,
    pub name: String,
}

impl OrderLine {
    pub fn new(quantity: impl Into<String>, name: impl Into<String>) -> Self {
        Self { quantity: quantity.into(), name: name.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlignedAttributes {
    pub size: String,
    pub crust: String,
}

/// Outcome of the name -> size -> crust cascade for one order line.
///
/// `name`, `size` and `crust` are the normalized requested values; the
/// `alternatives` / `available` lists are display strings, already sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MatchResult {
    Unavailable { name: String, alternatives: Vec<String> },
    SizeUnavailable { name: String, size: String, available: Vec<String> },
    CrustUnavailable { name: String, size: String, crust: String, available: Vec<String> },
    Available,
}

impl MatchResult {
    pub fn is_available(&self) -> bool {
        matches!(self, MatchResult::Available)
    }
}

/// Requested toppings split by membership in the vocabulary. Both lists are
/// normalized, deduplicated, and keep request order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToppingClassification {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

/// Inbound order fields. Absent fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRequest {
    #[serde(rename = "PizzaName")]
    pub pizza_name: String,
    #[serde(rename = "PizzaSize")]
    pub pizza_size: String,
    #[serde(rename = "PizzaCrust")]
    pub pizza_crust: String,
    #[serde(rename = "PizzaToppings")]
    pub pizza_toppings: String,
    #[serde(rename = "PizzaType")]
    pub pizza_type: String,
}

impl OrderRequest {
    /// Decode a JSON request body. Missing, null, or nested fields degrade to
    /// empty strings and numbers are read as text; only a body that is not a
    /// JSON object is an error.
    pub fn from_json(body: &str) -> Result<Self, RequestError> {
        let value: Value = serde_json::from_str(body)?;
        let Value::Object(fields) = value else {
            return Err(RequestError::NotAnObject);
        };

        let field = |key: &str| fields.get(key).and_then(cell_text).unwrap_or_default();

        Ok(Self {
            pizza_name: field("PizzaName"),
            pizza_size: field("PizzaSize"),
            pizza_crust: field("PizzaCrust"),
            pizza_toppings: field("PizzaToppings"),
            pizza_type: field("PizzaType"),
        })
    }
}

/// Read a scalar cell as text. Arrays and objects have no text form.
pub(crate) fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
