//! The per-store menu snapshot and its accessor contract.
//!
//! A snapshot is fetched and decoded by an external collaborator; the
//! engines only ever read it. Field names mirror the vendor wire format
//! so the model round-trips the menu document unchanged.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CatalogError;
use crate::matcher::Matchable;

/// A product as it appears in the vendor menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MenuProduct {
    pub code: String,
    /// Display text; the only thing orders are matched against.
    pub name: String,
    /// Category label, e.g. "Pizza".
    pub product_type: String,
    /// Size/crust variant codes, first entry is the default.
    #[serde(default)]
    pub variants: Vec<String>,
    /// Comma-separated `code=qty` pairs applied to every new item.
    #[serde(default)]
    pub default_toppings: String,
}

/// A topping from the pizza topping catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Topping {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub tags: ToppingTags,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ToppingTags {
    #[serde(default)]
    pub sauce: bool,
}

impl Topping {
    /// Sauces are excluded from topping matching; order text almost never
    /// names them and they collide with product names.
    pub fn is_sauce(&self) -> bool {
        self.tags.sauce
    }
}

/// A promotional bundle deal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Deal {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub tags: DealTags,
    /// Slots a full deal instance must staff from the order.
    #[serde(default)]
    pub product_groups: Vec<ProductGroup>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DealTags {
    /// Weekday abbreviations the deal is restricted to, when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_service_methods: Option<ServiceMethods>,
}

/// The vendor encodes this tag as either a single label or a list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceMethods {
    One(String),
    Many(Vec<String>),
}

impl ServiceMethods {
    pub fn allows(&self, method: &str) -> bool {
        match self {
            Self::One(label) => label == method,
            Self::Many(labels) => labels.iter().any(|label| label == method),
        }
    }
}

/// One slot group of a deal: `required_qty` items drawn from the
/// eligible codes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductGroup {
    pub required_qty: u32,
    #[serde(default)]
    pub product_codes: Vec<String>,
}

/// Read-only accessor contract the engines require of a menu provider.
pub trait MenuSource {
    fn products(&self) -> &BTreeMap<String, MenuProduct>;
    /// Pizza-only topping catalog.
    fn toppings(&self) -> &BTreeMap<String, Topping>;
    fn deals(&self) -> &BTreeMap<String, Deal>;
}

/// Immutable menu snapshot for one store at one point in time.
///
/// Ordered maps keep every downstream iteration deterministic, which the
/// matcher's stable ranking and the optimizer's pool draw both rely on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Menu {
    products: BTreeMap<String, MenuProduct>,
    toppings: BTreeMap<String, Topping>,
    deals: BTreeMap<String, Deal>,
}

impl Menu {
    pub fn new(
        products: BTreeMap<String, MenuProduct>,
        toppings: BTreeMap<String, Topping>,
        deals: BTreeMap<String, Deal>,
    ) -> Self {
        Self { products, toppings, deals }
    }

    /// Decode a raw vendor menu document.
    ///
    /// Products live under `Products`, the pizza topping catalog under
    /// `Toppings.Pizza`, deals under `Coupons`. Entries that fail to
    /// decode are dropped; absent or non-map sections are a contract
    /// violation.
    pub fn from_snapshot(document: &Value) -> Result<Self, CatalogError> {
        let products = decode_entries(document.get("Products"), "Products")?;
        let toppings = decode_entries(
            document.get("Toppings").and_then(|toppings| toppings.get("Pizza")),
            "Toppings.Pizza",
        )?;
        let deals = decode_entries(document.get("Coupons"), "Coupons")?;
        Ok(Self { products, toppings, deals })
    }
}

impl MenuSource for Menu {
    fn products(&self) -> &BTreeMap<String, MenuProduct> {
        &self.products
    }

    fn toppings(&self) -> &BTreeMap<String, Topping> {
        &self.toppings
    }

    fn deals(&self) -> &BTreeMap<String, Deal> {
        &self.deals
    }
}

impl Matchable for MenuProduct {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Matchable for Topping {
    fn display_name(&self) -> &str {
        &self.name
    }
}

fn decode_entries<T: DeserializeOwned>(
    value: Option<&Value>,
    section: &'static str,
) -> Result<BTreeMap<String, T>, CatalogError> {
    let map = value
        .ok_or(CatalogError::MissingSection { section })?
        .as_object()
        .ok_or(CatalogError::MalformedSection { section })?;

    Ok(map
        .iter()
        .filter_map(|(code, raw)| {
            serde_json::from_value(raw.clone()).ok().map(|entry| (code.clone(), entry))
        })
        .collect())
}
