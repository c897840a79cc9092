//! The order interpreter: free text in, structured order items out.
//!
//! One order line holds semicolon-separated sub-orders; each sub-order
//! independently resolves to a product, a size variant, and a set of
//! topping modifiers, or to nothing when no product matches with enough
//! confidence. The caller decides how to surface unmatched sub-orders.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::matcher::{self, MatchThresholds};
use crate::menu::{MenuProduct, MenuSource};
use crate::text;

/// Crust marker embedded in every pizza variant code after the size
/// figure; the vendor ships a single crust.
const CRUST_MARKER: &str = "HT";

/// Portion key for a whole pizza in the vendor's options encoding.
const WHOLE_PIZZA: &str = "1/1";

/// Upper bound on semicolon sub-orders interpreted from one line.
/// Sub-orders past the bound still occupy an output slot, as `None`.
pub const MAX_SUB_ORDERS: usize = 64;

const SYNONYMS_SMALL: &[&str] = &["small", "s", "25cm"];
const SYNONYMS_LARGE: &[&str] = &["large", "big", "l", "xl", "35cm"];

/// Pizza sizes, identified by the centimetre figure their variant codes
/// start with. Anything that is not small or large is standard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PizzaSize {
    Small,
    Standard,
    Large,
}

impl PizzaSize {
    /// Centimetre figure used as the variant code prefix.
    pub fn code(self) -> &'static str {
        match self {
            Self::Small => "25",
            Self::Standard => "30",
            Self::Large => "35",
        }
    }

    fn from_word(word: &str) -> Option<Self> {
        if SYNONYMS_SMALL.contains(&word) {
            Some(Self::Small)
        } else if SYNONYMS_LARGE.contains(&word) {
            Some(Self::Large)
        } else {
            None
        }
    }
}

/// A topping modifier: either the remove sentinel or a whole-pizza
/// quantity multiplier ("extra" inflects to 1.5).
///
/// On the wire this is `0` for removed and `{"1/1": "<decimal>"}` for a
/// quantity; the tagged form keeps downstream matches exhaustive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionValue {
    Removed,
    Quantity(Decimal),
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Removed => serializer.serialize_u32(0),
            Self::Quantity(qty) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(WHOLE_PIZZA, &qty.to_string())?;
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for OptionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OptionValueVisitor;

        impl<'de> Visitor<'de> for OptionValueVisitor {
            type Value = OptionValue;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("0 or a portion-to-quantity map")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                if value == 0 {
                    Ok(OptionValue::Removed)
                } else {
                    Err(E::custom("only 0 is a valid bare option value"))
                }
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                if value == 0 {
                    Ok(OptionValue::Removed)
                } else {
                    Err(E::custom("only 0 is a valid bare option value"))
                }
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut quantity = None;
                while let Some((portion, value)) = map.next_entry::<String, String>()? {
                    if portion == WHOLE_PIZZA {
                        quantity =
                            Some(value.parse::<Decimal>().map_err(de::Error::custom)?);
                    }
                }
                quantity
                    .map(OptionValue::Quantity)
                    .ok_or_else(|| de::Error::custom("missing 1/1 portion entry"))
            }
        }

        deserializer.deserialize_any(OptionValueVisitor)
    }
}

/// One structured order line, in the vendor wire shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderItem {
    /// A specific variant code, not the base product code.
    pub code: String,
    pub qty: u32,
    pub options: BTreeMap<String, OptionValue>,
}

/// Interpret a full order line. Each semicolon-separated sub-order yields
/// exactly one slot in the result, `None` when nothing matched, so the
/// output length always equals the sub-order count.
pub fn parse_all_orders<M: MenuSource>(order_text: &str, menu: &M) -> Vec<Option<OrderItem>> {
    order_text
        .split(';')
        .enumerate()
        .map(|(index, part)| {
            if index < MAX_SUB_ORDERS {
                parse_order(part.trim(), menu)
            } else {
                None
            }
        })
        .collect()
}

/// Interpret a single sub-order.
pub fn parse_order<M: MenuSource>(order: &str, menu: &M) -> Option<OrderItem> {
    let thresholds = MatchThresholds::default();

    let product_matches = matcher::find_matches(order, menu.products().values(), thresholds);
    let product = product_matches.first()?.entry;

    let mut item = OrderItem {
        code: product.variants.first()?.clone(),
        qty: 1,
        options: default_toppings(product),
    };

    if product.product_type.eq_ignore_ascii_case("pizza") {
        item.code = pick_variant(order, product).unwrap_or(item.code);
        apply_topping_modifiers(order, menu, &mut item, thresholds);
    }

    Some(item)
}

/// Scan the whole sub-order for size synonyms (the last mention wins) and
/// pick the variant carrying that size's code prefix.
fn pick_variant(order: &str, product: &MenuProduct) -> Option<String> {
    let mut size = PizzaSize::Standard;
    for word in text::fold(&order.replace(',', "")).split(' ') {
        if let Some(mentioned) = PizzaSize::from_word(word.trim()) {
            size = mentioned;
        }
    }

    let prefix = format!("{}{CRUST_MARKER}", size.code());
    product.variants.iter().filter(|code| code.starts_with(&prefix)).last().cloned()
}

/// Match non-sauce toppings in the sub-order and record them with their
/// quantity inflection: a "no" immediately before the matched word in the
/// same comma segment removes the topping, an "extra" raises it to 1.5.
///
/// Candidates are processed in the matcher's ranked order; a topping
/// matched more than once keeps the last write.
fn apply_topping_modifiers<M: MenuSource>(
    order: &str,
    menu: &M,
    item: &mut OrderItem,
    thresholds: MatchThresholds,
) {
    let catalog = menu.toppings().values().filter(|topping| !topping.is_sauce());
    let matches = matcher::find_matches(order, catalog, thresholds);
    if matches.is_empty() {
        return;
    }

    let segments: Vec<Vec<String>> =
        order.split(',').map(|part| text::normalize(part.trim())).collect();

    for candidate in matches {
        let mut quantity = Decimal::ONE;
        if candidate.word > 0 {
            let before = segments
                .get(candidate.part)
                .and_then(|words| words.get(candidate.word - 1))
                .map(String::as_str);
            match before {
                Some("no") => quantity = Decimal::ZERO,
                Some("extra") => quantity = Decimal::new(15, 1),
                _ => {}
            }
        }

        let value = if quantity > Decimal::ZERO {
            OptionValue::Quantity(quantity)
        } else {
            OptionValue::Removed
        };
        item.options.insert(candidate.entry.code.clone(), value);
    }
}

/// Parse the product's `code=qty` default-topping list into the initial
/// options map. Unparsable pairs are skipped.
fn default_toppings(product: &MenuProduct) -> BTreeMap<String, OptionValue> {
    let mut options = BTreeMap::new();
    if product.default_toppings.is_empty() {
        return options;
    }

    for pair in product.default_toppings.split(',') {
        let Some((code, qty)) = pair.split_once('=') else { continue };
        let Ok(qty) = qty.trim().parse::<Decimal>() else { continue };
        options.insert(code.trim().to_owned(), OptionValue::Quantity(qty));
    }
    options
}
