//! Human-readable renderings of interpreted orders for the chat surface.

use rust_decimal::Decimal;

use crate::interpreter::{OptionValue, OrderItem};
use crate::menu::MenuSource;

/// Render an item's topping modifiers the way the chat listing shows
/// them: `no Onions, extra Ham, Mushrooms`. Toppings missing from the
/// catalog fall back to their code.
pub fn customization_line<M: MenuSource>(item: &OrderItem, menu: &M) -> String {
    let extra = Decimal::new(15, 1);
    let mut parts = Vec::with_capacity(item.options.len());

    for (code, value) in &item.options {
        let name = menu.toppings().get(code).map_or(code.as_str(), |topping| topping.name.as_str());
        let part = match value {
            OptionValue::Removed => format!("no {name}"),
            OptionValue::Quantity(qty) if qty.is_zero() => format!("no {name}"),
            OptionValue::Quantity(qty) if *qty == extra => format!("extra {name}"),
            OptionValue::Quantity(_) => name.to_owned(),
        };
        parts.push(part);
    }

    parts.join(", ")
}

/// Listing line for a selected deal. Vendor deal names carry a price
/// suffix after a dash; only the leading part is shown.
pub fn deal_line<M: MenuSource>(deal_code: &str, menu: &M) -> String {
    match menu.deals().get(deal_code) {
        Some(deal) => deal.name.split('-').next().unwrap_or("").trim().to_owned(),
        None => deal_code.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use rust_decimal::Decimal;

    use super::{customization_line, deal_line};
    use crate::interpreter::{OptionValue, OrderItem};
    use crate::menu::{Deal, DealTags, Menu, Topping, ToppingTags};

    fn menu() -> Menu {
        let toppings = BTreeMap::from([
            (
                "O".to_owned(),
                Topping {
                    code: "O".to_owned(),
                    name: "Onions".to_owned(),
                    tags: ToppingTags::default(),
                },
            ),
            (
                "H".to_owned(),
                Topping {
                    code: "H".to_owned(),
                    name: "Ham".to_owned(),
                    tags: ToppingTags::default(),
                },
            ),
        ]);
        let deals = BTreeMap::from([(
            "N051".to_owned(),
            Deal {
                code: "N051".to_owned(),
                name: "Double Deal M - 24.90 CHF".to_owned(),
                tags: DealTags::default(),
                product_groups: Vec::new(),
            },
        )]);
        Menu::new(BTreeMap::new(), toppings, deals)
    }

    #[test]
    fn renders_each_inflection_form() {
        let options = BTreeMap::from([
            ("H".to_owned(), OptionValue::Quantity(Decimal::new(15, 1))),
            ("O".to_owned(), OptionValue::Removed),
            ("Z".to_owned(), OptionValue::Quantity(Decimal::ONE)),
        ]);
        let item = OrderItem { code: "35HTPEP".to_owned(), qty: 1, options };

        assert_eq!(customization_line(&item, &menu()), "extra Ham, no Onions, Z");
    }

    #[test]
    fn zero_quantity_reads_as_removed() {
        let options = BTreeMap::from([("O".to_owned(), OptionValue::Quantity(Decimal::ZERO))]);
        let item = OrderItem { code: "35HTPEP".to_owned(), qty: 1, options };

        assert_eq!(customization_line(&item, &menu()), "no Onions");
    }

    #[test]
    fn deal_names_are_trimmed_at_the_price_dash() {
        assert_eq!(deal_line("N051", &menu()), "Double Deal M");
        assert_eq!(deal_line("GHOST", &menu()), "GHOST");
    }
}
