//! The deal optimizer: pick the promotional bundles an order qualifies
//! for, without ever spending the same item twice.
//!
//! Deals are tried in an explicit priority order (most valuable first,
//! per vendor profile) and each is staffed greedily from the pool of
//! unclaimed items. This is a bounded heuristic, not a global search: a
//! failed instance hands its items back and the walk moves on.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::interpreter::OrderItem;
use crate::menu::{Deal, MenuSource};

/// Fulfillment channel gating deal eligibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceMethod {
    Carryout,
    Delivery,
}

impl ServiceMethod {
    /// Label used by the vendor's deal tags and order envelope.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Carryout => "Carryout",
            Self::Delivery => "Delivery",
        }
    }
}

impl fmt::Display for ServiceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied facts the optimizer gates deals on. The core never
/// reads the clock; the weekday is injected for testability.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderContext {
    pub weekday: Weekday,
    pub service_method: ServiceMethod,
}

/// One applied deal instance, in the vendor wire shape. A deal staffed
/// several times appears as repeated entries, each with quantity 1.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DealSelection {
    pub code: String,
    pub qty: u32,
}

/// Select deals for the ordered items, walking `priority` in order.
///
/// A deal is passed over when it is absent from the menu, restricted to
/// other weekdays, not valid for the order's service method, or missing
/// the tags that would say so. Surviving deals are staffed repeatedly
/// until the unclaimed pool no longer affords a full instance.
pub fn select_deals<M: MenuSource>(
    order_items: &[OrderItem],
    menu: &M,
    context: &OrderContext,
    priority: &[String],
) -> Vec<DealSelection> {
    let mut pool: Vec<&str> = order_items.iter().map(|item| item.code.as_str()).collect();
    let mut selected = Vec::new();

    for deal_code in priority {
        let Some(deal) = menu.deals().get(deal_code) else { continue };
        if !available_on(deal, context.weekday) {
            continue;
        }
        if !allows_method(deal, context.service_method) {
            continue;
        }
        // A deal demanding no items at all would staff forever.
        if deal.product_groups.iter().map(|group| group.required_qty).sum::<u32>() == 0 {
            continue;
        }

        while staff_instance(deal, &mut pool) {
            selected.push(DealSelection { code: deal.code.clone(), qty: 1 });
        }
    }

    selected
}

/// Weekday gate: absent tag means every day; otherwise the three-letter
/// abbreviation must start with one of the tagged day labels.
fn available_on(deal: &Deal, weekday: Weekday) -> bool {
    match &deal.tags.days {
        Some(days) => {
            let abbrev = weekday.to_string();
            days.iter().any(|day| abbrev.starts_with(day.as_str()))
        }
        None => true,
    }
}

/// Service-method gate: a deal that does not say which methods it is
/// valid for is skipped rather than assumed universal.
fn allows_method(deal: &Deal, method: ServiceMethod) -> bool {
    deal.tags
        .valid_service_methods
        .as_ref()
        .is_some_and(|methods| methods.allows(method.as_str()))
}

/// Try to fully staff one instance of the deal from the unclaimed pool:
/// every slot of every product group takes the first eligible unclaimed
/// item. On any unfillable slot the whole attempt unwinds and its items
/// return to the pool.
fn staff_instance<'a>(deal: &Deal, pool: &mut Vec<&'a str>) -> bool {
    let mut claimed = Vec::new();
    for group in &deal.product_groups {
        for _ in 0..group.required_qty {
            let slot = pool
                .iter()
                .position(|code| group.product_codes.iter().any(|eligible| eligible == *code));
            match slot {
                Some(index) => claimed.push(pool.remove(index)),
                None => {
                    pool.append(&mut claimed);
                    return false;
                }
            }
        }
    }
    true
}
