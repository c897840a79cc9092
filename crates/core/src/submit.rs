//! Assembly of the vendor submission envelope.
//!
//! The interpreter's items and the optimizer's selections are plain data;
//! this module numbers them, attaches the bookkeeping fields the vendor's
//! validation endpoint expects, and wraps everything in the posted
//! `Order` envelope. Transport is a collaborator concern.

use serde::{Deserialize, Serialize};

use crate::interpreter::OrderItem;
use crate::optimizer::{DealSelection, ServiceMethod};
use crate::profile::VendorProfile;

/// An order item decorated for submission. `id` is positional: the index
/// of the sub-order the item came from, which is also what the chat
/// surface shows the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubmittedProduct {
    #[serde(flatten)]
    pub item: OrderItem,
    #[serde(rename = "ID")]
    pub id: usize,
    #[serde(rename = "isNew")]
    pub is_new: bool,
}

/// The order envelope posted to the vendor's validate and price
/// endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderEnvelope {
    pub service_method: ServiceMethod,
    #[serde(rename = "SourceOrganizationURI")]
    pub source_organization_uri: String,
    pub language_code: String,
    #[serde(rename = "StoreID")]
    pub store_id: String,
    pub products: Vec<SubmittedProduct>,
    #[serde(default)]
    pub coupons: Vec<DealSelection>,
}

/// Top-level request body: the vendor nests everything under `Order`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    #[serde(rename = "Order")]
    pub order: OrderEnvelope,
}

/// Build the submission envelope from one interpreted order line.
/// Unmatched sub-orders are dropped; matched ones keep their sub-order
/// index as `ID`.
pub fn build_envelope(
    store_id: &str,
    profile: &VendorProfile,
    service_method: ServiceMethod,
    items: &[Option<OrderItem>],
    deals: &[DealSelection],
) -> OrderRequest {
    let products = items
        .iter()
        .enumerate()
        .filter_map(|(id, item)| {
            item.as_ref().map(|item| SubmittedProduct { item: item.clone(), id, is_new: false })
        })
        .collect();

    OrderRequest {
        order: OrderEnvelope {
            service_method,
            source_organization_uri: profile.source_organization_uri.clone(),
            language_code: profile.language.clone(),
            store_id: store_id.to_owned(),
            products,
            coupons: deals.to_vec(),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use super::build_envelope;
    use crate::interpreter::OrderItem;
    use crate::optimizer::{DealSelection, ServiceMethod};
    use crate::profile::VendorProfile;

    fn item(code: &str) -> OrderItem {
        OrderItem { code: code.to_owned(), qty: 1, options: BTreeMap::new() }
    }

    #[test]
    fn unmatched_items_are_dropped_and_ids_stay_positional() {
        let items = [Some(item("30HTPEP")), None, Some(item("30HTMRG"))];
        let request = build_envelope(
            "9001",
            &VendorProfile::default(),
            ServiceMethod::Carryout,
            &items,
            &[],
        );

        let ids: Vec<usize> = request.order.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 2]);
        assert!(request.order.products.iter().all(|p| !p.is_new));
    }

    #[test]
    fn envelope_serializes_in_the_vendor_shape() {
        let items = [Some(item("30HTPEP"))];
        let deals = [DealSelection { code: "N051".to_owned(), qty: 1 }];
        let request = build_envelope(
            "9001",
            &VendorProfile::default(),
            ServiceMethod::Carryout,
            &items,
            &deals,
        );

        let wire = serde_json::to_value(&request).expect("serializes");
        assert_eq!(
            wire,
            json!({
                "Order": {
                    "ServiceMethod": "Carryout",
                    "SourceOrganizationURI": "order.dominos.ch",
                    "LanguageCode": "en",
                    "StoreID": "9001",
                    "Products": [
                        { "Code": "30HTPEP", "Qty": 1, "Options": {}, "ID": 0, "isNew": false }
                    ],
                    "Coupons": [
                        { "Code": "N051", "Qty": 1 }
                    ]
                }
            })
        );
    }
}
