//! Slicebot core: turn free-text chat orders into structured, price-able
//! vendor orders.
//!
//! The interpreter and optimizer are pure functions over an in-memory
//! menu snapshot; fetching the snapshot, talking to the vendor, and the
//! chat surface itself are collaborator concerns.

pub mod errors;
pub mod interpreter;
pub mod matcher;
pub mod menu;
pub mod optimizer;
pub mod profile;
pub mod submit;
pub mod summary;
pub mod text;

pub use errors::{CatalogError, ProfileError};
pub use interpreter::{parse_all_orders, parse_order, OptionValue, OrderItem, PizzaSize};
pub use matcher::{find_matches, MatchCandidate, MatchThresholds, Matchable};
pub use menu::{
    Deal, DealTags, Menu, MenuProduct, MenuSource, ProductGroup, ServiceMethods, Topping,
    ToppingTags,
};
pub use optimizer::{select_deals, DealSelection, OrderContext, ServiceMethod};
pub use profile::VendorProfile;
pub use submit::{build_envelope, OrderEnvelope, OrderRequest, SubmittedProduct};
