use std::path::Path;

use chrono::Weekday;
use slicebot_core::{
    parse_all_orders, select_deals, summary, OrderContext, ServiceMethod, VendorProfile,
};

use crate::commands::{load_menu, CommandResult};

pub fn run(
    menu_path: &Path,
    order: &str,
    service_method: ServiceMethod,
    weekday: Weekday,
    profile_path: Option<&Path>,
    json: bool,
) -> CommandResult {
    let menu = match load_menu(menu_path) {
        Ok(menu) => menu,
        Err(message) => return CommandResult::failure(message, 2),
    };
    let profile = match VendorProfile::load(profile_path) {
        Ok(profile) => profile,
        Err(error) => return CommandResult::failure(error.to_string(), 2),
    };

    let items: Vec<_> = parse_all_orders(order, &menu).into_iter().flatten().collect();
    let context = OrderContext { weekday, service_method };
    let selected = select_deals(&items, &menu, &context, &profile.deal_priority);
    tracing::debug!(items = items.len(), deals = selected.len(), %weekday);

    if json {
        return match serde_json::to_string_pretty(&selected) {
            Ok(output) => CommandResult::success(output),
            Err(error) => CommandResult::failure(format!("serialization failed: {error}"), 3),
        };
    }

    if selected.is_empty() {
        return CommandResult::success("no applicable deals");
    }

    let lines: Vec<String> = selected
        .iter()
        .map(|selection| format!("- {}", summary::deal_line(&selection.code, &menu)))
        .collect();
    CommandResult::success(lines.join("\n"))
}
