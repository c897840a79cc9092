use std::path::Path;

use slicebot_core::{parse_all_orders, summary};

use crate::commands::{load_menu, CommandResult};

pub fn run(menu_path: &Path, order: &str, json: bool) -> CommandResult {
    let menu = match load_menu(menu_path) {
        Ok(menu) => menu,
        Err(message) => return CommandResult::failure(message, 2),
    };

    let items = parse_all_orders(order, &menu);
    tracing::debug!(sub_orders = items.len(), matched = items.iter().flatten().count());

    if json {
        return match serde_json::to_string_pretty(&items) {
            Ok(output) => CommandResult::success(output),
            Err(error) => CommandResult::failure(format!("serialization failed: {error}"), 3),
        };
    }

    let lines: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Some(item) => {
                let customization = summary::customization_line(item, &menu);
                if customization.is_empty() {
                    format!("{}. {}", index + 1, item.code)
                } else {
                    format!("{}. {} - {customization}", index + 1, item.code)
                }
            }
            None => format!("{}. (no match)", index + 1),
        })
        .collect();

    CommandResult::success(lines.join("\n"))
}
