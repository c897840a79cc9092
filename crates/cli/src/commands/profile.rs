use std::path::Path;

use slicebot_core::VendorProfile;

use crate::commands::CommandResult;

pub fn run(path: Option<&Path>) -> CommandResult {
    let profile = match VendorProfile::load(path) {
        Ok(profile) => profile,
        Err(error) => return CommandResult::failure(error.to_string(), 2),
    };

    match toml::to_string_pretty(&profile) {
        Ok(output) => CommandResult::success(output.trim_end().to_owned()),
        Err(error) => CommandResult::failure(format!("serialization failed: {error}"), 3),
    }
}
