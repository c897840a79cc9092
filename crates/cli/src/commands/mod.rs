pub mod deals;
pub mod interpret;
pub mod profile;

use std::fs;
use std::path::Path;

use slicebot_core::Menu;

/// Outcome of one subcommand: the text for stdout plus the process exit
/// code.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

impl CommandResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self { exit_code: 0, output: output.into() }
    }

    pub fn failure(message: impl Into<String>, exit_code: u8) -> Self {
        Self { exit_code, output: format!("error: {}", message.into()) }
    }
}

pub(crate) fn load_menu(path: &Path) -> Result<Menu, String> {
    let raw = fs::read_to_string(path)
        .map_err(|error| format!("cannot read menu snapshot {}: {error}", path.display()))?;
    let document: serde_json::Value = serde_json::from_str(&raw)
        .map_err(|error| format!("menu snapshot {} is not JSON: {error}", path.display()))?;
    Menu::from_snapshot(&document).map_err(|error| error.to_string())
}
