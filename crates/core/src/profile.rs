//! Vendor profile: the per-vendor constants the engines parameterize on.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ProfileError;

/// Environment variable pointing at a profile TOML file.
pub const PROFILE_PATH_ENV: &str = "SLICEBOT_PROFILE";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VendorProfile {
    /// Menu language requested from the vendor.
    pub language: String,
    /// Organization URI stamped on submitted orders.
    pub source_organization_uri: String,
    /// Deal codes in application priority order: the weekday special
    /// first, then the carryout bundle, then the size-specific double
    /// deals.
    pub deal_priority: Vec<String>,
}

impl Default for VendorProfile {
    fn default() -> Self {
        Self {
            language: "en".to_owned(),
            source_organization_uri: "order.dominos.ch".to_owned(),
            deal_priority: vec![
                "N054".to_owned(), // Crazy Weekday
                "L097".to_owned(), // Take 3 Away
                "N050".to_owned(), // Double Deal S
                "N051".to_owned(), // Double Deal M
                "N052".to_owned(), // Double Deal L
            ],
        }
    }
}

impl VendorProfile {
    /// Load a profile from the explicit path when given, else from the
    /// file named by `SLICEBOT_PROFILE`, else fall back to the built-in
    /// defaults. Unset fields in the file keep their defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ProfileError> {
        let path = match path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(PROFILE_PATH_ENV).map(PathBuf::from))
        {
            Some(path) => path,
            None => return Ok(Self::default()),
        };

        let raw = fs::read_to_string(&path).map_err(|source| ProfileError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw)
            .map_err(|source| ProfileError::Invalid { path: path.display().to_string(), source })
    }
}
