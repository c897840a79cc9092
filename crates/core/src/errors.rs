use thiserror::Error;

/// Collaborator contract violations in a supplied menu snapshot.
///
/// Parsing ambiguity never lands here: an unrecognized sub-order degrades
/// to "no item" and a malformed catalog entry is skipped. These variants
/// cover the states where the snapshot itself is unusable.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("menu snapshot is missing the {section} section")]
    MissingSection { section: &'static str },
    #[error("menu snapshot section {section} is not a map of entries")]
    MalformedSection { section: &'static str },
}

/// Failures loading a vendor profile file.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("cannot read profile file {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("profile file {path} is not valid TOML: {source}")]
    Invalid {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::CatalogError;

    #[test]
    fn catalog_errors_name_the_offending_section() {
        let missing = CatalogError::MissingSection { section: "Products" };
        assert_eq!(missing.to_string(), "menu snapshot is missing the Products section");

        let malformed = CatalogError::MalformedSection { section: "Coupons" };
        assert_eq!(
            malformed.to_string(),
            "menu snapshot section Coupons is not a map of entries"
        );
    }
}
