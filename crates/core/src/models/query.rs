use serde::{Deserialize, Serialize};

/// Sort direction for inventory listings.
///
/// The dashboard's sort select uses `"high"` / `"low"`; both spellings parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    /// Largest quantity first (dashboard default)
    #[default]
    Descending,
}

impl std::str::FromStr for SortDirection {
    type Err = crate::errors::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" | "desc" | "descending" => Ok(SortDirection::Descending),
            "low" | "asc" | "ascending" => Ok(SortDirection::Ascending),
            other => Err(crate::errors::CoreError::Validation(format!(
                "Unknown sort direction '{other}'"
            ))),
        }
    }
}
