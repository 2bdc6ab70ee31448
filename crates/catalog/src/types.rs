use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// Field names match the on-disk source format, so a record serializes back
/// to the same shape it was loaded from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicineRecord {
    /// Canonical display name.
    pub name: String,
    pub usage: String,
    pub dos_donts: String,
    pub side_effects: String,
    /// Safety notice shown with every answer.
    pub disclaimer: String,
}

impl MedicineRecord {
    pub fn new(
        name: impl Into<String>,
        usage: impl Into<String>,
        dos_donts: impl Into<String>,
        side_effects: impl Into<String>,
        disclaimer: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            usage: usage.into(),
            dos_donts: dos_donts.into(),
            side_effects: side_effects.into(),
            disclaimer: disclaimer.into(),
        }
    }

    /// Index key for this record.
    pub fn normalized_name(&self) -> String {
        normalize_name(&self.name)
    }
}

/// Lower-case and trim a name.
///
/// Used for both catalog keys and incoming queries so that exact lookup is
/// insensitive to case and surrounding whitespace.
pub fn normalize_name(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}
