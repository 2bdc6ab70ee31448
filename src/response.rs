//! Response shaping.
//!
//! Every lookup answers with the same five-field [`MedicineInfo`] shape. A
//! catalog hit copies the record; a miss and an unavailable catalog each have
//! a fixed sentinel payload so callers can tell them apart from real data and
//! from each other.
use catalog::MedicineRecord;
use matcher::MatchOutcome;
use serde::{Deserialize, Serialize};

pub const NOT_FOUND_USAGE: &str = "Medicine not found in our database.";
pub const NOT_FOUND_DOS_DONTS: &str = "We are constantly adding new medicines.";
pub const NOT_FOUND_SIDE_EFFECTS: &str = "Data unavailable.";
pub const NOT_FOUND_DISCLAIMER: &str = "Please consult a doctor or check the spelling.";

pub const UNAVAILABLE_USAGE: &str = "Database Error: medicine catalog not loaded.";
pub const UNAVAILABLE_DOS_DONTS: &str = "Please check backend setup.";
pub const UNAVAILABLE_SIDE_EFFECTS: &str = "Unknown";
pub const UNAVAILABLE_DISCLAIMER: &str = "System Error.";

/// The externally visible answer to a lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MedicineInfo {
    pub medicine: String,
    pub usage: String,
    pub dos_donts: String,
    pub side_effects: String,
    pub disclaimer: String,
}

impl MedicineInfo {
    pub fn from_record(record: &MedicineRecord) -> Self {
        Self {
            medicine: record.name.clone(),
            usage: record.usage.clone(),
            dos_donts: record.dos_donts.clone(),
            side_effects: record.side_effects.clone(),
            disclaimer: record.disclaimer.clone(),
        }
    }

    /// Apology payload echoing the caller's query.
    pub fn not_found(query: &str) -> Self {
        Self {
            medicine: query.to_string(),
            usage: NOT_FOUND_USAGE.into(),
            dos_donts: NOT_FOUND_DOS_DONTS.into(),
            side_effects: NOT_FOUND_SIDE_EFFECTS.into(),
            disclaimer: NOT_FOUND_DISCLAIMER.into(),
        }
    }

    /// System-error payload used when no catalog is loaded.
    pub fn catalog_unavailable(query: &str) -> Self {
        Self {
            medicine: query.to_string(),
            usage: UNAVAILABLE_USAGE.into(),
            dos_donts: UNAVAILABLE_DOS_DONTS.into(),
            side_effects: UNAVAILABLE_SIDE_EFFECTS.into(),
            disclaimer: UNAVAILABLE_DISCLAIMER.into(),
        }
    }
}

/// Shape a match outcome for the caller.
///
/// `medicine` is always the record's canonical name on a hit; the outcome's
/// `matched_name` is not surfaced.
pub fn format_response(outcome: &MatchOutcome<'_>, original_query: &str) -> MedicineInfo {
    match outcome {
        MatchOutcome::Found { record, .. } => MedicineInfo::from_record(record),
        MatchOutcome::NotFound { .. } => MedicineInfo::not_found(original_query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcher::MatchKind;

    #[test]
    fn approximate_hit_reports_canonical_name() {
        let record = MedicineRecord::new("paracetamol", "U", "D", "S", "X");
        let outcome = MatchOutcome::Found {
            record: &record,
            matched_name: "Paracetamol".into(),
            kind: MatchKind::Approximate { score: 0.9 },
        };

        let info = format_response(&outcome, "paracetamal");

        assert_eq!(
            info,
            MedicineInfo {
                medicine: "paracetamol".into(),
                usage: "U".into(),
                dos_donts: "D".into(),
                side_effects: "S".into(),
                disclaimer: "X".into(),
            }
        );
    }

    #[test]
    fn not_found_echoes_query_verbatim() {
        let outcome = MatchOutcome::NotFound {
            query: "  Xyzzy ".into(),
        };
        let info = format_response(&outcome, "  Xyzzy ");
        assert_eq!(info.medicine, "  Xyzzy ");
        assert_eq!(info.usage, NOT_FOUND_USAGE);
        assert_eq!(info.disclaimer, NOT_FOUND_DISCLAIMER);
    }

    #[test]
    fn unavailable_sentinel_differs_from_not_found() {
        let missing = MedicineInfo::not_found("x");
        let unavailable = MedicineInfo::catalog_unavailable("x");
        assert_eq!(unavailable.medicine, "x");
        assert_ne!(missing, unavailable);
        assert_eq!(unavailable.disclaimer, "System Error.");
    }

    #[test]
    fn serializes_snake_case_fields() {
        let value = serde_json::to_value(MedicineInfo::not_found("x")).unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        for key in ["medicine", "usage", "dos_donts", "side_effects", "disclaimer"] {
            assert!(keys.contains(&key), "missing {key}");
        }
    }
}
