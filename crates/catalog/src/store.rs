use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::Instant;

use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::config::{CatalogConfig, DuplicatePolicy};
use crate::error::CatalogError;
use crate::types::MedicineRecord;

/// Immutable catalog plus its derived name index.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    records: Vec<MedicineRecord>,
    /// normalized name -> position in `records`
    by_name: HashMap<String, usize>,
    /// Unique normalized names in first-occurrence order.
    names: Vec<String>,
}

impl CatalogStore {
    /// Load the catalog file named by `cfg`.
    pub fn load(cfg: &CatalogConfig) -> Result<Self, CatalogError> {
        Self::load_with(&cfg.path, cfg.duplicate_policy)
    }

    /// Load a catalog file from an explicit path.
    pub fn load_with(
        path: impl AsRef<Path>,
        policy: DuplicatePolicy,
    ) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let start = Instant::now();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_reader(BufReader::new(file), policy)?;
        info!(
            path = %path.display(),
            records = store.len(),
            names = store.names.len(),
            elapsed_micros = start.elapsed().as_micros() as u64,
            "catalog_loaded"
        );
        Ok(store)
    }

    pub fn from_reader<R: Read>(reader: R, policy: DuplicatePolicy) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_records(parse_records(value)?, policy)
    }

    pub fn from_json_str(json: &str, policy: DuplicatePolicy) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_records(parse_records(value)?, policy)
    }

    /// Build the store and its index from already-parsed records.
    pub fn from_records(
        records: Vec<MedicineRecord>,
        policy: DuplicatePolicy,
    ) -> Result<Self, CatalogError> {
        let mut by_name = HashMap::with_capacity(records.len());
        let mut names = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let key = record.normalized_name();
            if key.is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            match by_name.entry(key) {
                Entry::Vacant(slot) => {
                    names.push(slot.key().clone());
                    slot.insert(index);
                }
                Entry::Occupied(mut slot) => {
                    let first = *slot.get();
                    if policy == DuplicatePolicy::Reject {
                        return Err(CatalogError::DuplicateName {
                            name: record.name.clone(),
                            first,
                            second: index,
                        });
                    }
                    warn!(
                        name = %record.name,
                        replaced = first,
                        replacement = index,
                        "duplicate_catalog_name"
                    );
                    slot.insert(index);
                }
            }
        }

        Ok(Self {
            records,
            by_name,
            names,
        })
    }

    /// Exact lookup by an already-normalized name.
    pub fn lookup_exact(&self, normalized: &str) -> Option<&MedicineRecord> {
        self.by_name.get(normalized).map(|&i| &self.records[i])
    }

    /// Unique normalized names in catalog order.
    pub fn normalized_names(&self) -> &[String] {
        &self.names
    }

    /// All records as loaded, duplicates included.
    pub fn records(&self) -> &[MedicineRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn parse_records(value: Value) -> Result<Vec<MedicineRecord>, CatalogError> {
    let Value::Array(items) = value else {
        return Err(CatalogError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(mut fields) => parse_record(index, &mut fields),
            _ => Err(CatalogError::NotAnObject { index }),
        })
        .collect()
}

fn parse_record(
    index: usize,
    fields: &mut Map<String, Value>,
) -> Result<MedicineRecord, CatalogError> {
    let mut take = |field: &'static str| match fields.remove(field) {
        None | Some(Value::Null) => Err(CatalogError::MissingField { index, field }),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(CatalogError::InvalidField { index, field }),
    };

    Ok(MedicineRecord {
        name: take("name")?,
        usage: take("usage")?,
        dos_donts: take("dos_donts")?,
        side_effects: take("side_effects")?,
        disclaimer: take("disclaimer")?,
    })
}
