mod age;
mod parser;

pub use age::account_age_years;
pub use parser::{RawDatePart, RawTradeline};

use crate::config::CatalogConfig;
use crate::workflows::fundability::ProfileKind;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Raised when a catalog source cannot be turned into fully derived tradelines.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("tradeline {index} ({name}): origination year '{value}' is not a valid year")]
    MalformedYear {
        index: usize,
        name: String,
        value: String,
    },
    #[error("tradeline {index} ({name}): origination month '{value}' is not between 1 and 12")]
    MalformedMonth {
        index: usize,
        name: String,
        value: String,
    },
    #[error("tradeline {index} ({name}): {field} '{value}' is not a number")]
    MalformedAmount {
        index: usize,
        name: String,
        field: &'static str,
        value: String,
    },
    #[error("tradeline document must be a list or contain a Standard_Tradeline_List")]
    UnrecognizedDocument,
    #[error("failed to read tradeline source: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid tradeline JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid tradeline CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("{path}: {source}")]
    Source {
        path: PathBuf,
        #[source]
        source: Box<DataError>,
    },
}

/// Catalog entry with its account age derived at load time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tradeline {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub origination_year: i32,
    pub origination_month: u32,
    pub account_age_years: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

/// Unprocessed catalog sequences as read from their static sources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCatalog {
    pub business: Vec<RawTradeline>,
    pub consumer: Vec<RawTradeline>,
    pub authorized_users: Vec<RawTradeline>,
}

/// Read-only tradeline catalog shared across evaluations.
///
/// Each sequence keeps its source order; recommendation tiers take prefixes of it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    as_of: NaiveDate,
    business: Vec<Tradeline>,
    consumer: Vec<Tradeline>,
    authorized_users: Vec<Tradeline>,
}

/// Derive every raw sequence against `as_of`, failing the whole load on the first bad record.
pub fn load_catalog(raw: RawCatalog, as_of: NaiveDate) -> Result<Catalog, DataError> {
    let RawCatalog {
        business,
        consumer,
        authorized_users,
    } = raw;

    Ok(Catalog {
        as_of,
        business: derive_tradelines(business, as_of)?,
        consumer: derive_tradelines(consumer, as_of)?,
        authorized_users: derive_tradelines(authorized_users, as_of)?,
    })
}

/// Compute `account_age_years` for each record, preserving order.
pub fn derive_tradelines(
    raw: Vec<RawTradeline>,
    as_of: NaiveDate,
) -> Result<Vec<Tradeline>, DataError> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| derive_tradeline(index, record, as_of))
        .collect()
}

fn derive_tradeline(
    index: usize,
    record: RawTradeline,
    as_of: NaiveDate,
) -> Result<Tradeline, DataError> {
    let RawTradeline {
        name,
        category,
        year,
        month,
        credit_limit,
        price,
        attributes,
    } = record;

    let origination_year = match year.as_ref().filter(|part| !part.is_blank()) {
        Some(part) => age::parse_year(part).ok_or_else(|| DataError::MalformedYear {
            index,
            name: name.clone(),
            value: part.to_string(),
        })?,
        None => as_of.year(),
    };

    let origination_month = match month.as_ref().filter(|part| !part.is_blank()) {
        Some(part) => age::parse_month(part).ok_or_else(|| DataError::MalformedMonth {
            index,
            name: name.clone(),
            value: part.to_string(),
        })?,
        None => 1,
    };

    let account_age_years = account_age_years(as_of, origination_year, origination_month)
        .ok_or_else(|| DataError::MalformedYear {
            index,
            name: name.clone(),
            value: origination_year.to_string(),
        })?;

    Ok(Tradeline {
        name,
        category,
        origination_year,
        origination_month,
        account_age_years,
        credit_limit,
        price,
        attributes,
    })
}

impl Catalog {
    pub fn empty(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            business: Vec::new(),
            consumer: Vec::new(),
            authorized_users: Vec::new(),
        }
    }

    /// Load the business, consumer, and authorized-user sources named in configuration.
    ///
    /// The authorized-user source is optional; a missing file yields an empty sequence.
    pub fn from_config(config: &CatalogConfig, as_of: NaiveDate) -> Result<Self, DataError> {
        let business = parser::read_path(&config.business_path)?;
        let consumer = parser::read_path(&config.consumer_path)?;
        let authorized_users = if config.authorized_users_path.exists() {
            parser::read_path(&config.authorized_users_path)?
        } else {
            debug!(
                path = %config.authorized_users_path.display(),
                "authorized-user catalog not found, continuing without candidates"
            );
            Vec::new()
        };

        let catalog = load_catalog(
            RawCatalog {
                business,
                consumer,
                authorized_users,
            },
            as_of,
        )?;

        info!(
            %as_of,
            business = catalog.business.len(),
            consumer = catalog.consumer.len(),
            authorized_users = catalog.authorized_users.len(),
            "tradeline catalog loaded"
        );

        Ok(catalog)
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    pub fn business(&self) -> &[Tradeline] {
        &self.business
    }

    pub fn consumer(&self) -> &[Tradeline] {
        &self.consumer
    }

    pub fn authorized_users(&self) -> &[Tradeline] {
        &self.authorized_users
    }

    /// Catalog sequence that recommendations for `kind` draw from.
    pub fn tradelines(&self, kind: ProfileKind) -> &[Tradeline] {
        match kind {
            ProfileKind::Consumer => &self.consumer,
            ProfileKind::Business => &self.business,
        }
    }
}

/// Read a single JSON tradeline document into raw records.
pub fn read_json<R: Read>(reader: R) -> Result<Vec<RawTradeline>, DataError> {
    parser::read_json(reader)
}

/// Read a CSV tradeline export into raw records.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RawTradeline>, DataError> {
    parser::read_csv(reader)
}

/// Read a tradeline source file, choosing CSV or JSON by extension.
pub fn read_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawTradeline>, DataError> {
    parser::read_path(path)
}
