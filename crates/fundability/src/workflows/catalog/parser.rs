use super::DataError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::io::{BufReader, Read};
use std::path::Path;

const STANDARD_LIST_KEY: &str = "Standard_Tradeline_List";

/// Tradeline record as it appears in a catalog source, with amounts already cleaned.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTradeline {
    pub name: String,
    pub category: Option<String>,
    pub year: Option<RawDatePart>,
    pub month: Option<RawDatePart>,
    pub credit_limit: Option<f64>,
    pub price: Option<f64>,
    pub attributes: BTreeMap<String, Value>,
}

/// Year or month as supplied by the source, before validation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDatePart {
    Number(i64),
    Decimal(f64),
    Text(String),
}

impl RawDatePart {
    pub(crate) fn is_blank(&self) -> bool {
        matches!(self, RawDatePart::Text(value) if value.trim().is_empty())
    }
}

impl fmt::Display for RawDatePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawDatePart::Number(value) => write!(f, "{value}"),
            RawDatePart::Decimal(value) => write!(f, "{value}"),
            RawDatePart::Text(value) => write!(f, "{value}"),
        }
    }
}

pub(crate) fn read_json<R: Read>(reader: R) -> Result<Vec<RawTradeline>, DataError> {
    let document: Value = serde_json::from_reader(reader)?;
    let list = match document {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut fields) => fields
            .remove(STANDARD_LIST_KEY)
            .ok_or(DataError::UnrecognizedDocument)?,
        _ => return Err(DataError::UnrecognizedDocument),
    };

    let rows: Vec<JsonTradelineRow> = serde_json::from_value(list)?;
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| row.into_raw(index))
        .collect()
}

pub(crate) fn read_csv<R: Read>(reader: R) -> Result<Vec<RawTradeline>, DataError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for (index, row) in csv_reader.deserialize::<CsvTradelineRow>().enumerate() {
        records.push(row?.into_raw(index)?);
    }

    Ok(records)
}

pub(crate) fn read_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawTradeline>, DataError> {
    let path = path.as_ref();
    let is_csv = path
        .extension()
        .map(|extension| extension.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    std::fs::File::open(path)
        .map_err(DataError::from)
        .and_then(|file| {
            let reader = BufReader::new(file);
            if is_csv {
                read_csv(reader)
            } else {
                read_json(reader)
            }
        })
        .map_err(|source| DataError::Source {
            path: path.to_path_buf(),
            source: Box::new(source),
        })
}

#[derive(Debug, Deserialize)]
struct JsonTradelineRow {
    #[serde(alias = "Name", default)]
    name: String,
    #[serde(alias = "Category", default)]
    category: Option<String>,
    #[serde(alias = "Year", default)]
    year: Option<RawDatePart>,
    #[serde(alias = "Month", default)]
    month: Option<RawDatePart>,
    #[serde(alias = "Credit_Limit", default)]
    credit_limit: Option<Value>,
    #[serde(alias = "Price", default)]
    price: Option<Value>,
    #[serde(flatten)]
    attributes: BTreeMap<String, Value>,
}

impl JsonTradelineRow {
    fn into_raw(self, index: usize) -> Result<RawTradeline, DataError> {
        let credit_limit = json_amount(index, &self.name, "credit limit", self.credit_limit)?;
        let price = json_amount(index, &self.name, "price", self.price)?;

        Ok(RawTradeline {
            name: self.name,
            category: self.category,
            year: self.year,
            month: self.month,
            credit_limit,
            price,
            attributes: self.attributes,
        })
    }
}

fn json_amount(
    index: usize,
    name: &str,
    field: &'static str,
    value: Option<Value>,
) -> Result<Option<f64>, DataError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
        Some(Value::String(text)) => parse_amount(index, name, field, Some(text)),
        Some(Value::Number(number)) => number
            .as_f64()
            .filter(|amount| amount.is_finite())
            .map(Some)
            .ok_or_else(|| DataError::MalformedAmount {
                index,
                name: name.to_string(),
                field,
                value: number.to_string(),
            }),
        Some(other) => Err(DataError::MalformedAmount {
            index,
            name: name.to_string(),
            field,
            value: other.to_string(),
        }),
    }
}

#[derive(Debug, Deserialize)]
struct CsvTradelineRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Category", default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
    #[serde(rename = "Year", default, deserialize_with = "empty_string_as_none")]
    year: Option<String>,
    #[serde(rename = "Month", default, deserialize_with = "empty_string_as_none")]
    month: Option<String>,
    #[serde(
        rename = "Credit Limit",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    credit_limit: Option<String>,
    #[serde(rename = "Price", default, deserialize_with = "empty_string_as_none")]
    price: Option<String>,
}

impl CsvTradelineRow {
    fn into_raw(self, index: usize) -> Result<RawTradeline, DataError> {
        let credit_limit = parse_amount(index, &self.name, "credit limit", self.credit_limit)?;
        let price = parse_amount(index, &self.name, "price", self.price)?;

        Ok(RawTradeline {
            name: self.name,
            category: self.category,
            year: self.year.map(RawDatePart::Text),
            month: self.month.map(RawDatePart::Text),
            credit_limit,
            price,
            attributes: BTreeMap::new(),
        })
    }
}

fn parse_amount(
    index: usize,
    name: &str,
    field: &'static str,
    value: Option<String>,
) -> Result<Option<f64>, DataError> {
    let Some(value) = value else {
        return Ok(None);
    };

    let cleaned: String = value
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .map(Some)
        .ok_or_else(|| DataError::MalformedAmount {
            index,
            name: name.to_string(),
            field,
            value,
        })
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
