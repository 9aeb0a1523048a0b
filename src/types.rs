//! Core schema types for ingestion.
//!
//! A [`Schema`] is an ordered list of typed, nullable [`Field`]s. It is bound
//! to CSV columns **by header name**, never by position, and converts to a
//! Polars schema for the actual read. Schemas are plain data and can be
//! round-tripped through JSON (see [`Schema::from_json`]).

use serde::{Deserialize, Serialize};

/// Logical data type for a schema field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
}

impl ColumnType {
    /// Whether this type participates in [`crate::stats::describe`] summaries.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Int64 | ColumnType::Float64)
    }

    pub(crate) fn to_polars(&self) -> polars::prelude::DataType {
        use polars::prelude::DataType;
        match self {
            ColumnType::Int64 => DataType::Int64,
            ColumnType::Float64 => DataType::Float64,
            ColumnType::Bool => DataType::Boolean,
            ColumnType::Utf8 => DataType::String,
        }
    }
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field/column name, matched against the CSV header.
    pub name: String,
    /// Field data type.
    pub data_type: ColumnType,
    /// Whether nulls are allowed after ingestion.
    #[serde(default = "default_nullable")]
    pub nullable: bool,
}

fn default_nullable() -> bool {
    true
}

impl Field {
    /// Create a new nullable field.
    pub fn new(name: impl Into<String>, data_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
        }
    }

    /// Create a field that rejects nulls after ingestion.
    pub fn required(name: impl Into<String>, data_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: false,
        }
    }
}

/// An ordered list of fields describing the expected shape of incoming data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Parse a schema from a JSON definition, e.g.
    /// `{"fields":[{"name":"id","data_type":"int64"}]}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub(crate) fn to_polars(&self) -> polars::prelude::Schema {
        self.fields
            .iter()
            .map(|f| polars::prelude::Field::new(f.name.as_str().into(), f.data_type.to_polars()))
            .collect()
    }

    /// Schema of the FiveThirtyEight comic characters dataset.
    ///
    /// Column names follow the published CSV header (`FIRST APPEARANCE`
    /// contains a space). All fields are nullable; the data has plenty of
    /// gaps.
    pub fn comic_characters() -> Self {
        Self::new(vec![
            Field::new("page_id", ColumnType::Int64),
            Field::new("name", ColumnType::Utf8),
            Field::new("urlslug", ColumnType::Utf8),
            Field::new("ID", ColumnType::Utf8),
            Field::new("ALIGN", ColumnType::Utf8),
            Field::new("EYE", ColumnType::Utf8),
            Field::new("HAIR", ColumnType::Utf8),
            Field::new("SEX", ColumnType::Utf8),
            Field::new("GSM", ColumnType::Utf8),
            Field::new("ALIVE", ColumnType::Utf8),
            Field::new("APPEARANCES", ColumnType::Int64),
            Field::new("FIRST APPEARANCE", ColumnType::Utf8),
            Field::new("YEAR", ColumnType::Int64),
        ])
    }
}
