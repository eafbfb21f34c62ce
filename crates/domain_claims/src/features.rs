//! Feature vector types
//!
//! An [`EncodedFeatureVector`] is the ordered, named row handed to the
//! classifier. Column order is part of its identity: two vectors with the
//! same columns in a different order are not equal.

use std::collections::BTreeSet;
use std::fmt;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::error::ClaimError;

/// Column names produced by the encoder
pub mod columns {
    pub const AGENCY: &str = "Agency";
    pub const AGENCY_TYPE: &str = "AgencyType";
    pub const PRODUCT_NAME: &str = "ProductName";
    pub const DISTRIBUTION_CHANNEL: &str = "DistributionChannel";
    pub const DURATION: &str = "Duration";
    pub const NET_SALES: &str = "NetSales";
    pub const COMMISSION: &str = "Commission";
    pub const AGE: &str = "Age";
    pub const PROFIT: &str = "Profit";
    pub const AGE_GROUP_ADULT_YOUNG: &str = "AgeGroup_AdultYoung";
    pub const AGE_GROUP_ADULT: &str = "AgeGroup_Adult";
    pub const AGE_GROUP_MID_AGE: &str = "AgeGroup_MidAge";
    pub const AGE_GROUP_SENIOR: &str = "AgeGroup_Senior";
}

/// Columns passed through as raw categorical tokens
///
/// The classifier handles these natively; every other column is numeric.
pub const CATEGORICAL_COLUMNS: [&str; 2] = [columns::AGENCY, columns::PRODUCT_NAME];

/// Column names used by the travel insurance dataset, mapped to the encoder's
///
/// Models trained on the raw dataset carry these names in their schema.
pub const DATASET_COLUMN_ALIASES: [(&str, &str); 7] = [
    ("Agency Type", columns::AGENCY_TYPE),
    ("Product Name", columns::PRODUCT_NAME),
    ("Distribution Channel", columns::DISTRIBUTION_CHANNEL),
    ("Net Sales", columns::NET_SALES),
    ("Commision (in value)", columns::COMMISSION),
    ("AgeGroup_Young Adult", columns::AGE_GROUP_ADULT_YOUNG),
    ("AgeGroup_Mid-Age", columns::AGE_GROUP_MID_AGE),
];

/// Resolves a schema column to the encoder column it denotes, if any
pub fn canonical_column(name: &str) -> Option<&'static str> {
    const CANONICAL: [&str; 13] = [
        columns::AGENCY,
        columns::AGENCY_TYPE,
        columns::PRODUCT_NAME,
        columns::DISTRIBUTION_CHANNEL,
        columns::DURATION,
        columns::NET_SALES,
        columns::COMMISSION,
        columns::AGE,
        columns::PROFIT,
        columns::AGE_GROUP_ADULT_YOUNG,
        columns::AGE_GROUP_ADULT,
        columns::AGE_GROUP_MID_AGE,
        columns::AGE_GROUP_SENIOR,
    ];

    CANONICAL
        .iter()
        .copied()
        .find(|column| *column == name)
        .or_else(|| {
            DATASET_COLUMN_ALIASES
                .iter()
                .find(|(alias, _)| *alias == name)
                .map(|(_, column)| *column)
        })
}

/// Whether a schema column, under either naming, carries a categorical token
pub fn is_categorical_column(name: &str) -> bool {
    canonical_column(name).is_some_and(|column| CATEGORICAL_COLUMNS.contains(&column))
}

/// Age bucket derived from the policyholder's age
///
/// Bins are right-inclusive: `(0,18]`, `(18,30]`, `(30,45]`, `(45,60]`, `(60,100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AgeGroup {
    Teen,
    AdultYoung,
    Adult,
    MidAge,
    Senior,
}

impl AgeGroup {
    /// Groups in bin order
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::Teen,
        AgeGroup::AdultYoung,
        AgeGroup::Adult,
        AgeGroup::MidAge,
        AgeGroup::Senior,
    ];

    /// Buckets an age, failing for ages outside `(0, 100]`
    pub fn from_age(age: u32) -> Result<Self, ClaimError> {
        match age {
            1..=18 => Ok(AgeGroup::Teen),
            19..=30 => Ok(AgeGroup::AdultYoung),
            31..=45 => Ok(AgeGroup::Adult),
            46..=60 => Ok(AgeGroup::MidAge),
            61..=100 => Ok(AgeGroup::Senior),
            _ => Err(ClaimError::domain("age", age)),
        }
    }

    /// Indicator column for this group; `None` for the reference level
    pub fn indicator_column(&self) -> Option<&'static str> {
        match self {
            AgeGroup::Teen => None,
            AgeGroup::AdultYoung => Some(columns::AGE_GROUP_ADULT_YOUNG),
            AgeGroup::Adult => Some(columns::AGE_GROUP_ADULT),
            AgeGroup::MidAge => Some(columns::AGE_GROUP_MID_AGE),
            AgeGroup::Senior => Some(columns::AGE_GROUP_SENIOR),
        }
    }
}

/// A single cell of the feature vector
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Numeric(f64),
    Categorical(String),
}

impl FeatureValue {
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            FeatureValue::Numeric(v) => Some(*v),
            FeatureValue::Categorical(_) => None,
        }
    }

    pub fn as_categorical(&self) -> Option<&str> {
        match self {
            FeatureValue::Categorical(token) => Some(token),
            FeatureValue::Numeric(_) => None,
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Numeric(value)
    }
}

impl From<&str> for FeatureValue {
    fn from(token: &str) -> Self {
        FeatureValue::Categorical(token.to_string())
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Numeric(v) => write!(f, "{v}"),
            FeatureValue::Categorical(token) => f.write_str(token),
        }
    }
}

/// Ordered feature row aligned to a classifier's schema
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedFeatureVector {
    columns: Vec<(String, FeatureValue)>,
    categorical: BTreeSet<String>,
}

impl EncodedFeatureVector {
    pub(crate) fn new(columns: Vec<(String, FeatureValue)>, categorical: BTreeSet<String>) -> Self {
        Self { columns, categorical }
    }

    /// Column names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Looks up a column by name
    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value)
    }

    /// Iterates over `(name, value)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Names of the columns the classifier must treat as categorical
    pub fn categorical_columns(&self) -> &BTreeSet<String> {
        &self.categorical
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

struct OrderedColumns<'a>(&'a [(String, FeatureValue)]);

impl Serialize for OrderedColumns<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl Serialize for EncodedFeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("EncodedFeatureVector", 2)?;
        state.serialize_field("features", &OrderedColumns(&self.columns))?;
        state.serialize_field("categorical_columns", &self.categorical)?;
        state.end()
    }
}
