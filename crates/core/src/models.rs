//! Data models shared between the table engine, export and the desktop app

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::constants::SEARCH_FIELD_SEPARATOR;

/// Identifier of a table row, unique within one collection
pub type RowId = u64;

// ============================================================================
// Field values
// ============================================================================

/// A single cell value. Rows mix counts, formatted strings and absent optionals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
    Text(String),
    #[default]
    Missing,
}

impl FieldValue {
    pub fn is_text(&self) -> bool {
        matches!(self, FieldValue::Text(_))
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// Numeric view of the value; text and missing values have none
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            FieldValue::Text(_) | FieldValue::Missing => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Missing => Ok(()),
        }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(v) => FieldValue::Integer(v),
            Err(_) => FieldValue::Float(v as f64),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Float(v)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FieldValue::Missing)
    }
}

// ============================================================================
// Row traits
// ============================================================================

/// Named, ordered field access for anything that can be searched or exported
pub trait Record {
    /// Field names in display/export order
    fn field_names(&self) -> Vec<&str>;

    /// Value of a field; unknown names are `Missing`
    fn field(&self, name: &str) -> FieldValue;

    /// All values in `field_names` order
    fn values(&self) -> Vec<FieldValue> {
        self.field_names().iter().map(|name| self.field(name)).collect()
    }

    /// Lower-cased text of every field, used by the free-text filter
    fn searchable_text(&self) -> String {
        let mut text = String::new();
        for (i, value) in self.values().iter().enumerate() {
            if i > 0 {
                text.push(SEARCH_FIELD_SEPARATOR);
            }
            text.push_str(&value.to_string().to_lowercase());
        }
        text
    }
}

/// A record with a stable identifier, usable in selectable tables
pub trait TableRow: Record {
    fn row_id(&self) -> RowId;
}

// ============================================================================
// Campaign rows
// ============================================================================

/// Field names of a campaign row, in export order
pub const CAMPAIGN_FIELDS: [&str; 13] = [
    "id",
    "campaign",
    "channel",
    "impressions",
    "clicks",
    "conversions",
    "revenue",
    "ctr",
    "conversionRate",
    "status",
    "budget",
    "spend",
    "roas",
];

/// One marketing campaign as shown in the campaign tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRow {
    pub id: u64,
    pub campaign: String,
    pub channel: String,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    /// Pre-formatted currency, e.g. "$12,450"
    pub revenue: String,
    /// Pre-formatted percentage, e.g. "3.2%"
    pub ctr: String,
    pub conversion_rate: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spend: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roas: Option<String>,
}

impl Record for CampaignRow {
    fn field_names(&self) -> Vec<&str> {
        CAMPAIGN_FIELDS.to_vec()
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => self.id.into(),
            "campaign" => self.campaign.as_str().into(),
            "channel" => self.channel.as_str().into(),
            "impressions" => self.impressions.into(),
            "clicks" => self.clicks.into(),
            "conversions" => self.conversions.into(),
            "revenue" => self.revenue.as_str().into(),
            "ctr" => self.ctr.as_str().into(),
            "conversionRate" => self.conversion_rate.as_str().into(),
            "status" => self.status.as_str().into(),
            "budget" => self.budget.clone().into(),
            "spend" => self.spend.clone().into(),
            "roas" => self.roas.clone().into(),
            _ => FieldValue::Missing,
        }
    }
}

impl TableRow for CampaignRow {
    fn row_id(&self) -> RowId {
        self.id
    }
}

// ============================================================================
// Dynamic rows
// ============================================================================

/// Ordered name/value pairs for report sections that aren't campaigns
///
/// (De)serializes as a JSON object, keeping the document's key order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DynamicRow {
    fields: Vec<(String, FieldValue)>,
}

impl DynamicRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, replacing an earlier one with the same name in place
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Record for DynamicRow {
    fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    fn field(&self, name: &str) -> FieldValue {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    }

    fn values(&self) -> Vec<FieldValue> {
        self.fields.iter().map(|(_, v)| v.clone()).collect()
    }
}

impl Serialize for DynamicRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DynamicRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = DynamicRow;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of field values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<DynamicRow, A::Error> {
                let mut row = DynamicRow::new();
                while let Some((name, value)) = map.next_entry::<String, FieldValue>()? {
                    row.set(name, value);
                }
                Ok(row)
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}

// ============================================================================
// Dashboard summary data
// ============================================================================

/// Headline figures for the analytics overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_revenue: f64,
    pub total_users: u64,
    pub conversion_rate: f64,
    pub avg_order_value: f64,
    pub revenue_growth: f64,
    pub user_growth: f64,
    pub conversion_growth: f64,
    pub aov_growth: f64,
}

/// A progress goal on the overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub current: f64,
    pub target: f64,
    /// "$", "%" or empty
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub color: String,
}

impl Goal {
    /// Progress towards the target in percent
    pub fn progress_percent(&self) -> f64 {
        if self.target == 0.0 {
            return 0.0;
        }
        self.current / self.target * 100.0
    }

    pub fn is_achieved(&self) -> bool {
        self.current >= self.target
    }
}

/// One line of the reports page performance summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetric {
    pub metric: String,
    pub value: String,
    pub change: String,
    /// "up" or "down"
    pub trend: String,
}

/// Series behind the dashboard charts, exported as report sections
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    #[serde(default)]
    pub revenue_over_time: Vec<DynamicRow>,
    #[serde(default)]
    pub revenue_by_channel: Vec<DynamicRow>,
    #[serde(default)]
    pub traffic_sources: Vec<DynamicRow>,
}
