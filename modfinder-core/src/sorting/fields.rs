//! Sortable columns and per-column direction
//!
//! Columns keep the numeric ids the list view binds to (`Enabled = 0` through
//! `Status = 4`) so header bindings and persisted preferences can be turned
//! back into a typed column. Ids and names that do not map to a column are
//! rejected here, before any chain is built.

use crate::error::{Result, SortError};
use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;
use std::str::FromStr;

/// Columns supported for custom sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum SortColumn {
    Enabled = 0,
    Name = 1,
    Author = 2,
    LastUpdated = 3,
    Status = 4,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Enabled,
        SortColumn::Name,
        SortColumn::Author,
        SortColumn::LastUpdated,
        SortColumn::Status,
    ];

    /// Stable identifier used in criteria strings and config files
    pub const fn as_str(self) -> &'static str {
        match self {
            SortColumn::Enabled => "enabled",
            SortColumn::Name => "name",
            SortColumn::Author => "author",
            SortColumn::LastUpdated => "last_updated",
            SortColumn::Status => "status",
        }
    }

    /// Numeric id matching the header binding
    pub const fn id(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i32> for SortColumn {
    type Error = SortError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(SortColumn::Enabled),
            1 => Ok(SortColumn::Name),
            2 => Ok(SortColumn::Author),
            3 => Ok(SortColumn::LastUpdated),
            4 => Ok(SortColumn::Status),
            other => Err(SortError::UnsupportedColumn(other.to_string())),
        }
    }
}

impl FromStr for SortColumn {
    type Err = SortError;

    fn from_str(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "enabled" => Ok(SortColumn::Enabled),
            "name" => Ok(SortColumn::Name),
            "author" => Ok(SortColumn::Author),
            "last_updated" | "lastupdated" | "updated" => {
                Ok(SortColumn::LastUpdated)
            }
            "status" => Ok(SortColumn::Status),
            _ => Err(SortError::UnsupportedColumn(raw.trim().to_string())),
        }
    }
}

// Config files accept the same spellings as criteria text.
impl<'de> Deserialize<'de> for SortColumn {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        parse_with_serde(deserializer)
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub const fn is_descending(self) -> bool {
        matches!(self, SortOrder::Descending)
    }

    pub const fn from_invert(invert: bool) -> Self {
        if invert {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = SortError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(SortError::InvalidCriteria(format!(
                "unknown sort direction {:?}",
                raw.trim()
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        parse_with_serde(deserializer)
    }
}

fn parse_with_serde<'de, T, D>(deserializer: D) -> std::result::Result<T, D::Error>
where
    T: FromStr<Err = SortError>,
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(de::Error::custom)
}

/// One column of a sort request together with its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnSort {
    pub column: SortColumn,
    #[serde(default)]
    pub order: SortOrder,
}

impl ColumnSort {
    pub const fn new(column: SortColumn, order: SortOrder) -> Self {
        Self { column, order }
    }

    pub const fn ascending(column: SortColumn) -> Self {
        Self::new(column, SortOrder::Ascending)
    }

    pub const fn descending(column: SortColumn) -> Self {
        Self::new(column, SortOrder::Descending)
    }

    /// Whether the column compares its operands swapped
    pub const fn invert(&self) -> bool {
        self.order.is_descending()
    }
}

impl From<(SortColumn, bool)> for ColumnSort {
    fn from((column, invert): (SortColumn, bool)) -> Self {
        Self::new(column, SortOrder::from_invert(invert))
    }
}

impl From<SortColumn> for ColumnSort {
    fn from(column: SortColumn) -> Self {
        Self::ascending(column)
    }
}

impl fmt::Display for ColumnSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.column, self.order)
    }
}

impl FromStr for ColumnSort {
    type Err = SortError;

    /// Parses `column` or `column:direction`
    fn from_str(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(SortError::InvalidCriteria(
                "empty column entry".to_string(),
            ));
        }

        match raw.split_once(':') {
            Some((column, order)) => {
                Ok(Self::new(column.parse()?, order.parse()?))
            }
            None => Ok(Self::ascending(raw.parse()?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_round_trip() {
        for column in SortColumn::ALL {
            assert_eq!(SortColumn::try_from(column.id()), Ok(column));
        }
    }

    #[test]
    fn unknown_numeric_id_is_unsupported() {
        assert_eq!(
            SortColumn::try_from(5),
            Err(SortError::UnsupportedColumn("5".to_string()))
        );
        assert!(matches!(
            SortColumn::try_from(-1),
            Err(SortError::UnsupportedColumn(_))
        ));
    }

    #[test]
    fn column_names_are_case_insensitive_with_aliases() {
        assert_eq!("Name".parse::<SortColumn>(), Ok(SortColumn::Name));
        assert_eq!(" STATUS ".parse::<SortColumn>(), Ok(SortColumn::Status));
        assert_eq!("last-updated".parse::<SortColumn>(), Ok(SortColumn::LastUpdated));
        assert_eq!("LastUpdated".parse::<SortColumn>(), Ok(SortColumn::LastUpdated));
        assert_eq!("updated".parse::<SortColumn>(), Ok(SortColumn::LastUpdated));
        assert_eq!(
            "rating".parse::<SortColumn>(),
            Err(SortError::UnsupportedColumn("rating".to_string()))
        );
    }

    #[test]
    fn column_sort_parses_optional_direction() {
        assert_eq!(
            "author".parse::<ColumnSort>(),
            Ok(ColumnSort::ascending(SortColumn::Author))
        );
        assert_eq!(
            "name:DESC".parse::<ColumnSort>(),
            Ok(ColumnSort::descending(SortColumn::Name))
        );
        assert!(matches!(
            "name:sideways".parse::<ColumnSort>(),
            Err(SortError::InvalidCriteria(_))
        ));
        assert!(matches!(
            "size:asc".parse::<ColumnSort>(),
            Err(SortError::UnsupportedColumn(_))
        ));
    }

    #[test]
    fn serde_uses_snake_case_ids() {
        let json =
            serde_json::to_string(&ColumnSort::descending(SortColumn::LastUpdated))
                .unwrap();
        assert_eq!(json, r#"{"column":"last_updated","order":"descending"}"#);

        let parsed: ColumnSort =
            serde_json::from_str(r#"{"column":"status"}"#).unwrap();
        assert_eq!(parsed, ColumnSort::ascending(SortColumn::Status));
    }

    #[test]
    fn serde_accepts_criteria_spellings() {
        let parsed: ColumnSort =
            serde_json::from_str(r#"{"column":"Name","order":"desc"}"#).unwrap();
        assert_eq!(parsed, ColumnSort::descending(SortColumn::Name));

        let parsed: ColumnSort =
            serde_json::from_str(r#"{"column":"updated","order":"ASC"}"#).unwrap();
        assert_eq!(parsed, ColumnSort::ascending(SortColumn::LastUpdated));

        let order: SortOrder = serde_json::from_str(r#""Descending""#).unwrap();
        assert_eq!(order, SortOrder::Descending);
    }

    #[test]
    fn serde_reports_unsupported_columns() {
        let err = serde_json::from_str::<ColumnSort>(r#"{"column":"downloads"}"#)
            .unwrap_err();
        assert!(
            err.to_string()
                .contains("Unsupported column for sorting: downloads"),
            "{err}"
        );

        let err = serde_json::from_str::<SortOrder>(r#""sideways""#).unwrap_err();
        assert!(err.to_string().contains("Invalid sort criteria"), "{err}");
    }
}
