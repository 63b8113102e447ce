//! Whole sort requests and their compact text form

use super::chain::SortChain;
use super::fields::{ColumnSort, SortColumn};
use crate::error::{Result, SortError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort request as persisted in preferences or passed on the command line.
///
/// Serializes as a plain list of [`ColumnSort`] and parses from the compact
/// form `status,name:desc,author`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortCriteria {
    pub columns: Vec<ColumnSort>,
}

impl Default for SortCriteria {
    fn default() -> Self {
        Self {
            columns: vec![
                ColumnSort::ascending(SortColumn::Status),
                ColumnSort::ascending(SortColumn::Name),
            ],
        }
    }
}

impl SortCriteria {
    pub fn new(columns: Vec<ColumnSort>) -> Self {
        Self { columns }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn chain(&self) -> SortChain {
        SortChain::from(self)
    }
}

impl FromStr for SortCriteria {
    type Err = SortError;

    fn from_str(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::new(Vec::new()));
        }

        raw.split(',')
            .map(str::parse::<ColumnSort>)
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }
}

impl fmt::Display for SortCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, key) in self.columns.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}
