//! Comparator chain
//!
//! A chain is a singly linked list of [`SortNode`]s. Each node orders entries
//! by one column and hands ties to its subsort. No column appears twice in a
//! chain. The column list is deduplicated first, then the nodes are built
//! from the tail forward. Nodes own their subsort, and a chain is never
//! mutated once it has been built.

use super::fields::{ColumnSort, SortColumn, SortOrder};
use super::keys::compare_text;
use super::traits::SortableMod;
use super::types::SortCriteria;
use crate::error::Result;
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// One link of a comparator chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortNode {
    column: SortColumn,
    invert: bool,
    subsort: Option<Box<SortNode>>,
}

impl SortNode {
    /// Create a node that takes ownership of `subsort` as its tail.
    ///
    /// Every node in the tail that sorts by `column` is removed, so the new
    /// node is the only one that decides that column. The rest of the tail
    /// keeps its relative order.
    pub fn new(
        column: SortColumn,
        invert: bool,
        subsort: Option<SortNode>,
    ) -> Self {
        let tail = subsort.map(SortNode::into_columns).unwrap_or_default();
        let before = tail.len();
        let tail: Vec<ColumnSort> =
            tail.into_iter().filter(|key| key.column != column).collect();

        if tail.len() != before {
            debug!(
                target: "sort::chain",
                column = %column,
                pruned = before - tail.len(),
                "removed superseded column from subsort chain"
            );
        }

        SortNode {
            column,
            invert,
            subsort: build_nodes(tail).map(Box::new),
        }
    }

    /// A node without a subsort
    pub fn terminal(column: SortColumn, invert: bool) -> Self {
        SortNode {
            column,
            invert,
            subsort: None,
        }
    }

    pub fn column(&self) -> SortColumn {
        self.column
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn subsort(&self) -> Option<&SortNode> {
        self.subsort.as_deref()
    }

    pub fn key(&self) -> ColumnSort {
        ColumnSort::new(self.column, SortOrder::from_invert(self.invert))
    }

    /// Walk this node and every subsort after it
    pub fn iter(&self) -> Nodes<'_> {
        Nodes { next: Some(self) }
    }

    pub(crate) fn len(&self) -> usize {
        self.iter().count()
    }

    /// Signed comparison: negative when `a` sorts first, positive when `b`
    /// does, zero when every column ties.
    ///
    /// `invert` swaps the operands for this node's own column only. Subsorts
    /// always receive `(a, b)` in the original order.
    pub fn compare_signed<T: SortableMod + ?Sized>(&self, a: &T, b: &T) -> i32 {
        for node in self.iter() {
            let delta = if node.invert {
                node.column_delta(b, a)
            } else {
                node.column_delta(a, b)
            };
            if delta != 0 {
                return delta;
            }
        }
        0
    }

    pub fn compare<T: SortableMod + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        self.compare_signed(a, b).cmp(&0)
    }

    fn column_delta<T: SortableMod + ?Sized>(&self, x: &T, y: &T) -> i32 {
        match self.column {
            SortColumn::Enabled => x.enabled().cmp(&y.enabled()) as i32,
            SortColumn::Status => x.status().difference(y.status()),
            SortColumn::Name => compare_text(x.name(), y.name()) as i32,
            SortColumn::Author => compare_text(x.author(), y.author()) as i32,
            SortColumn::LastUpdated => {
                compare_text(x.last_updated(), y.last_updated()) as i32
            }
        }
    }

    fn into_columns(self) -> Vec<ColumnSort> {
        let mut columns = Vec::new();
        let mut next = Some(self);
        while let Some(node) = next {
            columns.push(node.key());
            next = node.subsort.map(|boxed| *boxed);
        }
        columns
    }
}

/// Iterator over a node and its subsorts
#[derive(Debug, Clone)]
pub struct Nodes<'a> {
    next: Option<&'a SortNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a SortNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.subsort();
        Some(node)
    }
}

// Builds from the last column forward so every node owns a finished tail.
fn build_nodes(columns: Vec<ColumnSort>) -> Option<SortNode> {
    columns.into_iter().rev().fold(None, |tail, key| {
        Some(SortNode {
            column: key.column,
            invert: key.invert(),
            subsort: tail.map(Box::new),
        })
    })
}

/// Ordered comparator chain for one sort request.
///
/// An empty chain considers every pair of entries equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortChain {
    head: Option<SortNode>,
}

impl SortChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a chain from columns listed most significant first.
    ///
    /// The first entry becomes the outermost node. Any later entry that
    /// repeats a column already listed is dropped.
    pub fn from_columns<I>(columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ColumnSort>,
    {
        let mut kept: Vec<ColumnSort> = Vec::with_capacity(SortColumn::ALL.len());
        for key in columns.into_iter().map(Into::into) {
            if kept.iter().any(|existing| existing.column == key.column) {
                debug!(
                    target: "sort::chain",
                    column = %key.column,
                    order = %key.order,
                    "dropping repeated column from sort request"
                );
                continue;
            }
            kept.push(key);
        }

        SortChain {
            head: build_nodes(kept),
        }
    }

    /// Build a chain from numeric column ids and invert flags.
    ///
    /// Fails with [`SortError::UnsupportedColumn`](crate::SortError) on the
    /// first id that is not a known column. No partial chain is returned.
    pub fn from_raw(pairs: &[(i32, bool)]) -> Result<Self> {
        let columns = pairs
            .iter()
            .map(|&(id, invert)| {
                SortColumn::try_from(id).map(|column| (column, invert))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_columns(columns))
    }

    /// Make `column` the primary sort and keep the current chain as its
    /// tie-break, minus any earlier entry for the same column.
    ///
    /// This mirrors clicking a column header: the clicked column moves to
    /// the front and the previous ordering becomes the fallback.
    pub fn then_primary(self, column: SortColumn, invert: bool) -> Self {
        SortChain {
            head: Some(SortNode::new(column, invert, self.head)),
        }
    }

    pub fn head(&self) -> Option<&SortNode> {
        self.head.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.head.as_ref().map_or(0, SortNode::len)
    }

    /// Columns in order of significance
    pub fn columns(&self) -> Vec<ColumnSort> {
        self.head
            .iter()
            .flat_map(SortNode::iter)
            .map(SortNode::key)
            .collect()
    }

    pub fn compare_signed<T: SortableMod + ?Sized>(&self, a: &T, b: &T) -> i32 {
        self.head.as_ref().map_or(0, |node| node.compare_signed(a, b))
    }

    pub fn compare<T: SortableMod + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        self.compare_signed(a, b).cmp(&0)
    }
}

impl From<SortNode> for SortChain {
    fn from(node: SortNode) -> Self {
        SortChain { head: Some(node) }
    }
}

impl From<&SortCriteria> for SortChain {
    fn from(criteria: &SortCriteria) -> Self {
        SortChain::from_columns(criteria.columns.iter().copied())
    }
}

impl FromIterator<ColumnSort> for SortChain {
    fn from_iter<I: IntoIterator<Item = ColumnSort>>(iter: I) -> Self {
        SortChain::from_columns(iter)
    }
}

impl fmt::Display for SortChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, key) in self.columns().iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}
