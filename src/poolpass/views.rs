//! # Derived Views
//!
//! Read-only projections of (catalog × visited set), recomputed from scratch
//! on every call. Nothing here is cached and nothing here mutates its input.
//!
//! - [`summary`]: visited count against catalog size.
//! - [`stamp_sequence`]: visited pools in stamp-date order (the passport).
//! - [`paginate`]: fixed-size pages over any sequence, with index clamping.

use crate::catalog::Catalog;
use crate::date::date_key;
use crate::model::{Pool, VisitedRecord, VisitedSet};
use crate::visited;
use serde::Serialize;

/// Stamps shown per passport page.
pub const PAGE_SIZE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub visited_count: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stamp {
    pub pool: Pool,
    pub record: VisitedRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
    pub clamped_index: usize,
}

pub fn summary(catalog: &Catalog, set: &VisitedSet) -> Summary {
    Summary {
        visited_count: visited::count(set),
        total: catalog.len(),
    }
}

/// Visited pools in ascending stamp-date order.
///
/// Ordering compares [`date_key`]s, never display strings. Undated records
/// (migrated from the boolean encoding) have an empty key and come first.
/// The sort is stable, so equal dates keep catalog order.
pub fn stamp_sequence(catalog: &Catalog, set: &VisitedSet) -> Vec<Stamp> {
    let mut stamps: Vec<(String, Stamp)> = catalog
        .pools()
        .iter()
        .filter_map(|pool| {
            let record = set.get(&pool.id).filter(|r| r.done)?;
            let key = record.date.as_deref().map(date_key).unwrap_or_default();
            Some((
                key,
                Stamp {
                    pool: pool.clone(),
                    record: record.clone(),
                },
            ))
        })
        .collect();

    stamps.sort_by(|a, b| a.0.cmp(&b.0));
    stamps.into_iter().map(|(_, stamp)| stamp).collect()
}

/// Number of pages needed for `len` items; never less than one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page into `[0, total_pages - 1]`.
pub fn clamp_page(page_index: usize, len: usize, page_size: usize) -> usize {
    page_index.min(total_pages(len, page_size) - 1)
}

/// Cut one page out of `seq`. Out-of-range page indexes snap to the last
/// page; a page size of 0 is treated as 1.
pub fn paginate<T: Clone>(seq: &[T], page_index: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(seq.len(), page_size);
    let clamped_index = clamp_page(page_index, seq.len(), page_size);

    let start = (clamped_index * page_size).min(seq.len());
    let end = (start + page_size).min(seq.len());

    Page {
        items: seq[start..end].to_vec(),
        total_pages,
        clamped_index,
    }
}
