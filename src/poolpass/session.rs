//! Per-process session state.
//!
//! A [`Session`] is the single in-memory copy of the user's progress. It is
//! loaded once, owned by the caller, and handed by reference to whatever
//! needs it. Every mutation is written through by the command layer, so the
//! session never holds anything the store has not been asked to persist.

use crate::catalog::Catalog;
use crate::error::PassportError;
use crate::model::{Pool, VisitedRecord, VisitedSet};
use crate::store::backend::KvBackend;
use crate::store::keys;
use crate::store::passport_store::PassportStore;
use crate::views::{self, PAGE_SIZE};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub visited: VisitedSet,
    /// Zero-based catalog index of the pool being viewed.
    pub selection: usize,
    /// Zero-based passport page.
    pub page: usize,
}

impl Session {
    /// Load progress from `store`, repairing what does not fit `catalog`.
    ///
    /// Never fails; every problem found on the way is returned next to the
    /// session so the caller can report it.
    pub fn load<B: KvBackend>(
        store: &PassportStore<B>,
        catalog: &Catalog,
    ) -> (Self, Vec<PassportError>) {
        let mut issues = Vec::new();

        let visited = store.load_visited();
        issues.extend(visited.issue);
        let selection = store.load_index(keys::SELECTED);
        issues.extend(selection.issue);
        let page = store.load_index(keys::STAMPS_PAGE);
        issues.extend(page.issue);

        let mut session = Session {
            visited: visited.value,
            selection: selection.value,
            page: page.value,
        };

        if !catalog.is_empty() && session.selection >= catalog.len() {
            issues.push(PassportError::SelectionOutOfRange {
                index: session.selection,
                len: catalog.len(),
            });
            session.selection = 0;
            issues.extend(store.save_index(keys::SELECTED, 0).err());
        }
        let clamped = session.clamped_page(catalog);
        if clamped != session.page {
            session.page = clamped;
            issues.extend(store.save_index(keys::STAMPS_PAGE, clamped).err());
        }

        (session, issues)
    }

    pub fn selected_pool<'c>(&self, catalog: &'c Catalog) -> Option<&'c Pool> {
        catalog.get(self.selection)
    }

    pub fn record_for(&self, pool: &Pool) -> Option<&VisitedRecord> {
        self.visited.get(&pool.id).filter(|r| r.done)
    }

    /// The current page index, clamped against the current stamp count.
    pub fn clamped_page(&self, catalog: &Catalog) -> usize {
        let stamps = views::stamp_sequence(catalog, &self.visited).len();
        views::clamp_page(self.page, stamps, PAGE_SIZE)
    }
}
