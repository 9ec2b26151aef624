use super::backend::KvBackend;
use super::keys;
use crate::date::{canonical_date, Clock};
use crate::error::{PassportError, Recovered, Result};
use crate::model::{PoolId, VisitedSet};
use crate::visited::{self, Toggle};

pub struct PassportStore<B: KvBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
}

impl<B: KvBackend> PassportStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Load and normalize the visited set.
    ///
    /// Missing data is an empty set. An unreadable substrate or a payload
    /// that does not decode also yields an empty set, with the failure
    /// attached.
    pub fn load_visited(&self) -> Recovered<VisitedSet> {
        let text = match self.backend.get(keys::VISITED) {
            Ok(Some(text)) => text,
            Ok(None) => return Recovered::clean(VisitedSet::new()),
            Err(e) => return Recovered::degraded(VisitedSet::new(), e),
        };

        let raw: serde_json::Value = match serde_json::from_str(&text) {
            Ok(raw) => raw,
            Err(e) => {
                return Recovered::degraded(VisitedSet::new(), PassportError::read(keys::VISITED, e))
            }
        };

        match visited::normalize(&raw) {
            Some(set) => Recovered::clean(set),
            None => Recovered::degraded(
                VisitedSet::new(),
                PassportError::read(keys::VISITED, "expected a JSON object"),
            ),
        }
    }

    /// Persist the visited set. On failure the previously stored set stays.
    pub fn save_visited(&self, set: &VisitedSet) -> Result<()> {
        let content =
            serde_json::to_string(set).map_err(|e| PassportError::write(keys::VISITED, e))?;
        self.backend.set(keys::VISITED, &content)
    }

    /// Toggle `id` in `set` and write the result through.
    ///
    /// "Today" is read from `clock` once. The in-memory set is updated even
    /// when the write fails.
    pub fn toggle(
        &self,
        set: &mut VisitedSet,
        id: &PoolId,
        clock: &dyn Clock,
    ) -> Recovered<Toggle> {
        let today = canonical_date(&clock.today());
        let outcome = visited::toggle(set, id, today);
        Recovered::from_write(outcome, self.save_visited(set))
    }

    /// Read a non-negative index entry. Absent, unparsable or negative
    /// values read as 0.
    pub fn load_index(&self, key: &str) -> Recovered<usize> {
        match self.backend.get(key) {
            Ok(text) => Recovered::clean(text.as_deref().map(parse_index).unwrap_or(0)),
            Err(e) => Recovered::degraded(0, e),
        }
    }

    pub fn save_index(&self, key: &str, index: usize) -> Result<()> {
        self.backend.set(key, &index.to_string())
    }

    /// Clear all progress: empty visited set, and the page entry removed so
    /// it reads back as the first page. Both writes are attempted; the first
    /// failure is returned.
    pub fn reset(&self) -> Result<()> {
        let visited = self.save_visited(&VisitedSet::new());
        let page = self.backend.remove(keys::STAMPS_PAGE);
        visited.and(page)
    }
}

fn parse_index(text: &str) -> usize {
    text.trim()
        .parse::<i64>()
        .ok()
        .and_then(|n| usize::try_from(n).ok())
        .unwrap_or(0)
}
