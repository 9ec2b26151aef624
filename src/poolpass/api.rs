//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every poolpass operation, regardless of the UI in front.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session**: the store, the catalog, the clock and the one
//!   in-memory [`Session`] live here, so callers never juggle them
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g., parsing pool selectors from text)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **I/O operations**: No stdout, stderr, or terminal formatting
//!
//! ## Generic Over KvBackend
//!
//! `PassportApi<B: KvBackend>` is generic over the storage backend:
//! - Production: `PassportApi<FsBackend>`
//! - Testing: `PassportApi<MemBackend>`

use crate::catalog::Catalog;
use crate::commands;
use crate::date::Clock;
use crate::error::Result;
use crate::session::Session;
use crate::store::backend::KvBackend;
use crate::store::passport_store::PassportStore;
use std::str::FromStr;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::helpers::PoolSelector;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel, PassportPaths, PoolRow};

/// The main API facade for poolpass operations.
pub struct PassportApi<B: KvBackend> {
    store: PassportStore<B>,
    catalog: Catalog,
    clock: Box<dyn Clock>,
    session: Session,
    paths: commands::PassportPaths,
}

impl<B: KvBackend> PassportApi<B> {
    /// Load the session from `backend`. Problems met while loading are
    /// returned as messages; they never prevent opening.
    pub fn open(
        backend: B,
        catalog: Catalog,
        clock: Box<dyn Clock>,
        paths: commands::PassportPaths,
    ) -> (Self, commands::CmdResult) {
        let store = PassportStore::with_backend(backend);
        let (session, loaded) = commands::open::run(&store, &catalog);
        let api = Self {
            store,
            catalog,
            clock,
            session,
            paths,
        };
        (api, loaded)
    }

    pub fn status(&self) -> commands::CmdResult {
        commands::status::run(&self.catalog, &self.session)
    }

    pub fn list_pools(&self, visited_only: bool) -> commands::CmdResult {
        commands::list::run(&self.catalog, &self.session, visited_only)
    }

    pub fn select(&mut self, selector: &str) -> Result<commands::CmdResult> {
        let selector = PoolSelector::from_str(selector)?;
        commands::select::select_pool(&self.store, &self.catalog, &mut self.session, &selector)
    }

    pub fn select_index(&mut self, index: usize) -> Result<commands::CmdResult> {
        commands::select::select(&self.store, &self.catalog, &mut self.session, index)
    }

    pub fn next_pool(&mut self) -> Result<commands::CmdResult> {
        commands::select::step(&self.store, &self.catalog, &mut self.session, 1)
    }

    pub fn prev_pool(&mut self) -> Result<commands::CmdResult> {
        commands::select::step(&self.store, &self.catalog, &mut self.session, -1)
    }

    /// Toggle the pool named by `selector`, or the selected pool when `None`.
    pub fn toggle(&mut self, selector: Option<&str>) -> Result<commands::CmdResult> {
        let index = match selector {
            Some(s) => commands::helpers::resolve(&self.catalog, &PoolSelector::from_str(s)?)?,
            None => self.session.selection,
        };
        commands::toggle::run(
            &self.store,
            &self.catalog,
            &mut self.session,
            self.clock.as_ref(),
            index,
        )
    }

    pub fn toggle_selected(&mut self) -> Result<commands::CmdResult> {
        commands::toggle::run_selected(
            &self.store,
            &self.catalog,
            &mut self.session,
            self.clock.as_ref(),
        )
    }

    /// Show passport page `page` (zero-based); `None` shows the current page.
    pub fn passport(&mut self, page: Option<usize>) -> commands::CmdResult {
        match page {
            Some(page) => {
                commands::passport::show(&self.store, &self.catalog, &mut self.session, page)
            }
            None => commands::passport::current(&self.store, &self.catalog, &mut self.session),
        }
    }

    pub fn next_page(&mut self) -> commands::CmdResult {
        commands::passport::next(&self.store, &self.catalog, &mut self.session)
    }

    pub fn prev_page(&mut self) -> commands::CmdResult {
        commands::passport::prev(&self.store, &self.catalog, &mut self.session)
    }

    pub fn reset(&mut self) -> commands::CmdResult {
        commands::reset::run(&self.store, &self.catalog, &mut self.session)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::FixedClock;
    use crate::model::Pool;
    use crate::store::mem_backend::MemBackend;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    /// A clock whose day can be moved between calls.
    #[derive(Clone, Default)]
    struct SteppingClock(Rc<RefCell<String>>);

    impl SteppingClock {
        fn set(&self, day: &str) {
            *self.0.borrow_mut() = day.to_string();
        }
    }

    impl Clock for SteppingClock {
        fn today(&self) -> String {
            self.0.borrow().clone()
        }
    }

    fn catalog(ids: &[&str]) -> Catalog {
        Catalog::new(ids.iter().map(|id| Pool::new(id, &id.to_uppercase())).collect()).unwrap()
    }

    fn paths() -> PassportPaths {
        PassportPaths {
            data: PathBuf::from("memory://"),
        }
    }

    fn open(ids: &[&str], clock: Box<dyn Clock>) -> PassportApi<MemBackend> {
        PassportApi::open(MemBackend::new(), catalog(ids), clock, paths()).0
    }

    #[test]
    fn stamps_follow_visit_dates() {
        let clock = SteppingClock::default();
        let mut api = open(&["a", "b", "c"], Box::new(clock.clone()));

        clock.set("2025-01-01");
        api.toggle(Some("a")).unwrap();
        clock.set("2025-02-01");
        api.toggle(Some("b")).unwrap();

        let result = api.passport(None);
        let stamps = result.stamps.unwrap();
        let ids: Vec<_> = stamps.items.iter().map(|s| s.pool.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);

        let summary = api.status().summary.unwrap();
        assert_eq!((summary.visited_count, summary.total), (2, 3));
    }

    #[test]
    fn reset_returns_to_empty_passport() {
        let mut api = open(&["a", "b", "c"], Box::new(FixedClock::new("01/01/2025")));
        api.toggle(Some("1")).unwrap();
        api.toggle(Some("2")).unwrap();
        api.toggle(Some("3")).unwrap();
        api.next_page();

        api.reset();
        assert!(api.session().visited.is_empty());
        assert_eq!(api.session().page, 0);
        let summary = api.status().summary.unwrap();
        assert_eq!((summary.visited_count, summary.total), (0, 3));
    }

    #[test]
    fn toggle_without_selector_uses_selection() {
        let mut api = open(&["a", "b"], Box::new(FixedClock::new("01/01/2025")));
        api.next_pool().unwrap();
        api.toggle(None).unwrap();

        let rows = api.list_pools(true).pools;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].pool.id.as_str(), "b");
        assert!(rows[0].selected);
    }

    #[test]
    fn toggle_selected_matches_toggle_none() {
        let mut api = open(&["a", "b"], Box::new(FixedClock::new("01/01/2025")));
        api.toggle_selected().unwrap();
        assert!(api.status().detail.unwrap().record.is_some());
    }

    #[test]
    fn select_accepts_numbers_and_ids() {
        let mut api = open(&["a", "b", "c"], Box::new(FixedClock::new("01/01/2025")));
        api.select("3").unwrap();
        assert_eq!(api.session().selection, 2);
        api.select("b").unwrap();
        assert_eq!(api.session().selection, 1);
        api.select_index(0).unwrap();
        assert_eq!(api.session().selection, 0);
        assert!(api.select("zz").is_err());
        assert!(api.select("4").is_err());
    }

    #[test]
    fn config_dispatches_to_data_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let paths = PassportPaths {
            data: dir.path().to_path_buf(),
        };
        let (api, _) = PassportApi::open(
            MemBackend::new(),
            catalog(&["a"]),
            Box::new(FixedClock::new("01/01/2025")),
            paths,
        );

        api.config(ConfigAction::Set("log-level".into(), "info".into()))
            .unwrap();
        assert!(dir.path().join("config.json").exists());
        let shown = api.config(ConfigAction::ShowKey("log-level".into())).unwrap();
        assert_eq!(shown.messages[0].content, "info");
    }

    #[test]
    fn reopening_sees_persisted_progress() {
        let backend = MemBackend::with_entries([
            ("visited", r#"{"b": {"done": true, "date": "2025-03-01"}}"#),
            ("selected", "1"),
        ]);
        let (api, loaded) = PassportApi::open(
            backend,
            catalog(&["a", "b"]),
            Box::new(FixedClock::new("01/01/2025")),
            paths(),
        );
        assert!(loaded.messages.is_empty());
        let detail = api.status().detail.unwrap();
        assert_eq!(detail.pool.id.as_str(), "b");
        assert_eq!(
            detail.record.unwrap().date.as_deref(),
            Some("2025-03-01")
        );
        assert_eq!(api.catalog().len(), 2);
    }
}
