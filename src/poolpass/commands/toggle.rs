use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::date::{format_for_display, Clock};
use crate::error::{PassportError, Result};
use crate::session::Session;
use crate::store::backend::KvBackend;
use crate::store::passport_store::PassportStore;
use crate::views;
use crate::visited::Toggle;
use tracing::debug;

use super::helpers::{pool_row, report, settle_page};

/// Flip the visited state of the pool at `index`.
pub fn run<B: KvBackend>(
    store: &PassportStore<B>,
    catalog: &Catalog,
    session: &mut Session,
    clock: &dyn Clock,
    index: usize,
) -> Result<CmdResult> {
    let pool = catalog
        .get(index)
        .ok_or(PassportError::SelectionOutOfRange {
            index,
            len: catalog.len(),
        })?;

    let outcome = store.toggle(&mut session.visited, &pool.id, clock);
    debug!(pool = %pool.id, outcome = ?outcome.value, "toggled");

    let mut result = CmdResult::default();
    result.add_message(match &outcome.value {
        Toggle::Stamped(Some(date)) => CmdMessage::success(format!(
            "Stamped {} on {}",
            pool.name,
            format_for_display(date)
        )),
        Toggle::Stamped(None) => CmdMessage::success(format!("Stamped {}", pool.name)),
        Toggle::Removed => CmdMessage::info(format!("Removed stamp for {}", pool.name)),
    });
    report(&mut result, outcome.issue);
    settle_page(store, catalog, session, &mut result);

    Ok(result
        .with_summary(views::summary(catalog, &session.visited))
        .with_detail(pool_row(catalog, session, index)))
}

/// Flip the visited state of the pool being viewed.
pub fn run_selected<B: KvBackend>(
    store: &PassportStore<B>,
    catalog: &Catalog,
    session: &mut Session,
    clock: &dyn Clock,
) -> Result<CmdResult> {
    let index = session.selection;
    run(store, catalog, session, clock, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::date::FixedClock;
    use crate::model::{Pool, PoolId};
    use crate::store::keys;
    use crate::store::mem_backend::MemBackend;

    fn setup() -> (PassportStore<MemBackend>, Catalog, Session) {
        let catalog = Catalog::new(vec![
            Pool::new("a", "A"),
            Pool::new("b", "B"),
            Pool::new("c", "C"),
        ])
        .unwrap();
        (
            PassportStore::with_backend(MemBackend::new()),
            catalog,
            Session::default(),
        )
    }

    #[test]
    fn stamping_reports_display_date() {
        let (store, catalog, mut session) = setup();
        let clock = FixedClock::new("05/06/2025");

        let result = run(&store, &catalog, &mut session, &clock, 1).unwrap();
        assert_eq!(result.messages[0].content, "Stamped B on 05/06/2025");
        assert_eq!(
            session.visited[&PoolId::from("b")].date.as_deref(),
            Some("2025-06-05")
        );
        assert_eq!(result.summary.unwrap().visited_count, 1);
    }

    #[test]
    fn toggling_again_removes_stamp() {
        let (store, catalog, mut session) = setup();
        let clock = FixedClock::new("05/06/2025");

        run_selected(&store, &catalog, &mut session, &clock).unwrap();
        let result = run_selected(&store, &catalog, &mut session, &clock).unwrap();

        assert_eq!(result.messages[0].content, "Removed stamp for A");
        assert!(session.visited.is_empty());
        assert!(store.load_visited().value.is_empty());
    }

    #[test]
    fn removing_a_stamp_clamps_the_page() {
        let (store, catalog, mut session) = setup();
        let clock = FixedClock::new("05/06/2025");
        for i in 0..3 {
            run(&store, &catalog, &mut session, &clock, i).unwrap();
        }
        session.page = 1;

        run(&store, &catalog, &mut session, &clock, 2).unwrap();
        assert_eq!(session.page, 0);
        assert_eq!(store.load_index(keys::STAMPS_PAGE).value, 0);
    }

    #[test]
    fn write_failure_keeps_session_and_warns() {
        let (store, catalog, mut session) = setup();
        store.backend.set_simulate_write_error(true);
        let clock = FixedClock::new("05/06/2025");

        let result = run(&store, &catalog, &mut session, &clock, 0).unwrap();
        assert_eq!(session.visited.len(), 1);
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning));
    }

    #[test]
    fn unknown_index_is_rejected() {
        let (store, catalog, mut session) = setup();
        let clock = FixedClock::new("05/06/2025");
        assert!(run(&store, &catalog, &mut session, &clock, 7).is_err());
        assert!(session.visited.is_empty());
    }
}
