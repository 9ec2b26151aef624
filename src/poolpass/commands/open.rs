use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::PassportError;
use crate::session::Session;
use crate::store::backend::KvBackend;
use crate::store::passport_store::PassportStore;
use tracing::{debug, warn};

use super::helpers::report;

/// Start a session from whatever the store holds.
pub fn run<B: KvBackend>(store: &PassportStore<B>, catalog: &Catalog) -> (Session, CmdResult) {
    let (session, issues) = Session::load(store, catalog);
    let mut result = CmdResult::default();

    for issue in issues {
        match issue {
            PassportError::SelectionOutOfRange { index, len } => {
                warn!(index, len, "stored selection outside catalog");
                result.add_message(CmdMessage::warning(format!(
                    "Selected pool #{} is not in the catalog ({} pools); showing the first pool",
                    index + 1,
                    len
                )));
            }
            other => report(&mut result, Some(other)),
        }
    }

    debug!(
        visited = session.visited.len(),
        selection = session.selection,
        page = session.page,
        "session loaded"
    );
    (session, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::Pool;
    use crate::store::mem_backend::MemBackend;

    fn catalog() -> Catalog {
        Catalog::new(vec![Pool::new("a", "A"), Pool::new("b", "B")]).unwrap()
    }

    #[test]
    fn clean_load_has_no_messages() {
        let store = PassportStore::with_backend(MemBackend::new());
        let (session, result) = run(&store, &catalog());
        assert!(result.messages.is_empty());
        assert!(session.visited.is_empty());
    }

    #[test]
    fn corrupt_visited_data_warns() {
        let store =
            PassportStore::with_backend(MemBackend::with_entries([("visited", "oops")]));
        let (session, result) = run(&store, &catalog());
        assert!(session.visited.is_empty());
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn stale_selection_warns() {
        let store = PassportStore::with_backend(MemBackend::with_entries([("selected", "5")]));
        let (session, result) = run(&store, &catalog());
        assert_eq!(session.selection, 0);
        assert!(result.messages[0].content.contains("#6"));
    }
}
