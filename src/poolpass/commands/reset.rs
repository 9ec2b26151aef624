use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::session::Session;
use crate::store::backend::KvBackend;
use crate::store::passport_store::PassportStore;
use crate::views;
use tracing::info;

use super::helpers::report;

/// Clear all stamps and return to the first passport page.
/// The selected pool is left alone.
pub fn run<B: KvBackend>(
    store: &PassportStore<B>,
    catalog: &Catalog,
    session: &mut Session,
) -> CmdResult {
    let cleared = session.visited.len();
    session.visited.clear();
    session.page = 0;

    let mut result = CmdResult::default();
    report(&mut result, store.reset().err());
    info!(cleared, "passport reset");
    result.add_message(CmdMessage::success(format!(
        "Passport reset ({} stamps cleared)",
        cleared
    )));

    result.with_summary(views::summary(catalog, &session.visited))
}
