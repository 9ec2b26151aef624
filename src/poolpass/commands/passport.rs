use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::session::Session;
use crate::store::backend::KvBackend;
use crate::store::keys;
use crate::store::passport_store::PassportStore;
use crate::views::{self, PAGE_SIZE};
use tracing::debug;

use super::helpers::report;

/// Show passport page `page` (zero-based), clamped to the pages that exist.
/// The clamped index becomes the session's page.
pub fn show<B: KvBackend>(
    store: &PassportStore<B>,
    catalog: &Catalog,
    session: &mut Session,
    page: usize,
) -> CmdResult {
    let stamps = views::stamp_sequence(catalog, &session.visited);
    let page = views::paginate(&stamps, page, PAGE_SIZE);

    let mut result = CmdResult::default();
    if page.clamped_index != session.page {
        debug!(from = session.page, to = page.clamped_index, "passport page changed");
        session.page = page.clamped_index;
        report(
            &mut result,
            store.save_index(keys::STAMPS_PAGE, page.clamped_index).err(),
        );
    }

    result
        .with_summary(views::summary(catalog, &session.visited))
        .with_stamps(page)
}

pub fn current<B: KvBackend>(
    store: &PassportStore<B>,
    catalog: &Catalog,
    session: &mut Session,
) -> CmdResult {
    let page = session.page;
    show(store, catalog, session, page)
}

pub fn next<B: KvBackend>(
    store: &PassportStore<B>,
    catalog: &Catalog,
    session: &mut Session,
) -> CmdResult {
    let page = session.page.saturating_add(1);
    show(store, catalog, session, page)
}

pub fn prev<B: KvBackend>(
    store: &PassportStore<B>,
    catalog: &Catalog,
    session: &mut Session,
) -> CmdResult {
    let page = session.page.saturating_sub(1);
    show(store, catalog, session, page)
}
