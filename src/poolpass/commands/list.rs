use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::session::Session;
use crate::views;

use super::helpers::pool_row;

/// Every pool in catalog order, with its visited state.
pub fn run(catalog: &Catalog, session: &Session, visited_only: bool) -> CmdResult {
    let rows = (0..catalog.len())
        .filter_map(|i| pool_row(catalog, session, i))
        .filter(|row| !visited_only || row.record.is_some())
        .collect();

    CmdResult::default()
        .with_summary(views::summary(catalog, &session.visited))
        .with_pools(rows)
}
