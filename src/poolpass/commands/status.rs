use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::session::Session;
use crate::views;

use super::helpers::pool_row;

pub fn run(catalog: &Catalog, session: &Session) -> CmdResult {
    CmdResult::default()
        .with_summary(views::summary(catalog, &session.visited))
        .with_detail(pool_row(catalog, session, session.selection))
}
