use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::{PassportError, Result};
use crate::session::Session;
use crate::store::backend::KvBackend;
use crate::store::keys;
use crate::store::passport_store::PassportStore;
use tracing::debug;

use super::helpers::{pool_row, report, resolve, PoolSelector};

/// Make the pool at `index` the one being viewed.
pub fn select<B: KvBackend>(
    store: &PassportStore<B>,
    catalog: &Catalog,
    session: &mut Session,
    index: usize,
) -> Result<CmdResult> {
    if index >= catalog.len() {
        return Err(PassportError::SelectionOutOfRange {
            index,
            len: catalog.len(),
        });
    }

    let mut result = CmdResult::default();
    if session.selection != index {
        debug!(from = session.selection, to = index, "selection changed");
        session.selection = index;
        report(&mut result, store.save_index(keys::SELECTED, index).err());
    }

    Ok(result.with_detail(pool_row(catalog, session, index)))
}

pub fn select_pool<B: KvBackend>(
    store: &PassportStore<B>,
    catalog: &Catalog,
    session: &mut Session,
    selector: &PoolSelector,
) -> Result<CmdResult> {
    let index = resolve(catalog, selector)?;
    select(store, catalog, session, index)
}

/// Move the selection by `delta`, wrapping around the catalog.
pub fn step<B: KvBackend>(
    store: &PassportStore<B>,
    catalog: &Catalog,
    session: &mut Session,
    delta: isize,
) -> Result<CmdResult> {
    if catalog.is_empty() {
        return Err(PassportError::Api("The catalog is empty".to_string()));
    }
    let len = catalog.len() as isize;
    let index = (session.selection as isize + delta).rem_euclid(len) as usize;
    select(store, catalog, session, index)
}
