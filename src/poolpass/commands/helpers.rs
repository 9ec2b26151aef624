use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, PoolRow};
use crate::error::{PassportError, Result};
use crate::model::PoolId;
use crate::session::Session;
use crate::store::backend::KvBackend;
use crate::store::keys;
use crate::store::passport_store::PassportStore;
use std::str::FromStr;
use tracing::{debug, warn};

/// A user input naming a pool: its 1-based catalog number or its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolSelector {
    Number(usize),
    Id(PoolId),
}

impl FromStr for PoolSelector {
    type Err = PassportError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PassportError::Api("Empty pool selector".to_string()));
        }
        match s.parse::<usize>() {
            Ok(0) => Err(numbers_start_at_one()),
            Ok(n) => Ok(PoolSelector::Number(n)),
            Err(_) => Ok(PoolSelector::Id(PoolId::from(s))),
        }
    }
}

fn numbers_start_at_one() -> PassportError {
    PassportError::Api("Pool numbers start at 1".to_string())
}

impl std::fmt::Display for PoolSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolSelector::Number(n) => write!(f, "{}", n),
            PoolSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

/// Catalog index for a selector.
pub fn resolve(catalog: &Catalog, selector: &PoolSelector) -> Result<usize> {
    match selector {
        PoolSelector::Number(n) => {
            let index = n.checked_sub(1).ok_or_else(numbers_start_at_one)?;
            Some(index)
                .filter(|i| *i < catalog.len())
                .ok_or(PassportError::SelectionOutOfRange {
                    index,
                    len: catalog.len(),
                })
        }
        PoolSelector::Id(id) => catalog
            .position(id)
            .ok_or_else(|| PassportError::PoolNotFound(id.to_string())),
    }
}

pub fn pool_row(catalog: &Catalog, session: &Session, index: usize) -> Option<PoolRow> {
    let pool = catalog.get(index)?;
    Some(PoolRow {
        number: index + 1,
        record: session.record_for(pool).cloned(),
        pool: pool.clone(),
        selected: index == session.selection,
    })
}

/// Surface a recovered persistence failure: log it and attach a warning.
pub fn report(result: &mut CmdResult, issue: Option<PassportError>) {
    if let Some(issue) = issue {
        warn!(error = %issue, "continuing without persistence");
        result.add_message(CmdMessage::warning(format!(
            "{} (progress is kept for this session only)",
            issue
        )));
    }
}

/// Re-clamp the passport page after the stamp count changed, persisting it
/// when it moved.
pub fn settle_page<B: KvBackend>(
    store: &PassportStore<B>,
    catalog: &Catalog,
    session: &mut Session,
    result: &mut CmdResult,
) {
    let clamped = session.clamped_page(catalog);
    if clamped != session.page {
        debug!(from = session.page, to = clamped, "clamping passport page");
        session.page = clamped;
        report(result, store.save_index(keys::STAMPS_PAGE, clamped).err());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Pool;

    fn catalog() -> Catalog {
        Catalog::new(vec![Pool::new("a", "A"), Pool::new("b", "B")]).unwrap()
    }

    #[test]
    fn parses_numbers_and_ids() {
        assert_eq!("2".parse::<PoolSelector>().unwrap(), PoolSelector::Number(2));
        assert_eq!(
            "bronte-baths".parse::<PoolSelector>().unwrap(),
            PoolSelector::Id(PoolId::from("bronte-baths"))
        );
        assert!("0".parse::<PoolSelector>().is_err());
        assert!(" ".parse::<PoolSelector>().is_err());
    }

    #[test]
    fn resolves_against_catalog() {
        let cat = catalog();
        assert_eq!(resolve(&cat, &PoolSelector::Number(2)).unwrap(), 1);
        assert_eq!(resolve(&cat, &PoolSelector::Id("a".into())).unwrap(), 0);
        assert!(matches!(
            resolve(&cat, &PoolSelector::Number(3)),
            Err(PassportError::SelectionOutOfRange { index: 2, len: 2 })
        ));
        assert!(matches!(
            resolve(&cat, &PoolSelector::Number(0)),
            Err(PassportError::Api(_))
        ));
        assert!(matches!(
            resolve(&cat, &PoolSelector::Id("z".into())),
            Err(PassportError::PoolNotFound(_))
        ));
    }

    #[test]
    fn report_adds_warning_only_for_issues() {
        let mut result = CmdResult::default();
        report(&mut result, None);
        assert!(result.messages.is_empty());

        report(&mut result, Some(PassportError::write("visited", "disk full")));
        assert!(result.has_warnings());
        assert!(result.messages[0].content.contains("disk full"));
    }
}
