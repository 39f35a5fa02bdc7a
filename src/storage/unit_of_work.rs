//! Transactional scope over the roster collections

use super::{Players, Teams};
use crate::error::Result;
use rusqlite::Transaction;
use tracing::debug;

/// One logical operation against the store.
///
/// Writes made through `teams()` and `players()` become visible to other
/// connections only after `commit`. Dropping the unit of work without
/// committing rolls everything back, including on early return or panic.
pub struct UnitOfWork<'c> {
    tx: Transaction<'c>,
}

impl<'c> UnitOfWork<'c> {
    pub(crate) fn new(tx: Transaction<'c>) -> Self {
        Self { tx }
    }

    pub fn teams(&self) -> Teams<'_> {
        Teams::new(&self.tx)
    }

    pub fn players(&self) -> Players<'_> {
        Players::new(&self.tx)
    }

    pub fn commit(self) -> Result<()> {
        self.tx.commit()?;
        debug!("unit of work committed");
        Ok(())
    }

    /// Discard every write made in this unit of work
    pub fn rollback(self) -> Result<()> {
        self.tx.rollback()?;
        debug!("unit of work rolled back");
        Ok(())
    }
}
