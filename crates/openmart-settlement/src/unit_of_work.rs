//! Call-granular transactional boundary.
//!
//! Every public operation that performs external calls (receiver hooks) runs
//! between `begin` and `commit`/`rollback`. A rollback restores the exact
//! state captured at `begin` — balances, registry, ledgers, and event log —
//! so a failed call leaves no residue, even when a nested re-entrant call
//! committed in the meantime: the enclosing call's failure unwinds it, as if
//! the call never executed.

use crate::market::MarketState;

/// Snapshot of the mutable marketplace state, taken at the public-call
/// boundary.
pub(crate) struct UnitOfWork {
    snapshot: MarketState,
}

impl UnitOfWork {
    /// Capture the state as it is right now.
    pub(crate) fn begin(state: &MarketState) -> Self {
        Self {
            snapshot: state.clone(),
        }
    }

    /// Keep every change made since `begin`.
    pub(crate) fn commit(self) {}

    /// Discard every change made since `begin`.
    pub(crate) fn rollback(self, state: &mut MarketState) {
        *state = self.snapshot;
    }
}
