multiversx_sc::imports!();

use crate::errors::TallyError;
use crate::phase::RoundPhase;

/// Caller and phase checks shared by every endpoint module.
#[multiversx_sc::module]
pub trait GuardsModule: crate::storage::StorageModule {
    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        ensure!(
            caller == self.blockchain().get_owner_address(),
            TallyError::Unauthorized
        );
    }

    /// The custodian is only known once the round config is set.
    fn require_owner_or_custodian(&self) {
        let caller = self.blockchain().get_caller();
        if caller == self.blockchain().get_owner_address() {
            return;
        }
        let config = self.round_config();
        ensure!(
            !config.is_empty() && caller == config.get().custodian,
            TallyError::Unauthorized
        );
    }

    fn current_phase(&self) -> RoundPhase {
        self.phase().get()
    }

    fn require_tallied(&self) {
        ensure!(self.is_tallied().get(), TallyError::VotesNotTallied);
    }
}
