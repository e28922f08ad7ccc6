multiversx_sc::imports!();

use crate::errors::{SettlementResult, TallyError};
use crate::phase::RoundPhase;
use crate::verifier::tree_capacity;

// ============================================================
// Recipient Registry: vote option index -> payout address
// ============================================================

#[multiversx_sc::module]
pub trait RegistryModule:
    crate::storage::StorageModule + crate::events::EventsModule + crate::guards::GuardsModule
{
    /// Registers the next vote option. Indices are 0-based and follow
    /// registration order. The set is frozen once the tally is published.
    #[endpoint(addRecipient)]
    fn add_recipient(&self, payout_address: ManagedAddress) -> u64 {
        self.require_owner();
        ensure!(
            self.current_phase() != RoundPhase::Closed,
            TallyError::RoundClosed
        );
        ensure!(!self.is_tallied().get(), TallyError::RegistryLocked);

        let depth = self.timeline().get().vote_option_tree_depth;
        let index = self.recipient_count();
        ensure!(index < tree_capacity(depth), TallyError::TooManyRecipients);

        self.recipients().push(&payout_address);
        self.recipient_added_event(index, &payout_address);
        index
    }

    #[view(getRecipient)]
    fn get_recipient(&self, index: u64) -> ManagedAddress {
        require_ok!(self.recipient_address(index))
    }

    #[view(getRecipientCount)]
    fn recipient_count(&self) -> u64 {
        self.recipients().len() as u64
    }

    fn recipient_address(&self, index: u64) -> SettlementResult<ManagedAddress> {
        if index >= self.recipient_count() {
            return Err(TallyError::UnknownRecipient);
        }
        Ok(self.recipients().get(index as usize + 1))
    }

    // ── Storage ──

    #[storage_mapper("recipients")]
    fn recipients(&self) -> VecMapper<ManagedAddress>;
}
