multiversx_sc::imports!();

use crate::phase::RoundPhase;
use crate::types::{ClaimRecord, RoundConfig, RoundTimeline, TallyCommitment};

#[multiversx_sc::module]
pub trait StorageModule {
    // ========================================================
    // VIEWS: derived
    // ========================================================

    #[view(isClaimed)]
    fn is_claimed(&self, index: u64) -> bool {
        let record = self.claim_record(index);
        !record.is_empty() && record.get().claimed
    }

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Round setup ──

    #[view(getPhase)]
    #[storage_mapper("phase")]
    fn phase(&self) -> SingleValueMapper<RoundPhase>;

    #[view(getTimeline)]
    #[storage_mapper("timeline")]
    fn timeline(&self) -> SingleValueMapper<RoundTimeline>;

    #[view(getRoundConfig)]
    #[storage_mapper("roundConfig")]
    fn round_config(&self) -> SingleValueMapper<RoundConfig<Self::Api>>;

    #[view(getVoiceCreditFactor)]
    #[storage_mapper("voiceCreditFactor")]
    fn voice_credit_factor(&self) -> SingleValueMapper<BigUint>;

    // ── Pool ──

    /// Current pool balance: deposits minus claims, zero after withdrawal.
    #[view(getTotalAmount)]
    #[storage_mapper("totalAmount")]
    fn total_amount(&self) -> SingleValueMapper<BigUint>;

    /// Cumulative deposits. Never decreases.
    #[view(getTotalDeposited)]
    #[storage_mapper("totalDeposited")]
    fn total_deposited(&self) -> SingleValueMapper<BigUint>;

    // ── Tally ──

    #[storage_mapper("isTallied")]
    fn is_tallied(&self) -> SingleValueMapper<bool>;

    #[view(getPublishedCommitment)]
    #[storage_mapper("publishedCommitment")]
    fn published_commitment(&self) -> SingleValueMapper<BigUint>;

    /// Opening of the published digest, from the first admitted batch.
    #[view(getTallyCommitment)]
    #[storage_mapper("tallyCommitment")]
    fn tally_commitment(&self) -> SingleValueMapper<TallyCommitment<Self::Api>>;

    #[view(getTotalSpent)]
    #[storage_mapper("totalSpent")]
    fn total_spent(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalVotesSquares)]
    #[storage_mapper("totalVotesSquares")]
    fn total_votes_squares(&self) -> SingleValueMapper<BigUint>;

    #[view(getTotalTallyResults)]
    #[storage_mapper("totalTallyResults")]
    fn total_tally_results(&self) -> SingleValueMapper<u64>;

    #[view(isResultAdded)]
    #[storage_mapper("resultAdded")]
    fn result_added(&self, index: u64) -> SingleValueMapper<bool>;

    #[view(getTallyResult)]
    #[storage_mapper("tallyResult")]
    fn tally_result(&self, index: u64) -> SingleValueMapper<BigUint>;

    // ── Allocation ──

    #[view(getAlpha)]
    #[storage_mapper("alpha")]
    fn alpha(&self) -> SingleValueMapper<BigUint>;

    /// Set once alpha is cached; a zero alpha is indistinguishable from an
    /// empty slot otherwise.
    #[storage_mapper("alphaCalculated")]
    fn alpha_calculated(&self) -> SingleValueMapper<bool>;

    // ── Claims ──

    #[view(getClaimRecord)]
    #[storage_mapper("claimRecord")]
    fn claim_record(&self, index: u64) -> SingleValueMapper<ClaimRecord<Self::Api>>;
}
