multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Round Config: set once by `initialize`
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct RoundConfig<M: ManagedTypeApi> {
    /// Receives whatever is left in the pool after the cooldown.
    pub custodian: ManagedAddress<M>,
    pub payout_token: EgldOrEsdtTokenIdentifier<M>,
    /// Largest contribution a single voter can back with voice credits.
    /// Fixes the voice credit factor.
    pub max_contribution: BigUint<M>,
    /// Ceiling on the cumulative deposit total.
    pub max_cap: BigUint<M>,
    /// Seconds after the end of voting before the custodian may sweep.
    pub cooldown_duration: u64,
}

// ============================================================
// Round Timeline: fixed at deployment
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct RoundTimeline {
    pub deploy_time: u64,
    pub voting_duration: u64,
    pub vote_option_tree_depth: u8,
}

impl RoundTimeline {
    pub fn round_end(&self) -> u64 {
        self.deploy_time.saturating_add(self.voting_duration)
    }

    /// Last timestamp at which the custodian sweep is still refused.
    pub fn cooldown_end(&self, cooldown_duration: u64) -> u64 {
        self.round_end().saturating_add(cooldown_duration)
    }
}

// ============================================================
// Tally Commitment: opening of the pipeline's published digest
// ============================================================

/// The published commitment is
/// `hash3(hashLR(results_root, results_salt), spent_voice_credits_hash,
/// per_vo_spent_voice_credits_hash)`, with
/// `spent_voice_credits_hash = hashLR(total_spent, total_spent_salt)`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct TallyCommitment<M: ManagedTypeApi> {
    pub results_root: BigUint<M>,
    pub results_salt: BigUint<M>,
    pub total_spent: BigUint<M>,
    pub total_spent_salt: BigUint<M>,
    pub spent_voice_credits_hash: BigUint<M>,
    pub per_vo_spent_voice_credits_hash: BigUint<M>,
}

// ============================================================
// Result batches and claims
// ============================================================

#[type_abi]
#[derive(
    ManagedVecItem, TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug,
)]
pub struct TallyResultEntry<M: ManagedTypeApi> {
    pub index: u64,
    pub tally_result: BigUint<M>,
    /// `depth * 4` siblings, leaf level first.
    pub proof: ManagedVec<M, BigUint<M>>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct AddTallyResultsParams<M: ManagedTypeApi> {
    pub results: ManagedVec<M, TallyResultEntry<M>>,
    pub commitment: TallyCommitment<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ClaimParams<M: ManagedTypeApi> {
    pub index: u64,
    pub voice_credits_per_option: BigUint<M>,
    pub tally_result: BigUint<M>,
    pub tally_result_proof: ManagedVec<M, BigUint<M>>,
    pub vote_option_tree_depth: u8,
    /// Opens `voice_credits_per_option` against the per-option spent tree.
    pub per_vo_spent_proof: ManagedVec<M, BigUint<M>>,
    pub per_vo_spent_salt: BigUint<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ClaimRecord<M: ManagedTypeApi> {
    pub recipient_index: u64,
    pub claimed: bool,
    pub amount: BigUint<M>,
}
