#![no_std]

multiversx_sc::imports!();

#[macro_use]
pub mod errors;

pub mod allocation;
pub mod events;
pub mod guards;
pub mod ledger;
pub mod phase;
pub mod poseidon;
pub mod poseidon_constants;
pub mod registry;
pub mod storage;
pub mod tally;
pub mod types;
pub mod verifier;

use allocation::voice_credit_factor;
use errors::TallyError;
use phase::RoundPhase;
use types::{RoundConfig, RoundTimeline};
use verifier::MAX_VOTE_OPTION_TREE_DEPTH;

// ============================================================
// Contract
// ============================================================

/// Settles one quadratic-funding round: holds the matching pool, admits
/// the verified tally, and pays each recipient its matched share.
#[multiversx_sc::contract]
pub trait QfTally:
    storage::StorageModule
    + events::EventsModule
    + guards::GuardsModule
    + registry::RegistryModule
    + tally::TallyModule
    + ledger::LedgerModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// Voting starts at deployment and lasts `voting_duration` seconds.
    #[init]
    fn init(&self, vote_option_tree_depth: u8, voting_duration: u64) {
        ensure!(
            vote_option_tree_depth > 0 && vote_option_tree_depth <= MAX_VOTE_OPTION_TREE_DEPTH,
            TallyError::InvalidTreeDepth
        );

        self.timeline().set(RoundTimeline {
            deploy_time: self.blockchain().get_block_timestamp(),
            voting_duration,
            vote_option_tree_depth,
        });
        self.phase().set(RoundPhase::Uninitialized);
        self.total_amount().set(BigUint::zero());
        self.total_deposited().set(BigUint::zero());
        self.total_tally_results().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: initialize
    // ========================================================

    #[endpoint(initialize)]
    fn initialize(&self, config: RoundConfig<Self::Api>) {
        self.require_owner();
        let next_phase = require_ok!(self.current_phase().initialize());
        ensure!(
            config.payout_token.is_valid(),
            TallyError::InvalidPayoutToken
        );

        self.voice_credit_factor()
            .set(voice_credit_factor(&config.max_contribution));
        self.round_config().set(&config);
        self.phase().set(next_phase);

        self.initialized_event(&config.custodian, &config.payout_token, &config.max_cap);
    }
}
