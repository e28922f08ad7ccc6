multiversx_sc::imports!();

use crate::allocation::allocated_amount;
use crate::errors::TallyError;
use crate::phase::RoundPhase;
use crate::types::{ClaimParams, ClaimRecord};
use crate::verifier::{verify_per_vo_spent_voice_credits, verify_tally_result};

// ============================================================
// Funding Ledger: deposits in, claims and the final sweep out
// ============================================================

#[multiversx_sc::module]
pub trait LedgerModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::guards::GuardsModule
    + crate::registry::RegistryModule
    + crate::tally::TallyModule
{
    // ========================================================
    // ENDPOINT: deposit
    // ========================================================

    #[endpoint(deposit)]
    #[payable("*")]
    fn deposit(&self) {
        require_ok!(self.current_phase().check_deposit());

        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        ensure!(amount > 0u64, TallyError::DepositMustBeGreaterThanZero);

        let config = self.round_config().get();
        ensure!(token == config.payout_token, TallyError::InvalidPayoutToken);

        let deposited = &self.total_deposited().get() + &amount;
        ensure!(deposited <= config.max_cap, TallyError::PoolCapExceeded);

        self.total_deposited().set(&deposited);
        self.total_amount().update(|total| *total += &amount);

        let donor = self.blockchain().get_caller();
        self.deposited_event(&donor, &amount);
    }

    // ========================================================
    // ENDPOINT: claim
    // Pays a recipient its matched amount, once.
    // ========================================================

    #[endpoint(claim)]
    fn claim(&self, params: ClaimParams<Self::Api>) {
        require_ok!(self.current_phase().check_claim());
        ensure!(!self.is_claimed(params.index), TallyError::AlreadyClaimed);
        let payout_address = require_ok!(self.recipient_address(params.index));

        // ── Tally result must be the admitted one, and proven ──
        let commitment = self.tally_commitment().get();
        let published = self.published_commitment().get();
        let configured_depth = self.timeline().get().vote_option_tree_depth;
        ensure!(
            params.tally_result == self.tally_result(params.index).get()
                && verify_tally_result(
                    &commitment,
                    &published,
                    params.index,
                    &params.tally_result,
                    &params.tally_result_proof,
                    params.vote_option_tree_depth,
                    configured_depth,
                ),
            TallyError::InvalidTallyVotesProof
        );

        // ── Voice credits spent on this option ──
        ensure!(
            verify_per_vo_spent_voice_credits(
                &commitment,
                &published,
                params.index,
                &params.voice_credits_per_option,
                &params.per_vo_spent_proof,
                &params.per_vo_spent_salt,
                params.vote_option_tree_depth,
                configured_depth,
            ),
            TallyError::InvalidSpentVoiceCreditsProof
        );

        let alpha = require_ok!(self.resolve_alpha(None));
        let amount = require_ok!(allocated_amount(
            &alpha,
            &self.voice_credit_factor().get(),
            &params.tally_result,
            &params.voice_credits_per_option,
        ));

        let total_amount = self.total_amount().get();
        ensure!(amount <= total_amount, TallyError::InsufficientFunds);

        self.claim_record(params.index).set(ClaimRecord {
            recipient_index: params.index,
            claimed: true,
            amount: amount.clone(),
        });
        self.total_amount().set(&total_amount - &amount);

        if amount > 0u64 {
            let token = self.round_config().get().payout_token;
            self.send().direct(&payout_address, &token, 0, &amount);
        }

        self.claimed_event(params.index, &payout_address, &amount);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Sweeps the residual pool to the custodian and closes the round.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self) {
        self.require_owner_or_custodian();
        let next_phase = require_ok!(self.current_phase().close());

        let config = self.round_config().get();
        let now = self.blockchain().get_block_timestamp();
        ensure!(
            now > self.timeline().get().cooldown_end(config.cooldown_duration),
            TallyError::CooldownPeriodNotOver
        );

        let residual = self.total_amount().get();
        self.total_amount().set(BigUint::zero());
        self.phase().set(next_phase);

        if residual > 0u64 {
            self.send()
                .direct(&config.custodian, &config.payout_token, 0, &residual);
        }

        self.withdrawn_event(&config.custodian, &residual);
    }

    #[view(isFundingOpen)]
    fn is_funding_open(&self) -> bool {
        self.current_phase().is_funding_open()
    }

    #[view(isClaimOpen)]
    fn is_claim_open(&self) -> bool {
        self.current_phase() == RoundPhase::ResultsComplete
    }
}
