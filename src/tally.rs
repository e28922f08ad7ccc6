multiversx_sc::imports!();

use crate::allocation::{allocated_amount, allocated_amounts, AllocationState};
use crate::errors::{SettlementResult, TallyError};
use crate::phase::RoundPhase;
use crate::types::AddTallyResultsParams;
use crate::verifier::{verify_spent_voice_credits, verify_tally_result};

#[multiversx_sc::module]
pub trait TallyModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::guards::GuardsModule
    + crate::registry::RegistryModule
{
    // ========================================================
    // ENDPOINT: publishTallyCommitment
    // Hand-off from the off-chain tally pipeline
    // ========================================================

    #[endpoint(publishTallyCommitment)]
    fn publish_tally_commitment(&self, commitment: BigUint) {
        self.require_owner();
        let phase = self.current_phase();
        require_ok!(phase.require_initialized());

        let now = self.blockchain().get_block_timestamp();
        ensure!(
            now > self.timeline().get().round_end(),
            TallyError::VotingPeriodNotOver
        );
        ensure!(!self.is_tallied().get(), TallyError::TallyAlreadyPublished);
        require_ok!(phase.check_publish());
        ensure!(self.recipient_count() > 0, TallyError::NoRecipients);

        self.published_commitment().set(&commitment);
        self.is_tallied().set(true);
        self.tally_published_event(now, &commitment);
    }

    // ========================================================
    // ENDPOINT: addTallyResults
    // The whole batch is verified before anything is written.
    // ========================================================

    #[endpoint(addTallyResults)]
    fn add_tally_results(&self, params: AddTallyResultsParams<Self::Api>) {
        self.require_owner();
        let phase = self.current_phase();
        require_ok!(phase.require_initialized());
        self.require_tallied();

        let batch_len = params.results.len() as u64;
        ensure!(batch_len > 0, TallyError::EmptyResultBatch);
        let expected = self.recipient_count();
        let admitted = self.total_tally_results().get() + batch_len;
        let next_phase = require_ok!(phase.admit_results(admitted, expected));

        // ── Coverage: each index once, within the registered set ──
        for (position, entry) in params.results.iter().enumerate() {
            ensure!(
                entry.index < expected && !self.result_added(entry.index).get(),
                TallyError::TooManyResults
            );
            let repeated = params
                .results
                .iter()
                .take(position)
                .any(|earlier| earlier.index == entry.index);
            ensure!(!repeated, TallyError::TooManyResults);
        }

        // ── Proofs ──
        let published = self.published_commitment().get();
        ensure!(
            verify_spent_voice_credits(&params.commitment, &published),
            TallyError::IncorrectSpentVoiceCredits
        );
        let depth = self.timeline().get().vote_option_tree_depth;
        for entry in params.results.iter() {
            ensure!(
                verify_tally_result(
                    &params.commitment,
                    &published,
                    entry.index,
                    &entry.tally_result,
                    &entry.proof,
                    depth,
                    depth,
                ),
                TallyError::InvalidTallyVotesProof
            );
        }

        // ── Commit ──
        if self.tally_commitment().is_empty() {
            self.tally_commitment().set(&params.commitment);
        }
        self.total_spent().set(&params.commitment.total_spent);

        let mut votes_squares = self.total_votes_squares().get();
        for entry in params.results.iter() {
            self.result_added(entry.index).set(true);
            self.tally_result(entry.index).set(&entry.tally_result);
            votes_squares += &entry.tally_result * &entry.tally_result;
            self.result_added_event(entry.index, &entry.tally_result);
        }
        self.total_votes_squares().set(&votes_squares);
        self.total_tally_results().set(admitted);
        self.phase().set(next_phase);

        if next_phase == RoundPhase::ResultsComplete {
            self.results_completed_event(admitted, &votes_squares);
        }
    }

    // ========================================================
    // ENDPOINT: calculateAlpha
    // ========================================================

    /// Computes and caches alpha. `budget` defaults to the total deposited;
    /// once cached, later calls return the stored value.
    #[endpoint(calculateAlpha)]
    fn calculate_alpha(&self, budget: OptionalValue<BigUint>) -> BigUint {
        self.require_owner();
        require_ok!(self.current_phase().require_initialized());
        self.require_tallied();
        require_ok!(self.resolve_alpha(budget.into_option()))
    }

    // ========================================================
    // VIEWS: allocation
    // ========================================================

    #[view(getAllocatedAmount)]
    fn get_allocated_amount(&self, index: u64, voice_credits: BigUint) -> BigUint {
        require_ok!(self.current_phase().require_initialized());
        self.require_tallied();
        let alpha = require_ok!(self.current_alpha());
        require_ok!(allocated_amount(
            &alpha,
            &self.voice_credit_factor().get(),
            &self.tally_result(index).get(),
            &voice_credits,
        ))
    }

    /// Entry `i` of `voice_credits` is paired with the tally result of
    /// recipient `i`.
    #[view(getAllocatedAmounts)]
    fn get_allocated_amounts(
        &self,
        voice_credits: MultiValueEncoded<BigUint>,
    ) -> MultiValueEncoded<BigUint> {
        require_ok!(self.current_phase().require_initialized());
        self.require_tallied();
        let alpha = require_ok!(self.current_alpha());

        let entries = voice_credits
            .into_iter()
            .enumerate()
            .map(|(index, credits)| (self.tally_result(index as u64).get(), credits));
        let amounts = require_ok!(allocated_amounts(
            &alpha,
            &self.voice_credit_factor().get(),
            entries,
        ));
        MultiValueEncoded::from(amounts)
    }

    // ========================================================
    // Internal helpers
    // ========================================================

    /// A round closed after its last result was admitted still counts.
    fn results_complete(&self) -> bool {
        match self.current_phase() {
            RoundPhase::ResultsComplete => true,
            RoundPhase::Closed => {
                let admitted = self.total_tally_results().get();
                admitted > 0 && admitted == self.recipient_count()
            }
            _ => false,
        }
    }

    fn allocation_state(&self) -> AllocationState<Self::Api> {
        AllocationState {
            total_spent: self.total_spent().get(),
            total_votes_squares: self.total_votes_squares().get(),
            voice_credit_factor: self.voice_credit_factor().get(),
            results_complete: self.results_complete(),
        }
    }

    /// Alpha for `budget` without caching it.
    fn preview_alpha(&self, budget: &BigUint) -> SettlementResult<BigUint> {
        if budget > &self.total_deposited().get() {
            return Err(TallyError::InvalidBudget);
        }
        self.allocation_state().calculate_alpha(budget)
    }

    /// Cached alpha, or the default-budget alpha if none is cached yet.
    fn current_alpha(&self) -> SettlementResult<BigUint> {
        if self.alpha_calculated().get() {
            return Ok(self.alpha().get());
        }
        self.preview_alpha(&self.total_deposited().get())
    }

    fn resolve_alpha(&self, budget: Option<BigUint>) -> SettlementResult<BigUint> {
        if self.alpha_calculated().get() {
            return Ok(self.alpha().get());
        }

        let budget = budget.unwrap_or_else(|| self.total_deposited().get());
        let alpha = self.preview_alpha(&budget)?;
        self.alpha().set(&alpha);
        self.alpha_calculated().set(true);
        self.alpha_calculated_event(&budget, &alpha);
        Ok(alpha)
    }
}
