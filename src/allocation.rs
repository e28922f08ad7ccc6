multiversx_sc::imports!();

use crate::errors::{SettlementResult, TallyError};

// ============================================================
// Allocation Engine: matching coefficient and per-recipient payout
// ============================================================

/// Fixed-point scale of alpha.
pub const ALPHA_PRECISION: u64 = 1_000_000_000_000_000_000;

/// Voice credits handed to a voter at full contribution.
pub const MAX_VOICE_CREDITS: u64 = 1_000_000_000;

/// Payout-token units per voice credit, never below 1.
pub fn voice_credit_factor<M: ManagedTypeApi>(max_contribution: &BigUint<M>) -> BigUint<M> {
    let factor = max_contribution / &BigUint::from(MAX_VOICE_CREDITS);
    if factor == 0u64 {
        BigUint::from(1u64)
    } else {
        factor
    }
}

/// Aggregate tally statistics alpha is derived from.
#[derive(Clone, Debug)]
pub struct AllocationState<M: ManagedTypeApi> {
    /// Sum of quadratic vote costs over all recipients (linear units).
    pub total_spent: BigUint<M>,
    /// Sum of squared per-recipient tally results.
    pub total_votes_squares: BigUint<M>,
    pub voice_credit_factor: BigUint<M>,
    pub results_complete: bool,
}

impl<M: ManagedTypeApi> AllocationState<M> {
    /// What voters paid in, expressed in payout-token units.
    pub fn contributions(&self) -> BigUint<M> {
        &self.total_spent * &self.voice_credit_factor
    }

    /// ```text
    /// alpha = (budget - contributions) * PRECISION
    ///         / (voice_credit_factor * (total_votes_squares - total_spent))
    /// ```
    pub fn calculate_alpha(&self, budget: &BigUint<M>) -> SettlementResult<BigUint<M>> {
        let contributions = self.contributions();
        if budget < &contributions {
            return Err(TallyError::InvalidBudget);
        }
        if self.total_votes_squares <= self.total_spent {
            return Err(TallyError::NoProjectHasMoreThanOneVote);
        }
        if !self.results_complete {
            return Err(TallyError::NotCompletedResults);
        }

        let numerator = (budget - &contributions) * &BigUint::from(ALPHA_PRECISION);
        let denominator =
            &self.voice_credit_factor * &(&self.total_votes_squares - &self.total_spent);
        Ok(numerator / denominator)
    }
}

/// Payout for one recipient:
///
/// ```text
/// quadratic = alpha * factor * tally_result^2
/// linear    = factor * voice_credits
/// amount    = (quadratic + PRECISION * linear - alpha * linear) / PRECISION
/// ```
///
/// A zero tally result (unused or padding option) pays nothing.
pub fn allocated_amount<M: ManagedTypeApi>(
    alpha: &BigUint<M>,
    voice_credit_factor: &BigUint<M>,
    tally_result: &BigUint<M>,
    voice_credits: &BigUint<M>,
) -> SettlementResult<BigUint<M>> {
    if *tally_result == 0u64 {
        return Ok(BigUint::zero());
    }

    let precision = BigUint::from(ALPHA_PRECISION);
    let quadratic = alpha * voice_credit_factor * tally_result * tally_result;
    let linear = voice_credit_factor * voice_credits;
    let linear_precision = &linear * &precision;
    let linear_alpha = alpha * &linear;

    let gross = quadratic + linear_precision;
    if gross < linear_alpha {
        return Err(TallyError::InvalidVoiceCredits);
    }
    Ok((gross - linear_alpha) / &precision)
}

/// Element-wise [`allocated_amount`] over `(tally_result, voice_credits)`
/// pairs, in input order.
pub fn allocated_amounts<M, I>(
    alpha: &BigUint<M>,
    voice_credit_factor: &BigUint<M>,
    entries: I,
) -> SettlementResult<ManagedVec<M, BigUint<M>>>
where
    M: ManagedTypeApi,
    I: IntoIterator<Item = (BigUint<M>, BigUint<M>)>,
{
    let mut amounts = ManagedVec::new();
    for (tally_result, voice_credits) in entries {
        amounts.push(allocated_amount(
            alpha,
            voice_credit_factor,
            &tally_result,
            &voice_credits,
        )?);
    }
    Ok(amounts)
}
