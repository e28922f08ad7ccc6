mod common;

use common::{big_dec, SPENT_VOICE_CREDITS, TALLY_RESULTS, TOTAL_SPENT, TOTAL_VOTES_SQUARES};
use multiversx_sc_scenario::imports::*;
use qf_tally::allocation::{
    allocated_amount, allocated_amounts, voice_credit_factor, AllocationState, ALPHA_PRECISION,
};
use qf_tally::errors::TallyError;

fn n(value: u64) -> BigUint<StaticApi> {
    BigUint::from(value)
}

fn reference_state(factor: BigUint<StaticApi>) -> AllocationState<StaticApi> {
    AllocationState {
        total_spent: n(TOTAL_SPENT),
        total_votes_squares: n(TOTAL_VOTES_SQUARES),
        voice_credit_factor: factor,
        results_complete: true,
    }
}

fn payouts(alpha: &BigUint<StaticApi>, factor: &BigUint<StaticApi>) -> Vec<BigUint<StaticApi>> {
    TALLY_RESULTS
        .iter()
        .zip(SPENT_VOICE_CREDITS.iter())
        .map(|(&result, &spent)| {
            allocated_amount(alpha, factor, &n(result), &n(spent)).expect("payout")
        })
        .collect()
}

fn sum(amounts: &[BigUint<StaticApi>]) -> BigUint<StaticApi> {
    amounts.iter().fold(BigUint::zero(), |acc, amount| acc + amount)
}

#[test]
fn voice_credit_factor_never_below_one() {
    assert_eq!(voice_credit_factor(&n(5_000_000_000)), n(5));
    assert_eq!(voice_credit_factor(&n(1_000_000_000)), n(1));
    assert_eq!(voice_credit_factor(&n(999_999_999)), n(1));
    assert_eq!(voice_credit_factor(&n(0)), n(1));
}

#[test]
fn alpha_with_unit_factor_follows_closed_form() {
    let budget = n(1_000_000);
    let alpha = reference_state(n(1)).calculate_alpha(&budget).unwrap();

    let expected = (&budget - &n(TOTAL_SPENT)) * n(ALPHA_PRECISION)
        / (n(TOTAL_VOTES_SQUARES) - n(TOTAL_SPENT));
    assert_eq!(alpha, expected);
    assert_eq!(alpha, big_dec("1778822064056939501779"));
}

#[test]
fn reference_round_with_unit_factor() {
    let factor = n(1);
    let alpha = reference_state(factor.clone())
        .calculate_alpha(&n(1_000_000))
        .unwrap();
    let amounts = payouts(&alpha, &factor);

    let expected: Vec<_> = [
        1u64, 92527, 241979, 42703, 7120, 21349, 21382, 3559, 145925, 352264, 32036, 39148, 0,
    ]
    .iter()
    .map(|&amount| n(amount))
    .collect();
    assert_eq!(amounts, expected);
    assert_eq!(sum(&amounts), n(999_993));
}

#[test]
fn reference_round_with_factor_five() {
    let factor = voice_credit_factor(&n(5_000_000_000));
    let alpha = reference_state(factor.clone())
        .calculate_alpha(&n(1_250_000))
        .unwrap();
    assert_eq!(alpha, big_dec("444302491103202846975"));

    let amounts = payouts(&alpha, &factor);
    let expected: Vec<_> = [
        5u64, 115663, 302425, 53376, 8911, 26678, 26843, 4453, 182474, 440149, 40077, 48943, 0,
    ]
    .iter()
    .map(|&amount| n(amount))
    .collect();
    assert_eq!(amounts, expected);
    assert_eq!(sum(&amounts), n(1_249_997));
}

#[test]
fn reference_round_with_eighteen_decimal_token() {
    let factor = n(5_000_000_000);
    let budget = big_dec("1000000000000000000000");
    let alpha = reference_state(factor.clone()).calculate_alpha(&budget).unwrap();
    assert_eq!(alpha, big_dec("355871885583629893238434163"));

    let amounts = payouts(&alpha, &factor);
    assert_eq!(amounts[0], n(5_000_000_000));
    assert_eq!(amounts[9], big_dec("352313167017793594306"));
    assert_eq!(amounts[12], n(0));
    assert_eq!(sum(&amounts), big_dec("999999999999999999995"));
    assert!(sum(&amounts) <= budget);
}

/// Reward vector of the upstream reference round: 5-token maximum
/// contribution on an 18-decimal token, funded with the total spent plus 2
/// tokens.
#[test]
fn upstream_reference_round() {
    let tally: [u64; 13] = [12, 107, 159, 67, 26, 35, 53, 17, 114, 158, 65, 60, 0];
    let spent: [u64; 13] = [86, 1459, 3039, 587, 136, 491, 627, 79, 1644, 2916, 721, 606, 0];
    let total_spent: u64 = spent.iter().sum();
    let total_votes_squares: u64 = tally.iter().map(|t| t * t).sum();
    assert_eq!(total_spent, 12_391);
    assert_eq!(total_votes_squares, 92_147);

    let factor = voice_credit_factor(&(n(5) * n(ALPHA_PRECISION)));
    assert_eq!(factor, n(5_000_000_000));
    let budget = n(total_spent + 2) * n(ALPHA_PRECISION);

    let state = AllocationState {
        total_spent: n(total_spent),
        total_votes_squares: n(total_votes_squares),
        voice_credit_factor: factor.clone(),
        results_complete: true,
    };
    let alpha = state.calculate_alpha(&budget).unwrap();
    assert_eq!(alpha, big_dec("31077285566089071668589197"));

    let expected = [
        "9012413244165830783",
        "1552310421321149129846",
        "3456104942999765660263",
        "606317844329397788254",
        "83908671708440493505",
        "114053640482546893023",
        "339053188661031771904",
        "32631150239393525252",
        "1763946736951215707909",
        "3425959975385659260745",
        "544474046722880535633",
        "465226967954353402878",
        "0",
    ];
    let entries = tally
        .iter()
        .zip(spent.iter())
        .map(|(&result, &credits)| (n(result), n(credits)));
    let amounts = allocated_amounts(&alpha, &factor, entries).unwrap();
    for (index, &amount) in expected.iter().enumerate() {
        assert_eq!(amounts.get(index).clone_value(), big_dec(amount), "recipient {index}");
    }
}

#[test]
fn alpha_rejections_in_order() {
    // Every check fails: the budget check wins.
    let degenerate = AllocationState::<StaticApi> {
        total_spent: n(10),
        total_votes_squares: n(10),
        voice_credit_factor: n(1),
        results_complete: false,
    };
    assert_eq!(
        degenerate.calculate_alpha(&n(0)),
        Err(TallyError::InvalidBudget)
    );
    assert_eq!(
        degenerate.calculate_alpha(&n(1_000)),
        Err(TallyError::NoProjectHasMoreThanOneVote)
    );

    let incomplete = AllocationState {
        results_complete: false,
        ..reference_state(n(1))
    };
    assert_eq!(
        incomplete.calculate_alpha(&n(1_000)),
        Err(TallyError::NotCompletedResults)
    );
}

#[test]
fn budget_must_cover_contributions() {
    let state = reference_state(n(5));
    assert_eq!(
        state.calculate_alpha(&n(5 * TOTAL_SPENT - 1)),
        Err(TallyError::InvalidBudget)
    );
    // Exactly the contributions: nothing left to match.
    assert_eq!(state.calculate_alpha(&n(5 * TOTAL_SPENT)), Ok(n(0)));
}

#[test]
fn zero_tally_result_pays_nothing() {
    let alpha = big_dec("1778822064056939501779");
    assert_eq!(allocated_amount(&alpha, &n(1), &n(0), &n(40)), Ok(n(0)));
}

#[test]
fn unverified_voice_credits_can_underflow() {
    let alpha = n(2) * n(ALPHA_PRECISION);
    assert_eq!(
        allocated_amount(&alpha, &n(1), &n(1), &n(10)),
        Err(TallyError::InvalidVoiceCredits)
    );
}

#[test]
fn batch_matches_single_calls() {
    let factor = n(5);
    let alpha = reference_state(factor.clone())
        .calculate_alpha(&n(1_250_000))
        .unwrap();

    let entries = TALLY_RESULTS
        .iter()
        .zip(SPENT_VOICE_CREDITS.iter())
        .map(|(&result, &spent)| (n(result), n(spent)));
    let batch = allocated_amounts(&alpha, &factor, entries).unwrap();

    let single = payouts(&alpha, &factor);
    assert_eq!(batch.len(), single.len());
    for (i, amount) in single.iter().enumerate() {
        assert_eq!(&batch.get(i).clone_value(), amount, "recipient {i}");
    }
}

#[test]
fn payouts_never_exceed_budget() {
    let factor = n(1);
    for budget in [302u64, 303, 1_000, 65_537, 1_000_000, 123_456_789] {
        let alpha = reference_state(factor.clone())
            .calculate_alpha(&n(budget))
            .unwrap();
        assert!(sum(&payouts(&alpha, &factor)) <= n(budget), "budget {budget}");
    }
}
