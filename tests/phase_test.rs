use qf_tally::errors::{ErrorClass, TallyError};
use qf_tally::phase::RoundPhase;

#[test]
fn initialize_only_once() {
    assert_eq!(
        RoundPhase::Uninitialized.initialize(),
        Ok(RoundPhase::Initialized)
    );
    assert_eq!(
        RoundPhase::Initialized.initialize(),
        Err(TallyError::AlreadyInitialized)
    );
    assert_eq!(
        RoundPhase::Closed.initialize(),
        Err(TallyError::AlreadyInitialized)
    );
}

#[test]
fn deposits_close_once_results_complete() {
    assert_eq!(
        RoundPhase::Uninitialized.check_deposit(),
        Err(TallyError::NotInitialized)
    );
    assert!(RoundPhase::Initialized.is_funding_open());
    assert!(RoundPhase::ResultsPartial.is_funding_open());
    assert_eq!(
        RoundPhase::ResultsComplete.check_deposit(),
        Err(TallyError::VotesAlreadyTallied)
    );
    assert_eq!(
        RoundPhase::Closed.check_deposit(),
        Err(TallyError::RoundClosed)
    );
}

#[test]
fn results_complete_exactly_once() {
    let mut phase = RoundPhase::Initialized;
    let mut completions = 0;
    for admitted in [3u64, 7, 13] {
        phase = phase.admit_results(admitted, 13).unwrap();
        if phase == RoundPhase::ResultsComplete {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);
    assert_eq!(
        phase.admit_results(14, 13),
        Err(TallyError::TooManyResults)
    );
}

#[test]
fn single_batch_completes_directly() {
    assert_eq!(
        RoundPhase::Initialized.admit_results(13, 13),
        Ok(RoundPhase::ResultsComplete)
    );
    assert_eq!(
        RoundPhase::ResultsPartial.admit_results(14, 13),
        Err(TallyError::TooManyResults)
    );
}

#[test]
fn claims_only_when_complete() {
    assert_eq!(
        RoundPhase::Initialized.check_claim(),
        Err(TallyError::VotesNotTallied)
    );
    assert_eq!(
        RoundPhase::ResultsPartial.check_claim(),
        Err(TallyError::VotesNotTallied)
    );
    assert_eq!(RoundPhase::ResultsComplete.check_claim(), Ok(()));
    assert_eq!(RoundPhase::Closed.check_claim(), Err(TallyError::RoundClosed));
}

#[test]
fn publish_before_any_result() {
    assert_eq!(RoundPhase::Initialized.check_publish(), Ok(()));
    assert_eq!(
        RoundPhase::ResultsPartial.check_publish(),
        Err(TallyError::TallyAlreadyPublished)
    );
}

#[test]
fn close_is_terminal() {
    for phase in [
        RoundPhase::Initialized,
        RoundPhase::ResultsPartial,
        RoundPhase::ResultsComplete,
    ] {
        assert_eq!(phase.close(), Ok(RoundPhase::Closed));
    }
    assert_eq!(RoundPhase::Closed.close(), Err(TallyError::RoundClosed));
    assert_eq!(
        RoundPhase::Uninitialized.close(),
        Err(TallyError::NotInitialized)
    );
}

#[test]
fn error_classes() {
    assert_eq!(TallyError::Unauthorized.class(), ErrorClass::Authorization);
    assert_eq!(
        TallyError::RoundClosed.class(),
        ErrorClass::PhaseViolation
    );
    assert_eq!(
        TallyError::InvalidBudget.class(),
        ErrorClass::ArithmeticDomain
    );
    assert!(TallyError::InvalidTallyVotesProof.is_retryable());
    assert!(!TallyError::AlreadyClaimed.is_retryable());
    assert_eq!(TallyError::AlreadyClaimed.as_str(), "AlreadyClaimed");
    assert!(TallyError::EmptyResultBatch.is_retryable());
    assert_eq!(
        TallyError::NoRecipients.class(),
        ErrorClass::PhaseViolation
    );
}
