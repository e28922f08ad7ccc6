multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use crate::errors::{SettlementResult, TallyError};

// ============================================================
// Round Phase: lifecycle of a matching round
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RoundPhase {
    /// Deployed, but the round config has not been set.
    Uninitialized,
    /// Config set. Deposits open. The tally commitment may be published.
    Initialized,
    /// At least one result batch admitted. Deposits still open.
    ResultsPartial,
    /// Every registered recipient has an admitted result. Claims open.
    ResultsComplete,
    /// Residual funds swept to the custodian. Terminal.
    Closed,
}

impl RoundPhase {
    pub fn initialize(self) -> SettlementResult<RoundPhase> {
        match self {
            RoundPhase::Uninitialized => Ok(RoundPhase::Initialized),
            _ => Err(TallyError::AlreadyInitialized),
        }
    }

    pub fn require_initialized(self) -> SettlementResult<()> {
        match self {
            RoundPhase::Uninitialized => Err(TallyError::NotInitialized),
            _ => Ok(()),
        }
    }

    pub fn check_deposit(self) -> SettlementResult<()> {
        match self {
            RoundPhase::Uninitialized => Err(TallyError::NotInitialized),
            RoundPhase::Initialized | RoundPhase::ResultsPartial => Ok(()),
            RoundPhase::ResultsComplete => Err(TallyError::VotesAlreadyTallied),
            RoundPhase::Closed => Err(TallyError::RoundClosed),
        }
    }

    /// The pipeline hands over its commitment before any result is admitted.
    pub fn check_publish(self) -> SettlementResult<()> {
        match self {
            RoundPhase::Uninitialized => Err(TallyError::NotInitialized),
            RoundPhase::Initialized => Ok(()),
            RoundPhase::ResultsPartial | RoundPhase::ResultsComplete => {
                Err(TallyError::TallyAlreadyPublished)
            }
            RoundPhase::Closed => Err(TallyError::RoundClosed),
        }
    }

    /// Phase after a result batch brings the admitted count to `admitted`.
    ///
    /// The first batch always leaves `Initialized`; the phase reaches
    /// `ResultsComplete` on the batch that covers the last recipient, and
    /// nothing more can be admitted afterwards.
    pub fn admit_results(self, admitted: u64, expected: u64) -> SettlementResult<RoundPhase> {
        match self {
            RoundPhase::Uninitialized => Err(TallyError::NotInitialized),
            RoundPhase::Initialized | RoundPhase::ResultsPartial => {
                if admitted > expected {
                    Err(TallyError::TooManyResults)
                } else if admitted == expected {
                    Ok(RoundPhase::ResultsComplete)
                } else {
                    Ok(RoundPhase::ResultsPartial)
                }
            }
            RoundPhase::ResultsComplete => Err(TallyError::TooManyResults),
            RoundPhase::Closed => Err(TallyError::RoundClosed),
        }
    }

    pub fn check_claim(self) -> SettlementResult<()> {
        match self {
            RoundPhase::Uninitialized => Err(TallyError::NotInitialized),
            RoundPhase::Initialized | RoundPhase::ResultsPartial => {
                Err(TallyError::VotesNotTallied)
            }
            RoundPhase::ResultsComplete => Ok(()),
            RoundPhase::Closed => Err(TallyError::RoundClosed),
        }
    }

    /// Withdrawal closes the round from any initialized phase.
    pub fn close(self) -> SettlementResult<RoundPhase> {
        match self {
            RoundPhase::Uninitialized => Err(TallyError::NotInitialized),
            RoundPhase::Closed => Err(TallyError::RoundClosed),
            _ => Ok(RoundPhase::Closed),
        }
    }

    pub fn is_funding_open(self) -> bool {
        self.check_deposit().is_ok()
    }
}
