// ============================================================
// Errors: every rejection the round can produce
// ============================================================

/// Broad category of a rejection. Clients branch on this to decide
/// whether a call can be retried with different input.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorClass {
    /// Operation attempted outside its valid phase or time window.
    PhaseViolation,
    /// Caller is not the administrator or custodian. Not retryable.
    Authorization,
    /// Supplied proof, result set or argument failed verification.
    DataIntegrity,
    /// The computation is undefined or degenerate for these numbers.
    ArithmeticDomain,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TallyError {
    // ── Phase violations ──
    NotInitialized,
    AlreadyInitialized,
    VotesNotTallied,
    VotesAlreadyTallied,
    NotCompletedResults,
    VotingPeriodNotOver,
    TallyAlreadyPublished,
    RegistryLocked,
    RoundClosed,
    CooldownPeriodNotOver,
    AlreadyClaimed,
    NoRecipients,

    // ── Authorization ──
    Unauthorized,

    // ── Data integrity ──
    InvalidTallyVotesProof,
    TooManyResults,
    IncorrectSpentVoiceCredits,
    InvalidSpentVoiceCreditsProof,
    UnknownRecipient,
    InvalidPayoutToken,
    InvalidVoiceCredits,
    InvalidTreeDepth,
    TooManyRecipients,
    EmptyResultBatch,

    // ── Arithmetic / domain ──
    InvalidBudget,
    NoProjectHasMoreThanOneVote,
    DepositMustBeGreaterThanZero,
    PoolCapExceeded,
    InsufficientFunds,
}

impl TallyError {
    /// Message passed to `sc_panic!`. Stable: off-chain clients match on it.
    pub const fn as_str(&self) -> &'static str {
        match self {
            TallyError::NotInitialized => "NotInitialized",
            TallyError::AlreadyInitialized => "AlreadyInitialized",
            TallyError::VotesNotTallied => "VotesNotTallied",
            TallyError::VotesAlreadyTallied => "VotesAlreadyTallied",
            TallyError::NotCompletedResults => "NotCompletedResults",
            TallyError::VotingPeriodNotOver => "VotingPeriodNotOver",
            TallyError::TallyAlreadyPublished => "TallyAlreadyPublished",
            TallyError::RegistryLocked => "RegistryLocked",
            TallyError::RoundClosed => "RoundClosed",
            TallyError::CooldownPeriodNotOver => "CooldownPeriodNotOver",
            TallyError::AlreadyClaimed => "AlreadyClaimed",
            TallyError::NoRecipients => "NoRecipients",
            TallyError::Unauthorized => "Unauthorized",
            TallyError::InvalidTallyVotesProof => "InvalidTallyVotesProof",
            TallyError::TooManyResults => "TooManyResults",
            TallyError::IncorrectSpentVoiceCredits => "IncorrectSpentVoiceCredits",
            TallyError::InvalidSpentVoiceCreditsProof => "InvalidSpentVoiceCreditsProof",
            TallyError::UnknownRecipient => "UnknownRecipient",
            TallyError::InvalidPayoutToken => "InvalidPayoutToken",
            TallyError::InvalidVoiceCredits => "InvalidVoiceCredits",
            TallyError::InvalidTreeDepth => "InvalidTreeDepth",
            TallyError::TooManyRecipients => "TooManyRecipients",
            TallyError::EmptyResultBatch => "EmptyResultBatch",
            TallyError::InvalidBudget => "InvalidBudget",
            TallyError::NoProjectHasMoreThanOneVote => "NoProjectHasMoreThanOneVote",
            TallyError::DepositMustBeGreaterThanZero => "DepositMustBeGreaterThanZero",
            TallyError::PoolCapExceeded => "PoolCapExceeded",
            TallyError::InsufficientFunds => "InsufficientFunds",
        }
    }

    pub const fn class(&self) -> ErrorClass {
        match self {
            TallyError::NotInitialized
            | TallyError::AlreadyInitialized
            | TallyError::VotesNotTallied
            | TallyError::VotesAlreadyTallied
            | TallyError::NotCompletedResults
            | TallyError::VotingPeriodNotOver
            | TallyError::TallyAlreadyPublished
            | TallyError::RegistryLocked
            | TallyError::RoundClosed
            | TallyError::CooldownPeriodNotOver
            | TallyError::AlreadyClaimed
            | TallyError::NoRecipients => ErrorClass::PhaseViolation,

            TallyError::Unauthorized => ErrorClass::Authorization,

            TallyError::InvalidTallyVotesProof
            | TallyError::TooManyResults
            | TallyError::IncorrectSpentVoiceCredits
            | TallyError::InvalidSpentVoiceCreditsProof
            | TallyError::UnknownRecipient
            | TallyError::InvalidPayoutToken
            | TallyError::InvalidVoiceCredits
            | TallyError::InvalidTreeDepth
            | TallyError::TooManyRecipients
            | TallyError::EmptyResultBatch => ErrorClass::DataIntegrity,

            TallyError::InvalidBudget
            | TallyError::NoProjectHasMoreThanOneVote
            | TallyError::DepositMustBeGreaterThanZero
            | TallyError::PoolCapExceeded
            | TallyError::InsufficientFunds => ErrorClass::ArithmeticDomain,
        }
    }

    pub const fn is_retryable(&self) -> bool {
        matches!(self.class(), ErrorClass::DataIntegrity)
    }
}

pub type SettlementResult<T> = Result<T, TallyError>;

/// Aborts the transaction with `$err` unless `$condition` holds.
#[macro_export]
macro_rules! ensure {
    ($condition:expr, $err:expr) => {
        if !($condition) {
            multiversx_sc::sc_panic!($crate::errors::TallyError::as_str(&$err));
        }
    };
}

/// Unwraps a [`SettlementResult`] inside a contract method, aborting the
/// transaction with the error's message otherwise.
#[macro_export]
macro_rules! require_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(err) => multiversx_sc::sc_panic!(err.as_str()),
        }
    };
}
