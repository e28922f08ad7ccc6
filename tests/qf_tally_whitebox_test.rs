mod common;

use common::*;
use multiversx_sc_scenario::imports::*;

use qf_tally::ledger::LedgerModule;
use qf_tally::phase::RoundPhase;
use qf_tally::registry::RegistryModule;
use qf_tally::storage::StorageModule;
use qf_tally::tally::TallyModule;
use qf_tally::types::{AddTallyResultsParams, RoundConfig, TallyResultEntry};
use qf_tally::QfTally;

const OWNER: TestAddress = TestAddress::new("owner");
const DONOR: TestAddress = TestAddress::new("donor");
const CUSTODIAN: TestAddress = TestAddress::new("custodian");
const STRANGER: TestAddress = TestAddress::new("stranger");
const SC_ADDRESS: TestSCAddress = TestSCAddress::new("qf-tally");
const CODE_PATH: MxscPath = MxscPath::new("output/qf-tally.mxsc.json");

const PAYOUT_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("MATCH-123456");
const PAYOUT_TOKEN_ID: &str = "MATCH-123456";
const OTHER_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("OTHER-abcdef");

const RECIPIENTS: [TestAddress; 13] = [
    TestAddress::new("recipient-00"),
    TestAddress::new("recipient-01"),
    TestAddress::new("recipient-02"),
    TestAddress::new("recipient-03"),
    TestAddress::new("recipient-04"),
    TestAddress::new("recipient-05"),
    TestAddress::new("recipient-06"),
    TestAddress::new("recipient-07"),
    TestAddress::new("recipient-08"),
    TestAddress::new("recipient-09"),
    TestAddress::new("recipient-10"),
    TestAddress::new("recipient-11"),
    TestAddress::new("recipient-12"),
];

const DEPLOY_TIME: u64 = 1_000;
const VOTING_DURATION: u64 = 100;
const COOLDOWN_DURATION: u64 = 500;
const ROUND_END: u64 = DEPLOY_TIME + VOTING_DURATION;
const COOLDOWN_END: u64 = ROUND_END + COOLDOWN_DURATION;

/// 5 payout-token units per voice credit.
const MAX_CONTRIBUTION: u64 = 5_000_000_000;
const MAX_CAP: u64 = 2_000_000;
const OWNER_DEPOSIT: u64 = 1_000_000;
const DONOR_DEPOSIT: u64 = 250_000;

const EXPECTED_PAYOUTS: [u64; 13] = [
    5, 115663, 302425, 53376, 8911, 26678, 26843, 4453, 182474, 440149, 40077, 48943, 0,
];
const EXPECTED_RESIDUAL: u64 = 3;

struct RoundSetup {
    world: ScenarioWorld,
    fixture: RoundFixture,
}

impl RoundSetup {
    /// Deployed, initialized, 13 recipients registered, nothing deposited.
    fn new() -> Self {
        let mut setup = Self::without_recipients();
        for (expected_index, recipient) in RECIPIENTS.iter().enumerate() {
            setup
                .world
                .tx()
                .from(OWNER)
                .to(SC_ADDRESS)
                .whitebox(qf_tally::contract_obj, |sc| {
                    let index = sc.add_recipient(recipient.to_managed_address());
                    assert_eq!(index, expected_index as u64);
                });
        }
        setup
    }

    /// Deployed and initialized, registry still empty.
    fn without_recipients() -> Self {
        let mut world = ScenarioWorld::new();
        world.register_contract(CODE_PATH, qf_tally::ContractBuilder);

        world.account(OWNER).nonce(1).esdt_balance(PAYOUT_TOKEN, 10_000_000u64);
        world
            .account(DONOR)
            .nonce(1)
            .esdt_balance(PAYOUT_TOKEN, 10_000_000u64)
            .esdt_balance(OTHER_TOKEN, 1_000u64);
        world.account(CUSTODIAN).nonce(1);
        world.account(STRANGER).nonce(1);
        for recipient in RECIPIENTS {
            world.account(recipient).nonce(1);
        }

        world.current_block().block_timestamp(DEPLOY_TIME);
        world
            .tx()
            .from(OWNER)
            .raw_deploy()
            .code(CODE_PATH)
            .new_address(SC_ADDRESS)
            .whitebox(qf_tally::contract_obj, |sc| {
                sc.init(DEPTH, VOTING_DURATION);
            });

        world
            .tx()
            .from(OWNER)
            .to(SC_ADDRESS)
            .whitebox(qf_tally::contract_obj, |sc| {
                sc.initialize(RoundConfig {
                    custodian: CUSTODIAN.to_managed_address(),
                    payout_token: EgldOrEsdtTokenIdentifier::esdt(TokenIdentifier::from(
                        PAYOUT_TOKEN_ID,
                    )),
                    max_contribution: BigUint::from(MAX_CONTRIBUTION),
                    max_cap: BigUint::from(MAX_CAP),
                    cooldown_duration: COOLDOWN_DURATION,
                });
            });

        RoundSetup {
            world,
            fixture: RoundFixture::build(),
        }
    }

    fn deposit(&mut self, from: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(from)
            .to(SC_ADDRESS)
            .payment(TestEsdtTransfer(PAYOUT_TOKEN, 0, amount))
            .whitebox(qf_tally::contract_obj, |sc| {
                sc.deposit();
            });
    }

    fn fund(&mut self) {
        self.deposit(OWNER, OWNER_DEPOSIT);
        self.deposit(DONOR, DONOR_DEPOSIT);
    }

    fn publish(&mut self) {
        self.world.current_block().block_timestamp(ROUND_END + 1);
        let fixture = self.fixture.clone();
        self.world
            .tx()
            .from(OWNER)
            .to(SC_ADDRESS)
            .whitebox(qf_tally::contract_obj, |sc| {
                sc.publish_tally_commitment(fixture.published());
            });
    }

    fn add_results(&mut self, indices: &[u64]) {
        let fixture = self.fixture.clone();
        self.world
            .tx()
            .from(OWNER)
            .to(SC_ADDRESS)
            .whitebox(qf_tally::contract_obj, |sc| {
                sc.add_tally_results(fixture.batch(indices));
            });
    }

    fn complete_tally(&mut self) {
        self.publish();
        self.add_results(&[0, 1, 2, 3, 4, 5, 6]);
        self.add_results(&[12, 11, 10, 9, 8, 7]);
    }

    fn claim(&mut self, index: u64) {
        let fixture = self.fixture.clone();
        self.world
            .tx()
            .from(STRANGER)
            .to(SC_ADDRESS)
            .whitebox(qf_tally::contract_obj, |sc| {
                sc.claim(fixture.claim_params(index));
            });
    }

    fn phase(&mut self) -> RoundPhase {
        let mut phase = RoundPhase::Uninitialized;
        self.world
            .query()
            .to(SC_ADDRESS)
            .whitebox(qf_tally::contract_obj, |sc| {
                phase = sc.phase().get();
            });
        phase
    }
}

// ============================================================
// Full round
// ============================================================

#[test]
fn full_round_settles_every_recipient() {
    let mut setup = RoundSetup::new();
    setup.fund();
    assert_eq!(setup.phase(), RoundPhase::Initialized);

    setup.publish();
    setup.add_results(&[0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(setup.phase(), RoundPhase::ResultsPartial);
    setup.add_results(&[12, 11, 10, 9, 8, 7]);
    assert_eq!(setup.phase(), RoundPhase::ResultsComplete);

    setup
        .world
        .query()
        .to(SC_ADDRESS)
        .whitebox(qf_tally::contract_obj, |sc| {
            assert_eq!(sc.total_spent().get(), BigUint::from(TOTAL_SPENT));
            assert_eq!(
                sc.total_votes_squares().get(),
                BigUint::from(TOTAL_VOTES_SQUARES)
            );
            assert_eq!(sc.total_tally_results().get(), 13u64);
            assert_eq!(sc.voice_credit_factor().get(), BigUint::from(5u64));
            assert_eq!(
                sc.total_deposited().get(),
                BigUint::from(OWNER_DEPOSIT + DONOR_DEPOSIT)
            );
        });

    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .whitebox(qf_tally::contract_obj, |sc| {
            let alpha = sc.calculate_alpha(OptionalValue::None);
            assert_eq!(alpha, big_dec("444302491103202846975"));
        });

    for index in 0..RECIPIENTS.len() as u64 {
        setup.claim(index);
    }

    for (recipient, &payout) in RECIPIENTS.iter().zip(EXPECTED_PAYOUTS.iter()) {
        if payout == 0 {
            continue;
        }
        setup
            .world
            .check_account(*recipient)
            .esdt_balance(PAYOUT_TOKEN, payout);
    }

    setup
        .world
        .query()
        .to(SC_ADDRESS)
        .whitebox(qf_tally::contract_obj, |sc| {
            assert_eq!(sc.total_amount().get(), BigUint::from(EXPECTED_RESIDUAL));
            assert!(sc.is_claimed(12));
            let record = sc.claim_record(9).get();
            assert_eq!(record.amount, BigUint::from(EXPECTED_PAYOUTS[9]));
        });

    // ── Sweep: refused at the boundary, accepted one second later ──
    setup.world.current_block().block_timestamp(COOLDOWN_END);
    setup
        .world
        .tx()
        .from(CUSTODIAN)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "CooldownPeriodNotOver"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.withdraw();
        });

    setup.world.current_block().block_timestamp(COOLDOWN_END + 1);
    setup
        .world
        .tx()
        .from(CUSTODIAN)
        .to(SC_ADDRESS)
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.withdraw();
        });

    setup
        .world
        .check_account(CUSTODIAN)
        .esdt_balance(PAYOUT_TOKEN, EXPECTED_RESIDUAL);
    setup
        .world
        .query()
        .to(SC_ADDRESS)
        .whitebox(qf_tally::contract_obj, |sc| {
            assert_eq!(sc.total_amount().get(), BigUint::zero());
            assert_eq!(sc.phase().get(), RoundPhase::Closed);
        });

    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "RoundClosed"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.withdraw();
        });
}

#[test]
fn allocation_views_agree() {
    let mut setup = RoundSetup::new();
    setup.fund();
    setup.complete_tally();

    setup
        .world
        .query()
        .to(SC_ADDRESS)
        .whitebox(qf_tally::contract_obj, |sc| {
            let mut credits = MultiValueEncoded::new();
            for &spent in SPENT_VOICE_CREDITS.iter() {
                credits.push(BigUint::from(spent));
            }
            let batch = sc.get_allocated_amounts(credits).to_vec();

            for (index, &spent) in SPENT_VOICE_CREDITS.iter().enumerate() {
                let single = sc.get_allocated_amount(index as u64, BigUint::from(spent));
                assert_eq!(single, BigUint::from(EXPECTED_PAYOUTS[index]));
                assert_eq!(batch.get(index).clone_value(), single);
            }
            // The view computes alpha without caching it.
            assert!(!sc.alpha_calculated().get());
        });
}

#[test]
fn allocation_views_survive_withdrawal() {
    let mut setup = RoundSetup::new();
    setup.fund();
    setup.complete_tally();

    setup.world.current_block().block_timestamp(COOLDOWN_END + 1);
    setup
        .world
        .tx()
        .from(CUSTODIAN)
        .to(SC_ADDRESS)
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.withdraw();
        });

    setup
        .world
        .query()
        .to(SC_ADDRESS)
        .whitebox(qf_tally::contract_obj, |sc| {
            assert_eq!(sc.phase().get(), RoundPhase::Closed);
            assert!(!sc.alpha_calculated().get());
            for (index, &spent) in SPENT_VOICE_CREDITS.iter().enumerate() {
                let amount = sc.get_allocated_amount(index as u64, BigUint::from(spent));
                assert_eq!(amount, BigUint::from(EXPECTED_PAYOUTS[index]));
            }
        });
}

#[test]
fn closed_unfinished_round_has_no_allocation() {
    let mut setup = RoundSetup::new();
    setup.fund();
    setup.publish();
    setup.add_results(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);

    setup.world.current_block().block_timestamp(COOLDOWN_END + 1);
    setup
        .world
        .tx()
        .from(CUSTODIAN)
        .to(SC_ADDRESS)
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.withdraw();
        });

    setup
        .world
        .tx()
        .from(STRANGER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "NotCompletedResults"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.get_allocated_amount(1, BigUint::from(SPENT_VOICE_CREDITS[1]));
        });
}

// ============================================================
// Claims
// ============================================================

#[test]
fn second_claim_is_rejected() {
    let mut setup = RoundSetup::new();
    setup.fund();
    setup.complete_tally();
    setup.claim(2);

    let fixture = setup.fixture.clone();
    setup
        .world
        .tx()
        .from(STRANGER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "AlreadyClaimed"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.claim(fixture.claim_params(2));
        });

    setup
        .world
        .check_account(RECIPIENTS[2])
        .esdt_balance(PAYOUT_TOKEN, EXPECTED_PAYOUTS[2]);
}

#[test]
fn claim_requires_complete_results() {
    let mut setup = RoundSetup::new();
    setup.fund();
    setup.publish();
    setup.add_results(&[0, 1, 2]);

    let fixture = setup.fixture.clone();
    setup
        .world
        .tx()
        .from(STRANGER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "VotesNotTallied"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.claim(fixture.claim_params(1));
        });
}

#[test]
fn claim_rejects_forged_inputs() {
    let mut setup = RoundSetup::new();
    setup.fund();
    setup.complete_tally();

    let fixture = setup.fixture.clone();
    setup
        .world
        .tx()
        .from(STRANGER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "InvalidTallyVotesProof"))
        .whitebox(qf_tally::contract_obj, |sc| {
            let mut params = fixture.claim_params(4);
            params.tally_result = BigUint::from(TALLY_RESULTS[4] + 1);
            sc.claim(params);
        });

    let fixture = setup.fixture.clone();
    setup
        .world
        .tx()
        .from(STRANGER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "InvalidTallyVotesProof"))
        .whitebox(qf_tally::contract_obj, |sc| {
            let mut params = fixture.claim_params(4);
            params.vote_option_tree_depth = DEPTH - 1;
            sc.claim(params);
        });

    let fixture = setup.fixture.clone();
    setup
        .world
        .tx()
        .from(STRANGER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "InvalidSpentVoiceCreditsProof"))
        .whitebox(qf_tally::contract_obj, |sc| {
            let mut params = fixture.claim_params(4);
            params.voice_credits_per_option = BigUint::zero();
            sc.claim(params);
        });

    let fixture = setup.fixture.clone();
    setup
        .world
        .tx()
        .from(STRANGER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "UnknownRecipient"))
        .whitebox(qf_tally::contract_obj, |sc| {
            let mut params = fixture.claim_params(4);
            params.index = 13;
            sc.claim(params);
        });
}

// ============================================================
// Deposits
// ============================================================

#[test]
fn deposit_rejections() {
    let mut setup = RoundSetup::new();

    setup
        .world
        .tx()
        .from(DONOR)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "DepositMustBeGreaterThanZero"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.deposit();
        });

    setup
        .world
        .tx()
        .from(DONOR)
        .to(SC_ADDRESS)
        .payment(TestEsdtTransfer(OTHER_TOKEN, 0, 100u64))
        .returns(ExpectError(4, "InvalidPayoutToken"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.deposit();
        });

    setup
        .world
        .tx()
        .from(DONOR)
        .to(SC_ADDRESS)
        .payment(TestEsdtTransfer(PAYOUT_TOKEN, 0, MAX_CAP + 1))
        .returns(ExpectError(4, "PoolCapExceeded"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.deposit();
        });

    setup.deposit(DONOR, MAX_CAP);
    setup
        .world
        .query()
        .to(SC_ADDRESS)
        .whitebox(qf_tally::contract_obj, |sc| {
            assert_eq!(sc.total_amount().get(), BigUint::from(MAX_CAP));
            assert!(sc.is_funding_open());
        });
}

#[test]
fn deposits_close_when_results_complete() {
    let mut setup = RoundSetup::new();
    setup.fund();
    setup.publish();
    setup.add_results(&[0, 1, 2]);
    // Still open while results are partial.
    setup.deposit(DONOR, 1_000);
    setup.add_results(&[3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);

    setup
        .world
        .tx()
        .from(DONOR)
        .to(SC_ADDRESS)
        .payment(TestEsdtTransfer(PAYOUT_TOKEN, 0, 1_000u64))
        .returns(ExpectError(4, "VotesAlreadyTallied"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.deposit();
        });
}

// ============================================================
// Tally admission
// ============================================================

#[test]
fn publish_waits_for_voting_end() {
    let mut setup = RoundSetup::new();
    setup.world.current_block().block_timestamp(ROUND_END);

    let fixture = setup.fixture.clone();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "VotingPeriodNotOver"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.publish_tally_commitment(fixture.published());
        });

    setup.publish();

    let fixture = setup.fixture.clone();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "TallyAlreadyPublished"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.publish_tally_commitment(fixture.published());
        });

    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "RegistryLocked"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.add_recipient(STRANGER.to_managed_address());
        });
}

#[test]
fn publish_needs_registered_recipients() {
    let mut setup = RoundSetup::without_recipients();
    setup.world.current_block().block_timestamp(ROUND_END + 1);

    let fixture = setup.fixture.clone();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "NoRecipients"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.publish_tally_commitment(fixture.published());
        });

    // Nothing was published: results stay locked out, funding stays open.
    let fixture = setup.fixture.clone();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "VotesNotTallied"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.add_tally_results(fixture.batch(&[]));
        });
    setup.deposit(DONOR, 1_000);
    assert_eq!(setup.phase(), RoundPhase::Initialized);
}

#[test]
fn empty_result_batch_is_rejected() {
    let mut setup = RoundSetup::new();
    setup.publish();

    let fixture = setup.fixture.clone();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "EmptyResultBatch"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.add_tally_results(fixture.batch(&[]));
        });

    assert_eq!(setup.phase(), RoundPhase::Initialized);
    setup.deposit(DONOR, 1_000);
}

#[test]
fn results_need_a_published_commitment() {
    let mut setup = RoundSetup::new();
    let fixture = setup.fixture.clone();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "VotesNotTallied"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.add_tally_results(fixture.batch(&[0]));
        });
}

#[test]
fn duplicate_and_out_of_range_results_are_rejected() {
    let mut setup = RoundSetup::new();
    setup.publish();
    setup.add_results(&[0, 1]);

    for indices in [&[1u64][..], &[2, 3, 2][..]] {
        let fixture = setup.fixture.clone();
        setup
            .world
            .tx()
            .from(OWNER)
            .to(SC_ADDRESS)
            .returns(ExpectError(4, "TooManyResults"))
            .whitebox(qf_tally::contract_obj, |sc| {
                sc.add_tally_results(fixture.batch(indices));
            });
    }

    // Inside the tree, but past the registered recipients.
    let fixture = setup.fixture.clone();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "TooManyResults"))
        .whitebox(qf_tally::contract_obj, |sc| {
            let mut entry: TallyResultEntry<DebugApi> = fixture.entry(12);
            entry.index = 13;
            let mut results = ManagedVec::new();
            results.push(entry);
            sc.add_tally_results(AddTallyResultsParams {
                results,
                commitment: fixture.commitment(),
            });
        });

    setup
        .world
        .query()
        .to(SC_ADDRESS)
        .whitebox(qf_tally::contract_obj, |sc| {
            assert_eq!(sc.total_tally_results().get(), 2u64);
            assert!(!sc.result_added(2).get());
        });
}

#[test]
fn a_bad_proof_rejects_the_whole_batch() {
    let mut setup = RoundSetup::new();
    setup.publish();

    let fixture = setup.fixture.clone();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "InvalidTallyVotesProof"))
        .whitebox(qf_tally::contract_obj, |sc| {
            let mut forged: TallyResultEntry<DebugApi> = fixture.entry(3);
            forged.index = 2;
            let mut results = ManagedVec::new();
            results.push(fixture.entry(0));
            results.push(fixture.entry(1));
            results.push(forged);
            sc.add_tally_results(AddTallyResultsParams {
                results,
                commitment: fixture.commitment(),
            });
        });

    let fixture = setup.fixture.clone();
    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "IncorrectSpentVoiceCredits"))
        .whitebox(qf_tally::contract_obj, |sc| {
            let mut params = fixture.batch(&[0]);
            params.commitment.total_spent = BigUint::from(TOTAL_SPENT - 1);
            sc.add_tally_results(params);
        });

    setup
        .world
        .query()
        .to(SC_ADDRESS)
        .whitebox(qf_tally::contract_obj, |sc| {
            assert_eq!(sc.total_tally_results().get(), 0u64);
            assert_eq!(sc.phase().get(), RoundPhase::Initialized);
        });
}

// ============================================================
// Alpha
// ============================================================

#[test]
fn alpha_rejections() {
    let mut setup = RoundSetup::new();
    setup.fund();
    setup.publish();
    setup.add_results(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);

    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "NotCompletedResults"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.calculate_alpha(OptionalValue::None);
        });

    setup.add_results(&[12]);

    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "InvalidBudget"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.calculate_alpha(OptionalValue::Some(BigUint::zero()));
        });

    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "InvalidBudget"))
        .whitebox(qf_tally::contract_obj, |sc| {
            let over_deposited = BigUint::from(OWNER_DEPOSIT + DONOR_DEPOSIT + 1);
            sc.calculate_alpha(OptionalValue::Some(over_deposited));
        });

    setup
        .world
        .tx()
        .from(STRANGER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "Unauthorized"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.calculate_alpha(OptionalValue::None);
        });
}

#[test]
fn alpha_is_cached_once() {
    let mut setup = RoundSetup::new();
    setup.fund();
    setup.complete_tally();

    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .whitebox(qf_tally::contract_obj, |sc| {
            let alpha = sc.calculate_alpha(OptionalValue::Some(BigUint::from(1_000_000u64)));
            // A later budget does not replace the cached value.
            let again = sc.calculate_alpha(OptionalValue::None);
            assert_eq!(alpha, again);
            assert_eq!(sc.alpha().get(), alpha);
        });
}

// ============================================================
// Access and lifecycle
// ============================================================

#[test]
fn owner_only_endpoints() {
    let mut setup = RoundSetup::new();

    setup
        .world
        .tx()
        .from(STRANGER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "Unauthorized"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.add_recipient(STRANGER.to_managed_address());
        });

    setup
        .world
        .tx()
        .from(STRANGER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "Unauthorized"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.withdraw();
        });

    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .returns(ExpectError(4, "AlreadyInitialized"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.initialize(RoundConfig {
                custodian: STRANGER.to_managed_address(),
                payout_token: EgldOrEsdtTokenIdentifier::egld(),
                max_contribution: BigUint::zero(),
                max_cap: BigUint::zero(),
                cooldown_duration: 0,
            });
        });
}

#[test]
fn withdraw_closes_an_unfinished_round() {
    let mut setup = RoundSetup::new();
    setup.fund();

    setup.world.current_block().block_timestamp(COOLDOWN_END + 1);
    setup
        .world
        .tx()
        .from(OWNER)
        .to(SC_ADDRESS)
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.withdraw();
        });

    setup
        .world
        .check_account(CUSTODIAN)
        .esdt_balance(PAYOUT_TOKEN, OWNER_DEPOSIT + DONOR_DEPOSIT);
    assert_eq!(setup.phase(), RoundPhase::Closed);

    setup
        .world
        .tx()
        .from(DONOR)
        .to(SC_ADDRESS)
        .payment(TestEsdtTransfer(PAYOUT_TOKEN, 0, 1_000u64))
        .returns(ExpectError(4, "RoundClosed"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.deposit();
        });
}

#[test]
fn tree_depth_is_bounded_at_deploy() {
    let mut world = ScenarioWorld::new();
    world.register_contract(CODE_PATH, qf_tally::ContractBuilder);
    world.account(OWNER).nonce(1);

    world
        .tx()
        .from(OWNER)
        .raw_deploy()
        .code(CODE_PATH)
        .new_address(SC_ADDRESS)
        .returns(ExpectError(4, "InvalidTreeDepth"))
        .whitebox(qf_tally::contract_obj, |sc| {
            sc.init(0, VOTING_DURATION);
        });
}
