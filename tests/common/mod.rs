// Reference round shared by the integration tests: 13 vote options in a
// depth-3 quinary tree, with the trees, salts and published digest the
// off-chain tally pipeline would hand over.
#![allow(dead_code)]

use multiversx_sc_scenario::imports::*;
use multiversx_sc_scenario::num_bigint;

use qf_tally::poseidon::{hash5, hash_left_right};
use qf_tally::types::{AddTallyResultsParams, ClaimParams, TallyCommitment, TallyResultEntry};
use qf_tally::verifier::commitment_digest;

pub const DEPTH: u8 = 3;

pub const TALLY_RESULTS: [u64; 13] = [1, 9, 14, 6, 3, 4, 7, 2, 12, 16, 6, 6, 0];
pub const SPENT_VOICE_CREDITS: [u64; 13] = [1, 29, 60, 12, 5, 4, 37, 2, 62, 58, 18, 14, 0];
pub const TOTAL_SPENT: u64 = 302;
pub const TOTAL_VOTES_SQUARES: u64 = 864;

pub const RESULTS_SALT: u64 = 0x2a2b_3c4d_5e6f;
pub const TOTAL_SPENT_SALT: u64 = 0x1d_1e1f;
pub const PER_VO_SPENT_SALT: u64 = 0x0bad_c0de;

pub const RESULTS_ROOT_HEX: &str =
    "027543b1037313016022d67752f34a0a08d6639fc897d448bbcba824d805c9d3";
pub const SPENT_ROOT_HEX: &str =
    "194ed27fc96e965933b66517487a5564013e371fa87162aa06875a0d7403dacc";
pub const SPENT_HASH_HEX: &str =
    "1ff8cc6fb5cfe9b9bc4b2cf853eb5309a5eb9c12cb04e535f04b35bce688c1e6";
pub const PER_VO_SPENT_HASH_HEX: &str =
    "009d0680c4aa0aabc0d932900492bade6517fd410a31647c3e247b8210f345a3";
pub const PUBLISHED_COMMITMENT_HEX: &str =
    "18d2ff00c94c0b4e7abf8c1aa87edf21816c2afd1d0cf9adadfb0ce9db7c1b8d";

// ── Big-number literals ──

pub fn big_dec<M: ManagedTypeApi>(decimal: &str) -> BigUint<M> {
    let value = num_bigint::BigUint::parse_bytes(decimal.as_bytes(), 10).expect("decimal literal");
    BigUint::from_bytes_be(&value.to_bytes_be())
}

pub fn big_hex<M: ManagedTypeApi>(hex: &str) -> BigUint<M> {
    let value = num_bigint::BigUint::parse_bytes(hex.as_bytes(), 16).expect("hex literal");
    BigUint::from_bytes_be(&value.to_bytes_be())
}

fn to_bytes<M: ManagedTypeApi>(value: &BigUint<M>) -> Vec<u8> {
    value.to_bytes_be().as_slice().to_vec()
}

// ── Quinary tree ──

/// Full vote-option tree, leaves zero-padded to `5^depth`.
pub struct QuinaryTree<M: ManagedTypeApi> {
    levels: Vec<Vec<BigUint<M>>>,
}

impl<M: ManagedTypeApi> QuinaryTree<M> {
    pub fn new(leaves: &[u64], depth: u8) -> Self {
        let capacity = 5usize.pow(depth as u32);
        let mut level: Vec<BigUint<M>> = (0..capacity)
            .map(|i| BigUint::from(leaves.get(i).copied().unwrap_or(0)))
            .collect();
        let mut levels = vec![level.clone()];
        while level.len() > 1 {
            level = level
                .chunks(5)
                .map(|c| hash5([&c[0], &c[1], &c[2], &c[3], &c[4]]))
                .collect();
            levels.push(level.clone());
        }
        QuinaryTree { levels }
    }

    pub fn root(&self) -> BigUint<M> {
        self.levels.last().expect("tree has a root")[0].clone()
    }

    /// Siblings of `index`, leaf level first, ascending within a level.
    pub fn proof(&self, index: u64) -> ManagedVec<M, BigUint<M>> {
        let mut path = ManagedVec::new();
        let mut index = index as usize;
        for level in &self.levels[..self.levels.len() - 1] {
            let first = index - index % 5;
            for slot in first..first + 5 {
                if slot != index {
                    path.push(level[slot].clone());
                }
            }
            index /= 5;
        }
        path
    }
}

// ── Round fixture ──

/// The reference round in API-independent form, so it can be computed
/// once and handed into whitebox closures.
#[derive(Clone)]
pub struct RoundFixture {
    results_root: Vec<u8>,
    spent_voice_credits_hash: Vec<u8>,
    per_vo_spent_voice_credits_hash: Vec<u8>,
    published: Vec<u8>,
    tally_proofs: Vec<Vec<Vec<u8>>>,
    spent_proofs: Vec<Vec<Vec<u8>>>,
}

fn path_bytes<M: ManagedTypeApi>(path: &ManagedVec<M, BigUint<M>>) -> Vec<Vec<u8>> {
    path.iter().map(|sibling| to_bytes(&*sibling)).collect()
}

fn managed_path<M: ManagedTypeApi>(path: &[Vec<u8>]) -> ManagedVec<M, BigUint<M>> {
    let mut managed = ManagedVec::new();
    for sibling in path {
        managed.push(BigUint::from_bytes_be(sibling));
    }
    managed
}

impl RoundFixture {
    pub fn build() -> Self {
        let results = QuinaryTree::<StaticApi>::new(&TALLY_RESULTS, DEPTH);
        let spent = QuinaryTree::<StaticApi>::new(&SPENT_VOICE_CREDITS, DEPTH);

        let spent_hash = hash_left_right(
            &BigUint::<StaticApi>::from(TOTAL_SPENT),
            &BigUint::from(TOTAL_SPENT_SALT),
        );
        let per_vo_hash = hash_left_right(&spent.root(), &BigUint::from(PER_VO_SPENT_SALT));
        let results_commitment = hash_left_right(&results.root(), &BigUint::from(RESULTS_SALT));
        let published = commitment_digest(&results_commitment, &spent_hash, &per_vo_hash);

        let indices = 0..TALLY_RESULTS.len() as u64;
        RoundFixture {
            results_root: to_bytes(&results.root()),
            spent_voice_credits_hash: to_bytes(&spent_hash),
            per_vo_spent_voice_credits_hash: to_bytes(&per_vo_hash),
            published: to_bytes(&published),
            tally_proofs: indices
                .clone()
                .map(|i| path_bytes(&results.proof(i)))
                .collect(),
            spent_proofs: indices.map(|i| path_bytes(&spent.proof(i))).collect(),
        }
    }

    pub fn published<M: ManagedTypeApi>(&self) -> BigUint<M> {
        BigUint::from_bytes_be(&self.published)
    }

    pub fn commitment<M: ManagedTypeApi>(&self) -> TallyCommitment<M> {
        TallyCommitment {
            results_root: BigUint::from_bytes_be(&self.results_root),
            results_salt: BigUint::from(RESULTS_SALT),
            total_spent: BigUint::from(TOTAL_SPENT),
            total_spent_salt: BigUint::from(TOTAL_SPENT_SALT),
            spent_voice_credits_hash: BigUint::from_bytes_be(&self.spent_voice_credits_hash),
            per_vo_spent_voice_credits_hash: BigUint::from_bytes_be(
                &self.per_vo_spent_voice_credits_hash,
            ),
        }
    }

    pub fn tally_proof<M: ManagedTypeApi>(&self, index: u64) -> ManagedVec<M, BigUint<M>> {
        managed_path(&self.tally_proofs[index as usize])
    }

    pub fn spent_proof<M: ManagedTypeApi>(&self, index: u64) -> ManagedVec<M, BigUint<M>> {
        managed_path(&self.spent_proofs[index as usize])
    }

    pub fn entry<M: ManagedTypeApi>(&self, index: u64) -> TallyResultEntry<M> {
        TallyResultEntry {
            index,
            tally_result: BigUint::from(TALLY_RESULTS[index as usize]),
            proof: self.tally_proof(index),
        }
    }

    pub fn batch<M: ManagedTypeApi>(&self, indices: &[u64]) -> AddTallyResultsParams<M> {
        let mut results = ManagedVec::new();
        for &index in indices {
            results.push(self.entry(index));
        }
        AddTallyResultsParams {
            results,
            commitment: self.commitment(),
        }
    }

    pub fn claim_params<M: ManagedTypeApi>(&self, index: u64) -> ClaimParams<M> {
        ClaimParams {
            index,
            voice_credits_per_option: BigUint::from(SPENT_VOICE_CREDITS[index as usize]),
            tally_result: BigUint::from(TALLY_RESULTS[index as usize]),
            tally_result_proof: self.tally_proof(index),
            vote_option_tree_depth: DEPTH,
            per_vo_spent_proof: self.spent_proof(index),
            per_vo_spent_salt: BigUint::from(PER_VO_SPENT_SALT),
        }
    }
}
