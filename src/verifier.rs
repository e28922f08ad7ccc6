multiversx_sc::imports!();

use crate::poseidon::{hash3, hash5, hash_left_right, is_field_element};
use crate::types::TallyCommitment;

// ============================================================
// Commitment Verifier: Merkle inclusion against the tally digest
// ============================================================

/// Arity of the vote-option tree.
pub const LEAVES_PER_NODE: u64 = 5;

/// Siblings per tree level in a proof.
pub const SIBLINGS_PER_LEVEL: usize = (LEAVES_PER_NODE - 1) as usize;

/// Deepest vote-option tree a round may be deployed with.
pub const MAX_VOTE_OPTION_TREE_DEPTH: u8 = 10;

pub fn tree_capacity(depth: u8) -> u64 {
    LEAVES_PER_NODE.pow(depth as u32)
}

/// Folds a leaf up the quinary tree.
///
/// At every level the running node takes slot `index % 5`, the four
/// siblings of that level fill the remaining slots in order, and the five
/// children are hashed into the parent. `path` must hold `depth * 4`
/// siblings; check with [`proof_shape_is_valid`] first.
pub fn compute_merkle_root_from_path<M: ManagedTypeApi>(
    depth: u8,
    index: u64,
    leaf: &BigUint<M>,
    path: &ManagedVec<M, BigUint<M>>,
) -> BigUint<M> {
    let mut current = leaf.clone();
    let mut index = index;

    for level in 0..depth as usize {
        let position = (index % LEAVES_PER_NODE) as usize;
        let offset = level * SIBLINGS_PER_LEVEL;

        let children: [BigUint<M>; 5] = core::array::from_fn(|slot| {
            if slot == position {
                current.clone()
            } else {
                let sibling = if slot > position { slot - 1 } else { slot };
                path.get(offset + sibling).clone_value()
            }
        });
        current = hash5(core::array::from_fn(|slot| &children[slot]));
        index /= LEAVES_PER_NODE;
    }

    current
}

pub fn proof_shape_is_valid(depth: u8, configured_depth: u8, index: u64, path_len: usize) -> bool {
    depth == configured_depth
        && depth <= MAX_VOTE_OPTION_TREE_DEPTH
        && path_len == depth as usize * SIBLINGS_PER_LEVEL
        && index < tree_capacity(depth)
}

fn path_in_field<M: ManagedTypeApi>(leaf: &BigUint<M>, path: &ManagedVec<M, BigUint<M>>) -> bool {
    is_field_element(leaf) && path.iter().all(|sibling| is_field_element(&*sibling))
}

/// Recomputes the published digest from the opened commitment.
pub fn commitment_digest<M: ManagedTypeApi>(
    results_commitment: &BigUint<M>,
    spent_voice_credits_hash: &BigUint<M>,
    per_vo_spent_voice_credits_hash: &BigUint<M>,
) -> BigUint<M> {
    hash3([
        results_commitment,
        spent_voice_credits_hash,
        per_vo_spent_voice_credits_hash,
    ])
}

/// Checks that the batch totals open the published digest:
/// `(total_spent, total_spent_salt)` hashes to `spent_voice_credits_hash`
/// and the three-part digest equals `published`.
pub fn verify_spent_voice_credits<M: ManagedTypeApi>(
    commitment: &TallyCommitment<M>,
    published: &BigUint<M>,
) -> bool {
    let fields = [
        &commitment.results_root,
        &commitment.results_salt,
        &commitment.total_spent,
        &commitment.total_spent_salt,
        &commitment.spent_voice_credits_hash,
        &commitment.per_vo_spent_voice_credits_hash,
    ];
    if !fields.iter().all(|field| is_field_element(field)) {
        return false;
    }

    let spent_hash = hash_left_right(&commitment.total_spent, &commitment.total_spent_salt);
    if spent_hash != commitment.spent_voice_credits_hash {
        return false;
    }

    let results_commitment = hash_left_right(&commitment.results_root, &commitment.results_salt);
    commitment_digest(
        &results_commitment,
        &commitment.spent_voice_credits_hash,
        &commitment.per_vo_spent_voice_credits_hash,
    ) == *published
}

/// Verifies that `tally_result` sits at `index` of the results tree bound
/// by `published`. Pure; any mismatch in depth, path, index or leaf
/// returns `false`.
pub fn verify_tally_result<M: ManagedTypeApi>(
    commitment: &TallyCommitment<M>,
    published: &BigUint<M>,
    index: u64,
    tally_result: &BigUint<M>,
    proof: &ManagedVec<M, BigUint<M>>,
    depth: u8,
    configured_depth: u8,
) -> bool {
    if !proof_shape_is_valid(depth, configured_depth, index, proof.len())
        || !path_in_field(tally_result, proof)
    {
        return false;
    }

    let root = compute_merkle_root_from_path(depth, index, tally_result, proof);
    let results_commitment = hash_left_right(&root, &commitment.results_salt);
    commitment_digest(
        &results_commitment,
        &commitment.spent_voice_credits_hash,
        &commitment.per_vo_spent_voice_credits_hash,
    ) == *published
}

/// Verifies the voice credits spent on option `index` against the
/// per-option spent tree, salted into `per_vo_spent_voice_credits_hash`.
#[allow(clippy::too_many_arguments)]
pub fn verify_per_vo_spent_voice_credits<M: ManagedTypeApi>(
    commitment: &TallyCommitment<M>,
    published: &BigUint<M>,
    index: u64,
    spent: &BigUint<M>,
    proof: &ManagedVec<M, BigUint<M>>,
    salt: &BigUint<M>,
    depth: u8,
    configured_depth: u8,
) -> bool {
    if !proof_shape_is_valid(depth, configured_depth, index, proof.len())
        || !path_in_field(spent, proof)
        || !is_field_element(salt)
    {
        return false;
    }

    let root = compute_merkle_root_from_path(depth, index, spent, proof);
    let results_commitment = hash_left_right(&commitment.results_root, &commitment.results_salt);
    commitment_digest(
        &results_commitment,
        &commitment.spent_voice_credits_hash,
        &hash_left_right(&root, salt),
    ) == *published
}
