//! Poseidon hash over the BN254 scalar field, bit-compatible with circomlib.
//!
//! The tally pipeline commits to its results with circomlib's Poseidon, so
//! the widths used by the commitment scheme are exposed directly:
//! [`hash_left_right`] (2 inputs), [`hash3`] (3 inputs) and [`hash5`]
//! (5 inputs, one node of the quinary vote-option tree).
//!
//! All inputs must already be field elements (`< p`); callers check this
//! with [`is_field_element`] before hashing untrusted values.

multiversx_sc::imports!();

use crate::poseidon_constants::{
    FIELD_MODULUS, FULL_ROUNDS, MDS_T3, MDS_T4, MDS_T6, PARTIAL_ROUNDS_T3, PARTIAL_ROUNDS_T4,
    PARTIAL_ROUNDS_T6, ROUND_CONSTANTS_T3, ROUND_CONSTANTS_T4, ROUND_CONSTANTS_T6,
};

struct PoseidonParams {
    partial_rounds: usize,
    round_constants: &'static [[u8; 32]],
    mds: &'static [[u8; 32]],
}

const PARAMS_T3: PoseidonParams = PoseidonParams {
    partial_rounds: PARTIAL_ROUNDS_T3,
    round_constants: &ROUND_CONSTANTS_T3,
    mds: &MDS_T3,
};

const PARAMS_T4: PoseidonParams = PoseidonParams {
    partial_rounds: PARTIAL_ROUNDS_T4,
    round_constants: &ROUND_CONSTANTS_T4,
    mds: &MDS_T4,
};

const PARAMS_T6: PoseidonParams = PoseidonParams {
    partial_rounds: PARTIAL_ROUNDS_T6,
    round_constants: &ROUND_CONSTANTS_T6,
    mds: &MDS_T6,
};

pub fn field_modulus<M: ManagedTypeApi>() -> BigUint<M> {
    BigUint::from_bytes_be(&FIELD_MODULUS)
}

pub fn is_field_element<M: ManagedTypeApi>(value: &BigUint<M>) -> bool {
    value < &field_modulus::<M>()
}

/// Poseidon with 2 inputs (state width 3).
pub fn hash_left_right<M: ManagedTypeApi>(left: &BigUint<M>, right: &BigUint<M>) -> BigUint<M> {
    permute([BigUint::zero(), left.clone(), right.clone()], &PARAMS_T3)
}

/// Poseidon with 3 inputs (state width 4).
pub fn hash3<M: ManagedTypeApi>(inputs: [&BigUint<M>; 3]) -> BigUint<M> {
    permute::<M, 4>(absorb(inputs), &PARAMS_T4)
}

/// Poseidon with 5 inputs (state width 6).
pub fn hash5<M: ManagedTypeApi>(inputs: [&BigUint<M>; 5]) -> BigUint<M> {
    permute::<M, 6>(absorb(inputs), &PARAMS_T6)
}

/// Initial state: capacity cell zero, followed by the inputs.
fn absorb<M: ManagedTypeApi, const N: usize, const WIDTH: usize>(
    inputs: [&BigUint<M>; N],
) -> [BigUint<M>; WIDTH] {
    core::array::from_fn(|i| {
        if i == 0 {
            BigUint::zero()
        } else {
            inputs[i - 1].clone()
        }
    })
}

fn permute<M: ManagedTypeApi, const WIDTH: usize>(
    mut state: [BigUint<M>; WIDTH],
    params: &PoseidonParams,
) -> BigUint<M> {
    let modulus = field_modulus::<M>();
    let mds: [[BigUint<M>; WIDTH]; WIDTH] = core::array::from_fn(|row| {
        core::array::from_fn(|col| BigUint::from_bytes_be(&params.mds[row * WIDTH + col]))
    });

    let half_full = FULL_ROUNDS / 2;
    let total_rounds = FULL_ROUNDS + params.partial_rounds;

    for round in 0..total_rounds {
        for (i, cell) in state.iter_mut().enumerate() {
            *cell += BigUint::from_bytes_be(&params.round_constants[round * WIDTH + i]);
            *cell %= &modulus;
        }

        let full_round = round < half_full || round >= half_full + params.partial_rounds;
        if full_round {
            for cell in state.iter_mut() {
                *cell = sbox(cell, &modulus);
            }
        } else {
            state[0] = sbox(&state[0], &modulus);
        }

        state = mix(&state, &mds, &modulus);
    }

    state[0].clone()
}

/// x^5 mod p
fn sbox<M: ManagedTypeApi>(x: &BigUint<M>, modulus: &BigUint<M>) -> BigUint<M> {
    let square = (x * x) % modulus;
    let fourth = (&square * &square) % modulus;
    (&fourth * x) % modulus
}

fn mix<M: ManagedTypeApi, const WIDTH: usize>(
    state: &[BigUint<M>; WIDTH],
    mds: &[[BigUint<M>; WIDTH]; WIDTH],
    modulus: &BigUint<M>,
) -> [BigUint<M>; WIDTH] {
    core::array::from_fn(|row| {
        let mut acc = BigUint::zero();
        for (coeff, cell) in mds[row].iter().zip(state.iter()) {
            acc += coeff * cell;
        }
        acc % modulus
    })
}
