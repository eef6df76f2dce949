//! The four AES round steps and their inverses, acting on a column-major state.

use crate::block::{xor_in_place, Block};
use crate::sbox::{inv_sbox, sbox};

/// Reduction polynomial x^8 + x^4 + x^3 + x + 1 without the x^8 term.
const REDUCTION: u8 = 0x1b;

const MIX: [[u8; 4]; 4] = [
    [0x02, 0x03, 0x01, 0x01],
    [0x01, 0x02, 0x03, 0x01],
    [0x01, 0x01, 0x02, 0x03],
    [0x03, 0x01, 0x01, 0x02],
];

const INV_MIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// SubBytes.
#[inline]
pub(crate) fn sub_bytes(state: &mut Block) {
    state.iter_mut().for_each(|byte| *byte = sbox(*byte));
}

/// InvSubBytes.
#[inline]
pub(crate) fn inv_sub_bytes(state: &mut Block) {
    state.iter_mut().for_each(|byte| *byte = inv_sbox(*byte));
}

/// Rotates row `r` of the state left by `r` columns.
#[inline]
pub(crate) fn shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[4 * col + row] = src[4 * ((col + row) % 4) + row];
        }
    }
}

/// Rotates row `r` of the state right by `r` columns.
#[inline]
pub(crate) fn inv_shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[4 * ((col + row) % 4) + row] = src[4 * col + row];
        }
    }
}

fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplication in GF(2^8).
fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

fn multiply_columns(state: &mut Block, matrix: &[[u8; 4]; 4]) {
    for column in state.chunks_exact_mut(4) {
        let input = [column[0], column[1], column[2], column[3]];
        for (out, coefficients) in column.iter_mut().zip(matrix.iter()) {
            *out = coefficients
                .iter()
                .zip(input.iter())
                .fold(0, |acc, (&c, &x)| acc ^ gmul(c, x));
        }
    }
}

/// MixColumns.
#[inline]
pub(crate) fn mix_columns(state: &mut Block) {
    multiply_columns(state, &MIX);
}

/// InvMixColumns.
#[inline]
pub(crate) fn inv_mix_columns(state: &mut Block) {
    multiply_columns(state, &INV_MIX);
}

/// AddRoundKey; its own inverse.
#[inline]
pub(crate) fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    fn random_state() -> Block {
        let mut state = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut state);
        state
    }

    #[test]
    fn gmul_matches_fips_example() {
        // FIPS-197 section 4.2: {57} * {13} = {fe}.
        assert_eq!(gmul(0x57, 0x13), 0xfe);
        assert_eq!(xtime(0x57), 0xae);
        assert_eq!(xtime(0x8e), 0x07);
    }

    #[test]
    fn shift_rows_moves_rows_left() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        shift_rows(&mut state);
        assert_eq!(
            state,
            [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11]
        );
    }

    #[test]
    fn mix_columns_known_column() {
        // Column db 13 53 45 -> 8e 4d a1 bc.
        let mut state = [0u8; 16];
        state[..4].copy_from_slice(&[0xdb, 0x13, 0x53, 0x45]);
        mix_columns(&mut state);
        assert_eq!(&state[..4], &[0x8e, 0x4d, 0xa1, 0xbc]);
    }

    #[test]
    fn inverse_steps_undo_forward_steps() {
        for _ in 0..64 {
            let original = random_state();

            let mut state = original;
            sub_bytes(&mut state);
            inv_sub_bytes(&mut state);
            assert_eq!(state, original);

            shift_rows(&mut state);
            inv_shift_rows(&mut state);
            assert_eq!(state, original);

            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            assert_eq!(state, original);

            let key = random_state();
            add_round_key(&mut state, &key);
            add_round_key(&mut state, &key);
            assert_eq!(state, original);
        }
    }
}
