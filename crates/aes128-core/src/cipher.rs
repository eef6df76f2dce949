//! AES-128 key schedule and block encryption/decryption.

use crate::block::Block;
use crate::key::{Aes128Key, RoundKeys, ROUNDS};
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::sbox::sbox;

/// Round constants: successive powers of x in GF(2^8).
const RCON: [u8; ROUNDS] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Words in the expanded schedule.
const SCHEDULE_WORDS: usize = 4 * (ROUNDS + 1);

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut w = [0u32; SCHEDULE_WORDS];
    for (word, chunk) in w.iter_mut().zip(key.as_bytes().chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in 4..SCHEDULE_WORDS {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[i / 4 - 1]) << 24);
        }
        w[i] = w[i - 4] ^ temp;
    }

    let mut round_keys = [[0u8; 16]; ROUNDS + 1];
    for (round_key, words) in round_keys.iter_mut().zip(w.chunks_exact(4)) {
        for (dst, word) in round_key.chunks_exact_mut(4).zip(words) {
            dst.copy_from_slice(&word.to_be_bytes());
        }
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));
    for round in 1..ROUNDS {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }
    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(ROUNDS));

    state
}

/// Decrypts a single 16-byte block with pre-expanded round keys.
pub fn decrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(ROUNDS));
    for round in (1..ROUNDS).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, round_keys.get(round));
        inv_mix_columns(&mut state);
    }
    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, round_keys.get(0));

    state
}

/// Block cipher engine: a key schedule expanded once and reused for every block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Expands `key` and returns a ready engine.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Expanded schedule backing this engine.
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// Encrypts one block.
    #[inline]
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }

    /// Decrypts one block.
    #[inline]
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block(block, &self.round_keys)
    }
}
