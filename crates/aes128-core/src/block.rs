//! Cipher state helpers.

/// Size of one AES block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// One 16-byte AES block, also used as the round state.
///
/// Byte `4 * c + r` holds row `r` of column `c` (column-major, as in FIPS-197).
pub type Block = [u8; BLOCK_SIZE];

/// XORs `rhs` into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}
