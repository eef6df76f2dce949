use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes128_core::{expand_key, Aes128};
use aes128_modes::{Aes128Key, Cbc, Counter, Ctr, Ecb};

const MESSAGE_BYTES: usize = 4096;

fn random_bytes<const N: usize>(rng: &mut ChaCha20Rng) -> [u8; N] {
    let mut bytes = [0u8; N];
    rng.fill_bytes(&mut bytes);
    bytes
}

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let key = Aes128Key::from(random_bytes::<16>(&mut rng));
    let cipher = Aes128::new(&key);
    let block = random_bytes::<16>(&mut rng);

    let mut group = c.benchmark_group("block");
    group.bench_function("expand_key", |b| b.iter(|| expand_key(&key)));
    group.bench_function("encrypt_block", |b| b.iter(|| cipher.encrypt_block(&block)));
    group.bench_function("decrypt_block", |b| b.iter(|| cipher.decrypt_block(&block)));
    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let key = Aes128Key::from(random_bytes::<16>(&mut rng));
    let iv = random_bytes::<16>(&mut rng);
    let mut message = vec![0u8; MESSAGE_BYTES];
    rng.fill_bytes(&mut message);

    let ecb = Ecb::new(&key);
    let cbc = Cbc::new(&key, &iv).expect("16-byte iv");
    let mut ctr = Ctr::new(&key, Counter::from_be_slice(&iv));

    let mut group = c.benchmark_group("modes");
    group.throughput(Throughput::Bytes(MESSAGE_BYTES as u64));
    group.bench_function("ecb_encrypt", |b| b.iter(|| ecb.encrypt(&message)));
    group.bench_function("cbc_encrypt", |b| b.iter(|| cbc.encrypt(&message)));
    group.bench_function("cbc_decrypt", |b| b.iter(|| cbc.decrypt(&message)));
    group.bench_function("ctr_apply_keystream", |b| {
        b.iter(|| ctr.apply_keystream(&message))
    });
    group.finish();
}

criterion_group!(benches, bench_block, bench_modes);
criterion_main!(benches);
