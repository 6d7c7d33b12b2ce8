use classic_crypto::cipher::{AffineKey, Key};
use classic_crypto::codec::Codec;
use classic_crypto::ring::ModularMatrix;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn bench_hill_flow(c: &mut Criterion) {
    // 1) one-time setup
    let matrix = vec![vec![5, 5], vec![5, 8]];
    let key = AffineKey::try_with(matrix, vec![9, 2], 29).expect("build key");
    let message = Codec::mod29()
        .decode("THE_QUICK_BROWN_FOX_JUMPS_OVER_THE_LAZY_DOG!")
        .expect("decode message");

    c.bench_function("hill_flow", |b| {
        b.iter(|| {
            // 2) encrypt
            let cipher = key.encrypt_blocks(black_box(&message)).expect("encrypt");

            // 3) decrypt
            let decoded = key.decrypt_blocks(&cipher).expect("decrypt");

            black_box(decoded);
        })
    });
}

fn bench_matrix_inverse(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut group = c.benchmark_group("matrix_inverse");

    for n in [2usize, 4, 8] {
        let Key::Affine { matrix, .. } = Key::random_affine(n, 29, &mut rng).expect("random key")
        else {
            unreachable!("random_affine always returns an affine key");
        };
        let matrix = ModularMatrix::try_with(matrix, 29).expect("build matrix");

        group.bench_with_input(BenchmarkId::from_parameter(n), &matrix, |b, m| {
            b.iter(|| black_box(m.inverse().expect("invert")))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hill_flow, bench_matrix_inverse);
criterion_main!(benches);
