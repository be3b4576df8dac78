//! The anti-diagonal parallel fill must be bit-identical to the sequential
//! build, tie-break included.

#![cfg(feature = "parallel")]

use lcs_align::tables::{build_tables, build_tables_parallel};
use lcs_align::LcsEngine;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

#[test]
fn tables_identical_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let m = rng.gen_range(0..120);
        let n = rng.gen_range(0..120);
        let a = random_dna(&mut rng, m);
        let b = random_dna(&mut rng, n);
        let sequential = build_tables(&a, &b);
        let parallel = build_tables_parallel(&a, &b);
        assert_eq!(sequential, parallel, "tables diverge for {m}x{n}");
    }
}

#[test]
fn alignments_identical_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..10 {
        let m = rng.gen_range(0..200);
        let n = rng.gen_range(0..200);
        let a = random_dna(&mut rng, m);
        let b = random_dna(&mut rng, n);
        let engine = LcsEngine::new(&a, &b);
        assert_eq!(engine.run().unwrap(), engine.run_parallel().unwrap());
    }
}

#[test]
fn degenerate_shapes() {
    let empty: &[u8] = b"";
    assert_eq!(build_tables(empty, empty), build_tables_parallel(empty, empty));
    assert_eq!(build_tables(b"A", empty), build_tables_parallel(b"A", empty));
    assert_eq!(
        build_tables(b"ACGT", b"G"),
        build_tables_parallel(b"ACGT", b"G")
    );
}
