use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lcs_align::LcsEngine;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = sys.process(get_current_pid().unwrap()) {
        p.memory() // KiB on supported platforms
    } else {
        0
    }
}

fn bench_lcs_align(c: &mut Criterion) {
    let mut group = c.benchmark_group("lcs_full_table");
    // full O(m*n) tables: a 4k x 4k comparison already holds ~16M cells
    for &len in &[1_000usize, 2_000, 4_000] {
        group.bench_function(format!("align_len_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    let s = random_dna(&mut rng, len);
                    let t = random_dna(&mut rng, len);
                    (s, t)
                },
                |(s, t)| {
                    let before = rss_kib();
                    let alignment = LcsEngine::new(&s, &t).run().unwrap();
                    let after = rss_kib();
                    criterion::black_box(alignment.lcs_len());
                    // record memory delta to stderr to avoid criterion noise
                    eprintln!(
                        "RSS KiB delta (align {len}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lcs_align);
criterion_main!(benches);
