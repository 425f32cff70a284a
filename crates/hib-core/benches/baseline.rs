use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use hib_core::{Corpus, Dnic, IndicatorKind, Paper, Quartile, ThresholdSet, evaluate_corpus};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SUBJECTS: [&str; 8] = [
    "physics", "chemistry", "biology", "medicine", "math", "cs", "economics", "sociology",
];
const CENSUS_YEAR: i32 = 2020;

/// Synthetic corpus: every history runs to the same census year and spans
/// at least the default average-indicator windows.
fn build_corpus(papers: usize) -> Corpus {
    let mut rng = SmallRng::seed_from_u64(42);
    let papers = (0..papers)
        .map(|i| {
            let year = rng.random_range(1980..2010);
            let n_subjects = rng.random_range(1..=3);
            let subjects: Vec<&str> = (0..n_subjects)
                .map(|_| SUBJECTS[rng.random_range(0..SUBJECTS.len())])
                .collect();
            let len = (CENSUS_YEAR - year + 1) as usize;
            let citations: Vec<u32> = (0..len)
                .map(|_| {
                    if rng.random_bool(0.6) {
                        0
                    } else {
                        rng.random_range(1..30)
                    }
                })
                .collect();
            Paper::new(i.to_string(), year, subjects, citations)
        })
        .collect();
    Corpus::new(papers)
}

fn bench_ekj(c: &mut Criterion) {
    let corpus = build_corpus(5_000);
    let years = corpus.observed_years();
    c.bench_function("ekj_observed_years_5000", |b| {
        b.iter(|| Dnic::get_ekj_for_years(black_box(&corpus.papers), years.iter().copied()))
    });
}

fn bench_c_dic(c: &mut Criterion) {
    let corpus = build_corpus(5_000);
    let c50 = Quartile::get_c50_list(&corpus.papers);
    c.bench_function("c_dic_5000", |b| {
        b.iter(|| Quartile::get_c_dic(black_box(&c50), black_box(&corpus.papers), 0.75))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let corpus = build_corpus(1_000);
    let th = ThresholdSet::default();
    c.bench_function("evaluate_all_1000", |b| {
        b.iter(|| evaluate_corpus(black_box(&corpus), &th, &IndicatorKind::ALL))
    });
}

criterion_group!(benches, bench_ekj, bench_c_dic, bench_evaluate);
criterion_main!(benches);
