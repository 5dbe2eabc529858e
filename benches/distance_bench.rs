use criterion::{Criterion, black_box, criterion_group, criterion_main};
use phraze::analysis::Phrase;
use phraze::distance::{PhraseDistanceConfig, phrase_distance, word_distance};
use phraze::suggest::{PhraseDictionary, SuggestionRanker};

fn generate_dictionary(count: usize) -> PhraseDictionary {
    let words = [
        "thank", "you", "miss", "good", "morning", "see", "later", "please", "hello", "world",
    ];
    let mut phrases = Vec::with_capacity(count);
    for i in 0..count {
        let len = 2 + i % 3;
        let phrase: Vec<&str> = (0..len)
            .map(|j| words[(i * 7 + j * 3) % words.len()])
            .collect();
        phrases.push(phrase.join(" "));
    }
    PhraseDictionary::from_phrases(phrases)
}

fn bench_word_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_distance");

    group.bench_function("short", |b| {
        b.iter(|| word_distance(black_box("boat"), black_box("float")))
    });
    group.bench_function("long", |b| {
        b.iter(|| word_distance(black_box("unbelievable"), black_box("unbeatable")))
    });

    group.finish();
}

fn bench_phrase_distance(c: &mut Criterion) {
    let config = PhraseDistanceConfig::default();
    let p = Phrase::normalize("thank you very much miss");
    let q = Phrase::normalize("thnak you vary much mist");

    c.bench_function("phrase_distance", |b| {
        b.iter(|| phrase_distance(black_box(&p), black_box(&q), &config))
    });
}

fn bench_rank(c: &mut Criterion) {
    let dictionary = generate_dictionary(1000);
    let ranker = SuggestionRanker::new();

    c.bench_function("rank_1000_candidates", |b| {
        b.iter(|| ranker.rank(black_box("thank you mis"), &dictionary))
    });
}

criterion_group!(
    benches,
    bench_word_distance,
    bench_phrase_distance,
    bench_rank
);
criterion_main!(benches);
