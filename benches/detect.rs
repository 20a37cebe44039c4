use criterion::{black_box, criterion_group, criterion_main, Criterion};
use docspell::checker::dictionary::Dictionary;
use docspell::checker::tokenizer::words;
use docspell::tree::{Comment, DocTree};
use docspell::{FstSpeller, Report, Session};

const PROSE: &str = "Adds file names, class names, module names, method names, etc. from the \
    documentation tree to the session spelling dictionary. This line contains one acidental \
    typo and a secnd one for good mesure.";

fn speller() -> FstSpeller {
    let vocabulary = PROSE
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| !matches!(*w, "acidental" | "secnd" | "mesure"))
        .chain(["accidental", "second", "measure"]);
    FstSpeller::with_dictionary(Dictionary::from_words(vocabulary).unwrap())
}

fn tree() -> DocTree {
    let methods: Vec<String> = (0..200)
        .map(|i| {
            format!(
                r#"{{"name": "method_{i}", "comment": "{PROSE}", "location": "lib/file_{i}.rb"}}"#
            )
        })
        .collect();
    DocTree::from_json(&format!(
        r#"{{"modules": [{{"name": "Bench", "full_name": "Bench", "methods": [{}]}}]}}"#,
        methods.join(",")
    ))
    .unwrap()
}

fn bench_extract(c: &mut Criterion) {
    c.bench_function("extract words", |b| {
        b.iter(|| words(black_box(PROSE)).count())
    });
}

fn bench_detect(c: &mut Criterion) {
    let tree = tree();
    let session = Session::prime(speller(), &tree, &[]);
    let comment = Comment::new(PROSE);

    c.bench_function("find misspelled", |b| {
        b.iter(|| session.find_misspelled(black_box(&comment)))
    });
    c.bench_function("full report", |b| {
        b.iter(|| Report::generate(&session, black_box(&tree), 5))
    });
}

criterion_group!(benches, bench_extract, bench_detect);
criterion_main!(benches);
