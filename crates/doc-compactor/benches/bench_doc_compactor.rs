use criterion::{black_box, criterion_group, criterion_main, Criterion};
use doc_compactor::{CodecOptions, DocumentCodec};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

const WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "framework", "backend",
    "document", "compression", "storage", "request", "module", "service",
];

fn sentence(rng: &mut StdRng) -> String {
    let len = rng.gen_range(4..16);
    (0..len)
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn block(rng: &mut StdRng, i: usize) -> Value {
    match rng.gen_range(0..6) {
        0 => json!({
            "type": "heading",
            "attrs": { "level": rng.gen_range(1..4) },
            "content": [{ "type": "text", "text": sentence(rng) }]
        }),
        1 => json!({
            "type": "image",
            "attrs": {
                "src": format!("https://res.cloudinary.com/bench/image/upload/v{i}/posts/img{i}.jpg"),
                "alt": sentence(rng)
            }
        }),
        2 => json!({
            "type": "bulletList",
            "content": (0..3).map(|_| json!({
                "type": "listItem",
                "content": [{ "type": "paragraph", "content": [{ "type": "text", "text": sentence(rng) }] }]
            })).collect::<Vec<_>>()
        }),
        3 => json!({
            "type": "codeBlock",
            "attrs": { "language": "rust" },
            "content": [{ "type": "text", "text": "fn main() {\n    println!(\"hi\");\n}" }]
        }),
        _ => json!({
            "type": "paragraph",
            "content": [
                { "type": "text", "text": sentence(rng) },
                { "type": "text", "text": sentence(rng), "marks": [{ "type": "bold" }] },
                { "type": "text", "text": "link", "marks": [
                    { "type": "link", "attrs": { "href": "https://example.com", "target": "_blank" } }
                ] }
            ]
        }),
    }
}

fn generate_document(size_kb: usize) -> String {
    let mut rng = StdRng::seed_from_u64(42);
    let mut content = Vec::new();
    let mut total = 0;
    while total < size_kb * 1024 {
        let node = block(&mut rng, content.len());
        total += node.to_string().len();
        content.push(node);
    }
    json!({ "type": "doc", "content": content }).to_string()
}

fn bench_compress(c: &mut Criterion) {
    let codec = DocumentCodec::default();
    for size in [1, 10, 100] {
        let doc = generate_document(size);
        c.bench_function(&format!("compress_{size}kb"), |b| {
            b.iter(|| black_box(codec.compress(black_box(doc.as_str()))))
        });
    }
}

fn bench_decompress(c: &mut Criterion) {
    let codec = DocumentCodec::new(CodecOptions::with_provider("bench"));
    for size in [1, 10, 100] {
        let compact = codec.compress(generate_document(size).as_str()).into_value();
        c.bench_function(&format!("decompress_{size}kb"), |b| {
            b.iter(|| black_box(codec.decompress(black_box(&compact))))
        });
    }
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
