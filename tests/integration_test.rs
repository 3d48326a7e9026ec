/// End-to-end integration tests for the embedding flow.
///
/// Tests the complete path:
///   Embedder → report rendering → JSON parse-back
use embedq::embedder::mock::MockEmbedder;
use embedq::embedder::Embedder;
use embedq::report;

/// The query the binary embeds.
const QUERY: &str = "What's the vision?";

/// Full flow: embed one query → render → parse the JSON line back.
#[test]
fn test_embed_and_report() {
    // 1. Embed the single-element query sequence
    let embedder = MockEmbedder::default();
    let embeddings = embedder.embed_batch(&[QUERY]).unwrap();

    assert_eq!(embeddings.len(), 1, "one vector per input query");
    assert_eq!(
        embeddings[0].len(),
        embedder.dimensions(),
        "vector length equals the embedder's dimensionality"
    );

    // 2. Render the two-line report
    let out = report::render(&embeddings).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2, "report is exactly two lines");

    // 3. First line is the first vector's length
    let dim: usize = lines[0].parse().unwrap();
    assert_eq!(dim, embeddings[0].len());

    // 4. Second line parses back to the same shape
    let parsed: Vec<Vec<f32>> = serde_json::from_str(lines[1]).unwrap();
    assert_eq!(parsed.len(), 1, "JSON holds exactly one vector");
    assert_eq!(parsed[0].len(), dim, "JSON vector length matches line 1");
}

/// Dimensionality is stable across runs for a fixed model.
#[test]
fn test_dimensions_stable_across_runs() {
    let first = MockEmbedder::default().embed_batch(&[QUERY]).unwrap();
    let second = MockEmbedder::default().embed_batch(&[QUERY]).unwrap();

    assert_eq!(first[0].len(), second[0].len());
    assert_eq!(first, second, "mock embedder is fully deterministic");
}

/// The dormant file-write path stays dormant: nothing lands on disk.
#[test]
fn test_no_embeddings_file_created() {
    let embedder = MockEmbedder::default();
    let embeddings = embedder.embed_batch(&[QUERY]).unwrap();
    let _ = report::render(&embeddings).unwrap();

    assert!(
        !std::path::Path::new("embeddings.txt").exists(),
        "no embeddings.txt should be written"
    );
}
