use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use embedq::embedder::download;
use embedq::embedder::onnx::OnnxEmbedder;
use embedq::embedder::Embedder;
use embedq::report;

/// Model identifier, fixed in source.
const MODEL_ID: &str = "sentence-transformers/all-mpnet-base-v2";

/// The query to embed, fixed in source.
const QUERY: &str = "What's the vision?";

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Embedding query with {MODEL_ID}");

    // 1. Ensure model files are available locally
    let model_dir = download::default_model_dir();
    download::download_model_files(&model_dir).context("failed to fetch model files")?;

    // 2. Load the embedder
    let embedder = OnnxEmbedder::new(&model_dir).context("failed to load embedder")?;

    // 3. Encode the query
    let embeddings = embedder
        .embed_batch(&[QUERY])
        .context("failed to embed query")?;

    // 4. Print dimensionality and the JSON-encoded vectors
    println!("{}", report::render(&embeddings)?);

    Ok(())
}
