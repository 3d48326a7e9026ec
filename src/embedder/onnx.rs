/// ONNX Runtime embedder using the `ort` crate.
///
/// Loads the all-mpnet-base-v2 ONNX export, runs inference, applies mean
/// pooling with attention mask, and L2-normalizes the result. This matches
/// the sentence-transformers module stack for the model
/// (Transformer → Pooling(mean) → Normalize).
use std::fs;
use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use serde::Deserialize;
use tracing::info;

use super::tokenizer::MpnetTokenizer;
use super::{Embedder, EmbedderError};

/// The subset of the HuggingFace `config.json` we need.
#[derive(Debug, Deserialize)]
struct ModelConfig {
    hidden_size: usize,
}

/// ONNX-backed embedder implementing the `Embedder` trait.
pub struct OnnxEmbedder {
    session: Mutex<Session>,
    tokenizer: MpnetTokenizer,
    dimensions: usize,
}

impl OnnxEmbedder {
    /// Create a new `OnnxEmbedder` by loading a model from the given directory.
    ///
    /// Expects `model.onnx`, `tokenizer.json` and `config.json` in `model_dir`.
    pub fn new(model_dir: &Path) -> Result<Self, EmbedderError> {
        let model_path = model_dir.join("model.onnx");

        if !model_path.exists() {
            return Err(EmbedderError::ModelLoadFailed(format!(
                "model.onnx not found in {}",
                model_dir.display()
            )));
        }

        info!("Initializing ONNX Runtime...");

        let session = Session::builder()
            .map_err(|e| EmbedderError::ModelLoadFailed(format!("session builder error: {e}")))?
            .with_intra_threads(4)
            .map_err(|e| EmbedderError::ModelLoadFailed(format!("thread config error: {e}")))?
            .with_inter_threads(4)
            .map_err(|e| EmbedderError::ModelLoadFailed(format!("thread config error: {e}")))?
            .commit_from_file(&model_path)
            .map_err(|e| EmbedderError::ModelLoadFailed(format!("model load error: {e}")))?;

        info!("ONNX model loaded successfully");

        let tokenizer = MpnetTokenizer::from_model_dir(model_dir)
            .map_err(|e| EmbedderError::ModelLoadFailed(format!("tokenizer error: {e}")))?;

        info!("Tokenizer loaded (vocab size: {})", tokenizer.vocab_size());

        // The output dimensionality comes from the model itself, not from
        // anything we configure: read hidden_size out of config.json.
        let dimensions = read_hidden_size(model_dir)?;

        info!("Embedding dimensionality: {dimensions}");

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
            dimensions,
        })
    }
}

impl Embedder for OnnxEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbedderError> {
        // Tokenize
        let tokens = self
            .tokenizer
            .tokenize(text)
            .map_err(|e| EmbedderError::TokenizerError(format!("tokenization failed: {e}")))?;

        let seq_len = tokens.input_ids.len();

        // Create input tensors using (shape, data) tuple form.
        // This avoids ndarray version coupling with ort.
        let input_ids_val = Tensor::from_array(([1usize, seq_len], tokens.input_ids.clone()))
            .map_err(|e| EmbedderError::InferenceFailed(format!("input_ids error: {e}")))?;
        let attention_mask_val =
            Tensor::from_array(([1usize, seq_len], tokens.attention_mask.clone())).map_err(
                |e| EmbedderError::InferenceFailed(format!("attention_mask error: {e}")),
            )?;

        // Run inference with named inputs. MPNet takes no token_type_ids,
        // unlike BERT-family exports.
        let mut session = self
            .session
            .lock()
            .map_err(|e| EmbedderError::InferenceFailed(format!("lock poisoned: {e}")))?;
        let outputs = session
            .run(ort::inputs![
                "input_ids" => input_ids_val,
                "attention_mask" => attention_mask_val,
            ])
            .map_err(|e| EmbedderError::InferenceFailed(format!("inference failed: {e}")))?;

        // Extract output: shape [batch_size=1, seq_length, hidden_size]
        let (_shape, hidden_data) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| EmbedderError::InferenceFailed(format!("output extraction: {e}")))?;

        // Mean pooling with attention mask
        let embedding = mean_pooling(
            hidden_data,
            &tokens.attention_mask,
            seq_len,
            self.dimensions,
        );

        // L2 normalize
        Ok(l2_normalize(&embedding))
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbedderError> {
        // Process one by one; no batching machinery
        texts.iter().map(|t| self.embed(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// Read the transformer hidden size from `config.json` in the model directory.
fn read_hidden_size(model_dir: &Path) -> Result<usize, EmbedderError> {
    let config_path = model_dir.join("config.json");
    let raw = fs::read_to_string(&config_path).map_err(|e| {
        EmbedderError::ModelLoadFailed(format!("cannot read {}: {e}", config_path.display()))
    })?;
    let config: ModelConfig = serde_json::from_str(&raw)
        .map_err(|e| EmbedderError::ModelLoadFailed(format!("bad config.json: {e}")))?;
    Ok(config.hidden_size)
}

/// Mean pooling over hidden states weighted by attention mask.
///
/// `hidden_data` is a flat array with shape `[1, seq_len, hidden_size]`.
fn mean_pooling(
    hidden_data: &[f32],
    attention_mask: &[i64],
    seq_len: usize,
    hidden_size: usize,
) -> Vec<f32> {
    let mut result = vec![0.0f32; hidden_size];
    let mut mask_sum: f32 = 0.0;

    for t in 0..seq_len {
        let mask = attention_mask[t] as f32;
        mask_sum += mask;

        for h in 0..hidden_size {
            let idx = t * hidden_size + h;
            result[h] += hidden_data[idx] * mask;
        }
    }

    // Average by number of real tokens
    if mask_sum > 0.0 {
        for v in &mut result {
            *v /= mask_sum;
        }
    }

    result
}

/// L2-normalize a vector, returning the normalized copy.
fn l2_normalize(vec: &[f32]) -> Vec<f32> {
    let norm_sq: f32 = vec.iter().map(|v| v * v).sum();
    if norm_sq == 0.0 {
        return vec.to_vec();
    }

    let inv_norm = 1.0 / norm_sq.sqrt();
    vec.iter().map(|v| v * inv_norm).collect()
}
