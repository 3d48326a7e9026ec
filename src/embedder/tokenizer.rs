/// Tokenizer wrapper around the HuggingFace `tokenizers` crate.
///
/// Produces input IDs and attention masks for the ONNX embedder.
use std::path::Path;

use anyhow::Result;
use tokenizers::Tokenizer;

/// Maximum sequence length for all-mpnet-base-v2.
///
/// The sentence-transformers config caps this model at 384 tokens even
/// though the underlying transformer accepts 512.
const MAX_LENGTH: usize = 384;

/// Wrapper around the HuggingFace tokenizer for MPNet-style models.
pub struct MpnetTokenizer {
    inner: Tokenizer,
    max_length: usize,
}

/// Output of a tokenization operation.
#[derive(Debug, Clone)]
pub struct TokenizerOutput {
    /// Token IDs (input_ids for the model).
    pub input_ids: Vec<i64>,
    /// Attention mask (1 for real tokens, 0 for padding).
    pub attention_mask: Vec<i64>,
}

impl MpnetTokenizer {
    /// Load a tokenizer from a `tokenizer.json` file in the model directory.
    pub fn from_model_dir(model_dir: &Path) -> Result<Self> {
        let tokenizer_path = model_dir.join("tokenizer.json");

        anyhow::ensure!(
            tokenizer_path.exists(),
            "tokenizer.json not found in {}",
            model_dir.display()
        );

        let mut inner = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("failed to load tokenizer: {e}"))?;

        let _ = inner.with_truncation(Some(tokenizers::TruncationParams {
            max_length: MAX_LENGTH,
            ..Default::default()
        }));

        inner.with_padding(Some(tokenizers::PaddingParams {
            ..Default::default()
        }));

        Ok(Self {
            inner,
            max_length: MAX_LENGTH,
        })
    }

    /// Tokenize a single text, returning input IDs and attention mask.
    pub fn tokenize(&self, text: &str) -> Result<TokenizerOutput> {
        let encoding = self
            .inner
            .encode(text, true)
            .map_err(|e| anyhow::anyhow!("failed to encode text: {e}"))?;

        let input_ids: Vec<i64> = encoding.get_ids().iter().map(|&id| id as i64).collect();
        let attention_mask: Vec<i64> = encoding
            .get_attention_mask()
            .iter()
            .map(|&m| m as i64)
            .collect();

        Ok(TokenizerOutput {
            input_ids,
            attention_mask,
        })
    }

    /// Get the vocabulary size.
    #[must_use]
    pub fn vocab_size(&self) -> usize {
        self.inner.get_vocab_size(false)
    }

    /// Get the configured maximum sequence length.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// This test requires the actual tokenizer.json file.
    /// Run with: cargo test tokenizer -- --ignored
    #[test]
    #[ignore]
    fn test_tokenize_with_real_model() {
        let model_dir = Path::new("models/all-mpnet-base-v2");
        if !model_dir.join("tokenizer.json").exists() {
            eprintln!("Skipping: model files not downloaded");
            return;
        }

        let tokenizer = MpnetTokenizer::from_model_dir(model_dir).unwrap();
        let output = tokenizer.tokenize("What's the vision?").unwrap();

        assert!(!output.input_ids.is_empty());
        assert_eq!(output.input_ids.len(), output.attention_mask.len());
        // Should have <s> and </s> tokens around the content
        assert!(output.input_ids.len() >= 3);
    }

    #[test]
    fn test_tokenizer_missing_file() {
        let result = MpnetTokenizer::from_model_dir(Path::new("/nonexistent/path"));
        assert!(result.is_err());
    }
}
