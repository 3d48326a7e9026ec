/// Stdout report for embedding results.
///
/// The output contract is two lines: the dimensionality of the first
/// vector, then the full list of vectors as a JSON array of arrays.
use anyhow::Result;

/// Render the two-line report for a list of embedding vectors.
///
/// Fails on an empty list: the query sequence is non-empty, so the result
/// list must be too.
pub fn render(embeddings: &[Vec<f32>]) -> Result<String> {
    let first = embeddings
        .first()
        .ok_or_else(|| anyhow::anyhow!("no embeddings to report"))?;

    let json = serde_json::to_string(embeddings)?;

    Ok(format!("{}\n{}", first.len(), json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_single_vector() {
        let out = render(&[vec![0.1, 0.2, 0.3]]).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("3"));

        let parsed: Vec<Vec<f32>> = serde_json::from_str(lines.next().unwrap()).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].len(), 3);
        assert!(lines.next().is_none(), "exactly two lines");
    }

    #[test]
    fn test_render_dim_matches_first_vector() {
        let embeddings = vec![vec![0.0f32; 768]];
        let out = render(&embeddings).unwrap();
        assert_eq!(out.lines().next(), Some("768"));
    }

    #[test]
    fn test_render_empty_is_error() {
        assert!(render(&[]).is_err());
    }
}
