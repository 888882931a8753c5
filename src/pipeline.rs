use ndarray::Array2;
use tracing::debug;

use crate::embedder::embed_all;
use crate::tokenizer::tokenize;
use crate::vocab::token_to_id;

/// The complete output of one pipeline run. Rows of `matrix` align with
/// `tokens` and `ids` by position. Nothing here survives past the next run.
pub struct PipelineRun {
    pub tokens: Vec<String>,
    pub ids: Vec<u32>,
    pub matrix: Array2<f64>,
}

impl PipelineRun {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Run the full tokenize -> hash -> embed pipeline over the current text.
/// Pure and synchronous; identical text always produces an identical run.
pub fn run_pipeline(text: &str, dim: usize) -> PipelineRun {
    let tokens = tokenize(text);
    let ids: Vec<u32> = tokens.iter().map(|t| token_to_id(t)).collect();
    let matrix = embed_all(&ids, dim);
    debug!(tokens = tokens.len(), dim, "pipeline run complete");
    PipelineRun { tokens, ids, matrix }
}

#[cfg(test)]
mod tests {
    use super::run_pipeline;

    #[test]
    fn rows_align_with_tokens() {
        let run = run_pipeline("one two three four", 8);
        assert_eq!(run.tokens.len(), 4);
        assert_eq!(run.ids.len(), 4);
        assert_eq!(run.matrix.dim(), (4, 8));
    }

    #[test]
    fn empty_text_gives_empty_run() {
        let run = run_pipeline("   ", 8);
        assert!(run.is_empty());
        assert_eq!(run.matrix.nrows(), 0);
    }

    #[test]
    fn duplicate_tokens_get_identical_rows() {
        let run = run_pipeline("echo echo", 8);
        assert_eq!(run.ids[0], run.ids[1]);
        assert_eq!(run.matrix.row(0), run.matrix.row(1));
    }
}
