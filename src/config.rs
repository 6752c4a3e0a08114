//! Configuration for building an index.

use std::fmt;
use std::sync::Arc;

use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::standard::StandardTokenizer;

/// Options for [`Index::with_options`](crate::index::Index::with_options).
#[derive(Clone)]
pub struct IndexOptions {
    /// Tokenizer used for items and queries.
    /// If None, a fresh [`StandardTokenizer`] is used.
    pub tokenizer: Option<Arc<dyn Tokenizer>>,

    /// Sort the posting lists of large batches in parallel.
    pub parallel_build: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            tokenizer: None,
            parallel_build: true,
        }
    }
}

impl IndexOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given tokenizer.
    pub fn with_tokenizer<K: Tokenizer + 'static>(mut self, tokenizer: K) -> Self {
        self.tokenizer = Some(Arc::new(tokenizer));
        self
    }

    /// Use a tokenizer that is already shared with other indexes.
    pub fn with_shared_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// Enable or disable parallel posting list sorting.
    pub fn with_parallel_build(mut self, parallel_build: bool) -> Self {
        self.parallel_build = parallel_build;
        self
    }

    /// The configured tokenizer, or the default one.
    pub(crate) fn resolve_tokenizer(&self) -> Arc<dyn Tokenizer> {
        match &self.tokenizer {
            Some(tokenizer) => Arc::clone(tokenizer),
            None => Arc::new(StandardTokenizer::new()),
        }
    }
}

impl fmt::Debug for IndexOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexOptions")
            .field(
                "tokenizer",
                &self.tokenizer.as_ref().map(|tokenizer| tokenizer.name()),
            )
            .field("parallel_build", &self.parallel_build)
            .finish()
    }
}
