/**
 * Diagram State Management
 *
 * This module holds the single shared BPMN diagram. The diagram starts out
 * absent and is replaced wholesale by every accepted save; there is no
 * history and no merge.
 */

use crate::shared::diagram::validate_diagram;
use crate::shared::error::DiagramError;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared diagram storage
///
/// Cloning the store yields another handle to the same diagram. Reads take
/// the read lock. A save validates the candidate first, without any lock,
/// then swaps it in under the write lock; concurrent saves are
/// last-write-wins.
#[derive(Debug, Clone, Default)]
pub struct DiagramStore {
    content: Arc<RwLock<Option<String>>>,
}

impl DiagramStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Current diagram, or `None` before the first accepted save
    pub async fn get(&self) -> Option<String> {
        self.content.read().await.clone()
    }

    /// Byte length of the current diagram, 0 when absent
    pub async fn size(&self) -> usize {
        self.content.read().await.as_ref().map_or(0, String::len)
    }

    /// Validate `candidate` and, if it passes, make it the current diagram
    ///
    /// Returns the byte length of the stored content.
    ///
    /// # Errors
    ///
    /// Returns the first `DiagramError` reported by the validation pipeline.
    /// The stored diagram is left untouched on error.
    pub async fn save(&self, candidate: String) -> Result<usize, DiagramError> {
        if let Err(e) = validate_diagram(&candidate) {
            tracing::warn!("[Diagram] Rejected save ({} bytes): {}", candidate.len(), e);
            return Err(e);
        }

        let size = candidate.len();
        let previous = self.content.write().await.replace(candidate);
        tracing::info!(
            "[Diagram] Saved diagram: {} bytes (previous: {} bytes)",
            size,
            previous.as_ref().map_or(0, String::len)
        );
        Ok(size)
    }
}
