//! Document Graph Interface
//!
//! The actual graph traversal lives outside this crate: a `DocumentSource`
//! hands over every document reachable from a root id, already tagged by
//! kind. The engine drains the traversal once per request into a
//! `DocumentBatch` and fails fast when either required kind is absent.

use crate::error::{RewardError, RewardResult};
use crate::types::{MassDocument, MethodologyDocument};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Classification of a traversed document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    Mass,
    Methodology,
    Unrelated,
}

/// A document returned by the graph traversal
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum GraphDocument {
    Mass(MassDocument),
    Methodology(MethodologyDocument),
    /// Present in the graph but irrelevant to reward computation
    Unrelated { id: String },
}

impl GraphDocument {
    pub fn kind(&self) -> DocumentKind {
        match self {
            GraphDocument::Mass(_) => DocumentKind::Mass,
            GraphDocument::Methodology(_) => DocumentKind::Methodology,
            GraphDocument::Unrelated { .. } => DocumentKind::Unrelated,
        }
    }
}

/// External document reader, called once per request
pub trait DocumentSource {
    /// All documents reachable from the given root document id
    fn fetch(&self, root_id: &str) -> RewardResult<Vec<GraphDocument>>;
}

/// Fully drained traversal, ready for computation
#[derive(Clone, Debug)]
pub struct DocumentBatch {
    pub mass_documents: Vec<MassDocument>,
    pub methodology: MethodologyDocument,
}

/// Partition a drained traversal into mass documents and the methodology
///
/// The first methodology definition wins; a traversal carries exactly one in
/// practice. Fails when either required kind is missing.
pub fn partition(documents: Vec<GraphDocument>) -> RewardResult<DocumentBatch> {
    let mut mass_documents = Vec::new();
    let mut methodology = None;

    for document in documents {
        match document {
            GraphDocument::Mass(mass) => mass_documents.push(mass),
            GraphDocument::Methodology(doc) => {
                methodology.get_or_insert(doc);
            }
            GraphDocument::Unrelated { .. } => {}
        }
    }

    if mass_documents.is_empty() {
        return Err(RewardError::MassDocumentsNotFound);
    }
    let methodology = methodology.ok_or(RewardError::MethodologyDocumentNotFound)?;

    Ok(DocumentBatch {
        mass_documents,
        methodology,
    })
}

/// In-memory source backing tests and local tooling
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    graphs: HashMap<String, Vec<GraphDocument>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a document graph under a root id
    pub fn with_graph(mut self, root_id: impl Into<String>, documents: Vec<GraphDocument>) -> Self {
        self.graphs.insert(root_id.into(), documents);
        self
    }
}

impl DocumentSource for InMemorySource {
    fn fetch(&self, root_id: &str) -> RewardResult<Vec<GraphDocument>> {
        Ok(self.graphs.get(root_id).cloned().unwrap_or_default())
    }
}
