// Data types for Docs module

/// Successful outcome of a topic lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentLookup {
    /// No topic given: the documents present in the docs directory
    Listing {
        available_docs: Vec<String>,
        usage: String,
    },
    /// A resolved document
    Document { topic: String, content: String },
}
