//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Hosted language-model completions
//! - `DraftRelay` - Generated reply drafts for a ticket
//! - `RecordStore` - Saved ticket cache

mod ai_provider;
mod draft_relay;
mod record_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, TokenUsage,
};
pub use draft_relay::{DraftRelay, RelayError};
pub use record_store::{RecordStore, StoreError};
