//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Language-model providers (OpenAI, mock)
//! - `relay` - Draft relays (in-process provider, remote HTTP, unconfigured)
//! - `storage` - Saved-record stores (in-memory, JSON file)
//! - `http` - axum REST API

pub mod ai;
pub mod http;
pub mod relay;
pub mod storage;
