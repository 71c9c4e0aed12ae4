//! Draft relay adapters.
//!
//! - `ProviderDraftRelay` - drafts in-process through an `AIProvider`
//! - `HttpDraftRelay` - forwards to a remote `/api/draft` endpoint
//! - `UnconfiguredRelay` - always unavailable; the local macro is used

mod http_relay;
mod provider_relay;
mod unconfigured;

pub use http_relay::{HttpDraftRelay, DRAFT_PATH};
pub use provider_relay::{ProviderDraftRelay, DRAFT_POLICY};
pub use unconfigured::UnconfiguredRelay;
