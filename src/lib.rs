//! Ticket Copilot - support-ticket triage for hotel reservation desks.
//!
//! Pasted ticket notes are normalized, mined for itinerary, guest, and hotel
//! fields, scanned for risk patterns, classified, and answered with a
//! policy-safe macro draft. An optional language-model relay can replace
//! the macro with generated prose; the local draft is always the fallback.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
