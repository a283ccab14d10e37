//! Bizlens - LLM-backed business analysis API
//!
//! Accepts company and product descriptions over HTTP, synthesizes
//! natural-language prompts, forwards them to a hosted chat-completion API,
//! and reshapes the model's text output into validated JSON analysis
//! documents (SWOT analysis and product-messaging frameworks).

pub mod analysis;
pub mod cli;
pub mod completion;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod telemetry;
