//! Use cases - read-through orchestration over the ports.

mod orchestrator;

pub use orchestrator::{CacheOrchestrator, OrchestratorConfig, ProfileScan};
