//! Terminal front end for running scripted skirmishes.
//!
//! # Architecture
//!
//! ```text
//! main
//!   ├─→ SkirmishConfig (.env + environment)
//!   ├─→ battle-content (scenario RON, battle tuning TOML)
//!   └─→ session::play
//!         ├─→ engine task (spawn_blocking): Battle::run_round ─┐
//!         │                                                    │ mpsc<RoundLog>
//!         └─→ Presenter: paced stdout lines ←─────────────────┘
//! ```
//!
//! The engine never waits on the presenter beyond channel back-pressure, so
//! pacing changes how fast lines appear and nothing else.

pub mod config;
pub mod logging;
pub mod presenter;
pub mod session;

pub use config::SkirmishConfig;
pub use presenter::Presenter;
