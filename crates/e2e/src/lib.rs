//! Mingle E2E Suite Harness
//!
//! Runs declarative YAML scenarios against the test account fixture:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Suite Harness (Rust)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  SuiteRunner                                                │
//! │    ├── run_all(scenarios) -> SuiteResult                    │
//! │    ├── run_scenario(s)    -> ScenarioResult                 │
//! │    └── teardown()         -> deletes the account, once      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Scenario (YAML)                                            │
//! │    ├── name, description, tags                              │
//! │    └── steps: [Step]                                        │
//! │          ├── ensure_account { renew? }                      │
//! │          ├── login                                          │
//! │          ├── call { method, path, params }                  │
//! │          ├── expect_first_name { expected? }                │
//! │          └── expect_post_with_place { place_id }            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The runner owns one `AccountManager` for the whole suite and guarantees
//! its teardown hook fires exactly once at end-of-suite.

pub mod error;
pub mod runner;
pub mod scenario;

pub use error::{HarnessError, HarnessResult};
pub use runner::{ScenarioResult, SuiteResult, SuiteRunner};
pub use scenario::{Scenario, ScenarioStep};
