//! Mingle Test Account Fixture
//!
//! Provisions one disposable remote test account per test run against a
//! social graph API, and exposes the read-only helpers test suites assert
//! with. The fixture is deliberately a thin orchestration layer: creation is
//! idempotent, teardown is best-effort, and every remote interaction is a
//! single call-and-wait with no retry or background work.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                   Test Account Fixture                     │
//! ├────────────────────────────────────────────────────────────┤
//! │  AccountManager                    state: absent | present │
//! │    ├── ensure_account(renew)     -> create once, or renew  │
//! │    ├── delete_account()          -> best-effort teardown   │
//! │    ├── account_id/access_token/email/password/login_url    │
//! │    ├── first_name()              -> cached profile fetch   │
//! │    ├── recent_posts()            -> one page of the feed   │
//! │    └── see_post_with_place(id)   -> existential feed scan  │
//! ├────────────────────────────────────────────────────────────┤
//! │  LoginBrowser                                              │
//! │    └── login(account)            -> scripted browser login │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! At most one test account is live per manager instance. Accessors raise
//! [`FixtureError::NoActiveAccount`] while none is, rather than handing back
//! stale or empty data.

pub mod account;
pub mod assertions;
pub mod browser;
pub mod config;
pub mod error;
pub mod manager;

pub use account::TestAccount;
pub use browser::{BrowserConfig, LoginBrowser};
pub use config::{FixtureConfig, TestUserConfig};
pub use error::{FixtureError, Result};
pub use manager::AccountManager;
