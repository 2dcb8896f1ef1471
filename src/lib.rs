//! Spider Solitaire (workspace facade crate).
//!
//! Re-exports the workspace crates as `spider_solitaire::{core,input,store,term,types}` and
//! adds the application glue used by the binary: environment [`config`] and the [`app`]
//! state that ties input, engine and storage together.

pub use spider_solitaire_core as core;
pub use spider_solitaire_input as input;
pub use spider_solitaire_store as store;
pub use spider_solitaire_term as term;
pub use spider_solitaire_types as types;

pub mod app;
pub mod config;

pub use app::App;
pub use config::AppConfig;
