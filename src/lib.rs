//! Vitrine is a terminal chat client that turns AI replies into sandboxed
//! code previews.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`preview`] is the core pipeline: it extracts an optional fenced code
//!   block from a reply, picks a per-language render strategy, builds a
//!   standalone preview document, and escapes it for safe embedding in an
//!   isolated surface. It performs no I/O and is total over any input.
//! - [`api`] is the HTTP client for the black-box chat backend (prompt
//!   proxying, turn persistence, history).
//! - [`core`] owns configuration, the speech-capture state machine, the
//!   on-disk preview surface, and per-turn orchestration.
//! - [`cli`] parses arguments and drives the interactive loop and the
//!   one-shot commands.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`cli::run_cli`].

pub mod api;
pub mod cli;
pub mod core;
pub mod logging;
pub mod preview;
pub mod utils;
