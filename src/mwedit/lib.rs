//! # mwedit Architecture
//!
//! mwedit is a **UI-agnostic Mediawiki editing library** with a CLI client.
//! The library knows nothing about terminals; it talks to two abstract
//! boundaries and everything else is glue between them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prints messages, owns exit codes       │
//! │  - The ONLY place that knows about stdout/stderr            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - EditorApi: owns host + session manager + config          │
//! │  - Dispatches to commands, returns Result<CmdResult>        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - fetch, save, diff, browse                                │
//! │  - No terminal I/O; buffers and prompts go through traits   │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                     │
//!                    ▼                     ▼
//! ┌──────────────────────────┐ ┌──────────────────────────────┐
//! │  Host Boundary (host/)   │ │  Wiki Boundary (wiki/)       │
//! │  EditorHost trait        │ │  Connector/WikiClient traits │
//! │  TermHost / MemHost      │ │  HttpSite / MockSite         │
//! └──────────────────────────┘ └──────────────────────────────┘
//! ```
//!
//! ## The session
//!
//! One authenticated wiki connection per process, owned by
//! [`session::SessionManager`] and built lazily on first need. Connection
//! parameters resolve through host variables, `~/.write.conf`, and
//! interactive prompts, in that order ([`config`]); prompt answers are
//! cached so nothing is asked twice. A failed login caches nothing.
//!
//! ## Module Overview
//!
//! - [`api`]: the API facade, entry point for all operations
//! - [`commands`]: the four operations
//! - [`session`]: lazy, memoized authenticated connection
//! - [`config`]: `~/.write.conf` access and the three-tier resolver
//! - [`host`]: editor-host boundary, terminal and in-memory adapters
//! - [`wiki`]: wiki boundary, HTTP and mock clients
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod host;
pub mod session;
pub mod wiki;
