//! # TTM Rust Backend
//!
//! In-memory weekly school timetable engine.
//!
//! This crate ingests class and room timetables from an Optivum-style school
//! timetable site, keeps them in an in-memory store, and answers "which
//! rooms are free at day D, hour H" queries for a surrounding request layer.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: lessons, grids, timetable entries and hour descriptors
//! - [`config`]: the timetable source address (env var or TOML file)
//! - [`source`]: page-fetcher and page-parser traits — the external boundary
//! - [`ingest`]: the one-shot, strictly sequential ingestion pipeline
//! - [`store`]: the id-keyed in-memory timetable store
//! - [`services`]: availability queries, hour resolution, room synthesis and
//!   the room catalog
//!
//! ## Lifecycle
//!
//! The store is created empty at process start and filled exactly once by
//! the pipeline; afterwards it is only read, apart from the synthesizer's
//! occasional overwrite of a single room entry. There is no persistence:
//! the store lives and dies with the process.

pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod services;
pub mod source;
pub mod store;
