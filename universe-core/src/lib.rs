//! Core engines for two decorative browser-style visualizations: an ambient
//! field of drifting connected points and a "universe" of orbiting concept
//! nodes.
//!
//! Main components:
//! - [`field`] — drifting point field with mouse attraction and proximity links.
//! - [`catalog`] — concept records and catalog helpers.
//! - [`node`] — per-concept animation state.
//! - [`layout`] — category-clustered initial placement.
//! - [`motion`] — per-frame orbit and float updates.
//! - [`graph`] — relation edges derived from each concept's related list.
//! - [`starfield`] — decorative drifting background particles.
//! - [`universe`] — the concept universe engine (selection, tour, quiz).
//! - [`config`] — tunable parameters for both engines.
//! - [`types`] — shared type aliases.
//!
//! Both engines are advanced by an explicit `tick()` called by a host
//! scheduler (one tick per display frame); neither talks to any UI or
//! scheduling API directly.

pub mod catalog;
pub mod config;
pub mod field;
pub mod graph;
pub mod layout;
pub mod motion;
pub mod node;
pub mod starfield;
pub mod types;
pub mod universe;
