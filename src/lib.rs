//! # Coaching Calendar Backend
//!
//! Single-tenant coaching-appointment calendar backend.
//!
//! This crate provides the booking engine behind a coach's day-view calendar:
//! a fixed daily slot grid, one-off and weekly-recurring bookings, conflict
//! checks before a booking is committed, and a day-schedule projection that is
//! recomputed from the full booking collection on every change. The backend
//! exposes a REST API via Axum for the web frontend.
//!
//! ## Features
//!
//! - **Slot Grid**: Fixed ordered sequence of bookable time-of-day slots
//! - **Reconciliation**: Merge the slot grid with the booking collection into
//!   a presentable day schedule
//! - **Conflict Detection**: Duplicate-slot and recurring-series collision
//!   queries gating booking creation
//! - **Client Directory**: Injected read-only roster with substring search
//! - **Repository Pattern**: Store abstraction with an in-memory backend and
//!   full-snapshot change subscriptions
//! - **HTTP API**: RESTful endpoints plus an SSE change feed
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and the public type surface
//! - [`models`]: Domain types (bookings, clients, slot times, date helpers)
//! - [`scheduler`]: The schedule reconciliation engine (pure functions)
//! - [`clients`]: Read-only client directory
//! - [`db`]: Repository trait, in-memory backend, factory, configuration
//! - [`services`]: Booking workflow, day-view projection, integrity report
//! - [`http`]: Axum-based HTTP server and request handlers
//!

pub mod api;

pub mod clients;
pub mod db;
pub mod models;

pub mod scheduler;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
