//! Core systems for Horizon Rating.
//!
//! This crate provides the foundational pieces shared by the rendering and
//! widget crates:
//!
//! - **Signal/Slot System**: Type-safe change notification for widgets
//! - **Logging**: `tracing` targets and span helpers
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_rating_core::Signal;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicI32, Ordering};
//!
//! let value_changed = Signal::<i32>::new();
//! let last = Arc::new(AtomicI32::new(0));
//!
//! let last_clone = last.clone();
//! value_changed.connect(move |&value| last_clone.store(value, Ordering::SeqCst));
//!
//! value_changed.emit(3);
//! assert_eq!(last.load(Ordering::SeqCst), 3);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
