//! Tooling primitives for the horde decision core.
//!
//! Engine-agnostic and dependency-light: the system records small trace events
//! while it ticks, and debug tooling renders them later.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{tags, NullTraceSink, TraceEvent, TraceLog, TraceSink, VecTraceSink};
