//! Umbrella crate that re-exports the `horde-*` building blocks.
//!
//! Enable only the layers you need: `core` for the world contracts and
//! steering math, `bt` for trees, `flock` for swarms, `system` for the full
//! per-tick orchestrator.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use horde_core as core;

#[cfg(feature = "tools")]
#[cfg_attr(docsrs, doc(cfg(feature = "tools")))]
pub use horde_tools as tools;

#[cfg(feature = "bt")]
#[cfg_attr(docsrs, doc(cfg(feature = "bt")))]
pub use horde_bt as bt;

#[cfg(feature = "flock")]
#[cfg_attr(docsrs, doc(cfg(feature = "flock")))]
pub use horde_flock as flock;

#[cfg(feature = "system")]
#[cfg_attr(docsrs, doc(cfg(feature = "system")))]
pub use horde_system as system;
