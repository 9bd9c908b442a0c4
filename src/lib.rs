//! Ledmap compiles static per-light color maps for addressable keyboard
//! lighting (backlighting and underlighting zones).
//!
//! The authoring loop turns interactive selection/edit operations into a
//! deterministic textual frame program consumable by device firmware:
//!
//! 1. **Decode**: `frames text -> ColorTable` (sparse per-light color table)
//! 2. **Select**: `inventory + LightGroup -> Selection` (concrete light ids)
//! 3. **Merge**: `ColorTable + Selection + Rgb -> ColorTable` (apply an edit)
//! 4. **Encode**: `ColorTable -> frames text` (canonical ascending-id program)
//!
//! The store of record is always the program text, never the decoded table;
//! a [`ColorTable`] exists only for the duration of an edit. Animation
//! records (name, kind, settings, frames) live in an [`AnimationRegistry`]
//! whose persistence belongs to the host.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: [`encode`] emits clauses in strictly
//!   ascending light-id order for a given table, independent of how the
//!   table was built.
//! - **Tolerant decoding**: [`decode`] never fails; non-clause text (headers,
//!   hand-written comments) is skipped, not rejected.
//! - **No IO in the library**: file handling lives in the `ledmap` binary.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod edit;
mod foundation;
mod model;
mod program;
mod registry;
mod select;

pub use edit::{displayed_color, merge};
pub use foundation::error::{LedmapError, LedmapResult};
pub use model::animation::{Animation, AnimationKind, STATIC_MAP_SETTINGS};
pub use model::light::{ColorTable, Light, LightId, Rgb};
pub use program::codec::{PROGRAM_HEADER, decode, encode};
pub use registry::AnimationRegistry;
pub use select::{LightGroup, select_group};
