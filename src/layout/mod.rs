//! Adaptive layout engine.
//!
//! [`geometry`] holds the primitive types (sizes, offsets, constraints,
//! insets); [`foundation`] arranges the five application slots within a
//! viewport and computes safe padding for the main content.

pub mod foundation;
pub mod geometry;

pub use foundation::{
    FoundationLayout, FoundationLayoutResult, Measurable, SlotKind, SlotPlacement, Slots,
    CONTENT_HORIZONTAL_GAP, CONTENT_VERTICAL_GAP, EDGE_FADE_ALPHA,
};
pub use geometry::{
    Constraints, EdgeInsets, LayoutDirection, Offset, Rect, Size, WindowInsets,
};
