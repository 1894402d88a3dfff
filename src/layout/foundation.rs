//! The five-slot foundation layout.
//!
//! Arranges a top bar, bottom bar, side rail, snackbar and main content
//! within a viewport. The engine is a pure function: it measures each
//! present slot under loose constraints in a fixed order, computes the
//! safe padding the main content must apply, and places everything
//! back-to-front so later slots visually occlude earlier ones.
//!
//! The single adaptive decision lives in [`FoundationLayout::layout`]:
//! compact-width windows get a bottom bar, wider windows a side rail.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::geometry::{Constraints, EdgeInsets, LayoutDirection, Offset, Rect, Size, WindowInsets};
use crate::models::WindowState;

/// Vertical breathing room added above/below the main content, in pixels.
pub const CONTENT_VERTICAL_GAP: u32 = 24;

/// Horizontal breathing room added beside the main content, in pixels.
pub const CONTENT_HORIZONTAL_GAP: u32 = 16;

/// Peak alpha of the decorative edge fade over the bars.
pub const EDGE_FADE_ALPHA: f32 = 0.9;

/// Something the layout engine can size under loose constraints.
///
/// Slots have no intrinsic size of their own; the engine hands each one
/// the constraints it may occupy and the slot reports the size it takes.
pub trait Measurable {
    /// Measures the slot under the given constraints.
    fn measure(&self, constraints: Constraints) -> Size;
}

/// A fixed-size slot, clamped into whatever constraints it is given.
impl Measurable for Size {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(*self)
    }
}

/// The five regions the layout engine positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotKind {
    /// The main content area, drawn first (bottom-most).
    MainContent,
    /// The top bar.
    TopBar,
    /// The snackbar host.
    Snackbar,
    /// The bottom bar (compact widths only).
    BottomBar,
    /// The side rail (medium and large widths), drawn last (top-most).
    SideRail,
}

/// The optional slot contents of one layout pass.
///
/// Absent slots contribute zero size and zero offset influence.
#[derive(Default)]
pub struct Slots<'a> {
    /// Top bar slot.
    pub top_bar: Option<&'a dyn Measurable>,
    /// Bottom bar slot.
    pub bottom_bar: Option<&'a dyn Measurable>,
    /// Side rail slot.
    pub side_rail: Option<&'a dyn Measurable>,
    /// Snackbar slot.
    pub snackbar: Option<&'a dyn Measurable>,
    /// Main content slot.
    pub main_content: Option<&'a dyn Measurable>,
}

impl<'a> Slots<'a> {
    /// Creates an empty slot set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the top bar slot.
    #[must_use]
    pub fn with_top_bar(mut self, slot: &'a dyn Measurable) -> Self {
        self.top_bar = Some(slot);
        self
    }

    /// Sets the bottom bar slot.
    #[must_use]
    pub fn with_bottom_bar(mut self, slot: &'a dyn Measurable) -> Self {
        self.bottom_bar = Some(slot);
        self
    }

    /// Sets the side rail slot.
    #[must_use]
    pub fn with_side_rail(mut self, slot: &'a dyn Measurable) -> Self {
        self.side_rail = Some(slot);
        self
    }

    /// Sets the snackbar slot.
    #[must_use]
    pub fn with_snackbar(mut self, slot: &'a dyn Measurable) -> Self {
        self.snackbar = Some(slot);
        self
    }

    /// Sets the main content slot.
    #[must_use]
    pub fn with_main_content(mut self, slot: &'a dyn Measurable) -> Self {
        self.main_content = Some(slot);
        self
    }
}

/// One slot's computed position and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPlacement {
    /// Which slot this is.
    pub kind: SlotKind,
    /// Where it goes.
    pub rect: Rect,
}

/// The output of one layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundationLayoutResult {
    /// Positioned slots in painting order, back to front: main content,
    /// top bar, snackbar, bottom bar, side rail. Absent slots are omitted.
    pub placements: Vec<SlotPlacement>,
    /// The padding the main content must apply so its content is not
    /// obscured by bars, rail, or system chrome.
    pub safe_padding: EdgeInsets,
    /// Extent in pixels of the decorative top fade, when a top bar is
    /// present. A rendering hint only (peaking at [`EDGE_FADE_ALPHA`]);
    /// geometry is unaffected.
    pub top_fade_extent: Option<u32>,
    /// Extent in pixels of the decorative bottom fade, when a bottom bar
    /// is present.
    pub bottom_fade_extent: Option<u32>,
}

impl FoundationLayoutResult {
    /// Returns the placed rectangle for a slot, if it was present.
    #[must_use]
    pub fn rect(&self, kind: SlotKind) -> Option<Rect> {
        self.placements
            .iter()
            .find(|p| p.kind == kind)
            .map(|p| p.rect)
    }

    /// The painting position of a slot within the back-to-front order.
    #[must_use]
    pub fn paint_index(&self, kind: SlotKind) -> Option<usize> {
        self.placements.iter().position(|p| p.kind == kind)
    }
}

/// The foundation layout engine.
pub struct FoundationLayout;

impl FoundationLayout {
    /// Responsive entry point: applies the adaptive slot policy for the
    /// given window, then runs the geometric pass.
    ///
    /// Compact-width windows keep the bottom bar and suppress the side
    /// rail; medium and large windows do the opposite. One dp maps to one
    /// pixel here; callers with a density scale convert before calling.
    #[must_use]
    pub fn layout(
        window: &WindowState,
        direction: LayoutDirection,
        slots: &Slots<'_>,
        insets: WindowInsets,
    ) -> FoundationLayoutResult {
        let viewport = Size::new(
            window.available_width_dp.round() as u32,
            window.available_height_dp.round() as u32,
        );
        let horizontal_padding = window.horizontal_padding().round() as u32;

        let adaptive = Slots {
            top_bar: slots.top_bar,
            bottom_bar: if window.is_compact_width() {
                slots.bottom_bar
            } else {
                None
            },
            side_rail: if window.is_compact_width() {
                None
            } else {
                slots.side_rail
            },
            snackbar: slots.snackbar,
            main_content: slots.main_content,
        };

        Self::compute(viewport, direction, horizontal_padding, &adaptive, insets)
    }

    /// The geometric layout pass.
    ///
    /// Measures the present slots under loose constraints in the defined
    /// order (side rail, top bar, snackbar, bottom bar, main content) and
    /// places them back-to-front. Never fails: absent slots are treated as
    /// zero-sized and an all-absent pass yields the main content spanning
    /// the full viewport with inset-only padding.
    #[must_use]
    pub fn compute(
        viewport: Size,
        direction: LayoutDirection,
        horizontal_padding: u32,
        slots: &Slots<'_>,
        insets: WindowInsets,
    ) -> FoundationLayoutResult {
        let loose = Constraints::loose(viewport);
        let hpad = horizontal_padding;

        // Side rail first: its width feeds every other slot's insets.
        let side_rail = slots.side_rail.map(|slot| slot.measure(loose));
        let rail_width = side_rail.map_or(0, |size| size.width);
        // Open inset rule: the rail side always reserves at least the
        // horizontal padding.
        let rail_reserved = rail_width.max(hpad);

        // Top bar: keep clear of the rail on its leading edge, respect the
        // base padding on the other.
        let top_bar = slots.top_bar.map(|slot| {
            let leading = if side_rail.is_some() { rail_reserved } else { hpad };
            slot.measure(loose.shrink(leading + hpad, 0))
        });
        let top_bar_height = top_bar.map_or(0, |size| size.height);

        // Snackbar: floats beside the rail and above the bottom chrome.
        let snackbar = slots.snackbar.map(|slot| {
            let horizontal = if side_rail.is_some() {
                rail_width + insets.right
            } else {
                insets.left + insets.right
            };
            slot.measure(loose.shrink(horizontal, insets.bottom))
        });

        // Bottom bar: full loose width.
        let bottom_bar = slots.bottom_bar.map(|slot| slot.measure(loose));
        let bottom_bar_height = bottom_bar.map_or(0, |size| size.height);

        // Main content: full loose constraints; safe space is handed over
        // as padding instead of reduced constraints so content can draw
        // edge-to-edge behind the bars.
        let main_content = slots
            .main_content
            .map_or(viewport, |slot| slot.measure(loose));

        let chrome_absent = top_bar.is_none()
            && bottom_bar.is_none()
            && side_rail.is_none()
            && snackbar.is_none();

        let safe_padding = if chrome_absent {
            insets.as_edge_insets(direction)
        } else {
            EdgeInsets {
                start: if side_rail.is_some() {
                    rail_reserved + CONTENT_HORIZONTAL_GAP
                } else {
                    insets.start(direction) + hpad + CONTENT_HORIZONTAL_GAP
                },
                top: if top_bar.is_some() {
                    top_bar_height + CONTENT_VERTICAL_GAP
                } else {
                    insets.top + CONTENT_VERTICAL_GAP
                },
                end: insets.end(direction) + hpad + CONTENT_HORIZONTAL_GAP,
                bottom: if bottom_bar.is_some() {
                    bottom_bar_height + CONTENT_VERTICAL_GAP
                } else {
                    insets.bottom + CONTENT_VERTICAL_GAP
                },
            }
        };

        // Back-to-front placement: main content, top bar, snackbar,
        // bottom bar, side rail.
        let mut placements = Vec::with_capacity(5);

        placements.push(SlotPlacement {
            kind: SlotKind::MainContent,
            rect: Rect::new(Offset::ZERO, main_content),
        });

        if let Some(size) = top_bar {
            let x = match direction {
                LayoutDirection::Ltr if side_rail.is_some() => rail_reserved,
                _ => hpad,
            };
            placements.push(SlotPlacement {
                kind: SlotKind::TopBar,
                rect: Rect::new(Offset::new(x as i32, 0), size),
            });
        }

        if let Some(size) = snackbar {
            // Center within the space not covered by rail and padding.
            let reserved = if side_rail.is_some() {
                rail_width + 2 * hpad
            } else {
                2 * hpad
            };
            let content_width = size.width.saturating_sub(reserved);
            let x = (i64::from(viewport.width) - i64::from(hpad) - i64::from(content_width)) / 2
                + i64::from(insets.left);
            let lift = u32::from(size.height > 0)
                * (size.height + bottom_bar_height.max(insets.bottom));
            let y = i64::from(viewport.height) - i64::from(lift);
            placements.push(SlotPlacement {
                kind: SlotKind::Snackbar,
                rect: Rect::new(Offset::new(x as i32, y as i32), size),
            });
        }

        if let Some(size) = bottom_bar {
            placements.push(SlotPlacement {
                kind: SlotKind::BottomBar,
                rect: Rect::new(
                    Offset::new(
                        hpad as i32,
                        (i64::from(viewport.height) - i64::from(size.height)) as i32,
                    ),
                    size,
                ),
            });
        }

        if let Some(size) = side_rail {
            let x = match direction {
                LayoutDirection::Ltr => 0,
                LayoutDirection::Rtl => {
                    (i64::from(viewport.width) - i64::from(size.width)) as i32
                }
            };
            let y = i32::try_from(viewport.height / 2).unwrap_or(i32::MAX)
                - i32::try_from(size.height / 2).unwrap_or(0);
            placements.push(SlotPlacement {
                kind: SlotKind::SideRail,
                rect: Rect::new(Offset::new(x, y), size),
            });
        }

        trace!(
            ?viewport,
            ?direction,
            slots = placements.len(),
            "foundation layout pass"
        );

        FoundationLayoutResult {
            placements,
            safe_padding,
            top_fade_extent: top_bar.map(|size| size.height + CONTENT_VERTICAL_GAP),
            bottom_fade_extent: bottom_bar.map(|size| size.height + CONTENT_VERTICAL_GAP),
        }
    }
}
