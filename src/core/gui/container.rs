//=========================================================================
// Containers
//=========================================================================
//
// Layout-only views over widgets owned elsewhere.
//
// A container holds `WidgetId`s, never widgets. `perform_layout` looks
// each id up in the root and overwrites its position. Ids whose widget
// is gone are skipped.
//
// List policy:
//   Vertical   + Left/Right  → items flow downward, edges aligned
//   Horizontal + Top/Bottom  → items flow rightward, edges aligned
//   anything else            → LayoutError
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{error, warn};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::geometry::{Point, Size};
use super::root::GuiRoot;
use super::widget::WidgetId;

//=== Policy Types ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Right,
    Top,
    Bottom,

    /// Reserved. No orientation accepts it yet.
    Center,
}

//=== LayoutError =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("{orientation:?} list cannot align to {alignment:?}")]
    UnsupportedAlignment {
        orientation: Orientation,
        alignment: Alignment,
    },
}

//=== List Layout =========================================================

/// Rejects orientation/alignment pairs the list policy does not define.
pub fn validate_list_policy(
    orientation: Orientation,
    alignment: Alignment,
) -> Result<(), LayoutError> {
    use Alignment::*;
    use Orientation::*;

    match (orientation, alignment) {
        (Vertical, Left | Right) | (Horizontal, Top | Bottom) => Ok(()),
        _ => {
            error!(target: "gui", "Unsupported list layout: {:?} / {:?}", orientation, alignment);
            Err(LayoutError::UnsupportedAlignment { orientation, alignment })
        }
    }
}

/// Positions for a list of items with the given sizes.
///
/// The first item's alignment edge is pinned to `anchor`. Every later
/// item starts where the previous one ends along the flow axis and shares
/// its alignment edge. Fewer than two sizes yields no positions.
pub fn list_positions(
    anchor: Point,
    orientation: Orientation,
    alignment: Alignment,
    sizes: &[Size],
) -> Result<Vec<Point>, LayoutError> {
    validate_list_policy(orientation, alignment)?;

    let Some(first) = sizes.first() else {
        return Ok(Vec::new());
    };
    if sizes.len() < 2 {
        return Ok(Vec::new());
    }

    let mut positions = Vec::with_capacity(sizes.len());
    let mut previous = match alignment {
        Alignment::Right => Point::new(anchor.x - first.w, anchor.y),
        Alignment::Bottom => Point::new(anchor.x, anchor.y - first.h),
        _ => anchor,
    };
    let mut previous_size = *first;
    positions.push(previous);

    for size in &sizes[1..] {
        let next = match (orientation, alignment) {
            (Orientation::Vertical, Alignment::Right) => Point::new(
                previous.x + previous_size.w - size.w,
                previous.y + previous_size.h,
            ),
            (Orientation::Vertical, _) => Point::new(previous.x, previous.y + previous_size.h),
            (Orientation::Horizontal, Alignment::Bottom) => Point::new(
                previous.x + previous_size.w,
                previous.y + previous_size.h - size.h,
            ),
            (Orientation::Horizontal, _) => Point::new(previous.x + previous_size.w, previous.y),
        };
        positions.push(next);
        previous = next;
        previous_size = *size;
    }

    Ok(positions)
}

//=== Container Trait =====================================================

/// A layout policy applied to widgets the container does not own.
pub trait Container {
    fn items(&self) -> &[WidgetId];

    /// Overwrites the position of every live item.
    fn perform_layout(&self, anchor: Point, root: &mut GuiRoot) -> Result<(), LayoutError>;
}

//=== ListContainer =======================================================

#[derive(Debug, Clone)]
pub struct ListContainer {
    items: Vec<WidgetId>,
    orientation: Orientation,
    alignment: Alignment,
}

impl ListContainer {
    pub fn new(orientation: Orientation, alignment: Alignment) -> Self {
        Self {
            items: Vec::new(),
            orientation,
            alignment,
        }
    }

    pub fn push(&mut self, id: WidgetId) {
        self.items.push(id);
    }

    pub fn with_item(mut self, id: WidgetId) -> Self {
        self.items.push(id);
        self
    }

    /// Forgets `id`. Returns `false` if it was not held.
    pub fn remove(&mut self, id: WidgetId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| *item != id);
        self.items.len() != before
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Container for ListContainer {
    fn items(&self) -> &[WidgetId] {
        &self.items
    }

    fn perform_layout(&self, anchor: Point, root: &mut GuiRoot) -> Result<(), LayoutError> {
        validate_list_policy(self.orientation, self.alignment)?;

        let mut live = Vec::with_capacity(self.items.len());
        let mut sizes = Vec::with_capacity(self.items.len());
        for id in &self.items {
            match root.widget(*id) {
                Some(widget) => {
                    live.push(*id);
                    sizes.push(widget.size());
                }
                None => warn!(target: "gui", "List layout skipping stale widget {}", id),
            }
        }

        let positions = list_positions(anchor, self.orientation, self.alignment, &sizes)?;
        for (id, position) in live.into_iter().zip(positions) {
            if let Some(widget) = root.widget_mut(id) {
                widget.set_position(position);
            }
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
