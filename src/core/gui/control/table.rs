//=========================================================================
// Scrolling Table
//=========================================================================
//
// A rows × columns window over a longer run of cells.
//
// Cell placement:
//   Vertical scroll   → column-major; a "line" is one column of `rows` cells,
//                       `columns` lines are visible at once
//   Horizontal scroll → row-major; a "line" is one row of `columns` cells,
//                       `rows` lines are visible at once
//
// The offset counts lines. Cells inside the window are positioned and
// shown; cells outside it keep their last position and are hidden.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;
use std::ops::Range;

use log::trace;

//=== Internal Dependencies ===============================================

use super::{Control, ControlBase};
use crate::core::gui::container::LayoutError;
use crate::core::gui::geometry::{Point, Size};
use crate::core::gui::widget::{Widget, WidgetCore, WidgetId};

//=== ScrollDirection =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Vertical,
    Horizontal,
}

//=== ScrollingTable ======================================================

pub struct ScrollingTable {
    base: ControlBase,
    rows: usize,
    columns: usize,
    cell_size: Size,
    direction: ScrollDirection,
    offset: usize,
    shown: bool,
}

impl ScrollingTable {
    /// # Panics
    ///
    /// Panics if `rows` or `columns` is zero.
    pub fn new(rows: usize, columns: usize, cell_size: Size, direction: ScrollDirection) -> Self {
        assert!(rows > 0, "Table needs at least one row");
        assert!(columns > 0, "Table needs at least one column");
        Self {
            base: ControlBase::new(),
            rows,
            columns,
            cell_size,
            direction,
            offset: 0,
            shown: true,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.base.set_position(Point::new(x, y));
        self
    }

    pub fn with_cell(mut self, cell: impl Widget) -> Self {
        self.add_cell(Box::new(cell));
        self
    }

    //--- Cells ------------------------------------------------------------

    pub fn add_cell(&mut self, cell: Box<dyn Widget>) -> WidgetId {
        let id = self.base.push(cell);
        self.relayout();
        id
    }

    pub fn remove_cell(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let removed = self.base.remove(id)?;
        self.offset = self.offset.min(self.max_offset());
        self.relayout();
        Some(removed)
    }

    pub fn cell_count(&self) -> usize {
        self.base.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn direction(&self) -> ScrollDirection {
        self.direction
    }

    //--- Scrolling --------------------------------------------------------

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Last offset that still shows at least one line.
    pub fn max_offset(&self) -> usize {
        self.line_count().saturating_sub(1)
    }

    /// Scrolls to `offset` lines, clamped to [`max_offset`](Self::max_offset).
    pub fn scroll_to(&mut self, offset: usize) {
        let clamped = offset.min(self.max_offset());
        if clamped != self.offset {
            trace!(target: "gui", "Table {} scrolled to line {}", self.base.core().id(), clamped);
            self.offset = clamped;
            self.relayout();
        }
    }

    pub fn scroll_by(&mut self, lines: isize) {
        let target = self.offset.saturating_add_signed(lines);
        self.scroll_to(target);
    }

    /// Ordinals of the cells currently inside the window.
    pub fn visible_range(&self) -> Range<usize> {
        let per_line = self.cells_per_line();
        let start = (self.offset * per_line).min(self.cell_count());
        let end = ((self.offset + self.visible_lines()) * per_line).min(self.cell_count());
        start..end
    }

    //--- Geometry ---------------------------------------------------------

    fn cells_per_line(&self) -> usize {
        match self.direction {
            ScrollDirection::Vertical => self.rows,
            ScrollDirection::Horizontal => self.columns,
        }
    }

    fn visible_lines(&self) -> usize {
        match self.direction {
            ScrollDirection::Vertical => self.columns,
            ScrollDirection::Horizontal => self.rows,
        }
    }

    fn line_count(&self) -> usize {
        self.cell_count().div_ceil(self.cells_per_line())
    }

    /// Grid cell `(column, row)` for the `slot`-th cell inside the window.
    fn grid_cell(&self, slot: usize) -> (usize, usize) {
        match self.direction {
            ScrollDirection::Vertical => (slot / self.rows, slot % self.rows),
            ScrollDirection::Horizontal => (slot % self.columns, slot / self.columns),
        }
    }

    fn relayout(&mut self) {
        let window = self.visible_range();
        let origin = self.base.core().position;
        let cells: Vec<(usize, Option<Point>)> = (0..self.cell_count())
            .map(|ordinal| {
                let slot = window.contains(&ordinal).then(|| {
                    let (column, row) = self.grid_cell(ordinal - window.start);
                    Point::new(
                        origin.x + column as f32 * self.cell_size.w,
                        origin.y + row as f32 * self.cell_size.h,
                    )
                });
                (ordinal, slot)
            })
            .collect();

        let shown = self.shown;
        for ((_, slot), cell) in cells.into_iter().zip(self.base.iter_mut()) {
            match slot {
                Some(position) => {
                    cell.set_position(position);
                    cell.set_visible(shown);
                }
                None => cell.set_visible(false),
            }
        }
    }
}

impl Widget for ScrollingTable {
    fn core(&self) -> &WidgetCore {
        self.base.core()
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        self.base.core_mut()
    }

    fn set_position(&mut self, position: Point) {
        self.base.set_position(position);
    }

    /// The visible grid, regardless of how many cells are filled.
    fn intrinsic_size(&self) -> Size {
        Size::new(
            self.columns as f32 * self.cell_size.w,
            self.rows as f32 * self.cell_size.h,
        )
    }

    fn visible(&self) -> bool {
        self.shown
    }

    fn set_visible(&mut self, visible: bool) {
        self.shown = visible;
        self.base.core_mut().visible = visible;
        self.relayout();
    }

    fn child_count(&self) -> usize {
        self.base.len()
    }

    fn child(&self, index: usize) -> Option<&dyn Widget> {
        self.base.get(index)
    }

    fn child_mut(&mut self, index: usize) -> Option<&mut dyn Widget> {
        self.base.get_mut(index)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Control for ScrollingTable {
    fn add_child(&mut self, child: Box<dyn Widget>) -> Option<WidgetId> {
        Some(self.add_cell(child))
    }

    fn remove_child(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        self.remove_cell(id)
    }

    fn perform_layout(&mut self) -> Result<(), LayoutError> {
        self.relayout();
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gui::widget::tests::Block;

    //--- Test Helpers -----------------------------------------------------

    const CELL: Size = Size::new(10.0, 10.0);

    fn table(direction: ScrollDirection, cells: usize) -> ScrollingTable {
        let mut table = ScrollingTable::new(4, 4, CELL, direction);
        for _ in 0..cells {
            table.add_cell(Box::new(Block::new(0.0, 0.0, 10.0, 10.0)));
        }
        table
    }

    fn cell_at(table: &ScrollingTable, ordinal: usize) -> (Point, bool) {
        let cell = table.child(ordinal).unwrap();
        (cell.position(), cell.visible())
    }

    fn grid(column: usize, row: usize) -> Point {
        Point::new(column as f32 * 10.0, row as f32 * 10.0)
    }

    //=====================================================================
    // Placement
    //=====================================================================

    #[test]
    fn vertical_scroll_fills_columns_first() {
        let table = table(ScrollDirection::Vertical, 10);

        for ordinal in 0..4 {
            assert_eq!(cell_at(&table, ordinal), (grid(0, ordinal), true));
        }
        for ordinal in 4..8 {
            assert_eq!(cell_at(&table, ordinal), (grid(1, ordinal - 4), true));
        }
        assert_eq!(cell_at(&table, 9), (grid(2, 1), true));
    }

    #[test]
    fn horizontal_scroll_fills_rows_first() {
        let table = table(ScrollDirection::Horizontal, 6);

        assert_eq!(cell_at(&table, 3), (grid(3, 0), true));
        assert_eq!(cell_at(&table, 4), (grid(0, 1), true));
    }

    #[test]
    fn cells_follow_table_position() {
        let mut table = table(ScrollDirection::Vertical, 2).at(100.0, 50.0);
        table.perform_layout().unwrap();
        assert_eq!(cell_at(&table, 1).0, Point::new(100.0, 60.0));
    }

    //=====================================================================
    // Scrolling
    //=====================================================================

    #[test]
    fn scrolling_one_line_shifts_window() {
        let mut table = table(ScrollDirection::Vertical, 10);

        table.scroll_to(1);

        assert_eq!(table.offset(), 1);
        assert_eq!(table.cell_count(), 10);
        assert_eq!(table.visible_range(), 4..10);
        assert_eq!(cell_at(&table, 4), (grid(0, 0), true));
        assert_eq!(cell_at(&table, 8), (grid(1, 0), true));
    }

    /// Cells leaving the window keep their position but are hidden.
    #[test]
    fn off_window_cells_are_hidden_not_moved() {
        let mut table = table(ScrollDirection::Vertical, 10);

        table.scroll_to(1);

        assert_eq!(cell_at(&table, 0), (grid(0, 0), false));
        assert_eq!(cell_at(&table, 3), (grid(0, 3), false));
    }

    #[test]
    fn scroll_is_clamped() {
        let mut table = table(ScrollDirection::Horizontal, 10);
        assert_eq!(table.max_offset(), 2);

        table.scroll_to(50);
        assert_eq!(table.offset(), 2);

        table.scroll_by(-5);
        assert_eq!(table.offset(), 0);

        table.scroll_by(1);
        assert_eq!(table.offset(), 1);
    }

    #[test]
    fn window_larger_than_content() {
        let table = table(ScrollDirection::Vertical, 3);
        assert_eq!(table.visible_range(), 0..3);
        assert_eq!(table.max_offset(), 0);
    }

    #[test]
    fn removing_cells_reclamps_offset() {
        let mut table = table(ScrollDirection::Vertical, 10);
        table.scroll_to(2);
        let last_line: Vec<WidgetId> = (8..10).map(|i| table.child(i).unwrap().id()).collect();

        for id in last_line {
            table.remove_cell(id);
        }

        assert_eq!(table.offset(), 1);
        assert_eq!(table.visible_range(), 4..8);
    }

    //=====================================================================
    // Visibility & Size
    //=====================================================================

    #[test]
    fn hiding_table_hides_every_cell() {
        let mut table = table(ScrollDirection::Vertical, 5);

        table.set_visible(false);
        assert!(!table.visible());
        assert!((0..5).all(|i| !cell_at(&table, i).1));

        table.set_visible(true);
        assert!((0..5).all(|i| cell_at(&table, i).1));
    }

    #[test]
    fn size_is_visible_grid() {
        let table = ScrollingTable::new(3, 2, CELL, ScrollDirection::Vertical);
        assert_eq!(table.size(), Size::new(20.0, 30.0));
    }

    #[test]
    #[should_panic(expected = "at least one row")]
    fn zero_rows_panics() {
        ScrollingTable::new(0, 4, CELL, ScrollDirection::Vertical);
    }
}
