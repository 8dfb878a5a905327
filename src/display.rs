//! Host display hook driven by the render pass.

use crate::tree::NodeId;

/// One visible row handed to the host renderer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RowView<'a> {
    pub node: NodeId,
    pub label: &'a str,
    /// 0-based slot within the viewport.
    pub row: u8,
    /// Whether this row holds the current selection.
    pub selected: bool,
}

/// Fixed-viewport row display.
///
/// A full repaint is announced through [`RowRenderer::prepare`] before
/// any of its rows arrive; partial repaints skip the announcement and
/// deliver only the changed rows.
pub trait RowRenderer {
    /// Clear/prepare the display. `total_rows` is the sibling count at
    /// the current level so the host can pre-size scroll indicators.
    fn prepare(&mut self, total_rows: u8);

    /// Draw one row.
    fn draw_row(&mut self, row: RowView<'_>);
}
