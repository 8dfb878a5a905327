/// 0-based index of the first visible sibling for a window of `rows`
/// rows.
///
/// Keeps the selection near the window center, pins the window against
/// the end of the list once the selection is within half a window of
/// it, and saturates instead of running past the first row.
fn viewport_start(info: SiblingInfo, rows: u8) -> u8 {
    let center = rows / 2;

    if info.position >= info.count.saturating_sub(center) {
        info.count.saturating_sub(rows)
    } else {
        // Odd windows cannot split evenly; lean the selection upward.
        info.position
            .saturating_sub(center)
            .saturating_sub(rows & 1)
    }
}

impl<R> Engine<R>
where
    R: NodeReader,
{
    /// Repaint the viewport around the current selection.
    ///
    /// Decides between a full repaint and repainting only the one or
    /// two rows whose content changed since the last pass, then hands
    /// exactly those rows to `renderer` and dispatches
    /// [`Action::DISPLAY`] on each. Selection state observed by
    /// handlers during the pass tracks the row being drawn and is
    /// restored before returning; only the remembered window offset
    /// and the redraw flag persist.
    pub fn render(&mut self, renderer: &mut dyn RowRenderer, viewport_rows: u8) {
        if viewport_rows == 0 {
            return;
        }

        let info = locate(&self.reader, self.current);
        self.position = info.position;
        self.sibling_count = info.count;

        let start = viewport_start(info, viewport_rows);

        let mut full = self.force_full_redraw;
        if full {
            renderer.prepare(self.sibling_count);
        } else if start != self.viewport_start {
            // The window slid under the selection; every visible row
            // changed. No prepare signal, rows overwrite in place.
            full = true;
        }
        self.viewport_start = start;

        let selected_row = self.position.saturating_sub(1).saturating_sub(start);

        let (low, high) = if full {
            (0, viewport_rows)
        } else {
            // A single-step forward move vacated the row above the
            // selection; any other move vacated the row below it.
            let moved_forward = self.previous.is_some()
                && self.previous == self.reader.link(self.current, LinkField::Previous);
            let low = if moved_forward {
                selected_row.saturating_sub(1)
            } else {
                selected_row
            };
            (low, low.saturating_add(2).min(viewport_rows))
        };

        debug!(
            "menu-render: position={}/{} start={} rows={}..{} full={}",
            info.position, info.count, start, low, high, full
        );

        let restore = (self.current, self.position);

        // First entry of the current level.
        let mut cursor = match self.reader.link(self.current, LinkField::Parent) {
            Some(parent) => self.reader.link(parent, LinkField::Child),
            // Detached probe: the node is its whole level.
            None => Some(self.current),
        };

        // Skip rows above the window and rows known to be unchanged.
        for _ in 0..start.saturating_add(low) {
            cursor = match cursor {
                Some(node) => self.reader.link(node, LinkField::Next),
                None => break,
            };
        }

        let mut row = low;
        while let Some(node) = cursor {
            if row >= high {
                break;
            }

            // Display handlers observe the row being drawn.
            self.current = node;
            self.position = row.saturating_add(1);

            renderer.draw_row(RowView {
                node,
                label: self.reader.label(node),
                row,
                selected: node == restore.0,
            });
            let _ = self.dispatch_on(Action::DISPLAY, node);

            cursor = self.reader.link(node, LinkField::Next);
            row = row.saturating_add(1);
        }

        (self.current, self.position) = restore;
        self.force_full_redraw = false;
    }
}
