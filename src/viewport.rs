/// Mapping between canvas pixels and terminal cells.

/// Terminal region the canvas is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// On-screen offset of the canvas's top-left cell.
    pub origin_col: u16,
    pub origin_row: u16,
    pub cols: u16,
    pub rows: u16,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Viewport {
    /// Fit a canvas inside a terminal, leaving a one-cell border all round and the
    /// last row free for the controls hint.
    pub fn fit(term_width: u16, term_height: u16, canvas_width: f64, canvas_height: f64) -> Self {
        Viewport {
            origin_col: 1,
            origin_row: 1,
            cols: term_width.saturating_sub(2).max(1),
            rows: term_height.saturating_sub(3).max(1),
            canvas_width,
            canvas_height,
        }
    }

    fn cell_width(&self) -> f64 {
        self.canvas_width / self.cols as f64
    }

    fn cell_height(&self) -> f64 {
        self.canvas_height / self.rows as f64
    }

    /// Centre of a screen cell in canvas space.  Cells outside the viewport map
    /// outside the canvas; callers clamp.
    pub fn to_canvas(&self, col: u16, row: u16) -> (f64, f64) {
        let local_col = col as f64 - self.origin_col as f64;
        let local_row = row as f64 - self.origin_row as f64;
        (
            (local_col + 0.5) * self.cell_width(),
            (local_row + 0.5) * self.cell_height(),
        )
    }

    /// Screen cell containing a canvas point, if it is on the canvas.
    pub fn to_cell(&self, x: f64, y: f64) -> Option<(u16, u16)> {
        if !(0.0..self.canvas_width).contains(&x) || !(0.0..self.canvas_height).contains(&y) {
            return None;
        }
        let col = ((x / self.cell_width()) as u16).min(self.cols - 1);
        let row = ((y / self.cell_height()) as u16).min(self.rows - 1);
        Some((self.origin_col + col, self.origin_row + row))
    }

    /// Cells covered by `[x, x + width) × [y, y + height)`, clipped to the canvas.
    /// Every non-empty on-canvas rectangle covers at least one cell.
    pub fn cell_span(&self, x: f64, y: f64, width: f64, height: f64) -> Option<CellSpan> {
        let (cols, cols_len) = span(x, width, self.canvas_width, self.cell_width(), self.cols)?;
        let (rows, rows_len) = span(y, height, self.canvas_height, self.cell_height(), self.rows)?;
        Some(CellSpan {
            col: self.origin_col + cols,
            row: self.origin_row + rows,
            cols: cols_len,
            rows: rows_len,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellSpan {
    pub col: u16,
    pub row: u16,
    pub cols: u16,
    pub rows: u16,
}

fn span(start: f64, len: f64, limit: f64, cell: f64, cells: u16) -> Option<(u16, u16)> {
    let lo = start.max(0.0);
    let hi = (start + len).min(limit);
    if hi <= lo || lo >= limit {
        return None;
    }
    let first = ((lo / cell) as u16).min(cells - 1);
    let last = (((hi / cell).ceil() as u16).saturating_sub(1)).clamp(first, cells - 1);
    Some((first, last - first + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> Viewport {
        // 50 × 25 cells over a 500 × 500 canvas → 10 × 20 px cells
        Viewport::fit(52, 28, 500.0, 500.0)
    }

    #[test]
    fn fit_reserves_border_and_hint_row() {
        let v = view();
        assert_eq!((v.origin_col, v.origin_row), (1, 1));
        assert_eq!((v.cols, v.rows), (50, 25));
    }

    #[test]
    fn to_canvas_subtracts_origin() {
        let v = view();
        assert_eq!(v.to_canvas(1, 1), (5.0, 10.0));
        assert_eq!(v.to_canvas(50, 25), (495.0, 490.0));
    }

    #[test]
    fn to_canvas_off_canvas_goes_negative() {
        let (x, y) = view().to_canvas(0, 0);
        assert!(x < 0.0 && y < 0.0);
    }

    #[test]
    fn to_cell_inverts_to_canvas() {
        let v = view();
        let (x, y) = v.to_canvas(17, 9);
        assert_eq!(v.to_cell(x, y), Some((17, 9)));
    }

    #[test]
    fn to_cell_rejects_outside() {
        let v = view();
        assert_eq!(v.to_cell(-1.0, 10.0), None);
        assert_eq!(v.to_cell(10.0, 500.0), None);
    }

    #[test]
    fn cell_span_tiny_rect_covers_one_cell() {
        let span = view().cell_span(12.0, 12.0, 1.0, 1.0).unwrap();
        assert_eq!((span.cols, span.rows), (1, 1));
        assert_eq!((span.col, span.row), (2, 1));
    }

    #[test]
    fn cell_span_clips_to_canvas() {
        let span = view().cell_span(-15.0, 490.0, 30.0, 30.0).unwrap();
        assert_eq!(span.col, 1);
        assert_eq!(span.cols, 2);
        assert_eq!(span.row, 25);
        assert_eq!(span.rows, 1);
    }

    #[test]
    fn cell_span_fully_outside_is_none() {
        assert!(view().cell_span(600.0, 10.0, 10.0, 10.0).is_none());
        assert!(view().cell_span(10.0, -50.0, 10.0, 10.0).is_none());
    }
}
