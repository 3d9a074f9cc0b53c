//! Styled character grid the view draws into and the renderer flushes.

use crate::types::PieceColor;

/// 24-bit terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }
}

impl From<PieceColor> for Rgb {
    fn from(color: PieceColor) -> Self {
        let (r, g, b) = color.rgb();
        Self(r, g, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    /// Light grey on black, no attributes.
    pub const PLAIN: Self = Self {
        fg: Rgb(220, 220, 220),
        bg: Rgb(0, 0, 0),
        bold: false,
        dim: false,
    };
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::PLAIN
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Cell {
    pub const BLANK: Self = Self {
        ch: ' ',
        style: CellStyle::PLAIN,
    };
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of [`Cell`]s; every write outside the grid is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.resize(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Reuses the existing allocation when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells
            .resize(usize::from(width) * usize::from(height), Cell::BLANK);
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.offset(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.offset(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Single-line text starting at (x, y), clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        for (px, ch) in (x..self.width).zip(s.chars()) {
            self.put_char(px, y, ch, style);
        }
    }

    /// Decimal `value` at (x, y); formats on the stack.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) {
        let mut digits = [b'0'; 10];
        let mut start = digits.len();
        let mut n = value;
        loop {
            start -= 1;
            digits[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        for (px, d) in (x..self.width).zip(&digits[start..]) {
            self.put_char(px, y, char::from(*d), style);
        }
    }

    /// Fill a `w x h` block whose top-left corner is (x, y), clipped to the grid.
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        if x >= x_end {
            return;
        }
        let cell = Cell { ch, style };
        let len = usize::from(x_end - x);
        for py in y..y_end {
            let start = usize::from(py) * usize::from(self.width) + usize::from(x);
            self.cells[start..start + len].fill(cell);
        }
    }

    /// Characters of row `y` with styles dropped; empty when out of range.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_u32_writes_digits() {
        let mut fb = FrameBuffer::new(12, 1);
        fb.put_u32(1, 0, 4200, CellStyle::PLAIN);
        assert_eq!(fb.row_text(0), " 4200       ");

        fb.put_u32(0, 0, 0, CellStyle::PLAIN);
        assert_eq!(fb.get(0, 0).unwrap().ch, '0');

        fb.put_u32(2, 0, u32::MAX, CellStyle::PLAIN);
        assert_eq!(fb.row_text(0), "044294967295");
    }

    #[test]
    fn writes_outside_are_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put_str(1, 1, "abc", CellStyle::PLAIN);
        assert_eq!(fb.row_text(1), " a");
        fb.put_char(5, 5, 'x', CellStyle::PLAIN);
        assert_eq!(fb.row_text(0), "  ");
        assert_eq!(fb.row_text(9), "");
    }

    #[test]
    fn fill_rect_clips_to_grid() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.fill_rect(2, 1, 5, 5, '#', CellStyle::PLAIN);
        assert_eq!(fb.row_text(0), "    ");
        assert_eq!(fb.row_text(1), "  ##");
        assert_eq!(fb.row_text(2), "  ##");

        fb.fill_rect(u16::MAX, 0, 2, 2, '!', CellStyle::PLAIN);
        assert_eq!(fb.row_text(0), "    ");
    }

    #[test]
    fn resize_keeps_dimensions_consistent() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.resize(5, 4);
        assert_eq!((fb.width(), fb.height()), (5, 4));
        assert_eq!(fb.get(4, 3), Some(Cell::BLANK));
        assert_eq!(fb.get(5, 0), None);
    }

    #[test]
    fn palette_maps_to_rgb() {
        assert_eq!(Rgb::from(PieceColor::Purple), Rgb::new(128, 0, 128));
    }
}
