use crate::LayoutError;

/// The fixed text grid of the device screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayGeometry {
    /// Characters per line.
    pub line_width: usize,
    /// Lines that fit under a page header.
    pub max_lines: usize,
    /// Lines put on each page that continues a value past its lead page.
    pub overflow_lines: usize,
}

impl DisplayGeometry {
    pub const DEFAULT: DisplayGeometry = DisplayGeometry {
        line_width: 17,
        max_lines: 5,
        overflow_lines: 4,
    };

    pub fn new(
        line_width: usize,
        max_lines: usize,
        overflow_lines: usize,
    ) -> Result<Self, LayoutError> {
        if line_width == 0 {
            return Err(LayoutError::InvalidGeometry("line width must be at least 1"));
        }
        if overflow_lines == 0 {
            return Err(LayoutError::InvalidGeometry(
                "overflow pages must hold at least 1 line",
            ));
        }
        if overflow_lines > max_lines {
            return Err(LayoutError::InvalidGeometry(
                "overflow pages can't hold more lines than a page",
            ));
        }
        Ok(Self {
            line_width,
            max_lines,
            overflow_lines,
        })
    }
}

impl Default for DisplayGeometry {
    fn default() -> Self {
        Self::DEFAULT
    }
}
