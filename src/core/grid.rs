use super::cell::{Attribute, Cell};
use crate::error::{Result, ScreenError};

/// Character/attribute grid produced by one render pass.
///
/// Coordinates are text-grid positions (render geometry), never canvas pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl RenderOutput {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![Cell::default(); width * height],
            width,
            height,
        }
    }

    /// Builds a grid from the engine's parallel text and attribute arrays.
    ///
    /// Both arrays must hold at least `width * height` bytes; anything shorter
    /// means the engine lost its buffers and yields `NoImageBuffer`.
    pub fn from_engine(width: usize, height: usize, text: &[u8], attrs: &[u8]) -> Result<Self> {
        let len = width * height;
        if text.len() < len || attrs.len() < len {
            return Err(ScreenError::NoImageBuffer);
        }

        let cells = text[..len]
            .iter()
            .zip(&attrs[..len])
            .map(|(&character, &attr)| {
                Ok(Cell {
                    character,
                    attribute: Attribute::try_from(attr)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Builds an all-`Normal` grid from equally long lines of text.
    pub fn from_lines(lines: &[&[u8]]) -> Self {
        let height = lines.len();
        let width = lines.first().map_or(0, |l| l.len());
        let mut output = Self::new(width, height);
        for (y, line) in lines.iter().enumerate() {
            for (x, &ch) in line.iter().take(width).enumerate() {
                output.cells[y * width + x] = Cell::new(ch);
            }
        }
        output
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get_mut(y * self.width + x)
    }

    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        let end = start + self.width;
        Some(&self.cells[start..end])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        (0..self.height).map(move |y| {
            let start = y * self.width;
            &self.cells[start..start + self.width]
        })
    }

    /// Raw characters, rows joined with `\n`, attributes ignored.
    pub fn text(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(Cell::as_char).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
