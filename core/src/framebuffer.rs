use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Size},
};
use log::trace;

use crate::{
    blit::Surface,
    config::{BUFFER_SIZE, DISPLAY_HEIGHT, DISPLAY_STRIDE, DISPLAY_WIDTH},
};

/// Panel orientation. The panel is natively portrait.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, rotate_enum::RotateEnum, strum_macros::EnumIter,
)]
pub enum Rotation {
    /// No rotation (portrait, 168x384)
    Rotate0,
    /// 90° clockwise (landscape, 384x168)
    Rotate90,
    /// 180° rotation (portrait upside-down, 168x384)
    Rotate180,
    /// 270° clockwise / 90° counter-clockwise (landscape, 384x168)
    Rotate270,
}

impl Rotation {
    pub fn repr(self) -> &'static str {
        match self {
            Rotation::Rotate0 => "0°",
            Rotation::Rotate90 => "90°",
            Rotation::Rotate180 => "180°",
            Rotation::Rotate270 => "270°",
        }
    }

    pub fn size(self) -> Size {
        match self {
            Rotation::Rotate0 | Rotation::Rotate180 => {
                Size::new(DISPLAY_WIDTH as u32, DISPLAY_HEIGHT as u32)
            }
            Rotation::Rotate90 | Rotation::Rotate270 => {
                Size::new(DISPLAY_HEIGHT as u32, DISPLAY_WIDTH as u32)
            }
        }
    }
}

/// Outcome of a single pixel write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelStatus {
    Drawn,
    Clipped,
}

/// 1 bit per pixel shadow of the panel memory, rows packed MSB first.
pub struct Framebuffer {
    buffer: [u8; BUFFER_SIZE],
    rotation: Rotation,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::with_rotation(Rotation::Rotate0)
    }
}

impl Framebuffer {
    pub fn with_rotation(rotation: Rotation) -> Self {
        Self {
            buffer: [0; BUFFER_SIZE],
            rotation,
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    pub fn as_bytes(&self) -> &[u8; BUFFER_SIZE] {
        &self.buffer
    }

    pub fn fill(&mut self, color: BinaryColor) {
        self.buffer.fill(match color {
            BinaryColor::On => 0xFF,
            BinaryColor::Off => 0x00,
        });
    }

    /// Maps rotated coordinates onto the native portrait layout, `None` if
    /// they fall outside the panel.
    fn native(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let size = self.size();
        if x < 0 || y < 0 || x as u32 >= size.width || y as u32 >= size.height {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some(match self.rotation {
            Rotation::Rotate0 => (x, y),
            Rotation::Rotate90 => (y, DISPLAY_HEIGHT - 1 - x),
            Rotation::Rotate180 => (DISPLAY_WIDTH - 1 - x, DISPLAY_HEIGHT - 1 - y),
            Rotation::Rotate270 => (DISPLAY_WIDTH - 1 - y, x),
        })
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, color: BinaryColor) -> PixelStatus {
        let Some((x, y)) = self.native(x, y) else {
            trace!("Pixel out of bounds: x={}, y={}", x, y);
            return PixelStatus::Clipped;
        };
        let byte_index = y * DISPLAY_STRIDE + x / 8;
        let mask = 0x80 >> (x % 8);
        match color {
            BinaryColor::On => self.buffer[byte_index] |= mask,
            BinaryColor::Off => self.buffer[byte_index] &= !mask,
        }
        PixelStatus::Drawn
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<BinaryColor> {
        let (x, y) = self.native(x, y)?;
        let byte = self.buffer[y * DISPLAY_STRIDE + x / 8];
        Some(BinaryColor::from(byte & (0x80 >> (x % 8)) != 0))
    }
}

impl Surface<BinaryColor> for Framebuffer {
    type Status = PixelStatus;

    fn set_pixel(&mut self, x: i32, y: i32, color: BinaryColor) -> PixelStatus {
        Framebuffer::set_pixel(self, x, y, color)
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        self.rotation.size()
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            self.set_pixel(coord.x, coord.y, color);
        }
        Ok(())
    }
}
