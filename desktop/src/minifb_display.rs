use calanim_core::framebuffer::{Framebuffer, Rotation};
use embedded_graphics::{pixelcolor::BinaryColor, prelude::OriginDimensions};
use log::info;

use crate::error::Result;

// The ST7305 shows lit pixels dark on a reflective background.
const LIT: u32 = 0xFF000000;
const UNLIT: u32 = 0xFFFFFFFF;

/// Simulated panel: mirrors a [`Framebuffer`] into a desktop window.
pub struct MinifbDisplay {
    display_buffer: Vec<u32>,
    window: minifb::Window,
    rotation: Rotation,
    scale: minifb::Scale,
}

impl MinifbDisplay {
    pub fn new(rotation: Rotation, scale: minifb::Scale) -> Result<Self> {
        let size = rotation.size();
        Ok(Self {
            display_buffer: vec![UNLIT; size.width as usize * size.height as usize],
            window: Self::create_window(rotation, scale)?,
            rotation,
            scale,
        })
    }

    fn create_window(rotation: Rotation, scale: minifb::Scale) -> Result<minifb::Window> {
        let size = rotation.size();
        let options = minifb::WindowOptions {
            borderless: false,
            title: true,
            resize: true,
            scale,
            ..minifb::WindowOptions::default()
        };
        let title = format!("ST7305 preview ({})", rotation.repr());
        let mut window =
            minifb::Window::new(&title, size.width as usize, size.height as usize, options)?;

        window.set_target_fps(30);
        Ok(window)
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(minifb::Key::Escape)
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Whether the rotate key was pressed since the last update.
    pub fn rotate_requested(&self) -> bool {
        self.window.is_key_pressed(minifb::Key::M, minifb::KeyRepeat::No)
    }

    /// Reopens the window in the next orientation.
    pub fn rotate(&mut self) -> Result<()> {
        let rotation = self.rotation.next();
        info!("Rotating display to {}", rotation.repr());
        self.window = Self::create_window(rotation, self.scale)?;
        self.rotation = rotation;
        Ok(())
    }

    /// Copies `fb` into the window, which must share its rotation.
    pub fn show(&mut self, fb: &Framebuffer) -> Result<()> {
        let size = fb.size();
        let (width, height) = (size.width as usize, size.height as usize);
        self.display_buffer.resize(width * height, UNLIT);
        for y in 0..height {
            for x in 0..width {
                self.display_buffer[y * width + x] = match fb.pixel(x as i32, y as i32) {
                    Some(BinaryColor::On) => LIT,
                    _ => UNLIT,
                };
            }
        }
        self.window
            .update_with_buffer(&self.display_buffer, width, height)?;
        Ok(())
    }

    pub fn update(&mut self) {
        self.window.update();
    }
}
