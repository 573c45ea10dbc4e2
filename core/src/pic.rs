//! Packed 1-bit bitmap resources.
//!
//! A resource starts with a 4 byte header holding the width and height as
//! little endian `u16`, followed by the pixel rows. Every row is packed
//! MSB first, one bit per pixel, and padded to a whole byte.

use alloc::{vec, vec::Vec};
use core::fmt;

use embedded_graphics::prelude::{OriginDimensions, Point, Size};
use log::debug;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned, byteorder::little_endian::U16};

pub const HEADER_SIZE: usize = core::mem::size_of::<Header>();

#[repr(C)]
#[derive(Clone, Copy, Debug, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
pub struct Header {
    pub width: U16,
    pub height: U16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PicError {
    TruncatedHeader,
    TruncatedData { expected: usize, actual: usize },
    BufferTooSmall { required: usize },
}

impl fmt::Display for PicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PicError::TruncatedHeader => write!(f, "resource is shorter than its {HEADER_SIZE} byte header"),
            PicError::TruncatedData { expected, actual } => {
                write!(f, "resource holds {actual} bytes of pixel data, header requires {expected}")
            }
            PicError::BufferTooSmall { required } => {
                write!(f, "output buffer too small, {required} bytes required")
            }
        }
    }
}

impl core::error::Error for PicError {}

type Result<T> = core::result::Result<T, PicError>;

/// Bytes per packed row.
pub const fn stride(width: u16) -> usize {
    (width as usize).div_ceil(8)
}

/// Size of the pixel data following the header.
pub const fn data_len(width: u16, height: u16) -> usize {
    stride(width) * height as usize
}

/// Size of a complete resource, header included.
pub const fn encoded_len(width: u16, height: u16) -> usize {
    HEADER_SIZE + data_len(width, height)
}

#[inline]
pub(crate) fn bit_set(row: &[u8], column: u16) -> bool {
    let column = column as usize;
    match row.get(column / 8) {
        Some(byte) => (byte >> (7 - column % 8)) & 1 == 1,
        None => false,
    }
}

/// Read-only view on a packed 1-bit resource.
#[derive(Debug, Clone, Copy)]
pub struct Pic<'a> {
    width: u16,
    height: u16,
    data: &'a [u8],
}

impl<'a> Pic<'a> {
    /// Parses a resource and checks that the body holds every row the
    /// header announces. Trailing bytes are ignored.
    pub fn parse(bytes: &'a [u8]) -> Result<Self> {
        let (header, data) = Header::read_from_prefix(bytes).map_err(|_| PicError::TruncatedHeader)?;
        let (width, height) = (header.width.get(), header.height.get());
        let expected = data_len(width, height);
        if data.len() < expected {
            return Err(PicError::TruncatedData {
                expected,
                actual: data.len(),
            });
        }
        debug!("Parsed pic header: width={}, height={}", width, height);
        Ok(Pic {
            width,
            height,
            data: &data[..expected],
        })
    }

    /// Takes the header at its word. A header shorter than 4 bytes yields an
    /// empty picture; rows missing from the body read as unset.
    pub fn trusted(bytes: &'a [u8]) -> Self {
        match Header::read_from_prefix(bytes) {
            Ok((header, data)) => Pic {
                width: header.width.get(),
                height: header.height.get(),
                data,
            },
            Err(_) => Pic {
                width: 0,
                height: 0,
                data: &[],
            },
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn stride(&self) -> usize {
        stride(self.width)
    }

    /// Packed bytes of row `r`, padding included. Shorter than the stride
    /// (or empty) if the body is truncated.
    pub fn row(&self, r: u16) -> &'a [u8] {
        let stride = self.stride();
        let start = r as usize * stride;
        let end = (start + stride).min(self.data.len());
        self.data.get(start..end).unwrap_or(&[])
    }

    pub fn pixel(&self, c: u16, r: u16) -> bool {
        c < self.width && r < self.height && bit_set(self.row(r), c)
    }

    /// Coordinates of every set pixel, row by row, left to right.
    pub fn set_pixels(self) -> impl Iterator<Item = Point> + 'a {
        (0..self.height).flat_map(move |r| {
            let row = self.row(r);
            (0..self.width)
                .filter(move |&c| bit_set(row, c))
                .map(move |c| Point::new(c as i32, r as i32))
        })
    }
}

impl OriginDimensions for Pic<'_> {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

/// Packs the pixels reported by `is_set` into `buffer`, returning the number
/// of bytes written. Padding bits are left clear.
pub fn encode_into(
    width: u16,
    height: u16,
    mut is_set: impl FnMut(u16, u16) -> bool,
    buffer: &mut [u8],
) -> Result<usize> {
    let required = encoded_len(width, height);
    let Some(buffer) = buffer.get_mut(..required) else {
        return Err(PicError::BufferTooSmall { required });
    };

    let header = Header {
        width: U16::new(width),
        height: U16::new(height),
    };
    let (head, body) = buffer.split_at_mut(HEADER_SIZE);
    head.copy_from_slice(header.as_bytes());
    body.fill(0);

    let stride = stride(width);
    for y in 0..height {
        let row = &mut body[y as usize * stride..][..stride];
        for x in 0..width {
            if is_set(x, y) {
                row[x as usize / 8] |= 0x80 >> (x % 8);
            }
        }
    }

    Ok(required)
}

pub fn encode(width: u16, height: u16, is_set: impl FnMut(u16, u16) -> bool) -> Vec<u8> {
    let mut buffer = vec![0u8; encoded_len(width, height)];
    // The buffer is sized by encoded_len, so this cannot fail.
    let _ = encode_into(width, height, is_set, &mut buffer);
    buffer
}
