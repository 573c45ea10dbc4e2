//! Ordered tables of named picture resources sharing the packed 1-bit
//! format, e.g. the frames of the calendar animation.

use core::ops::Index;

use crate::pic::{Pic, PicError};

/// Number of frames in the calendar animation.
pub const NUM_FRAMES: usize = 30;

pub type FrameName = heapless::String<16>;

#[derive(Debug, Clone)]
pub struct Frame<'a> {
    name: FrameName,
    data: &'a [u8],
}

impl<'a> Frame<'a> {
    /// `None` if `name` does not fit a [`FrameName`].
    pub fn new(name: &str, data: &'a [u8]) -> Option<Self> {
        let mut owned = FrameName::new();
        owned.push_str(name).ok()?;
        Some(Frame { name: owned, data })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.data
    }

    pub fn pic(&self) -> Result<Pic<'a>, PicError> {
        Pic::parse(self.data)
    }
}

pub struct FrameTable<'a, const N: usize> {
    frames: [Frame<'a>; N],
}

pub type CalendarFrames<'a> = FrameTable<'a, NUM_FRAMES>;

impl<'a, const N: usize> FrameTable<'a, N> {
    pub fn new(frames: [Frame<'a>; N]) -> Self {
        FrameTable { frames }
    }

    /// Names the resources `FRAME0`, `FRAME1`, ... in order.
    pub fn numbered(data: [&'a [u8]; N]) -> Self {
        let mut index = 0usize;
        let frames = data.map(|data| {
            let name: FrameName = heapless::format!("FRAME{}", index).unwrap_or_default();
            index += 1;
            Frame { name, data }
        });
        FrameTable { frames }
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn get(&self, index: usize) -> Option<&Frame<'a>> {
        self.frames.get(index)
    }

    pub fn by_name(&self, name: &str) -> Option<&Frame<'a>> {
        self.frames.iter().find(|frame| frame.name() == name)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Frame<'a>> {
        self.frames.iter()
    }
}

impl<'a, const N: usize> Index<usize> for FrameTable<'a, N> {
    type Output = Frame<'a>;

    fn index(&self, index: usize) -> &Frame<'a> {
        &self.frames[index]
    }
}

impl<'t, 'a, const N: usize> IntoIterator for &'t FrameTable<'a, N> {
    type Item = &'t Frame<'a>;
    type IntoIter = core::slice::Iter<'t, Frame<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    static BLANK: [u8; 5] = [1, 0, 1, 0, 0x00];
    static DOT: [u8; 5] = [1, 0, 1, 0, 0x80];

    #[test]
    fn numbered_names_in_order() {
        let table = CalendarFrames::numbered(core::array::from_fn(|i| {
            if i % 2 == 0 { &BLANK[..] } else { &DOT[..] }
        }));
        assert_eq!(table.len(), NUM_FRAMES);
        assert_eq!(table[0].name(), "FRAME0");
        assert_eq!(table[29].name(), "FRAME29");
        assert!(table.get(NUM_FRAMES).is_none());
        assert_eq!(table.by_name("FRAME7").unwrap().bytes(), &DOT);
        let names: std::vec::Vec<_> = table.iter().take(3).map(Frame::name).collect();
        assert_eq!(names, ["FRAME0", "FRAME1", "FRAME2"]);
    }

    #[test]
    fn frames_parse_lazily() {
        let table = FrameTable::new([
            Frame::new("dot", &DOT).unwrap(),
            Frame::new("broken", &DOT[..3]).unwrap(),
        ]);
        assert!(table[0].pic().unwrap().pixel(0, 0));
        assert_eq!(table[1].pic().unwrap_err(), PicError::TruncatedHeader);
        assert!(table.by_name("missing").is_none());
    }

    #[test]
    fn rejects_long_names() {
        assert!(Frame::new("a-name-that-is-too-long", &BLANK).is_none());
    }
}
