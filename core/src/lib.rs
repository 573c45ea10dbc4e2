#![no_std]

pub mod blit;
pub mod config;
pub mod frames;
pub mod framebuffer;
pub mod pic;

#[cfg(test)]
mod tests;

extern crate alloc;
