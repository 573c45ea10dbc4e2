pub mod ascii;
pub mod error;
pub mod minifb_display;
pub mod resources;
