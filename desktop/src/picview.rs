use std::path::PathBuf;

use argh::FromArgs;
use calanim_core::{
    blit::draw_pic,
    framebuffer::{Framebuffer, PixelStatus},
};
use calanim_desktop::{
    ascii,
    error::{Result, ToolError},
    minifb_display::MinifbDisplay,
    resources,
};
use embedded_graphics::pixelcolor::BinaryColor;
use log::{info, warn};

#[derive(FromArgs)]
/// Preview a pic resource, or a calendar frame from a directory, on a
/// simulated ST7305 panel
struct Args {
    /// pic file, or directory holding frame0.pic .. frame29.pic
    #[argh(positional)]
    path: PathBuf,

    /// frame index when `path` is a directory
    #[argh(option, short = 'f', default = "0")]
    frame: usize,

    /// horizontal origin
    #[argh(option, short = 'x', default = "0")]
    x: i32,

    /// vertical origin
    #[argh(option, short = 'y', default = "0")]
    y: i32,

    /// print the panel as text instead of opening a window
    #[argh(switch)]
    ascii: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    if let Err(err) = run(&args) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let bytes = if args.path.is_dir() {
        let frames = resources::load_frames(&args.path)?;
        let table = resources::frame_table(&frames).ok_or(ToolError::FrameIndex(args.frame))?;
        let frame = table.get(args.frame).ok_or(ToolError::FrameIndex(args.frame))?;
        info!("Showing {}", frame.name());
        frame.bytes().to_vec()
    } else {
        resources::load_pic(&args.path)?
    };

    let mut fb = Box::new(Framebuffer::default());
    render(&mut fb, &bytes, args.x, args.y);

    if args.ascii {
        print!("{}", ascii::render(&fb));
        return Ok(());
    }

    let mut display = MinifbDisplay::new(fb.rotation(), minifb::Scale::X2)?;
    display.show(&fb)?;
    while display.is_open() {
        if display.rotate_requested() {
            display.rotate()?;
            fb.set_rotation(display.rotation());
            render(&mut fb, &bytes, args.x, args.y);
            display.show(&fb)?;
        }
        display.update();
    }
    Ok(())
}

fn render(fb: &mut Framebuffer, bytes: &[u8], x: i32, y: i32) {
    fb.fill(BinaryColor::Off);
    let mut clipped = 0usize;
    let mut surface = |px: i32, py: i32, color: BinaryColor| {
        if fb.set_pixel(px, py, color) == PixelStatus::Clipped {
            clipped += 1;
        }
    };
    draw_pic(bytes, x, y, &mut surface, BinaryColor::On);
    if clipped > 0 {
        warn!(
            "{} pixels fell outside the {} panel",
            clipped,
            fb.rotation().repr()
        );
    }
}
