use argh::FromArgs;
use calanim_core::{
    config::{DISPLAY_HEIGHT, DISPLAY_WIDTH},
    pic,
};
use calanim_desktop::error::{Result, ToolError};
use log::{info, warn};

#[derive(FromArgs)]
/// Convert an image into a packed 1-bit pic resource
struct Args {
    /// input image path
    #[argh(option, short = 'i')]
    input_path: String,

    /// output pic file path
    #[argh(option, short = 'o')]
    output_path: String,

    /// luma below which a pixel is lit (default 128)
    #[argh(option, short = 't', default = "128")]
    threshold: u8,

    /// light pixels are lit instead of dark ones
    #[argh(switch, short = 'n')]
    invert: bool,
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
    let image = image::open(&args.input_path)?.into_luma8();
    let (width, height) = image.dimensions();
    let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(ToolError::ImageTooLarge { width, height });
    };
    if width as usize > DISPLAY_WIDTH || height as usize > DISPLAY_HEIGHT {
        warn!(
            "Image is {}x{}, larger than the {}x{} panel",
            width, height, DISPLAY_WIDTH, DISPLAY_HEIGHT
        );
    }

    let bytes = pic::encode(w, h, |x, y| {
        let luma = image.get_pixel(x as u32, y as u32)[0];
        (luma < args.threshold) != args.invert
    });
    std::fs::write(&args.output_path, &bytes)?;

    info!(
        "Wrote {} ({}x{}, {} bytes)",
        args.output_path,
        w,
        h,
        bytes.len()
    );
    Ok(())
}
