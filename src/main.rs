use clap::Parser;
use quoteable_media::constants::{
    DEFAULT_BACKGROUND_COLOR, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE,
};
use quoteable_media::transform::{
    build_image_url, FontWeight, Gravity, Quality, TextOverlayOptions, Transformation,
    TransformError,
};

/// Quoteable Media - compose CDN transformation directives and print the delivery URL
#[derive(Parser, Debug)]
#[command(name = "quoteable-media")]
#[command(version, about, long_about = None)]
struct Args {
    /// CDN account (cloud) name the asset is hosted under
    #[arg(short, long)]
    account: String,

    /// Asset identifier, e.g. "quoteable/quotes/celebrate"
    #[arg(long)]
    asset: String,

    /// Resize target width in pixels
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Resize target height in pixels
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// Crop mode for resize (fill, scale, fit, crop, thumb)
    #[arg(long, default_value = "fill")]
    crop: String,

    /// Output format token (e.g. webp, jpg, auto)
    #[arg(long)]
    format: Option<String>,

    /// Output quality, 1-100 or "auto"
    #[arg(long)]
    quality: Option<String>,

    /// Background overlay opacity, 0-100
    #[arg(long)]
    bg_opacity: Option<u8>,

    /// Background overlay color (named or prefixed literal, e.g. rgb:3e2222)
    #[arg(long, default_value = DEFAULT_BACKGROUND_COLOR)]
    bg_color: String,

    /// Quote text to overlay
    #[arg(long)]
    text: Option<String>,

    /// Text overlay font family
    #[arg(long, default_value = DEFAULT_FONT_FAMILY)]
    font_family: String,

    /// Text overlay font size in points
    #[arg(long, default_value_t = DEFAULT_FONT_SIZE)]
    font_size: u32,

    /// Render the text in bold
    #[arg(long)]
    bold: bool,

    /// Text color as a hex triplet (e.g. FFFFFF)
    #[arg(long)]
    text_color: Option<String>,

    /// Text anchor gravity (north, south, ..., north_east)
    #[arg(long)]
    gravity: Option<String>,

    /// Vertical text offset in pixels
    #[arg(long)]
    y_offset: Option<i32>,

    /// Horizontal text offset in pixels
    #[arg(long)]
    x_offset: Option<i32>,

    /// Maximum text rendering width in pixels (wraps long quotes)
    #[arg(long)]
    max_width: Option<u32>,

    /// Print the result as JSON instead of a bare URL
    #[arg(long)]
    json: bool,
}

fn main() {
    // Initialize logging subsystem
    quoteable_media::logging::init_subscriber().expect("Failed to initialize logging subsystem");

    // Parse command-line arguments
    let args = Args::parse();

    let url = compose_url(&args).unwrap_or_else(|e| {
        eprintln!("Failed to build delivery URL: {}", e);
        std::process::exit(1);
    });

    if args.json {
        println!("{}", serde_json::json!({ "url": url }));
    } else {
        println!("{}", url);
    }
}

/// Compose the directive chain in compositing order: resize, then the
/// background tint, then the text drawn on top of it, then format/quality.
fn compose_url(args: &Args) -> Result<String, TransformError> {
    let mut chain = Vec::new();

    if let (Some(width), Some(height)) = (args.width, args.height) {
        chain.push(Transformation::resize(width, height, args.crop.parse()?)?);
    }

    if let Some(opacity) = args.bg_opacity {
        chain.push(Transformation::background_overlay(
            opacity,
            args.bg_color.as_str(),
        )?);
    }

    if let Some(ref text) = args.text {
        let options = TextOverlayOptions {
            font_family: args.font_family.clone(),
            font_size: args.font_size,
            font_weight: if args.bold {
                FontWeight::Bold
            } else {
                FontWeight::Normal
            },
            color: args.text_color.clone(),
            gravity: args
                .gravity
                .as_deref()
                .map(|gravity| gravity.parse::<Gravity>())
                .transpose()?,
            y_offset: args.y_offset,
            x_offset: args.x_offset,
            max_width: args.max_width,
        };
        chain.push(Transformation::text_overlay(text.clone(), options));
    }

    if args.format.is_some() || args.quality.is_some() {
        let format = args.format.as_deref().unwrap_or("auto");
        let quality = match args.quality {
            Some(ref quality) => quality.parse()?,
            None => Quality::Auto,
        };
        chain.push(Transformation::optimize(format, quality)?);
    }

    tracing::info!(
        account = %args.account,
        asset = %args.asset,
        directives = chain.len(),
        "composing delivery URL"
    );

    build_image_url(&args.asset, &chain, &args.account)
}
