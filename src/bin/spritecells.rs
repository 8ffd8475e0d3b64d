use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use spritecells::contour::trace_outlines;
use spritecells::grid::GridSpec;
use spritecells::mask::{AlphaMask, ensure_alpha};
use spritecells::overlay::{render_overlay_rgba, save_overlay};

const USAGE: &str = "Usage: spritecells <image> <output> [<cell_width> <cell_height>]";

#[derive(Parser, Debug)]
#[command(
    name = "spritecells",
    about = "Trace per-cell alpha outlines of a sprite sheet and overlay them on the image",
    version
)]
struct Cli {
    /// Path to the sprite sheet; must decode with an alpha channel
    image: PathBuf,

    /// Path the overlay PNG is written to
    output: PathBuf,

    /// Cell width in pixels; defaults to the full image width
    #[arg(requires = "cell_height")]
    cell_width: Option<u32>,

    /// Cell height in pixels; defaults to the full image height
    cell_height: Option<u32>,
}

/// Raw token count check: program name plus 2 to 4 arguments.
fn arg_count_ok(argc: usize) -> bool {
    argc > 2 && argc < 6
}

fn main() -> Result<(), Box<dyn Error>> {
    if !arg_count_ok(std::env::args().len()) {
        println!("{USAGE}");
        std::process::exit(1);
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            println!("{USAGE}");
            std::process::exit(1);
        }
    };

    let decoded = image::open(&cli.image)?;
    ensure_alpha(decoded.color())?;
    let image = decoded.into_rgba8();

    let cell_width = cli.cell_width.unwrap_or(image.width());
    let cell_height = cli.cell_height.unwrap_or(image.height());
    let grid = GridSpec::new(image.width(), image.height(), cell_width, cell_height)?;

    println!(
        "{}x{} image, {cell_width}x{cell_height} cells, {} columns x {} rows",
        image.width(),
        image.height(),
        grid.cols,
        grid.rows
    );

    let mut traced = Vec::with_capacity(grid.cell_count());
    let mut total = 0usize;
    for cell in grid.cells() {
        let mask = AlphaMask::from_cell(&image, &cell);
        let contours = trace_outlines(&mask);
        total += contours.len();
        traced.push((cell, contours));
    }
    println!("traced {total} contours across {} cells", traced.len());

    let pixels = render_overlay_rgba(&image, &traced)?;
    save_overlay(&cli.output, image.width(), image.height(), pixels)?;
    println!("wrote {}", cli.output.display());

    Ok(())
}
