//! Write an HTML page showing gradients, the Solarized palettes and
//! accents adjusted for contrast on dark and light backgrounds.
//!
//! Usage: `cargo run --example contrast [OUTPUT] [RATIO]`
//! (defaults: `contrast.html`, 4.5).  Set `RUST_LOG=trace` to follow
//! the contrast searches.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use contrast_brewery::{ColorRange, ContrastMode, Palette, RGBColor};
use rgb::{RGB, RGB8};
use tracing::info;
use tracing_subscriber::EnvFilter;

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 c.to_hex())?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    // Luminance strip.
    for c in colors {
        let l = c.luminance();
        let gray = RGB8::from_rgb(RGB { r: l, g: l, b: l });
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 gray.to_rgb_string())?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn range(fh: &mut impl Write, g: impl ColorRange<RGB8>, n: usize,
         width: u32, comment: &str) -> Result<(), Err> {
    let colors = g.sample(n)?.into_colors();
    table_of_colors(fh, &colors, width, comment)
}

fn gradient(fh: &mut impl Write, c0: &str, c1: &str, n: usize,
            width: u32) -> Result<(), Err> {
    let c0 = RGB8::from_hex(c0)?;
    let c1 = RGB8::from_hex(c1)?;
    range(fh, c0.gradient(&c1), n, width,
          &format!("{} → {}", c0.to_hex(), c1.to_hex()))
}

/// Text sample of `fg` on `bg` with its contrast ratio.
fn swatch(fh: &mut impl Write, fg: RGB8, bg: RGB8) -> Result<(), Err> {
    writeln!(fh, "  <td style=\"padding: 4px 10px; color: {}; \
                  background-color: {}\">{} ({:.2}:1)</td>",
             fg.to_hex(), bg.to_hex(), fg.to_hex(), fg.contrast_ratio(&bg))?;
    Ok(())
}

fn contrast(fh: &mut impl Write, ratio: f64) -> Result<(), Err> {
    let base = RGB8::solarized_base().into_colors();
    let (dark, light) = (base[0], base[base.len() - 1]);
    let black = RGB8::new(0, 0, 0);
    let white = RGB8::new(255, 255, 255);
    writeln!(fh, "<table style=\"border-spacing: 0px\">")?;
    for &accent in RGB8::solarized_accents().colors() {
        let on_dark = Palette::new(vec![dark, accent, white])?
            .traverse_until_contrast(ratio, ContrastMode::Both);
        let on_light = Palette::new(vec![light, accent, black])?
            .traverse_until_contrast(ratio, ContrastMode::Both);
        info!(accent = %accent.to_hex(), on_dark = %on_dark.to_hex(),
              on_light = %on_light.to_hex(), "adjusted accent");
        writeln!(fh, "<tr>")?;
        swatch(fh, accent, dark)?;
        swatch(fh, on_dark, dark)?;
        swatch(fh, accent, light)?;
        swatch(fh, on_light, light)?;
        writeln!(fh, "</tr>")?;
    }
    writeln!(fh, "</table>")?;
    Ok(())
}


fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "contrast.html".to_string());
    let ratio: f64 = match args.next() {
        Some(r) => r.parse()?,
        None => 4.5,
    };
    info!(%path, ratio, "writing contrast demo");

    let mut fh = BufWriter::new(File::create(&path)?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>contrast-brewery: {ratio}:1</title>\n\
                  </head>\n\
                  <body>")?;
    writeln!(fh, "<h3>Gradients</h3>")?;
    gradient(&mut fh, "#5e0063", "#ffebaa", 10, 43)?;
    gradient(&mut fh, "#5e0063", "#ffebaa", 150, 1)?;
    gradient(&mut fh, "#ff0000", "#0000ff", 150, 1)?;
    gradient(&mut fh, "#000000", "#ffffff", 150, 1)?;

    writeln!(fh, "<h3>Solarized</h3>")?;
    for (comment, p) in [("base", RGB8::solarized_base()),
                         ("accents", RGB8::solarized_accents())] {
        table_of_colors(&mut fh, p.colors(), 40,
                        &format!("{comment} ({} colors)", p.len()))?;
    }
    range(&mut fh, RGB8::solarized_base().gradient(), 128, 1,
          "base (interpolated)")?;

    writeln!(fh, "<h3>Accents at {ratio}:1 (dark, adjusted, light, adjusted)</h3>")?;
    contrast(&mut fh, ratio)?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
