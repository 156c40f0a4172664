use anyhow::{bail, Context, Result};
use clap::{Arg, Command};
use std::path::{Path, PathBuf};

mod xbm;
use xbm::{const_name, pack_xbm, render_module, XbmImage};

const DEFAULT_BYTES_PER_LINE: &str = "19";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("xbm-gen")
        .about("Converts a monochrome image into a Rust XBM asset module")
        .arg(
            Arg::new("image")
                .value_name("IMAGE")
                .help("Input image (BMP or PNG); any non-black pixel is lit")
                .required(true),
        )
        .arg(
            Arg::new("name")
                .value_name("NAME")
                .help("Constant name (defaults to the upper-cased file stem)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write the module to FILE instead of stdout"),
        )
        .arg(
            Arg::new("bytes-per-line")
                .long("bytes-per-line")
                .value_name("N")
                .help("Hex bytes per emitted line")
                .default_value(DEFAULT_BYTES_PER_LINE),
        )
        .get_matches();

    let input = PathBuf::from(
        matches
            .get_one::<String>("image")
            .context("missing input image")?,
    );
    let name = match matches.get_one::<String>("name") {
        Some(name) => const_name(name),
        None => const_name(
            input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default(),
        ),
    };
    let bytes_per_line: usize = matches
        .get_one::<String>("bytes-per-line")
        .map(String::as_str)
        .unwrap_or(DEFAULT_BYTES_PER_LINE)
        .parse()
        .context("--bytes-per-line must be a positive integer")?;
    if bytes_per_line == 0 {
        bail!("--bytes-per-line must be a positive integer");
    }

    let packed = load_xbm(&input)?;
    log::info!(
        "{}: {}x{}, {} lit pixels, {} bytes",
        input.display(),
        packed.width,
        packed.height,
        packed.lit(),
        packed.data.len()
    );

    let source = input
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let module = render_module(&packed, &name, source, bytes_per_line);

    match matches.get_one::<String>("output") {
        Some(path) => {
            std::fs::write(path, module).with_context(|| format!("failed to write {path}"))?;
            log::info!("wrote {name} to {path}");
        }
        None => print!("{module}"),
    }

    Ok(())
}

/// Decode an image file and pack it as XBM
fn load_xbm(path: &Path) -> Result<XbmImage> {
    let image = image::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .to_rgba8();

    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        bail!("{} has no pixels", path.display());
    }

    Ok(pack_xbm(width, height, |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        a != 0 && (r | g | b) != 0
    }))
}
