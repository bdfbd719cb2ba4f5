//! Command-line interface for rendering text canvases and sticker sheets

use crate::glyph::font::FontLibrary;
use crate::io::configuration::{
    DEFAULT_BOUNDARY_PERCENT, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_DENSITY,
    DEFAULT_RENDER_OUTPUT, DEFAULT_SEED, DEFAULT_SHEET_OUTPUT, MAX_DENSITY,
};
use crate::io::error::Result;
use crate::io::font::{load_font_dir, load_uploaded_fonts};
use crate::io::image::{load_images, save_png};
use crate::io::progress::RenderProgress;
use crate::io::style::{GlyphSource, StyleConfig, parse_hex_color};
use crate::layout::engine::{EngineConfig, LayoutEngine};
use crate::layout::sheet::PageSpec;
use crate::render::RenderReport;
use crate::source::ImageSource;
use clap::{Args, Parser, Subcommand};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "typocut")]
#[command(
    author,
    version,
    about = "Render text as generative glyph tiles cut from gradients or photos"
)]
/// Command-line arguments for the typography renderer
pub struct Cli {
    /// What to render
    #[command(subcommand)]
    pub command: Command,

    /// Suppress progress and summary output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log debug details (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Render targets
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lay out text on a canvas and save it as PNG
    Render(RenderArgs),
    /// Pack the alphabet onto an A4 sticker sheet and save it as PNG
    Sheet(SheetArgs),
}

/// Arguments for `render`
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Text to render (upper-cased and truncated to capacity)
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Canvas width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: u32,

    /// Canvas boundary as a fraction of canvas width
    #[arg(long, default_value_t = DEFAULT_BOUNDARY_PERCENT)]
    pub boundary: f64,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_RENDER_OUTPUT)]
    pub output: PathBuf,

    #[command(flatten)]
    /// Style, source and randomness options
    pub common: CommonArgs,
}

/// Arguments for `sheet`
#[derive(Args, Debug)]
pub struct SheetArgs {
    /// Page margin as a fraction of page width
    #[arg(long, default_value_t = DEFAULT_BOUNDARY_PERCENT)]
    pub margin: f64,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_SHEET_OUTPUT)]
    pub output: PathBuf,

    #[command(flatten)]
    /// Style, source and randomness options
    pub common: CommonArgs,
}

/// Options shared by every render target
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// TOML style file; flags below override its values
    #[arg(long, value_name = "TOML")]
    pub style: Option<PathBuf>,

    /// Cell width in pixels (20-200, step 5)
    #[arg(long)]
    pub cell_width: Option<u32>,

    /// Cell height in pixels (20-200, step 5)
    #[arg(long)]
    pub cell_height: Option<u32>,

    /// Vertex jitter and distortion intensity (0-0.5)
    #[arg(long)]
    pub noise: Option<f64>,

    /// Letter spacing factor (0-1)
    #[arg(long)]
    pub spacing: Option<f64>,

    /// Line spacing factor (0.1-0.5)
    #[arg(long)]
    pub line_spacing: Option<f64>,

    /// Tile margin factor
    #[arg(long)]
    pub margin_factor: Option<f64>,

    /// Cut glyphs out of a filled block
    #[arg(short, long)]
    pub invert: bool,

    /// Glyph shape provider
    #[arg(short, long, value_enum)]
    pub glyph_source: Option<GlyphSource>,

    /// Gradient start color (#RGB or #RRGGBB)
    #[arg(long, value_parser = parse_color_arg)]
    pub start_color: Option<[u8; 3]>,

    /// Gradient end color (#RGB or #RRGGBB)
    #[arg(long, value_parser = parse_color_arg)]
    pub end_color: Option<[u8; 3]>,

    /// Uploaded source images
    #[arg(long = "image", value_name = "FILE")]
    pub images: Vec<PathBuf>,

    /// Image collection to draw from (defaults to uploads when any are given)
    #[arg(long, value_enum)]
    pub source: Option<ImageSource>,

    /// Uploaded font files
    #[arg(long = "font", value_name = "FILE")]
    pub fonts: Vec<PathBuf>,

    /// Directory of built-in fonts
    #[arg(long, value_name = "DIR")]
    pub builtin_font_dir: Option<PathBuf>,

    /// Random seed for reproducible output
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output pixels per layout pixel
    #[arg(short, long, default_value_t = DEFAULT_DENSITY,
          value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DENSITY)))]
    pub density: u32,
}

fn parse_color_arg(value: &str) -> std::result::Result<[u8; 3], String> {
    parse_hex_color(value).map_err(|e| e.to_string())
}

impl CommonArgs {
    /// Style from the style file (or defaults) with flag overrides, sanitized
    ///
    /// # Errors
    ///
    /// Returns an error if the style file cannot be loaded
    pub fn resolve_style(&self) -> Result<StyleConfig> {
        let base = match &self.style {
            Some(path) => StyleConfig::from_toml_file(path)?,
            None => StyleConfig::default(),
        };
        let style = StyleConfig {
            cell_width: self.cell_width.unwrap_or(base.cell_width),
            cell_height: self.cell_height.unwrap_or(base.cell_height),
            noise_amount: self.noise.unwrap_or(base.noise_amount),
            spacing_factor: self.spacing.unwrap_or(base.spacing_factor),
            line_spacing_factor: self.line_spacing.unwrap_or(base.line_spacing_factor),
            margin_factor: self.margin_factor.unwrap_or(base.margin_factor),
            inverted_mask: self.invert || base.inverted_mask,
            glyph_source: self.glyph_source.unwrap_or(base.glyph_source),
            start_color: self.start_color.unwrap_or(base.start_color),
            end_color: self.end_color.unwrap_or(base.end_color),
        };
        Ok(style.sanitize())
    }

    /// Build an engine with fonts and images loaded and the source selected
    ///
    /// # Errors
    ///
    /// Returns an error if the style file or built-in font directory cannot be read
    pub fn build_engine(&self, config: EngineConfig) -> Result<LayoutEngine> {
        let mut engine = LayoutEngine::new(config, self.resolve_style()?);

        let built_in = match &self.builtin_font_dir {
            Some(dir) => load_font_dir(dir)?,
            None => Vec::new(),
        };
        let uploaded = load_uploaded_fonts(&self.fonts);
        if !built_in.is_empty() || !uploaded.is_empty() {
            engine.set_fonts(FontLibrary::new(built_in, uploaded));
        }

        if !self.images.is_empty() {
            engine.set_uploaded_images(load_images(&self.images));
        }
        let wanted = self.source.unwrap_or(if self.images.is_empty() {
            ImageSource::Gradients
        } else {
            ImageSource::Uploaded
        });
        engine.select_source(wanted);
        Ok(engine)
    }
}

/// Runs one parsed command line
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if inputs cannot be loaded or the output cannot be saved
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Command::Render(args) => self.render(args),
            Command::Sheet(args) => self.sheet(args),
        }
    }

    // The summary line is the command's user-facing output
    #[allow(clippy::print_stdout)]
    fn render(&self, args: &RenderArgs) -> Result<()> {
        let config = EngineConfig {
            canvas_width: args.width,
            canvas_height: args.height,
            boundary_percent: args.boundary,
            seed: args.common.seed,
        };
        let mut engine = args.common.build_engine(config)?;
        let kept = engine.set_text(&args.text);
        info!(
            "Rendering {kept} of {} characters (capacity {})",
            args.text.chars().count(),
            engine.capacity().total()
        );

        let progress = RenderProgress::new(engine.tiles().len(), "Rendering", !self.cli.quiet);
        let (image, report) = engine.render(args.common.density, &progress)?;
        save_png(&image, &args.output)?;

        if !self.cli.quiet {
            println!("{} -> {}", summary(&report), args.output.display());
        }
        Ok(())
    }

    // The summary line is the command's user-facing output
    #[allow(clippy::print_stdout)]
    fn sheet(&self, args: &SheetArgs) -> Result<()> {
        let config = EngineConfig {
            seed: args.common.seed,
            ..EngineConfig::default()
        };
        let mut engine = args.common.build_engine(config)?;
        let page = PageSpec::a4(args.margin);
        let (layout, image, report) =
            engine.render_sheet(&page, args.common.density, !self.cli.quiet)?;
        save_png(&image, &args.output)?;

        if !self.cli.quiet {
            println!(
                "Sheet {}x{} = {} letters, {:.1}x{:.1} cm each{}",
                layout.cols,
                layout.rows,
                layout.capacity,
                layout.width_cm,
                layout.height_cm,
                if layout.fits {
                    ""
                } else {
                    " (alphabet does not fit)"
                }
            );
            println!("{} -> {}", summary(&report), args.output.display());
        }
        Ok(())
    }
}

fn summary(report: &RenderReport) -> String {
    format!(
        "Rendered {} tiles ({} skipped, {} placeholders, {} failed)",
        report.rendered(),
        report.skipped(),
        report.placeholders(),
        report.failures()
    )
}
