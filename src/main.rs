use std::path::PathBuf;

use clap::Parser;

use asciify::config::Config;
use asciify::{
    decode_image, live, render_outputs, write_ascii_art, AsciiOptions, Destination,
    ImageConverter,
};

#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The path to an image file
    #[arg(long)]
    file: PathBuf,
    /// The width of the ASCII art, in characters
    #[arg(long)]
    width: Option<usize>,
    /// The height of the ASCII art, in lines
    #[arg(long)]
    height: Option<usize>,
    /// Reverse the ramp for dark-background terminals (`--invert=false` overrides the config file)
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    invert: Option<bool>,
    /// Also write the art to this text file
    #[arg(long)]
    output: Option<PathBuf>,
    /// Reverse the ramp for the copy written to --output
    #[arg(long, requires = "output")]
    file_invert: bool,
    /// Pick the size interactively before rendering
    #[arg(long)]
    live: bool,
    /// Path to a TOML config file (defaults to ./asciify.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Don't print the art to stdout
    #[arg(long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

impl Args {
    /// Options from the command line, then the config file, then the defaults.
    fn render_options(&self, config: &Config) -> AsciiOptions {
        config.resolve(self.width, self.height, self.invert)
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(args.config.as_deref())?;
    let mut options = args.render_options(&config);

    let image = decode_image(&args.file)?;
    let converter = ImageConverter::new(&image);

    if args.live {
        options = live::run(&converter, options)?;
    }

    let file_invert = args.output.as_ref().map(|_| args.file_invert);
    let rendered = render_outputs(&converter, options, !args.quiet, file_invert)?;

    if let Some(art) = &rendered.console {
        write_ascii_art(art, &Destination::Stdout)?;
    }

    if let (Some(path), Some(art)) = (args.output, &rendered.file) {
        if let Err(e) = write_ascii_art(art, &Destination::File(path)) {
            log::warn!("rendered art was not saved: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
