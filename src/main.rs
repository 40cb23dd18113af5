#![doc = include_str!("../README.md")]
use ::lib::{get_screen_dimensions, setup_tracing, Platform, ScreenScan};
use anyhow::Result;
use structopt::StructOpt;
use tracing::debug;

#[derive(StructOpt, Debug)]
#[structopt(name = "screendims", about = "Print the primary display geometry")]
struct Args {
    /// Force a platform identifier (`win32`, `darwin` or `linux`) instead of
    /// auto-detection.
    #[structopt(long)]
    platform: Option<String>,

    /// Increase the output's verbosity level
    ///
    /// Pass many times to increase verbosity level, up to 2.
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,
}

fn level_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

#[paw::main]
fn main(args: Args) -> Result<()> {
    setup_tracing(level_filter(args.verbose))?;
    let info = match &args.platform {
        Some(identifier) => {
            let platform = Platform::from_identifier(identifier)?;
            debug!("Forcing platform {}", platform);
            ScreenScan::new(platform).screen_info()
        }
        None => get_screen_dimensions()?,
    };
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
