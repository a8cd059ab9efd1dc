use clap::Parser;
use std::path::PathBuf;

use kbdsim_core::Platform;
use kdf2layout::convert_definition;

#[derive(Parser, Debug)]
#[command(author, version, about = "Keyboard definition to layout converter", long_about = None)]
struct Args {
    /// Input definition file (YAML or JSON)
    input: PathBuf,

    /// Output layout JSON path (defaults to input with .layout.json extension)
    output: Option<PathBuf>,

    /// Target platform (windows, macos, chromeos, ios, android)
    #[arg(short, long)]
    platform: Platform,

    /// Device variant to resolve (mobile platforms)
    #[arg(long)]
    variant: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Determine output path
    let output = args.output.unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_extension("layout.json");
        path
    });

    if args.verbose {
        println!(
            "Converting {} for {}{}",
            args.input.display(),
            args.platform,
            args.variant
                .as_deref()
                .map(|v| format!(" ({v})"))
                .unwrap_or_default()
        );
    }

    match convert_definition(&args.input, &output, args.platform, args.variant.as_deref()) {
        Ok(()) => {
            if args.verbose {
                println!("Wrote {}", output.display());
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
