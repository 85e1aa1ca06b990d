use clap::Parser;
use flexi_logger::Logger;
use std::io;
use std::process::ExitCode;
use wallcal::calendar::write_year_calendar;
use wallcal::config::{Args, Settings, write_theme_list};

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.list_themes {
        write_theme_list(&mut io::stdout())?;
        return Ok(());
    }

    let settings = Settings::from_args(&args)?;
    let mut input = io::stdin().lock();
    let mut out = io::stdout();
    let (opts, output) = settings.resolve(&mut input, &mut out)?;

    let path = write_year_calendar(&opts, &output)?;
    println!("Saved calendar for {} to {}", opts.year, path.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG wins over -v
    let _logger = match Logger::try_with_env_or_str(args.log_level()).and_then(|l| l.start()) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Error: cannot start logger: {}", e);
            return ExitCode::FAILURE;
        },
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
