//! Command line, config file and interactive prompts.
//!
//! Settings come from three places, highest priority first: command line
//! flags, the YAML config file named by `--config`, and finally the
//! interactive prompts for anything still missing.

use crate::calendar::builder::{
    CalendarOptions, DEFAULT_FONT, DEFAULT_FONT_SIZE_PT, check_font_size, default_output_name,
};
use crate::calendar::month::check_year;
use crate::calendar::theme::{self, Theme, Tone};
use crate::common::{Error, Result};
use clap::{ArgAction, Parser};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Generate a one-slide PowerPoint wall calendar for a whole year
#[derive(Parser, Debug, Default)]
#[command(
    name = "wallcal",
    about = "Generate a one-slide PowerPoint wall calendar for a whole year",
    long_about = "Lays out all twelve months of a year as a 4 x 3 grid of tables on a single\n\
                  widescreen slide and saves it as Calendar_<YEAR>.pptx.",
    version
)]
pub struct Args {
    /// Calendar year (1-9999); prompted for when omitted
    #[arg(value_name = "YEAR")]
    pub year: Option<i32>,

    /// Header color theme, by menu number or name
    #[arg(short, long, value_name = "ID|NAME")]
    pub theme: Option<String>,

    /// Output file [default: Calendar_<YEAR>.pptx]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// YAML config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the available themes and exit
    #[arg(long)]
    pub list_themes: bool,

    /// Never prompt; fall back to the current year and the Blue theme
    #[arg(long)]
    pub no_input: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log spec for flexi_logger.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// A theme given in YAML, either as `theme: 3` or `theme: Teal`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ThemeValue {
    Id(u32),
    Name(String),
}

impl ThemeValue {
    fn into_choice(self) -> String {
        match self {
            ThemeValue::Id(id) => id.to_string(),
            ThemeValue::Name(name) => name,
        }
    }
}

/// Contents of the optional YAML config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub year: Option<i32>,
    pub theme: Option<ThemeValue>,
    pub output: Option<PathBuf>,
    pub font: Option<String>,
    pub font_size: Option<f64>,
}

impl FileConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_saphyr::from_str(text).map_err(|e| Error::Config(format!("invalid config file: {}", e)))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let config = Self::from_yaml(&text)?;
        debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

/// Command line merged over the config file; `None` means "ask".
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub year: Option<i32>,
    pub theme: Option<String>,
    pub output: Option<PathBuf>,
    pub font: String,
    pub font_size: f64,
    pub interactive: bool,
}

impl Settings {
    pub fn merge(args: &Args, file: FileConfig) -> Result<Self> {
        let font_size = file.font_size.unwrap_or(DEFAULT_FONT_SIZE_PT);
        check_font_size(font_size)?;

        Ok(Self {
            year: args.year.or(file.year),
            theme: args.theme.clone().or(file.theme.map(ThemeValue::into_choice)),
            output: args.output.clone().or(file.output),
            font: file.font.unwrap_or_else(|| DEFAULT_FONT.to_string()),
            font_size,
            interactive: !args.no_input,
        })
    }

    pub fn from_args(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(args, file)
    }

    /// Fill in whatever is still missing, prompting on `input`/`out` when
    /// interactive, and produce the calendar options plus output path.
    pub fn resolve<R: BufRead, W: Write>(
        self,
        input: &mut R,
        out: &mut W,
    ) -> Result<(CalendarOptions, PathBuf)> {
        let year = match self.year {
            Some(year) => year,
            None if self.interactive => prompt_year(input, out)?,
            None => current_year(),
        };
        check_year(year)?;

        let theme = match (&self.theme, self.interactive) {
            (Some(choice), _) => theme_or_default(choice, out)?,
            (None, true) => prompt_theme(input, out)?,
            (None, false) => theme::default_theme(),
        };
        writeln!(out, "Using {} theme", theme.name)?;

        let output = self.output.unwrap_or_else(|| PathBuf::from(default_output_name(year)));

        let mut opts = CalendarOptions::new(year).with_theme(theme);
        opts.font = self.font;
        opts.font_size_pt = self.font_size;
        Ok((opts, output))
    }
}

fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

fn read_answer<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::Config("unexpected end of input".to_string()));
    }
    Ok(line.trim().to_string())
}

pub fn prompt_year<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<i32> {
    let answer = read_answer(input, out, "Enter year (e.g. 2026): ")?;
    answer
        .parse()
        .map_err(|_| Error::Config(format!("invalid year {:?}", answer)))
}

pub fn print_theme_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\nChoose a color theme:")?;
    for (index, tone) in Tone::ALL.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}:", tone.heading())?;
        for theme in theme::by_tone(*tone) {
            writeln!(out, "  {}", theme)?;
        }
    }
    Ok(())
}

/// One line per theme for `--list-themes`: id, name, fill color, menu group.
pub fn write_theme_list<W: Write>(out: &mut W) -> Result<()> {
    for theme in theme::all() {
        writeln!(
            out,
            "{:>2}  {:<10} {}  {}",
            theme.id,
            theme.name,
            theme.color,
            theme.tone.heading()
        )?;
    }
    Ok(())
}

pub fn prompt_theme<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<&'static Theme> {
    print_theme_menu(out)?;
    let answer = read_answer(input, out, "\nEnter theme number (1-12, default is 1-Blue): ")?;
    if answer.is_empty() {
        return Ok(theme::default_theme());
    }
    theme_or_default(&answer, out)
}

/// Like [`theme::resolve`], but the fallback notice goes to `out` and the
/// log only records it at info level.
fn theme_or_default<W: Write>(choice: &str, out: &mut W) -> Result<&'static Theme> {
    if let Some(theme) = theme::find(choice) {
        return Ok(theme);
    }

    let fallback = theme::default_theme();
    writeln!(out, "Invalid choice, using {} theme", fallback.name)?;
    info!("unknown theme {:?}, falling back to {}", choice, fallback.name);
    Ok(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(settings: Settings, input: &str) -> (Result<(CalendarOptions, PathBuf)>, String) {
        let mut input = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = settings.resolve(&mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn settings(args: &[&str]) -> Settings {
        let args = Args::try_parse_from(std::iter::once("wallcal").chain(args.iter().copied())).unwrap();
        Settings::merge(&args, FileConfig::default()).unwrap()
    }

    #[test]
    fn test_parse_args() {
        let args = Args::try_parse_from(["wallcal", "2027", "-t", "teal", "-o", "out.pptx", "-vv"]).unwrap();
        assert_eq!(args.year, Some(2027));
        assert_eq!(args.theme.as_deref(), Some("teal"));
        assert_eq!(args.output, Some(PathBuf::from("out.pptx")));
        assert_eq!(args.log_level(), "debug");
        assert_eq!(Args::default().log_level(), "warn");
        assert!(Args::try_parse_from(["wallcal", "twenty"]).is_err());
    }

    #[test]
    fn test_yaml_config() {
        let config = FileConfig::from_yaml("year: 2030\ntheme: 3\nfont: Calibri\nfont_size: 10.5\n").unwrap();
        assert_eq!(config.year, Some(2030));
        assert_eq!(config.theme, Some(ThemeValue::Id(3)));
        assert_eq!(config.font.as_deref(), Some("Calibri"));
        assert_eq!(config.font_size, Some(10.5));

        let named = FileConfig::from_yaml("theme: Dark Gray\n").unwrap();
        assert_eq!(named.theme, Some(ThemeValue::Name("Dark Gray".to_string())));

        assert!(FileConfig::from_yaml("colour: red\n").is_err());
    }

    #[test]
    fn test_command_line_overrides_file() {
        let args = Args::try_parse_from(["wallcal", "2027", "--theme", "5"]).unwrap();
        let file = FileConfig {
            year: Some(2030),
            theme: Some(ThemeValue::Id(3)),
            output: Some(PathBuf::from("wall.pptx")),
            font: None,
            font_size: None,
        };
        let merged = Settings::merge(&args, file).unwrap();
        assert_eq!(merged.year, Some(2027));
        assert_eq!(merged.theme.as_deref(), Some("5"));
        assert_eq!(merged.output, Some(PathBuf::from("wall.pptx")));
        assert_eq!(merged.font, "Arial");
        assert_eq!(merged.font_size, 12.0);
    }

    #[test]
    fn test_font_size_limits() {
        let merge_size = |size: f64| {
            let file = FileConfig {
                font_size: Some(size),
                ..FileConfig::default()
            };
            Settings::merge(&Args::default(), file)
        };

        assert_eq!(merge_size(1.0).unwrap().font_size, 1.0);
        assert_eq!(merge_size(4000.0).unwrap().font_size, 4000.0);
        for size in [0.0, 0.001, 0.99, 4000.01, 1e12, -12.0, f64::INFINITY, f64::NAN] {
            assert!(matches!(merge_size(size), Err(Error::Config(_))), "size {}", size);
        }

        let file = FileConfig::from_yaml("font_size: 0.001\n").unwrap();
        assert!(Settings::merge(&Args::default(), file).is_err());
    }

    #[test]
    fn test_config_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallcal.yaml");
        fs::write(&path, "year: 2030\ntheme: Teal\noutput: wall.pptx\nfont: Calibri\nfont_size: 10\n").unwrap();
        let config = path.to_str().unwrap();

        let from_file = Settings::from_args(&Args::try_parse_from(["wallcal", "-c", config]).unwrap()).unwrap();
        assert_eq!(from_file.year, Some(2030));
        assert_eq!(from_file.theme.as_deref(), Some("Teal"));
        assert_eq!(from_file.output, Some(PathBuf::from("wall.pptx")));
        assert_eq!(from_file.font, "Calibri");
        assert_eq!(from_file.font_size, 10.0);

        // Command line flags win over the file
        let args = Args::try_parse_from(["wallcal", "2031", "--config", config, "-t", "9", "-o", "cli.pptx"]).unwrap();
        let (opts, output) = run(Settings::from_args(&args).unwrap(), "").0.unwrap();
        assert_eq!(opts.year, 2031);
        assert_eq!(opts.theme.name, "Gray");
        assert_eq!(opts.font, "Calibri");
        assert_eq!(output, PathBuf::from("cli.pptx"));
    }

    #[test]
    fn test_config_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.yaml");
        assert!(matches!(FileConfig::load(&missing), Err(Error::Config(_))));

        let bad = dir.path().join("bad.yaml");
        fs::write(&bad, "year: [2026\n").unwrap();
        assert!(matches!(FileConfig::load(&bad), Err(Error::Config(_))));

        let args = Args::try_parse_from(["wallcal", "-c", missing.to_str().unwrap()]).unwrap();
        assert!(Settings::from_args(&args).is_err());
    }

    #[test]
    fn test_theme_list() {
        let mut out = Vec::new();
        write_theme_list(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], " 1  Blue       #4682B4  Cool Tones");
        assert_eq!(lines[5], " 6  Orange     #FF8C00  Warm Tones");
        assert_eq!(lines[9], "10  Dark Gray  #404040  Neutral/Monochrome");
        assert_eq!(lines[11], "12  White      #FFFFFF  Neutral/Monochrome");
    }

    #[test]
    fn test_interactive_prompts() {
        let (result, output) = run(settings(&[]), "2026\n7\n");
        let (opts, path) = result.unwrap();
        assert_eq!(opts.year, 2026);
        assert_eq!(opts.theme.name, "Red");
        assert_eq!(path, PathBuf::from("Calendar_2026.pptx"));

        assert!(output.starts_with("Enter year (e.g. 2026): \nChoose a color theme:\nCool Tones:\n  1. Blue (Sky Blue)\n"));
        assert!(output.contains("\n\nWarm Tones:\n  5. Green\n"));
        assert!(output.contains("\n\nNeutral/Monochrome:\n"));
        assert!(output.contains("  10. Dark Gray\n"));
        assert!(output.contains("\nEnter theme number (1-12, default is 1-Blue): "));
        assert!(output.ends_with("Using Red theme\n"));
    }

    #[test]
    fn test_empty_and_invalid_theme_answers() {
        let (result, output) = run(settings(&["2026"]), "\n");
        assert_eq!(result.unwrap().0.theme.name, "Blue");
        assert!(!output.contains("Invalid choice"));

        let (result, output) = run(settings(&["2026"]), "99\n");
        assert_eq!(result.unwrap().0.theme.name, "Blue");
        assert!(output.contains("Invalid choice, using Blue theme\nUsing Blue theme\n"));
        assert_eq!(output.matches("Invalid choice").count(), 1);

        let (result, output) = run(settings(&["2026", "--theme", "magenta"]), "");
        assert_eq!(result.unwrap().0.theme.name, "Blue");
        assert_eq!(output, "Invalid choice, using Blue theme\nUsing Blue theme\n");
    }

    #[test]
    fn test_bad_year_input() {
        let (result, _) = run(settings(&[]), "next year\n");
        assert!(matches!(result, Err(Error::Config(_))));

        let (result, _) = run(settings(&[]), "");
        assert!(matches!(result, Err(Error::Config(_))));

        let (result, _) = run(settings(&["0", "--no-input"]), "");
        assert!(matches!(result, Err(Error::InvalidYear(0))));
    }

    #[test]
    fn test_no_input_uses_defaults() {
        let (result, output) = run(settings(&["--no-input", "-o", "x.pptx"]), "");
        let (opts, path) = result.unwrap();
        assert_eq!(opts.year, current_year());
        assert_eq!(opts.theme.id, "1");
        assert_eq!(path, PathBuf::from("x.pptx"));
        assert_eq!(output, "Using Blue theme\n");
    }
}
