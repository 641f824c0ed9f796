//! Command-line surface: argument parsing, config merging, and the
//! interactive profile prompt.

use clap::Parser;
use dialoguer::{theme::ColorfulTheme, Select};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use crate::config::{load_config, BatchConfig, ConfigFile};
use crate::errors::{LemmatizerError, Result};
use crate::pipeline::Profile;

#[derive(Parser, Debug)]
#[command(
    name = "batch-lemmatizer",
    version,
    about = "Lemmatize every text file in a directory",
    long_about = "Splits each input file into paragraphs, runs them through an English \
                  analysis pipeline, and writes the lemmas of alphabetic non-stopword tokens \
                  one line per paragraph. The performance profile selects which stages run \
                  and whether files are processed on a worker pool."
)]
pub struct Cli {
    /// Directory containing the input text files
    #[arg(short, long, env = "LEMMATIZER_INPUT")]
    pub input: Option<PathBuf>,

    /// Directory for the processed files (created if missing)
    #[arg(short, long, env = "LEMMATIZER_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Performance profile, 1-5 (prompted for when omitted)
    #[arg(short, long)]
    pub profile: Option<Profile>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Worker threads for profiles 4-5 (default: all logical CPUs)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Stopword language
    #[arg(long)]
    pub language: Option<String>,

    /// Write a JSON run report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Merge flags with the optional config file.
    ///
    /// Flags win over the file. When neither names a profile, `prompt` is
    /// asked for one.
    pub fn resolve(&self, prompt: impl FnOnce() -> Result<Profile>) -> Result<BatchConfig> {
        let file = match &self.config {
            Some(path) => load_config(path)?,
            None => ConfigFile::default(),
        };

        let input = self
            .input
            .clone()
            .or_else(|| file.input_dir.clone())
            .ok_or_else(|| LemmatizerError::config("no input directory given"))?;
        let output = self
            .output
            .clone()
            .or_else(|| file.output_dir.clone())
            .ok_or_else(|| LemmatizerError::config("no output directory given"))?;
        let profile = match self.profile.or(file.profile) {
            Some(profile) => profile,
            None => prompt()?,
        };

        let mut config = file.apply_to(BatchConfig::new(input, output, profile));
        if self.threads.is_some() {
            config.threads = self.threads;
        }
        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        Ok(config)
    }
}

/// Ask for a profile on the terminal, or read a choice line from stdin
/// when it is not a terminal.
pub fn prompt_profile() -> Result<Profile> {
    if io::stdin().is_terminal() {
        let items: Vec<String> = Profile::ALL.iter().map(menu_line).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a performance profile")
            .items(&items)
            .default(2)
            .interact()
            .map_err(prompt_failed)?;
        return Ok(Profile::ALL[selection]);
    }

    let stdin = io::stdin();
    read_profile_choice(&mut stdin.lock(), &mut io::stdout())
}

/// Print the profile menu to `out` and parse one line from `input`.
pub fn read_profile_choice<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Profile> {
    writeln!(out, "Select a performance profile:").map_err(prompt_failed)?;
    for profile in Profile::ALL {
        writeln!(out, "{}", menu_line(&profile)).map_err(prompt_failed)?;
    }
    write!(out, "Enter your choice (1-5): ").map_err(prompt_failed)?;
    out.flush().map_err(prompt_failed)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(prompt_failed)?;
    line.parse()
}

fn prompt_failed(e: impl std::fmt::Display) -> LemmatizerError {
    LemmatizerError::config(format!("profile prompt failed: {}", e))
}

fn menu_line(profile: &Profile) -> String {
    format!(
        "{}: {} ({})",
        profile.selector(),
        profile.name(),
        profile.description()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["batch-lemmatizer"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn no_prompt() -> Result<Profile> {
        panic!("prompt should not be called")
    }

    #[test]
    fn test_flags_resolve_without_prompt() {
        let cli = parse(&["-i", "in", "-o", "out", "-p", "4", "-j", "3"]);
        let config = cli.resolve(no_prompt).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("in"));
        assert_eq!(config.profile, Profile::High);
        assert_eq!(config.threads, Some(3));
    }

    #[test]
    fn test_bad_profile_flag_rejected() {
        let argv = ["batch-lemmatizer", "-i", "in", "-o", "out", "-p", "6"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_missing_profile_prompts() {
        let cli = parse(&["-i", "in", "-o", "out"]);
        let config = cli.resolve(|| Ok(Profile::Moderate)).unwrap();
        assert_eq!(config.profile, Profile::Moderate);
    }

    #[test]
    fn test_missing_input_is_config_error() {
        let cli = parse(&["-o", "out", "-p", "1"]);
        let err = cli.resolve(no_prompt).unwrap_err();
        assert!(matches!(err, LemmatizerError::Config { .. }));
    }

    #[test]
    fn test_config_file_merged_under_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.toml");
        std::fs::write(
            &path,
            "input_dir = \"corpus\"\noutput_dir = \"lemmas\"\nprofile = \"2\"\nthreads = 8\n",
        )
        .unwrap();

        let cli = parse(&["-c", path.to_str().unwrap(), "-o", "elsewhere", "-j", "2"]);
        let config = cli.resolve(no_prompt).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("corpus"));
        assert_eq!(config.output_dir, PathBuf::from("elsewhere"));
        assert_eq!(config.profile, Profile::Moderate);
        assert_eq!(config.threads, Some(2));
    }

    #[test]
    fn test_log_levels() {
        assert_eq!(parse(&[]).log_level(), "warn");
        assert_eq!(parse(&["-vv"]).log_level(), "debug");
    }

    #[test]
    fn test_read_profile_choice() {
        let mut out = Vec::new();
        let profile = read_profile_choice(&mut Cursor::new("5\n"), &mut out).unwrap();
        assert_eq!(profile, Profile::Extreme);

        let menu = String::from_utf8(out).unwrap();
        assert!(menu.contains("1: Basic (Suitable for low-power devices like Raspberry Pi)"));
        assert!(menu.contains("Enter your choice (1-5): "));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_prompt_io_failure_is_config_error() {
        let err = read_profile_choice(&mut Cursor::new("1\n"), &mut BrokenPipe).unwrap_err();
        assert!(matches!(err, LemmatizerError::Config { .. }));
        assert!(err.to_string().contains("profile prompt failed"));
    }

    #[test]
    fn test_read_profile_choice_invalid() {
        let err = read_profile_choice(&mut Cursor::new("nine\n"), &mut Vec::new()).unwrap_err();
        assert!(matches!(err, LemmatizerError::Config { .. }));
    }
}
