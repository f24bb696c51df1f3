//! Command-line driver: reads a rendered discography page and writes the
//! studio albums as JSON.
//!
//! ```text
//! discography [OPTIONS] [INPUT] [OUTPUT]
//!
//!   INPUT    saved page HTML, `-` or omitted for stdin
//!   OUTPUT   JSON file, default albums.json
//!
//!   --section <id>     subsection anchor id (default Studio_albums)
//!   --base-url <url>   prefix for album links (default https://en.wikipedia.org/)
//!   --page-url <url>   URL the page was rendered from, for the log
//!   --pretty           indent the JSON
//!   --drop-trailing    drop the last node of a subsection left open at the end of the page
//! ```
//!
//! Set `RUST_LOG=debug` to trace the scrape.

use std::env;
use std::error::Error;
use std::io;
use std::path::PathBuf;

use wiki_discography::sink::{self, FileSource, JsonFileSink, PageSource, ReaderSource};
use wiki_discography::Options;

const USAGE: &str = "Usage: discography [--section <id>] [--base-url <url>] [--page-url <url>] [--pretty] [--drop-trailing] [INPUT|-] [OUTPUT]";

#[derive(Debug)]
struct Cli {
    input: Option<PathBuf>,
    options: Options,
}

#[derive(Debug)]
enum Command {
    Help,
    Run(Cli),
}

/// Parse the arguments that follow the program name.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, Box<dyn Error>> {
    let mut options = Options::default();
    let mut positional = Vec::new();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--section" => options.section_id = args.next().ok_or("Missing value for --section")?,
            "--base-url" => options.base_url = args.next().ok_or("Missing value for --base-url")?,
            "--page-url" => {
                options.page_url = Some(args.next().ok_or("Missing value for --page-url")?);
            }
            "--pretty" => options.pretty_json = true,
            "--drop-trailing" => options.drop_trailing_node = true,
            "-h" | "--help" => return Ok(Command::Help),
            s if s.starts_with("--") => return Err(format!("Unknown arg: {s}\n{USAGE}").into()),
            _ => positional.push(a),
        }
    }

    if positional.len() > 2 {
        return Err(format!("Too many arguments\n{USAGE}").into());
    }

    let mut positional = positional.into_iter();
    let input = positional.next().filter(|p| p != "-").map(PathBuf::from);
    if let Some(out) = positional.next() {
        options.output_path = PathBuf::from(out);
    }

    Ok(Command::Run(Cli { input, options }))
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{USAGE}");
            return Ok(());
        }
        Command::Run(cli) => cli,
    };
    cli.options.validate()?;

    let mut source: Box<dyn PageSource> = match cli.input {
        Some(ref path) => Box::new(FileSource::new(path)),
        None => Box::new(ReaderSource::new(io::stdin().lock())),
    };
    let mut sink = JsonFileSink::from_options(&cli.options);

    let result = sink::run(source.as_mut(), &mut sink, &cli.options)?;

    eprintln!(
        "parsing completed: {} album(s) from {} table(s), {} warning(s) -> {}",
        result.albums.len(),
        result.tables,
        result.warnings.len(),
        sink.path().display()
    );

    Ok(())
}
