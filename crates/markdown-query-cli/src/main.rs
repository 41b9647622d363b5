//! markdown-query - query and rewrite Markdown documents from the shell
//!
//! Extractor commands print what they find; mutator commands print the
//! rewritten document, or write it back with `--in-place`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow, bail};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use markdown_query_config::Config;
use markdown_query_engine::{ElementSelector, MarkdownQuery, read_document, write_document};

const STDIN: &str = "-";

#[derive(Parser)]
#[command(name = "markdown-query", version, long_about = None)]
#[command(about = "Query and rewrite Markdown documents")]
#[command(after_help = AFTER_HELP)]
struct Cli {
    /// Config file to use instead of ~/.config/markdown-query/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Tag addressed by --id and --class selectors (default: div)
    #[arg(long, global = true, value_name = "TAG")]
    element_tag: Option<String>,

    #[command(subcommand)]
    command: Command,
}

const AFTER_HELP: &str = "\
EXAMPLES:
  markdown-query headers README.md
  markdown-query element README.md --id summary
  markdown-query links --json README.md
  cat notes.md | markdown-query list -
  markdown-query update-link README.md https://old.example https://new.example -i
  markdown-query delete-code-block README.md 0
";

#[derive(Subcommand)]
enum Command {
    /// Print the content of the elements matching a selector
    Element {
        #[command(flatten)]
        input: ReadArgs,
        #[command(flatten)]
        selector: SelectorArgs,
    },
    /// Print every inline link and bare URL as "url<TAB>text"
    Links {
        #[command(flatten)]
        input: ReadArgs,
    },
    /// Print every image as "url<TAB>alt"
    Images {
        #[command(flatten)]
        input: ReadArgs,
    },
    /// Print the alt text of the first image at URL
    ImageAlt {
        #[command(flatten)]
        input: ReadArgs,
        url: String,
    },
    /// Print fenced code blocks, or only the one at --index
    CodeBlocks {
        #[command(flatten)]
        input: ReadArgs,
        /// Zero-based block index
        #[arg(long, value_name = "N", allow_negative_numbers = true)]
        index: Option<isize>,
    },
    /// Print the text of every list item
    List {
        #[command(flatten)]
        input: ReadArgs,
    },
    /// Print the text of every header
    Headers {
        #[command(flatten)]
        input: ReadArgs,
    },
    /// Replace the content of the elements matching a selector
    UpdateElement {
        #[command(flatten)]
        output: WriteArgs,
        #[command(flatten)]
        selector: SelectorArgs,
        content: String,
    },
    /// Remove the elements matching a selector
    DeleteElement {
        #[command(flatten)]
        output: WriteArgs,
        #[command(flatten)]
        selector: SelectorArgs,
    },
    /// Point every link at OLD_URL to NEW_URL
    UpdateLink {
        #[command(flatten)]
        output: WriteArgs,
        old_url: String,
        new_url: String,
        /// Replacement link text; the current text is kept when omitted
        #[arg(long, value_name = "TEXT")]
        text: Option<String>,
    },
    /// Remove every link to URL
    DeleteLink {
        #[command(flatten)]
        output: WriteArgs,
        url: String,
    },
    /// Set the alt text of every image at URL
    UpdateImageAlt {
        #[command(flatten)]
        output: WriteArgs,
        url: String,
        alt: String,
    },
    /// Clear the alt text of every image at URL
    DeleteImageAlt {
        #[command(flatten)]
        output: WriteArgs,
        url: String,
    },
    /// Remove every image at URL
    DeleteImage {
        #[command(flatten)]
        output: WriteArgs,
        url: String,
    },
    /// Rename every header whose text is OLD
    UpdateHeader {
        #[command(flatten)]
        output: WriteArgs,
        old: String,
        new: String,
    },
    /// Remove the text of every header matching TEXT
    DeleteHeader {
        #[command(flatten)]
        output: WriteArgs,
        text: String,
    },
    /// Rewrite every bullet item whose text is OLD
    UpdateListItem {
        #[command(flatten)]
        output: WriteArgs,
        old: String,
        new: String,
    },
    /// Remove the fenced code block at INDEX
    DeleteCodeBlock {
        #[command(flatten)]
        output: WriteArgs,
        #[arg(allow_negative_numbers = true)]
        index: isize,
    },
}

#[derive(Args)]
struct ReadArgs {
    /// Markdown document, or "-" for stdin
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct WriteArgs {
    /// Markdown document, or "-" for stdin
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Write the result back to FILE instead of stdout
    #[arg(short, long)]
    in_place: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct SelectorArgs {
    /// Address the first element with this id
    #[arg(long, value_name = "ID")]
    id: Option<String>,

    /// Address every element with this class
    #[arg(long, value_name = "CLASS")]
    class: Option<String>,

    /// Address every element with this tag name
    #[arg(long, value_name = "TAG")]
    tag: Option<String>,
}

impl SelectorArgs {
    fn into_selector(self) -> ElementSelector {
        match (self.id, self.class, self.tag) {
            (Some(id), _, _) => ElementSelector::Id(id),
            (_, Some(class), _) => ElementSelector::Class(class),
            (_, _, tag) => ElementSelector::Tag(tag.unwrap_or_default()),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Status {
    Done,
    NotFound,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    match run(cli, &mut stdout.lock()) {
        Ok(Status::Done) => ExitCode::SUCCESS,
        Ok(Status::NotFound) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(log::LevelFilter::Warn);
    }
    builder.init();
}

fn run(cli: Cli, out: &mut impl Write) -> Result<Status> {
    let config = load_config(cli.config.as_deref())?;
    let in_place = config.in_place;
    let query = MarkdownQuery::with_element_tag(cli.element_tag.unwrap_or(config.element_tag));
    log::debug!("Addressing elements as <{}>", query.element_tag());

    match cli.command {
        Command::Element { input, selector } => {
            let markdown = read_input(&input.file)?;
            let selector = selector.into_selector();
            let found = query.get_elements(&markdown, &selector);
            match selector {
                ElementSelector::Id(_) => print_one(out, found.into_iter().next(), input.json),
                _ => print_all(out, &found, input.json, String::clone),
            }
        }
        Command::Links { input } => {
            let markdown = read_input(&input.file)?;
            print_all(out, &query.get_links(&markdown), input.json, |link| {
                format!("{}\t{}", link.url, link.text)
            })
        }
        Command::Images { input } => {
            let markdown = read_input(&input.file)?;
            print_all(out, &query.get_images(&markdown), input.json, |image| {
                format!("{}\t{}", image.url, image.alt)
            })
        }
        Command::ImageAlt { input, url } => {
            let markdown = read_input(&input.file)?;
            print_one(out, query.get_image_alt(&markdown, &url), input.json)
        }
        Command::CodeBlocks { input, index } => {
            let markdown = read_input(&input.file)?;
            match index {
                Some(index) => print_one(
                    out,
                    query.get_code_block_by_index(&markdown, index),
                    input.json,
                ),
                None => print_all(
                    out,
                    &query.get_code_blocks(&markdown),
                    input.json,
                    String::clone,
                ),
            }
        }
        Command::List { input } => {
            let markdown = read_input(&input.file)?;
            print_all(out, &query.get_list_items(&markdown), input.json, String::clone)
        }
        Command::Headers { input } => {
            let markdown = read_input(&input.file)?;
            print_all(out, &query.get_headers(&markdown), input.json, String::clone)
        }
        Command::UpdateElement {
            output,
            selector,
            content,
        } => mutate(out, &output, in_place, |markdown| {
            query.update_elements(markdown, &selector.into_selector(), &content)
        }),
        Command::DeleteElement { output, selector } => mutate(out, &output, in_place, |markdown| {
            query.delete_elements(markdown, &selector.into_selector())
        }),
        Command::UpdateLink {
            output,
            old_url,
            new_url,
            text,
        } => mutate(out, &output, in_place, |markdown| {
            query.update_link(markdown, &old_url, &new_url, text.as_deref())
        }),
        Command::DeleteLink { output, url } => mutate(out, &output, in_place, |markdown| {
            query.delete_link(markdown, &url)
        }),
        Command::UpdateImageAlt { output, url, alt } => {
            mutate(out, &output, in_place, |markdown| {
                query.update_image_alt(markdown, &url, &alt)
            })
        }
        Command::DeleteImageAlt { output, url } => mutate(out, &output, in_place, |markdown| {
            query.delete_image_alt(markdown, &url)
        }),
        Command::DeleteImage { output, url } => mutate(out, &output, in_place, |markdown| {
            query.delete_image(markdown, &url)
        }),
        Command::UpdateHeader { output, old, new } => mutate(out, &output, in_place, |markdown| {
            query.update_headers(markdown, &old, &new)
        }),
        Command::DeleteHeader { output, text } => mutate(out, &output, in_place, |markdown| {
            query.delete_headers(markdown, &text)
        }),
        Command::UpdateListItem { output, old, new } => {
            mutate(out, &output, in_place, |markdown| {
                query.update_list_items(markdown, &old, &new)
            })
        }
        Command::DeleteCodeBlock { output, index } => mutate(out, &output, in_place, |markdown| {
            query.delete_code_block_by_index(markdown, index)
        }),
    }
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?
            .ok_or_else(|| anyhow!("Config file not found at {}", path.display()))?,
        None => {
            log::debug!("Looking for config at {}", Config::config_path().display());
            Config::load()?.unwrap_or_default()
        }
    };
    Ok(config)
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN {
        return io::read_to_string(io::stdin()).context("Failed to read document from stdin");
    }
    read_document(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn mutate(
    out: &mut impl Write,
    args: &WriteArgs,
    in_place_by_default: bool,
    rewrite: impl FnOnce(&str) -> String,
) -> Result<Status> {
    let from_stdin = args.file.as_os_str() == STDIN;
    if args.in_place && from_stdin {
        bail!("--in-place needs a FILE, not stdin");
    }

    let markdown = read_input(&args.file)?;
    let updated = rewrite(&markdown);

    if (args.in_place || in_place_by_default) && !from_stdin {
        if updated == markdown {
            log::debug!("{} unchanged, not rewriting", args.file.display());
            return Ok(Status::Done);
        }
        write_document(&args.file, &updated)
            .with_context(|| format!("Failed to write {}", args.file.display()))?;
        log::debug!("Wrote {}", args.file.display());
    } else {
        out.write_all(updated.as_bytes())?;
    }
    Ok(Status::Done)
}

fn print_one(out: &mut impl Write, value: Option<String>, json: bool) -> Result<Status> {
    let status = if value.is_some() {
        Status::Done
    } else {
        Status::NotFound
    };
    if json {
        write_json(out, &value)?;
    } else if let Some(value) = value {
        writeln!(out, "{value}")?;
    }
    Ok(status)
}

fn print_all<T: Serialize>(
    out: &mut impl Write,
    values: &[T],
    json: bool,
    line: impl Fn(&T) -> String,
) -> Result<Status> {
    if json {
        write_json(out, values)?;
    } else {
        for value in values {
            writeln!(out, "{}", line(value))?;
        }
    }
    Ok(Status::Done)
}

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
