use clap::Parser;
use log::{debug, info};
use selchain_lib::json::{self, JsonError};
use selchain_lib::selector::{Combinator, PartKind, SelectorChain, SelectorError};
use serde::Serialize;
use thiserror::Error;

#[derive(Parser)]
#[command(name = "selchain")]
#[command(about = "Build an order-checked CSS selector from its parts")]
struct Args {
    /// Selector parts as `kind=value` (element, id, class, attr, pseudo-class,
    /// pseudo-element). A bare `>`, `+`, `~` or `_` (descendant) starts a new
    /// compound joined to the previous one.
    #[arg(required = true)]
    parts: Vec<String>,

    /// Print the selector and its fragments as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("expected `kind=value`, got `{0}`")]
    MalformedPart(String),

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error(transparent)]
    Json(#[from] JsonError),
}

#[derive(Serialize)]
struct Output<'a> {
    selector: &'a str,
    fragments: &'a [String],
}

/// One command-line token.
enum Token {
    Part(PartKind, String),
    Join(Combinator),
}

fn parse_token(raw: &str) -> Result<Token, CliError> {
    if raw == "_" {
        return Ok(Token::Join(Combinator::Descendant));
    }
    if let Ok(combinator) = raw.parse::<Combinator>() {
        // `""` and whitespace also parse as descendant; only accept symbols here.
        if !raw.trim().is_empty() {
            return Ok(Token::Join(combinator));
        }
    }
    let (kind, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::MalformedPart(raw.to_string()))?;
    Ok(Token::Part(kind.parse::<PartKind>()?, value.to_string()))
}

/// Fold the tokens into a single chain, combining left to right.
fn build(parts: &[String]) -> Result<SelectorChain, CliError> {
    let mut pending: Option<(SelectorChain, Combinator)> = None;
    let mut current = SelectorChain::new();

    for raw in parts {
        match parse_token(raw)? {
            Token::Part(kind, value) => {
                current = current.push(kind, &value)?;
            }
            Token::Join(combinator) => {
                let left = match pending.take() {
                    Some((left, joined_by)) => {
                        SelectorChain::new().combine(&left, joined_by, &current)
                    }
                    None => current,
                };
                debug!("joining with {:?}", combinator);
                pending = Some((left, combinator));
                current = SelectorChain::new();
            }
        }
    }

    Ok(match pending {
        Some((left, combinator)) => SelectorChain::new().combine(&left, combinator, &current),
        None => current,
    })
}

fn run(args: &Args) -> Result<String, CliError> {
    let mut chain = build(&args.parts)?;
    let fragments = chain.fragments().to_vec();
    let selector = chain.render();
    info!("built selector from {} fragments", fragments.len());

    if args.json {
        Ok(json::serialize(&Output {
            selector: &selector,
            fragments: &fragments,
        })?)
    } else {
        Ok(selector)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // parse the args given in terminal
    let args: Args = Args::parse();

    match run(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
