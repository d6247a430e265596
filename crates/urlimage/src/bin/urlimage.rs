// ABOUTME: CLI binary for urlimage that prints the inferred preview image for each URL.
// ABOUTME: Supports custom strategy order, timeouts, extra headers, HTML files, and JSON output.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use urlimage::{parse_ordering, ResolveError, Resolver, Strategy};

#[derive(Parser, Debug)]
#[command(name = "urlimage")]
#[command(about = "Infer a preview image URL for web pages")]
struct Args {
    /// Comma-separated strategy order, e.g. "og_image,twitter_image,fav_icon"
    #[arg(long = "order")]
    order: Option<String>,

    /// Timeout for the page fetch, in seconds
    #[arg(long = "timeout")]
    timeout: Option<f64>,

    /// Extra request header for the page fetch ("Name: value"); repeatable
    #[arg(short = 'H', long = "header")]
    headers: Vec<String>,

    /// HTML file to resolve against (requires --url)
    #[arg(long = "html")]
    html: Option<PathBuf>,

    /// Page URL for the HTML file (required with --html)
    #[arg(long = "url")]
    url: Option<String>,

    /// Emit one JSON object per input instead of bare URLs
    #[arg(long = "json")]
    json_output: bool,

    /// Log strategy checks to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// URLs to resolve
    #[arg()]
    urls: Vec<String>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "urlimage=debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_header(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("header must look like 'Name: value': {}", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(anyhow!("header name is empty: {}", raw));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn build_resolver(args: &Args) -> Result<Resolver> {
    let mut builder = Resolver::builder();
    if let Some(secs) = args.timeout {
        let timeout = Duration::try_from_secs_f64(secs)
            .map_err(|e| anyhow!("invalid --timeout {}: {}", secs, e))?;
        builder = builder.timeout(timeout);
    }
    for raw in &args.headers {
        let (name, value) = parse_header(raw)?;
        builder = builder.header(name, value);
    }
    Ok(builder.build())
}

fn print_result(url: &str, result: &Result<Option<String>, ResolveError>, json_output: bool) {
    if json_output {
        let line = match result {
            Ok(image) => json!({ "url": url, "image": image, "error": null }),
            Err(err) => json!({ "url": url, "image": null, "error": err.to_string() }),
        };
        println!("{}", line);
        return;
    }

    match result {
        Ok(image) => println!("{}", image.as_deref().unwrap_or_default()),
        Err(err) => eprintln!("error resolving {}: {}", url, err),
    }
}

fn run(args: Args) -> Result<bool> {
    if args.html.is_some() && args.url.is_none() {
        return Err(anyhow!("--url is required when using --html"));
    }
    if args.html.is_none() && args.urls.is_empty() {
        return Err(anyhow!("at least one URL is required, or use --html with --url"));
    }
    if args.html.is_some() && !args.urls.is_empty() {
        return Err(anyhow!("cannot use both --html and positional URLs"));
    }

    let ordering: Option<Vec<Strategy>> = args
        .order
        .as_deref()
        .map(parse_ordering)
        .transpose()
        .context("invalid --order")?;
    let resolver = build_resolver(&args)?;

    let mut had_error = false;

    if let (Some(html_path), Some(url)) = (&args.html, &args.url) {
        let html = fs::read_to_string(html_path)
            .with_context(|| format!("error reading file {:?}", html_path))?;
        let result = resolver.resolve_html(&html, url, ordering.as_deref());
        had_error |= result.is_err();
        print_result(url, &result, args.json_output);
    } else {
        for url in &args.urls {
            let result = resolver.resolve(url, ordering.as_deref());
            had_error |= result.is_err();
            print_result(url, &result, args.json_output);
        }
    }

    Ok(had_error)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}
