//! # CLI Layer
//!
//! One client of the blogkit API, and the only place that knows about
//! stdout/stderr, exit codes and argument parsing.
//!
//! - `run()`: parses arguments, builds the API and dispatches
//! - `handle_*()`: per-command handlers that call the API and print results
//!
//! Document output (rewritten posts, detabbed text, migrated folders) goes to
//! stdout; status messages go to stderr.

use super::print::{print_document, print_messages, print_migration};
use super::setup::{Cli, Commands, HOST_HELP};
use blogkit::api::{BlogApi, CmdResult};
use blogkit::config::BlogConfig;
use blogkit::error::Result;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

struct AppContext {
    api: BlogApi,
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    match cli.command {
        Commands::ImageUrl {
            post,
            selector,
            output,
        } => handle_image_url(&ctx, post, selector, output),
        Commands::Migrate { dry_run } => handle_migrate(&ctx, dry_run),
        Commands::Detab { file } => handle_detab(&ctx, file),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = match &cli.config {
        Some(path) => BlogConfig::load_file(path)?,
        None => BlogConfig::load(&cli.dir)?,
    };

    Ok(AppContext {
        api: BlogApi::new(cli.dir.clone(), config),
        verbose: cli.verbose,
    })
}

fn handle_image_url(
    ctx: &AppContext,
    post: Option<PathBuf>,
    selector: Option<String>,
    output: Option<String>,
) -> Result<()> {
    let Some(post) = post else {
        exit_with_usage("image-url", Some(HOST_HELP));
    };

    let result = ctx
        .api
        .complete_image_urls(&post, selector.as_deref(), output.as_deref())?;
    finish(ctx, &result);
    Ok(())
}

fn handle_migrate(ctx: &AppContext, dry_run: bool) -> Result<()> {
    let result = ctx.api.migrate_posts(dry_run, print_migration)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_detab(ctx: &AppContext, file: Option<PathBuf>) -> Result<()> {
    let Some(file) = file else {
        exit_with_usage("detab", None);
    };

    let result = ctx.api.detab(&file)?;
    finish(ctx, &result);
    Ok(())
}

fn finish(ctx: &AppContext, result: &CmdResult) {
    if let Some(output) = &result.output {
        print_document(output);
    }
    print_messages(&result.messages, ctx.verbose);
}

/// Missing required arguments: usage on stdout, exit status 1.
fn exit_with_usage(subcommand: &str, extra: Option<&str>) -> ! {
    let mut cmd = Cli::command();
    cmd.build();
    if let Some(sub) = cmd.find_subcommand_mut(subcommand) {
        println!("{}", sub.render_usage());
    }
    if let Some(extra) = extra {
        println!("  {}", extra);
    }
    std::process::exit(1);
}
