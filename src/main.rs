//! tola-trail - reading-order navigation for tola sites.

mod build;
mod cli;
mod commands;
mod config;
mod logger;
mod trail;
mod visit;

use anyhow::{Result, bail};
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use trail::{check, render, search};
use visit::CliHost;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build => build_site(&config).map(|_| ()),
        Commands::Nav { document } => {
            if let Some(forest) = config.bound_trail() {
                if !search::contains(forest, document) {
                    log!("warn"; "`{}` is not on the trail", trail::stem(document));
                }
                println!("{}", render::nav_bar(forest, document));
            }
            Ok(())
        }
        Commands::Listing { document } => {
            if let Some(listing) = config
                .bound_trail()
                .and_then(|forest| render::listing_for(forest, document, &config.trail.index))
            {
                println!("{listing}");
            }
            Ok(())
        }
        Commands::Visit {
            direction,
            document,
        } => {
            let Some(forest) = config.bound_trail() else {
                bail!("No [[trail.items]] configured");
            };
            let mut host = CliHost::new(&config, document.as_str());
            commands::run(*direction, forest, &config.build.extension, &mut host).map(|_| ())
        }
        Commands::Check => check_trail(&config),
        Commands::Tree => {
            match config.bound_trail() {
                Some(forest) => print!("{}", render::outline(forest)),
                None => log!("trail"; "no [[trail.items]] configured"),
            }
            Ok(())
        }
    }
}

/// Log every trail problem; fail if there is any.
fn check_trail(config: &SiteConfig) -> Result<()> {
    let Some(forest) = config.bound_trail() else {
        log!("check"; "no [[trail.items]] configured");
        return Ok(());
    };

    let problems = check::check(forest, &config.build.content, &config.build.extension);
    if problems.is_empty() {
        log!("check"; "{} links ok", check::links(forest).len());
        return Ok(());
    }

    let details: Vec<_> = problems.iter().map(ToString::to_string).collect();
    log!("warn"; "{} trail problem(s):\n  {}", problems.len(), details.join("\n  "));
    bail!("{} trail problem(s) found", problems.len())
}
