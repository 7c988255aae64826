//! Command dispatch for the CLI targets

use clap::CommandFactory;

use crate::catalog::refresher::CatalogService;
use crate::catalog::sources::{NodeReleaseIndex, NpmRegistry};
use crate::catalog::types::Tool;
use crate::cli::{Cli, Target, parse_target};

/// Every toolchain the CLI manages, in pin order
const TOOLS: [Tool; 2] = [Tool::Node, Tool::Npm];

/// Executes the parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(raw) = cli.target.as_deref() else {
        if cli.global {
            println!("Missing an argument after -g");
        } else {
            Cli::command().print_help()?;
        }
        return Ok(());
    };

    match parse_target(raw) {
        Target::Pin { tool, specifier } => pin_tool(tool, &specifier, cli.global).await,
        Target::PinAll { specifier } => pin_all_tools(&specifier, cli.global).await,
        Target::MissingSpecifier { tool } => println!("{}", missing_version_hint(tool)),
        Target::Refresh => refresh_catalogs().await,
        Target::Version => println!("enginepin v{}", env!("CARGO_PKG_VERSION")),
        Target::Help => Cli::command().print_help()?,
    }

    Ok(())
}

/// Resolves one tool's specifier through its catalog service
async fn resolve_tool(tool: Tool, specifier: &str) -> Option<String> {
    match tool {
        Tool::Node => {
            CatalogService::with_default_store(NodeReleaseIndex::default())
                .resolve(specifier)
                .await
        }
        Tool::Npm => {
            CatalogService::with_default_store(NpmRegistry::default())
                .resolve(specifier)
                .await
        }
    }
}

async fn pin_tool(tool: Tool, specifier: &str, global: bool) {
    // The resolver logs its own diagnostic when nothing matches
    let Some(version) = resolve_tool(tool, specifier).await else {
        return;
    };

    println!("{}", pin_line(tool, &version, global));
    // TODO: persist the pinned version into the project manifest
}

async fn pin_all_tools(specifier: &str, global: bool) {
    for tool in TOOLS {
        pin_tool(tool, specifier, global).await;
    }
}

async fn refresh_catalogs() {
    for tool in TOOLS {
        let count = match tool {
            Tool::Node => {
                CatalogService::with_default_store(NodeReleaseIndex::default())
                    .refresh()
                    .await
                    .map(|catalog| catalog.releases.len())
            }
            Tool::Npm => {
                CatalogService::with_default_store(NpmRegistry::default())
                    .refresh()
                    .await
                    .map(|catalog| catalog.releases.len())
            }
        };

        println!("{}", refresh_line(tool, count));
    }
}

fn pin_line(tool: Tool, version: &str, global: bool) -> String {
    if global {
        format!("Global install of {}@{}", tool, version)
    } else {
        format!("Pin local {} to {}", tool.display_name(), version)
    }
}

fn missing_version_hint(tool: Tool) -> String {
    [
        format!("Missing {} version, try:", tool.display_name()),
        "enginepin [toolname]@[version]".to_string(),
        "Like this:".to_string(),
        format!("enginepin {}@latest", tool),
    ]
    .join("\n")
}

fn refresh_line(tool: Tool, release_count: Option<usize>) -> String {
    match release_count {
        Some(count) => format!("{}: {} releases", tool.display_name(), count),
        None => format!("{}: no release data", tool.display_name()),
    }
}
