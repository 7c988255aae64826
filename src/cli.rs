//! Command-line arguments and target parsing

use clap::Parser;

use crate::catalog::types::Tool;

#[derive(Parser)]
#[command(name = "enginepin")]
#[command(version, about = "Pin Node.js and npm to exact toolchain versions")]
pub struct Cli {
    /// Resolve for a global install instead of the local project
    #[arg(short = 'g', long = "global")]
    pub global: bool,

    /// `<tool>@<specifier>`, `lts`, `latest`, `refresh`, or `version`
    pub target: Option<String>,
}

/// What the positional argument asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Pin one tool to a version specifier
    Pin { tool: Tool, specifier: String },
    /// Pin every supported tool to the same keyword specifier
    PinAll { specifier: String },
    /// A known tool without a version specifier
    MissingSpecifier { tool: Tool },
    /// Refresh every release catalog
    Refresh,
    /// Print the program version
    Version,
    /// Anything unrecognized
    Help,
}

/// Parses the raw positional argument, case-insensitively
pub fn parse_target(raw: &str) -> Target {
    let target = raw.trim().to_lowercase();

    match target.as_str() {
        "v" | "version" => Target::Version,
        "lts" | "latest" => Target::PinAll { specifier: target },
        "refresh" => Target::Refresh,
        _ => match target.split_once('@') {
            Some((tool, specifier)) => match tool.parse::<Tool>() {
                Ok(tool) if !specifier.is_empty() => Target::Pin {
                    tool,
                    specifier: specifier.to_string(),
                },
                Ok(tool) => Target::MissingSpecifier { tool },
                Err(()) => Target::Help,
            },
            None => match target.parse::<Tool>() {
                Ok(tool) => Target::MissingSpecifier { tool },
                Err(()) => Target::Help,
            },
        },
    }
}
