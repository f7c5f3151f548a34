use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tree_format::{write_tree, TreeParser};

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG overrides -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> Result<()> {
    let matches = Command::new("tree-format")
        .about("Print a tree as indented box-drawing text")
        .arg(
            Arg::new("input")
                .help("JSON tree file, or - to read from stdin")
                .value_parser(clap::value_parser!(PathBuf))
                .required_unless_present("dir")
                .conflicts_with("dir")
                .index(1),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .short('d')
                .help("Render the directory at this path instead of a JSON file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("hidden")
                .long("hidden")
                .short('a')
                .help("Include entries whose names start with a dot")
                .requires("dir")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_tracing(matches.get_count("verbose"));

    let tree = match matches.get_one::<PathBuf>("dir") {
        Some(dir) => TreeParser::parse_directory(dir, matches.get_flag("hidden"))?,
        None => {
            // clap guarantees one of input/dir is present
            let input = matches
                .get_one::<PathBuf>("input")
                .ok_or_else(|| anyhow::anyhow!("No input given"))?;
            TreeParser::parse_file(input)?
        }
    };

    info!(
        nodes = tree.node_count(),
        height = tree.height(),
        "rendering tree"
    );

    write_tree(
        io::stdout().lock(),
        &tree,
        |node| &node.label,
        |node| node.children.iter(),
    )?;

    Ok(())
}
