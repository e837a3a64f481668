//! CLI entry point for the `greach` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_reach::cli::commands;
use graph_reach::GraphError;

#[derive(Parser)]
#[command(
    name = "greach",
    about = "greach: reachability queries over JSON graph documents"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a graph document
    Info {
        /// Path to the document
        file: PathBuf,
    },
    /// Count odd-valued vertices reachable from a vertex
    Odd {
        /// Path to a vertex graph document
        file: PathBuf,
        /// Index of the starting vertex (omit for an absent start)
        #[arg(long)]
        start: Option<usize>,
    },
    /// Sum even-valued vertices reachable from a vertex
    SumEven {
        /// Path to a vertex graph document
        file: PathBuf,
        /// Index of the starting vertex (omit for an absent start)
        #[arg(long)]
        start: Option<usize>,
    },
    /// Count reachable vertices whose value is above a threshold
    CountAbove {
        /// Path to a vertex graph document
        file: PathBuf,
        /// Values strictly above this are counted
        #[arg(allow_negative_numbers = true)]
        threshold: i32,
        /// Index of the starting vertex (omit for an absent start)
        #[arg(long)]
        start: Option<usize>,
    },
    /// Test whether a value is reachable from a vertex
    Contains {
        /// Path to a vertex graph document
        file: PathBuf,
        /// Value to look for
        #[arg(allow_negative_numbers = true)]
        target: i32,
        /// Index of the starting vertex (omit for an absent start)
        #[arg(long)]
        start: Option<usize>,
    },
    /// List every value reachable from a vertex
    Collect {
        /// Path to a vertex graph document
        file: PathBuf,
        /// Index of the starting vertex (omit for an absent start)
        #[arg(long)]
        start: Option<usize>,
        /// Sort ascending instead of visit order
        #[arg(long)]
        sorted: bool,
    },
    /// Test whether two vertices reach each other
    TwoWay {
        /// Path to a vertex graph document
        file: PathBuf,
        /// Index of the first vertex
        a: usize,
        /// Index of the second vertex
        b: usize,
    },
    /// List ids reachable from an id in a map graph, sorted
    Reachable {
        /// Path to a map graph document
        file: PathBuf,
        /// Starting id
        #[arg(allow_negative_numbers = true)]
        start: i32,
    },
    /// Test for a path through non-negative ids only
    PositivePath {
        /// Path to a map graph document
        file: PathBuf,
        /// Starting id
        #[arg(allow_negative_numbers = true)]
        start: i32,
        /// Ending id
        #[arg(allow_negative_numbers = true)]
        end: i32,
    },
    /// Test whether anyone in a person's extended network works at a company
    WorksAt {
        /// Path to a network document
        file: PathBuf,
        /// Company name (exact match)
        company: String,
        /// Index of the person to start from (omit for nobody)
        #[arg(long)]
        person: Option<usize>,
    },
    /// List legal single-step moves on a board
    Moves {
        /// Path to a board document
        file: PathBuf,
        /// Current row
        row: usize,
        /// Current column
        col: usize,
        /// Semicolon-separated row,col offsets
        #[arg(long, default_value = "0,1;0,-1;-1,0;1,0", allow_hyphen_values = true)]
        directions: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .init();
    }

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file),
        Commands::Odd { file, start } => commands::cmd_odd(&file, start),
        Commands::SumEven { file, start } => commands::cmd_sum_even(&file, start),
        Commands::CountAbove {
            file,
            threshold,
            start,
        } => commands::cmd_count_above(&file, start, threshold),
        Commands::Contains {
            file,
            target,
            start,
        } => commands::cmd_contains(&file, start, target),
        Commands::Collect {
            file,
            start,
            sorted,
        } => commands::cmd_collect(&file, start, sorted),
        Commands::TwoWay { file, a, b } => commands::cmd_two_way(&file, a, b),
        Commands::Reachable { file, start } => commands::cmd_reachable(&file, start),
        Commands::PositivePath { file, start, end } => {
            commands::cmd_positive_path(&file, start, end)
        }
        Commands::WorksAt {
            file,
            company,
            person,
        } => commands::cmd_works_at(&file, person, &company),
        Commands::Moves {
            file,
            row,
            col,
            directions,
        } => commands::cmd_moves(&file, row, col, &directions),
    };

    if let Err(e) = result.and_then(|report| report.print(json)) {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_)
            | GraphError::WrongDocumentKind { .. }
            | GraphError::RaggedBoard { .. }
            | GraphError::EmptyBoard => 2,
            GraphError::InvalidArgument(_) => 3,
            GraphError::VertexNotFound(_) => 4,
        };
        process::exit(code);
    }
}
