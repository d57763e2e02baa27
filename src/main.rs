use std::fmt;
use std::io;

use avl_bst::shell::{Shell, ShellError};
use avl_bst::{avl, bst};
use clap::{Parser, ValueEnum};
use log::info;

#[derive(Parser)]
#[command(name = "avl-bst")]
#[command(about = "Interactively grow, prune and draw a binary search tree")]
#[command(version)]
struct Cli {
    /// Which tree the shell operates on
    #[arg(long, value_enum, default_value_t = Mode::Avl)]
    mode: Mode,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Plain binary search tree, never rebalanced
    Bst,
    /// Self-balancing AVL tree
    Avl,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bst => f.write_str("BST"),
            Self::Avl => f.write_str("AVL"),
        }
    }
}

fn main() -> Result<(), ShellError> {
    env_logger::init();
    let cli = Cli::parse();

    info!("running in {} mode", cli.mode);
    let input = io::stdin().lock();
    let output = io::stdout().lock();
    match cli.mode {
        Mode::Bst => Shell::new(bst::Tree::new(), input, output).run(),
        Mode::Avl => Shell::new(avl::Tree::new(), input, output).run(),
    }
}
