//! A line-oriented front-end for either tree. Each command is a single character read after a
//! `menu> ` prompt; commands that need a value prompt for an integer on the next line.
//!
//! The shell reads from any [`BufRead`] and writes to any [`Write`] so it can be driven by
//! standard input or by a script in tests.
//!
//! # Examples
//!
//! ```
//! use avl_bst::{avl, shell::Shell, SearchTree};
//!
//! let input = "a\n2\na\n1\nq\n".as_bytes();
//! let mut output = Vec::new();
//!
//! let mut shell = Shell::new(avl::Tree::new(), input, &mut output);
//! shell.run().unwrap();
//!
//! assert_eq!(shell.into_tree().inorder(), [&1, &2]);
//! ```

use std::io::{self, BufRead, Write};
use std::mem;
use std::str::FromStr;

use log::{debug, error};
use thiserror::Error;

use crate::render::render;
use crate::tree::SearchTree;

const MENU_WIDTH: usize = 32;

const MENU: [&str; 8] = [
    "m: menu",
    "t: display tree",
    "",
    "a: add value",
    "d: delete value",
    "f: test membership",
    "",
    "q: quit",
];

/// Problems with what was typed into the shell, plus I/O failures on its streams.
#[derive(Debug, Error)]
pub enum ShellError {
    /// A command was longer (or shorter) than one character.
    #[error("input must be a single character")]
    NotSingleCharacter,
    /// A single character that isn't on the menu.
    #[error("invalid choice")]
    InvalidChoice,
    /// A value prompt got something other than an integer.
    #[error("invalid input (not an integer)")]
    NotAnInteger,
    /// Reading the input or writing the output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the menu.
    Menu,
    /// Draw the tree and list its traversals.
    Display,
    /// Insert a value.
    Add,
    /// Delete a value.
    Delete,
    /// Report whether a value is in the tree.
    Find,
    /// Leave the shell.
    Quit,
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(ShellError::NotSingleCharacter);
        };

        match c {
            'm' => Ok(Self::Menu),
            't' => Ok(Self::Display),
            'a' => Ok(Self::Add),
            'd' => Ok(Self::Delete),
            'f' => Ok(Self::Find),
            'q' => Ok(Self::Quit),
            _ => Err(ShellError::InvalidChoice),
        }
    }
}

/// Drives a tree of `i64`s from commands read off `input`, writing everything to `output`.
pub struct Shell<S, R, W> {
    tree: S,
    input: R,
    output: W,
}

impl<S, R, W> Shell<S, R, W>
where
    S: SearchTree<i64>,
    R: BufRead,
    W: Write,
{
    /// Creates a shell operating on `tree`.
    pub fn new(tree: S, input: R, output: W) -> Self {
        Self {
            tree,
            input,
            output,
        }
    }

    /// Gives back the tree as the commands left it.
    pub fn into_tree(self) -> S {
        self.tree
    }

    /// Prints the menu and handles commands until `q` or the end of the input. Mistyped
    /// commands and values are reported and otherwise ignored; only I/O errors end the loop
    /// early.
    pub fn run(&mut self) -> Result<(), ShellError> {
        self.display_menu()?;
        loop {
            let Some(line) = self.prompt("menu")? else {
                debug!("input closed, leaving shell");
                return Ok(());
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    self.display_error(&err)?;
                    continue;
                }
            };
            writeln!(self.output, "{line}")?;

            match command {
                Command::Menu => self.display_menu()?,
                Command::Display => self.display_tree()?,
                Command::Add => self.add_value()?,
                Command::Delete => self.delete_value()?,
                Command::Find => self.find_value()?,
                Command::Quit => return Ok(()),
            }
        }
    }

    /// Writes `<message>> ` and reads one line, without its line ending. `None` means the
    /// input is exhausted.
    fn prompt(&mut self, message: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{message}> ")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompts for an integer. `None` means the input is exhausted.
    fn read_value(&mut self, message: &str) -> Result<Option<i64>, ShellError> {
        let Some(line) = self.prompt(message)? else {
            return Ok(None);
        };
        let value = line
            .trim()
            .parse::<i64>()
            .map_err(|_| ShellError::NotAnInteger)?;
        writeln!(self.output, "{value}")?;
        Ok(Some(value))
    }

    /// Reports bad input and keeps going. I/O errors are passed back up instead.
    fn recover(
        &mut self,
        result: Result<Option<i64>, ShellError>,
    ) -> Result<Option<i64>, ShellError> {
        match result {
            Err(ShellError::Io(err)) => {
                error!("shell I/O failed: {err}");
                Err(ShellError::Io(err))
            }
            Err(err) => {
                self.display_error(&err)?;
                Ok(None)
            }
            ok => ok,
        }
    }

    fn display_error(&mut self, err: &ShellError) -> Result<(), ShellError> {
        writeln!(self.output, "error> {err}")?;
        Ok(())
    }

    fn display_menu(&mut self) -> Result<(), ShellError> {
        writeln!(self.output, "{}", "*".repeat(MENU_WIDTH))?;
        for option in MENU {
            writeln!(self.output, "\t{option}")?;
        }
        writeln!(self.output, "{}", "~".repeat(MENU_WIDTH))?;
        Ok(())
    }

    fn display_tree(&mut self) -> Result<(), ShellError> {
        if self.tree.is_empty() {
            writeln!(self.output, "\n  Tree is empty\n")?;
            return Ok(());
        }

        let levels: Vec<String> = self
            .tree
            .level_order_padded()
            .into_iter()
            .map(|value| value.map_or_else(|| "*".to_string(), ToString::to_string))
            .collect();

        writeln!(self.output, "{}", render(self.tree.root()))?;
        writeln!(self.output)?;
        writeln!(self.output, "Size:      {}", self.tree.size())?;
        writeln!(self.output, "Height:    {}", self.tree.height())?;
        writeln!(self.output, "Inorder:   {:?}", self.tree.inorder())?;
        writeln!(self.output, "Preorder:  {:?}", self.tree.preorder())?;
        writeln!(self.output, "Postorder: {:?}", self.tree.postorder())?;
        writeln!(self.output, "BFS star:  [{}]", levels.join(", "))?;
        writeln!(self.output)?;
        Ok(())
    }

    fn add_value(&mut self) -> Result<(), ShellError> {
        let value = self.read_value("Enter value to be added");
        if let Some(value) = self.recover(value)? {
            debug!("inserting {value}");
            self.tree = mem::take(&mut self.tree).insert(value);
        }
        Ok(())
    }

    fn delete_value(&mut self) -> Result<(), ShellError> {
        let value = self.read_value("Enter value to be deleted");
        if let Some(value) = self.recover(value)? {
            debug!("deleting {value}");
            self.tree = mem::take(&mut self.tree).delete(&value);
        }
        Ok(())
    }

    fn find_value(&mut self) -> Result<(), ShellError> {
        let value = self.read_value("Enter search value");
        if let Some(value) = self.recover(value)? {
            let member = if self.tree.contains(&value) { "" } else { "non-" };
            writeln!(self.output, "\n  {value} is a {member}member\n")?;
        }
        Ok(())
    }
}
