//! Interactive shell for browsing buildings and finding routes.
//!
//! Commands are read one per line: `m` prints the menu, `r` prompts for two
//! building ids and prints the route, `b` lists the buildings and `q` quits.
//! Blank lines and lines starting with `#` are echoed back unchanged.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use tracing::debug;

use campus_paths_lib::{render_buildings, Campus, RouteSummary};

use crate::commands::load_dataset;

const PROMPT: &str = "Enter an option ('m' to see the menu): ";
const UNKNOWN_OPTION: &str = "Unknown option";

/// Handle the shell subcommand on stdin/stdout.
pub fn handle_shell(target: Option<&Path>) -> Result<()> {
    let campus = load_dataset(target)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&campus, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}

/// Line-oriented console over any reader and writer.
pub struct Shell<'a, R, W> {
    campus: &'a Campus,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(campus: &'a Campus, input: R, output: W) -> Self {
        Self {
            campus,
            input,
            output,
        }
    }

    /// Run until `q` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_menu()?;
        writeln!(self.output)?;
        self.prompt()?;

        while let Some(line) = self.read_line()? {
            if line.trim().is_empty() || line.starts_with('#') {
                writeln!(self.output, "{line}")?;
                self.output.flush()?;
                continue;
            }

            let mut tokens = line.split_whitespace();
            let Some(command) = tokens.next() else {
                continue;
            };
            if command == "q" {
                break;
            }
            let has_arguments = tokens.next().is_some();
            self.execute(command, has_arguments)?;
        }

        self.output.flush()
    }

    fn execute(&mut self, command: &str, has_arguments: bool) -> io::Result<()> {
        debug!(command, has_arguments, "shell command");
        match command {
            _ if has_arguments => writeln!(self.output, "{UNKNOWN_OPTION}")?,
            "m" => self.print_menu()?,
            "r" => self.route()?,
            "b" => self.list_buildings()?,
            _ => writeln!(self.output, "{UNKNOWN_OPTION}")?,
        }
        writeln!(self.output)?;
        self.prompt()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "\tr to find a route")?;
        writeln!(self.output, "\tb to see a list of all buildings")?;
        writeln!(self.output, "\tq to quit")?;
        self.output.flush()
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()
    }

    fn route(&mut self) -> io::Result<()> {
        write!(self.output, "Abbreviated name of starting building: ")?;
        self.output.flush()?;
        let start = self.read_line()?.unwrap_or_default();
        write!(self.output, "Abbreviated name of ending building: ")?;
        self.output.flush()?;
        let goal = self.read_line()?.unwrap_or_default();
        let (start, goal) = (start.trim(), goal.trim());

        let mut unknown = false;
        for id in [start, goal] {
            if self.campus.long_name(id).is_none() {
                writeln!(self.output, "Unknown building: {id}")?;
                unknown = true;
            }
        }
        if unknown {
            return Ok(());
        }

        match self.campus.find_route(start, goal) {
            Ok(route) => {
                let summary = RouteSummary::from_route(&route);
                self.output.write_all(summary.render_plain().as_bytes())?;
            }
            Err(error) => writeln!(self.output, "{error}")?,
        }
        self.output.flush()
    }

    fn list_buildings(&mut self) -> io::Result<()> {
        let buildings = self.campus.buildings_sorted_by_id();
        self.output.write_all(render_buildings(&buildings).as_bytes())?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            return Ok(None);
        }
        let trimmed = buffer.trim_end_matches(['\n', '\r']).len();
        buffer.truncate(trimmed);
        Ok(Some(buffer))
    }
}
