//! Interactive planning session.
//!
//! Reads commands line by line and applies them to a single in-memory
//! editor. Every editor failure is recoverable: it is rendered as a
//! one-line error and the session carries on with state untouched.

use std::io::BufRead;

use anyhow::Result;
use log::debug;
use tour_core::{DayDate, Editor, Itinerary, OperationStatus};

use crate::{gazetteer::Gazetteer, renderer::TerminalRenderer};

const HELP: &str = "\
Commands:
- `day` add a day to the itinerary
- `goto <n>` switch to day n
- `spots` list places available to pick
- `pick <name>` choose a place from the gazetteer
- `add <HH:MM>` add the picked place at a time
- `edit <id> <HH:MM> [name]` change a place's time (and name)
- `rm <id>` remove a place
- `show` show the current day
- `plan` show the whole itinerary
- `quit` end the session
";

/// One interactive session over an in-memory editor.
pub struct Session {
    editor: Editor,
    gazetteer: Gazetteer,
    renderer: TerminalRenderer,
}

impl Session {
    /// Creates a session from its three collaborators.
    pub fn new(editor: Editor, gazetteer: Gazetteer, renderer: TerminalRenderer) -> Self {
        Self {
            editor,
            gazetteer,
            renderer,
        }
    }

    /// Runs the command loop until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            debug!("command: {line}");
            if !self.handle_line(line)? {
                break;
            }
        }
        Ok(())
    }

    /// Handles one command line; returns false when the session should end.
    fn handle_line(&mut self, line: &str) -> Result<bool> {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default();
        let rest: Vec<&str> = words.collect();

        match command {
            "day" => self.add_day()?,
            "goto" => self.goto(&rest)?,
            "spots" => self.list_spots()?,
            "pick" => self.pick(&rest)?,
            "add" => self.add_place(&rest)?,
            "edit" => self.edit_place(&rest)?,
            "rm" => self.remove_place(&rest)?,
            "show" => self.show_day()?,
            "plan" => self.show_plan()?,
            "help" => self.renderer.render(HELP)?,
            "quit" | "exit" => return Ok(false),
            _ => self.failure(format!("Unknown command: {command} (try `help`)"))?,
        }
        Ok(true)
    }

    fn add_day(&mut self) -> Result<()> {
        let day = self.editor.add_day();
        let message = format!("Added day {} ({})", day.number, DayDate(&day.date));
        self.success(message)
    }

    fn goto(&mut self, args: &[&str]) -> Result<()> {
        let Some(number) = args.first().and_then(|a| a.parse::<usize>().ok()) else {
            return self.failure("Usage: goto <day number>");
        };
        if number == 0 {
            return self.failure("Day numbers start at 1");
        }
        // Day numbers are 1-based in the session, 0-based in the editor
        match self.editor.select_day(number - 1) {
            Ok(()) => self.success(format!("Now on day {number}")),
            Err(_) => self.failure(format!(
                "Day {number} is out of range (itinerary has {} days)",
                self.editor.days().len()
            )),
        }
    }

    fn list_spots(&mut self) -> Result<()> {
        let mut markdown = String::from("## Places to pick\n\n");
        for entry in self.gazetteer.entries() {
            markdown.push_str(&format!("- {} ({})\n", entry.name, entry.address));
        }
        self.renderer.render(&markdown)
    }

    fn pick(&mut self, args: &[&str]) -> Result<()> {
        if args.is_empty() {
            return self.failure("Usage: pick <name>");
        }
        let query = args.join(" ");
        match self.gazetteer.pick(&query) {
            Some(entry) => {
                let message = format!("Picked {}", entry.name);
                self.success(message)
            }
            None => self.failure(format!("No place matches '{query}'")),
        }
    }

    fn add_place(&mut self, args: &[&str]) -> Result<()> {
        let Some(time) = args.first() else {
            return self.failure("Usage: add <HH:MM>");
        };

        if let Err(err) = self.editor.begin_add_place(&self.gazetteer) {
            return self.failure(err.to_string());
        }
        if let Some(draft) = self.editor.draft_mut() {
            draft.time = (*time).to_string();
        }
        match self.editor.confirm_place() {
            Ok(id) => {
                let day = self.editor.active_day().map(|d| d.number).unwrap_or(0);
                self.success(format!("Added place {id} to day {day}"))
            }
            Err(err) => {
                // One command per add; an invalid draft is discarded rather
                // than left open for a later line
                self.editor.cancel_dialog();
                self.failure(err.to_string())
            }
        }
    }

    fn edit_place(&mut self, args: &[&str]) -> Result<()> {
        let (Some(id), Some(time)) = (
            args.first().and_then(|a| a.parse::<u64>().ok()),
            args.get(1),
        ) else {
            return self.failure("Usage: edit <id> <HH:MM> [name]");
        };

        if let Err(err) = self.editor.begin_edit_place(id) {
            return self.failure(err.to_string());
        }
        if let Some(draft) = self.editor.draft_mut() {
            draft.time = (*time).to_string();
            if args.len() > 2 {
                draft.name = args[2..].join(" ");
            }
        }
        match self.editor.confirm_place() {
            Ok(id) => self.success(format!("Updated place {id}")),
            Err(err) => {
                self.editor.cancel_dialog();
                self.failure(err.to_string())
            }
        }
    }

    fn remove_place(&mut self, args: &[&str]) -> Result<()> {
        let Some(id) = args.first().and_then(|a| a.parse::<u64>().ok()) else {
            return self.failure("Usage: rm <id>");
        };
        if self.editor.delete_place(id) {
            self.success(format!("Removed place {id}"))
        } else {
            // Removing an absent place is a no-op, not an error
            self.success(format!("Place {id} was not in the current day"))
        }
    }

    fn show_day(&mut self) -> Result<()> {
        match self.editor.active_day() {
            Some(day) => self.renderer.render(&day.to_string()),
            None => self.renderer.render("No days planned yet.\n"),
        }
    }

    fn show_plan(&mut self) -> Result<()> {
        let itinerary = Itinerary::new(self.editor.days(), self.editor.active_index());
        self.renderer.render(&itinerary.to_string())
    }

    fn success(&self, message: impl Into<String>) -> Result<()> {
        self.renderer
            .render(&OperationStatus::success(message).to_string())
    }

    fn failure(&self, message: impl Into<String>) -> Result<()> {
        self.renderer
            .render(&OperationStatus::failure(message).to_string())
    }
}
