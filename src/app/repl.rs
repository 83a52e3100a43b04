use crate::app::session::{ChefSession, RemoveAllResult, RemoveOutcome};
use crate::core::export::ExportFormat;
use crate::domain::model::{Course, GuestFilter, ItemId, SelectAllOutcome, ViewMode};
use crate::domain::ports::{Confirm, ContactLauncher};
use crate::utils::error::{MenuError, Result};
use clap::{Parser, Subcommand};
use regex::Regex;
use std::io::{BufRead, Write};

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
#[command(name = "chef-menu", about = "Commands (one per line)")]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Switch view: overview, form, menu, planner, guest, contact
    View { mode: ViewMode },

    /// Add a dish to the menu
    #[command(allow_negative_numbers = true)]
    Add {
        name: String,
        description: String,
        #[arg(allow_hyphen_values = true)]
        price: String,
        /// starter, main or dessert
        #[arg(short, long, default_value = "starter")]
        course: Course,
    },

    /// Remove one dish (asks for confirmation)
    Remove { id: ItemId },

    /// Remove every dish (asks for confirmation)
    RemoveAll,

    /// Toggle a dish in the planner
    #[command(alias = "toggle")]
    Select { id: ItemId },

    /// Put every dish in the planner
    SelectAll,

    /// Empty the planner and reset its name and description
    ClearPlanner,

    /// Name the planned menu
    PlannerName { text: Vec<String> },

    /// Describe the planned menu
    PlannerDescription { text: Vec<String> },

    /// Filter the guest view: all, starter, main, dessert
    Filter { filter: GuestFilter },

    /// Call the restaurant
    Call,

    /// Email the restaurant
    Email,

    /// Get directions to the restaurant
    Directions,

    /// Print the menu as csv, tsv or json
    Export {
        #[arg(default_value = "csv")]
        format: ExportFormat,
        /// Only the dishes selected in the planner
        #[arg(long)]
        selected: bool,
    },

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// y/N prompt on the session's own input stream.
struct LinePrompt<'a, R: BufRead, W: Write> {
    input: &'a mut R,
    out: &'a mut W,
    assume_yes: bool,
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<'_, R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        if write!(self.out, "{} [y/N] ", prompt).and_then(|_| self.out.flush()).is_err() {
            return false;
        }
        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(_) => {
                let answer = answer.trim();
                answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
            }
            Err(e) => {
                tracing::warn!("Could not read confirmation: {}", e);
                false
            }
        }
    }
}

/// Line-oriented driver around a [`ChefSession`].
pub struct Repl<R: BufRead, W: Write, L: ContactLauncher> {
    input: R,
    out: W,
    session: ChefSession<L>,
    assume_yes: bool,
    tokenizer: Regex,
}

impl<R: BufRead, W: Write, L: ContactLauncher> Repl<R, W, L> {
    pub fn new(input: R, out: W, session: ChefSession<L>, assume_yes: bool) -> Result<Self> {
        let tokenizer = Regex::new(r#""([^"]*)"|(\S+)"#).map_err(|e| MenuError::ConfigError {
            message: format!("invalid command tokenizer: {}", e),
        })?;
        Ok(Self {
            input,
            out,
            session,
            assume_yes,
            tokenizer,
        })
    }

    pub fn session(&self) -> &ChefSession<L> {
        &self.session
    }

    pub fn into_parts(self) -> (ChefSession<L>, W) {
        (self.session, self.out)
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "{}", self.session.render())?;
        loop {
            write!(self.out, "\n> ")?;
            self.out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.out)?;
                break;
            }
            if self.execute_line(&line)? == Flow::Quit {
                break;
            }
        }
        tracing::info!("Session ended with {} menu items", self.session.menu().len());
        Ok(())
    }

    /// Runs one command line. Input problems are printed; only I/O failures are returned.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        let tokens = self.tokenize(line);
        if tokens.is_empty() {
            return Ok(Flow::Continue);
        }

        let parsed = match CommandLine::try_parse_from(&tokens) {
            Ok(parsed) => parsed,
            Err(e) => {
                write!(self.out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
        };

        match self.execute(parsed.command) {
            Ok(flow) => Ok(flow),
            Err(e) if e.is_recoverable() => {
                tracing::warn!("Command rejected: {}", e);
                writeln!(self.out, "❌ {}", e.user_friendly_message())?;
                writeln!(self.out, "💡 {}", e.recovery_suggestion())?;
                Ok(Flow::Continue)
            }
            Err(e) => Err(e),
        }
    }

    fn tokenize(&self, line: &str) -> Vec<String> {
        self.tokenizer
            .captures_iter(line)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::View { mode } => self.session.set_view(mode),
            Command::Add {
                name,
                description,
                price,
                course,
            } => {
                let item = self.session.add(&name, &description, course, &price)?;
                writeln!(
                    self.out,
                    "✅ Menu item added successfully! (#{} {}, ${})",
                    item.id, item.name, item.price
                )?;
            }
            Command::Remove { id } => {
                let mut prompt = LinePrompt {
                    input: &mut self.input,
                    out: &mut self.out,
                    assume_yes: self.assume_yes,
                };
                match self.session.remove(id, &mut prompt) {
                    RemoveOutcome::Removed(item) => {
                        writeln!(self.out, "✅ Menu item '{}' removed successfully!", item.name)?
                    }
                    RemoveOutcome::NotFound => return Err(MenuError::NotFound { id: id.0 }),
                    RemoveOutcome::Cancelled => writeln!(self.out, "Removal cancelled.")?,
                }
            }
            Command::RemoveAll => {
                let mut prompt = LinePrompt {
                    input: &mut self.input,
                    out: &mut self.out,
                    assume_yes: self.assume_yes,
                };
                match self.session.remove_all(&mut prompt) {
                    RemoveAllResult::NothingToRemove => {
                        writeln!(self.out, "There are no menu items to remove.")?
                    }
                    RemoveAllResult::Cancelled => writeln!(self.out, "Removal cancelled.")?,
                    RemoveAllResult::Removed(count) => writeln!(
                        self.out,
                        "✅ All {} menu items have been removed!",
                        count
                    )?,
                }
            }
            Command::Select { id } => {
                let selected = self.session.menu_mut().toggle(id)?;
                let verb = if selected { "added to" } else { "removed from" };
                writeln!(self.out, "Item #{} {} the planner.", id, verb)?;
                self.session.set_view(ViewMode::Planner);
            }
            Command::SelectAll => {
                match self.session.menu_mut().select_all() {
                    SelectAllOutcome::NothingToAdd => writeln!(
                        self.out,
                        "There are no menu items to add to the planner."
                    )?,
                    SelectAllOutcome::Selected(_) => writeln!(
                        self.out,
                        "✅ All menu items have been added to the menu planner!"
                    )?,
                }
                self.session.set_view(ViewMode::Planner);
            }
            Command::ClearPlanner => {
                self.session.menu_mut().clear_planner();
                self.session.set_view(ViewMode::Planner);
            }
            Command::PlannerName { text } => {
                self.session.menu_mut().set_planner_name(text.join(" "));
                self.session.set_view(ViewMode::Planner);
            }
            Command::PlannerDescription { text } => {
                self.session.menu_mut().set_planner_description(text.join(" "));
                self.session.set_view(ViewMode::Planner);
            }
            Command::Filter { filter } => {
                self.session.set_guest_filter(filter);
                self.session.set_view(ViewMode::Guest);
            }
            Command::Call => {
                self.session.call()?;
                return Ok(Flow::Continue);
            }
            Command::Email => {
                self.session.email()?;
                return Ok(Flow::Continue);
            }
            Command::Directions => {
                self.session.directions()?;
                return Ok(Flow::Continue);
            }
            Command::Export { format, selected } => {
                let text = self.session.export(format, selected)?;
                writeln!(self.out, "{}", text.trim_end())?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        }

        writeln!(self.out, "\n{}", self.session.render())?;
        Ok(Flow::Continue)
    }
}
