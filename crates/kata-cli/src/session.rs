//! Interactive todo session
//!
//! The UI adapter over [`TodoList`]: one command per input line, one
//! response per command. Errors are reported and the session continues.

use kata_todo::{Filter, Priority, TodoConfig, TodoError, TodoId, TodoList};
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Session command help
pub const HELP: &str = "\
commands:
  add <text>            add a todo
  toggle <id>           flip completed
  edit <id> <text>      replace text
  delete <id>           remove a todo
  move <id> <index>     reorder (0 = top)
  priority <id> <low|normal|high>
  category <id> [name]  label a todo, or clear its label
  clear                 remove completed todos
  list [all|active|completed] [@category]
  count                 items left
  help                  this text
  quit                  end the session";

/// Errors reported for one input line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// First word is not a command
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    /// Required argument absent
    #[error("{command}: missing {argument}")]
    MissingArgument {
        /// Command name
        command: &'static str,
        /// Argument name
        argument: &'static str,
    },

    /// Argument did not parse
    #[error("invalid {argument} '{value}'")]
    InvalidArgument {
        /// Argument name
        argument: &'static str,
        /// Offending text
        value: String,
    },

    /// Input line was not UTF-8
    #[error("input line is not valid UTF-8")]
    InvalidEncoding,

    /// Rejected by the todo list
    #[error(transparent)]
    Todo(#[from] TodoError),
}

/// A parsed session command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoCommand {
    /// `add <text>`
    Add(String),
    /// `toggle <id>`
    Toggle(TodoId),
    /// `edit <id> <text>`
    Edit(TodoId, String),
    /// `delete <id>`
    Delete(TodoId),
    /// `move <id> <index>`
    Move(TodoId, usize),
    /// `priority <id> <level>`
    Priority(TodoId, Priority),
    /// `category <id> [name]`
    Category(TodoId, Option<String>),
    /// `clear`
    ClearCompleted,
    /// `list [filter] [@category]`
    List {
        /// Completion filter
        filter: Filter,
        /// Only records with this label
        category: Option<String>,
    },
    /// `count`
    Count,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

impl FromStr for TodoCommand {
    type Err = SessionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match name.to_ascii_lowercase().as_str() {
            // blank text is passed through so the list reports InvalidInput
            "add" => Ok(Self::Add(rest.to_string())),
            "toggle" => Ok(Self::Toggle(parse_id("toggle", rest)?)),
            "delete" | "rm" => Ok(Self::Delete(parse_id("delete", rest)?)),
            "edit" => {
                let (id, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Ok(Self::Edit(parse_id("edit", id)?, text.to_string()))
            }
            "move" => {
                let (id, index) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let id = parse_id("move", id)?;
                let index = index.trim();
                if index.is_empty() {
                    return Err(SessionError::MissingArgument {
                        command: "move",
                        argument: "index",
                    });
                }
                let index = index.parse().map_err(|_| SessionError::InvalidArgument {
                    argument: "index",
                    value: index.to_string(),
                })?;
                Ok(Self::Move(id, index))
            }
            "priority" => {
                let (id, level) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let id = parse_id("priority", id)?;
                let level = level.trim();
                if level.is_empty() {
                    return Err(SessionError::MissingArgument {
                        command: "priority",
                        argument: "level",
                    });
                }
                let level = level.parse().map_err(|_| SessionError::InvalidArgument {
                    argument: "priority",
                    value: level.to_string(),
                })?;
                Ok(Self::Priority(id, level))
            }
            "category" | "cat" => {
                let (id, name) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let id = parse_id("category", id)?;
                let name = name.trim();
                let name = name.strip_prefix('@').unwrap_or(name);
                Ok(Self::Category(id, (!name.is_empty()).then(|| name.to_string())))
            }
            "clear" => Ok(Self::ClearCompleted),
            "list" | "ls" => {
                let mut filter = Filter::All;
                let mut category = None;
                for word in rest.split_whitespace() {
                    if let Some(name) = word.strip_prefix('@') {
                        category = Some(name.to_string());
                    } else {
                        filter = word.parse().map_err(|_| SessionError::InvalidArgument {
                            argument: "filter",
                            value: word.to_string(),
                        })?;
                    }
                }
                Ok(Self::List { filter, category })
            }
            "count" => Ok(Self::Count),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(SessionError::UnknownCommand(name.to_string())),
        }
    }
}

fn parse_id(command: &'static str, text: &str) -> Result<TodoId, SessionError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SessionError::MissingArgument {
            command,
            argument: "id",
        });
    }
    text.parse().map_err(|_| SessionError::InvalidArgument {
        argument: "id",
        value: text.to_string(),
    })
}

/// What the session should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading
    Continue(String),
    /// End the session
    Quit,
}

/// A todo session owning one list
#[derive(Debug, Default)]
pub struct Session {
    list: TodoList,
}

impl Session {
    /// Create session with an empty list
    #[must_use]
    pub fn new(config: TodoConfig) -> Self {
        Self {
            list: TodoList::with_config(config),
        }
    }

    /// Create session around an existing list
    #[must_use]
    pub fn with_list(list: TodoList) -> Self {
        Self { list }
    }

    /// The session's list
    #[inline]
    #[must_use]
    pub fn list(&self) -> &TodoList {
        &self.list
    }

    /// Run one command against the list
    ///
    /// # Errors
    /// Whatever the list rejects.
    pub fn execute(&mut self, command: TodoCommand) -> Result<Outcome, SessionError> {
        let message = match command {
            TodoCommand::Add(text) => {
                let todo = self.list.add(&text)?;
                format!("added {} {}", todo.id, todo.text)
            }
            TodoCommand::Toggle(id) => {
                let state = if self.list.toggle(id)? { "completed" } else { "reopened" };
                format!("{id} {state}")
            }
            TodoCommand::Edit(id, text) => format!("updated {}", self.list.edit(id, &text)?),
            TodoCommand::Delete(id) => match self.list.delete(id) {
                Some(todo) => format!("deleted {} {}", todo.id, todo.text),
                None => format!("no todo {id}"),
            },
            TodoCommand::Move(id, index) => {
                let to = self.list.move_to(id, index)?;
                format!("moved {id} to position {to}")
            }
            TodoCommand::Priority(id, priority) => {
                self.list.set_priority(id, priority)?;
                format!("{id} priority {priority}")
            }
            TodoCommand::Category(id, name) => {
                match &self.list.set_category(id, name.as_deref())?.category {
                    Some(category) => format!("{id} category @{category}"),
                    None => format!("{id} category cleared"),
                }
            }
            TodoCommand::ClearCompleted => {
                format!("cleared {} completed", self.list.clear_completed())
            }
            TodoCommand::List { filter, category } => self.render(filter, category.as_deref()),
            TodoCommand::Count => self.list.items_left_label(),
            TodoCommand::Help => HELP.to_string(),
            TodoCommand::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Continue(message))
    }

    /// Parse and run one input line
    ///
    /// # Errors
    /// Parse failures and list rejections.
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome, SessionError> {
        self.execute(line.parse()?)
    }

    fn render(&self, filter: Filter, category: Option<&str>) -> String {
        let mut out = String::new();
        let shown = self
            .list
            .filtered(filter)
            .filter(|t| category.map_or(true, |c| t.in_category(c)));
        for todo in shown {
            let _ = writeln!(out, "{todo}");
        }
        if out.is_empty() {
            out.push_str("(no todos)\n");
        }
        out.push_str(&self.list.items_left_label());
        out
    }
}

/// Drive `session` from `input` until `quit` or end of input
///
/// A line that is not UTF-8 is reported like any other bad command.
///
/// # Errors
/// I/O failures on `input` or `output`.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
    prompt: &str,
) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        write!(output, "{prompt}")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let result = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => session.execute_line(line),
            Err(_) => Err(SessionError::InvalidEncoding),
        };

        match result {
            Ok(Outcome::Continue(message)) => writeln!(output, "{message}")?,
            Ok(Outcome::Quit) => break,
            Err(e) => {
                tracing::debug!(error = %e, "command rejected");
                writeln!(output, "error: {e}")?;
            }
        }
    }
    writeln!(output)?;
    Ok(())
}
