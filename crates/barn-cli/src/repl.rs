//! Line commands for the interactive dashboard.
//!
//! | Input | Effect |
//! |-------|--------|
//! | `fruits`, `vegetables`, `category <name>` | open a category |
//! | `item <name>`, `item <n>` | select an item by name or 1-based position |
//! | `input <text>` | set the pending amount text |
//! | `commit` | commit the pending text |
//! | `add <text>` | `input <text>` then `commit` |
//! | `back` | return to the category list |
//! | `show` / `json` | print the tracker / its JSON view |
//! | `logout`, `quit` | leave |

use std::str::FromStr;

use barn_core::Category;
use barn_dashboard::Dashboard;
use barn_tracker::CommitError;

use crate::render;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    SelectCategory(Category),
    SelectItem(String),
    SelectItemAt(usize),
    Input(String),
    Commit,
    Add(String),
    Back,
    Show,
    Json,
    Help,
    Logout,
    Quit,
}

impl FromStr for ReplCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        let needs_arg = |what: &str| -> Result<String, String> {
            if rest.is_empty() {
                Err(format!("`{head}` needs {what}"))
            } else {
                Ok(rest.to_string())
            }
        };

        match head.to_ascii_lowercase().as_str() {
            "category" | "cat" => needs_arg("a category")?
                .parse()
                .map(Self::SelectCategory)
                .map_err(|e| e.to_string()),
            "item" => {
                let arg = needs_arg("an item name or number")?;
                match arg.parse::<usize>() {
                    Ok(0) => Err("item numbers start at 1".to_string()),
                    Ok(n) => Ok(Self::SelectItemAt(n - 1)),
                    Err(_) => Ok(Self::SelectItem(arg)),
                }
            }
            // Pending input is stored verbatim, so an empty argument is allowed.
            "input" => Ok(Self::Input(rest.to_string())),
            "commit" => Ok(Self::Commit),
            "add" => Ok(Self::Add(rest.to_string())),
            "back" => Ok(Self::Back),
            "show" | "" => Ok(Self::Show),
            "json" => Ok(Self::Json),
            "help" | "?" => Ok(Self::Help),
            "logout" => Ok(Self::Logout),
            "quit" | "exit" => Ok(Self::Quit),
            other => other
                .parse::<Category>()
                .map(Self::SelectCategory)
                .map_err(|_| format!("unknown command `{head}`; try `help`")),
        }
    }
}

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Logout,
    Quit,
}

pub const HELP: &str = "\
commands:
  fruits | vegetables | category <name>   open a category
  item <name> | item <n>                  select an item
  input <text>                            set the pending amount
  commit                                  commit the pending amount
  add <amount>                            input + commit
  back                                    back to categories
  show | json                             print the tracker
  logout | quit";

/// Apply `command` to `dash`, returning text to print (if any) and the next
/// step for the loop.
pub fn apply(dash: &mut Dashboard, command: ReplCommand) -> (Option<String>, Flow) {
    let out = match command {
        ReplCommand::SelectCategory(c) => {
            let result = dash.on_select_category(c);
            selection(dash, result)
        }
        ReplCommand::SelectItem(name) => {
            let result = dash.on_select_item(&name);
            selection(dash, result)
        }
        ReplCommand::SelectItemAt(index) => {
            let result = dash.on_select_item_at(index);
            selection(dash, result)
        }
        ReplCommand::Input(text) => {
            dash.on_input(text);
            None
        }
        ReplCommand::Commit => commit(dash),
        ReplCommand::Add(text) => {
            dash.on_input(text);
            commit(dash)
        }
        ReplCommand::Back => {
            dash.on_back();
            Some(render::render_tracker(dash))
        }
        ReplCommand::Show => Some(render::render_tracker(dash)),
        ReplCommand::Json => Some(
            serde_json::to_string_pretty(&dash.view())
                .unwrap_or_else(|e| format!("failed to serialize view: {e}")),
        ),
        ReplCommand::Help => Some(HELP.to_string()),
        ReplCommand::Logout => return (None, Flow::Logout),
        ReplCommand::Quit => return (None, Flow::Quit),
    };
    (out, Flow::Continue)
}

fn selection(dash: &Dashboard, result: Result<(), barn_tracker::TrackerError>) -> Option<String> {
    match result {
        Ok(()) => Some(render::render_tracker(dash)),
        Err(e) => Some(format!("! {e}")),
    }
}

fn commit(dash: &mut Dashboard) -> Option<String> {
    match dash.on_commit() {
        Ok(_) => Some(render::render_tracker(dash)),
        // The sink already told the user.
        Err(CommitError::InvalidAmount(_) | CommitError::Overflow { .. }) => None,
        Err(CommitError::NoSelection) => Some(format!("! {}", dash.text("tracker.chooseCategory"))),
    }
}
