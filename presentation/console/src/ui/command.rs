use std::path::PathBuf;

use business::domain::product::value_objects::DraftField;

/// A line typed by the user, already split into an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Show,
    Refresh,
    Set { field: DraftField, value: String },
    Image(PathBuf),
    /// Edit a listed product, by identifier or 1-based list position.
    Edit(String),
    /// Fetch a product by identifier and edit it.
    Load(String),
    Cancel,
    Submit,
    Delete(String),
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Type a command, or `help`")]
    Empty,
    #[error("Unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{command}` needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("Unknown field `{0}` (name, color, price, description)")]
    UnknownField(String),
}

pub const HELP: &str = "\
Commands:
  list                    show the product list
  show                    show the form
  refresh                 fetch the product list again
  set <field> <value>     set name, color, price or description
  image <path>            attach an image file to the form
  edit <id|#>             edit a listed product
  load <id>               fetch a product by id and edit it
  cancel                  clear the form and leave edit mode
  submit                  create or update from the form
  delete <id|#>           delete a product
  help                    this text
  quit                    leave";

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let argument = |command: &'static str, what: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingArgument {
                    command,
                    argument: what,
                })
            } else {
                Ok(rest.to_string())
            }
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "list" | "ls" => Ok(Command::List),
            "show" => Ok(Command::Show),
            "refresh" => Ok(Command::Refresh),
            "set" => {
                let (field, value) = match rest.split_once(char::is_whitespace) {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                if field.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "set",
                        argument: "a field name",
                    });
                }
                let field = field
                    .parse::<DraftField>()
                    .map_err(|_| CommandError::UnknownField(field.to_string()))?;
                Ok(Command::Set {
                    field,
                    value: value.to_string(),
                })
            }
            "image" => argument("image", "a file path").map(|path| Command::Image(PathBuf::from(path))),
            "edit" => argument("edit", "a product id").map(Command::Edit),
            "load" => argument("load", "a product id").map(Command::Load),
            "cancel" | "reset" => Ok(Command::Cancel),
            "submit" => Ok(Command::Submit),
            "delete" | "rm" => argument("delete", "a product id").map(Command::Delete),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
