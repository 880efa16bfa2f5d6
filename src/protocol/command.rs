//! Command definitions
//!
//! Represents parsed client requests.

/// Shape of a command a grammar rule produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Write,
    ReadOne,
    ReadAll,
}

impl CommandKind {
    /// Named capture groups a rule of this kind must produce, in order
    pub fn captures(&self) -> &'static [&'static str] {
        match self {
            CommandKind::Write => &["key", "value"],
            CommandKind::ReadOne => &["key"],
            CommandKind::ReadAll => &[],
        }
    }

    /// Build a command from captured text
    ///
    /// `values` holds one entry per name in `captures()`, in the same order.
    /// Returns `None` when the arity does not match.
    pub fn build(&self, values: Vec<String>) -> Option<Command> {
        let mut values = values.into_iter();
        let command = match self {
            CommandKind::Write => Command::Write {
                key: values.next()?,
                value: values.next()?,
            },
            CommandKind::ReadOne => Command::ReadOne { key: values.next()? },
            CommandKind::ReadAll => Command::ReadAll,
        };
        match values.next() {
            Some(_) => None,
            None => Some(command),
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Store `value` under `key`, overwriting any prior value
    Write { key: String, value: String },

    /// Fetch the value stored under `key`
    ReadOne { key: String },

    /// Enumerate every key with its value
    ReadAll,

    /// Input that no grammar rule matched
    Unrecognized { raw: String },
}

impl Command {
    /// Get the command kind (`None` for unrecognized input)
    pub fn kind(&self) -> Option<CommandKind> {
        match self {
            Command::Write { .. } => Some(CommandKind::Write),
            Command::ReadOne { .. } => Some(CommandKind::ReadOne),
            Command::ReadAll => Some(CommandKind::ReadAll),
            Command::Unrecognized { .. } => None,
        }
    }
}
