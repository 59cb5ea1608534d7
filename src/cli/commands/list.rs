use super::{CatalogSource, CommandHandler, CommandResult};
use crate::cli::ListKind;
use crate::Result;

/// Handler for the `list` command
pub struct ListCommand {
    pub source: CatalogSource,
    pub kind: ListKind,
}

impl CommandHandler for ListCommand {
    fn execute(&self) -> Result<CommandResult> {
        let (_, store) = self.source.load()?;

        let (names, label) = match self.kind {
            ListKind::Majors => (store.major_names(), "majors"),
            ListKind::Minors => (store.minor_names(), "minors"),
        };

        if names.is_empty() {
            return Ok(CommandResult::Warning(format!("No {} found.", label)));
        }

        for name in &names {
            println!("{}", name);
        }
        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "list"
    }
}

impl ListCommand {
    pub fn new(source: CatalogSource, kind: ListKind) -> Self {
        Self { source, kind }
    }
}
