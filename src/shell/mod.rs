use std::path::Path;
use log::{debug, warn};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use crate::controller;
use crate::editor::SpendlogHelper;
use crate::parser;
use crate::parser::Statement;
use crate::store::CsvStore;

static PROMPT: &str = "spendlog> ";

/// Read commands line by line until `exit`, CTRL-C or CTRL-D.
/// A failing command is reported and the shell carries on with the next one.
pub(crate) fn run(store: &CsvStore, history_file: &Path) -> anyhow::Result<()> {
    let mut rl: Editor<SpendlogHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(SpendlogHelper::new(PROMPT)));
    if rl.load_history(history_file).is_err() {
        debug!("No previous history in {}", history_file.display());
    }

    println!("Logging expenses to {}. Type 'help' for commands.", store.path().display());
    let result = loop {
        let line = match rl.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break Ok(()),
            Err(err) => break Err(anyhow::Error::new(err).context("Unable to read command")),
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        rl.add_history_entry(line)?;

        match parser::parse(line) {
            Ok(Statement::Exit) => break Ok(()),
            Ok(statement) => match controller::execute(store, statement) {
                Ok(output) => println!("{output}"),
                Err(err) => println!("{:#}", err),
            },
            Err(err) => println!("{}", err),
        }
    };

    if let Err(err) = rl.save_history(history_file) {
        warn!("Unable to save history to {}: {}", history_file.display(), err);
    }
    println!("Goodbye! Keep tracking your expenses!");
    result
}
