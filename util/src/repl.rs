use rustyline::{error::ReadlineError, Editor};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error<E> {
    #[error(transparent)]
    Readline(ReadlineError),
    #[error("Command failed: {0:?}")]
    Command(E),
}

pub trait Repl {
    type Error: std::fmt::Debug;
    const HISTORY: Option<&'static str> = None;
    const PROMPT: &'static str = ">> ";
    /// Handles one complete input. An `Err` ends the session.
    fn evaluate(&mut self, input: String) -> Result<(), Self::Error>;
}

/// Reads inputs until EOF or interrupt. A line ending in `\` continues on
/// the next line.
pub fn start_repl<R: Repl>(mut repl: R) -> Result<(), Error<R::Error>> {
    let mut editor = Editor::<()>::new();
    if let Some(history) = R::HISTORY {
        if let Err(e) = editor.load_history(history) {
            log::debug!("No history loaded from {history}: {e}");
        }
    }
    let mut pending: Option<String> = None;
    loop {
        match editor.readline(R::PROMPT) {
            Ok(mut line) if line.ends_with('\\') => {
                line.pop();
                line.push('\n');
                match pending.as_mut() {
                    Some(pending) => pending.push_str(&line),
                    None => pending = Some(line),
                }
            }
            Ok(line) => {
                let input = match pending.take() {
                    Some(mut pending) => {
                        pending.push_str(&line);
                        pending
                    }
                    None => line,
                };
                editor.add_history_entry(input.as_str());
                repl.evaluate(input).map_err(Error::Command)?;
                if let Some(history) = R::HISTORY {
                    editor.save_history(history).map_err(Error::Readline)?;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("Bye!");
                break Ok(());
            }
            Err(e) => break Err(Error::Readline(e)),
        }
    }
}
