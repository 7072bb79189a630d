use anyhow::Result;
use thiserror::Error;
use untyped::{church, evaluate, evaluate_bounded, EvalError};
use util::repl;

#[derive(Debug, Error)]
enum CommandError {
    #[error("Unknown example `{0}`, :list shows the available ones")]
    UnknownExample(String),
    #[error("Expected a number or `off`, found `{0}`")]
    InvalidFuel(String),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

type CommandResult = Result<String, CommandError>;

#[derive(Default)]
struct Repl {
    fuel: Option<usize>,
}

impl Repl {
    fn list() -> String {
        church::examples()
            .iter()
            .map(|e| {
                if e.terminates {
                    format!("{:<12}{}", e.name, e.term)
                } else {
                    format!("{:<12}{}  (diverges)", e.name, e.term)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn evaluate(&self, name: &str) -> CommandResult {
        let example =
            church::find_example(name).ok_or_else(|| CommandError::UnknownExample(name.into()))?;
        let value = match self.fuel {
            Some(fuel) => evaluate_bounded(&example.term, fuel)?,
            None => {
                if !example.terminates {
                    log::warn!("`{name}` has no normal form; this will exhaust the stack");
                }
                evaluate(&example.term)
            }
        };
        Ok(format!("{} = {value}", example.term))
    }

    fn set_fuel(&mut self, input: &str) -> CommandResult {
        self.fuel = match input {
            "off" => None,
            n => Some(
                n.parse()
                    .map_err(|_| CommandError::InvalidFuel(n.to_string()))?,
            ),
        };
        Ok(match self.fuel {
            Some(fuel) => format!("fuel: {fuel} beta reductions"),
            None => "fuel: unbounded".to_string(),
        })
    }

    fn show_help() -> String {
        r#"
name                -- same as :evaluate name
:list               -- show the example terms
:evaluate   name    -- show the evaluation result of an example
:fuel       n|off   -- limit the number of beta reductions, or lift the limit
:help               -- show this message
        "#
        .trim()
        .to_string()
    }

    fn handle_repl_input(&mut self, input: &str) -> CommandResult {
        let input = input.trim();
        let (cmd, input) = if let Some(stripped) = input.strip_prefix(':') {
            stripped
                .trim_start()
                .split_once(' ')
                .map(|(cmd, rest)| (cmd, rest.trim()))
                .unwrap_or((stripped, ""))
        } else {
            ("", input)
        };
        match cmd {
            "l" | "ls" | "list" => Ok(Self::list()),
            "" | "e" | "eval" | "evaluate" => self.evaluate(input),
            "f" | "fuel" => self.set_fuel(input),
            "h" | "he" | "hel" | "help" => Ok(Self::show_help()),
            _ => {
                eprintln!("Unknown command {cmd}");
                Ok(Self::show_help())
            }
        }
    }
}

impl repl::Repl for Repl {
    type Error = anyhow::Error;
    const HISTORY: Option<&'static str> = Some("/tmp/untyped.history");
    fn evaluate(&mut self, input: String) -> Result<(), Self::Error> {
        if input.trim().is_empty() {
            return Ok(());
        }
        match self.handle_repl_input(&input) {
            Ok(output) => println!("{output}"),
            Err(e) => eprintln!("Error: {e}"),
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    println!("Hi, this is an untyped lambda calculus REPL. :h to show help");
    println!();
    repl::start_repl(Repl::default())?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_evaluate_example() {
        let mut repl = Repl::default();
        assert_eq!(
            repl.handle_repl_input("snd").unwrap(),
            "[(λt.[t (λt.(λf.f))]) [[(λf.(λx.(λy.[[y f] x]))) (λt.(λf.t))] f]] = f"
        );
        assert_eq!(
            repl.handle_repl_input(":eval stuck").unwrap(),
            "[[f f] f] = [[f f] f]"
        );
    }

    #[test]
    fn test_fuel() {
        let mut repl = Repl::default();
        assert_eq!(
            repl.handle_repl_input(":fuel 100").unwrap(),
            "fuel: 100 beta reductions"
        );
        assert!(matches!(
            repl.handle_repl_input("omega"),
            Err(CommandError::Eval(EvalError::OutOfFuel { limit: 100 }))
        ));
        assert!(matches!(
            repl.handle_repl_input(":fuel lots"),
            Err(CommandError::InvalidFuel(_))
        ));
        assert_eq!(repl.handle_repl_input(":fuel off").unwrap(), "fuel: unbounded");
        assert_eq!(repl.fuel, None);
    }

    #[test]
    fn test_unknown_example() {
        let mut repl = Repl::default();
        assert!(matches!(
            repl.handle_repl_input("nope"),
            Err(CommandError::UnknownExample(name)) if name == "nope"
        ));
    }

    #[test]
    fn test_list() {
        let listing = Repl::list();
        assert!(listing.lines().any(|l| l.starts_with("omega") && l.ends_with("(diverges)")));
        assert_eq!(listing.lines().count(), church::examples().len());
    }
}
