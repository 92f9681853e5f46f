mod builtin;
mod command;
mod external;
mod interpreter;
mod lexer;
mod reader;

use argh::FromArgs;
use interpreter::Shell;
use std::io::{self, IsTerminal};

#[derive(FromArgs)]
/// A small interactive command interpreter: reads a line, runs a builtin or
/// an external program, and repeats until `exit` or end-of-input.
struct Options {
    /// do not print the prompt before each line
    #[argh(switch, short = 'q')]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let options: Options = argh::from_env();
    let prompt = if options.quiet { "" } else { interpreter::PROMPT };

    let mut shell = Shell::new();
    let mut out = io::stdout();
    let mut err = io::stderr();

    let stdin = io::stdin();
    if stdin.is_terminal() {
        let mut source = reader::Editor::new()?;
        shell.run(&mut source, prompt, &mut out, &mut err)
    } else {
        let mut source = reader::Stream::new(stdin.lock());
        shell.run(&mut source, prompt, &mut out, &mut err)
    }
}
