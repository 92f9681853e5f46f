use crate::command::{Builtin, Flow};
use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use std::env;
use std::io::Write;
use std::marker::PhantomData;

/// Builtin names in dispatch order. `help` prints this list, and `table`
/// must stay in the same order.
pub const BUILTIN_NAMES: [&str; 3] = ["cd", "help", "exit"];

/// Builds the builtin table the dispatcher scans.
///
/// Constructed once at startup and owned by the `Shell`; never mutated
/// afterwards.
pub fn table() -> Vec<Box<dyn Builtin>> {
    vec![
        Box::new(Entry::<Cd>::default()),
        Box::new(Entry::<Help>::default()),
        Box::new(Entry::<Exit>::default()),
    ]
}

/// A builtin whose arguments are declared with [`argh`] (`FromArgs`).
///
/// The blanket [`Builtin`] impl on [`Entry`] handles parsing, so each
/// command only describes its arguments and what it does with them.
pub(crate) trait BuiltinCommand: FromArgs {
    /// Canonical name of the command, e.g. "cd".
    const NAME: &'static str;

    fn execute(self, out: &mut dyn Write, err: &mut dyn Write) -> Result<Flow>;
}

/// Table entry adapting a [`BuiltinCommand`] to the [`Builtin`] object the
/// dispatcher scans.
pub(crate) struct Entry<T> {
    _phantom: PhantomData<T>,
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: BuiltinCommand> Builtin for Entry<T> {
    fn name(&self) -> &'static str {
        T::NAME
    }

    fn run(&self, args: &[&str], out: &mut dyn Write, err: &mut dyn Write) -> Result<Flow> {
        match T::from_args(&[T::NAME], args) {
            Ok(cmd) => cmd.execute(out, err),
            // Bad arguments (or `--help`): report and keep the loop going.
            Err(EarlyExit { output, status }) => {
                if status.is_err() {
                    writeln!(err, "{}", output.trim_end())?;
                } else {
                    writeln!(out, "{}", output.trim_end())?;
                }
                Ok(Flow::Continue)
            }
        }
    }
}

#[derive(FromArgs)]
/// Change the working directory.
pub(crate) struct Cd {
    /// directory to change to, passed through unmodified
    #[argh(positional)]
    path: String,
}

impl BuiltinCommand for Cd {
    const NAME: &'static str = "cd";

    fn execute(self, _out: &mut dyn Write, err: &mut dyn Write) -> Result<Flow> {
        if let Err(e) = env::set_current_dir(&self.path) {
            writeln!(err, "cd: {}: {}", self.path, e)?;
        }
        Ok(Flow::Continue)
    }
}

#[derive(FromArgs)]
/// Show the builtin commands.
pub(crate) struct Help {}

impl BuiltinCommand for Help {
    const NAME: &'static str = "help";

    fn execute(self, out: &mut dyn Write, _err: &mut dyn Write) -> Result<Flow> {
        writeln!(out, "minish: type a program name and arguments, then press enter.")?;
        writeln!(out, "The following commands are built in:")?;
        for name in BUILTIN_NAMES {
            writeln!(out, "  {name}")?;
        }
        writeln!(out, "Use the man command for information on other programs.")?;
        Ok(Flow::Continue)
    }
}

#[derive(FromArgs)]
/// Leave the shell.
pub(crate) struct Exit {
    /// ignored; exit takes no meaningful arguments
    #[argh(positional, greedy)]
    _rest: Vec<String>,
}

impl BuiltinCommand for Exit {
    const NAME: &'static str = "exit";

    fn execute(self, _out: &mut dyn Write, _err: &mut dyn Write) -> Result<Flow> {
        Ok(Flow::Terminate)
    }
}
