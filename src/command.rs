use anyhow::Result;
use std::io::Write;

/// Tells the command loop whether to keep prompting after a dispatch.
///
/// Every dispatched command — builtin or external launch — produces one of
/// these; `Terminate` is only ever produced by the `exit` builtin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Terminate,
}

/// A command implemented inside the interpreter, executed without spawning
/// a child process.
///
/// `args` holds everything after the command name. Output and diagnostics go
/// to the provided sinks so the command can be exercised against in-memory
/// buffers in tests. Recoverable problems (bad argument, failed chdir) are
/// written to `err` and answered with `Flow::Continue`; an `Err` return is
/// reserved for a broken sink, which the loop treats as fatal.
pub trait Builtin {
    /// Canonical name the dispatcher matches against, e.g. "cd".
    fn name(&self) -> &'static str;

    fn run(&self, args: &[&str], out: &mut dyn Write, err: &mut dyn Write) -> Result<Flow>;
}
