use crate::builtin;
use crate::command::{Builtin, Flow};
use crate::external;
use crate::lexer;
use crate::reader::{LineSource, ReadOutcome};
use anyhow::Result;
use std::io::Write;

/// Prompt written before each read.
pub const PROMPT: &str = "> ";

/// The interpreter: a builtin table plus the loop that drives it.
///
/// The table is built once in [`Shell::new`] and scanned linearly on every
/// dispatch; there is no other state, so each loop iteration owns nothing
/// beyond its own line and argument vector.
pub struct Shell {
    builtins: Vec<Box<dyn Builtin>>,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            builtins: builtin::table(),
        }
    }

    /// Decides how to execute one argument vector and reports back whether
    /// the loop should keep going.
    ///
    /// An empty vector — blank or all-whitespace line — is a silent no-op.
    /// The first token is matched against the builtin table in order; on a
    /// hit the builtin runs in-process with the remaining tokens, otherwise
    /// the whole vector goes to the external launcher.
    pub fn dispatch(
        &mut self,
        argv: &[&str],
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Flow> {
        let Some(name) = argv.first() else {
            return Ok(Flow::Continue);
        };
        for b in &self.builtins {
            if b.name() == *name {
                return b.run(&argv[1..], out, err);
            }
        }
        external::launch(argv, err)
    }

    /// The command loop: read, tokenize, dispatch, repeat.
    ///
    /// Stops when the source reports end-of-input or a dispatch answers
    /// `Flow::Terminate` (the `exit` builtin). Both are normal termination.
    pub fn run(
        &mut self,
        source: &mut dyn LineSource,
        prompt: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<()> {
        loop {
            let line = match source.read_line(prompt)? {
                ReadOutcome::Line(line) => line,
                ReadOutcome::Eof => break,
            };
            let argv = lexer::split_line(&line);
            match self.dispatch(&argv, out, err)? {
                Flow::Continue => {}
                Flow::Terminate => break,
            }
        }
        Ok(())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::Stream;
    use std::io::Cursor;

    fn dispatch_collecting(argv: &[&str]) -> (Flow, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let flow = Shell::new()
            .dispatch(argv, &mut out, &mut err)
            .expect("dispatch");
        (
            flow,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn empty_vector_is_a_silent_no_op() {
        let (flow, out, err) = dispatch_collecting(&[]);
        assert_eq!(flow, Flow::Continue);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn help_goes_to_the_builtin_table() {
        let (flow, out, _err) = dispatch_collecting(&["help"]);
        assert_eq!(flow, Flow::Continue);
        assert!(out.contains("built in"));
    }

    #[test]
    fn exit_signals_termination() {
        let (flow, _out, _err) = dispatch_collecting(&["exit"]);
        assert_eq!(flow, Flow::Terminate);
    }

    #[test]
    #[cfg(unix)]
    fn external_exit_status_does_not_affect_continuation() {
        let (ok_flow, _, _) = dispatch_collecting(&["true"]);
        let (fail_flow, _, _) = dispatch_collecting(&["false"]);
        assert_eq!(ok_flow, Flow::Continue);
        assert_eq!(fail_flow, Flow::Continue);
    }

    #[test]
    fn unknown_command_reports_and_continues() {
        let (flow, _out, err) = dispatch_collecting(&["minish-definitely-not-here"]);
        assert_eq!(flow, Flow::Continue);
        assert!(err.contains("minish-definitely-not-here"));
    }

    #[test]
    fn loop_stops_at_exit_and_leaves_the_rest_unread() {
        let mut source = Stream::new(Cursor::new(b"help\nexit\nnever-run\n".to_vec()));
        let mut out = Vec::new();
        let mut err = Vec::new();

        Shell::new()
            .run(&mut source, "", &mut out, &mut err)
            .expect("run");

        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("built in"), "help ran before exit");
        // The line after exit must still be sitting in the source.
        match source.read_line("").unwrap() {
            crate::reader::ReadOutcome::Line(l) => assert_eq!(l, "never-run"),
            crate::reader::ReadOutcome::Eof => panic!("loop read past exit"),
        }
    }

    #[test]
    fn loop_stops_on_end_of_input() {
        let mut source = Stream::new(Cursor::new(Vec::new()));
        let mut out = Vec::new();
        let mut err = Vec::new();

        Shell::new()
            .run(&mut source, "", &mut out, &mut err)
            .expect("run");

        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn blank_lines_keep_the_loop_alive() {
        let mut source = Stream::new(Cursor::new(b"\n   \nexit\n".to_vec()));
        let mut out = Vec::new();
        let mut err = Vec::new();

        Shell::new()
            .run(&mut source, "", &mut out, &mut err)
            .expect("run");

        assert!(out.is_empty());
        assert!(err.is_empty());
    }
}
