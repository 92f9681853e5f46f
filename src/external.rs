use crate::command::Flow;
use anyhow::Result;
use nix::sys::wait::{WaitPidFlag, WaitStatus, waitpid};
use nix::unistd::Pid;
use std::io::Write;
use std::process::Command;

/// Runs a non-builtin argument vector as an external program and blocks
/// until the child is gone.
///
/// The program is resolved through the platform's executable search path.
/// Launch failures — the executable does not exist, is not executable, or
/// the process could not be created at all — are written to `err`; they
/// never stop the loop, so the answer is `Flow::Continue` either way. The
/// child's own exit status is not inspected.
pub fn launch(argv: &[&str], err: &mut dyn Write) -> Result<Flow> {
    let Some((name, args)) = argv.split_first() else {
        return Ok(Flow::Continue);
    };
    match Command::new(name).args(args).spawn() {
        Ok(child) => wait_for(Pid::from_raw(child.id() as i32)),
        Err(e) => writeln!(err, "minish: {name}: {e}")?,
    }
    Ok(Flow::Continue)
}

/// Blocks until the child has exited or been killed by a signal, reaping it.
///
/// `WUNTRACED` makes waitpid report stop notifications as well; a merely
/// stopped child does not end the wait, so the loop keeps querying until a
/// terminal state arrives. No handle survives this function.
fn wait_for(pid: Pid) {
    loop {
        match waitpid(pid, Some(WaitPidFlag::WUNTRACED)) {
            Ok(WaitStatus::Exited(..)) | Ok(WaitStatus::Signaled(..)) => break,
            // Stopped or continued; the child is still ours to wait on.
            Ok(_) => continue,
            Err(_) => break,
        }
    }
}
