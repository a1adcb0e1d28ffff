//! Recovery of the command-line payload.
//!
//! Under the windowed (GUI-subsystem) entry contract the operating system
//! hands the process its command line as one unsplit string: everything
//! after the program name. Portable Rust only sees the split argument
//! vector, so the tail is reconstructed by joining the arguments with single
//! spaces. The caller's quoting is not recoverable; no consumer depends on
//! it.

/// Recover the command-line tail of the current process.
///
/// An invocation with no arguments yields the empty string, which the
/// record renders as a bare `Some text: ` payload line.
pub fn command_tail() -> String {
    let args: Vec<String> = std::env::args().skip(1).collect();
    tracing::debug!(argc = args.len(), args = ?args, "process arguments");
    join_tail(args)
}

/// Join an argument vector back into the single unsplit tail string.
pub fn join_tail<I>(args: I) -> String
where
    I: IntoIterator<Item = String>,
{
    args.into_iter().collect::<Vec<_>>().join(" ")
}
