//! Interactive yes/no confirmation with default-to-no semantics.
//!
//! The reply rules are deliberately strict: only `y` or `Y` (after
//! trimming whitespace) accepts. An empty reply, `yes`, or anything else
//! declines. The read is factored over `BufRead`/`Write` so tests can
//! inject replies without a terminal.

use std::io::{self, BufRead, Write};

/// Returns true only for an exact `y` or `Y` reply.
pub fn is_affirmative(reply: &str) -> bool {
    matches!(reply.trim(), "y" | "Y")
}

/// Print `question` with a `[y/N]` suffix and read one reply line.
///
/// EOF on the input (no terminal attached) counts as decline.
pub fn confirm_from<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> io::Result<bool> {
    write!(out, "{question} [y/N] ")?;
    out.flush()?;

    let mut reply = String::new();
    input.read_line(&mut reply)?;
    Ok(is_affirmative(&reply))
}

/// Ask on the controlling terminal (stdin/stdout).
pub fn confirm(question: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    confirm_from(&mut input, &mut out, question)
}
