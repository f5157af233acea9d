//! The entry routine: banner, one await, result line.

use std::io::Write;

use anyhow::Result;

use crate::executor::Executor;

/// First line written on every invocation.
pub const BANNER: &str = "Executing main";

/// The input handed to the executor, unconditionally.
pub const ENTRY_INPUT: &str = "world";

/// Write the banner, await `executor.execute("world")`, write the resolved
/// value as the second line.
///
/// The banner is flushed before the call is issued, so on failure it is the
/// only visible output; the executor's error propagates to the caller
/// untouched and no second line is written. Each invocation issues a fresh
/// call, nothing is memoized.
pub async fn run<E: Executor, W: Write>(executor: &E, mut out: W) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    out.flush()?;
    let result = executor.execute(ENTRY_INPUT).await?;
    writeln!(out, "{result}")?;
    Ok(())
}
