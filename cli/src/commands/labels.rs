use actionhub_core::labels::action_labels;
use anyhow::Result;
use std::io::{self, Write};

pub fn execute(limit: Option<usize>) -> Result<()> {
    let mut out = io::stdout().lock();
    print_labels(&mut out, limit)?;
    Ok(())
}

fn print_labels<W: Write>(out: &mut W, limit: Option<usize>) -> io::Result<()> {
    let labels = action_labels();
    let shown = limit.unwrap_or(labels.len()).min(labels.len());

    for action in &labels[..shown] {
        writeln!(out, "{}", action)?;
    }

    if shown < labels.len() {
        writeln!(out, "... {} more in this sample", labels.len() - shown)?;
    }

    Ok(())
}
