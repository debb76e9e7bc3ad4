// crates/tabtrim-cli/src/io.rs

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::Context;

/// Open the input stream: a file when a path is given, locked stdin otherwise.
pub fn open_input(path: Option<&Path>) -> anyhow::Result<Box<dyn Read>> {
    match path {
        Some(p) => {
            let f = File::open(p).with_context(|| format!("open input: {}", p.display()))?;
            Ok(Box::new(f))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Open the output stream: a file when a path is given, stdout otherwise.
pub fn open_output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    match path {
        Some(p) => {
            let f = File::create(p).with_context(|| format!("create output: {}", p.display()))?;
            Ok(Box::new(f))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}
