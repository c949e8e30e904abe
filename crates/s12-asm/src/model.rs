use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use s12_rs::{AsmConfig, AsmError, Assembler, Summary};
use tracing::debug;

/// Assemble `input` into `output`.
///
/// The input is opened first, so a missing source leaves no output file
/// behind. Once the output exists, every record written before a failing
/// line stays in it.
pub fn assemble_file<D>(input: &Path, output: &Path, cfg: AsmConfig, diag: &mut D) -> Result<Summary, AsmError>
where
    D: Write + ?Sized,
{
    let src = File::open(input).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AsmError::InputNotFound {
            path: input.display().to_string(),
        },
        _ => AsmError::Io(e),
    })?;
    let mut out = BufWriter::new(File::create(output)?);
    debug!(input = %input.display(), output = %output.display(), ?cfg, "assembling");
    let res = Assembler::new(cfg).run(BufReader::new(src), &mut out, diag);
    out.flush()?;
    res
}

pub fn load_config(path: &Path) -> Result<AsmConfig> {
    let text = fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg = serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}

pub fn write_listing_json(path: &Path, summary: &Summary) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut w = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut w, &summary.records)?;
    writeln!(w)?;
    w.flush()?;
    Ok(())
}
