//! autogen-parameters — regenerate the Cython adapter sources for the device
//! parameter API from the C++ header.
//!
//! Replacement for the Python helper `autogen_parameters.py`. Scans
//! `visiontransfer/deviceparameters.h` for the inline-defined parameter
//! accessors and writes the extern declarations (`.pxd`) plus the wrapper
//! class (`.pyx.in`), byte-identical to the script's output so the
//! downstream docstring substitution and Cython build are unaffected.

mod casing;
mod emit;
mod model;
mod scanner;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

/// Header scanned for inline parameter accessors, relative to the srcdir.
const HEADER: &str = "visiontransfer/deviceparameters.h";

/// Generated extern declarations consumed by the Cython build.
const PXD_FILE: &str = "visiontransfer/visiontransfer_parameters_cpp_autogen.pxd";

/// Generated wrapper class; docstring placeholders are substituted later.
const PYX_FILE: &str = "visiontransfer/visiontransfer_parameters_autogen.pyx.in";

#[derive(Parser)]
#[command(
    name = "autogen-parameters",
    about = "Generate the Cython adapter sources for the device parameter API"
)]
struct Cli {
    /// Base directory of the libvisiontransfer sources
    #[arg(long, env = "LIBVISIONTRANSFER_SRCDIR", default_value = "../..")]
    srcdir: PathBuf,

    /// Directory the generated visiontransfer/ sources are written to
    #[arg(short = 'o', long, default_value = ".")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.srcdir.is_dir() {
        bail!(
            "could not open library base dir {}, please set a correct LIBVISIONTRANSFER_SRCDIR",
            cli.srcdir.display()
        );
    }

    let header_path = cli.srcdir.join(HEADER);
    let header = fs::read_to_string(&header_path)
        .with_context(|| format!("failed to read {}", header_path.display()))?;

    let events = scanner::scan(&header);

    let generated_dir = cli.output.join("visiontransfer");
    fs::create_dir_all(&generated_dir).with_context(|| {
        format!(
            "failed to create output directory: {}",
            generated_dir.display()
        )
    })?;

    write_generated(&cli.output.join(PXD_FILE), &emit::pxd::emit(&events))?;
    write_generated(&cli.output.join(PYX_FILE), &emit::pyx::emit(&events))?;

    Ok(())
}

fn write_generated(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
