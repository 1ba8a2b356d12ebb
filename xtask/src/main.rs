//! A task runner using the [xtask spec][1].
//!
//! [1]: https://github.com/matklad/cargo-xtask

use anyhow::{anyhow, bail, Result};
use pico_args::Arguments;
use std::path::Path;
use xshell::{cmd, Shell};

#[inline]
fn show_help() {
  print!("{}", include_str!("help.txt"));
}

fn finish_args(args: Arguments) -> Result<()> {
  let args = args.finish();
  if !args.is_empty() {
    bail!("unused arguments: {args:?}");
  }
  Ok(())
}

fn run() -> Result<()> {
  let mut args = Arguments::from_env();
  if args.contains(["-h", "--help"]) {
    show_help();
    return Ok(());
  }
  let Some(subcommand) = args.subcommand()? else {
    show_help();
    return Ok(());
  };
  let sh = Shell::new()?;
  let root = Path::new(env!("CARGO_MANIFEST_DIR")).parent().ok_or_else(|| anyhow!("no root"))?;
  sh.change_dir(root);
  match subcommand.as_str() {
    "ci" => {
      finish_args(args)?;
      cmd!(sh, "cargo test --no-run").run()?;
      cmd!(sh, "cargo fmt -- --check").run()?;
      cmd!(sh, "cargo clippy").run()?;
      cmd!(sh, "cargo test").run()?;
      // call sites must still be blamed correctly with optimizations on.
      cmd!(sh, "cargo test --release").run()?;
    }
    "doc" => {
      finish_args(args)?;
      cmd!(sh, "cargo doc --no-deps -p must -p zero-value").run()?;
    }
    s => bail!("unknown subcommand: {s}"),
  }
  Ok(())
}

fn main() {
  match run() {
    Ok(()) => {}
    Err(e) => {
      eprintln!("{e}");
      std::process::exit(1);
    }
  }
}
