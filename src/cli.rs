use clap::Parser;
use std::path::PathBuf;

/// Where the generated tree lands when no override is given, relative to the
/// invocation directory. Matches the source layout the benchmark project
/// compiles from.
pub const DEFAULT_OUTPUT_ROOT: &str = "src/jmh/java";

#[derive(Debug, Parser)]
#[command(version, about = "Regenerates the persistent-collection benchmark source matrix")]
pub struct Cli {
  /// Directory that receives the generated sources. The previous contents
  /// are deleted on every run.
  #[arg(long, default_value = DEFAULT_OUTPUT_ROOT)]
  pub output_root: PathBuf,
}
