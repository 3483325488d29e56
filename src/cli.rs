use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Run prefix: reads `<PREFIX>.txt`, writes `<PREFIX>.png`
    #[arg(value_name = "PREFIX", required_unless_present = "input")]
    pub prefix: Option<String>,

    /// Input table path (overrides the prefix-derived path)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output image path (default: `<PREFIX>.png`, or the input path with a
    /// `png` extension)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Path to appearance config TOML
    #[arg(long, default_value = "qtraj.toml")]
    pub config: String,
}

impl Args {
    /// Resolve the input/output pair from prefix and overrides.
    pub fn resolve_paths(&self) -> (PathBuf, PathBuf) {
        let input = match (&self.input, &self.prefix) {
            (Some(path), _) => path.clone(),
            (None, Some(prefix)) => PathBuf::from(format!("{prefix}.txt")),
            // clap rejects this combination before we get here.
            (None, None) => unreachable!("prefix is required when --input is absent"),
        };
        let output = match (&self.output, &self.prefix) {
            (Some(path), _) => path.clone(),
            (None, Some(prefix)) => PathBuf::from(format!("{prefix}.png")),
            (None, None) => input.with_extension("png"),
        };
        (input, output)
    }
}
