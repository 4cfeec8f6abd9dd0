use clap::Parser;
use std::ffi::OsString;

/// Command-line surface. Every argument is absorbed and discarded, including
/// the ones clap would normally act on.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "hello-world")]
#[command(about = "Print a greeting and exit")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub ignored: Vec<OsString>,
}

impl CliConfig {
    pub fn load() -> Self {
        Self::load_from(std::env::args_os())
    }

    /// Never fails: anything clap rejects falls back to the empty config.
    pub fn load_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).unwrap_or_default()
    }

    pub fn ignored_count(&self) -> usize {
        self.ignored.len()
    }
}
