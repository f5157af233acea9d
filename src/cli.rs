use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "erun", about = "Entry-point runner for a caller-supplied executor", version)]
pub struct Cli {
    /// Executor command to run through the platform shell.
    ///
    /// The entry input arrives as `$1` (Unix) and the ERUN_INPUT environment
    /// variable; the command's stdout becomes the printed result. Falls back
    /// to the EXECUTOR_CMD config key.
    #[arg(short = 'x', long = "executor", value_name = "CMD")]
    pub executor: Option<String>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
