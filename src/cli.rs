use clap::Parser;

/// Universal Civ Time converter.
///
/// Asks for a real-world time and prints it on the UCT calendar, or the
/// other way round.
#[derive(Parser)]
#[command(
    name = "uct-converter",
    version,
    about = "Convert between real-world time and Universal Civ Time"
)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
