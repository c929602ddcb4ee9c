use clap::ArgAction;
use clap::Parser;
use clap::Subcommand;

/// Environment variable that overrides `--verbose`.
pub const LOG_ENV: &str = "YACHT_LOG";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, global = true, help = "Print machine-readable JSON")]
    pub json: bool,
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Raise log verbosity")]
    pub verbose: u8,
    #[command(subcommand)]
    pub query: Query,
}

#[derive(Subcommand, Debug)]
pub enum Query {
    #[command(
        about = "Rank every category a roll qualifies for",
        alias = "eval"
    )]
    Evaluate {
        #[arg(required = true, num_args = 1.., help = "Five dice, e.g. `4 4 4 1 1` or `44411`")]
        dice: Vec<String>,
    },
    #[command(about = "Throw five random dice and rank them", alias = "throw")]
    Roll {
        #[arg(long, help = "Seed for a reproducible sequence of throws")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1, help = "Number of throws")]
        count: usize,
    },
    #[command(about = "Show how to play, or the rule for one category")]
    Rules {
        #[arg(help = "Category name, e.g. `fullHouse`")]
        category: Option<String>,
    },
}

impl Args {
    /// `YACHT_LOG` wins over `-v` flags when it names a valid level.
    pub fn level(&self) -> log::LevelFilter {
        self.level_with(std::env::var(LOG_ENV).ok().as_deref())
    }
    fn level_with(&self, env: Option<&str>) -> log::LevelFilter {
        env.and_then(|s| s.parse::<log::LevelFilter>().ok())
            .unwrap_or(match self.verbose {
                0 => log::LevelFilter::Warn,
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            })
    }
}
