use anyhow::Result;
use clap::{Parser, Subcommand};
use omnyom::cli::parse_date;
use time::Date;

/// omnyom - meal subscription delivery scheduling
#[derive(Parser)]
#[command(name = "omnyom")]
#[command(
    about = "Delivery, payment and menu scheduling for meal subscriptions",
    long_about = None
)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the delivery schedule and payment attempts of a subscription
    Schedule {
        /// First delivery date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        start: Date,

        /// Subscription length in weeks (1, 2 or 4)
        #[arg(long, default_value_t = 1)]
        weeks: u32,

        /// three-week (주3회) or daily (매일배송)
        #[arg(long, default_value = "three-week")]
        frequency: String,
    },
    /// Print the date-picker calendar window
    Calendar {
        /// Reference date, defaults to today (UTC)
        #[arg(long, value_parser = parse_date)]
        today: Option<Date>,

        /// First delivery date; the window stretches to its last delivery
        #[arg(long, value_parser = parse_date)]
        start: Option<Date>,

        #[arg(long, default_value_t = 1)]
        weeks: u32,

        #[arg(long, default_value = "three-week")]
        frequency: String,
    },
    /// Check whether a date may be chosen as the first delivery
    Eligible {
        #[arg(long, value_parser = parse_date)]
        date: Date,

        #[arg(long, value_parser = parse_date)]
        today: Option<Date>,
    },
    /// List every date that may be chosen as the first delivery
    Selectable {
        #[arg(long, value_parser = parse_date)]
        today: Option<Date>,
    },
    /// Show subscription prices
    Quote {
        /// Only this period (1, 2 or 4 weeks)
        #[arg(long)]
        weeks: Option<u32>,
    },
    /// Place an order and print it
    Order {
        #[arg(long, value_parser = parse_date)]
        start: Date,

        #[arg(long, default_value_t = 1)]
        weeks: u32,

        #[arg(long, default_value = "three-week")]
        frequency: String,

        #[arg(long, value_parser = parse_date)]
        today: Option<Date>,
    },
    /// Print the monthly menu rotation for a stage
    Menu {
        /// early (초기) or mid (중기)
        #[arg(long, default_value = "early")]
        stage: String,

        #[arg(long)]
        year: i32,

        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
        month: u8,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = omnyom::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    omnyom::observability::init_observability(
        "omnyom",
        env!("CARGO_PKG_VERSION"),
        &config.observability,
    )?;

    let json = cli.json;
    let today = |date: Option<Date>| date.unwrap_or_else(omnyom::cli::today);

    let result = match cli.command {
        Commands::Schedule {
            start,
            weeks,
            frequency,
        } => omnyom::cli::schedule(start, weeks, &frequency, json),
        Commands::Calendar {
            today: date,
            start,
            weeks,
            frequency,
        } => omnyom::cli::calendar(&config, today(date), start, weeks, &frequency, json),
        Commands::Eligible { date, today: on } => {
            omnyom::cli::eligible(&config, date, today(on), json)
        }
        Commands::Selectable { today: on } => omnyom::cli::selectable(&config, today(on), json),
        Commands::Quote { weeks } => omnyom::cli::quote(&config, weeks, json),
        Commands::Order {
            start,
            weeks,
            frequency,
            today: on,
        } => omnyom::cli::place_order(&config, start, weeks, &frequency, today(on), json),
        Commands::Menu { stage, year, month } => omnyom::cli::menu(&stage, year, month, json),
    };

    if let Err(err) = &result {
        tracing::error!(err = %err, "command failed");
    }

    result
}
