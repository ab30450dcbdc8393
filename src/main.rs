// Arc Raiders stash advisor - command line entry point

use arc_stash::{verbosity, v_error, v_summary, Advisor, ArcConfig, DEFAULT_CONFIG_PATH};
use arc_stash::advisor::Report;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "arc_stash", version, about = "Sell, recycle or hold: advice for your Arc Raiders stash")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Increase output detail (-v basic, -vv full)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Append raw API responses to arc_api_debug.log
    #[arg(long)]
    api_log: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Items worth more sold than recycled
    Sell {
        #[arg(long)]
        all: bool,
    },
    /// Items worth more recycled than sold
    Recycle {
        #[arg(long)]
        all: bool,
    },
    /// Sell / recycle / hold plan for the whole stash
    Optimize {
        #[arg(long)]
        all: bool,
        /// Do not hold items back for quests
        #[arg(long)]
        no_quests: bool,
        /// Minimum credit difference required to act on an item
        #[arg(long)]
        min_profit: Option<u64>,
        /// Hold items needed for hideout upgrades
        #[arg(long)]
        hideout: bool,
        /// Hold items needed for projects
        #[arg(long)]
        projects: bool,
    },
    /// Stash items that recycle into the named item
    Find {
        #[arg(long)]
        all: bool,
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Show the authenticated user's profile
    Profile,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    verbosity::set_verbosity_level(cli.verbose);

    let config = ArcConfig::load_or_create(&cli.config)?;
    config.validate()?;
    config.print_summary();

    let mut advisor = Advisor::new(config)?;
    advisor.client.set_api_logging(cli.api_log);

    let outcome = run(&mut advisor, cli.command).await;
    if let Err(e) = &outcome {
        v_error!("❌ {}", e);
    }
    outcome
}

async fn run(advisor: &mut Advisor, command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let report: Report = match command {
        Command::Sell { all } => advisor.sell_report(all).await?,
        Command::Recycle { all } => advisor.recycle_report(all).await?,
        Command::Optimize { all, no_quests, min_profit, hideout, projects } => {
            let mut params = advisor.config.optimizer.clone();
            if no_quests {
                params.quest_aware = false;
            }
            if let Some(min_profit) = min_profit {
                params.min_profit_threshold = min_profit;
            }
            params.include_hideout |= hideout;
            params.include_projects |= projects;
            advisor.optimize_report(&params, all).await?
        }
        Command::Find { all, query } => {
            let query = query.join(" ");
            advisor.find_report(query.trim(), all).await?
        }
        Command::Profile => {
            let profile = advisor.profile().await?;
            v_summary!("👤 {} (level {})", profile.username, profile.player_level);
            v_summary!("   Member since: {}", profile.member_since);
            return Ok(());
        }
    };

    report.print();
    Ok(())
}
