//! Expected goals CLI
//!
//! Scores shot event tables and prints shot leaders and shot-map summaries.

use clap::{Parser, Subcommand};
use xg::{Config, Result};

#[derive(Parser)]
#[command(name = "xg")]
#[command(about = "Expected goals for soccer shot event logs", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every shot in one or more event files
    Score {
        /// Event CSV files, concatenated in order
        #[arg(required = true)]
        files: Vec<String>,
        /// Only show shots by this player
        #[arg(long)]
        player: Option<String>,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
        /// Add sb_x/sb_y columns on a 120 x 80 StatsBomb pitch
        #[arg(long)]
        statsbomb: bool,
    },
    /// Per-player shooting totals
    Leaders {
        /// Event CSV files, concatenated in order
        #[arg(required = true)]
        files: Vec<String>,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Shot-map totals for a team or a single player
    Summary {
        /// Event CSV files, concatenated in order
        #[arg(required = true)]
        files: Vec<String>,
        /// Only count shots by this player
        #[arg(long)]
        player: Option<String>,
    },
    /// Write a default config file
    Init,
}

#[derive(Clone, Debug)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use table, json, or csv.", s)),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    let result = match cli.command {
        Commands::Score {
            files,
            player,
            format,
            statsbomb,
        } => commands::score(&config, &files, player.as_deref(), format, statsbomb),
        Commands::Leaders { files, format } => commands::leaders(&config, &files, format),
        Commands::Summary { files, player } => {
            commands::summary(&config, &files, player.as_deref())
        }
        Commands::Init => commands::init(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use xg::data::{self, Coordinates};
    use xg::stats::{filter_player, shot_leaders, PlayerFilter, ShotMapSummary};
    use xg::{calc_xg, ModelSet, ScoredShot, XgScorer};

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);

        std::fs::create_dir_all("models")?;
        println!("Created models/ directory");

        println!("\nNext steps:");
        println!(
            "  1. Place the open-play model at {}",
            config.models.op_path
        );
        println!(
            "  2. Place the non-open-play model at {}",
            config.models.non_op_path
        );
        println!("  3. Run 'xg score <shots.csv>' to score shots");

        Ok(())
    }

    /// Load models, read every file and score the shots
    fn scored_shots(config: &Config, files: &[String]) -> Result<Vec<ScoredShot>> {
        let models = ModelSet::load(&config.models)?;
        let scorer = XgScorer::with_config(models, &config.scoring)?;

        let events = data::load_events(files)?;
        log::info!("Loaded {} events from {} file(s)", events.len(), files.len());

        let shots = calc_xg(&events, &scorer, config.scoring.malformed)?;
        log::info!("Scored {} shots", shots.len());
        Ok(shots)
    }

    pub fn score(
        config: &Config,
        files: &[String],
        player: Option<&str>,
        format: OutputFormat,
        statsbomb: bool,
    ) -> Result<()> {
        let shots = scored_shots(config, files)?;
        let filter = PlayerFilter::from_arg(player);
        let selected: Vec<ScoredShot> = filter_player(&shots, &filter)
            .into_iter()
            .cloned()
            .collect();

        let coordinates = if statsbomb {
            Coordinates::StatsBomb
        } else {
            Coordinates::Event
        };

        match format {
            OutputFormat::Table => {
                println!(
                    "{:<24} {:>6}  {:<10} {:<8} {:<16}",
                    "Player", "xG", "Outcome", "Shot", "Situation"
                );
                println!("{}", "─".repeat(70));
                for s in &selected {
                    println!(
                        "{:<24} {:>6.2}  {:<10} {:<8} {:<16}",
                        s.player(),
                        s.xg,
                        s.shot.descriptor.outcome,
                        s.shot.descriptor.mechanism,
                        s.shot.descriptor.situation
                    );
                }
            }
            OutputFormat::Json => {
                println!("{}", data::to_json(&selected, coordinates)?);
            }
            OutputFormat::Csv => {
                data::write_scored_csv(std::io::stdout().lock(), &selected, coordinates)?;
            }
        }

        Ok(())
    }

    pub fn leaders(config: &Config, files: &[String], format: OutputFormat) -> Result<()> {
        let shots = scored_shots(config, files)?;
        let leaders = shot_leaders(&shots);

        match format {
            OutputFormat::Table => {
                println!(
                    "{:<24} {:>5} {:>5} {:>5} {:>5} {:>7} {:>6} {:>6} {:>7} {:>7} {:>8}",
                    "Player",
                    "Shots",
                    "NP",
                    "OP",
                    "Goals",
                    "G/Shot",
                    "xG",
                    "xG/Sh",
                    "NPxG",
                    "NPxG/Sh",
                    "G-xG"
                );
                println!("{}", "─".repeat(100));
                for p in &leaders {
                    println!(
                        "{:<24} {:>5} {:>5} {:>5} {:>5} {:>7.2} {:>6.2} {:>6.2} {:>7.2} {:>7.2} {:>8.2}",
                        p.player,
                        p.shots,
                        p.non_penalty_shots,
                        p.open_play_shots,
                        p.goals,
                        p.goals_per_shot,
                        p.xg,
                        p.xg_per_shot,
                        p.non_penalty_xg,
                        p.non_penalty_xg_per_shot,
                        p.goals_minus_xg
                    );
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&leaders)?);
            }
            OutputFormat::Csv => {
                let mut writer = csv::Writer::from_writer(std::io::stdout().lock());
                for p in &leaders {
                    writer.serialize(p)?;
                }
                writer.flush()?;
            }
        }

        Ok(())
    }

    pub fn summary(config: &Config, files: &[String], player: Option<&str>) -> Result<()> {
        let shots = scored_shots(config, files)?;
        let filter = PlayerFilter::from_arg(player);
        let s = ShotMapSummary::from_shots(filter_player(&shots, &filter));

        println!("Shot Summary: {}", filter);
        println!("───────────────────────────────");
        println!("  Goals:          {}", s.goals);
        println!("  xG / npxG:      {:.2} / {:.2}", s.xg, s.non_penalty_xg);
        println!("  npxG per shot:  {:.2}", s.non_penalty_xg_per_shot);
        println!("  Total shots:    {}", s.shots);
        println!(
            "  PK shots:       {} ({} scored)",
            s.penalties_taken, s.penalties_scored
        );
        println!(
            "  xG by phase:    open play {:.2}, set piece {:.2}, penalty {:.2}",
            s.xg_open_play, s.xg_set_piece, s.xg_penalty
        );
        println!("  Right foot:     {}", s.right_foot);
        println!("  Left foot:      {}", s.left_foot);
        println!("  Head:           {}", s.head);

        Ok(())
    }
}
