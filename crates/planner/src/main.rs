//! Leveling planner entry point.
mod config;
mod report;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use config::PlannerConfig;
use leveling_content::{FilePlanRepository, PlanLoader, PlanRepository, PlannerState};
use leveling_core::{LevelingPlan, Ruleset};

#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Character leveling planner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the level history of a plan
    Show {
        /// Plan file (.json/.toml) or saved plan name; defaults to PLANNER_PLAN_FILE
        plan: Option<String>,

        /// Ruleset to fold with (classic or remastered)
        #[arg(long)]
        ruleset: Option<String>,

        /// Also print the skills of the last level, including ability bonuses
        #[arg(long)]
        skills: bool,
    },

    /// Report level-ups that break the plan's ruleset
    Check {
        plan: Option<String>,

        #[arg(long)]
        ruleset: Option<String>,
    },

    /// Save a plan file into the data directory
    Import {
        file: PathBuf,

        /// Name to save under; defaults to the file stem
        #[arg(long)]
        name: Option<String>,
    },

    /// List saved plans
    List,

    /// Print a plan file migrated to the current schema as JSON
    Migrate { file: PathBuf },
}

fn main() -> Result<ExitCode> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = PlannerConfig::from_env();

    setup_logging();

    let cli = Cli::parse();
    run(cli.command, &config)
}

/// Logs go to stderr so the report on stdout stays clean.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Commands, config: &PlannerConfig) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Show {
            plan,
            ruleset,
            skills,
        } => {
            let state = resolve_plan(plan.as_deref(), config)?;
            let plan = build_plan(&state, ruleset.as_deref(), config)?;
            let levels = plan.levels();
            tracing::info!(levels = levels.len(), ruleset = %plan.ruleset, "folded plan");

            report::write_levels(&mut stdout, &levels)?;
            if skills && let Some(last) = levels.last() {
                writeln!(stdout)?;
                let shown = last.with_skill_modifiers(&state.abilities.skill_modifiers());
                report::write_skills(&mut stdout, &shown)?;
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Check { plan, ruleset } => {
            let state = resolve_plan(plan.as_deref(), config)?;
            let plan = build_plan(&state, ruleset.as_deref(), config)?;

            if let Err(error) = plan.choices.validate() {
                writeln!(stdout, "character choices: {error}")?;
                return Ok(ExitCode::FAILURE);
            }

            let problems = plan.invalid_level_ups();
            if problems.is_empty() {
                writeln!(
                    stdout,
                    "all {} level-ups are valid under the {} ruleset",
                    plan.level_ups().len(),
                    plan.ruleset
                )?;
                Ok(ExitCode::SUCCESS)
            } else {
                report::write_problems(&mut stdout, &problems)?;
                Ok(ExitCode::FAILURE)
            }
        }

        Commands::Import { file, name } => {
            let state = PlanLoader::load(&file)?;
            let name = match name {
                Some(name) => name,
                None => file_stem(&file)?,
            };
            let repo = FilePlanRepository::new(&config.data_dir)?;
            repo.save(&name, &state)
                .with_context(|| format!("Failed to save plan '{name}'"))?;
            tracing::info!("Imported {} as '{}'", file.display(), name);
            Ok(ExitCode::SUCCESS)
        }

        Commands::List => {
            let repo = FilePlanRepository::new(&config.data_dir)?;
            for name in repo.list()? {
                writeln!(stdout, "{name}")?;
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Migrate { file } => {
            let state = PlanLoader::load(&file)?;
            serde_json::to_writer_pretty(&mut stdout, &state)?;
            writeln!(stdout)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Loads a plan from a file path, a saved plan name, or `PLANNER_PLAN_FILE`.
fn resolve_plan(plan: Option<&str>, config: &PlannerConfig) -> Result<PlannerState> {
    let path = match plan {
        Some(plan) => PathBuf::from(plan),
        None => config
            .plan_file
            .clone()
            .ok_or_else(|| anyhow!("no plan given and PLANNER_PLAN_FILE is not set"))?,
    };

    if path.is_file() {
        return PlanLoader::load(&path);
    }

    let name = path.to_string_lossy();
    let repo = FilePlanRepository::new(&config.data_dir)?;
    repo.load_required(&name)
        .with_context(|| format!("Failed to load saved plan '{name}'"))
}

/// Rebuilds the plan; an explicit ruleset beats `PLANNER_RULESET`, which beats
/// the one stored in the plan, which beats the rules file.
fn build_plan(
    state: &PlannerState,
    ruleset: Option<&str>,
    config: &PlannerConfig,
) -> Result<LevelingPlan> {
    let rules = config.rules()?;
    let explicit = ruleset.map(parse_ruleset).transpose()?;
    let ruleset = match explicit.or(config.ruleset) {
        Some(ruleset) => ruleset,
        None => state.resolved_ruleset(&rules),
    };
    Ok(state.to_plan_with(rules.with_ruleset(ruleset), ruleset))
}

fn parse_ruleset(name: &str) -> Result<Ruleset> {
    name.parse::<Ruleset>()
        .map_err(|_| anyhow!("unknown ruleset '{name}' (expected classic or remastered)"))
}

fn file_stem(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_owned)
        .ok_or_else(|| anyhow!("cannot derive a plan name from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use leveling_core::{
        Attribute, Birthsign, CharacterChoices, Gender, Race, Skill, Specialization,
    };

    fn state(ruleset: Option<Ruleset>) -> PlannerState {
        let mut state = PlannerState::new(
            CharacterChoices {
                race: Race::Nord,
                gender: Gender::Male,
                birthsign: Birthsign::Warrior,
                specialization: Specialization::Combat,
                favored_attributes: vec![Attribute::Strength, Attribute::Endurance],
                major_skills: vec![
                    Skill::Blade,
                    Skill::Block,
                    Skill::HeavyArmor,
                    Skill::Armorer,
                    Skill::Athletics,
                    Skill::Blunt,
                    Skill::Restoration,
                ],
            },
            Ruleset::Classic,
        );
        state.ruleset = ruleset;
        state
    }

    #[test]
    fn explicit_ruleset_beats_environment_and_stored() {
        let config = PlannerConfig {
            ruleset: Some(Ruleset::Classic),
            ..PlannerConfig::default()
        };
        let plan = build_plan(&state(Some(Ruleset::Classic)), Some("remastered"), &config)
            .expect("plan");
        assert_eq!(plan.ruleset, Ruleset::Remastered);
    }

    #[test]
    fn environment_ruleset_beats_stored() {
        let config = PlannerConfig {
            ruleset: Some(Ruleset::Remastered),
            ..PlannerConfig::default()
        };
        let plan = build_plan(&state(Some(Ruleset::Classic)), None, &config).expect("plan");
        assert_eq!(plan.ruleset, Ruleset::Remastered);
    }

    #[test]
    fn stored_ruleset_is_used_without_overrides() {
        let plan = build_plan(
            &state(Some(Ruleset::Remastered)),
            None,
            &PlannerConfig::default(),
        )
        .expect("plan");
        assert_eq!(plan.ruleset, Ruleset::Remastered);

        let plan = build_plan(&state(None), None, &PlannerConfig::default()).expect("plan");
        assert_eq!(plan.ruleset, Ruleset::Classic);
    }

    #[test]
    fn unknown_ruleset_is_an_error() {
        assert!(build_plan(&state(None), Some("arena"), &PlannerConfig::default()).is_err());
    }
}
