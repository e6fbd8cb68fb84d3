//! `flipcalc`: evaluate party abilities for a battle scenario, or audit the
//! ability tables for indices the engine does not handle.

use anyhow::{bail, Context};
use flipcalc_core::{lookup_condition, lookup_effects, sweep_party, SweepReport};
use flipcalc_data::{build_state, load_catalog, load_scenario, resolve_key, Catalog};
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;

const DATA_DIR_ENV: &str = "FLIPCALC_DATA_DIR";
const DEFAULT_DATA_DIR: &str = "data";

const USAGE: &str = "\
usage:
  flipcalc eval <scenario.json> [--json] [--sequential] [--data <dir>]
  flipcalc audit [--data <dir>]

environment:
  FLIPCALC_DATA_DIR  game table directory (default: data)
  RUST_LOG           log filter";

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliConfig {
    data_dir: PathBuf,
}

impl CliConfig {
    /// Environment variables:
    /// - `FLIPCALC_DATA_DIR` - table directory (default: `data`)
    fn from_env() -> Self {
        let data_dir = env::var(DATA_DIR_ENV)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());
        Self {
            data_dir: PathBuf::from(data_dir),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Eval {
        scenario: PathBuf,
        json: bool,
        sequential: bool,
    },
    Audit,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    command: Command,
    data_dir: Option<PathBuf>,
}

fn parse_cli_options(args: &[String]) -> anyhow::Result<CliOptions> {
    let mut positional = Vec::new();
    let mut json = false;
    let mut sequential = false;
    let mut data_dir = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--json" => json = true,
            "--sequential" => sequential = true,
            "--data" => {
                let Some(value) = args.get(idx + 1) else {
                    bail!("--data needs a directory");
                };
                data_dir = Some(PathBuf::from(value));
                idx += 1;
            }
            "-h" | "--help" => positional.insert(0, "help"),
            other if other.starts_with("--") => bail!("unknown option {other}"),
            other => positional.push(other),
        }
        idx += 1;
    }

    let command = match positional.as_slice() {
        ["eval", scenario] => Command::Eval {
            scenario: PathBuf::from(*scenario),
            json,
            sequential,
        },
        ["eval"] => bail!("eval needs a scenario file"),
        ["audit"] => Command::Audit,
        [] | ["help", ..] => Command::Help,
        [other, ..] => bail!("unknown command {other}"),
    };
    Ok(CliOptions { command, data_dir })
}

#[derive(Debug, Serialize)]
struct EvalOutput<'a> {
    report: &'a SweepReport,
    summary: Vec<(String, f64)>,
    damage: (f64, f64),
}

fn run_eval(catalog: &Catalog, path: &Path, json: bool, sequential: bool) -> anyhow::Result<()> {
    let scenario = load_scenario(path)?;
    let state = build_state(catalog, &scenario)
        .with_context(|| format!("build state from {}", path.display()))?;
    let evaluated = resolve_key(catalog, &scenario.evaluate)?;
    if state.party.index_of(&evaluated.id).is_none() {
        bail!("{} is not in the scenario party", scenario.evaluate);
    }

    let mut engine = scenario.engine;
    if sequential {
        engine.parallel_sweep = false;
    }
    let mut report = sweep_party(&state, &evaluated.id, &engine)?;
    scenario.hit.apply(&mut report.merged);
    let damage = report.merged.calculate_with(&state, &engine)?;
    let summary = report.merged.summary();

    if json {
        let output = EvalOutput {
            report: &report,
            summary,
            damage,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} ({})", evaluated.name, evaluated.id);
    for contribution in &report.contributions {
        println!(
            "  [{} slot {} ability {}] {}",
            contribution.owner,
            contribution.owner_slot,
            contribution.ability_slot + 1,
            contribution.ability
        );
        for (label, value) in contribution.context.summary() {
            println!("      {label:<24} {value:.4}");
        }
    }
    println!("merged:");
    for (label, value) in &summary {
        println!("  {label:<26} {value:.4}");
    }
    println!("damage: {:.1} - {:.1}", damage.0, damage.1);
    Ok(())
}

fn run_audit(catalog: &Catalog) -> usize {
    let mut problems = 0usize;
    for character in catalog.characters() {
        for (slot, records) in character.abilities.iter().enumerate() {
            for record in records {
                let errors = [
                    lookup_condition(record).err(),
                    lookup_effects(record).err(),
                ];
                for err in errors.into_iter().flatten() {
                    problems += 1;
                    println!(
                        "{} {} ability {}: {err}",
                        character.id,
                        character.name,
                        slot + 1
                    );
                }
            }
        }
    }
    println!("{problems} unhandled indices across {} characters", catalog.len());
    problems
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_cli_options(&args)?;
    let mut config = CliConfig::from_env();
    if let Some(dir) = options.data_dir {
        config.data_dir = dir;
    }

    match options.command {
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
        Command::Audit => {
            let catalog = load_catalog(&config.data_dir)?;
            let problems = run_audit(&catalog);
            info!(problems, "audit finished");
            Ok(())
        }
        Command::Eval {
            scenario,
            json,
            sequential,
        } => {
            let catalog = load_catalog(&config.data_dir)?;
            run_eval(&catalog, &scenario, json, sequential)
        }
    }
}
