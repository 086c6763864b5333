//! Solve command implementation for the rescue CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use rescue_core::{PlanRequest, PlanResponse, Planner};
use rescue_solver_greedy::{GreedyPlanner, GreedyPlannerConfig};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Write};

use crate::fs::{create_utf8_file, file_is_file, open_utf8_file};
use crate::{
    ARG_SOLVE_MERGE_COLOCATED, ARG_SOLVE_OUTPUT, ARG_SOLVE_REQUEST, ARG_SOLVE_REUSE_TREES,
    CliError, ENV_SOLVE_REQUEST,
};

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "solve",
    long_about = "Plan rescue routes for a JSON-encoded PlanRequest holding \
                 survivors, pickup nodes and road records. Options can come \
                 from CLI flags, configuration files, or environment \
                 variables.",
    about = "Plan rescue routes for a request"
)]
#[ortho_config(prefix = "RESCUE")]
pub(crate) struct SolveArgs {
    /// Path to a JSON file containing a PlanRequest.
    #[arg(value_name = ARG_SOLVE_REQUEST)]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Write the plan to this file instead of stdout.
    #[arg(long = ARG_SOLVE_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Collapse survivors sharing a node before planning.
    #[arg(long = ARG_SOLVE_MERGE_COLOCATED, value_name = "bool")]
    #[serde(default)]
    pub(crate) merge_colocated_survivors: Option<bool>,
    /// Cache one search tree per vehicle between rounds.
    #[arg(long = ARG_SOLVE_REUSE_TREES, value_name = "bool")]
    #[serde(default)]
    pub(crate) reuse_search_trees: Option<bool>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Output file; stdout when absent.
    pub(crate) output: Option<Utf8PathBuf>,
    /// Planner settings.
    pub(crate) planner: GreedyPlannerConfig,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match file_is_file(&self.request_path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field: ARG_SOLVE_REQUEST,
                path: self.request_path.clone(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field: ARG_SOLVE_REQUEST,
                    path: self.request_path.clone(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_SOLVE_REQUEST,
                path: self.request_path.clone(),
                source,
            }),
        }
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SOLVE_REQUEST,
            env: ENV_SOLVE_REQUEST,
        })?;

        let defaults = GreedyPlannerConfig::default();
        let planner = GreedyPlannerConfig {
            reuse_search_trees: args
                .reuse_search_trees
                .unwrap_or(defaults.reuse_search_trees),
            merge_colocated_survivors: args
                .merge_colocated_survivors
                .unwrap_or(defaults.merge_colocated_survivors),
        };

        Ok(Self {
            request_path,
            output: args.output,
            planner,
        })
    }
}

/// Builds a planner instance for the current solve invocation.
pub(super) trait SolvePlannerBuilder {
    fn build(&self, config: &SolveConfig) -> Box<dyn Planner>;
}

pub(super) struct DefaultSolvePlannerBuilder;

impl SolvePlannerBuilder for DefaultSolvePlannerBuilder {
    fn build(&self, config: &SolveConfig) -> Box<dyn Planner> {
        Box::new(GreedyPlanner::with_config(config.planner))
    }
}

pub(super) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_solve_with(args, &DefaultSolvePlannerBuilder, &mut stdout)
}

/// Resolve configuration, plan, and write the response either to the
/// configured output file or to `stdout`.
pub(super) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolvePlannerBuilder,
    stdout: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_solve_config(args)?;
    let response = execute_solve(&config, builder)?;
    match &config.output {
        Some(path) => {
            let file = create_utf8_file(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            let mut writer = BufWriter::new(file);
            write_plan_response(&mut writer, &response)?;
            writer.flush().map_err(CliError::WritePlanOutput)
        }
        None => write_plan_response(stdout, &response),
    }
}

fn execute_solve(
    config: &SolveConfig,
    builder: &dyn SolvePlannerBuilder,
) -> Result<PlanResponse, CliError> {
    let request = load_plan_request(&config.request_path)?;
    request
        .validate()
        .map_err(|source| CliError::InvalidPlanRequest {
            path: config.request_path.clone(),
            source,
        })?;
    let planner = builder.build(config);
    planner
        .plan(&request)
        .map_err(|source| CliError::Plan { source })
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`PlanRequest`] from disk.
pub(super) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPlanRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_plan_response(writer: &mut dyn Write, response: &PlanResponse) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(response).map_err(CliError::SerialisePlanResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WritePlanOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
