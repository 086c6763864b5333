//! Behaviour-driven step definitions driving the solve CLI scenarios.

use super::helpers::{utf8_workspace, write_request, write_utf8};
use super::*;
use crate::solve::{DefaultSolvePlannerBuilder, run_solve_with};
use camino::Utf8PathBuf;
use rescue_core::test_support::survivor;
use rescue_core::{EdgeRecord, PlanRequest, PlanRequestValidationError, PlanResponse};
use rescue_solver_greedy::test_support::{request, triangle_request};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct SolveWorld {
    _tmp: TempDir,
    request_path: Utf8PathBuf,
    output_path: Utf8PathBuf,
    include_request: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl SolveWorld {
    fn new() -> Self {
        let (tmp, root) = utf8_workspace();
        let request_path = root.join("request.json");
        let output_path = root.join("plan.json");

        Self {
            _tmp: tmp,
            request_path,
            output_path,
            include_request: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["rescue".to_owned(), "solve".to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.request_path.as_str().to_owned());
        }
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn expect_error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> SolveWorld {
    SolveWorld::new()
}

fn assert_triangle_plan(json: &str) {
    let response: PlanResponse =
        serde_json::from_str(json).expect("output should be a JSON plan response");
    assert_eq!(response.paths(), vec![vec![1, 2, 3, 2, 1]]);
    assert!(response.unassigned.is_empty());
}

#[given("a valid plan request exists on disk")]
fn valid_plan_request_exists(#[from(world)] world: &SolveWorld) {
    write_request(&world.request_path, &triangle_request());
}

#[given("I ask for the plan to be written to a file")]
fn ask_for_output_file(#[from(world)] world: &SolveWorld) {
    world.cli_args.borrow_mut().extend([
        format!("--{ARG_SOLVE_OUTPUT}"),
        world.output_path.as_str().to_owned(),
    ]);
}

#[given("the plan request contains invalid JSON")]
fn plan_request_contains_invalid_json(#[from(world)] world: &SolveWorld) {
    write_utf8(&world.request_path, b"{ not valid json");
}

#[given("the plan request contains a negative road length")]
fn plan_request_contains_negative_length(#[from(world)] world: &SolveWorld) {
    let invalid: PlanRequest = request(
        vec![survivor(2, 1, 1)],
        vec![1],
        vec![EdgeRecord::new(1, 2, -4.0)],
    );
    write_request(&world.request_path, &invalid);
}

#[given("I omit the plan request path")]
fn omit_plan_request_path(#[from(world)] world: &SolveWorld) {
    *world.include_request.borrow_mut() = false;
}

#[when("I run the solve command")]
fn run_solve_command(#[from(world)] world: &SolveWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Solve(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_solve_with(args, &DefaultSolvePlannerBuilder, &mut *buffer)
        }
    });

    world.result.replace(Some(outcome));
}

#[then("the command succeeds and prints the triangle plan")]
fn command_succeeds_and_prints_json(#[from(world)] world: &SolveWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    let stdout = String::from_utf8(world.stdout.borrow().clone()).expect("stdout utf-8");
    assert_triangle_plan(&stdout);
}

#[then("the output file holds the triangle plan and stdout is empty")]
fn output_file_holds_plan(#[from(world)] world: &SolveWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    result.as_ref().expect("expected success");

    assert!(world.stdout.borrow().is_empty());
    let written = std::fs::read_to_string(&world.output_path).expect("read output file");
    assert_triangle_plan(&written);
}

#[then("the command fails because the request JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &SolveWorld) {
    match &*world.expect_error() {
        CliError::ParsePlanRequest { path, .. } => assert_eq!(*path, world.request_path),
        other => panic!("expected ParsePlanRequest, found {other:?}"),
    }
}

#[then("the command fails because the request is invalid")]
fn command_fails_invalid_request(#[from(world)] world: &SolveWorld) {
    match &*world.expect_error() {
        CliError::InvalidPlanRequest { source, .. } => {
            assert_eq!(
                *source,
                PlanRequestValidationError::NegativeWeight { from: 1, to: 2 }
            );
        }
        other => panic!("expected InvalidPlanRequest, found {other:?}"),
    }
}

#[then("the command fails because the request path is missing")]
fn command_fails_missing_request_path(#[from(world)] world: &SolveWorld) {
    match &*world.expect_error() {
        CliError::MissingArgument { field, env } => {
            assert_eq!(*field, ARG_SOLVE_REQUEST);
            assert_eq!(*env, ENV_SOLVE_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_solve_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/solve_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: SolveWorld) {
            let _ = world;
        }
    };
}

register_solve_scenario!(solve_happy_path, "planning a request from JSON");
register_solve_scenario!(solve_to_output_file, "writing the plan to an output file");
register_solve_scenario!(solve_invalid_json, "rejecting invalid JSON input");
register_solve_scenario!(solve_invalid_request, "rejecting invalid plan requests");
register_solve_scenario!(solve_missing_request, "rejecting missing request paths");
