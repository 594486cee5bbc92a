use anyhow::{anyhow, Context, Result};
use argolab::aa::{read_problem_string, AAFramework, Query, Semantics};
use argolab::encodings::EncodingToggles;
use argolab::io::{AspartixReader, AspartixWriter};
use argolab::sat::{default_backend, ExternalSatSolver, SatBackend};
use argolab::solvers::{Acceptance, SemanticsSolver};
use clap::{App, Arg, ArgMatches};
use log::{error, info, warn};
use std::fs::File;
use std::time::SystemTime;
use strum::IntoEnumIterator;

const ARG_INPUT_FILE: &str = "INPUT_FILE";
const ARG_PROBLEM: &str = "PROBLEM";
const ARG_ARGUMENT: &str = "ARGUMENT";
const ARG_ENCODING: &str = "ENCODING";
const ARG_EXTERNAL_SAT_SOLVER: &str = "EXTERNAL_SAT_SOLVER";
const ARG_EXTERNAL_SAT_SOLVER_OPTIONS: &str = "EXTERNAL_SAT_SOLVER_OPTIONS";
const ARG_LOGGING_LEVEL: &str = "LOGGING_LEVEL";

fn main() {
    let matches = app().get_matches();
    init_logger(matches.value_of(ARG_LOGGING_LEVEL).unwrap());
    let start_time = SystemTime::now();
    match execute(&matches) {
        Ok(()) => {
            if let Ok(elapsed) = start_time.elapsed() {
                info!("exiting successfully after {:?}", elapsed);
            }
        }
        Err(e) => {
            error!("an error occurred: {}", e);
            e.chain()
                .skip(1)
                .for_each(|err| error!("caused by: {}", err));
            std::process::exit(1);
        }
    }
}

fn app() -> App<'static, 'static> {
    App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("A SAT-based extension solver for Dung argumentation frameworks")
        .arg(
            Arg::with_name(ARG_INPUT_FILE)
                .short("f")
                .long("input-file")
                .takes_value(true)
                .required(true)
                .help("the input file, in the Aspartix format"),
        )
        .arg(
            Arg::with_name(ARG_PROBLEM)
                .short("p")
                .long("problem")
                .takes_value(true)
                .required(true)
                .help("the problem to solve, like SE-CO or DS-ST"),
        )
        .arg(
            Arg::with_name(ARG_ARGUMENT)
                .short("a")
                .long("argument")
                .takes_value(true)
                .help("the argument under decision, for DC and DS problems"),
        )
        .arg(
            Arg::with_name(ARG_ENCODING)
                .long("encoding")
                .takes_value(true)
                .default_value("101010")
                .help("the six encoding toggles, as a 0/1 string"),
        )
        .arg(
            Arg::with_name(ARG_EXTERNAL_SAT_SOLVER)
                .long("external-sat-solver")
                .takes_value(true)
                .help("a path to an external SAT solver; if not set, the embedded solver is used"),
        )
        .arg(
            Arg::with_name(ARG_EXTERNAL_SAT_SOLVER_OPTIONS)
                .long("external-sat-solver-opt")
                .takes_value(true)
                .multiple(true)
                .requires(ARG_EXTERNAL_SAT_SOLVER)
                .help("a CLI option for the external SAT solver; may be set multiple times"),
        )
        .arg(
            Arg::with_name(ARG_LOGGING_LEVEL)
                .long("logging-level")
                .takes_value(true)
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                .default_value("info")
                .help("the minimal level of the displayed logs"),
        )
}

fn init_logger(level: &str) {
    let level = level.parse().unwrap_or(log::LevelFilter::Info);
    let colors = fern::colors::ColoredLevelConfig::new().info(fern::colors::Color::Cyan);
    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "![{:5}] {} {}",
                colors.color(record.level()),
                chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                message
            ))
        })
        .level(level)
        // answers go to stdout; keep the logs apart
        .chain(std::io::stderr())
        .apply()
        .unwrap_or(());
}

fn execute(matches: &ArgMatches<'_>) -> Result<()> {
    let problem = matches.value_of(ARG_PROBLEM).unwrap();
    let (query, semantics) = read_problem_string(problem).with_context(|| {
        format!(
            "supported problems are [{}]",
            supported_problems().join(", ")
        )
    })?;
    let toggles = EncodingToggles::try_from(matches.value_of(ARG_ENCODING).unwrap())?;
    let af = read_framework(matches.value_of(ARG_INPUT_FILE).unwrap())?;
    info!(
        "solving {}-{} on a framework with {} argument(s) and {} attack(s)",
        query.as_ref(),
        semantics.as_ref(),
        af.n_arguments(),
        af.n_attacks()
    );
    let solver = SemanticsSolver::new(&af, semantics)
        .with_toggles(toggles)
        .with_backend(sat_backend(matches));
    let writer = AspartixWriter::default();
    let mut stdout = std::io::stdout();
    match query {
        Query::SE => match solver.some_extension()? {
            Some(labelling) => writer.write_single_extension(&mut stdout, &labelling.extension()),
            None => writer.write_no_extension(&mut stdout),
        },
        Query::EE => {
            let extensions = solver
                .extensions()?
                .iter()
                .map(|labelling| labelling.extension())
                .collect::<Vec<_>>();
            writer.write_extension_set(&mut stdout, &extensions)
        }
        Query::DC => {
            let arg = argument_under_decision(matches)?;
            writer.write_acceptance_status(&mut stdout, solver.is_credulously_accepted(&arg)?)
        }
        Query::DS => {
            let arg = argument_under_decision(matches)?;
            let accepted = match solver.skeptical_acceptance(&arg)? {
                Acceptance::Accepted => true,
                Acceptance::Rejected => false,
                Acceptance::NoExtension => {
                    warn!("the framework has no extension under this semantics; the acceptance is vacuous");
                    true
                }
            };
            writer.write_acceptance_status(&mut stdout, accepted)
        }
    }
}

fn supported_problems() -> Vec<String> {
    Query::iter()
        .flat_map(|q| Semantics::iter().map(move |s| format!("{}-{}", q.as_ref(), s.as_ref())))
        .collect()
}

fn read_framework(path: &str) -> Result<AAFramework<String>> {
    let mut file =
        File::open(path).with_context(|| format!(r#"while opening the file "{}""#, path))?;
    AspartixReader::default()
        .read(&mut file)
        .with_context(|| format!(r#"while parsing the file "{}""#, path))
}

fn sat_backend(matches: &ArgMatches<'_>) -> Box<dyn SatBackend> {
    match matches.value_of(ARG_EXTERNAL_SAT_SOLVER) {
        Some(program) => {
            let options = matches
                .values_of(ARG_EXTERNAL_SAT_SOLVER_OPTIONS)
                .map(|values| values.map(str::to_string).collect())
                .unwrap_or_default();
            info!("using the external SAT solver {}", program);
            Box::new(ExternalSatSolver::new(program.to_string(), options))
        }
        None => default_backend(),
    }
}

fn argument_under_decision(matches: &ArgMatches<'_>) -> Result<String> {
    matches
        .value_of(ARG_ARGUMENT)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("an argument must be provided (-a) for acceptance problems"))
}
