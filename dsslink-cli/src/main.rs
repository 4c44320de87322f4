//! dsslink CLI - run OpenDSS scripts through the DSS C-API from the command line.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use dsslink::{Dss, DssOptions, Iterable, SolveModes};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "dsslink")]
#[command(about = "Run OpenDSS scripts through the DSS C-API engine", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the DSS C-API shared library (defaults to $DSS_CAPI_PATH)
    #[arg(long, global = true, value_name = "PATH")]
    lib: Option<PathBuf>,

    /// JSON file with engine options
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a script, solve it and print a circuit summary
    Run {
        /// Path to the .dss script
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Exit with error code if the solution does not converge
        #[arg(long)]
        fail_on_nonconvergence: bool,
    },

    /// Compile and solve a script, then print every node voltage
    Voltages {
        /// Path to the .dss script
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Execute commands one by one and print their results
    Exec {
        /// DSS commands, e.g. "new circuit.test" "solve"
        #[arg(value_name = "COMMAND", required = true)]
        commands: Vec<String>,
    },

    /// Show engine version and classes
    Info,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[derive(Serialize)]
struct RunSummary {
    script: PathBuf,
    circuit: String,
    converged: bool,
    iterations: i32,
    num_buses: i32,
    num_nodes: i32,
    num_elements: i32,
    num_loads: usize,
    total_power_kw: f64,
    total_power_kvar: f64,
    losses_kw: f64,
    losses_kvar: f64,
}

#[derive(Serialize)]
struct NodeVoltage {
    node: String,
    vmag_pu: f64,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = match engine_options(cli.lib.as_deref(), cli.config.as_deref()) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    let exit_code = match cli.command {
        Commands::Run {
            script,
            format,
            fail_on_nonconvergence,
        } => handle_run(&options, &script, format, fail_on_nonconvergence),
        Commands::Voltages { script, format } => handle_voltages(&options, &script, format),
        Commands::Exec { commands } => handle_exec(&options, &commands),
        Commands::Info => handle_info(&options),
    };

    process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then the config file, then the environment, then `--lib`; each
/// layer replaces what the previous one set.
fn engine_options(lib: Option<&Path>, config: Option<&Path>) -> anyhow::Result<DssOptions> {
    let options = match config {
        Some(path) => DssOptions::from_json_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => DssOptions::default(),
    };
    let mut options = options.with_env();
    if let Some(lib) = lib {
        options.library_path = Some(lib.to_path_buf());
    }
    Ok(options)
}

fn load_and_solve(options: &DssOptions, script: &Path) -> anyhow::Result<Dss> {
    if !script.exists() {
        anyhow::bail!("Script not found: {}", script.display());
    }
    let dss = Dss::load(options)?;
    dss.text()
        .set_command(&format!("compile \"{}\"", script.display()))
        .with_context(|| format!("compiling {}", script.display()))?;

    let solution = dss.active_circuit().solution();
    solution.set_mode(SolveModes::SnapShot)?;
    solution.solve().context("solving")?;
    Ok(dss)
}

fn summarize(dss: &Dss, script: &Path) -> anyhow::Result<RunSummary> {
    let circuit = dss.active_circuit();
    let solution = circuit.solution();
    let power = circuit.total_power()?;
    let losses = circuit.losses()?;
    Ok(RunSummary {
        script: script.to_path_buf(),
        circuit: circuit.name()?,
        converged: solution.converged()?,
        iterations: solution.iterations()?,
        num_buses: circuit.num_buses()?,
        num_nodes: circuit.num_nodes()?,
        num_elements: circuit.num_ckt_elements()?,
        num_loads: circuit.loads().len()?,
        total_power_kw: power.re,
        total_power_kvar: power.im,
        // engine reports losses in W and var
        losses_kw: losses.re / 1000.0,
        losses_kvar: losses.im / 1000.0,
    })
}

fn handle_run(
    options: &DssOptions,
    script: &Path,
    format: OutputFormat,
    fail_on_nonconvergence: bool,
) -> i32 {
    let summary = match load_and_solve(options, script).and_then(|dss| summarize(&dss, script)) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return 1;
        }
    };

    match format {
        OutputFormat::Human => output_summary_human(&summary),
        OutputFormat::Json => output_json(&summary),
    }

    if fail_on_nonconvergence && !summary.converged {
        return 1;
    }
    0
}

fn handle_voltages(options: &DssOptions, script: &Path, format: OutputFormat) -> i32 {
    let voltages = load_and_solve(options, script).and_then(|dss| {
        let circuit = dss.active_circuit();
        let names = circuit.all_node_names()?;
        let vmag_pu = circuit.all_bus_vmag_pu()?;
        Ok(names
            .into_iter()
            .zip(vmag_pu)
            .map(|(node, vmag_pu)| NodeVoltage { node, vmag_pu })
            .collect::<Vec<_>>())
    });

    match voltages {
        Ok(voltages) => {
            match format {
                OutputFormat::Human => output_voltages_human(&voltages),
                OutputFormat::Json => output_json(&voltages),
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn handle_exec(options: &DssOptions, commands: &[String]) -> i32 {
    let result = Dss::load(options).map_err(anyhow::Error::from).and_then(|dss| {
        let text = dss.text();
        for command in commands {
            text.set_command(command)
                .with_context(|| format!("running `{}`", command))?;
            let output = text.result()?;
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Ok(())
    });

    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn handle_info(options: &DssOptions) -> i32 {
    let info = Dss::load(options).map_err(anyhow::Error::from).and_then(|dss| {
        Ok((dss.version()?, dss.classes()?, dss.user_classes()?))
    });

    match info {
        Ok((version, classes, user_classes)) => {
            println!("Library: {}", options.resolved_library_path().display());
            println!("Version: {}", version);
            println!("Classes ({}):", classes.len());
            for class in &classes {
                println!("  {}", class);
            }
            if !user_classes.is_empty() {
                println!("User classes ({}):", user_classes.len());
                for class in &user_classes {
                    println!("  {}", class);
                }
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    }
}

fn output_summary_human(summary: &RunSummary) {
    println!("\nScript: {}", summary.script.display());
    println!("{}", "─".repeat(60));
    println!("  Circuit:     {}", summary.circuit);
    println!(
        "  Converged:   {} ({} iterations)",
        if summary.converged { "yes" } else { "NO" },
        summary.iterations
    );
    println!(
        "  Size:        {} buses, {} nodes, {} elements, {} loads",
        summary.num_buses, summary.num_nodes, summary.num_elements, summary.num_loads
    );
    println!(
        "  Total power: {:.3} kW, {:.3} kvar",
        summary.total_power_kw, summary.total_power_kvar
    );
    println!(
        "  Losses:      {:.3} kW, {:.3} kvar",
        summary.losses_kw, summary.losses_kvar
    );
}

fn output_voltages_human(voltages: &[NodeVoltage]) {
    println!("{:<24} {:>10}", "Node", "V (pu)");
    println!("{}", "─".repeat(35));
    for v in voltages {
        println!("{:<24} {:>10.5}", v.node, v.vmag_pu);
    }
}

fn output_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {}", e),
    }
}
