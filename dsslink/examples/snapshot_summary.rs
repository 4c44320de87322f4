//! Snapshot example: compile a DSS script, solve it and print a summary.

use dsslink::prelude::*;
use std::path::Path;

fn main() -> std::result::Result<(), DssError> {
    let script = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "IEEE13Nodeckt.dss".to_string());
    let script = Path::new(&script);

    if !script.exists() {
        eprintln!("File not found: {}", script.display());
        eprintln!("Usage: cargo run --example snapshot_summary [path/to/circuit.dss]");
        std::process::exit(1);
    }

    let dss = Dss::load(&DssOptions::default().with_env())?;
    println!("Engine: {}", dss.version()?);

    dss.text()
        .set_command(&format!("compile \"{}\"", script.display()))?;
    let circuit = dss.active_circuit();
    let solution = circuit.solution();
    solution.set_mode(SolveModes::SnapShot)?;
    solution.solve()?;

    println!("Circuit: {}", circuit.name()?);
    println!(
        "Buses: {}, nodes: {}, elements: {}",
        circuit.num_buses()?,
        circuit.num_nodes()?,
        circuit.num_ckt_elements()?
    );
    println!("Iterations: {}", solution.iterations()?);

    let power = circuit.total_power()?;
    let losses = circuit.losses()?;
    println!("Source power: {:.1} kW, {:.1} kvar", power.re, power.im);
    println!("Losses: {:.1} kW, {:.1} kvar", losses.re / 1000.0, losses.im / 1000.0);

    let names = circuit.all_node_names()?;
    let vmag_pu = circuit.all_bus_vmag_pu()?;
    let mut lowest: Vec<_> = names.iter().zip(vmag_pu.iter()).collect();
    lowest.sort_by(|a, b| a.1.total_cmp(b.1));
    println!();
    println!("Lowest node voltages:");
    for (name, v) in lowest.iter().take(5) {
        println!("  {:<16} {:.4} pu", name, v);
    }

    if !solution.converged()? {
        println!("\nSolution did not converge.");
        std::process::exit(1);
    }
    Ok(())
}
