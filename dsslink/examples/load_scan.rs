//! Load scan example: step the load multiplier until a voltage limit is hit.

use dsslink::prelude::*;

const VMIN_PU: f64 = 0.95;

fn main() -> std::result::Result<(), DssError> {
    let script = match std::env::args().nth(1) {
        Some(script) => script,
        None => {
            eprintln!("Usage: cargo run --example load_scan <path/to/circuit.dss>");
            std::process::exit(1);
        }
    };

    let dss = Dss::load(&DssOptions::default().with_env())?;
    dss.text().set_command(&format!("compile \"{}\"", script))?;

    let circuit = dss.active_circuit();
    let solution = circuit.solution();
    let loads = circuit.loads();

    let base_kw: f64 = loads.map_each(|l| l.kw())?.iter().sum();
    println!("{} loads, {:.1} kW connected", loads.len()?, base_kw);

    let mut mult = 1.0;
    while mult <= 2.0 {
        solution.set_load_mult(mult)?;
        solution.solve()?;
        let vmin = circuit
            .all_bus_vmag_pu()?
            .into_iter()
            .filter(|v| *v > 0.0)
            .fold(f64::INFINITY, f64::min);
        println!("load mult {:.2}: min voltage {:.4} pu", mult, vmin);
        if vmin < VMIN_PU {
            println!("Limit reached at {:.1} kW", base_kw * mult);
            return Ok(());
        }
        mult += 0.1;
    }

    println!("No violation up to {:.1} kW", base_kw * 2.0);
    Ok(())
}
