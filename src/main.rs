// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end.
//!
//! `splitsynth <first> <second>` parses the two quantities, synthesizes
//! the splitter network for their ratio, and prints the build
//! instructions, the wiring diagram, and the throughput test.

use splitter_synth::parse::parse_quantity;
use splitter_synth::{report, SynthesisError, Synthesizer};
use std::process::ExitCode;

fn usage(program: &str) {
    eprintln!("Usage: {} <first> <second>", program);
    eprintln!("Quantity formats: A, B/C, A B/C, A+B/C, A.B");
}

fn run(first: &str, second: &str) -> Result<(), String> {
    let a = parse_quantity(first).map_err(|e| e.to_string())?;
    let b = parse_quantity(second).map_err(|e| e.to_string())?;

    let mut synthesizer = Synthesizer::new();
    let plan = synthesizer.synthesize(a, b).map_err(|err| match err {
        // A defect signal, not a user-input problem. Keep it visibly
        // distinct from the "try different numbers" outcomes.
        SynthesisError::InvariantViolation { .. } => {
            format!("Internal error, this should never happen: {}", err)
        }
        other => other.to_string(),
    })?;

    eprintln!(
        "[splitsynth] {} : {} over denominator {} (capacity {}, depth {}{})",
        plan.ratio_a,
        plan.ratio_b,
        plan.denominator,
        plan.capacity,
        plan.depth(),
        if plan.fallback_used {
            ", fallback shape"
        } else {
            ""
        }
    );

    print!("{}", report::blueprint_summary(&plan));
    println!("\nGraphical layout:");
    println!("{}", plan.diagram());
    println!();
    print!("{}", report::test_instructions(&plan));
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        usage(args.first().map_or("splitsynth", String::as_str));
        return ExitCode::FAILURE;
    }

    match run(&args[1], &args[2]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}
