// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Human-readable build and test instructions.
//!
//! Renders the prose around a synthesized plan: which generic blueprint
//! depth to start from, whether the feedback loop can be dismantled, and
//! how to verify the built network by feeding a known item count through
//! it. All functions return `String`s; printing is the binary's job.

use crate::synth::BalancerPlan;
use std::fmt::Write;

/// Deepest generic blueprint available; deeper networks extend it by hand.
const MAX_BLUEPRINT_DEPTH: usize = 9;

/// Describe which blueprint to start from and what to do with the
/// feedback plumbing.
pub fn blueprint_summary(plan: &BalancerPlan) -> String {
    let mut out = String::new();

    if plan.depth() <= MAX_BLUEPRINT_DEPTH {
        let _ = writeln!(
            out,
            "Start from the generic blueprint \"Programmable Load Balancer N = {}\".",
            plan.depth()
        );
    } else {
        let _ = writeln!(
            out,
            "The generic blueprint tops out at {} levels; start from \
             \"Programmable Load Balancer N = {}\" and extend it with {} more \
             splitter/merger level(s).",
            MAX_BLUEPRINT_DEPTH,
            MAX_BLUEPRINT_DEPTH,
            plan.depth() - MAX_BLUEPRINT_DEPTH
        );
    }

    if !plan.needs_feedback() {
        let _ = writeln!(
            out,
            "This balancer needs no feedback: dismantle the merger at the \
             input and all of the mergers on top."
        );
    }

    let _ = writeln!(
        out,
        "Wire the outputs as diagrammed below. Each X is one bottom-level \
         splitter (leftmost first); the digits around it say which target \
         stream (1 to 3) its side outputs feed."
    );

    out
}

/// Describe how to verify the built network.
pub fn test_instructions(plan: &BalancerPlan) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "After building the balancer, test it.");
    let _ = writeln!(out, "Target division ratios:");
    let _ = writeln!(out, " - A: {}", plan.ratio_a);
    let _ = writeln!(out, " - B: {}", plan.ratio_b);
    let _ = writeln!(
        out,
        "\nFeed {} items into the input. You should see:",
        plan.denominator
    );
    let _ = writeln!(
        out,
        " - {} items at the first output (A)",
        plan.ratio_a.numerator()
    );
    let _ = writeln!(
        out,
        " - {} items at the second output (B)",
        plan.ratio_b.numerator()
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith::Fraction;
    use crate::synth::synthesize;

    fn plan(a: i64, b: i64) -> BalancerPlan {
        synthesize(Fraction::from_integer(a), Fraction::from_integer(b)).unwrap()
    }

    #[test]
    fn test_blueprint_summary_names_depth() {
        let summary = blueprint_summary(&plan(2, 3));
        assert!(summary.contains("Programmable Load Balancer N = 2"));
        // Feedback is needed, so the dismantling note must be absent.
        assert!(!summary.contains("dismantle"));
    }

    #[test]
    fn test_no_feedback_note() {
        let summary = blueprint_summary(&plan(1, 1));
        assert!(summary.contains("no feedback"));
        assert!(summary.contains("dismantle"));
    }

    #[test]
    fn test_test_instructions_quote_exact_counts() {
        let text = test_instructions(&plan(2, 3));
        assert!(text.contains(" - A: 2/5"));
        assert!(text.contains(" - B: 3/5"));
        assert!(text.contains("Feed 5 items"));
        assert!(text.contains("2 items at the first output"));
        assert!(text.contains("3 items at the second output"));
    }
}
