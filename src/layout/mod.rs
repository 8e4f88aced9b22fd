// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-width wiring diagram rendering.
//!
//! Projects a list of per-level digit assignments into a three-row ASCII
//! diagram. Each level occupies three character columns with an `X` on
//! the middle row marking the splitter; consecutive levels are joined by
//! a one-character `=` connector on the middle row, the internal
//! forwarding link. The digits at a level become consumer labels (`1`
//! for the first target, `2` for the second, `3` for the feedback),
//! repeated once per output and laid out by count:
//!
//! - one consumer:    top-center
//! - two consumers:   top-center and bottom-center
//! - three consumers: top-center, bottom-left, bottom-right
//!
//! Rendering is a pure structural projection: identical assignments
//! always produce byte-identical output.

use crate::synth::assign::Assignment;

const COLUMN_WIDTH: usize = 3;

/// Render the three-row diagram for the given assignments.
///
/// The rows are joined with `\n` and carry no trailing newline. With no
/// assignments or a zero-depth network the result is empty.
pub fn render(assignments: &[Assignment]) -> String {
    let depth = assignments.first().map_or(0, Assignment::depth);

    let mut top = String::new();
    let mut mid = String::new();
    let mut bot = String::new();

    for level in 0..depth {
        let mut consumers = Vec::new();
        for (index, assignment) in assignments.iter().enumerate() {
            let label = (b'1' + index as u8) as char;
            for _ in 0..assignment.digit(level) {
                consumers.push(label);
            }
        }

        let mut top_column = [' '; COLUMN_WIDTH];
        let mid_column = [' ', 'X', ' '];
        let mut bot_column = [' '; COLUMN_WIDTH];

        match consumers.as_slice() {
            [single] => {
                top_column[1] = *single;
            }
            [first, second] => {
                top_column[1] = *first;
                bot_column[1] = *second;
            }
            [first, second, third] => {
                top_column[1] = *first;
                bot_column[0] = *second;
                bot_column[2] = *third;
            }
            // Capacity is at most 3 and a level with zero consumers is
            // ruled out by validation; nothing to place either way.
            _ => {}
        }

        top.extend(top_column);
        mid.extend(mid_column);
        bot.extend(bot_column);

        if level != depth - 1 {
            top.push(' ');
            mid.push('=');
            bot.push(' ');
        }
    }

    format!("{top}\n{mid}\n{bot}")
}
