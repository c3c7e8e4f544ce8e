//! Plain-text table report of a layout.

use std::fmt::Write as _;

use crate::models::StimulusLayout;

/// Renders one line per square plus a target summary.
///
/// # Example
///
/// ```text
///  pos  ring        x        y  color    digit  class
///    0  outer   68.500   57.000  magenta  9      nontarget
/// ...
/// targets: 2 of 54
/// ```
pub fn render_report(layout: &StimulusLayout) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "{:>4}  {:<6} {:>8} {:>8}  {:<8} {:<6} {}",
        "pos", "ring", "x", "y", "color", "digit", "class"
    );

    for square in layout {
        let _ = writeln!(
            output,
            "{:>4}  {:<6} {:>8.3} {:>8.3}  {:<8} {:<6} {}",
            square.position_label(),
            square.ring().name(),
            square.x(),
            square.y(),
            square.color().name,
            square.digit(),
            square.classification().class_name()
        );
    }

    let _ = writeln!(
        output,
        "targets: {} of {}",
        layout.target_count(),
        layout.len()
    );

    output
}
