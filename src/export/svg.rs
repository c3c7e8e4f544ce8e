//! SVG renderer for finished layouts.
//!
//! Draws one `<rect>` per square and, optionally, one `<text>` with its digit.
//! Rects are positioned at the square's top-left corner. Each rect's class
//! names its palette color and target status (e.g. `"cyan target"`) and its
//! id is `sq_<position label>`, so experiment scripts can select squares.

use std::fmt::Write as _;

use quick_xml::escape::escape;

use crate::config::RenderConfig;
use crate::models::{Square, StimulusLayout};

/// Horizontal digit offset divisor (text x = square x + size / 3.25).
const TEXT_X_DIVISOR: f64 = 3.25;

/// Vertical digit baseline divisor (text y = square y + size / 1.35).
const TEXT_Y_DIVISOR: f64 = 1.35;

/// CSS class of every digit label.
pub const TEXT_CLASS: &str = "ace_pretty_text";

/// Builds the class attribute for a square: palette name, then target status.
///
/// ```
/// use acvs_display::config::DisplayConfig;
/// use acvs_display::export::svg::square_classes;
/// use acvs_display::services::generate_layout;
///
/// let layout = generate_layout(&DisplayConfig::default()).unwrap();
/// let square = layout.get("0").unwrap();
/// assert_eq!(square_classes(square), "magenta nontarget");
/// ```
#[must_use]
pub fn square_classes(square: &Square) -> String {
    format!(
        "{} {}",
        square.color().name,
        square.classification().class_name()
    )
}

/// Element id of a square.
#[must_use]
pub fn square_id(square: &Square) -> String {
    format!("sq_{}", square.position_label())
}

/// Renders a complete standalone SVG document.
///
/// The `viewBox` encloses every square; an empty layout yields an empty,
/// zero-sized view box.
pub fn render_svg(layout: &StimulusLayout, options: &RenderConfig) -> String {
    let (min_x, min_y, width, height) = bounds(layout);

    let mut output = String::new();
    let _ = writeln!(
        output,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        fmt_num(min_x),
        fmt_num(min_y),
        fmt_num(width),
        fmt_num(height)
    );

    for square in layout {
        let _ = writeln!(
            output,
            r#"  <rect id="{}" class="{}" x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            escape(square_id(square)),
            escape(square_classes(square)),
            fmt_num(square.x()),
            fmt_num(square.y()),
            fmt_num(square.size()),
            fmt_num(square.size()),
            square.color().color.to_css()
        );
    }

    if options.include_digits {
        for square in layout {
            let size = square.size();
            let _ = writeln!(
                output,
                r#"  <text x="{}" y="{}" fill="{}" class="{}" font-size="{}">{}</text>"#,
                fmt_num(square.x() + size / TEXT_X_DIVISOR),
                fmt_num(square.y() + size / TEXT_Y_DIVISOR),
                escape(options.text_fill.as_str()),
                TEXT_CLASS,
                fmt_num(size * options.text_scale),
                square.digit()
            );
        }
    }

    output.push_str("</svg>\n");
    output
}

/// Smallest box containing every square: (min x, min y, width, height).
fn bounds(layout: &StimulusLayout) -> (f64, f64, f64, f64) {
    let mut squares = layout.iter();
    let Some(first) = squares.next() else {
        return (0.0, 0.0, 0.0, 0.0);
    };

    let init = (
        first.x(),
        first.y(),
        first.x() + first.size(),
        first.y() + first.size(),
    );
    let (min_x, min_y, max_x, max_y) =
        squares.fold(init, |(min_x, min_y, max_x, max_y), square| {
            (
                min_x.min(square.x()),
                min_y.min(square.y()),
                max_x.max(square.x() + square.size()),
                max_y.max(square.y() + square.size()),
            )
        });

    (min_x, min_y, max_x - min_x, max_y - min_y)
}

/// Formats a coordinate with at most four decimals and no trailing zeros.
fn fmt_num(value: f64) -> String {
    let text = format!("{value:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
