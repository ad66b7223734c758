//! Quick tour: short lessons on integer and floating-point types

use super::theme::Painter;
use super::write_heading;
use std::io::{self, Write};

/// (title, body lines)
const LESSONS: [(&str, &[&str]); 5] = [
    (
        "Lesson",
        &[
            "Integers store whole numbers.",
            "Some can go negative and some cannot.",
        ],
    ),
    (
        "Lesson",
        &[
            "char is 1 byte and stores a small number or a character.",
            "The exact range can vary by system.",
        ],
    ),
    (
        "Lesson",
        &[
            "short, int, long, and long long are bigger buckets.",
            "Bigger buckets hold bigger numbers.",
        ],
    ),
    (
        "Lesson",
        &[
            "Fixed-size types like int32_t always have the same size.",
            "They help when you need exact sizes.",
        ],
    ),
    (
        "Lesson",
        &["float and double store decimals.", "double is more precise."],
    ),
];

const RULES_OF_THUMB: [&str; 5] = [
    "Use int for most counting.",
    "Use unsigned only when negatives never make sense.",
    "Use int32_t or uint32_t when you need exact sizes.",
    "Use double for most decimals.",
    "Use float when memory or speed is tight.",
];

pub fn write_quick_tour<O: Write>(out: &mut O, painter: &Painter) -> io::Result<()> {
    for (title, body) in LESSONS {
        write_heading(out, painter, title)?;
        for line in body {
            writeln!(out, "{}", painter.text(line))?;
        }
    }

    write_heading(out, painter, "Rules of Thumb")?;
    for rule in RULES_OF_THUMB {
        writeln!(out, "{}", painter.text(rule))?;
    }
    Ok(())
}
