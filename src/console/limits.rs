//! Min/max limits table
//!
//! The table is laid out with ratatui widgets rendered into an off-screen
//! [`Buffer`], then written to the console as plain lines. The console stays a
//! line-based stream: no alternate screen or raw mode.

use crate::arena::catalog::TypeCatalog;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Row, Table, Widget},
};

/// Width of the rendered table, borders included
pub const TABLE_WIDTH: u16 = 66;

/// One row of the limits table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitRow {
    pub name: String,
    pub bits: u32,
    pub min: String,
    pub max: String,
}

impl LimitRow {
    fn new(name: &str, bits: u32, min: impl ToString, max: impl ToString) -> Self {
        LimitRow {
            name: name.to_string(),
            bits,
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

/// Rows for every catalog type, then the 64-bit integers and the floating-point types.
///
/// Floating-point minimums are the lowest finite value, not the smallest positive one.
pub fn limit_rows(catalog: &TypeCatalog) -> Vec<LimitRow> {
    let mut rows: Vec<LimitRow> = catalog
        .types()
        .iter()
        .map(|ty| LimitRow::new(ty.name(), ty.bits(), ty.min(), ty.max()))
        .collect();

    rows.push(LimitRow::new("int64_t", 64, i64::MIN, i64::MAX));
    rows.push(LimitRow::new("uint64_t", 64, u64::MIN, u64::MAX));
    rows.push(LimitRow::new(
        "float",
        32,
        format!("{:.6e}", f32::MIN),
        format!("{:.6e}", f32::MAX),
    ));
    rows.push(LimitRow::new(
        "double",
        64,
        format!("{:.6e}", f64::MIN),
        format!("{:.6e}", f64::MAX),
    ));
    rows
}

/// Render rows as a bordered table, one string per terminal line
pub fn render_limits_table(rows: &[LimitRow]) -> Vec<String> {
    let header = Row::new(vec!["Type", "Bits", "Minimum", "Maximum"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let body: Vec<Row> = rows
        .iter()
        .map(|row| {
            Row::new(vec![
                row.name.clone(),
                row.bits.to_string(),
                row.min.clone(),
                row.max.clone(),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(4),
        Constraint::Length(21),
        Constraint::Length(21),
    ];

    let table = Table::new(body, widths)
        .header(header)
        .column_spacing(2)
        .block(
            Block::default()
                .title(" Min/Max Limits ")
                .borders(Borders::ALL),
        );

    // Borders (2) + header (1) + one line per row
    let height = rows.len() as u16 + 3;
    let area = Rect::new(0, 0, TABLE_WIDTH, height);
    let mut buf = Buffer::empty(area);
    table.render(area, &mut buf);

    buf.content
        .chunks(area.width as usize)
        .map(|line| {
            line.iter()
                .map(|cell| cell.symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_rows_cover_catalog_and_extras() {
        let rows = limit_rows(&TypeCatalog::standard());
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "uint8_t", "uint16_t", "int8_t", "int16_t", "int32_t", "uint32_t", "int64_t",
                "uint64_t", "float", "double"
            ]
        );

        let int32 = &rows[4];
        assert_eq!(int32.min, "-2147483648");
        assert_eq!(int32.max, "2147483647");
        assert_eq!(rows[7].max, "18446744073709551615");
        assert_eq!(rows[8].max, "3.402823e38");
        assert!(rows[9].min.starts_with("-1.797693e308"));
    }

    #[test]
    fn test_render_limits_table() {
        let rows = limit_rows(&TypeCatalog::standard());
        let lines = render_limits_table(&rows);

        assert_eq!(lines.len(), rows.len() + 3);
        assert!(lines[0].starts_with('┌'));
        assert!(lines[0].contains("Min/Max Limits"));
        assert!(lines[1].contains("Type") && lines[1].contains("Maximum"));
        assert!(lines.last().unwrap().starts_with('└'));

        let int8 = lines.iter().find(|l| l.contains("int8_t") && !l.contains("uint8_t"));
        let int8 = int8.expect("int8_t row missing");
        assert!(int8.contains("-128"));
        assert!(int8.contains("127"));

        let uint64 = lines.iter().find(|l| l.contains("uint64_t")).unwrap();
        assert!(uint64.contains("18446744073709551615"));
    }
}
