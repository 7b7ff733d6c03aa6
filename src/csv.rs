// src/csv.rs
fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Quote a cell only when it would otherwise break the row.
pub fn escape_cell(cell: &str, sep: char) -> String {
    if needs_quotes(cell, sep) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        s!(cell)
    }
}

/// Single-column table: header line, then one line per value, joined with '\n'.
/// No trailing newline.
pub fn single_column(header: &str, values: &[String]) -> String {
    let mut lines = Vec::with_capacity(values.len() + 1);
    lines.push(escape_cell(header, ','));
    lines.extend(values.iter().map(|v| escape_cell(v, ',')));
    lines.join("\n")
}
