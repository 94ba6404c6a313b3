use crate::table::ResultTable;

/// Render a result table as RFC-4180 CSV with CRLF line endings.
pub fn to_csv(table: &ResultTable) -> String {
    let mut out = String::new();
    write_record(&mut out, &table.header);
    for row in &table.rows {
        write_record(&mut out, row);
    }
    out
}

fn write_record(out: &mut String, fields: &[String]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape(field));
    }
    out.push_str("\r\n");
}

/// Quote a field when it carries a comma, quote, or line break; double any
/// embedded quotes.
fn escape(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
