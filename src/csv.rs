// src/csv.rs
use std::io::{self, Write};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Header plus every row of one table.
pub fn write_table<W, I>(mut w: W, headers: &[&str], rows: I, sep: char) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Vec<String>>,
{
    write_row(&mut w, headers, sep)?;
    for r in rows {
        write_row(&mut w, &r[..], sep)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(row: &[&str], sep: char) -> String {
        let mut buf = Vec::new();
        write_row(&mut buf, row, sep).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_fields_unquoted() {
        assert_eq!(render(&["P00533", "Y", "845"], ','), "P00533,Y,845\n");
    }

    #[test]
    fn quotes_only_when_needed() {
        assert_eq!(render(&["a,b", "c"], ','), "\"a,b\",c\n");
        assert_eq!(render(&["a,b", "c"], '\t'), "a,b\tc\n");
        assert_eq!(render(&["say \"hi\""], ','), "\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn table_has_header_even_when_empty() {
        let mut buf = Vec::new();
        write_table(&mut buf, &["a", "b"], Vec::<Vec<String>>::new(), ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a,b\n");
    }
}
