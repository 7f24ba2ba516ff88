use std::io::{self, Write};

use pad::PadStr;

pub struct Table {
    ncol: usize,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn with_titles(titles: &[&str], capacity: usize) -> Table {
        let mut rows = Vec::with_capacity(capacity + 1);
        rows.push(titles.iter().map(|s| s.to_string()).collect());
        Table {
            ncol: titles.len(),
            rows,
        }
    }

    /// Rows shorter than the title row are padded with empty cells, extra
    /// cells are dropped.
    pub fn add(&mut self, mut row: Vec<String>) {
        row.resize(self.ncol, String::new());
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut widths = vec![0; self.ncol];
        for row in self.rows.iter() {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(console::measure_text_width(cell));
            }
        }

        let mut split = String::from("+");
        for width in widths.iter() {
            split.push_str(&"-".repeat(width + 2));
            split.push('+');
        }

        let mut out = String::new();
        out.push_str(&split);
        out.push('\n');
        for (rowi, row) in self.rows.iter().enumerate() {
            out.push('|');
            for (cell, width) in row.iter().zip(widths.iter()) {
                let text = cell.pad_to_width_with_alignment(*width, pad::Alignment::Left);
                out.push_str(&format!(" {text} |"));
            }
            out.push('\n');
            if rowi == 0 || rowi == self.rows.len() - 1 {
                out.push_str(&split);
                out.push('\n');
            }
        }
        out
    }

    pub fn show(&self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(self.render().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        let mut table = Table::with_titles(&["ID", "Name"], 2);
        table.add(vec![String::from("1"), String::from("Rust")]);
        table.add(vec![String::from("22")]);

        let expect = "\
+----+------+
| ID | Name |
+----+------+
| 1  | Rust |
| 22 |      |
+----+------+
";
        assert_eq!(table.render(), expect);
    }

    #[test]
    fn test_render_titles_only() {
        let table = Table::with_titles(&["A"], 0);
        assert_eq!(table.render(), "+---+\n| A |\n+---+\n");
    }
}
