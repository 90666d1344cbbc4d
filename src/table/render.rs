//! Table rendering

use tabled::{
    builder::Builder,
    settings::{Color, Style, object::Rows},
};

use crate::table::TableRow;

/// Shown in place of a table without rows.
pub const EMPTY_TABLE: &str = "There are no records to display";

/// Render `rows` as a rounded table, headers taken from the first row.
#[must_use]
pub fn render_rows<R: TableRow + ?Sized>(rows: &[&R]) -> String {
    let Some(first) = rows.first() else {
        return EMPTY_TABLE.to_string();
    };

    let mut builder = Builder::default();

    builder.push_record(first.cells().iter().map(|cell| cell.label));

    for row in rows {
        builder.push_record(row.cells().into_iter().map(|cell| cell.value));
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    table.to_string()
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use crate::table::{Cell, Cells};

    use super::*;

    struct Row(&'static str);

    impl TableRow for Row {
        fn cells(&self) -> Cells {
            smallvec![Cell::new("name", "Name", self.0)]
        }
    }

    #[test]
    fn renders_headers_and_values() {
        let rows = [Row("Ani"), Row("Budi")];
        let refs: Vec<&Row> = rows.iter().collect();

        let rendered = render_rows(&refs);

        assert!(rendered.contains("Name"));
        assert!(rendered.contains("Ani"));
        assert!(rendered.contains("Budi"));
    }

    #[test]
    fn empty_tables_say_so() {
        assert_eq!(render_rows::<Row>(&[]), EMPTY_TABLE);
    }
}
