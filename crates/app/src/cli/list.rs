//! Listing arguments shared by every `list` subcommand.

use clap::Args;
use showroom::table::{DEFAULT_PER_PAGE, DataTable, TableRow, render::render_rows};

#[derive(Debug, Args)]
pub(crate) struct ListArgs {
    /// Search text; every word must appear in the same column
    #[arg(long, default_value = "")]
    search: String,

    /// Exact column filter as `column=value`, repeatable
    #[arg(long = "filter", value_parser = parse_filter)]
    filters: Vec<(String, String)>,

    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    page: usize,

    /// Rows per page
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    per_page: usize,
}

impl ListArgs {
    /// Apply the search, filters and page size to `table`.
    pub(crate) fn apply<T: TableRow>(&self, table: &mut DataTable<T>) {
        table.set_per_page(self.per_page);

        let filter = table.filter_mut();

        filter.set_text(self.search.as_str());

        for (column, value) in &self.filters {
            filter.select(column.as_str(), value.as_str());
        }
    }

    /// Render the requested page of `table`.
    pub(crate) fn render<T: TableRow>(&self, table: &DataTable<T>) -> String {
        format!(
            "{}\npage {} of {} ({} rows)",
            render_rows(&table.page(self.page)),
            self.page.max(1),
            table.page_count(),
            table.visible().len()
        )
    }
}

fn parse_filter(input: &str) -> Result<(String, String), String> {
    input
        .split_once('=')
        .map(|(column, value)| (column.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected column=value, got `{input}`"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_split_on_the_first_equals_sign() {
        assert_eq!(
            parse_filter("manufacturer=Hino=Motors"),
            Ok(("manufacturer".to_string(), "Hino=Motors".to_string()))
        );
        assert!(parse_filter("manufacturer").is_err());
    }
}
