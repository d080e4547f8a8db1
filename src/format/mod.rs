//! Output formatting for products and comparisons (table, JSON, markdown, CSV).

use crate::catalog::{Product, Source};
use crate::compare::{compare, total_savings, CheaperSource, ProductComparison};
use crate::config::OutputFormat;
use crate::filters::Category;
use serde::Serialize;

const NAME_WIDTH: usize = 45;

/// Formats catalog data for output.
pub struct Formatter {
    format: OutputFormat,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats a single product with its full details.
    pub fn format_product(&self, product: &Product) -> String {
        match self.format {
            OutputFormat::Json => json(product, "{}"),
            OutputFormat::Table => self.table_single(product),
            OutputFormat::Markdown => self.markdown_single(product),
            OutputFormat::Csv => self.csv_products(std::slice::from_ref(product)),
        }
    }

    /// Formats a product listing.
    pub fn format_products(&self, products: &[Product]) -> String {
        if products.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => PRODUCT_CSV_HEADER.to_string(),
                _ => "No products found.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => json(products, "[]"),
            OutputFormat::Table => self.table_products(products),
            OutputFormat::Markdown => self.markdown_products(products),
            OutputFormat::Csv => self.csv_products(products),
        }
    }

    /// Formats side-by-side comparison rows.
    pub fn format_comparisons(&self, rows: &[ProductComparison]) -> String {
        if rows.is_empty() {
            return match self.format {
                OutputFormat::Json => "[]".to_string(),
                OutputFormat::Csv => COMPARISON_CSV_HEADER.to_string(),
                _ => "No products selected.".to_string(),
            };
        }

        match self.format {
            OutputFormat::Json => json(rows, "[]"),
            OutputFormat::Table => self.table_comparisons(rows),
            OutputFormat::Markdown => self.markdown_comparisons(rows),
            OutputFormat::Csv => self.csv_comparisons(rows),
        }
    }

    /// Formats category labels with product counts.
    pub fn format_categories(&self, counts: &[(Category, usize)]) -> String {
        match self.format {
            OutputFormat::Json => {
                let rows: Vec<CategoryCount> = counts
                    .iter()
                    .map(|(category, count)| CategoryCount { category: *category, count: *count })
                    .collect();
                json(&rows, "[]")
            }
            OutputFormat::Csv => {
                let mut lines = vec!["category,count".to_string()];
                lines.extend(counts.iter().map(|(c, n)| format!("{},{}", c, n)));
                lines.join("\n")
            }
            OutputFormat::Markdown => {
                let mut lines = vec![
                    "| Category | Products |".to_string(),
                    "|----------|----------|".to_string(),
                ];
                lines.extend(counts.iter().map(|(c, n)| format!("| {} | {} |", c, n)));
                lines.join("\n")
            }
            OutputFormat::Table => {
                let mut lines = vec![format!("{:<10}  {:>8}", "Category", "Products")];
                lines.push(format!("{:-<10}  {:->8}", "", ""));
                lines.extend(counts.iter().map(|(c, n)| format!("{:<10}  {:>8}", c.label(), n)));
                lines.join("\n")
            }
        }
    }

    // Table formatting

    fn table_single(&self, product: &Product) -> String {
        let comparison = compare(product);
        let mut lines = Vec::new();

        lines.push(format!("ID:        {}", product.id));
        lines.push(format!("Name:      {}", product.name));
        lines.push(format!("Category:  {}", Category::of(product)));
        if !product.description.is_empty() {
            lines.push(format!("About:     {}", product.description));
        }

        for source in Source::all() {
            let marker =
                if comparison.cheaper_source.source() == Some(source) { " *" } else { "" };
            let label = format!("{}:", source);
            lines.push(format!("{:<10} {:.2}{}", label, product.price(source), marker));
            if !product.url(source).is_empty() {
                lines.push(format!("           {}", product.url(source)));
            }
        }

        let best = savings_line(comparison.cheaper_source, comparison.savings);
        lines.push(format!("Best:      {}", best));

        if !product.specs.is_empty() {
            lines.push("Specs:".to_string());
            lines.extend(product.specs.iter().map(|s| format!("  - {}", s)));
        }

        lines.join("\n")
    }

    fn table_products(&self, products: &[Product]) -> String {
        let name_width = NAME_WIDTH;
        let mut lines = Vec::new();

        lines.push(format!(
            "{:<16}  {:<9}  {:>12}  {:>12}  {:<8}  {}",
            "ID", "Category", "Amazon", "Flipkart", "Best", "Name"
        ));
        lines.push(format!(
            "{:-<16}  {:-<9}  {:->12}  {:->12}  {:-<8}  {:-<name_width$}",
            "", "", "", "", "", ""
        ));

        for product in products {
            let best = compare(product).cheaper_source;
            lines.push(format!(
                "{:<16}  {:<9}  {:>12.2}  {:>12.2}  {:<8}  {}",
                product.id,
                Category::of(product).label(),
                product.amazon_price,
                product.flipkart_price,
                best.to_string(),
                truncate(&product.name, name_width)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {} products", products.len()));

        lines.join("\n")
    }

    fn table_comparisons(&self, rows: &[ProductComparison]) -> String {
        let name_width = NAME_WIDTH;
        let mut lines = Vec::new();

        lines.push(format!(
            "{:<16}  {:>12}  {:>12}  {:<8}  {:>10}  {:>7}  {}",
            "ID", "Amazon", "Flipkart", "Cheaper", "Savings", "Saved", "Name"
        ));
        lines.push(format!(
            "{:-<16}  {:->12}  {:->12}  {:-<8}  {:->10}  {:->7}  {:-<name_width$}",
            "", "", "", "", "", "", ""
        ));

        for row in rows {
            lines.push(format!(
                "{:<16}  {:>12.2}  {:>12.2}  {:<8}  {:>10.2}  {:>6.2}%  {}",
                row.id,
                row.amazon_price,
                row.flipkart_price,
                row.cheaper_source.to_string(),
                row.savings,
                row.savings_percent,
                truncate(&row.name, name_width)
            ));
        }

        lines.push(String::new());
        for row in rows {
            lines.push(format!("{}: {}", row.id, savings_line(row.cheaper_source, row.savings)));
            if let Some(url) = &row.best_url {
                lines.push(format!("  {}", url));
            }
        }

        lines.push(String::new());
        lines.push(format!(
            "Comparing {} products, total savings {:.2}",
            rows.len(),
            total_savings(rows)
        ));

        lines.join("\n")
    }

    // Markdown formatting

    fn markdown_single(&self, product: &Product) -> String {
        let comparison = compare(product);
        let mut lines = Vec::new();

        lines.push(format!("## {}", product.name));
        lines.push(String::new());

        lines.push(format!("- **ID:** {}", product.id));
        lines.push(format!("- **Category:** {}", Category::of(product)));
        for source in Source::all() {
            lines.push(format!(
                "- **{}:** [{:.2}]({})",
                source,
                product.price(source),
                product.url(source)
            ));
        }
        lines.push(format!(
            "- **Best:** {}",
            savings_line(comparison.cheaper_source, comparison.savings)
        ));

        if !product.specs.is_empty() {
            lines.push(String::new());
            lines.extend(product.specs.iter().map(|s| format!("- {}", s)));
        }

        lines.join("\n")
    }

    fn markdown_products(&self, products: &[Product]) -> String {
        let mut lines = Vec::new();

        lines.push("| ID | Category | Amazon | Flipkart | Best | Name |".to_string());
        lines.push("|----|----------|--------|----------|------|------|".to_string());

        for product in products {
            lines.push(format!(
                "| {} | {} | [{:.2}]({}) | [{:.2}]({}) | {} | {} |",
                product.id,
                Category::of(product),
                product.amazon_price,
                product.amazon_url,
                product.flipkart_price,
                product.flipkart_url,
                compare(product).cheaper_source,
                product.name
            ));
        }

        lines.push(String::new());
        lines.push(format!("*{} products found*", products.len()));

        lines.join("\n")
    }

    fn markdown_comparisons(&self, rows: &[ProductComparison]) -> String {
        let mut lines = Vec::new();

        lines.push("| ID | Amazon | Flipkart | Cheaper | Savings | Saved | Name |".to_string());
        lines.push("|----|--------|----------|---------|---------|-------|------|".to_string());

        for row in rows {
            let cheaper = match &row.best_url {
                Some(url) => format!("[{}]({})", row.cheaper_source, url),
                None => row.cheaper_source.to_string(),
            };
            lines.push(format!(
                "| {} | {:.2} | {:.2} | {} | {:.2} | {:.2}% | {} |",
                row.id,
                row.amazon_price,
                row.flipkart_price,
                cheaper,
                row.savings,
                row.savings_percent,
                row.name
            ));
        }

        lines.push(String::new());
        lines.push(format!("*Total savings: {:.2}*", total_savings(rows)));

        lines.join("\n")
    }

    // CSV formatting

    fn csv_products(&self, products: &[Product]) -> String {
        let mut lines = vec![PRODUCT_CSV_HEADER.to_string()];

        for product in products {
            lines.push(format!(
                "{},{},{},{},{},{},{},{}",
                csv_escape(&product.id),
                csv_escape(&product.name),
                Category::of(product),
                product.amazon_price,
                product.flipkart_price,
                csv_escape(&product.amazon_url),
                csv_escape(&product.flipkart_url),
                csv_escape(&product.specs.join("; "))
            ));
        }

        lines.join("\n")
    }

    fn csv_comparisons(&self, rows: &[ProductComparison]) -> String {
        let mut lines = vec![COMPARISON_CSV_HEADER.to_string()];

        for row in rows {
            lines.push(format!(
                "{},{},{},{},{},{},{:.2},{}",
                csv_escape(&row.id),
                csv_escape(&row.name),
                row.amazon_price,
                row.flipkart_price,
                row.cheaper_source,
                row.savings,
                row.savings_percent,
                row.best_url.as_deref().map(csv_escape).unwrap_or_default()
            ));
        }

        lines.join("\n")
    }
}

const PRODUCT_CSV_HEADER: &str =
    "id,name,category,amazon_price,flipkart_price,amazon_url,flipkart_url,specs";

const COMPARISON_CSV_HEADER: &str =
    "id,name,amazon_price,flipkart_price,cheaper_source,savings,savings_percent,best_url";

#[derive(Serialize)]
struct CategoryCount {
    category: Category,
    count: usize,
}

fn json<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| fallback.to_string())
}

fn savings_line(cheaper: CheaperSource, savings: f64) -> String {
    match cheaper.source() {
        Some(source) => format!("You save {:.2} by choosing {}", savings, source),
        None => "Same price at both stores".to_string(),
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() > width {
        let head: String = s.chars().take(width - 3).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
