//! Terminal tables.

use std::io::{self, Write};

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use stockdesk_analytics::{
    ColumnStats, Report, Series, SeriesSummary, StockBand, StockLevel, TrendLine,
};
use stockdesk_inventory::InventoryRecord;

/// Inventory rows with their zero-based selection index.
pub fn inventory_table<'a>(rows: impl IntoIterator<Item = (usize, &'a InventoryRecord)>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Item Name"),
        header_cell("Quantity"),
        header_cell("Reorder Level"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for index in [0, 2, 3] {
        align_column(&mut table, index, CellAlignment::Right);
    }

    for (index, record) in rows {
        let status = if record.needs_reorder() {
            Cell::new("reorder").fg(Color::Yellow).add_attribute(Attribute::Bold)
        } else {
            Cell::new("ok")
        };
        table.add_row(vec![
            Cell::new(index),
            Cell::new(&record.item_name),
            Cell::new(record.quantity),
            Cell::new(record.reorder_level),
            status,
        ]);
    }
    table
}

/// pandas-style layout: one row per statistic, one column per data column.
pub fn stats_table(stats: &[ColumnStats]) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("")];
    header.extend(stats.iter().map(|s| header_cell(&s.column)));
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=stats.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let rows: [(&str, fn(&ColumnStats) -> String); 8] = [
        ("count", |s| s.count.to_string()),
        ("mean", |s| number(s.mean)),
        ("std", |s| s.std.map(number).unwrap_or_else(|| "-".to_string())),
        ("min", |s| number(s.min)),
        ("25%", |s| number(s.q25)),
        ("50%", |s| number(s.median)),
        ("75%", |s| number(s.q75)),
        ("max", |s| number(s.max)),
    ];
    for (label, value) in rows {
        let mut row = vec![Cell::new(label).add_attribute(Attribute::Bold)];
        row.extend(stats.iter().map(|s| Cell::new(value(s))));
        table.add_row(row);
    }
    table
}

/// Every report section as a titled table followed by its summary line.
pub fn write_report(out: &mut impl Write, report: &Report) -> io::Result<()> {
    writeln!(out, "Month filter: {}", report.month)?;

    section(
        out,
        "Sales trends",
        &report.sales_trends,
        ["Period", "Quantity"],
        |t| vec![t.period.to_string(), t.quantity.to_string()],
    )?;
    writeln!(out, "{}", trend_line(report.sales_trend_line.as_ref()))?;
    section(
        out,
        "Monthly sales",
        &report.monthly_sales,
        ["Month", "Quantity"],
        |t| vec![t.month.clone(), t.quantity.to_string()],
    )?;
    section(
        out,
        "Seasonality",
        &report.seasonality,
        ["Month", "Quarter", "Mean quantity"],
        |s| vec![s.month.to_string(), s.quarter.to_string(), number(s.mean_quantity)],
    )?;

    writeln!(out)?;
    writeln!(out, "On demand vs regular")?;
    let mut flags = Table::new();
    flags.set_header(vec![header_cell("Kind"), header_cell("Products")]);
    apply_table_style(&mut flags);
    align_column(&mut flags, 1, CellAlignment::Right);
    for count in &report.on_demand_vs_regular.counts {
        flags.add_row(vec![Cell::new(count.label()), Cell::new(count.count)]);
    }
    writeln!(out, "{flags}")?;
    writeln!(out, "total {}", report.on_demand_vs_regular.total)?;
    writeln!(out, "{}", summary_line(report.on_demand_vs_regular.summary.as_ref()))?;

    stock_section(out, "Product stock", &report.product_stock)?;
    stock_section(out, "Material stock", &report.material_stock)?;
    Ok(())
}

fn section<T, const N: usize>(
    out: &mut impl Write,
    title: &str,
    series: &Series<T>,
    headers: [&str; N],
    cells: impl Fn(&T) -> Vec<String>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    let mut table = Table::new();
    table.set_header(headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for point in &series.points {
        table.add_row(cells(point));
    }
    writeln!(out, "{table}")?;
    writeln!(out, "{}", summary_line(series.summary.as_ref()))
}

fn stock_section(out: &mut impl Write, title: &str, series: &Series<StockLevel>) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{title}")?;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Name"), header_cell("Stock"), header_cell("Level")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for level in &series.points {
        table.add_row(vec![
            Cell::new(&level.name),
            Cell::new(level.stock),
            band_cell(level.band),
        ]);
    }
    writeln!(out, "{table}")?;
    writeln!(out, "{}", summary_line(series.summary.as_ref()))
}

fn summary_line(summary: Option<&SeriesSummary>) -> String {
    match summary {
        Some(s) => format!(
            "mean {}  median {}  std {}",
            number(s.mean),
            number(s.median),
            s.std_dev.map(number).unwrap_or_else(|| "-".to_string())
        ),
        None => "no data".to_string(),
    }
}

fn trend_line(line: Option<&TrendLine>) -> String {
    match line {
        Some(line) => format!("trend {} per day", number(line.slope)),
        None => "trend -".to_string(),
    }
}

fn band_cell(band: StockBand) -> Cell {
    let color = match band {
        StockBand::Healthy => Color::Green,
        StockBand::Low => Color::Yellow,
        StockBand::Critical => Color::Red,
    };
    Cell::new(band.as_str()).fg(color)
}

fn number(value: f64) -> String {
    format!("{value:.2}")
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
