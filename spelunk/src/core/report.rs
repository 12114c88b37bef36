// src/core/report.rs
use crate::core::classifier::UNKNOWN;
use crate::models::{ScanReport, Totals};
use std::fmt::Write as _;

/// Output layout for a statistics report.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated lines.
    #[default]
    Plain,
    Html,
    Latex,
}

/// One logical line of a report, independent of the output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row<'a> {
    Header,
    Category { name: &'a str, totals: Totals },
    Location { dir: &'a str, files: u64 },
    SummaryHeader,
    Identified(Totals),
    Unknown(Totals),
    Total(Totals),
    Directories(u64),
    Footer,
}

/// Lays out the rows of a report in print order.
///
/// Categories come in sorted order with Unknown left out of the main list;
/// with `show_locations` each category is followed by its directories.
#[must_use]
pub fn rows(report: &ScanReport, show_locations: bool) -> Vec<Row<'_>> {
    let mut rows = vec![Row::Header];

    for name in report.files.keys().filter(|name| name.as_str() != UNKNOWN) {
        rows.push(Row::Category {
            name,
            totals: report.totals_for(name),
        });
        if show_locations {
            if let Some(dirs) = report.locations.get(name) {
                rows.extend(dirs.iter().map(|(dir, &files)| Row::Location { dir, files }));
            }
        }
    }

    rows.push(Row::SummaryHeader);
    rows.push(Row::Identified(report.identified()));
    if let Some(unknown) = report.unknown() {
        rows.push(Row::Unknown(unknown));
    }
    rows.push(Row::Total(report.grand_total()));
    if show_locations {
        rows.push(Row::Directories(report.directory_tally));
    }
    rows.push(Row::Footer);
    rows
}

/// Renders `report` as text in the chosen format.
#[must_use]
pub fn render(report: &ScanReport, format: OutputFormat, show_locations: bool) -> String {
    let mut out = String::new();
    for row in rows(report, show_locations) {
        match format {
            OutputFormat::Plain => write_plain(&mut out, &row),
            OutputFormat::Html => write_html(&mut out, &row),
            OutputFormat::Latex => write_latex(&mut out, &row),
        }
    }
    out
}

// Writing into a String cannot fail, so the fmt::Results below are dropped.

fn write_plain(out: &mut String, row: &Row<'_>) {
    let _ = match *row {
        Row::Header => writeln!(out, "Type\t\tNumber\t\tLines"),
        Row::Category { name, totals } => {
            writeln!(out, "{name}\t\t{}\t\t{}", totals.files, totals.lines)
        }
        Row::Location { dir, files } => writeln!(out, "\t{dir}\t{files}"),
        Row::SummaryHeader => writeln!(out, "\n\t\t\tFiles\tLines"),
        Row::Identified(t) => writeln!(out, "Identified Code\t\t{}\t{}\n", t.files, t.lines),
        Row::Unknown(t) => writeln!(out, "Unknown\t\t\t{}\t{}\n", t.files, t.lines),
        Row::Total(t) => writeln!(out, "Total\t\t\t{}\t{}\n", t.files, t.lines),
        Row::Directories(n) => writeln!(out, "Number of directories\t{n}"),
        Row::Footer => Ok(()),
    };
}

fn write_html(out: &mut String, row: &Row<'_>) {
    let _ = match *row {
        Row::Header => writeln!(out, "<table><tr><td>Type</td><td>Number</td><td>Lines</td></tr>"),
        Row::Category { name, totals } => writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(name),
            totals.files,
            totals.lines
        ),
        Row::Location { dir, files } => writeln!(
            out,
            "<tr><td>{}</td><td>{files}</td></tr>",
            escape_html(dir)
        ),
        Row::SummaryHeader => writeln!(
            out,
            "</table><br>\n<table>\n<tr><td></td><td>Files</td><td>Lines</td></tr>"
        ),
        Row::Identified(t) => html_totals(out, "Identified Code", t),
        Row::Unknown(t) => html_totals(out, "Unknown", t),
        Row::Total(t) => html_totals(out, "Total", t),
        Row::Directories(n) => {
            writeln!(out, "<tr><td>Number of directories</td><td>{n}</td></tr>")
        }
        Row::Footer => writeln!(out, "</table>"),
    };
}

fn html_totals(out: &mut String, label: &str, t: Totals) -> std::fmt::Result {
    writeln!(
        out,
        "<tr><td>{label}</td><td>{}</td><td>{}</td></tr>",
        t.files, t.lines
    )
}

fn write_latex(out: &mut String, row: &Row<'_>) {
    let _ = match *row {
        Row::Header => writeln!(
            out,
            "\\begin{{tabular}}{{|l|l|c|}}\n\\hline\nType & Number & Lines\\\\\n\\hline"
        ),
        Row::Category { name, totals } => writeln!(
            out,
            "{} & {} & {}\\\\",
            escape_latex(name),
            totals.files,
            totals.lines
        ),
        Row::Location { dir, files } => writeln!(out, "{} & {files}\\\\", escape_latex(dir)),
        Row::SummaryHeader => writeln!(out, "\\hline \\hline\n& Files & Lines\\\\"),
        Row::Identified(t) => writeln!(out, "Identified Code & {} & {}\\\\", t.files, t.lines),
        Row::Unknown(t) => writeln!(out, "Unknown & {} & {}\\\\\n\\hline", t.files, t.lines),
        Row::Total(t) => writeln!(out, "Total & {} & {}\\\\\\hline", t.files, t.lines),
        Row::Directories(n) => writeln!(out, "Number of directories & {n}\\\\"),
        Row::Footer => writeln!(out, "\\end{{tabular}}"),
    };
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\\' => escaped.push_str("\\textbackslash{}"),
            '~' => escaped.push_str("\\textasciitilde{}"),
            '^' => escaped.push_str("\\textasciicircum{}"),
            _ => escaped.push(c),
        }
    }
    escaped
}
