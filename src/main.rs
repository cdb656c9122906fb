use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use regex::Regex;

use oppboard_core::{Catalog, FieldHints, LogicalField, Record, SortMode};

/// Internship Catalog Browser - filter and rank listings from a JSON export
///
/// Examples:
///   # Show every listing
///   oppboard internships.json
///
///   # Free-text search across all columns
///   oppboard internships.json --query "food security"
///
///   # Narrow by facets (substring match, so compound cells still hit)
///   oppboard internships.json --area Agriculture --paid Stipend
///
///   # Order by application deadline, soonest first
///   oppboard internships.json --sort deadline-asc
///
///   # Inspect the facet values available for filtering
///   oppboard internships.json --facets
#[derive(Parser, Debug)]
#[command(name = "oppboard")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - The query matches case-insensitively against every column of a listing\n  \
    - Facet selections match by substring, so 'Agriculture' matches a\n    \
      compound cell like 'Agriculture / Food Security'\n  \
    - All active constraints must hold (AND)\n\n\
Sort Modes:\n  \
    - relevance: keep the dataset's own order\n  \
    - deadline-asc / deadline-desc: by parsed deadline; listings without a\n    \
      parseable deadline always sort last\n  \
    - title-asc / title-desc: lexical by title")]
struct Cli {
    /// Path to the dataset JSON file
    #[arg(value_name = "FILE")]
    file: String,

    /// Free-text search across every column
    #[arg(short, long, value_name = "TEXT")]
    query: Option<String>,

    /// Filter to an area facet value
    #[arg(short, long, value_name = "VALUE")]
    area: Option<String>,

    /// Filter to an industry facet value
    #[arg(short, long, value_name = "VALUE")]
    industry: Option<String>,

    /// Filter to a paid-status facet value
    #[arg(short, long, value_name = "VALUE")]
    paid: Option<String>,

    /// Sort mode: relevance, deadline-asc, deadline-desc, title-asc, title-desc
    #[arg(short, long, value_name = "MODE", default_value = "relevance")]
    sort: String,

    /// List the available facet values and exit
    #[arg(long)]
    facets: bool,

    /// Emit the filtered listing as a JSON array
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let sort: SortMode = cli.sort.parse()?;

    let mut catalog = Catalog::load(&cli.file)
        .with_context(|| format!("could not load dataset from '{}'", cli.file))?;
    log::debug!("loaded {} listings from {}", catalog.records().len(), cli.file);

    if cli.facets {
        print_facets(&catalog);
        return Ok(());
    }

    if let Some(query) = cli.query {
        catalog.set_query(query);
    }
    if let Some(area) = cli.area {
        catalog.set_area(area);
    }
    if let Some(industry) = cli.industry {
        catalog.set_industry(industry);
    }
    if let Some(paid) = cli.paid {
        catalog.set_paid(paid);
    }
    catalog.set_sort(sort);

    let listings = catalog.apply_filters();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&listings)?);
        return Ok(());
    }

    print_listings(&catalog, &listings);
    Ok(())
}

fn print_facets(catalog: &Catalog) {
    let dimensions = [
        ("Area", LogicalField::Area),
        ("Industry", LogicalField::Industry),
        ("Paid", LogicalField::Paid),
    ];

    for (label, field) in dimensions {
        println!("{}", label.bold());
        for value in catalog.facet_values(field) {
            println!("  {}", value);
        }
        println!();
    }
}

fn print_listings(catalog: &Catalog, listings: &[Record]) {
    if !catalog.filters().is_unconstrained() {
        let filters = catalog.filters();
        let mut active = Vec::new();
        if !filters.query.trim().is_empty() {
            active.push(format!("query: \"{}\"", filters.query.trim()));
        }
        for (label, value) in [
            ("area", &filters.area),
            ("industry", &filters.industry),
            ("paid", &filters.paid),
        ] {
            if value != oppboard_core::ALL {
                active.push(format!("{}: {}", label, value));
            }
        }
        println!("{} {}", "Active filters:".bold(), active.join("; "));
    }

    println!("{} {}", "Matching listings:".bold(), listings.len());
    println!();

    if listings.is_empty() {
        println!(
            "{}",
            "No internships match your filters. Try broadening your search.".yellow()
        );
        return;
    }

    for listing in listings {
        print_listing(listing, catalog.hints());
    }
}

fn print_listing(listing: &Record, hints: &FieldHints) {
    let title = display_title(listing, hints);
    println!("{}", title.bold().cyan());

    let org = listing.resolved_text(hints, LogicalField::Org);
    if !org.is_empty() {
        println!("  {}", org);
    }

    let chips: Vec<String> = [
        ("Area", LogicalField::Area),
        ("Industry", LogicalField::Industry),
        ("Deadline", LogicalField::Deadline),
        ("Duration", LogicalField::Duration),
        ("Paid", LogicalField::Paid),
    ]
    .iter()
    .filter_map(|(label, field)| {
        let value = listing.resolved_text(hints, *field);
        if value.is_empty() {
            None
        } else {
            Some(format!("{}: {}", label, value))
        }
    })
    .collect();

    if !chips.is_empty() {
        println!("  {}", chips.join(" | ").dimmed());
    }

    let desc = listing.resolved_text(hints, LogicalField::Desc);
    if !desc.is_empty() {
        println!("  {}", truncate_chars(&desc, 240));
    }

    let link = listing.resolved_text(hints, LogicalField::Link);
    if is_actionable_link(&link) {
        println!("  {} {}", "Apply / Learn more:".green(), link);
    } else {
        println!("  {}", "No link provided".dimmed());
    }

    println!();
}

fn display_title(listing: &Record, hints: &FieldHints) -> String {
    let title = listing.resolved_text(hints, LogicalField::Title);
    if !title.is_empty() {
        return title;
    }
    let org = listing.resolved_text(hints, LogicalField::Org);
    if !org.is_empty() {
        return org;
    }
    "Internship".to_string()
}

/// A link is actionable only when it is http(s)-prefixed; anything else
/// is displayed as absent rather than offered for opening.
fn is_actionable_link(link: &str) -> bool {
    let pattern = Regex::new(r"(?i)^https?://").unwrap();
    pattern.is_match(link)
}

/// Character-safe display truncation for long descriptions.
fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
