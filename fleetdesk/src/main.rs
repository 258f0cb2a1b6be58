//! `fleetdesk`: render a fleet dashboard list page from a snapshot file.

mod error;
mod pages;
mod paths;
mod records;
mod settings;
mod snapshot;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};
use tabview::prelude::*;

use crate::error::FleetError;
use crate::pages::Page;
use crate::records::Record;
use crate::snapshot::Snapshot;

#[derive(Debug, Parser)]
#[command(name = "fleetdesk", version, about = "Browse fleet dashboard list pages")]
struct Args {
    /// Snapshot JSON with clients, orders, reservations and people
    snapshot: PathBuf,

    /// List page to show
    #[arg(value_enum, value_name = "PAGE")]
    list: Page,

    /// Free-text search
    #[arg(long)]
    search: Option<String>,

    /// Facet selection as ID=VALUE, repeatable
    #[arg(long = "filter", value_name = "ID=VALUE", value_parser = parse_filter)]
    filters: Vec<(String, String)>,

    /// Group rows by this descriptor id
    #[arg(long)]
    group: Option<String>,

    /// Sort as COLUMN or COLUMN:desc
    #[arg(long, value_parser = parse_sort)]
    sort: Option<SortState>,

    /// Page number, starting at 1
    #[arg(long = "page", default_value_t = 1)]
    page_number: usize,

    /// Rows per page
    #[arg(long)]
    page_size: Option<usize>,

    /// Select a row by id, repeatable
    #[arg(long = "select", value_name = "ID")]
    select: Vec<String>,

    /// Toggle selection of every row on the shown page
    #[arg(long)]
    select_page: bool,

    /// Delete the selected rows
    #[arg(long)]
    delete: bool,

    /// Treat the snapshot rows as one server page out of N rows
    #[arg(long, value_name = "N")]
    server_total: Option<usize>,

    /// View config JSON [default: <config dir>/view.json]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file [default: <cache dir>/latest.log]
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn parse_filter(s: &str) -> Result<(String, String), String> {
    let (id, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, got '{s}'"))?;
    if id.is_empty() {
        return Err(format!("missing filter id in '{s}'"));
    }
    Ok((id.to_string(), value.to_string()))
}

fn parse_sort(s: &str) -> Result<SortState, String> {
    match s.rsplit_once(':') {
        None => Ok(SortState::ascending(s)),
        Some((column, "asc")) => Ok(SortState::ascending(column)),
        Some((column, "desc")) => Ok(SortState::descending(column)),
        Some((_, direction)) => Err(format!("unknown sort direction '{direction}'")),
    }
}

fn init_logging(args: &Args) -> Result<(), FleetError> {
    let path = match &args.log_file {
        Some(path) => path.clone(),
        None => paths::log_file().ok_or(FleetError::NoHomeDir)?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(FleetError::io(parent))?;
    }
    paths::rotate_log(&path).map_err(FleetError::io(&path))?;
    let file = File::create(&path).map_err(FleetError::io(&path))?;

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    WriteLogger::init(level, Config::default(), file)?;
    Ok(())
}

/// One line per drained event.
fn describe<T: Record>(event: &TableEvent<T>) -> String {
    match event {
        TableEvent::PaginationChange(state) => format!(
            "pagination-change page={} size={}",
            state.page_index + 1,
            state.page_size
        ),
        TableEvent::SortChange(Some(sort)) => {
            let direction = match sort.direction {
                SortDirection::Ascending => "asc",
                SortDirection::Descending => "desc",
            };
            format!("sort-change {} {direction}", sort.column)
        }
        TableEvent::SortChange(None) => "sort-change none".to_string(),
        TableEvent::DeleteSelected(rows) => {
            let ids: Vec<&str> = rows.iter().map(|r| r.record_id()).collect();
            format!("delete-selected {}", ids.join(","))
        }
        TableEvent::RowAction { row_id, action, .. } => format!("row-action {action} {row_id}"),
        TableEvent::Add => "add".to_string(),
        TableEvent::Import => "import".to_string(),
    }
}

/// Apply the command line to a page view and render the result.
fn drive<T: Record>(
    mut view: TableView<T>,
    rows: Vec<T>,
    args: &Args,
) -> Result<String, FleetError> {
    let page_index = args.page_number.saturating_sub(1);

    if let Some(total) = args.server_total {
        let size = args.page_size.unwrap_or(view.config().page_size);
        view.set_external_pagination(PaginationState::new(size).at(page_index), total);
    }
    view.set_data(rows);

    if let Some(text) = &args.search {
        view.type_search(text.clone(), Instant::now());
        view.flush_search();
    }
    for (id, value) in &args.filters {
        view.set_filter(id, value)?;
    }
    if let Some(group) = &args.group {
        view.set_group(Some(group.as_str()))?;
    }
    if let Some(sort) = &args.sort {
        view.set_sort(Some(sort.clone()))?;
    }

    if !view.is_externally_paginated() {
        if let Some(size) = args.page_size {
            view.set_page_size(size)?;
        }
        if page_index > 0 && !view.go_to_page(page_index) {
            return Err(FleetError::Argument(format!(
                "page {} does not exist, the table has {} page(s)",
                args.page_number,
                view.page_count().max(1)
            )));
        }
    }

    for id in &args.select {
        view.toggle_row(id)?;
    }
    if args.select_page {
        view.toggle_page_selection();
    }

    let confirming = args.delete && view.request_delete();
    if args.delete && !confirming {
        warn!("Delete requested with nothing selected");
    }

    let mut out = render_text(&view.snapshot());
    out.push('\n');

    if confirming && let Some(count) = view.confirm_delete() {
        info!("Handing {count} row(s) to the delete handler");
    }
    for event in view.drain_events() {
        out.push_str("event: ");
        out.push_str(&describe(&event));
        out.push('\n');
    }
    Ok(out)
}

fn run(args: &Args) -> Result<(), FleetError> {
    let config = settings::load_view_config(args.config.as_deref())?;
    let snapshot = Snapshot::load(&args.snapshot)?;
    info!("Showing {:?}", args.list);

    let output = match args.list {
        Page::Clients => drive(pages::clients(config)?, snapshot.clients, args)?,
        Page::Orders => drive(pages::orders(config)?, snapshot.orders, args)?,
        Page::Reservations => drive(pages::reservations(config)?, snapshot.reservations, args)?,
        Page::People => drive(pages::people(config)?, snapshot.people, args)?,
    };
    print!("{output}");
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(&args) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
