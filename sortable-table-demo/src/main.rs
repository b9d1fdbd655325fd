mod paths;

use std::ffi::OsString;
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};
use simplelog::{Config, LevelFilter, WriteLogger};
use sortable_table::{ConstructionError, Direction, SortConfigError, Table, TableSpec};
use tabledom::{Event, EventResult};
use thiserror::Error;

#[derive(Debug, Error)]
enum DemoError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error(transparent)]
    Sort(#[from] SortConfigError),
    #[error("no header cell for column '{0}'")]
    UnknownHeader(String),
}

#[derive(Debug, Parser)]
#[command(name = "sortable-table-demo")]
#[command(about = "Render a sortable table from a JSON document", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON document with columns, data and display options
    spec: PathBuf,

    /// Sort by a column, as `column` or `column:asc|desc`
    #[arg(long, value_name = "COLUMN[:ORDER]")]
    sort: Vec<SortArg>,

    /// Click a column header
    #[arg(long, value_name = "COLUMN")]
    click: Vec<String>,

    /// Keep element ids in the markup
    #[arg(long)]
    ids: bool,

    /// Write the markup here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,
}

/// `--sort` value. A bare column sorts ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SortArg {
    column: String,
    direction: Direction,
}

impl FromStr for SortArg {
    type Err = SortConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (column, direction) = match s.split_once(':') {
            Some((column, order)) => (column, order.parse()?),
            None => (s, Direction::default()),
        };
        Ok(Self {
            column: column.to_string(),
            direction,
        })
    }
}

/// One step applied to the table.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Action {
    Sort(SortArg),
    Click(String),
}

impl Cli {
    /// Sorts and clicks merged back into command-line order.
    fn actions(&self, matches: &ArgMatches) -> Vec<Action> {
        let sorts = matches
            .indices_of("sort")
            .into_iter()
            .flatten()
            .zip(&self.sort)
            .map(|(index, arg)| (index, Action::Sort(arg.clone())));
        let clicks = matches
            .indices_of("click")
            .into_iter()
            .flatten()
            .zip(&self.click)
            .map(|(index, column)| (index, Action::Click(column.clone())));

        let mut indexed: Vec<(usize, Action)> = sorts.chain(clicks).collect();
        indexed.sort_by_key(|(index, _)| *index);
        indexed.into_iter().map(|(_, action)| action).collect()
    }
}

fn parse_args<I, T>(args: I) -> Result<(Cli, Vec<Action>), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = Cli::command().try_get_matches_from(args)?;
    let cli = Cli::from_arg_matches(&matches)?;
    let actions = cli.actions(&matches);
    Ok((cli, actions))
}

fn apply(table: &mut Table, action: &Action) -> Result<(), DemoError> {
    match action {
        Action::Sort(arg) => table.sort(&arg.column, arg.direction)?,
        Action::Click(column) => {
            let target = table
                .header_cell(column)
                .map(|cell| cell.id.clone())
                .ok_or_else(|| DemoError::UnknownHeader(column.clone()))?;
            if table.handle_event(&Event::pointer_down(target)) == EventResult::Ignored {
                log::info!("click on '{}' ignored", column);
            }
        }
    }
    Ok(())
}

fn run(cli: &Cli, actions: &[Action]) -> Result<(), DemoError> {
    let json = fs::read_to_string(&cli.spec)?;
    let mut table = TableSpec::from_json(&json)?.into_table()?;
    log::info!("loaded {} rows from {}", table.rows().len(), cli.spec.display());

    for action in actions {
        log::debug!("applying {:?}", action);
        apply(&mut table, action)?;
    }

    let html = if cli.ids {
        table.to_html_with_ids()
    } else {
        table.to_html()
    }
    .unwrap_or_default();
    match &cli.out {
        Some(path) => fs::write(path, html)?,
        None => println!("{html}"),
    }

    table.destroy();
    Ok(())
}

fn init_logging() -> Result<(), DemoError> {
    let log_file = File::create(paths::log_file())?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    Ok(())
}

fn main() -> ExitCode {
    let (cli, actions) = match parse_args(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(e) => e.exit(),
    };

    match init_logging().and_then(|()| run(&cli, &actions)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
