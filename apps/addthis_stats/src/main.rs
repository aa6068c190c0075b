use addthis_api::AddThisClient;
use addthis_grid::column::ColumnSpec;
use addthis_grid::{
    DataSource, GridPayload, GridRow, StatisticsGridDataSource, StatisticsGridHandler,
};
use addthis_shared_models::Role;
use anyhow::Context;
use clap::{Parser, Subcommand};
use config::{PeriodArg, RoleArg, SettingsArgs};
use dotenv::dotenv;
use prettytable::{Cell, Row, Table};
mod config;

#[derive(Parser, Debug)]
#[command(author, version, about = "Most shared URLs of a journal's AddThis profile", long_about = None)]
struct Args {
    #[command(flatten)]
    settings: SettingsArgs,

    /// Reporting window
    #[arg(long, value_enum, default_value = "week")]
    period: PeriodArg,

    /// Roles held by the caller in the journal
    #[arg(long = "role", value_enum, default_value = "manager")]
    roles: Vec<RoleArg>,

    /// Print the grid payload as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Whole grid (default)
    Grid,
    /// A single row by its position
    Row { id: usize },
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    log::debug!(
        "Command line input recorded: period={:?} roles={:?} command={:?}",
        args.period, args.roles, args.command
    );

    let settings = args.settings.context_settings()?;
    let roles: Vec<Role> = args.roles.iter().copied().map(Role::from).collect();

    let client = AddThisClient::builder()
        .base_url(args.settings.base_url.clone())
        .timeout(args.settings.timeout())
        .build()
        .context("Failed to build AddThis client")?;
    log::info!("Querying AddThis analytics at {}", client.base_url());
    let source = StatisticsGridDataSource::new(client).with_period(args.period.into());
    let handler = StatisticsGridHandler::new(source);

    if settings.credentials().is_none() {
        log::warn!("AddThis profile id, username or password not set; the grid will be empty");
    }

    let rt = tokio::runtime::Runtime::new().context("Failed to start tokio runtime")?;

    match args.command.unwrap_or(Command::Grid) {
        Command::Grid => {
            let grid = rt
                .block_on(handler.fetch_grid(&roles, &settings))
                .context("Failed to fetch grid")?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&grid)?);
            } else {
                print_grid(&grid);
            }
        }
        Command::Row { id } => {
            let row = rt
                .block_on(handler.fetch_row(&roles, &settings, id))
                .context("Failed to fetch row")?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&row)?);
            } else {
                let columns = handler.source().configure_columns();
                print_rows(&columns, std::slice::from_ref(&row));
            }
        }
    }

    Ok(())
}

fn print_grid(grid: &GridPayload) {
    println!("{}\n", grid.title_key);

    if grid.rows.is_empty() {
        println!("No share statistics available");
        return;
    }

    print_rows(&grid.columns, &grid.rows);
}

fn print_rows(columns: &[ColumnSpec], rows: &[GridRow]) {
    let mut table = Table::new();
    table.set_titles(Row::new(
        columns.iter().map(|column| Cell::new(column.title_key)).collect(),
    ));

    for data in rows.iter().filter_map(GridRow::data) {
        table.add_row(Row::new(
            columns
                .iter()
                .map(|column| Cell::new(&data.cell_value(column.id).unwrap_or_default()))
                .collect(),
        ));
    }

    table.printstd();
}
