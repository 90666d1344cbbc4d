use clap::{Parser, Subcommand};
use showroom::notices::Notice;
use showroom_app::context::AppContext;

mod config;
mod customers;
mod list;
mod logging;
mod orders;
mod vehicles;

#[derive(Debug, Parser)]
#[command(name = "showroom", about = "Showroom dealership console", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    api: config::ApiArgs,

    #[command(flatten)]
    logging: config::LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage customers
    Customers(customers::CustomersCommand),

    /// Manage cars, trucks and motorcycles
    Vehicles(vehicles::VehiclesCommand),

    /// Manage sales orders
    Orders(orders::OrdersCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        logging::init_subscriber(&self.logging)
            .map_err(|error| format!("failed to initialise logging: {error}"))?;

        let context = AppContext::from_config(self.api.into_config())
            .map_err(|error| format!("failed to start: {error}"))?;

        match self.command {
            Commands::Customers(command) => customers::run(&context, command).await,
            Commands::Vehicles(command) => vehicles::run(&context, command).await,
            Commands::Orders(command) => orders::run(&context, command).await,
        }
    }
}

/// Print a success notice, or turn a failure notice into the command's error.
fn report(notice: &Notice) -> Result<(), String> {
    if notice.is_success() {
        println!("{notice}");

        return Ok(());
    }

    Err(notice.to_string())
}
