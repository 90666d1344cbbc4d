use clap::{Args, Subcommand};
use showroom::{
    customers::CustomerId,
    forms::OrderForm,
    notices::order_delete_prompt,
    orders::{Order, OrderId},
    vehicles::{VehicleSelection, VehicleType},
};
use showroom_app::{
    context::AppContext,
    screens::{FormDialog, OrdersScreen},
};

use crate::cli::{list::ListArgs, report};

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    /// List orders
    List(ListArgs),

    /// Show the customers and vehicles an order can be placed for
    Options,

    /// Create an order
    Create(CreateOrderArgs),

    /// Update an order; changing the vehicle type deletes and recreates it
    Update(UpdateOrderArgs),

    /// Delete an order
    Delete(DeleteOrderArgs),
}

#[derive(Debug, Args)]
struct CreateOrderArgs {
    #[arg(long)]
    customer: Option<CustomerId>,

    /// car, truck or motorcycle
    #[arg(long)]
    vehicle_type: Option<VehicleType>,

    /// Id of the vehicle within its type
    #[arg(long, requires = "vehicle_type")]
    vehicle: Option<u64>,
}

#[derive(Debug, Args)]
struct UpdateOrderArgs {
    #[arg(long)]
    id: OrderId,

    #[arg(long)]
    customer: Option<CustomerId>,

    /// car, truck or motorcycle; defaults to the stored type
    #[arg(long)]
    vehicle_type: Option<VehicleType>,

    /// Id of the vehicle within its type
    #[arg(long)]
    vehicle: Option<u64>,
}

#[derive(Debug, Args)]
struct DeleteOrderArgs {
    #[arg(long)]
    id: OrderId,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
}

pub(crate) async fn run(context: &AppContext, command: OrdersCommand) -> Result<(), String> {
    let mut screen = context.orders_screen();

    match command.command {
        OrdersSubcommand::List(args) => {
            load(&mut screen).await?;

            args.apply(screen.table_mut());

            println!("{}", args.render(screen.table()));

            Ok(())
        }
        OrdersSubcommand::Options => {
            let options = screen
                .load_options()
                .await
                .map_err(|error| format!("{error}: {}", error_source(&error)))?;

            println!("customers:");
            for option in &options.customers {
                println!("  {} {}", option.value, option.label);
            }

            for vehicle_type in &options.vehicle_types {
                println!("{}:", vehicle_type.label);
                for option in options.vehicles_of(vehicle_type.value) {
                    println!("  {} {}", option.value.id(), option.label);
                }
            }

            Ok(())
        }
        OrdersSubcommand::Create(args) => {
            let mut form = OrderForm {
                customer: args.customer,
                vehicle_type: args.vehicle_type,
                ..OrderForm::default()
            };

            if let (Some(vehicle_type), Some(vehicle)) = (args.vehicle_type, args.vehicle) {
                form.select_vehicle(VehicleSelection::new(vehicle_type, vehicle));
            }

            screen.open_form().map_err(|error| error.to_string())?;

            let notice = screen
                .create(&form)
                .await
                .map_err(|error| error.to_string())?;

            report(&notice)
        }
        OrdersSubcommand::Update(args) => {
            load(&mut screen).await?;

            let existing = find(&screen, args.id)?;
            let mut form = OrderForm::from_order(&existing);

            if let Some(customer) = args.customer {
                form.customer = Some(customer);
            }

            let vehicle_type = args.vehicle_type.unwrap_or_else(|| existing.vehicle_type());

            match args.vehicle {
                Some(vehicle) => form.select_vehicle(VehicleSelection::new(vehicle_type, vehicle)),
                None => form.vehicle_type = Some(vehicle_type),
            }

            screen.open_form().map_err(|error| error.to_string())?;

            let notice = screen
                .update(&existing, &form)
                .await
                .map_err(|error| error.to_string())?;

            report(&notice)
        }
        OrdersSubcommand::Delete(args) => {
            load(&mut screen).await?;

            let existing = find(&screen, args.id)?;

            eprintln!("{}", order_delete_prompt(&existing));

            if !args.yes {
                return Err("not confirmed; pass --yes to delete".to_string());
            }

            report(&screen.delete(&existing).await)
        }
    }
}

async fn load(screen: &mut OrdersScreen) -> Result<(), String> {
    screen
        .refresh()
        .await
        .map_err(|error| format!("failed to list orders: {error}"))
}

fn find(screen: &OrdersScreen, id: OrderId) -> Result<Order, String> {
    screen
        .table()
        .cache()
        .rows()
        .iter()
        .find(|order| order.id == id)
        .cloned()
        .ok_or_else(|| format!("order {id} not found"))
}

fn error_source(error: &dyn std::error::Error) -> String {
    error
        .source()
        .map_or_else(String::new, ToString::to_string)
}
