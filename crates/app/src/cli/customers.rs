use std::path::PathBuf;

use clap::{Args, Subcommand};
use showroom::{
    customers::{Customer, CustomerId},
    forms::CustomerForm,
    notices::customer_delete_prompt,
};
use showroom_app::{
    context::AppContext,
    screens::{CustomersScreen, FormDialog},
};

use crate::cli::{list::ListArgs, report};

#[derive(Debug, Args)]
pub(crate) struct CustomersCommand {
    #[command(subcommand)]
    command: CustomersSubcommand,
}

#[derive(Debug, Subcommand)]
enum CustomersSubcommand {
    /// List customers
    List(ListArgs),

    /// Create a customer, uploading the ID card photo first
    Create(CreateCustomerArgs),

    /// Update a customer; omitted fields keep their stored value
    Update(UpdateCustomerArgs),

    /// Delete a customer without orders
    Delete(DeleteCustomerArgs),
}

#[derive(Debug, Args)]
struct CreateCustomerArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    address: String,

    #[arg(long)]
    phone: String,

    /// National ID card (KTP) number
    #[arg(long)]
    id_card_number: String,

    /// ID card photo to upload
    #[arg(long)]
    photo: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct UpdateCustomerArgs {
    #[arg(long)]
    id: CustomerId,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    address: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    #[arg(long)]
    id_card_number: Option<String>,

    /// Replacement ID card photo
    #[arg(long)]
    photo: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct DeleteCustomerArgs {
    #[arg(long)]
    id: CustomerId,

    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
}

pub(crate) async fn run(context: &AppContext, command: CustomersCommand) -> Result<(), String> {
    let mut screen = context.customers_screen();

    match command.command {
        CustomersSubcommand::List(args) => {
            load(&mut screen).await?;

            args.apply(screen.table_mut());

            println!("{}", args.render(screen.table()));

            Ok(())
        }
        CustomersSubcommand::Create(args) => {
            let form = CustomerForm {
                name: args.name,
                address: args.address,
                phone: args.phone,
                id_card_number: args.id_card_number,
                id_card_photo: args.photo,
            };

            screen.open_form().map_err(|error| error.to_string())?;

            let notice = screen
                .create(&form)
                .await
                .map_err(|error| error.to_string())?;

            report(&notice)
        }
        CustomersSubcommand::Update(args) => {
            load(&mut screen).await?;

            let existing = find(&screen, args.id)?;
            let mut form = CustomerForm::from_customer(&existing);

            if let Some(name) = args.name {
                form.name = name;
            }
            if let Some(address) = args.address {
                form.address = address;
            }
            if let Some(phone) = args.phone {
                form.phone = phone;
            }
            if let Some(id_card_number) = args.id_card_number {
                form.id_card_number = id_card_number;
            }
            form.id_card_photo = args.photo;

            screen.open_form().map_err(|error| error.to_string())?;

            let notice = screen
                .update(&existing, &form)
                .await
                .map_err(|error| error.to_string())?;

            report(&notice)
        }
        CustomersSubcommand::Delete(args) => {
            load(&mut screen).await?;

            let existing = find(&screen, args.id)?;

            eprintln!("{}", customer_delete_prompt(&existing));

            if !args.yes {
                return Err("not confirmed; pass --yes to delete".to_string());
            }

            report(&screen.delete(&existing).await)
        }
    }
}

async fn load(screen: &mut CustomersScreen) -> Result<(), String> {
    screen
        .refresh()
        .await
        .map_err(|error| format!("failed to list customers: {error}"))
}

fn find(screen: &CustomersScreen, id: CustomerId) -> Result<Customer, String> {
    screen
        .table()
        .cache()
        .rows()
        .iter()
        .find(|customer| customer.id == id)
        .cloned()
        .ok_or_else(|| format!("customer {id} not found"))
}
