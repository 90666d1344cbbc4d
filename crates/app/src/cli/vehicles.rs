use clap::{Args, Subcommand};
use showroom::{
    forms::VehicleForm,
    notices::vehicle_delete_prompt,
    table::render::render_rows,
    vehicles::{Vehicle, VehicleSelection, VehicleType},
};
use showroom_app::{
    context::AppContext,
    screens::{FormDialog, VehiclesScreen},
};

use crate::cli::{list::ListArgs, report};

#[derive(Debug, Args)]
pub(crate) struct VehiclesCommand {
    /// Vehicle type: car, truck or motorcycle
    vehicle_type: VehicleType,

    #[command(subcommand)]
    command: VehiclesSubcommand,
}

#[derive(Debug, Subcommand)]
enum VehiclesSubcommand {
    /// List vehicles of this type
    List(ListArgs),

    /// Show one vehicle
    Show(VehicleIdArgs),

    /// Create a vehicle
    Create(VehicleFields),

    /// Update a vehicle; omitted fields keep their stored value
    Update {
        #[command(flatten)]
        target: VehicleIdArgs,

        #[command(flatten)]
        fields: VehicleFields,
    },

    /// Delete a vehicle without orders
    Delete {
        #[command(flatten)]
        target: VehicleIdArgs,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
struct VehicleIdArgs {
    #[arg(long)]
    id: u64,
}

/// Raw form fields; which ones apply depends on the vehicle type.
#[derive(Debug, Args)]
struct VehicleFields {
    #[arg(long)]
    model: Option<String>,

    #[arg(long)]
    year: Option<String>,

    #[arg(long)]
    seats: Option<String>,

    #[arg(long)]
    manufacturer: Option<String>,

    /// Price in rupiah, dots allowed (150.000.000)
    #[arg(long)]
    price: Option<String>,

    /// Cars only
    #[arg(long)]
    fuel_type: Option<String>,

    /// Cars and motorcycles, in litres
    #[arg(long)]
    trunk_capacity: Option<String>,

    /// Trucks only
    #[arg(long)]
    wheels: Option<String>,

    /// Trucks only, in litres
    #[arg(long)]
    cargo_capacity: Option<String>,

    /// Motorcycles only, in litres
    #[arg(long)]
    fuel_capacity: Option<String>,
}

impl VehicleFields {
    fn apply(self, form: &mut VehicleForm) {
        let fields = [
            (self.model, &mut form.model),
            (self.year, &mut form.year),
            (self.seats, &mut form.seats),
            (self.manufacturer, &mut form.manufacturer),
            (self.price, &mut form.price),
            (self.fuel_type, &mut form.fuel_type),
            (self.trunk_capacity, &mut form.trunk_capacity),
            (self.wheels, &mut form.wheels),
            (self.cargo_capacity, &mut form.cargo_capacity),
            (self.fuel_capacity, &mut form.fuel_capacity),
        ];

        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

pub(crate) async fn run(context: &AppContext, command: VehiclesCommand) -> Result<(), String> {
    let vehicle_type = command.vehicle_type;
    let mut screen = context.vehicles_screen(vehicle_type);

    match command.command {
        VehiclesSubcommand::List(args) => {
            load(&mut screen).await?;

            args.apply(screen.table_mut());

            println!("{}", args.render(screen.table()));

            Ok(())
        }
        VehiclesSubcommand::Show(args) => {
            let vehicle = context
                .vehicles
                .get_vehicle(VehicleSelection::new(vehicle_type, args.id))
                .await
                .map_err(|error| error.to_string())?;

            println!("{}", render_rows(&[&vehicle]));

            Ok(())
        }
        VehiclesSubcommand::Create(fields) => {
            let mut form = VehicleForm::new(vehicle_type);

            fields.apply(&mut form);

            screen.open_form().map_err(|error| error.to_string())?;

            let notice = screen
                .create(&form)
                .await
                .map_err(|error| error.to_string())?;

            report(&notice)
        }
        VehiclesSubcommand::Update { target, fields } => {
            load(&mut screen).await?;

            let existing = find(&screen, VehicleSelection::new(vehicle_type, target.id))?;
            let mut form = VehicleForm::from_vehicle(&existing);

            fields.apply(&mut form);

            screen.open_form().map_err(|error| error.to_string())?;

            let notice = screen
                .update(&existing, &form)
                .await
                .map_err(|error| error.to_string())?;

            report(&notice)
        }
        VehiclesSubcommand::Delete { target, yes } => {
            load(&mut screen).await?;

            let existing = find(&screen, VehicleSelection::new(vehicle_type, target.id))?;

            eprintln!("{}", vehicle_delete_prompt(&existing));

            if !yes {
                return Err("not confirmed; pass --yes to delete".to_string());
            }

            report(&screen.delete(&existing).await)
        }
    }
}

async fn load(screen: &mut VehiclesScreen) -> Result<(), String> {
    screen
        .refresh()
        .await
        .map_err(|error| format!("failed to list vehicles: {error}"))
}

fn find(screen: &VehiclesScreen, selection: VehicleSelection) -> Result<Vehicle, String> {
    screen
        .table()
        .cache()
        .rows()
        .iter()
        .find(|vehicle| vehicle.selection() == selection)
        .cloned()
        .ok_or_else(|| format!("{selection} not found"))
}
