//! Showroom prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    customers::{Customer, CustomerId, NewCustomer},
    format::{custom_number_format, format_rupiah, nominal_format, parse_nominal},
    forms::{CustomerForm, FormMode, OrderForm, ValidCustomer, ValidationErrors, VehicleForm},
    ids::TypedId,
    modal::{ModalError, ModalState},
    notices::{Action, Entity, Notice, NoticeKind},
    options::{SelectOption, customer_options, vehicle_options, vehicle_type_options},
    orders::{
        Order, OrderId, OrderPayload, OrderRecord, OrderShapeError, OrderSubmission,
        ReassignmentPlan, ReassignmentRequest,
    },
    table::{DataTable, RowCache, TableFilter, TableRow, paginate, render::render_rows},
    vehicles::{
        Car, CarId, Motorcycle, MotorcycleId, NewCar, NewMotorcycle, NewTruck, NewVehicle, Truck,
        TruckId, Vehicle, VehicleSelection, VehicleSpec, VehicleType,
    },
};
