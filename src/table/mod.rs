//! Tables
//!
//! Every listing screen shows a cached list of rows, narrowed by a search box
//! and optional column filters, and split into pages.

use smallvec::{SmallVec, smallvec};

use crate::{
    customers::Customer,
    format::{format_litres, format_rupiah},
    orders::Order,
    vehicles::Vehicle,
};

/// Row cache.
pub mod cache;
/// Search and column filters.
pub mod filter;
/// Page slicing.
pub mod pagination;
/// Text table rendering.
pub mod render;

pub use cache::RowCache;
pub use filter::TableFilter;
pub use pagination::{DEFAULT_PER_PAGE, page_count, paginate};

/// One displayed column value of a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Key used by selected filters.
    pub key: &'static str,

    /// Column header.
    pub label: &'static str,

    /// Displayed and searched text.
    pub value: String,
}

impl Cell {
    /// Cell `key` headed `label`.
    #[must_use]
    pub fn new(key: &'static str, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            label,
            value: value.into(),
        }
    }
}

/// Cells of one row, in column order.
pub type Cells = SmallVec<[Cell; 8]>;

/// Something that can be shown as a table row.
pub trait TableRow {
    /// Named cells of this row, in column order.
    fn cells(&self) -> Cells;
}

impl TableRow for Customer {
    fn cells(&self) -> Cells {
        smallvec![
            Cell::new("name", "Name", self.name.as_str()),
            Cell::new("address", "Address", self.address.as_str()),
            Cell::new("phone", "Phone", self.phone.as_str()),
            Cell::new("id_card_number", "ID Card Number", self.id_card_number.as_str()),
            Cell::new("id_card_photo", "ID Card Image", self.id_card_photo.as_str()),
        ]
    }
}

impl TableRow for Vehicle {
    fn cells(&self) -> Cells {
        let spec = self.spec();

        let mut cells: Cells = smallvec![
            Cell::new("model", "Model", spec.model.as_str()),
            Cell::new("year", "Year", spec.year.to_string()),
            Cell::new("seats", "Seats", spec.seats.to_string()),
            Cell::new("manufacturer", "Manufacturer", spec.manufacturer.as_str()),
        ];

        match self {
            Self::Car(car) => {
                cells.push(Cell::new("fuel_type", "Fuel Type", car.fuel_type.as_str()));
                cells.push(Cell::new(
                    "trunk_capacity",
                    "Trunk Capacity",
                    format_litres(car.trunk_capacity),
                ));
            }
            Self::Truck(truck) => {
                cells.push(Cell::new("wheels", "Wheels", truck.wheels.to_string()));
                cells.push(Cell::new(
                    "cargo_capacity",
                    "Cargo Capacity",
                    format_litres(truck.cargo_capacity),
                ));
            }
            Self::Motorcycle(motorcycle) => {
                cells.push(Cell::new(
                    "trunk_capacity",
                    "Trunk Capacity",
                    format_litres(motorcycle.trunk_capacity),
                ));
                cells.push(Cell::new(
                    "fuel_capacity",
                    "Fuel Capacity",
                    format_litres(motorcycle.fuel_capacity),
                ));
            }
        }

        cells.push(Cell::new("price", "Price", format_rupiah(spec.price)));

        cells
    }
}

impl TableRow for Order {
    fn cells(&self) -> Cells {
        smallvec![
            Cell::new("customer_name", "Customer Name", self.customer.name.as_str()),
            Cell::new("vehicle_type", "Vehicle Type", self.vehicle_type().label()),
            Cell::new("vehicle_model", "Vehicle Model", self.vehicle.spec().model.as_str()),
            Cell::new("payment", "Payment", format_rupiah(self.vehicle_price)),
        ]
    }
}

/// Row cache plus the filter and page size a listing screen applies to it.
#[derive(Debug, Clone)]
pub struct DataTable<T> {
    cache: RowCache<T>,
    filter: TableFilter,
    per_page: usize,
}

impl<T> Default for DataTable<T> {
    fn default() -> Self {
        Self {
            cache: RowCache::default(),
            filter: TableFilter::default(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl<T: TableRow> DataTable<T> {
    /// Empty, stale table with the default page size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table showing `per_page` rows per page.
    #[must_use]
    pub fn with_per_page(per_page: usize) -> Self {
        Self {
            per_page,
            ..Self::default()
        }
    }

    /// Cached rows.
    #[must_use]
    pub fn cache(&self) -> &RowCache<T> {
        &self.cache
    }

    /// Cached rows, for replacing or invalidating.
    pub fn cache_mut(&mut self) -> &mut RowCache<T> {
        &mut self.cache
    }

    /// Active filter.
    #[must_use]
    pub fn filter(&self) -> &TableFilter {
        &self.filter
    }

    /// Active filter, for editing.
    pub fn filter_mut(&mut self) -> &mut TableFilter {
        &mut self.filter
    }

    /// Rows per page.
    #[must_use]
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Change the page size; `0` is treated as `1`.
    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page;
    }

    /// Every cached row passing the filter.
    #[must_use]
    pub fn visible(&self) -> Vec<&T> {
        self.filter.apply(self.cache.rows()).collect()
    }

    /// Filtered rows on 1-based `page`.
    #[must_use]
    pub fn page(&self, page: usize) -> Vec<&T> {
        paginate(&self.visible(), page, self.per_page).to_vec()
    }

    /// Number of pages of filtered rows.
    #[must_use]
    pub fn page_count(&self) -> usize {
        page_count(self.visible().len(), self.per_page)
    }
}
