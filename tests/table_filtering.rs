//! Filtering and paging the vehicle and order tables.

use showroom::prelude::*;

fn truck(id: u64, model: &str, manufacturer: &str, wheels: u8) -> Vehicle {
    NewVehicle::Truck(NewTruck {
        spec: VehicleSpec {
            model: model.to_string(),
            year: 2020,
            seats: 3,
            manufacturer: manufacturer.to_string(),
            price: 400_000_000,
        },
        wheels,
        cargo_capacity: 8000,
    })
    .with_id(id)
}

fn fleet() -> Vec<Vehicle> {
    vec![
        truck(1, "Dutro 130 HD", "Hino", 6),
        truck(2, "Ranger", "Hino", 10),
        truck(3, "Canter", "Mitsubishi", 6),
        truck(4, "Elf NMR", "Isuzu", 6),
    ]
}

#[test]
fn search_words_match_within_one_cell() {
    let mut table = DataTable::new();

    table.cache_mut().replace(fleet());
    table.filter_mut().set_text("hd dutro");

    let models: Vec<&str> = table
        .visible()
        .into_iter()
        .map(|vehicle| vehicle.spec().model.as_str())
        .collect();

    assert_eq!(models, ["Dutro 130 HD"]);
}

#[test]
fn search_covers_formatted_cells() {
    let mut table = DataTable::new();

    table.cache_mut().replace(fleet());
    table.filter_mut().set_text("rp. 400.000");

    assert_eq!(table.visible().len(), 4);
}

#[test]
fn selected_filters_combine_with_search() {
    let mut table = DataTable::new();

    table.cache_mut().replace(fleet());
    table.filter_mut().set_text("hino");
    table.filter_mut().select("wheels", "6");

    let ids: Vec<u64> = table.visible().into_iter().map(Vehicle::id).collect();

    assert_eq!(ids, [1]);
}

#[test]
fn pages_follow_the_filtered_rows() {
    let mut table = DataTable::with_per_page(3);

    table.cache_mut().replace(fleet());

    assert_eq!(table.page_count(), 2);
    assert_eq!(table.page(2).len(), 1);
    assert!(table.page(3).is_empty());

    table.filter_mut().select("manufacturer", "Hino");

    assert_eq!(table.page_count(), 1);
    assert_eq!(table.page(1).len(), 2);
}

#[test]
fn rendered_page_shows_headers() {
    let mut table = DataTable::new();

    table.cache_mut().replace(fleet());

    let rendered = render_rows(&table.page(1));

    assert!(rendered.contains("Cargo Capacity"));
    assert!(rendered.contains("8000L"));
    assert!(rendered.contains("Rp. 400.000.000"));
}
