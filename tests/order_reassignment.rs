//! Order reassignment planning from orders as the backend returns them.

use serde_json::{Value, json};
use showroom::prelude::*;
use testresult::TestResult;

fn order_json(vehicle_type: &str, vehicle: Value) -> Value {
    json!({
        "id": 7,
        "customer": {
            "id": 3,
            "name": "Budi",
            "address": "Jl. Merdeka 1",
            "phone": "0812",
            "id_card_number": "3201",
            "id_card_photo": "http://localhost:3000/ktp.png",
        },
        "vehicle_type": vehicle_type,
        vehicle_type: vehicle,
        "vehicle_price": 250_000_000,
    })
}

fn stored_car_order() -> Result<Order, serde_json::Error> {
    serde_json::from_value(order_json(
        "car",
        json!({
            "id": 9,
            "model": "Avanza",
            "year": 2021,
            "seats": 7,
            "manufacturer": "Toyota",
            "price": 250_000_000,
            "fuel_type": "Bensin",
            "trunk_capacity": 300,
        }),
    ))
}

#[test]
fn keeping_the_type_updates_in_place() -> TestResult {
    let order = stored_car_order()?;
    let form = OrderForm {
        car: Some(CarId::new(10)),
        ..OrderForm::from_order(&order)
    };

    let request = ReassignmentRequest::for_order(&order, form.validate()?);
    let calls: Vec<String> = ReassignmentPlan::for_request(&request)
        .calls()
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(
        calls,
        ["PUT /orders/7 {customer_id: 3, vehicle_type: car, vehicle_id: 10}"]
    );

    Ok(())
}

#[test]
fn switching_to_a_motorcycle_deletes_the_car_order_first() -> TestResult {
    let order = stored_car_order()?;
    let form = OrderForm {
        vehicle_type: Some(VehicleType::Motorcycle),
        motorcycle: Some(MotorcycleId::new(2)),
        ..OrderForm::from_order(&order)
    };

    let request = ReassignmentRequest::for_order(&order, form.validate()?);
    let calls: Vec<String> = ReassignmentPlan::for_request(&request)
        .calls()
        .iter()
        .map(ToString::to_string)
        .collect();

    assert!(request.changes_vehicle_type());
    assert_eq!(
        calls,
        [
            "DELETE /orders/cars/7",
            "POST /orders {customer_id: 3, vehicle_type: motorcycle, vehicle_id: 2}",
        ]
    );

    Ok(())
}

#[test]
fn submission_serializes_flat() -> TestResult {
    let order = stored_car_order()?;

    let body = serde_json::to_value(order.submission())?;

    assert_eq!(
        body,
        json!({"customer_id": 3, "vehicle_type": "car", "vehicle_id": 9})
    );

    Ok(())
}
