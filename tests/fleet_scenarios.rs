//! End-to-end scenarios exercising each vehicle kind through its public
//! surface, the way a demonstration driver would.

use u_fleet::models::Engine;
use u_fleet::vehicles::{
    AlightingOutcome, BoardingOutcome, Bus, Car, Mobile, Motorcycle, RepaintOutcome, SportsCar,
    TuneOutcome, Vehicle,
};

fn summary<V: Vehicle>(vehicle: &V) -> String {
    vehicle.display_info()
}

#[test]
fn motorcycle_ride_scenario() {
    let engine = Engine::new(120, "4-stroke").expect("valid");
    let mut moto = Motorcycle::new("Yamaha", "MT-09", 2023, "petrol", engine).expect("valid");

    assert!(moto
        .start_engine()
        .contains("engine started. Engine: 120 HP 4-stroke engine"));

    let report = moto.ride(100.0).expect("valid distance");
    assert_eq!(moto.speed(), 60);
    assert_eq!(moto.odometer(), 100.0);
    assert!(report.contains("rode 100 km"));
    assert!(report.contains("Total: 100.0 km"));

    assert_eq!(moto.check_helmet(), "Helmet required: Yes");
    assert!(summary(&moto).contains("Type: Motorcycle"));
}

#[test]
fn bus_service_scenario() {
    let engine = Engine::new(280, "4-stroke").expect("valid");
    let mut bus =
        Bus::new("MAN", "Lion's City", 2017, "diesel", "Blue", 50, engine).expect("valid");

    assert_eq!(bus.change_color("Yellow"), RepaintOutcome::Repainted { color: "Yellow".into() });
    assert_eq!(bus.increase_horse_power(50), TuneOutcome::Tuned { horsepower: 330 });

    assert_eq!(bus.add_passenger("Luka"), BoardingOutcome::Boarded { name: "Luka".into() });
    assert_eq!(bus.add_passenger("Giorgi"), BoardingOutcome::Boarded { name: "Giorgi".into() });
    assert_eq!(
        bus.remove_passenger("Luka"),
        AlightingOutcome::Alighted { name: "Luka".into() }
    );
    assert_eq!(bus.passengers(), ["Giorgi"]);

    bus.accelerate(40).expect("valid delta");
    let report = bus.drive(60.0).expect("valid distance");
    assert!(report.contains("drove 60 km"));
    assert_eq!(bus.speed(), 40);
    assert!(bus.stop_engine().contains("engine stopped at 40 km/h."));

    let info = summary(&bus);
    assert!(info.contains("Type: Bus"));
    assert!(info.contains("Passengers: 1 / 50"));
}

#[test]
fn full_bus_turns_passengers_away() {
    let engine = Engine::new(102, "4-stroke").expect("valid");
    let mut minibus =
        Bus::new("MAN", "TGE Minibus", 2025, "diesel", "Black", 1, engine).expect("valid");

    assert_eq!(minibus.add_passenger("A"), BoardingOutcome::Boarded { name: "A".into() });
    assert_eq!(minibus.add_passenger("B"), BoardingOutcome::CapacityFull { capacity: 1 });
    assert_eq!(minibus.passengers(), ["A"]);
}

#[test]
fn sports_car_track_day_scenario() {
    let engine = Engine::new(320, "4-stroke").expect("valid");
    let mut sc = SportsCar::new("Ferrari", "488 GTB", 2020, "petrol", engine, "Red", 2, "SPD-488")
        .expect("valid");

    sc.accelerate(120).expect("valid delta");
    sc.drive(150.0).expect("valid distance");
    assert_eq!(sc.speed(), 120);

    sc.enable_turbo();
    sc.shift_gear(3).expect("valid gear");
    sc.set_spoiler("wing").expect("valid kind");
    assert!(sc.shift_gear(7).is_err());
    assert_eq!(sc.gear(), 3);

    let info = summary(&sc);
    assert!(info.contains("Type: Sports Car"));
    assert!(info.contains("Turbo: Enabled"));
    assert!(info.contains("Gear: 3"));
    assert!(info.contains("Spoiler: wing"));

    sc.brake();
    assert_eq!(sc.speed(), 0);
    assert_eq!(sc.odometer(), 150.0);
}

#[test]
fn every_kind_answers_the_capability_contract() {
    let moto = Motorcycle::new(
        "Zero",
        "SR/F",
        2024,
        "electric",
        Engine::new(85, "electric").expect("valid"),
    )
    .expect("valid");
    let bus = Bus::new(
        "MAN",
        "Lion's Coach",
        2020,
        "electric",
        "White",
        45,
        Engine::new(440, "electric").expect("valid"),
    )
    .expect("valid");
    let car = Car::new(
        "Tesla",
        "Model S",
        2024,
        "electric",
        Engine::new(170, "electric").expect("valid"),
        "White",
        4,
        "EV-001",
    )
    .expect("valid");
    let sc = SportsCar::new(
        "Lamborghini",
        "Huracan",
        2021,
        "petrol",
        Engine::new(390, "4-stroke").expect("valid"),
        "Green",
        2,
        "LMB-666",
    )
    .expect("valid");

    assert_eq!(moto.vehicle_type(), "Motorcycle");
    assert_eq!(bus.vehicle_type(), "Bus");
    assert_eq!(car.vehicle_type(), "Car");
    assert_eq!(sc.vehicle_type(), "Sports Car");

    for info in [summary(&moto), summary(&bus), summary(&car), summary(&sc)] {
        assert!(info.starts_with("Vehicle: "));
        assert!(info.contains("VIN: "));
    }

    // Identifiers are distinct across the fleet.
    let vins = [
        moto.identity().vin(),
        bus.identity().vin(),
        car.identity().vin(),
        sc.identity().vin(),
    ];
    for (i, a) in vins.iter().enumerate() {
        for b in &vins[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
