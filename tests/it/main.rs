use greenskies::{
    compare, estimate, estimate_distance, recommend, AirportDirectory, Cabin,
    EmissionFactorTable, Error, Policy, TripRequest,
};

fn abs_difference<T: std::ops::Sub<Output = T> + PartialOrd>(x: T, y: T) -> T {
    if x < y {
        y - x
    } else {
        x - y
    }
}

fn del_lhr(passengers: u32) -> TripRequest {
    TripRequest {
        origin: "DEL".to_string(),
        destination: "LHR".to_string(),
        category: "widebody".to_string(),
        cabin: Cabin::Economy,
        passengers,
    }
}

/// Verifies the whole estimation pipeline on a route whose great-circle
/// distance is known, https://www.greatcirclemapper.net/ reports
/// ca. 6700 km for DEL-LHR.
#[test]
fn acceptance_del_lhr() {
    let airports = AirportDirectory::new();
    let factors = EmissionFactorTable::new();
    let policy = Policy::default();

    let estimate = estimate(&del_lhr(1), &airports, &factors, &policy).unwrap();

    assert!(abs_difference(estimate.distance_km, 6700.0) < 50.0);
    // beyond 4000 km the long haul adjustment applies
    let expected = estimate.distance_km * 0.088 * 0.95;
    assert_eq!(estimate.per_passenger_co2_kg, expected);
    assert_eq!(estimate.total_co2_kg, estimate.per_passenger_co2_kg);
}

#[test]
fn unknown_airport() {
    let airports = AirportDirectory::new();
    let factors = EmissionFactorTable::new();
    let mut trip = del_lhr(1);
    trip.destination = "XXX".to_string();

    assert_eq!(
        estimate(&trip, &airports, &factors, &Policy::default()),
        Err(Error::UnknownAirport("XXX".to_string()))
    );
}

#[test]
fn same_airport() {
    let airports = AirportDirectory::new();
    let factors = EmissionFactorTable::new();
    let mut trip = del_lhr(1);
    trip.destination = "DEL".to_string();

    assert_eq!(
        estimate(&trip, &airports, &factors, &Policy::default()),
        Err(Error::SameAirport("DEL".to_string()))
    );
}

#[test]
fn zero_passengers() {
    let airports = AirportDirectory::new();
    let factors = EmissionFactorTable::new();

    assert_eq!(
        estimate(&del_lhr(0), &airports, &factors, &Policy::default()),
        Err(Error::InvalidPassengerCount(0))
    );
}

/// A 500 km hop emits more per km than its base factor suggests.
#[test]
fn short_haul_adjustment() {
    let factors = EmissionFactorTable::new();
    let estimate = estimate_distance(
        500.0,
        "narrowbody",
        Cabin::Economy,
        1,
        &factors,
        &Policy::default(),
    )
    .unwrap();

    assert_eq!(estimate.per_passenger_co2_kg, 500.0 * 0.104 * 1.10);
}

#[test]
fn doubling_passengers_doubles_total() {
    let airports = AirportDirectory::new();
    let factors = EmissionFactorTable::new();
    let policy = Policy::default();

    let two = estimate(&del_lhr(2), &airports, &factors, &policy).unwrap();
    let four = estimate(&del_lhr(4), &airports, &factors, &policy).unwrap();

    assert_eq!(four.total_co2_kg, 2.0 * two.total_co2_kg);
    assert_eq!(two.total_co2_kg, 2.0 * two.per_passenger_co2_kg);
}

#[test]
fn distance_is_symmetric() {
    let airports = AirportDirectory::new();
    let berlin = airports.lookup("BER").unwrap();
    let sydney = airports.lookup("SYD").unwrap();

    assert_eq!(
        greenskies::distance(berlin, sydney).unwrap(),
        greenskies::distance(sydney, berlin).unwrap()
    );
    assert_eq!(greenskies::distance(berlin, berlin).unwrap(), 0.0);
}

/// A short route gets a train recommendation and the list is sorted by
/// what saves the most.
#[test]
fn recommendations_for_a_short_hop() {
    let airports = AirportDirectory::new();
    let factors = EmissionFactorTable::new();
    let policy = Policy::default();
    let trip = TripRequest {
        origin: "CPH".to_string(),
        destination: "BER".to_string(),
        category: "narrowbody".to_string(),
        cabin: Cabin::Business,
        passengers: 1,
    };

    let estimate = estimate(&trip, &airports, &factors, &policy).unwrap();
    assert!(estimate.distance_km < 800.0);

    let recommendations = recommend(&estimate, &trip, &factors, &policy);
    assert!(recommendations
        .iter()
        .any(|r| r.description == "take the train instead"));
    assert!(recommendations
        .iter()
        .any(|r| r.description == "downgrade from business to economy class"));
    for pair in recommendations.windows(2) {
        assert!(pair[0].co2_saved_kg >= pair[1].co2_saved_kg);
    }
}

/// On the same route and cabin, a widebody emits the least and a private
/// jet is not an option for economy travellers.
#[test]
fn category_ranking() {
    let airports = AirportDirectory::new();
    let factors = EmissionFactorTable::new();

    let rankings =
        compare(&del_lhr(1), &airports, &factors, &Policy::default()).unwrap();

    assert_eq!(rankings[0].category, "widebody");
    assert!(rankings.iter().all(|r| r.category != "private_jet"));
    for pair in rankings.windows(2) {
        assert!(pair[0].total_co2_kg <= pair[1].total_co2_kg);
    }
}
