use once_cell::sync::Lazy;

use super::Lookup;

pub const PASSENGER_CAR: &str = "Легковые автомобили";
pub const MOTORCYCLE: &str = "Мотоциклы";
pub const TRUCK: &str = "Грузовые";
pub const BUS: &str = "Автобусы";

/// The four categories a cleaned `Vehicle_type` may hold.
pub const CANONICAL_VEHICLE_TYPES: [&str; 4] = [PASSENGER_CAR, MOTORCYCLE, TRUCK, BUS];

/// Trailer rows are removed from the dataset rather than mapped.
pub const TRAILER_TYPES: [&str; 2] = ["Прицеп к грузовой а/м", "Прицеп к легковой а/м"];

/// Raw vehicle-type label → canonical category. Both bus subtypes merge.
pub static VEHICLE_CATEGORIES: Lazy<Lookup> = Lazy::new(|| {
    Lookup::from([
        ("Легковые автомобили", PASSENGER_CAR),
        ("Мотоциклы и мотороллеры", MOTORCYCLE),
        ("Грузовые автомобили", TRUCK),
        ("Автобусы до 16 п/м вкл.", BUS),
        ("Автобусы, свыше 16 п/м", BUS),
    ])
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mapping_targets_a_canonical_type() {
        assert!(VEHICLE_CATEGORIES
            .values()
            .all(|v| CANONICAL_VEHICLE_TYPES.contains(v)));
    }

    #[test]
    fn test_bus_subtypes_merge() {
        assert_eq!(VEHICLE_CATEGORIES["Автобусы до 16 п/м вкл."], BUS);
        assert_eq!(VEHICLE_CATEGORIES["Автобусы, свыше 16 п/м"], BUS);
    }

    #[test]
    fn test_trailers_are_not_mapped() {
        for trailer in TRAILER_TYPES {
            assert!(!VEHICLE_CATEGORIES.contains_key(trailer));
        }
    }
}
