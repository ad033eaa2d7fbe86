//! Address generators.

use super::pick;
use fake::faker::address::en::{
    BuildingNumber, CityName, CityPrefix, CitySuffix, CountryCode, CountryName, Latitude,
    PostCode, SecondaryAddress, StateAbbr, StateName, StreetName, StreetSuffix, ZipCode,
};
use fake::Fake;
use rand::Rng;

const COUNTRY_ALPHA3: &[&str] = &[
    "USA", "CAN", "MEX", "BRA", "ARG", "GBR", "IRL", "FRA", "DEU", "NLD", "BEL", "ESP", "PRT",
    "ITA", "CHE", "AUT", "POL", "SWE", "NOR", "FIN", "DNK", "JPN", "KOR", "CHN", "IND", "IDN",
    "SGP", "AUS", "NZL", "ZAF", "EGY", "NGA", "KEN",
];

pub fn generate<R: Rng>(key: &str, rng: &mut R) -> Option<String> {
    let value = match key {
        "address" => {
            let building: String = BuildingNumber().fake_with_rng(rng);
            let street: String = StreetName().fake_with_rng(rng);
            let city: String = CityName().fake_with_rng(rng);
            let state: String = StateAbbr().fake_with_rng(rng);
            let zip: String = ZipCode().fake_with_rng(rng);
            format!("{building} {street}, {city}, {state} {zip}")
        }
        "address_building_number" => BuildingNumber().fake_with_rng(rng),
        "address_city" => CityName().fake_with_rng(rng),
        "address_city_prefix" => CityPrefix().fake_with_rng(rng),
        "address_city_suffix" => CitySuffix().fake_with_rng(rng),
        "address_country" => CountryName().fake_with_rng(rng),
        "address_country_abbr" => pick(rng, COUNTRY_ALPHA3),
        "address_country_code" => CountryCode().fake_with_rng(rng),
        "address_latitude" => format!("{:.6}", Latitude().fake_with_rng::<f64, _>(rng)),
        // fake's Longitude spans -90..270, so the range is drawn directly.
        "address_longitude" => format!("{:.6}", rng.random_range(-180.0..=180.0_f64)),
        "address_post_code" => PostCode().fake_with_rng(rng),
        "address_secondary_address" => SecondaryAddress().fake_with_rng(rng),
        "address_state" => StateName().fake_with_rng(rng),
        "address_state_abbr" => StateAbbr().fake_with_rng(rng),
        "address_street_address" => {
            let building: String = BuildingNumber().fake_with_rng(rng);
            let street: String = StreetName().fake_with_rng(rng);
            format!("{building} {street}")
        }
        "address_street_name" => StreetName().fake_with_rng(rng),
        "address_street_suffix" => StreetSuffix().fake_with_rng(rng),
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_coordinates_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let lat: f64 = generate("address_latitude", &mut rng).unwrap().parse().unwrap();
            let lon: f64 = generate("address_longitude", &mut rng).unwrap().parse().unwrap();
            assert!((-90.0..=90.0).contains(&lat));
            assert!((-180.0..=180.0).contains(&lon));
        }
    }

    #[test]
    fn test_country_abbr() {
        let mut rng = StdRng::seed_from_u64(42);
        let abbr = generate("address_country_abbr", &mut rng).unwrap();
        assert_eq!(abbr.len(), 3);
        assert!(abbr.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_other_family_key() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(generate("person_name", &mut rng), None);
    }
}
