//! Identifiers and scalar generators.

use rand::Rng;
use ulid::Ulid;
use uuid::Builder;

pub fn generate<R: Rng>(key: &str, rng: &mut R) -> Option<String> {
    let value = match key {
        "age" => rng.random_range(0..100u32).to_string(),
        "bool" => rng.random_bool(0.5).to_string(),
        "id" | "uuid" => Builder::from_random_bytes(rng.random()).into_uuid().to_string(),
        "ulid" => Ulid::with_source(rng).to_string(),
        _ => return None,
    };
    Some(value)
}

/// Last `len` characters of a fresh ULID, lowercased.
///
/// The tail of a ULID is random, which makes it a cheap collision-resistant
/// suffix for otherwise repetitive values such as e-mail addresses.
pub fn ulid_suffix<R: Rng>(len: usize, rng: &mut R) -> String {
    let id = Ulid::with_source(rng).to_string();
    id[id.len() - len.min(id.len())..].to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use uuid::Uuid;

    #[test]
    fn test_bool_values() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let value = generate("bool", &mut rng).unwrap();
            assert!(value == "true" || value == "false");
        }
    }

    #[test]
    fn test_age_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let age: u32 = generate("age", &mut rng).unwrap().parse().unwrap();
            assert!(age < 100);
        }
    }

    #[test]
    fn test_identifier_formats() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(Uuid::parse_str(&generate("uuid", &mut rng).unwrap()).is_ok());
        assert!(Uuid::parse_str(&generate("id", &mut rng).unwrap()).is_ok());
        assert_eq!(generate("ulid", &mut rng).unwrap().len(), 26);
    }

    #[test]
    fn test_uuid_follows_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let uuid = generate("uuid", &mut a).unwrap();
        assert_eq!(uuid, generate("uuid", &mut b).unwrap());
        assert_eq!(Uuid::parse_str(&uuid).unwrap().get_version_num(), 4);
    }

    #[test]
    fn test_ulid_suffix() {
        let mut rng = StdRng::seed_from_u64(42);
        let suffix = ulid_suffix(7, &mut rng);
        assert_eq!(suffix.len(), 7);
        assert_eq!(suffix, suffix.to_lowercase());
    }
}
