//! Person and phone generators.

use super::pick;
use fake::faker::name::en::{FirstName, LastName, Name, Suffix, Title};
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rand::Rng;

const MALE_FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
    "Charles", "Daniel", "Matthew", "Anthony", "Mark", "Steven", "Paul", "Andrew", "Joshua",
    "Kevin", "Brian", "George", "Edward", "Ronald", "Timothy", "Jason",
];

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Nancy", "Lisa", "Betty", "Margaret", "Sandra", "Ashley", "Emily", "Donna",
    "Michelle", "Carol", "Amanda", "Melissa", "Deborah", "Stephanie", "Rebecca",
];

const GENDERS: &[&str] = &["Male", "Female"];

pub fn generate<R: Rng>(key: &str, rng: &mut R) -> Option<String> {
    let value = match key {
        "person_first_name" => FirstName().fake_with_rng(rng),
        "person_first_name_female" => pick(rng, FEMALE_FIRST_NAMES),
        "person_first_name_male" => pick(rng, MALE_FIRST_NAMES),
        "person_gender" => pick(rng, GENDERS),
        "person_last_name" => LastName().fake_with_rng(rng),
        "person_name" => Name().fake_with_rng(rng),
        "person_name_female" => {
            let last: String = LastName().fake_with_rng(rng);
            format!("{} {last}", pick(rng, FEMALE_FIRST_NAMES))
        }
        "person_name_male" => {
            let last: String = LastName().fake_with_rng(rng);
            format!("{} {last}", pick(rng, MALE_FIRST_NAMES))
        }
        "person_ssn" => format!(
            "{:03}-{:02}-{:04}",
            rng.random_range(100..900u32),
            rng.random_range(10..100u32),
            rng.random_range(1000..10_000u32)
        ),
        "person_suffix" => Suffix().fake_with_rng(rng),
        "person_title" => Title().fake_with_rng(rng),
        "phone_area_code" => rng.random_range(200..1000u32).to_string(),
        "phone_exchange_code" => rng.random_range(200..1000u32).to_string(),
        "phone_number" => PhoneNumber().fake_with_rng(rng),
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
    fn test_gendered_names() {
        let mut rng = StdRng::seed_from_u64(42);
        let male = generate("person_first_name_male", &mut rng).unwrap();
        let female = generate("person_first_name_female", &mut rng).unwrap();
        assert!(MALE_FIRST_NAMES.contains(&male.as_str()));
        assert!(FEMALE_FIRST_NAMES.contains(&female.as_str()));
    }

    #[test]
    fn test_full_name_has_space() {
        let mut rng = StdRng::seed_from_u64(42);
        for key in ["person_name", "person_name_male", "person_name_female"] {
            assert!(generate(key, &mut rng).unwrap().contains(' '));
        }
    }

    #[test]
    fn test_ssn_format() {
        let mut rng = StdRng::seed_from_u64(42);
        let ssn = generate("person_ssn", &mut rng).unwrap();
        assert_eq!(ssn.len(), 11);
        assert_eq!(ssn.matches('-').count(), 2);
    }
}
