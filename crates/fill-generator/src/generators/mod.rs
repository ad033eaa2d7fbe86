//! Generator catalog.
//!
//! Keys are grouped by family, one module per family. Each module exposes
//! `generate(key, rng)` returning `None` for keys it does not own.

pub mod address;
pub mod company;
pub mod identifier;
pub mod internet;
pub mod person;
pub mod text;
pub mod time;

use rand::Rng;

/// Every key understood by [`generate`].
pub const KEYS: &[&str] = &[
    // address
    "address",
    "address_building_number",
    "address_city",
    "address_city_prefix",
    "address_city_suffix",
    "address_country",
    "address_country_abbr",
    "address_country_code",
    "address_latitude",
    "address_longitude",
    "address_post_code",
    "address_secondary_address",
    "address_state",
    "address_state_abbr",
    "address_street_address",
    "address_street_name",
    "address_street_suffix",
    // company, app, currency, color
    "app_name",
    "app_version",
    "color",
    "color_css",
    "color_hex",
    "color_rgb",
    "safe_color_name",
    "company_bs",
    "company_catch_phrase",
    "company_ein",
    "company_job_title",
    "company_name",
    "company_suffix",
    "currency",
    "currency_code",
    "currency_country",
    // identifiers and scalars
    "age",
    "bool",
    "id",
    "ulid",
    "uuid",
    // internet
    "email",
    "net_company_email",
    "net_domain",
    "net_email",
    "net_free_email",
    "net_free_email_domain",
    "net_http_method",
    "net_ipv4",
    "net_ipv6",
    "net_mac_address",
    "net_password",
    "net_query",
    "net_safe_email",
    "net_safe_email_domain",
    "net_slug",
    "net_status_code",
    "net_status_code_message",
    "net_tld",
    "net_url",
    // person, phone
    "person_first_name",
    "person_first_name_female",
    "person_first_name_male",
    "person_gender",
    "person_last_name",
    "person_name",
    "person_name_female",
    "person_name_male",
    "person_ssn",
    "person_suffix",
    "person_title",
    "phone_area_code",
    "phone_exchange_code",
    "phone_number",
    // text
    "lang",
    "lang_abbr",
    "lang_programming",
    "lorem_paragraph",
    "lorem_sentence",
    "lorem_word",
    // time
    "time",
    "time_am_pm",
    "time_ansic",
    "time_century",
    "time_date",
    "time_day_of_month",
    "time_day_of_week",
    "time_iso8601",
    "time_kitchen",
    "time_month",
    "time_month_name",
    "time_unix",
    "time_unix_date",
    "time_year",
    "timestamp",
    "timezone",
];

/// Whether `key` is part of the catalog.
pub fn is_supported(key: &str) -> bool {
    KEYS.contains(&key)
}

/// Generate one value for `key`, or `None` when the key is unknown.
pub fn generate<R: Rng>(key: &str, rng: &mut R) -> Option<String> {
    if !is_supported(key) {
        return None;
    }

    let families: [fn(&str, &mut R) -> Option<String>; 7] = [
        address::generate,
        company::generate,
        identifier::generate,
        internet::generate,
        person::generate,
        text::generate,
        time::generate,
    ];
    families.iter().find_map(|family| family(key, rng))
}

/// Pick one entry of `options` uniformly.
pub(crate) fn pick<R: Rng>(rng: &mut R, options: &[&str]) -> String {
    options[rng.random_range(0..options.len())].to_string()
}
