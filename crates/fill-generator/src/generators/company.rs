//! Company, app, currency and color generators.

use super::pick;
use fake::faker::color::en::{HexColor, RgbColor};
use fake::faker::company::en::{Bs, CatchPhrase, CompanyName, CompanySuffix, Profession};
use fake::faker::currency::en::{CurrencyCode, CurrencyName};
use fake::Fake;
use rand::Rng;

const APP_PREFIXES: &[&str] = &[
    "Quick", "Smart", "Cloud", "Pixel", "Bright", "Swift", "Open", "Blue", "Nova", "Echo",
];

const APP_SUFFIXES: &[&str] = &[
    "Notes", "Sync", "Pay", "Chat", "Track", "Mail", "Books", "Flow", "Desk", "Cast",
];

const CURRENCY_COUNTRIES: &[&str] = &[
    "United States", "Eurozone", "United Kingdom", "Japan", "Switzerland", "Canada", "Australia",
    "China", "India", "Brazil", "Mexico", "South Africa", "Sweden", "Norway", "Singapore",
];

const COLOR_NAMES: &[&str] = &[
    "AliceBlue", "AntiqueWhite", "Aquamarine", "Beige", "Bisque", "BlanchedAlmond", "BlueViolet",
    "Chartreuse", "Coral", "CornflowerBlue", "Crimson", "DarkOrange", "DeepPink", "DodgerBlue",
    "FireBrick", "ForestGreen", "Gainsboro", "GoldenRod", "HotPink", "IndianRed", "Khaki",
    "Lavender", "LemonChiffon", "MediumSeaGreen", "MidnightBlue", "Orchid", "PapayaWhip", "Peru",
    "RebeccaPurple", "SaddleBrown", "SeaShell", "SlateGray", "SteelBlue", "Tomato", "Turquoise",
];

const SAFE_COLOR_NAMES: &[&str] = &[
    "black", "maroon", "green", "navy", "olive", "purple", "teal", "lime", "blue", "silver",
    "gray", "yellow", "fuchsia", "aqua", "white",
];

pub fn generate<R: Rng>(key: &str, rng: &mut R) -> Option<String> {
    let value = match key {
        "app_name" => format!("{}{}", pick(rng, APP_PREFIXES), pick(rng, APP_SUFFIXES)),
        "app_version" => format!(
            "{}.{}.{}",
            rng.random_range(0..10u32),
            rng.random_range(0..20u32),
            rng.random_range(0..50u32)
        ),
        "color" => pick(rng, COLOR_NAMES),
        "safe_color_name" => pick(rng, SAFE_COLOR_NAMES),
        "color_hex" => HexColor().fake_with_rng(rng),
        "color_rgb" => format!(
            "{},{},{}",
            rng.random::<u8>(),
            rng.random::<u8>(),
            rng.random::<u8>()
        ),
        "color_css" => RgbColor().fake_with_rng(rng),
        "company_bs" => Bs().fake_with_rng(rng),
        "company_catch_phrase" => CatchPhrase().fake_with_rng(rng),
        "company_ein" => format!(
            "{:02}-{:07}",
            rng.random_range(10..100u32),
            rng.random_range(0..10_000_000u32)
        ),
        "company_job_title" => Profession().fake_with_rng(rng),
        "company_name" => CompanyName().fake_with_rng(rng),
        "company_suffix" => CompanySuffix().fake_with_rng(rng),
        "currency" => CurrencyName().fake_with_rng(rng),
        "currency_code" => CurrencyCode().fake_with_rng(rng),
        "currency_country" => pick(rng, CURRENCY_COUNTRIES),
        _ => return None,
    };
    Some(value)
}
