//! Internet generators.

use super::identifier::ulid_suffix;
use super::pick;
use fake::faker::company::en::CompanyName;
use fake::faker::http::en::RfcStatusCode;
use fake::faker::internet::en::{
    DomainSuffix, FreeEmail, FreeEmailProvider, IPv4, IPv6, MACAddress, Password, SafeEmail,
    Username,
};
use fake::faker::lorem::en::Word;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::Rng;

const HTTP_METHODS: &[&str] = &["GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"];

const SAFE_EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "example.net"];

pub fn generate<R: Rng>(key: &str, rng: &mut R) -> Option<String> {
    let value = match key {
        "email" => {
            let first: String = FirstName().fake_with_rng(rng);
            let last: String = LastName().fake_with_rng(rng);
            format!("{first}{last}@{}.mail", ulid_suffix(7, rng)).to_lowercase()
        }
        "net_company_email" => {
            let first: String = FirstName().fake_with_rng(rng);
            let last: String = LastName().fake_with_rng(rng);
            format!("{first}.{last}@{}", company_domain(rng)).to_lowercase()
        }
        "net_domain" => company_domain(rng),
        "net_email" => SafeEmail().fake_with_rng(rng),
        "net_free_email" => FreeEmail().fake_with_rng(rng),
        "net_free_email_domain" => FreeEmailProvider().fake_with_rng(rng),
        "net_http_method" => pick(rng, HTTP_METHODS),
        "net_ipv4" => IPv4().fake_with_rng(rng),
        "net_ipv6" => IPv6().fake_with_rng(rng),
        "net_mac_address" => MACAddress().fake_with_rng(rng),
        "net_password" => Password(8..20).fake_with_rng(rng),
        "net_query" => {
            let params = rng.random_range(1..4);
            let pairs: Vec<String> = (0..params)
                .map(|_| {
                    let name: String = Word().fake_with_rng(rng);
                    let value: String = Word().fake_with_rng(rng);
                    format!("{name}={value}")
                })
                .collect();
            format!("?{}", pairs.join("&"))
        }
        "net_safe_email" => {
            let user: String = Username().fake_with_rng(rng);
            format!("{user}@{}", pick(rng, SAFE_EMAIL_DOMAINS))
        }
        "net_safe_email_domain" => pick(rng, SAFE_EMAIL_DOMAINS),
        "net_slug" => {
            let words = rng.random_range(2..5);
            (0..words)
                .map(|_| Word().fake_with_rng::<String, _>(rng))
                .collect::<Vec<_>>()
                .join("-")
        }
        "net_status_code" => status_line(rng).0,
        "net_status_code_message" => status_line(rng).1,
        "net_tld" => DomainSuffix().fake_with_rng(rng),
        "net_url" => {
            let path: String = Word().fake_with_rng(rng);
            format!("https://www.{}/{path}", company_domain(rng))
        }
        _ => return None,
    };
    Some(value)
}

/// Code and reason phrase of a registered HTTP status, e.g. `("404", "Not Found")`.
fn status_line<R: Rng>(rng: &mut R) -> (String, String) {
    let line: String = RfcStatusCode().fake_with_rng(rng);
    match line.split_once(' ') {
        Some((code, reason)) => (code.to_string(), reason.to_string()),
        None => (line, String::new()),
    }
}

fn company_domain<R: Rng>(rng: &mut R) -> String {
    let company: String = CompanyName().fake_with_rng(rng);
    let suffix: String = DomainSuffix().fake_with_rng(rng);
    let label: String = company
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    format!("{label}.{suffix}")
}
