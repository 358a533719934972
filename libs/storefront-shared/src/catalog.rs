//! Static product catalog. Prices are in Toman.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// Flag plus name, exactly as shown on the country keyboard.
    pub label: &'static str,
    pub price: u64,
}

pub const COUNTRIES: &[Country] = &[
    Country { label: "🇺🇸 USA", price: 40_000 },
    Country { label: "🇨🇦 Canada", price: 40_000 },
    Country { label: "🇮🇷 Iran", price: 150_000 },
    Country { label: "🇸🇦 Saudi Arabia", price: 100_000 },
];

pub const PRICE_PER_STAR: u64 = 1_500;

/// Wallet top-up amounts offered as buttons. Any positive amount is accepted.
pub const TOPUP_PRESETS: &[u64] = &[50_000, 100_000, 150_000];

/// Loyalty points are awarded per this many Toman spent.
pub const POINTS_UNIT: u64 = 10_000;

/// Points at which a customer becomes VIP.
pub const VIP_THRESHOLD: u64 = 100;

/// Finds the country whose label prefixes `text` (keyboard buttons carry the price after the label).
pub fn match_country(text: &str) -> Option<&'static Country> {
    let text = text.trim();
    COUNTRIES.iter().find(|c| text.starts_with(c.label))
}

/// `40000` -> `40,000`
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parses a user-typed amount or quantity such as `150,000`. Zero is rejected.
pub fn parse_positive(text: &str) -> Option<u64> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<u64>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}
