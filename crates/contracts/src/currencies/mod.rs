//! Static currency → country mapping.
//!
//! Drives the two selector dropdowns (iterated in declared order) and the
//! flag-image lookup. The country code is used for nothing else.

use once_cell::sync::Lazy;

/// Shared table instance, loaded once at startup.
pub static CURRENCY_TABLE: Lazy<CurrencyTable> = Lazy::new(CurrencyTable::embedded);

/// Immutable lookup table from 3-letter currency code to 2-letter country
/// code. Membership is explicit: an unknown code yields `None`, never a
/// silent empty value.
pub struct CurrencyTable {
    pairs: &'static [(&'static str, &'static str)],
}

impl CurrencyTable {
    fn embedded() -> Self {
        Self {
            pairs: CURRENCY_COUNTRIES,
        }
    }

    /// All currency codes, in the table's declared order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(currency, _)| *currency)
    }

    pub fn contains(&self, currency: &str) -> bool {
        self.country_code(currency).is_some()
    }

    /// Country code for `currency`, or `None` if the code is not in the table.
    pub fn country_code(&self, currency: &str) -> Option<&'static str> {
        self.pairs
            .iter()
            .find(|(code, _)| *code == currency)
            .map(|(_, country)| *country)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// (currency code, country code) pairs backing the selectors.
const CURRENCY_COUNTRIES: &[(&str, &str)] = &[
    ("AED", "AE"),
    ("AFN", "AF"),
    ("XCD", "AG"),
    ("ALL", "AL"),
    ("AMD", "AM"),
    ("ANG", "AN"),
    ("AOA", "AO"),
    ("AQD", "AQ"),
    ("ARS", "AR"),
    ("AUD", "AU"),
    ("AZN", "AZ"),
    ("BAM", "BA"),
    ("BBD", "BB"),
    ("BDT", "BD"),
    ("XOF", "BE"),
    ("BGN", "BG"),
    ("BHD", "BH"),
    ("BIF", "BI"),
    ("BMD", "BM"),
    ("BND", "BN"),
    ("BOB", "BO"),
    ("BRL", "BR"),
    ("BSD", "BS"),
    ("NOK", "BV"),
    ("BWP", "BW"),
    ("BYR", "BY"),
    ("BZD", "BZ"),
    ("CAD", "CA"),
    ("CDF", "CD"),
    ("XAF", "CF"),
    ("CHF", "CH"),
    ("CLP", "CL"),
    ("CNY", "CN"),
    ("COP", "CO"),
    ("CRC", "CR"),
    ("CUP", "CU"),
    ("CVE", "CV"),
    ("CYP", "CY"),
    ("CZK", "CZ"),
    ("DJF", "DJ"),
    ("DKK", "DK"),
    ("DOP", "DO"),
    ("DZD", "DZ"),
    ("ECS", "EC"),
    ("EEK", "EE"),
    ("EGP", "EG"),
    ("ETB", "ET"),
    ("EUR", "FR"),
    ("FJD", "FJ"),
    ("FKP", "FK"),
    ("GBP", "GB"),
    ("GEL", "GE"),
    ("GGP", "GG"),
    ("GHS", "GH"),
    ("GIP", "GI"),
    ("GMD", "GM"),
    ("GNF", "GN"),
    ("GTQ", "GT"),
    ("GYD", "GY"),
    ("HKD", "HK"),
    ("HNL", "HN"),
    ("HRK", "HR"),
    ("HTG", "HT"),
    ("HUF", "HU"),
    ("IDR", "ID"),
    ("ILS", "IL"),
    ("INR", "IN"),
    ("IQD", "IQ"),
    ("IRR", "IR"),
    ("ISK", "IS"),
    ("JMD", "JM"),
    ("JOD", "JO"),
    ("JPY", "JP"),
    ("KES", "KE"),
    ("KGS", "KG"),
    ("KHR", "KH"),
    ("KMF", "KM"),
    ("KPW", "KP"),
    ("KRW", "KR"),
    ("KWD", "KW"),
    ("KYD", "KY"),
    ("KZT", "KZ"),
    ("LAK", "LA"),
    ("LBP", "LB"),
    ("LKR", "LK"),
    ("LRD", "LR"),
    ("LSL", "LS"),
    ("LTL", "LT"),
    ("LVL", "LV"),
    ("LYD", "LY"),
    ("MAD", "MA"),
    ("MDL", "MD"),
    ("MGA", "MG"),
    ("MKD", "MK"),
    ("MMK", "MM"),
    ("MNT", "MN"),
    ("MOP", "MO"),
    ("MRO", "MR"),
    ("MUR", "MU"),
    ("MVR", "MV"),
    ("MWK", "MW"),
    ("MXN", "MX"),
    ("MYR", "MY"),
    ("MZN", "MZ"),
    ("NAD", "NA"),
    ("XPF", "NC"),
    ("NGN", "NG"),
    ("NIO", "NI"),
    ("NPR", "NP"),
    ("NZD", "NZ"),
    ("OMR", "OM"),
    ("PAB", "PA"),
    ("PEN", "PE"),
    ("PGK", "PG"),
    ("PHP", "PH"),
    ("PKR", "PK"),
    ("PLN", "PL"),
    ("PYG", "PY"),
    ("QAR", "QA"),
    ("RON", "RO"),
    ("RSD", "RS"),
    ("RUB", "RU"),
    ("RWF", "RW"),
    ("SAR", "SA"),
    ("SBD", "SB"),
    ("SCR", "SC"),
    ("SDG", "SD"),
    ("SEK", "SE"),
    ("SGD", "SG"),
    ("SHP", "SH"),
    ("SLL", "SL"),
    ("SOS", "SO"),
    ("SRD", "SR"),
    ("STD", "ST"),
    ("SVC", "SV"),
    ("SYP", "SY"),
    ("SZL", "SZ"),
    ("THB", "TH"),
    ("TJS", "TJ"),
    ("TMT", "TM"),
    ("TND", "TN"),
    ("TOP", "TO"),
    ("TRY", "TR"),
    ("TTD", "TT"),
    ("TWD", "TW"),
    ("TZS", "TZ"),
    ("UAH", "UA"),
    ("UGX", "UG"),
    ("USD", "US"),
    ("UYU", "UY"),
    ("UZS", "UZ"),
    ("VEF", "VE"),
    ("VND", "VN"),
    ("VUV", "VU"),
    ("YER", "YE"),
    ("ZAR", "ZA"),
    ("ZMK", "ZM"),
    ("ZWD", "ZW"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        assert_eq!(CURRENCY_TABLE.country_code("USD"), Some("US"));
        assert_eq!(CURRENCY_TABLE.country_code("LKR"), Some("LK"));
        assert_eq!(CURRENCY_TABLE.country_code("EUR"), Some("FR"));
    }

    #[test]
    fn unknown_code_is_a_miss() {
        assert_eq!(CURRENCY_TABLE.country_code("XXX"), None);
        assert!(!CURRENCY_TABLE.contains("usd"));
    }

    #[test]
    fn iteration_follows_declared_order() {
        let codes: Vec<_> = CURRENCY_TABLE.codes().collect();
        assert_eq!(codes.len(), CURRENCY_TABLE.len());
        assert_eq!(codes[0], "AED");
        // Declared order, not alphabetical: XCD sits near the top because the
        // table is laid out by country.
        assert_eq!(codes[2], "XCD");
    }

    #[test]
    fn no_duplicate_currency_codes() {
        let mut codes: Vec<_> = CURRENCY_TABLE.codes().collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), CURRENCY_TABLE.len());
    }
}
