//! ISO 3166-1 country codes
//!
//! A closed, static table mapping alpha-2 and alpha-3 codes to the short
//! English country name. Lookups are case-sensitive: codes are upper case.

use serde::{Serialize, Serializer};

use crate::error::CoreError;

/// One entry of the ISO 3166-1 table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryCode {
    alpha2: &'static str,
    alpha3: &'static str,
    name: &'static str,
}

impl CountryCode {
    const fn new(alpha2: &'static str, alpha3: &'static str, name: &'static str) -> Self {
        Self { alpha2, alpha3, name }
    }

    /// Two-letter code, e.g. `FI`
    pub fn alpha2(&self) -> &'static str {
        self.alpha2
    }

    /// Three-letter code, e.g. `FIN`
    pub fn alpha3(&self) -> &'static str {
        self.alpha3
    }

    /// Short English name, e.g. `Finland`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Every known country, ordered by alpha-2 code
    pub fn all() -> &'static [CountryCode] {
        COUNTRIES
    }

    /// Finds an entry by its alpha-2 code
    pub fn from_alpha2(code: &str) -> Option<&'static CountryCode> {
        COUNTRIES
            .binary_search_by(|c| c.alpha2.cmp(code))
            .ok()
            .map(|idx| &COUNTRIES[idx])
    }

    /// Finds an entry by its alpha-3 code
    pub fn from_alpha3(code: &str) -> Option<&'static CountryCode> {
        COUNTRIES.iter().find(|c| c.alpha3 == code)
    }

    /// Finds an entry by its name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<&'static CountryCode> {
        COUNTRIES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Resolves either an alpha-2 or an alpha-3 code
    pub fn parse(code: &str) -> Result<&'static CountryCode, CoreError> {
        match code.len() {
            2 => Self::from_alpha2(code),
            3 => Self::from_alpha3(code),
            _ => None,
        }
        .ok_or_else(|| CoreError::unknown_country(code))
    }

    /// Returns true if `code` is a known alpha-2 code
    pub fn is_alpha2(code: &str) -> bool {
        Self::from_alpha2(code).is_some()
    }
}

impl Serialize for CountryCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.alpha2)
    }
}

// Sorted by alpha-2 code; `from_alpha2` relies on it.
static COUNTRIES: &[CountryCode] = &[
    CountryCode::new("AD", "AND", "Andorra"),
    CountryCode::new("AE", "ARE", "United Arab Emirates"),
    CountryCode::new("AF", "AFG", "Afghanistan"),
    CountryCode::new("AG", "ATG", "Antigua and Barbuda"),
    CountryCode::new("AI", "AIA", "Anguilla"),
    CountryCode::new("AL", "ALB", "Albania"),
    CountryCode::new("AM", "ARM", "Armenia"),
    CountryCode::new("AO", "AGO", "Angola"),
    CountryCode::new("AQ", "ATA", "Antarctica"),
    CountryCode::new("AR", "ARG", "Argentina"),
    CountryCode::new("AS", "ASM", "American Samoa"),
    CountryCode::new("AT", "AUT", "Austria"),
    CountryCode::new("AU", "AUS", "Australia"),
    CountryCode::new("AW", "ABW", "Aruba"),
    CountryCode::new("AX", "ALA", "Åland Islands"),
    CountryCode::new("AZ", "AZE", "Azerbaijan"),
    CountryCode::new("BA", "BIH", "Bosnia and Herzegovina"),
    CountryCode::new("BB", "BRB", "Barbados"),
    CountryCode::new("BD", "BGD", "Bangladesh"),
    CountryCode::new("BE", "BEL", "Belgium"),
    CountryCode::new("BF", "BFA", "Burkina Faso"),
    CountryCode::new("BG", "BGR", "Bulgaria"),
    CountryCode::new("BH", "BHR", "Bahrain"),
    CountryCode::new("BI", "BDI", "Burundi"),
    CountryCode::new("BJ", "BEN", "Benin"),
    CountryCode::new("BL", "BLM", "Saint Barthélemy"),
    CountryCode::new("BM", "BMU", "Bermuda"),
    CountryCode::new("BN", "BRN", "Brunei Darussalam"),
    CountryCode::new("BO", "BOL", "Bolivia"),
    CountryCode::new("BQ", "BES", "Bonaire, Sint Eustatius and Saba"),
    CountryCode::new("BR", "BRA", "Brazil"),
    CountryCode::new("BS", "BHS", "Bahamas"),
    CountryCode::new("BT", "BTN", "Bhutan"),
    CountryCode::new("BV", "BVT", "Bouvet Island"),
    CountryCode::new("BW", "BWA", "Botswana"),
    CountryCode::new("BY", "BLR", "Belarus"),
    CountryCode::new("BZ", "BLZ", "Belize"),
    CountryCode::new("CA", "CAN", "Canada"),
    CountryCode::new("CC", "CCK", "Cocos (Keeling) Islands"),
    CountryCode::new("CD", "COD", "Congo, Democratic Republic of the"),
    CountryCode::new("CF", "CAF", "Central African Republic"),
    CountryCode::new("CG", "COG", "Congo"),
    CountryCode::new("CH", "CHE", "Switzerland"),
    CountryCode::new("CI", "CIV", "Côte d'Ivoire"),
    CountryCode::new("CK", "COK", "Cook Islands"),
    CountryCode::new("CL", "CHL", "Chile"),
    CountryCode::new("CM", "CMR", "Cameroon"),
    CountryCode::new("CN", "CHN", "China"),
    CountryCode::new("CO", "COL", "Colombia"),
    CountryCode::new("CR", "CRI", "Costa Rica"),
    CountryCode::new("CU", "CUB", "Cuba"),
    CountryCode::new("CV", "CPV", "Cabo Verde"),
    CountryCode::new("CW", "CUW", "Curaçao"),
    CountryCode::new("CX", "CXR", "Christmas Island"),
    CountryCode::new("CY", "CYP", "Cyprus"),
    CountryCode::new("CZ", "CZE", "Czechia"),
    CountryCode::new("DE", "DEU", "Germany"),
    CountryCode::new("DJ", "DJI", "Djibouti"),
    CountryCode::new("DK", "DNK", "Denmark"),
    CountryCode::new("DM", "DMA", "Dominica"),
    CountryCode::new("DO", "DOM", "Dominican Republic"),
    CountryCode::new("DZ", "DZA", "Algeria"),
    CountryCode::new("EC", "ECU", "Ecuador"),
    CountryCode::new("EE", "EST", "Estonia"),
    CountryCode::new("EG", "EGY", "Egypt"),
    CountryCode::new("EH", "ESH", "Western Sahara"),
    CountryCode::new("ER", "ERI", "Eritrea"),
    CountryCode::new("ES", "ESP", "Spain"),
    CountryCode::new("ET", "ETH", "Ethiopia"),
    CountryCode::new("FI", "FIN", "Finland"),
    CountryCode::new("FJ", "FJI", "Fiji"),
    CountryCode::new("FK", "FLK", "Falkland Islands (Malvinas)"),
    CountryCode::new("FM", "FSM", "Micronesia"),
    CountryCode::new("FO", "FRO", "Faroe Islands"),
    CountryCode::new("FR", "FRA", "France"),
    CountryCode::new("GA", "GAB", "Gabon"),
    CountryCode::new("GB", "GBR", "United Kingdom"),
    CountryCode::new("GD", "GRD", "Grenada"),
    CountryCode::new("GE", "GEO", "Georgia"),
    CountryCode::new("GF", "GUF", "French Guiana"),
    CountryCode::new("GG", "GGY", "Guernsey"),
    CountryCode::new("GH", "GHA", "Ghana"),
    CountryCode::new("GI", "GIB", "Gibraltar"),
    CountryCode::new("GL", "GRL", "Greenland"),
    CountryCode::new("GM", "GMB", "Gambia"),
    CountryCode::new("GN", "GIN", "Guinea"),
    CountryCode::new("GP", "GLP", "Guadeloupe"),
    CountryCode::new("GQ", "GNQ", "Equatorial Guinea"),
    CountryCode::new("GR", "GRC", "Greece"),
    CountryCode::new("GS", "SGS", "South Georgia and the South Sandwich Islands"),
    CountryCode::new("GT", "GTM", "Guatemala"),
    CountryCode::new("GU", "GUM", "Guam"),
    CountryCode::new("GW", "GNB", "Guinea-Bissau"),
    CountryCode::new("GY", "GUY", "Guyana"),
    CountryCode::new("HK", "HKG", "Hong Kong"),
    CountryCode::new("HM", "HMD", "Heard Island and McDonald Islands"),
    CountryCode::new("HN", "HND", "Honduras"),
    CountryCode::new("HR", "HRV", "Croatia"),
    CountryCode::new("HT", "HTI", "Haiti"),
    CountryCode::new("HU", "HUN", "Hungary"),
    CountryCode::new("ID", "IDN", "Indonesia"),
    CountryCode::new("IE", "IRL", "Ireland"),
    CountryCode::new("IL", "ISR", "Israel"),
    CountryCode::new("IM", "IMN", "Isle of Man"),
    CountryCode::new("IN", "IND", "India"),
    CountryCode::new("IO", "IOT", "British Indian Ocean Territory"),
    CountryCode::new("IQ", "IRQ", "Iraq"),
    CountryCode::new("IR", "IRN", "Iran"),
    CountryCode::new("IS", "ISL", "Iceland"),
    CountryCode::new("IT", "ITA", "Italy"),
    CountryCode::new("JE", "JEY", "Jersey"),
    CountryCode::new("JM", "JAM", "Jamaica"),
    CountryCode::new("JO", "JOR", "Jordan"),
    CountryCode::new("JP", "JPN", "Japan"),
    CountryCode::new("KE", "KEN", "Kenya"),
    CountryCode::new("KG", "KGZ", "Kyrgyzstan"),
    CountryCode::new("KH", "KHM", "Cambodia"),
    CountryCode::new("KI", "KIR", "Kiribati"),
    CountryCode::new("KM", "COM", "Comoros"),
    CountryCode::new("KN", "KNA", "Saint Kitts and Nevis"),
    CountryCode::new("KP", "PRK", "Korea, Democratic People's Republic of"),
    CountryCode::new("KR", "KOR", "Korea, Republic of"),
    CountryCode::new("KW", "KWT", "Kuwait"),
    CountryCode::new("KY", "CYM", "Cayman Islands"),
    CountryCode::new("KZ", "KAZ", "Kazakhstan"),
    CountryCode::new("LA", "LAO", "Lao People's Democratic Republic"),
    CountryCode::new("LB", "LBN", "Lebanon"),
    CountryCode::new("LC", "LCA", "Saint Lucia"),
    CountryCode::new("LI", "LIE", "Liechtenstein"),
    CountryCode::new("LK", "LKA", "Sri Lanka"),
    CountryCode::new("LR", "LBR", "Liberia"),
    CountryCode::new("LS", "LSO", "Lesotho"),
    CountryCode::new("LT", "LTU", "Lithuania"),
    CountryCode::new("LU", "LUX", "Luxembourg"),
    CountryCode::new("LV", "LVA", "Latvia"),
    CountryCode::new("LY", "LBY", "Libya"),
    CountryCode::new("MA", "MAR", "Morocco"),
    CountryCode::new("MC", "MCO", "Monaco"),
    CountryCode::new("MD", "MDA", "Moldova"),
    CountryCode::new("ME", "MNE", "Montenegro"),
    CountryCode::new("MF", "MAF", "Saint Martin (French part)"),
    CountryCode::new("MG", "MDG", "Madagascar"),
    CountryCode::new("MH", "MHL", "Marshall Islands"),
    CountryCode::new("MK", "MKD", "North Macedonia"),
    CountryCode::new("ML", "MLI", "Mali"),
    CountryCode::new("MM", "MMR", "Myanmar"),
    CountryCode::new("MN", "MNG", "Mongolia"),
    CountryCode::new("MO", "MAC", "Macao"),
    CountryCode::new("MP", "MNP", "Northern Mariana Islands"),
    CountryCode::new("MQ", "MTQ", "Martinique"),
    CountryCode::new("MR", "MRT", "Mauritania"),
    CountryCode::new("MS", "MSR", "Montserrat"),
    CountryCode::new("MT", "MLT", "Malta"),
    CountryCode::new("MU", "MUS", "Mauritius"),
    CountryCode::new("MV", "MDV", "Maldives"),
    CountryCode::new("MW", "MWI", "Malawi"),
    CountryCode::new("MX", "MEX", "Mexico"),
    CountryCode::new("MY", "MYS", "Malaysia"),
    CountryCode::new("MZ", "MOZ", "Mozambique"),
    CountryCode::new("NA", "NAM", "Namibia"),
    CountryCode::new("NC", "NCL", "New Caledonia"),
    CountryCode::new("NE", "NER", "Niger"),
    CountryCode::new("NF", "NFK", "Norfolk Island"),
    CountryCode::new("NG", "NGA", "Nigeria"),
    CountryCode::new("NI", "NIC", "Nicaragua"),
    CountryCode::new("NL", "NLD", "Netherlands"),
    CountryCode::new("NO", "NOR", "Norway"),
    CountryCode::new("NP", "NPL", "Nepal"),
    CountryCode::new("NR", "NRU", "Nauru"),
    CountryCode::new("NU", "NIU", "Niue"),
    CountryCode::new("NZ", "NZL", "New Zealand"),
    CountryCode::new("OM", "OMN", "Oman"),
    CountryCode::new("PA", "PAN", "Panama"),
    CountryCode::new("PE", "PER", "Peru"),
    CountryCode::new("PF", "PYF", "French Polynesia"),
    CountryCode::new("PG", "PNG", "Papua New Guinea"),
    CountryCode::new("PH", "PHL", "Philippines"),
    CountryCode::new("PK", "PAK", "Pakistan"),
    CountryCode::new("PL", "POL", "Poland"),
    CountryCode::new("PM", "SPM", "Saint Pierre and Miquelon"),
    CountryCode::new("PN", "PCN", "Pitcairn"),
    CountryCode::new("PR", "PRI", "Puerto Rico"),
    CountryCode::new("PS", "PSE", "Palestine, State of"),
    CountryCode::new("PT", "PRT", "Portugal"),
    CountryCode::new("PW", "PLW", "Palau"),
    CountryCode::new("PY", "PRY", "Paraguay"),
    CountryCode::new("QA", "QAT", "Qatar"),
    CountryCode::new("RE", "REU", "Réunion"),
    CountryCode::new("RO", "ROU", "Romania"),
    CountryCode::new("RS", "SRB", "Serbia"),
    CountryCode::new("RU", "RUS", "Russian Federation"),
    CountryCode::new("RW", "RWA", "Rwanda"),
    CountryCode::new("SA", "SAU", "Saudi Arabia"),
    CountryCode::new("SB", "SLB", "Solomon Islands"),
    CountryCode::new("SC", "SYC", "Seychelles"),
    CountryCode::new("SD", "SDN", "Sudan"),
    CountryCode::new("SE", "SWE", "Sweden"),
    CountryCode::new("SG", "SGP", "Singapore"),
    CountryCode::new("SH", "SHN", "Saint Helena, Ascension and Tristan da Cunha"),
    CountryCode::new("SI", "SVN", "Slovenia"),
    CountryCode::new("SJ", "SJM", "Svalbard and Jan Mayen"),
    CountryCode::new("SK", "SVK", "Slovakia"),
    CountryCode::new("SL", "SLE", "Sierra Leone"),
    CountryCode::new("SM", "SMR", "San Marino"),
    CountryCode::new("SN", "SEN", "Senegal"),
    CountryCode::new("SO", "SOM", "Somalia"),
    CountryCode::new("SR", "SUR", "Suriname"),
    CountryCode::new("SS", "SSD", "South Sudan"),
    CountryCode::new("ST", "STP", "Sao Tome and Principe"),
    CountryCode::new("SV", "SLV", "El Salvador"),
    CountryCode::new("SX", "SXM", "Sint Maarten (Dutch part)"),
    CountryCode::new("SY", "SYR", "Syrian Arab Republic"),
    CountryCode::new("SZ", "SWZ", "Eswatini"),
    CountryCode::new("TC", "TCA", "Turks and Caicos Islands"),
    CountryCode::new("TD", "TCD", "Chad"),
    CountryCode::new("TF", "ATF", "French Southern Territories"),
    CountryCode::new("TG", "TGO", "Togo"),
    CountryCode::new("TH", "THA", "Thailand"),
    CountryCode::new("TJ", "TJK", "Tajikistan"),
    CountryCode::new("TK", "TKL", "Tokelau"),
    CountryCode::new("TL", "TLS", "Timor-Leste"),
    CountryCode::new("TM", "TKM", "Turkmenistan"),
    CountryCode::new("TN", "TUN", "Tunisia"),
    CountryCode::new("TO", "TON", "Tonga"),
    CountryCode::new("TR", "TUR", "Türkiye"),
    CountryCode::new("TT", "TTO", "Trinidad and Tobago"),
    CountryCode::new("TV", "TUV", "Tuvalu"),
    CountryCode::new("TW", "TWN", "Taiwan"),
    CountryCode::new("TZ", "TZA", "Tanzania"),
    CountryCode::new("UA", "UKR", "Ukraine"),
    CountryCode::new("UG", "UGA", "Uganda"),
    CountryCode::new("UM", "UMI", "United States Minor Outlying Islands"),
    CountryCode::new("US", "USA", "United States of America"),
    CountryCode::new("UY", "URY", "Uruguay"),
    CountryCode::new("UZ", "UZB", "Uzbekistan"),
    CountryCode::new("VA", "VAT", "Holy See"),
    CountryCode::new("VC", "VCT", "Saint Vincent and the Grenadines"),
    CountryCode::new("VE", "VEN", "Venezuela"),
    CountryCode::new("VG", "VGB", "Virgin Islands (British)"),
    CountryCode::new("VI", "VIR", "Virgin Islands (U.S.)"),
    CountryCode::new("VN", "VNM", "Viet Nam"),
    CountryCode::new("VU", "VUT", "Vanuatu"),
    CountryCode::new("WF", "WLF", "Wallis and Futuna"),
    CountryCode::new("WS", "WSM", "Samoa"),
    CountryCode::new("YE", "YEM", "Yemen"),
    CountryCode::new("YT", "MYT", "Mayotte"),
    CountryCode::new("ZA", "ZAF", "South Africa"),
    CountryCode::new("ZM", "ZMB", "Zambia"),
    CountryCode::new("ZW", "ZWE", "Zimbabwe"),
];
