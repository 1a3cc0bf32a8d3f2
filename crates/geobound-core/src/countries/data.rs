// crates/geobound-core/src/countries/data.rs

//! ISO 3166-1 reference table.
//!
//! One row per officially assigned code, 249 entries. Display names follow the
//! ISO 3166 Maintenance Agency short names as distributed by the Debian
//! `iso-codes` project.

use super::Country;

const fn country(
    alpha2: &'static str,
    alpha3: &'static str,
    numeric: &'static str,
    name: &'static str,
    official_name: Option<&'static str>,
    common_name: Option<&'static str>,
) -> Country {
    Country {
        alpha2,
        alpha3,
        numeric,
        name,
        official_name,
        common_name,
    }
}

#[rustfmt::skip]
pub(crate) static COUNTRIES: [Country; 249] = [
    country("AD", "AND", "020", "Andorra", Some("Principality of Andorra"), None),
    country("AE", "ARE", "784", "United Arab Emirates", None, None),
    country("AF", "AFG", "004", "Afghanistan", Some("Islamic Republic of Afghanistan"), None),
    country("AG", "ATG", "028", "Antigua and Barbuda", None, None),
    country("AI", "AIA", "660", "Anguilla", None, None),
    country("AL", "ALB", "008", "Albania", Some("Republic of Albania"), None),
    country("AM", "ARM", "051", "Armenia", Some("Republic of Armenia"), None),
    country("AO", "AGO", "024", "Angola", Some("Republic of Angola"), None),
    country("AQ", "ATA", "010", "Antarctica", None, None),
    country("AR", "ARG", "032", "Argentina", Some("Argentine Republic"), None),
    country("AS", "ASM", "016", "American Samoa", None, None),
    country("AT", "AUT", "040", "Austria", Some("Republic of Austria"), None),
    country("AU", "AUS", "036", "Australia", None, None),
    country("AW", "ABW", "533", "Aruba", None, None),
    country("AX", "ALA", "248", "Åland Islands", None, None),
    country("AZ", "AZE", "031", "Azerbaijan", Some("Republic of Azerbaijan"), None),
    country("BA", "BIH", "070", "Bosnia and Herzegovina", Some("Republic of Bosnia and Herzegovina"), None),
    country("BB", "BRB", "052", "Barbados", None, None),
    country("BD", "BGD", "050", "Bangladesh", Some("People's Republic of Bangladesh"), None),
    country("BE", "BEL", "056", "Belgium", Some("Kingdom of Belgium"), None),
    country("BF", "BFA", "854", "Burkina Faso", None, None),
    country("BG", "BGR", "100", "Bulgaria", Some("Republic of Bulgaria"), None),
    country("BH", "BHR", "048", "Bahrain", Some("Kingdom of Bahrain"), None),
    country("BI", "BDI", "108", "Burundi", Some("Republic of Burundi"), None),
    country("BJ", "BEN", "204", "Benin", Some("Republic of Benin"), None),
    country("BL", "BLM", "652", "Saint Barthélemy", None, None),
    country("BM", "BMU", "060", "Bermuda", None, None),
    country("BN", "BRN", "096", "Brunei Darussalam", None, None),
    country("BO", "BOL", "068", "Bolivia, Plurinational State of", Some("Plurinational State of Bolivia"), Some("Bolivia")),
    country("BQ", "BES", "535", "Bonaire, Sint Eustatius and Saba", None, None),
    country("BR", "BRA", "076", "Brazil", Some("Federative Republic of Brazil"), None),
    country("BS", "BHS", "044", "Bahamas", Some("Commonwealth of the Bahamas"), None),
    country("BT", "BTN", "064", "Bhutan", Some("Kingdom of Bhutan"), None),
    country("BV", "BVT", "074", "Bouvet Island", None, None),
    country("BW", "BWA", "072", "Botswana", Some("Republic of Botswana"), None),
    country("BY", "BLR", "112", "Belarus", Some("Republic of Belarus"), None),
    country("BZ", "BLZ", "084", "Belize", None, None),
    country("CA", "CAN", "124", "Canada", None, None),
    country("CC", "CCK", "166", "Cocos (Keeling) Islands", None, None),
    country("CD", "COD", "180", "Congo, The Democratic Republic of the", None, None),
    country("CF", "CAF", "140", "Central African Republic", None, None),
    country("CG", "COG", "178", "Congo", Some("Republic of the Congo"), None),
    country("CH", "CHE", "756", "Switzerland", Some("Swiss Confederation"), None),
    country("CI", "CIV", "384", "Côte d'Ivoire", Some("Republic of Côte d'Ivoire"), None),
    country("CK", "COK", "184", "Cook Islands", None, None),
    country("CL", "CHL", "152", "Chile", Some("Republic of Chile"), None),
    country("CM", "CMR", "120", "Cameroon", Some("Republic of Cameroon"), None),
    country("CN", "CHN", "156", "China", Some("People's Republic of China"), None),
    country("CO", "COL", "170", "Colombia", Some("Republic of Colombia"), None),
    country("CR", "CRI", "188", "Costa Rica", Some("Republic of Costa Rica"), None),
    country("CU", "CUB", "192", "Cuba", Some("Republic of Cuba"), None),
    country("CV", "CPV", "132", "Cabo Verde", Some("Republic of Cabo Verde"), None),
    country("CW", "CUW", "531", "Curaçao", Some("Curaçao"), None),
    country("CX", "CXR", "162", "Christmas Island", None, None),
    country("CY", "CYP", "196", "Cyprus", Some("Republic of Cyprus"), None),
    country("CZ", "CZE", "203", "Czechia", Some("Czech Republic"), None),
    country("DE", "DEU", "276", "Germany", Some("Federal Republic of Germany"), None),
    country("DJ", "DJI", "262", "Djibouti", Some("Republic of Djibouti"), None),
    country("DK", "DNK", "208", "Denmark", Some("Kingdom of Denmark"), None),
    country("DM", "DMA", "212", "Dominica", Some("Commonwealth of Dominica"), None),
    country("DO", "DOM", "214", "Dominican Republic", None, None),
    country("DZ", "DZA", "012", "Algeria", Some("People's Democratic Republic of Algeria"), None),
    country("EC", "ECU", "218", "Ecuador", Some("Republic of Ecuador"), None),
    country("EE", "EST", "233", "Estonia", Some("Republic of Estonia"), None),
    country("EG", "EGY", "818", "Egypt", Some("Arab Republic of Egypt"), None),
    country("EH", "ESH", "732", "Western Sahara", None, None),
    country("ER", "ERI", "232", "Eritrea", Some("the State of Eritrea"), None),
    country("ES", "ESP", "724", "Spain", Some("Kingdom of Spain"), None),
    country("ET", "ETH", "231", "Ethiopia", Some("Federal Democratic Republic of Ethiopia"), None),
    country("FI", "FIN", "246", "Finland", Some("Republic of Finland"), None),
    country("FJ", "FJI", "242", "Fiji", Some("Republic of Fiji"), None),
    country("FK", "FLK", "238", "Falkland Islands (Malvinas)", None, None),
    country("FM", "FSM", "583", "Micronesia, Federated States of", Some("Federated States of Micronesia"), None),
    country("FO", "FRO", "234", "Faroe Islands", None, None),
    country("FR", "FRA", "250", "France", Some("French Republic"), None),
    country("GA", "GAB", "266", "Gabon", Some("Gabonese Republic"), None),
    country("GB", "GBR", "826", "United Kingdom", Some("United Kingdom of Great Britain and Northern Ireland"), None),
    country("GD", "GRD", "308", "Grenada", None, None),
    country("GE", "GEO", "268", "Georgia", None, None),
    country("GF", "GUF", "254", "French Guiana", None, None),
    country("GG", "GGY", "831", "Guernsey", None, None),
    country("GH", "GHA", "288", "Ghana", Some("Republic of Ghana"), None),
    country("GI", "GIB", "292", "Gibraltar", None, None),
    country("GL", "GRL", "304", "Greenland", None, None),
    country("GM", "GMB", "270", "Gambia", Some("Republic of the Gambia"), None),
    country("GN", "GIN", "324", "Guinea", Some("Republic of Guinea"), None),
    country("GP", "GLP", "312", "Guadeloupe", None, None),
    country("GQ", "GNQ", "226", "Equatorial Guinea", Some("Republic of Equatorial Guinea"), None),
    country("GR", "GRC", "300", "Greece", Some("Hellenic Republic"), None),
    country("GS", "SGS", "239", "South Georgia and the South Sandwich Islands", None, None),
    country("GT", "GTM", "320", "Guatemala", Some("Republic of Guatemala"), None),
    country("GU", "GUM", "316", "Guam", None, None),
    country("GW", "GNB", "624", "Guinea-Bissau", Some("Republic of Guinea-Bissau"), None),
    country("GY", "GUY", "328", "Guyana", Some("Republic of Guyana"), None),
    country("HK", "HKG", "344", "Hong Kong", Some("Hong Kong Special Administrative Region of China"), None),
    country("HM", "HMD", "334", "Heard Island and McDonald Islands", None, None),
    country("HN", "HND", "340", "Honduras", Some("Republic of Honduras"), None),
    country("HR", "HRV", "191", "Croatia", Some("Republic of Croatia"), None),
    country("HT", "HTI", "332", "Haiti", Some("Republic of Haiti"), None),
    country("HU", "HUN", "348", "Hungary", None, None),
    country("ID", "IDN", "360", "Indonesia", Some("Republic of Indonesia"), None),
    country("IE", "IRL", "372", "Ireland", None, None),
    country("IL", "ISR", "376", "Israel", Some("State of Israel"), None),
    country("IM", "IMN", "833", "Isle of Man", None, None),
    country("IN", "IND", "356", "India", Some("Republic of India"), None),
    country("IO", "IOT", "086", "British Indian Ocean Territory", None, None),
    country("IQ", "IRQ", "368", "Iraq", Some("Republic of Iraq"), None),
    country("IR", "IRN", "364", "Iran, Islamic Republic of", Some("Islamic Republic of Iran"), Some("Iran")),
    country("IS", "ISL", "352", "Iceland", Some("Republic of Iceland"), None),
    country("IT", "ITA", "380", "Italy", Some("Italian Republic"), None),
    country("JE", "JEY", "832", "Jersey", None, None),
    country("JM", "JAM", "388", "Jamaica", None, None),
    country("JO", "JOR", "400", "Jordan", Some("Hashemite Kingdom of Jordan"), None),
    country("JP", "JPN", "392", "Japan", None, None),
    country("KE", "KEN", "404", "Kenya", Some("Republic of Kenya"), None),
    country("KG", "KGZ", "417", "Kyrgyzstan", Some("Kyrgyz Republic"), None),
    country("KH", "KHM", "116", "Cambodia", Some("Kingdom of Cambodia"), None),
    country("KI", "KIR", "296", "Kiribati", Some("Republic of Kiribati"), None),
    country("KM", "COM", "174", "Comoros", Some("Union of the Comoros"), None),
    country("KN", "KNA", "659", "Saint Kitts and Nevis", None, None),
    country("KP", "PRK", "408", "Korea, Democratic People's Republic of", Some("Democratic People's Republic of Korea"), Some("North Korea")),
    country("KR", "KOR", "410", "Korea, Republic of", None, Some("South Korea")),
    country("KW", "KWT", "414", "Kuwait", Some("State of Kuwait"), None),
    country("KY", "CYM", "136", "Cayman Islands", None, None),
    country("KZ", "KAZ", "398", "Kazakhstan", Some("Republic of Kazakhstan"), None),
    country("LA", "LAO", "418", "Lao People's Democratic Republic", None, Some("Laos")),
    country("LB", "LBN", "422", "Lebanon", Some("Lebanese Republic"), None),
    country("LC", "LCA", "662", "Saint Lucia", None, None),
    country("LI", "LIE", "438", "Liechtenstein", Some("Principality of Liechtenstein"), None),
    country("LK", "LKA", "144", "Sri Lanka", Some("Democratic Socialist Republic of Sri Lanka"), None),
    country("LR", "LBR", "430", "Liberia", Some("Republic of Liberia"), None),
    country("LS", "LSO", "426", "Lesotho", Some("Kingdom of Lesotho"), None),
    country("LT", "LTU", "440", "Lithuania", Some("Republic of Lithuania"), None),
    country("LU", "LUX", "442", "Luxembourg", Some("Grand Duchy of Luxembourg"), None),
    country("LV", "LVA", "428", "Latvia", Some("Republic of Latvia"), None),
    country("LY", "LBY", "434", "Libya", None, None),
    country("MA", "MAR", "504", "Morocco", Some("Kingdom of Morocco"), None),
    country("MC", "MCO", "492", "Monaco", Some("Principality of Monaco"), None),
    country("MD", "MDA", "498", "Moldova, Republic of", Some("Republic of Moldova"), Some("Moldova")),
    country("ME", "MNE", "499", "Montenegro", None, None),
    country("MF", "MAF", "663", "Saint Martin (French part)", None, None),
    country("MG", "MDG", "450", "Madagascar", Some("Republic of Madagascar"), None),
    country("MH", "MHL", "584", "Marshall Islands", Some("Republic of the Marshall Islands"), None),
    country("MK", "MKD", "807", "North Macedonia", Some("Republic of North Macedonia"), None),
    country("ML", "MLI", "466", "Mali", Some("Republic of Mali"), None),
    country("MM", "MMR", "104", "Myanmar", Some("Republic of Myanmar"), None),
    country("MN", "MNG", "496", "Mongolia", None, None),
    country("MO", "MAC", "446", "Macao", Some("Macao Special Administrative Region of China"), None),
    country("MP", "MNP", "580", "Northern Mariana Islands", Some("Commonwealth of the Northern Mariana Islands"), None),
    country("MQ", "MTQ", "474", "Martinique", None, None),
    country("MR", "MRT", "478", "Mauritania", Some("Islamic Republic of Mauritania"), None),
    country("MS", "MSR", "500", "Montserrat", None, None),
    country("MT", "MLT", "470", "Malta", Some("Republic of Malta"), None),
    country("MU", "MUS", "480", "Mauritius", Some("Republic of Mauritius"), None),
    country("MV", "MDV", "462", "Maldives", Some("Republic of Maldives"), None),
    country("MW", "MWI", "454", "Malawi", Some("Republic of Malawi"), None),
    country("MX", "MEX", "484", "Mexico", Some("United Mexican States"), None),
    country("MY", "MYS", "458", "Malaysia", None, None),
    country("MZ", "MOZ", "508", "Mozambique", Some("Republic of Mozambique"), None),
    country("NA", "NAM", "516", "Namibia", Some("Republic of Namibia"), None),
    country("NC", "NCL", "540", "New Caledonia", None, None),
    country("NE", "NER", "562", "Niger", Some("Republic of the Niger"), None),
    country("NF", "NFK", "574", "Norfolk Island", None, None),
    country("NG", "NGA", "566", "Nigeria", Some("Federal Republic of Nigeria"), None),
    country("NI", "NIC", "558", "Nicaragua", Some("Republic of Nicaragua"), None),
    country("NL", "NLD", "528", "Netherlands", Some("Kingdom of the Netherlands"), None),
    country("NO", "NOR", "578", "Norway", Some("Kingdom of Norway"), None),
    country("NP", "NPL", "524", "Nepal", Some("Federal Democratic Republic of Nepal"), None),
    country("NR", "NRU", "520", "Nauru", Some("Republic of Nauru"), None),
    country("NU", "NIU", "570", "Niue", None, None),
    country("NZ", "NZL", "554", "New Zealand", None, None),
    country("OM", "OMN", "512", "Oman", Some("Sultanate of Oman"), None),
    country("PA", "PAN", "591", "Panama", Some("Republic of Panama"), None),
    country("PE", "PER", "604", "Peru", Some("Republic of Peru"), None),
    country("PF", "PYF", "258", "French Polynesia", None, None),
    country("PG", "PNG", "598", "Papua New Guinea", Some("Independent State of Papua New Guinea"), None),
    country("PH", "PHL", "608", "Philippines", Some("Republic of the Philippines"), None),
    country("PK", "PAK", "586", "Pakistan", Some("Islamic Republic of Pakistan"), None),
    country("PL", "POL", "616", "Poland", Some("Republic of Poland"), None),
    country("PM", "SPM", "666", "Saint Pierre and Miquelon", None, None),
    country("PN", "PCN", "612", "Pitcairn", None, None),
    country("PR", "PRI", "630", "Puerto Rico", None, None),
    country("PS", "PSE", "275", "Palestine, State of", Some("the State of Palestine"), None),
    country("PT", "PRT", "620", "Portugal", Some("Portuguese Republic"), None),
    country("PW", "PLW", "585", "Palau", Some("Republic of Palau"), None),
    country("PY", "PRY", "600", "Paraguay", Some("Republic of Paraguay"), None),
    country("QA", "QAT", "634", "Qatar", Some("State of Qatar"), None),
    country("RE", "REU", "638", "Réunion", None, None),
    country("RO", "ROU", "642", "Romania", None, None),
    country("RS", "SRB", "688", "Serbia", Some("Republic of Serbia"), None),
    country("RU", "RUS", "643", "Russian Federation", None, None),
    country("RW", "RWA", "646", "Rwanda", Some("Rwandese Republic"), None),
    country("SA", "SAU", "682", "Saudi Arabia", Some("Kingdom of Saudi Arabia"), None),
    country("SB", "SLB", "090", "Solomon Islands", None, None),
    country("SC", "SYC", "690", "Seychelles", Some("Republic of Seychelles"), None),
    country("SD", "SDN", "729", "Sudan", Some("Republic of the Sudan"), None),
    country("SE", "SWE", "752", "Sweden", Some("Kingdom of Sweden"), None),
    country("SG", "SGP", "702", "Singapore", Some("Republic of Singapore"), None),
    country("SH", "SHN", "654", "Saint Helena, Ascension and Tristan da Cunha", None, None),
    country("SI", "SVN", "705", "Slovenia", Some("Republic of Slovenia"), None),
    country("SJ", "SJM", "744", "Svalbard and Jan Mayen", None, None),
    country("SK", "SVK", "703", "Slovakia", Some("Slovak Republic"), None),
    country("SL", "SLE", "694", "Sierra Leone", Some("Republic of Sierra Leone"), None),
    country("SM", "SMR", "674", "San Marino", Some("Republic of San Marino"), None),
    country("SN", "SEN", "686", "Senegal", Some("Republic of Senegal"), None),
    country("SO", "SOM", "706", "Somalia", Some("Federal Republic of Somalia"), None),
    country("SR", "SUR", "740", "Suriname", Some("Republic of Suriname"), None),
    country("SS", "SSD", "728", "South Sudan", Some("Republic of South Sudan"), None),
    country("ST", "STP", "678", "Sao Tome and Principe", Some("Democratic Republic of Sao Tome and Principe"), None),
    country("SV", "SLV", "222", "El Salvador", Some("Republic of El Salvador"), None),
    country("SX", "SXM", "534", "Sint Maarten (Dutch part)", Some("Sint Maarten (Dutch part)"), None),
    country("SY", "SYR", "760", "Syrian Arab Republic", None, Some("Syria")),
    country("SZ", "SWZ", "748", "Eswatini", Some("Kingdom of Eswatini"), None),
    country("TC", "TCA", "796", "Turks and Caicos Islands", None, None),
    country("TD", "TCD", "148", "Chad", Some("Republic of Chad"), None),
    country("TF", "ATF", "260", "French Southern Territories", None, None),
    country("TG", "TGO", "768", "Togo", Some("Togolese Republic"), None),
    country("TH", "THA", "764", "Thailand", Some("Kingdom of Thailand"), None),
    country("TJ", "TJK", "762", "Tajikistan", Some("Republic of Tajikistan"), None),
    country("TK", "TKL", "772", "Tokelau", None, None),
    country("TL", "TLS", "626", "Timor-Leste", Some("Democratic Republic of Timor-Leste"), None),
    country("TM", "TKM", "795", "Turkmenistan", None, None),
    country("TN", "TUN", "788", "Tunisia", Some("Republic of Tunisia"), None),
    country("TO", "TON", "776", "Tonga", Some("Kingdom of Tonga"), None),
    country("TR", "TUR", "792", "Türkiye", Some("Republic of Türkiye"), None),
    country("TT", "TTO", "780", "Trinidad and Tobago", Some("Republic of Trinidad and Tobago"), None),
    country("TV", "TUV", "798", "Tuvalu", None, None),
    country("TW", "TWN", "158", "Taiwan, Province of China", Some("Taiwan, Province of China"), Some("Taiwan")),
    country("TZ", "TZA", "834", "Tanzania, United Republic of", Some("United Republic of Tanzania"), Some("Tanzania")),
    country("UA", "UKR", "804", "Ukraine", None, None),
    country("UG", "UGA", "800", "Uganda", Some("Republic of Uganda"), None),
    country("UM", "UMI", "581", "United States Minor Outlying Islands", None, None),
    country("US", "USA", "840", "United States", Some("United States of America"), None),
    country("UY", "URY", "858", "Uruguay", Some("Eastern Republic of Uruguay"), None),
    country("UZ", "UZB", "860", "Uzbekistan", Some("Republic of Uzbekistan"), None),
    country("VA", "VAT", "336", "Holy See (Vatican City State)", None, None),
    country("VC", "VCT", "670", "Saint Vincent and the Grenadines", None, None),
    country("VE", "VEN", "862", "Venezuela, Bolivarian Republic of", Some("Bolivarian Republic of Venezuela"), Some("Venezuela")),
    country("VG", "VGB", "092", "Virgin Islands, British", Some("British Virgin Islands"), None),
    country("VI", "VIR", "850", "Virgin Islands, U.S.", Some("Virgin Islands of the United States"), None),
    country("VN", "VNM", "704", "Viet Nam", Some("Socialist Republic of Viet Nam"), Some("Vietnam")),
    country("VU", "VUT", "548", "Vanuatu", Some("Republic of Vanuatu"), None),
    country("WF", "WLF", "876", "Wallis and Futuna", None, None),
    country("WS", "WSM", "882", "Samoa", Some("Independent State of Samoa"), None),
    country("YE", "YEM", "887", "Yemen", Some("Republic of Yemen"), None),
    country("YT", "MYT", "175", "Mayotte", None, None),
    country("ZA", "ZAF", "710", "South Africa", Some("Republic of South Africa"), None),
    country("ZM", "ZMB", "894", "Zambia", Some("Republic of Zambia"), None),
    country("ZW", "ZWE", "716", "Zimbabwe", Some("Republic of Zimbabwe"), None),
];
