//! Best-effort resolution of free-text locations to coordinates.
//!
//! Two tables drive the resolver: an exact-match table of ICAO/IATA airport
//! codes (scanned token by token, first match wins) and an ordered list of
//! place-name substrings matched against the lower-cased input. Entry order
//! in the place table is the tie-break, so specific entries ("paris cdg")
//! must come before broader ones ("paris"). Resolution never fails: inputs
//! matching nothing get a fixed continental default.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

/// Fallback coordinate (central Europe) for unresolvable locations.
pub const DEFAULT_COORDS: (f64, f64) = (48.5, 10.0);

/// Place-name substrings to coordinates, most specific first.
static PLACES: &[(&str, (f64, f64))] = &[
    // France
    ("paris cdg", (49.0097, 2.5478)),
    ("paris orly", (48.7262, 2.3652)),
    ("paris", (48.8566, 2.3522)),
    ("le bourget", (48.9697, 2.4411)),
    ("guyancourt", (48.7729, 2.0696)),
    ("nice", (43.7102, 7.2620)),
    ("lyon", (45.7640, 4.8357)),
    ("marseille", (43.2965, 5.3698)),
    ("toulouse", (43.6047, 1.4442)),
    ("rennes", (48.1173, -1.6778)),
    ("nantes", (47.2184, -1.5536)),
    ("bordeaux", (44.8378, -0.5792)),
    ("brest", (48.3904, -4.4861)),
    ("bâle-mulhouse", (47.5896, 7.5290)),
    ("chambéry", (45.5646, 5.9178)),
    ("chambery", (45.5646, 5.9178)),
    ("clermont-ferrand", (45.7772, 3.0870)),
    ("france", (46.2276, 2.2137)),
    // Switzerland
    ("genève", (46.2044, 6.1432)),
    ("geneve", (46.2044, 6.1432)),
    ("zurich", (47.3769, 8.5417)),
    ("berne", (46.9481, 7.4474)),
    ("lugano", (46.0037, 8.9511)),
    ("meyrin", (46.2338, 6.0622)),
    ("lausanne", (46.5197, 6.6323)),
    // Belgium
    ("bruxelles", (50.8503, 4.3517)),
    ("charleroi", (50.4614, 4.4446)),
    ("liège", (50.6292, 5.5797)),
    ("liege", (50.6292, 5.5797)),
    ("belgium", (50.8503, 4.3517)),
    // Luxembourg
    ("luxembourg", (49.6117, 6.1319)),
    // Germany
    ("francfort", (50.1109, 8.6821)),
    ("munich", (48.1351, 11.5820)),
    ("berlin", (52.5200, 13.4050)),
    ("düsseldorf", (51.2217, 6.7762)),
    ("dusseldorf", (51.2217, 6.7762)),
    ("cologne", (50.9333, 6.9500)),
    ("stuttgart", (48.7758, 9.1829)),
    ("hambourg", (53.5753, 10.0153)),
    ("zweibrücken", (49.2092, 7.3600)),
    ("zweibrucken", (49.2092, 7.3600)),
    // Netherlands
    ("amsterdam", (52.3676, 4.9041)),
    // UK
    ("londres heathrow", (51.4700, -0.4543)),
    ("londres gatwick", (51.1537, -0.1821)),
    ("londres city", (51.5048, 0.0495)),
    ("londres", (51.5074, -0.1278)),
    ("london", (51.5074, -0.1278)),
    ("oxford", (51.7520, -1.2577)),
    ("manchester", (53.3498, -2.2799)),
    ("gb", (51.5074, -0.1278)),
    // Spain
    ("madrid", (40.4168, -3.7038)),
    ("barcelone", (41.3851, 2.1734)),
    // Portugal
    ("lisbonne", (38.7223, -9.1393)),
    ("lisbon", (38.7223, -9.1393)),
    // Italy
    ("milan malpensa", (45.6301, 8.7231)),
    ("milan linate", (45.4449, 9.2766)),
    ("milan", (45.4654, 9.1859)),
    ("rome", (41.9028, 12.4964)),
    // Austria
    ("vienne", (48.2082, 16.3738)),
    // Czech Republic
    ("prague", (50.0755, 14.4378)),
    // Scandinavia
    ("copenhague", (55.6761, 12.5683)),
    ("oslo", (59.9139, 10.7522)),
    ("stockholm", (59.3293, 18.0686)),
    // Default region
    ("europe", (48.5, 10.0)),
    ("n/c", (48.5, 10.0)),
    // Additions for specific operators
    ("strasbourg", (48.5734, 7.7521)),
    ("mulhouse", (47.7508, 7.3359)),
    ("new york", (40.7128, -74.0060)),
];

/// ICAO/IATA airport codes to the place name used in [`PLACES`].
static AIRPORT_CODES: &[(&str, &str)] = &[
    // Switzerland
    ("LSGG", "Genève"),
    ("GVA", "Genève"),
    ("LSZH", "Zurich"),
    ("ZRH", "Zurich"),
    ("LSZB", "Berne"),
    ("LSZA", "Lugano"),
    ("LSGL", "Lausanne"),
    // France
    ("LFPG", "Paris CDG"),
    ("CDG", "Paris CDG"),
    ("LFPO", "Paris Orly"),
    ("ORY", "Paris Orly"),
    ("LFPB", "Le Bourget"),
    ("LFMN", "Nice"),
    ("NCE", "Nice"),
    ("LFLL", "Lyon"),
    ("LYS", "Lyon"),
    ("LFML", "Marseille"),
    ("MRS", "Marseille"),
    ("LFBO", "Toulouse"),
    ("TLS", "Toulouse"),
    ("LFRN", "Rennes"),
    ("RNS", "Rennes"),
    ("LFRS", "Nantes"),
    ("NTE", "Nantes"),
    ("LFSB", "Bâle-Mulhouse"),
    ("BSL", "Bâle-Mulhouse"),
    ("LFBD", "Bordeaux"),
    ("BOD", "Bordeaux"),
    ("LFLC", "Clermont-Ferrand"),
    ("CFE", "Clermont-Ferrand"),
    // Belgium
    ("EBBR", "Bruxelles"),
    ("BRU", "Bruxelles"),
    ("EBCI", "Charleroi"),
    ("EBLG", "Liège"),
    // Luxembourg
    ("ELLX", "Luxembourg"),
    ("LUX", "Luxembourg"),
    // Germany
    ("EDDF", "Francfort"),
    ("FRA", "Francfort"),
    ("EDDM", "Munich"),
    ("MUC", "Munich"),
    ("EDDB", "Berlin"),
    ("BER", "Berlin"),
    ("EDDL", "Düsseldorf"),
    ("DUS", "Düsseldorf"),
    ("EDDK", "Cologne"),
    ("CGN", "Cologne"),
    ("EDDS", "Stuttgart"),
    ("STR", "Stuttgart"),
    ("EDDH", "Hambourg"),
    ("HAM", "Hambourg"),
    ("EDRZ", "Zweibrücken"),
    // Netherlands
    ("EHAM", "Amsterdam"),
    ("AMS", "Amsterdam"),
    // UK
    ("EGLL", "Londres Heathrow"),
    ("LHR", "Londres Heathrow"),
    ("EGKK", "Londres Gatwick"),
    ("LGW", "Londres Gatwick"),
    ("EGLC", "Londres City"),
    ("LCY", "Londres City"),
    ("EGCC", "Manchester"),
    ("MAN", "Manchester"),
    ("EGTK", "Oxford"),
    // Spain
    ("LEMD", "Madrid"),
    ("MAD", "Madrid"),
    ("LEBL", "Barcelone"),
    ("BCN", "Barcelone"),
    // Portugal
    ("LPPT", "Lisbonne"),
    ("LIS", "Lisbonne"),
    // Italy
    ("LIRF", "Rome"),
    ("FCO", "Rome"),
    ("LIML", "Milan Linate"),
    ("LIN", "Milan Linate"),
    ("LIMC", "Milan Malpensa"),
    ("MXP", "Milan Malpensa"),
    // Austria
    ("LOWW", "Vienne"),
    ("VIE", "Vienne"),
    // Czech Republic
    ("LKPR", "Prague"),
    ("PRG", "Prague"),
    // Scandinavia
    ("EKCH", "Copenhague"),
    ("CPH", "Copenhague"),
    ("ENGM", "Oslo"),
    ("OSL", "Oslo"),
    ("ESSA", "Stockholm"),
    ("ARN", "Stockholm"),
];

lazy_static! {
    // 3-letter IATA or 4-letter ICAO code standing alone in the text
    static ref CODE_TOKEN: Regex = Regex::new(r"\b[A-Z]{3,4}\b").unwrap();
    static ref AIRPORTS: HashMap<&'static str, &'static str> =
        AIRPORT_CODES.iter().copied().collect();
}

/// Place name for the first ICAO/IATA code token found in the text, if any.
///
/// Used by sources whose titles embed the base airport (e.g. "PILOT PC12
/// LSGG") in preference to whatever location field the source exposes.
pub fn airport_place(text: &str) -> Option<&'static str> {
    let upper = text.to_uppercase();
    CODE_TOKEN
        .find_iter(&upper)
        .find_map(|token| AIRPORTS.get(token.as_str()).copied())
}

/// First place-name substring contained in the lower-cased input.
fn place_coords(text: &str) -> Option<(f64, f64)> {
    let lower = text.to_lowercase();
    PLACES
        .iter()
        .find(|(name, _)| lower.contains(name))
        .map(|(_, coords)| *coords)
}

/// Resolve free text to a coordinate pair. Airport code tokens take
/// precedence over place-name substrings; no match yields the continental
/// default. This function never fails.
pub fn resolve(text: &str) -> (f64, f64) {
    if let Some(place) = airport_place(text) {
        if let Some(coords) = place_coords(place) {
            return coords;
        }
    }
    place_coords(text).unwrap_or(DEFAULT_COORDS)
}
