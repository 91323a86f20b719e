//! Static city coordinate lookup.
//!
//! Plants are placed on the map by city only. The table covers the major
//! Alabama localities plus the pilot sites; a city missing here means the
//! plant is left off the map. Extend coverage by adding rows.

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Lowercase city name to (latitude, longitude).
const CITY_COORDS: &[(&str, f64, f64)] = &[
    ("birmingham", 33.5207, -86.8025),
    ("montgomery", 32.3792, -86.3077),
    ("huntsville", 34.7304, -86.5861),
    ("mobile", 30.6954, -88.0399),
    ("tuscaloosa", 33.2098, -87.5692),
    ("hoover", 33.4054, -86.8114),
    ("dothan", 31.2232, -85.3905),
    ("auburn", 32.6099, -85.4808),
    ("decatur", 34.6059, -86.9833),
    ("madison", 34.6993, -86.7483),
    ("florence", 34.7998, -87.6772),
    ("gadsden", 34.0143, -86.0066),
    ("vestavia hills", 33.4487, -86.7878),
    ("prattville", 32.4640, -86.4597),
    ("phenix city", 32.4709, -85.0008),
    ("alabaster", 33.2443, -86.8166),
    ("bessemer", 33.4018, -86.9544),
    ("enterprise", 31.3152, -85.8552),
    ("opelika", 32.6454, -85.3783),
    ("northport", 33.2290, -87.5772),
    ("anniston", 33.6598, -85.8316),
    ("mccalla", 33.2612, -87.0286),
    ("fairhope", 30.5230, -87.9033),
    ("daphne", 30.6035, -87.9036),
    ("selma", 32.4074, -87.0211),
    ("troy", 31.8088, -85.9700),
    ("pelham", 33.2857, -86.8094),
    ("oxford", 33.6140, -85.8347),
    ("trussville", 33.6198, -86.6089),
    ("alexander city", 32.9440, -85.9539),
    ("cullman", 34.1748, -86.8436),
    ("scottsboro", 34.6723, -86.0341),
    ("millbrook", 32.4799, -86.3619),
    ("athens", 34.8025, -86.9717),
    ("albertville", 34.2673, -86.2089),
    ("talladega", 33.4359, -86.1058),
    ("homewood", 33.4712, -86.8008),
    ("jasper", 33.8312, -87.2775),
    ("ozark", 31.4590, -85.6405),
    ("wetumpka", 32.5440, -86.2119),
    ("foley", 30.4066, -87.6836),
    ("gulf shores", 30.2460, -87.7008),
    ("spanish fort", 30.6749, -87.9153),
    ("rainbow city", 33.9548, -86.0419),
    ("sylacauga", 33.1732, -86.2516),
    ("pell city", 33.5862, -86.2861),
    ("hartselle", 34.4434, -86.9353),
    ("eufaula", 31.8913, -85.1455),
    ("saraland", 30.8207, -88.0706),
    ("fultondale", 33.6048, -86.7939),
    ("gardendale", 33.6601, -86.8128),
    ("center point", 33.6445, -86.6853),
    ("irondale", 33.5382, -86.7072),
    ("clay", 33.7023, -86.6014),
    ("moody", 33.5909, -86.5094),
    ("leeds", 33.5482, -86.5444),
    ("helena", 33.2962, -86.8436),
    ("calera", 33.1029, -86.7536),
    ("montevallo", 33.1007, -86.8644),
    ("clanton", 32.8388, -86.6294),
    // Pilot sites
    ("carol stream", 41.9125, -88.1348),
    ("lehigh", 40.5834, -75.5710),
];

/// Look up a city after trimming and lowercasing. No partial matching.
pub fn lookup(city: &str) -> Option<Coordinates> {
    let key = city.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    CITY_COORDS
        .iter()
        .find(|(name, _, _)| *name == key)
        .map(|&(_, lat, lon)| Coordinates { lat, lon })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact() {
        assert_eq!(
            lookup("mobile"),
            Some(Coordinates { lat: 30.6954, lon: -88.0399 })
        );
    }

    #[test]
    fn test_lookup_normalizes_case_and_whitespace() {
        assert_eq!(lookup("  Vestavia Hills "), lookup("vestavia hills"));
        assert!(lookup("CAROL STREAM").is_some());
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(lookup("Springfield"), None);
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("   "), None);
        // No partial matches
        assert_eq!(lookup("Mobil"), None);
        assert_eq!(lookup("North Mobile"), None);
    }

    #[test]
    fn test_table_keys_are_normalized_and_unique() {
        for (i, (name, _, _)) in CITY_COORDS.iter().enumerate() {
            assert_eq!(*name, name.trim().to_lowercase());
            assert!(
                CITY_COORDS[i + 1..].iter().all(|(other, _, _)| other != name),
                "duplicate city {}",
                name
            );
        }
    }
}
