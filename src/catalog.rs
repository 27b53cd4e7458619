use std::collections::BTreeMap;

use crate::error::{GeoRouteError, GeoRouteResult};

/// A named geographic point. Catalog entries are built once and never
/// mutated; sampling and projection only read them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoPoint {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }

    fn usable(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

/// The static table of named locations routes are sampled from.
///
/// Entries with missing or non-finite coordinates are excluded at
/// construction, so everything inside a `Catalog` is usable by the sampler.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    points: Vec<GeoPoint>,
}

impl Catalog {
    /// The built-in country/territory centroid table.
    pub fn builtin() -> Self {
        Self {
            points: BUILTIN_COORDS
                .iter()
                .map(|&(name, lat, lon)| GeoPoint::new(name, lat, lon))
                .collect(),
        }
    }

    pub fn from_points(points: impl IntoIterator<Item = GeoPoint>) -> Self {
        let points: Vec<GeoPoint> = points.into_iter().filter(GeoPoint::usable).collect();
        Self { points }
    }

    /// Load a custom catalog from a JSON map of `name -> { lat, lon }`.
    /// Entries missing either coordinate are skipped, not rejected.
    pub fn from_json(s: &str) -> GeoRouteResult<Self> {
        #[derive(serde::Deserialize)]
        struct RawCoord {
            lat: Option<f64>,
            lon: Option<f64>,
        }

        let raw: BTreeMap<String, RawCoord> =
            serde_json::from_str(s).map_err(|e| GeoRouteError::serde(e.to_string()))?;

        let points = raw.into_iter().filter_map(|(name, coord)| {
            let (Some(lat), Some(lon)) = (coord.lat, coord.lon) else {
                tracing::debug!(name, "skipping catalog entry without coordinates");
                return None;
            };
            Some(GeoPoint::new(name, lat, lon))
        });

        Ok(Self::from_points(points))
    }

    /// Subset of the catalog matching `names`, in catalog order. Unknown
    /// names are ignored.
    pub fn select(&self, names: &[String]) -> Vec<GeoPoint> {
        self.points
            .iter()
            .filter(|p| names.iter().any(|n| n == &p.name))
            .cloned()
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&GeoPoint> {
        self.points.iter().find(|p| p.name == name)
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Simplified centroid lookup for countries and territories.
const BUILTIN_COORDS: &[(&str, f64, f64)] = &[
    ("Singapore", 1.3521, 103.8198),
    ("India", 20.5937, 78.9629),
    ("UAE", 23.4241, 53.8478),
    ("Germany", 51.1657, 10.4515),
    ("UK", 55.3781, -3.4360),
    ("USA", 37.0902, -95.7129),
    ("China", 35.8617, 104.1954),
    ("Australia", -25.2744, 133.7751),
    ("Japan", 36.2048, 138.2529),
    ("SouthKorea", 35.9078, 127.7669),
    ("Thailand", 15.8700, 100.9925),
    ("Malaysia", 4.2105, 101.9758),
    ("Indonesia", -0.7893, 113.9213),
    ("Philippines", 12.8797, 121.7740),
    ("Vietnam", 14.0583, 108.2772),
    ("Brazil", -14.2350, -51.9253),
    ("Mexico", 23.6345, -102.5528),
    ("Canada", 56.1304, -106.3468),
    ("France", 46.2276, 2.2137),
    ("Italy", 41.8719, 12.5674),
    ("Spain", 40.4637, -3.7492),
    ("Netherlands", 52.1326, 5.2913),
    ("Belgium", 50.5039, 4.4699),
    ("Switzerland", 46.8182, 8.2275),
    ("Austria", 47.5162, 14.5501),
    ("Poland", 51.9194, 19.1451),
    ("Czech", 49.8175, 15.4730),
    ("Hungary", 47.1625, 19.5033),
    ("Romania", 45.9432, 24.9668),
    ("Bulgaria", 42.7339, 25.4858),
    ("Greece", 39.0742, 21.8243),
    ("Turkey", 38.9637, 35.2433),
    ("Russia", 61.5240, 105.3188),
    ("Ukraine", 48.3794, 31.1656),
    ("Kazakhstan", 48.0196, 66.9237),
    ("Uzbekistan", 41.3775, 64.5853),
    ("Pakistan", 30.3753, 69.3451),
    ("Bangladesh", 23.6850, 90.3563),
    ("SriLanka", 7.8731, 80.7718),
    ("Myanmar", 21.9162, 95.9560),
    ("Cambodia", 12.5657, 104.9910),
    ("Laos", 19.8563, 102.4955),
    ("Mongolia", 46.8625, 103.8467),
    ("Taiwan", 23.6978, 120.9605),
    ("HongKong", 22.3193, 114.1694),
    ("Macau", 22.1987, 113.5439),
    ("NorthKorea", 40.3399, 127.5101),
    ("Afghanistan", 33.9391, 67.7100),
    ("Iran", 32.4279, 53.6880),
    ("Iraq", 33.2232, 43.6793),
    ("SaudiArabia", 23.8859, 45.0792),
    ("Kuwait", 29.3117, 47.4818),
    ("Bahrain", 25.9304, 50.6378),
    ("Qatar", 25.3548, 51.1839),
    ("Oman", 21.5126, 55.9233),
    ("Yemen", 15.5527, 48.5164),
    ("Jordan", 30.5852, 36.2384),
    ("Lebanon", 33.8547, 35.8623),
    ("Syria", 34.8021, 38.9968),
    ("Israel", 31.0461, 34.8516),
    ("Palestine", 31.9522, 35.2332),
    ("Egypt", 26.0963, 29.9870),
    ("Libya", 26.3351, 17.2283),
    ("Tunisia", 33.8869, 9.5375),
    ("Algeria", 28.0339, 1.6596),
    ("Morocco", 31.7917, -7.0926),
    ("Portugal", 39.3999, -8.2245),
    ("Ireland", 53.4129, -8.2439),
    ("Denmark", 56.2639, 9.5018),
    ("Sweden", 60.1282, 18.6435),
    ("Norway", 60.4720, 8.4689),
    ("Finland", 61.9241, 25.7482),
    ("Estonia", 58.5953, 25.0136),
    ("Latvia", 56.8796, 24.6032),
    ("Lithuania", 55.1694, 23.8813),
    ("Belarus", 53.7098, 27.9534),
    ("Moldova", 47.4116, 28.3699),
    ("Georgia", 42.3154, 43.3569),
    ("Armenia", 40.0691, 45.0382),
    ("Azerbaijan", 40.1431, 47.5769),
    ("Kyrgyzstan", 41.2044, 74.7661),
    ("Tajikistan", 38.8610, 71.2761),
    ("Turkmenistan", 38.9697, 59.5563),
    ("Nepal", 28.3949, 84.1240),
    ("Bhutan", 27.5142, 90.4336),
    ("Maldives", 3.2028, 73.2207),
    ("Brunei", 4.5353, 114.7277),
    ("EastTimor", -8.8742, 125.7275),
    ("PapuaNewGuinea", -6.3149, 143.9555),
    ("Fiji", -17.7134, 178.0650),
    ("SolomonIslands", -9.6457, 160.1562),
    ("Vanuatu", -15.3767, 166.9592),
    ("Samoa", -13.7590, -172.1046),
    ("Tonga", -21.1789, -175.1982),
    ("Kiribati", -3.3704, -168.7340),
    ("Tuvalu", -7.1095, 177.6493),
    ("MarshallIslands", 7.1315, 171.1845),
    ("Micronesia", 7.4256, 150.5508),
    ("Palau", 7.5149, 134.5825),
    ("Nauru", -0.5228, 166.9315),
    ("NewZealand", -40.9006, 174.8860),
    ("Argentina", -38.4161, -63.6167),
    ("Chile", -35.6751, -71.5430),
    ("Peru", -9.1900, -75.0152),
    ("Colombia", 4.5709, -74.2973),
    ("Venezuela", 6.4238, -66.5897),
    ("Ecuador", -1.8312, -78.1834),
    ("Bolivia", -16.2902, -63.5887),
    ("Paraguay", -23.4425, -58.4438),
    ("Uruguay", -32.5228, -55.7658),
    ("Guyana", 4.8604, -58.9302),
    ("Suriname", 3.9193, -56.0278),
    ("FrenchGuiana", 3.9339, -53.1258),
    ("Panama", 8.5380, -80.7821),
    ("CostaRica", 9.7489, -83.7534),
    ("Nicaragua", 12.8654, -85.2072),
    ("Honduras", 15.2000, -86.2419),
    ("ElSalvador", 13.7942, -88.8965),
    ("Guatemala", 15.7835, -90.2308),
    ("Belize", 17.1899, -88.4976),
    ("Cuba", 21.5218, -77.7812),
    ("Haiti", 18.9712, -72.2852),
    ("DominicanRepublic", 18.7357, -70.1627),
    ("Jamaica", 18.1096, -77.2975),
    ("TrinidadTobago", 10.6918, -61.2225),
    ("Barbados", 13.1939, -59.5432),
    ("Bahamas", 25.0343, -77.3963),
    ("Iceland", 64.9631, -19.0208),
    ("Greenland", 71.7069, -42.6043),
    ("FaroeIslands", 61.8926, -6.9118),
    ("Albania", 41.1533, 20.1683),
    ("NorthMacedonia", 41.6086, 21.7453),
    ("Montenegro", 42.7087, 19.3744),
    ("Kosovo", 42.6026, 20.9030),
    ("Serbia", 44.0165, 21.0059),
    ("BosniaHerzegovina", 43.9159, 17.6791),
    ("Croatia", 45.1000, 15.2000),
    ("Slovenia", 46.1512, 14.9955),
    ("Slovakia", 48.6690, 19.6990),
    ("Luxembourg", 49.8153, 6.1296),
    ("Malta", 35.9375, 14.3754),
    ("Cyprus", 35.1264, 33.4299),
    ("Andorra", 42.5063, 1.5218),
    ("Monaco", 43.7384, 7.4246),
    ("SanMarino", 43.9424, 12.4578),
    ("VaticanCity", 41.9029, 12.4534),
    ("Liechtenstein", 47.1660, 9.5554),
    ("SouthAfrica", -30.5595, 22.9375),
    ("Namibia", -22.9576, 18.4904),
    ("Botswana", -22.3285, 24.6849),
    ("Zimbabwe", -19.0154, 29.1549),
    ("Zambia", -13.1339, 27.8493),
    ("Malawi", -13.2543, 34.3015),
    ("Mozambique", -18.6657, 35.5296),
    ("Tanzania", -6.3690, 34.8888),
    ("Kenya", -0.0236, 37.9062),
    ("Uganda", 1.3733, 32.2903),
    ("Rwanda", -1.9403, 29.8739),
    ("Burundi", -3.3731, 29.9189),
    ("Ethiopia", 9.1450, 38.7379),
    ("Somalia", 5.1521, 46.1996),
    ("Djibouti", 11.8251, 42.5903),
    ("Eritrea", 15.1794, 39.7823),
    ("Sudan", 12.8628, 30.2176),
    ("SouthSudan", 6.8770, 31.3070),
    ("Chad", 15.4542, 18.7322),
    ("Niger", 17.6078, 8.0817),
    ("Mali", 17.5707, -3.9962),
    ("BurkinaFaso", 12.2383, -1.5616),
    ("Ghana", 7.9465, -1.0232),
    ("Togo", 8.6195, 0.8248),
    ("Benin", 9.3077, 2.3158),
    ("Nigeria", 9.0820, 8.6753),
    ("Cameroon", 7.3697, 12.3547),
    ("CentralAfricanRepublic", 6.6111, 20.9394),
    ("EquatorialGuinea", 1.6508, 10.2679),
    ("Gabon", -0.8037, 11.6094),
    ("Congo", -0.2280, 15.8277),
    ("DemocraticRepublicCongo", -4.0383, 21.7587),
    ("Angola", -11.2027, 17.8739),
    ("Madagascar", -18.7669, 46.8691),
    ("Mauritius", -20.3484, 57.5522),
    ("Seychelles", -4.6796, 55.4920),
    ("Comoros", -11.8750, 43.8722),
    ("Mayotte", -12.8275, 45.1662),
    ("Reunion", -21.1151, 55.5364),
    ("CapeVerde", 16.0021, -24.0132),
    ("SaoTomePrincipe", 0.1864, 6.6131),
    ("GuineaBissau", 11.8037, -15.1804),
    ("Guinea", 9.9456, -9.6966),
    ("SierraLeone", 8.4606, -11.7799),
    ("Liberia", 6.4281, -9.4295),
    ("IvoryCoast", 7.5400, -5.5471),
    ("Senegal", 14.4974, -14.4524),
    ("Gambia", 13.4432, -15.3101),
    ("Mauritania", 21.0079, -10.9408),
    ("WesternSahara", 24.2155, -12.8858),
    ("Lesotho", -29.6099, 28.2336),
    ("Eswatini", -26.5225, 31.4659),
    ("AmericanSamoa", -14.2710, -170.1322),
    ("CookIslands", -21.2367, -159.7777),
    ("FrenchPolynesia", -17.6797, -149.4068),
    ("Guam", 13.4443, 144.7937),
    ("NewCaledonia", -20.9043, 165.6180),
    ("NorthernMarianaIslands", 17.3308, 145.3847),
    ("PuertoRico", 18.2208, -66.5901),
    ("USVirginIslands", 18.3358, -64.8963),
    ("Aruba", 12.5211, -69.9683),
    ("Curacao", 12.1696, -68.9900),
    ("SintMaarten", 18.0425, -63.0548),
    ("TurksCaicos", 21.6940, -71.7979),
    ("CaymanIslands", 19.5135, -80.5660),
    ("Bermuda", 32.3078, -64.7505),
    ("Gibraltar", 36.1408, -5.3536),
    ("Guernsey", 49.4657, -2.5853),
    ("IsleMan", 54.2361, -4.5481),
    ("Jersey", 49.2144, -2.1312),
    ("FalklandIslands", -51.7963, -59.5236),
    ("SouthGeorgia", -54.4296, -36.5879),
    ("SaintHelena", -24.1435, -10.0307),
    ("AscensionIsland", -7.9467, -14.3559),
    ("TristanDaCunha", -37.1052, -12.2777),
    ("BouvetIsland", -54.4208, 3.3464),
    ("BritishIndianOceanTerritory", -6.3432, 71.8765),
    ("FrenchSouthernTerritories", -49.2804, 69.3486),
    ("HeardIsland", -53.0818, 73.5042),
    ("McDonaldIslands", -53.0818, 73.5042),
    ("Antarctica", -82.8628, 135.0000),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_nonempty_and_usable() {
        let catalog = Catalog::builtin();
        assert!(catalog.len() > 200);
        assert!(catalog.points().iter().all(GeoPoint::usable));
    }

    #[test]
    fn builtin_spot_checks() {
        let catalog = Catalog::builtin();
        let sg = catalog.get("Singapore").unwrap();
        assert_eq!(sg.lat, 1.3521);
        assert_eq!(sg.lon, 103.8198);
        assert!(catalog.get("Atlantis").is_none());
    }

    #[test]
    fn select_preserves_catalog_order_and_skips_unknown() {
        let catalog = Catalog::builtin();
        let picked = catalog.select(&[
            "Japan".to_string(),
            "Atlantis".to_string(),
            "Singapore".to_string(),
        ]);
        let names: Vec<&str> = picked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Singapore", "Japan"]);
    }

    #[test]
    fn from_json_skips_incomplete_entries() {
        let catalog = Catalog::from_json(
            r#"{
                "Aplace": { "lat": 10.0, "lon": 20.0 },
                "NoLon": { "lat": 5.0 },
                "NoLat": { "lon": 7.0 },
                "Equator": { "lat": 0.0, "lon": 0.0 }
            }"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get("Aplace").is_some());
        // A coordinate of exactly zero is valid, not missing.
        assert!(catalog.get("Equator").is_some());
        assert!(catalog.get("NoLon").is_none());
    }

    #[test]
    fn from_json_rejects_malformed_documents() {
        assert!(Catalog::from_json("not json").is_err());
    }

    #[test]
    fn from_points_drops_non_finite_coordinates() {
        let catalog = Catalog::from_points([
            GeoPoint::new("Good", 1.0, 2.0),
            GeoPoint::new("Bad", f64::NAN, 2.0),
        ]);
        assert_eq!(catalog.len(), 1);
    }
}
