//! Coordinates as stored in the GPS directory
//!
//! The GPS directory stores latitude and longitude as unsigned degree,
//! minute, second triples next to a hemisphere reference. This module turns
//! them into signed decimal degrees.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: Coord,
    pub lon: Coord,
}

impl Location {
    pub fn new_from_coord(lat: Coord, lon: Coord) -> Self {
        Self { lat, lon }
    }

    pub fn from_ref_coord(
        lat_ref: LatRef,
        lat: (f64, f64, f64),
        lon_ref: LonRef,
        lon: (f64, f64, f64),
    ) -> Self {
        let lat = Coord::from_sign_deg_min_sec(lat_ref.as_sign(), lat);
        let lon = Coord::from_sign_deg_min_sec(lon_ref.as_sign(), lon);

        Self { lat, lon }
    }

    /// Locations as `geo:` URI
    ///
    /// The precision of the coordinates is limited to six decimal places.
    ///
    /// ```
    /// # use kestrel_common::geography::*;
    /// let loc = Location::new_from_coord(Coord(51.5), Coord(-0.25));
    /// assert_eq!(loc.geo_uri(), "geo:51.500000,-0.250000");
    /// ```
    pub fn geo_uri(&self) -> String {
        let lat = self.lat.0;
        let lon = self.lon.0;
        format!("geo:{lat:.6},{lon:.6}")
    }
}

/// Signed decimal degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord(pub f64);

impl Coord {
    /// ```
    /// # use kestrel_common::geography::*;
    /// let ang = Coord::from_deg_min_sec((-89., 24., 2.2));
    /// assert_eq!((ang.0 * 100_000.).round() / 100_000., -89.40061);
    /// ```
    pub fn from_deg_min_sec((deg, min, sec): (f64, f64, f64)) -> Self {
        let sign = if deg.is_sign_negative() { -1. } else { 1. };
        Coord(deg + sign * min / 60. + sign * sec / 60. / 60.)
    }

    pub fn from_sign_deg_min_sec(sign: f64, deg_min_sec: (f64, f64, f64)) -> Self {
        Self(sign * Self::from_deg_min_sec(deg_min_sec).0)
    }

    /// Parses degree strings like `51,29.3716N` or `0,7,39.6W`
    ///
    /// Components are separated by commas and use a dot as decimal
    /// separator. Up to three components (degrees, minutes, seconds) are
    /// accepted. A trailing hemisphere letter or a leading minus sign makes
    /// the coordinate negative for `S` and `W`.
    ///
    /// ```
    /// # use kestrel_common::geography::*;
    /// let lat = Coord::parse_degrees("51,29.4N").unwrap();
    /// assert_eq!((lat.0 * 1000.).round() / 1000., 51.49);
    ///
    /// let lon = Coord::parse_degrees("0,7,30W").unwrap();
    /// assert_eq!(lon.0, -0.125);
    ///
    /// assert_eq!(Coord::parse_degrees("12.5").unwrap().0, 12.5);
    /// assert!(Coord::parse_degrees("1,2,3,4N").is_err());
    /// ```
    pub fn parse_degrees(value: &str) -> Result<Self, InvalidDegrees> {
        let invalid = || InvalidDegrees(value.to_string());

        let mut s = value.trim();
        let mut sign = 1.;

        if let Some(last) = s.chars().last() {
            match last {
                'N' | 'E' => s = &s[..s.len().saturating_sub(1)],
                'S' | 'W' => {
                    sign = -1.;
                    s = &s[..s.len().saturating_sub(1)];
                }
                _ => {}
            }
        }

        if let Some(rest) = s.strip_prefix('-') {
            sign = -sign;
            s = rest;
        }

        let mut components = [0.; 3];
        let mut n = 0_usize;
        for part in s.split(',') {
            let slot = components.get_mut(n).ok_or_else(invalid)?;
            *slot = part.trim().parse::<f64>().map_err(|_| invalid())?;
            n = n.checked_add(1).ok_or_else(invalid)?;
        }

        if components.iter().any(|x| x.is_sign_negative() || !x.is_finite()) {
            return Err(invalid());
        }

        let [deg, min, sec] = components;
        Ok(Self::from_sign_deg_min_sec(sign, (deg, min, sec)))
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid degree string: '{0}'")]
pub struct InvalidDegrees(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatRef {
    North,
    South,
}

impl LatRef {
    pub fn as_sign(&self) -> f64 {
        match self {
            Self::North => 1.,
            Self::South => -1.,
        }
    }
}

impl TryFrom<&str> for LatRef {
    type Error = InvalidHemisphere;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "N" => Ok(Self::North),
            "S" => Ok(Self::South),
            v => Err(InvalidHemisphere(v.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LonRef {
    East,
    West,
}

impl LonRef {
    pub fn as_sign(&self) -> f64 {
        match self {
            Self::East => 1.,
            Self::West => -1.,
        }
    }
}

impl TryFrom<&str> for LonRef {
    type Error = InvalidHemisphere;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "E" => Ok(Self::East),
            "W" => Ok(Self::West),
            v => Err(InvalidHemisphere(v.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid hemisphere reference: '{0}'")]
pub struct InvalidHemisphere(pub String);
