use kestrel_common::exif::Field;
use kestrel_common::field;
use kestrel_common::geography::{Coord, LatRef, Location, LonRef};

use super::Exif;
use crate::error::{Error, Result};

impl Exif {
    /// Position where the image was taken
    ///
    /// Combines degrees, minutes and seconds with the hemisphere reference.
    pub fn lat_long(&self) -> Result<Location> {
        let lat_ref = LatRef::try_from(self.field::<field::GPSLatitudeRef>()?.string()?.as_str())?;
        let lon_ref =
            LonRef::try_from(self.field::<field::GPSLongitudeRef>()?.string()?.as_str())?;

        let lat = self.deg_min_sec::<field::GPSLatitude>()?;
        let lon = self.deg_min_sec::<field::GPSLongitude>()?;

        Ok(Location::from_ref_coord(lat_ref, lat, lon_ref, lon))
    }

    /// Latitude in signed decimal degrees
    pub fn latitude(&self) -> Result<Coord> {
        self.lat_long().map(|x| x.lat)
    }

    /// Longitude in signed decimal degrees
    pub fn longitude(&self) -> Result<Coord> {
        self.lat_long().map(|x| x.lon)
    }

    fn deg_min_sec<F: Field>(&self) -> Result<(f64, f64, f64)> {
        let values = self.field::<F>()?.rationals()?;

        let [deg, min, sec] = values else {
            return Err(Error::WrongCount {
                field: F::NAME,
                expected: 3,
                actual: values.len(),
            });
        };

        Ok((deg.to_f64()?, min.to_f64()?, sec.to_f64()?))
    }
}
