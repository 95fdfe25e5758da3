//! Enumeration registry for georeferencing requests.
//!
//! Four value families are exposed to clients: coordinate system, datum,
//! coordinate source, and distance unit. Lookup is case-insensitive and exact
//! on the canonical name; an unrecognized name is `None`, never a default.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

/// Feet per meter, as used by the original accuracy tables.
pub const FEET_PER_METER: f64 = 3.2808399;

/// Notation of a latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSystem {
    /// Decimal degrees
    DecimalDegrees,
    /// Degrees decimal minutes
    DegreesDecimalMinutes,
    /// Degrees minutes seconds
    DegreesMinutesSeconds,
}

impl CoordinateSystem {
    /// All systems, in declared order.
    pub const ALL: &'static [CoordinateSystem] = &[
        CoordinateSystem::DecimalDegrees,
        CoordinateSystem::DegreesDecimalMinutes,
        CoordinateSystem::DegreesMinutesSeconds,
    ];

    /// Canonical name used in requests and the constants listing.
    pub fn name(&self) -> &'static str {
        match self {
            CoordinateSystem::DecimalDegrees => "DD",
            CoordinateSystem::DegreesDecimalMinutes => "DDM",
            CoordinateSystem::DegreesMinutesSeconds => "DMS",
        }
    }

    /// Case-insensitive lookup by canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

/// Geodetic reference frame of a coordinate pair.
///
/// Each datum carries the ellipsoid parameters from the original datum
/// transformation table; the constants endpoint serializes them so clients
/// can present meaningful choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Datum {
    Wgs84,
    Nad27,
    Nad83,
    Ed50,
    Osgb36,
    Sad69,
    Tokyo,
    Agd66,
    Agd84,
    Anna1Astro1965,
    Arc1950,
    Pulkovo1942,
}

impl Datum {
    /// All datums, in declared order.
    pub const ALL: &'static [Datum] = &[
        Datum::Wgs84,
        Datum::Nad27,
        Datum::Nad83,
        Datum::Ed50,
        Datum::Osgb36,
        Datum::Sad69,
        Datum::Tokyo,
        Datum::Agd66,
        Datum::Agd84,
        Datum::Anna1Astro1965,
        Datum::Arc1950,
        Datum::Pulkovo1942,
    ];

    /// Canonical name used in requests and the constants listing.
    pub fn name(&self) -> &'static str {
        match self {
            Datum::Wgs84 => "WGS84",
            Datum::Nad27 => "NAD27",
            Datum::Nad83 => "NAD83",
            Datum::Ed50 => "ED50",
            Datum::Osgb36 => "OSGB36",
            Datum::Sad69 => "SAD69",
            Datum::Tokyo => "TOKYO",
            Datum::Agd66 => "AGD66",
            Datum::Agd84 => "AGD84",
            Datum::Anna1Astro1965 => "ANNA_1_ASTRO_1965",
            Datum::Arc1950 => "ARC1950",
            Datum::Pulkovo1942 => "PULKOVO_1942",
        }
    }

    /// Descriptive title of the datum.
    pub fn title(&self) -> &'static str {
        match self {
            Datum::Wgs84 => "World Geodetic System 1984",
            Datum::Nad27 => "North American Datum 1927",
            Datum::Nad83 => "North American Datum 1983",
            Datum::Ed50 => "European Datum 1950",
            Datum::Osgb36 => "Ordnance Survey of Great Britain 1936",
            Datum::Sad69 => "South American Datum 1969",
            Datum::Tokyo => "Tokyo Datum",
            Datum::Agd66 => "Australian Geodetic Datum 1966",
            Datum::Agd84 => "Australian Geodetic Datum 1984",
            Datum::Anna1Astro1965 => "Anna 1 Astro 1965",
            Datum::Arc1950 => "Arc 1950",
            Datum::Pulkovo1942 => "Pulkovo 1942",
        }
    }

    /// Name of the reference ellipsoid.
    pub fn ellipsoid(&self) -> &'static str {
        match self {
            Datum::Wgs84 => "WGS 84",
            Datum::Nad27 => "Clarke 1866",
            Datum::Nad83 => "GRS 1980",
            Datum::Ed50 => "International 1924",
            Datum::Osgb36 => "Airy 1830",
            Datum::Sad69 => "GRS 1967",
            Datum::Tokyo => "Bessel 1841",
            Datum::Agd66 | Datum::Agd84 | Datum::Anna1Astro1965 => "Australian National",
            Datum::Arc1950 => "Clarke 1880",
            Datum::Pulkovo1942 => "Krassovsky 1940",
        }
    }

    /// Inverse flattening (1/f) of the reference ellipsoid.
    pub fn inverse_flattening(&self) -> f64 {
        match self {
            Datum::Wgs84 => 298.257223563,
            Datum::Nad27 => 294.9786982,
            Datum::Nad83 => 298.257222101,
            Datum::Ed50 => 297.0,
            Datum::Osgb36 => 299.3249646,
            Datum::Sad69 => 298.25,
            Datum::Tokyo => 299.1528128,
            Datum::Agd66 | Datum::Agd84 | Datum::Anna1Astro1965 => 298.25,
            Datum::Arc1950 => 293.465,
            Datum::Pulkovo1942 => 298.3,
        }
    }

    /// Semi-major axis of the reference ellipsoid, in meters.
    pub fn semi_major_axis_m(&self) -> f64 {
        match self {
            Datum::Wgs84 => 6_378_137.0,
            Datum::Nad27 => 6_378_206.4,
            Datum::Nad83 => 6_378_137.0,
            Datum::Ed50 => 6_378_388.0,
            Datum::Osgb36 => 6_377_563.396,
            Datum::Sad69 => 6_378_160.0,
            Datum::Tokyo => 6_377_397.155,
            Datum::Agd66 | Datum::Agd84 | Datum::Anna1Astro1965 => 6_378_160.0,
            Datum::Arc1950 => 6_378_249.145,
            Datum::Pulkovo1942 => 6_378_245.0,
        }
    }

    /// Case-insensitive lookup by canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }
}

/// Provenance of a coordinate pair, with the ground accuracy implied by the
/// source. Map-scale sources carry the horizontal accuracy of the map
/// series: meters for the NTS and OTHER series, feet for the USGS series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSource {
    Gazetteer,
    Gps,
    LocalityDescription,
    NtsA250000,
    NtsA50000,
    NtsB250000,
    NtsB50000,
    NtsC250000,
    NtsC50000,
    Other10000,
    Other100000,
    Other1000000,
    Other150000,
    Other180000,
    Other20000,
    Other200000,
    Other2500,
    Other250000,
    Other2500000,
    Other3000000,
    Other32500,
    Other40000,
    Other50000,
    Other500000,
    Other60000,
    Other62500,
    Other80000,
    Usgs100000,
    Usgs10000,
    Usgs1200,
    Usgs12000,
    Usgs2400,
    Usgs24000,
    Usgs25000,
    Usgs250000,
    Usgs4800,
    Usgs63360,
}

impl CoordinateSource {
    /// All sources, in declared order.
    pub const ALL: &'static [CoordinateSource] = &[
        CoordinateSource::Gazetteer,
        CoordinateSource::Gps,
        CoordinateSource::LocalityDescription,
        CoordinateSource::NtsA250000,
        CoordinateSource::NtsA50000,
        CoordinateSource::NtsB250000,
        CoordinateSource::NtsB50000,
        CoordinateSource::NtsC250000,
        CoordinateSource::NtsC50000,
        CoordinateSource::Other10000,
        CoordinateSource::Other100000,
        CoordinateSource::Other1000000,
        CoordinateSource::Other150000,
        CoordinateSource::Other180000,
        CoordinateSource::Other20000,
        CoordinateSource::Other200000,
        CoordinateSource::Other2500,
        CoordinateSource::Other250000,
        CoordinateSource::Other2500000,
        CoordinateSource::Other3000000,
        CoordinateSource::Other32500,
        CoordinateSource::Other40000,
        CoordinateSource::Other50000,
        CoordinateSource::Other500000,
        CoordinateSource::Other60000,
        CoordinateSource::Other62500,
        CoordinateSource::Other80000,
        CoordinateSource::Usgs100000,
        CoordinateSource::Usgs10000,
        CoordinateSource::Usgs1200,
        CoordinateSource::Usgs12000,
        CoordinateSource::Usgs2400,
        CoordinateSource::Usgs24000,
        CoordinateSource::Usgs25000,
        CoordinateSource::Usgs250000,
        CoordinateSource::Usgs4800,
        CoordinateSource::Usgs63360,
    ];

    /// Canonical name used in requests and the constants listing.
    pub fn name(&self) -> &'static str {
        match self {
            CoordinateSource::Gazetteer => "GAZETTEER",
            CoordinateSource::Gps => "GPS",
            CoordinateSource::LocalityDescription => "LOCALITY_DESCRIPTION",
            CoordinateSource::NtsA250000 => "NTS_A_1_TO_250000",
            CoordinateSource::NtsA50000 => "NTS_A_1_TO_50000",
            CoordinateSource::NtsB250000 => "NTS_B_1_TO_250000",
            CoordinateSource::NtsB50000 => "NTS_B_1_TO_50000",
            CoordinateSource::NtsC250000 => "NTS_C_1_TO_250000",
            CoordinateSource::NtsC50000 => "NTS_C_1_TO_50000",
            CoordinateSource::Other10000 => "OTHER_1_TO_10000",
            CoordinateSource::Other100000 => "OTHER_1_TO_100000",
            CoordinateSource::Other1000000 => "OTHER_1_TO_1000000",
            CoordinateSource::Other150000 => "OTHER_1_TO_150000",
            CoordinateSource::Other180000 => "OTHER_1_TO_180000",
            CoordinateSource::Other20000 => "OTHER_1_TO_20000",
            CoordinateSource::Other200000 => "OTHER_1_TO_200000",
            CoordinateSource::Other2500 => "OTHER_1_TO_2500",
            CoordinateSource::Other250000 => "OTHER_1_TO_250000",
            CoordinateSource::Other2500000 => "OTHER_1_TO_2500000",
            CoordinateSource::Other3000000 => "OTHER_1_TO_3000000",
            CoordinateSource::Other32500 => "OTHER_1_TO_32500",
            CoordinateSource::Other40000 => "OTHER_1_TO_40000",
            CoordinateSource::Other50000 => "OTHER_1_TO_50000",
            CoordinateSource::Other500000 => "OTHER_1_TO_500000",
            CoordinateSource::Other60000 => "OTHER_1_TO_60000",
            CoordinateSource::Other62500 => "OTHER_1_TO_62500",
            CoordinateSource::Other80000 => "OTHER_1_TO_80000",
            CoordinateSource::Usgs100000 => "USGS_1_TO_100000",
            CoordinateSource::Usgs10000 => "USGS_1_TO_10000",
            CoordinateSource::Usgs1200 => "USGS_1_TO_1200",
            CoordinateSource::Usgs12000 => "USGS_1_TO_12000",
            CoordinateSource::Usgs2400 => "USGS_1_TO_2400",
            CoordinateSource::Usgs24000 => "USGS_1_TO_24000",
            CoordinateSource::Usgs25000 => "USGS_1_TO_25000",
            CoordinateSource::Usgs250000 => "USGS_1_TO_250000",
            CoordinateSource::Usgs4800 => "USGS_1_TO_4800",
            CoordinateSource::Usgs63360 => "USGS_1_TO_63360",
        }
    }

    /// Ground accuracy of the source in feet. The underlying accuracy
    /// tables record the NTS and OTHER map series in meters (converted
    /// here) and the USGS series in feet. Point-like sources (gazetteer,
    /// GPS, locality description) are 0.
    pub fn accuracy_feet(&self) -> f64 {
        match self {
            CoordinateSource::Gazetteer
            | CoordinateSource::Gps
            | CoordinateSource::LocalityDescription => 0.0,
            CoordinateSource::NtsA250000 => 125.0 * FEET_PER_METER,
            CoordinateSource::NtsA50000 => 25.0 * FEET_PER_METER,
            CoordinateSource::NtsB250000 => 250.0 * FEET_PER_METER,
            CoordinateSource::NtsB50000 => 50.0 * FEET_PER_METER,
            CoordinateSource::NtsC250000 => 375.0 * FEET_PER_METER,
            CoordinateSource::NtsC50000 => 75.0 * FEET_PER_METER,
            CoordinateSource::Other10000 => 10.0 * FEET_PER_METER,
            CoordinateSource::Other100000 => 100.0 * FEET_PER_METER,
            CoordinateSource::Other1000000 => 1000.0 * FEET_PER_METER,
            CoordinateSource::Other150000 => 150.0 * FEET_PER_METER,
            CoordinateSource::Other180000 => 180.0 * FEET_PER_METER,
            CoordinateSource::Other20000 => 20.0 * FEET_PER_METER,
            CoordinateSource::Other200000 => 200.0 * FEET_PER_METER,
            CoordinateSource::Other2500 => 2.5 * FEET_PER_METER,
            CoordinateSource::Other250000 => 250.0 * FEET_PER_METER,
            CoordinateSource::Other2500000 => 2500.0 * FEET_PER_METER,
            CoordinateSource::Other3000000 => 3000.0 * FEET_PER_METER,
            CoordinateSource::Other32500 => 32.5 * FEET_PER_METER,
            CoordinateSource::Other40000 => 40.0 * FEET_PER_METER,
            CoordinateSource::Other50000 => 50.0 * FEET_PER_METER,
            CoordinateSource::Other500000 => 500.0 * FEET_PER_METER,
            CoordinateSource::Other60000 => 60.0 * FEET_PER_METER,
            CoordinateSource::Other62500 => 62.5 * FEET_PER_METER,
            CoordinateSource::Other80000 => 80.0 * FEET_PER_METER,
            CoordinateSource::Usgs100000 => 167.0,
            CoordinateSource::Usgs10000 => 27.8,
            CoordinateSource::Usgs1200 => 3.3,
            CoordinateSource::Usgs12000 => 33.3,
            CoordinateSource::Usgs2400 => 6.7,
            CoordinateSource::Usgs24000 => 40.0,
            CoordinateSource::Usgs25000 => 41.8,
            CoordinateSource::Usgs250000 => 417.0,
            CoordinateSource::Usgs4800 => 13.3,
            CoordinateSource::Usgs63360 => 106.0,
        }
    }

    /// Ground accuracy of the source in meters.
    pub fn accuracy_meters(&self) -> f64 {
        self.accuracy_feet() / FEET_PER_METER
    }

    /// Case-insensitive lookup by canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }
}

/// Units a distance value can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    Foot,
    Kilometer,
    Meter,
    Mile,
    NauticalMile,
    Yard,
}

impl DistanceUnit {
    /// All units, in declared order.
    pub const ALL: &'static [DistanceUnit] = &[
        DistanceUnit::Foot,
        DistanceUnit::Kilometer,
        DistanceUnit::Meter,
        DistanceUnit::Mile,
        DistanceUnit::NauticalMile,
        DistanceUnit::Yard,
    ];

    /// Canonical name used in requests and the constants listing.
    pub fn name(&self) -> &'static str {
        match self {
            DistanceUnit::Foot => "FOOT",
            DistanceUnit::Kilometer => "KILOMETER",
            DistanceUnit::Meter => "METER",
            DistanceUnit::Mile => "MILE",
            DistanceUnit::NauticalMile => "NAUTICAL_MILE",
            DistanceUnit::Yard => "YARD",
        }
    }

    /// Meters in one unit, from the original conversion table.
    pub fn meters_per_unit(&self) -> f64 {
        match self {
            DistanceUnit::Foot => 1.0 / FEET_PER_METER,
            DistanceUnit::Kilometer => 1000.0,
            DistanceUnit::Meter => 1.0,
            DistanceUnit::Mile => 1609.344,
            DistanceUnit::NauticalMile => 1851.989,
            DistanceUnit::Yard => 0.9144,
        }
    }

    /// Case-insensitive lookup by canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|u| u.name().eq_ignore_ascii_case(name))
    }

    /// Convert a distance between units via meters.
    pub fn convert(value: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
        if from == to {
            return value;
        }
        value * from.meters_per_unit() / to.meters_per_unit()
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for CoordinateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for CoordinateSystem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl Serialize for CoordinateSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl Serialize for DistanceUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// Datums serialize as objects so clients see the geodetic parameters.
impl Serialize for Datum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Datum", 5)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("title", self.title())?;
        state.serialize_field("ellipsoid", self.ellipsoid())?;
        state.serialize_field("inverseFlattening", &self.inverse_flattening())?;
        state.serialize_field("semiMajorAxis", &self.semi_major_axis_m())?;
        state.end()
    }
}
