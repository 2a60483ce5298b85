use crate::ConversionErrors;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The independent conversion tables. Each table has its own tag domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    Position,
    Direction,
    Vector,
    IncrementalPosition,
    IncrementalVector,
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Family::Position => "position",
                Family::Direction => "direction",
                Family::Vector => "vector",
                Family::IncrementalPosition => "incremental position",
                Family::IncrementalVector => "incremental vector",
            }
        )
    }
}

/// A coordinate system identifier usable as a row or column index of a
/// conversion table.
pub trait CoordinateTag: Copy + fmt::Debug + PartialEq {
    const FAMILY: Family;
    fn index(self) -> usize;
    fn name(self) -> &'static str;
}

// Lowercase, '-' and ' ' folded to '_', so "Cylindrical-Polar" matches "cylindrical_polar".
fn normalize_name(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Coordinate systems a position can be expressed in.
///
/// Only rectangular cartesian, cylindrical polar and spherical polar have real
/// conversions. The spheroidal and fibre systems are accepted everywhere but
/// every conversion to or from them is the identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionSystem {
    #[default]
    RectangularCartesian,
    CylindricalPolar,
    SphericalPolar,
    ProlateSpheroidal,
    OblateSpheroidal,
    Fibre,
}

impl PositionSystem {
    pub const ALL: [PositionSystem; 6] = [
        PositionSystem::RectangularCartesian,
        PositionSystem::CylindricalPolar,
        PositionSystem::SphericalPolar,
        PositionSystem::ProlateSpheroidal,
        PositionSystem::OblateSpheroidal,
        PositionSystem::Fibre,
    ];
}

impl CoordinateTag for PositionSystem {
    const FAMILY: Family = Family::Position;

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            PositionSystem::RectangularCartesian => "rectangular_cartesian",
            PositionSystem::CylindricalPolar => "cylindrical_polar",
            PositionSystem::SphericalPolar => "spherical_polar",
            PositionSystem::ProlateSpheroidal => "prolate_spheroidal",
            PositionSystem::OblateSpheroidal => "oblate_spheroidal",
            PositionSystem::Fibre => "fibre",
        }
    }
}

impl TryFrom<usize> for PositionSystem {
    type Error = ConversionErrors;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ConversionErrors::InvalidCoordinateSystem {
                family: Self::FAMILY,
                index,
            })
    }
}

impl FromStr for PositionSystem {
    type Err = ConversionErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "rectangular_cartesian" | "rc" | "cartesian" => Ok(PositionSystem::RectangularCartesian),
            "cylindrical_polar" | "cp" | "cylindrical" => Ok(PositionSystem::CylindricalPolar),
            "spherical_polar" | "sp" | "spherical" => Ok(PositionSystem::SphericalPolar),
            "prolate_spheroidal" | "ps" => Ok(PositionSystem::ProlateSpheroidal),
            "oblate_spheroidal" | "os" => Ok(PositionSystem::OblateSpheroidal),
            "fibre" | "fiber" => Ok(PositionSystem::Fibre),
            _ => Err(ConversionErrors::UnknownCoordinateSystem(s.to_string())),
        }
    }
}

impl fmt::Display for PositionSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Coordinate systems a direction can be expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectionSystem {
    /// Azimuth, elevation and roll in degrees.
    #[default]
    Euler,
}

impl DirectionSystem {
    pub const ALL: [DirectionSystem; 1] = [DirectionSystem::Euler];
}

impl CoordinateTag for DirectionSystem {
    const FAMILY: Family = Family::Direction;

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            DirectionSystem::Euler => "euler",
        }
    }
}

impl TryFrom<usize> for DirectionSystem {
    type Error = ConversionErrors;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ConversionErrors::InvalidCoordinateSystem {
                family: Self::FAMILY,
                index,
            })
    }
}

impl FromStr for DirectionSystem {
    type Err = ConversionErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "euler" => Ok(DirectionSystem::Euler),
            _ => Err(ConversionErrors::UnknownCoordinateSystem(s.to_string())),
        }
    }
}

impl fmt::Display for DirectionSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Coordinate systems a free vector can be expressed in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VectorSystem {
    /// Cartesian components.
    #[default]
    Component,
    /// Magnitude, azimuth and elevation, angles in degrees.
    SphericalPolar,
}

impl VectorSystem {
    pub const ALL: [VectorSystem; 2] = [VectorSystem::Component, VectorSystem::SphericalPolar];
}

impl CoordinateTag for VectorSystem {
    const FAMILY: Family = Family::Vector;

    fn index(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            VectorSystem::Component => "component",
            VectorSystem::SphericalPolar => "spherical_polar",
        }
    }
}

impl TryFrom<usize> for VectorSystem {
    type Error = ConversionErrors;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ConversionErrors::InvalidCoordinateSystem {
                family: Self::FAMILY,
                index,
            })
    }
}

impl FromStr for VectorSystem {
    type Err = ConversionErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "component" | "components" => Ok(VectorSystem::Component),
            "spherical_polar" | "sp" | "spherical" => Ok(VectorSystem::SphericalPolar),
            _ => Err(ConversionErrors::UnknownCoordinateSystem(s.to_string())),
        }
    }
}

impl fmt::Display for VectorSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_indices_are_table_order() {
        for (i, system) in PositionSystem::ALL.iter().enumerate() {
            assert_eq!(system.index(), i);
            assert_eq!(PositionSystem::try_from(i), Ok(*system));
        }
    }

    #[test]
    fn test_invalid_index_is_rejected() {
        assert_eq!(
            PositionSystem::try_from(6),
            Err(ConversionErrors::InvalidCoordinateSystem {
                family: Family::Position,
                index: 6
            })
        );
        assert!(DirectionSystem::try_from(1).is_err());
        assert!(VectorSystem::try_from(2).is_err());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(
            "Cylindrical-Polar".parse::<PositionSystem>(),
            Ok(PositionSystem::CylindricalPolar)
        );
        assert_eq!("rc".parse::<PositionSystem>(), Ok(PositionSystem::RectangularCartesian));
        assert_eq!("EULER".parse::<DirectionSystem>(), Ok(DirectionSystem::Euler));
        assert_eq!("spherical polar".parse::<VectorSystem>(), Ok(VectorSystem::SphericalPolar));
        assert_eq!(
            "toroidal".parse::<PositionSystem>(),
            Err(ConversionErrors::UnknownCoordinateSystem("toroidal".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for system in PositionSystem::ALL {
            assert_eq!(system.to_string().parse::<PositionSystem>(), Ok(system));
        }
        for system in VectorSystem::ALL {
            assert_eq!(system.to_string().parse::<VectorSystem>(), Ok(system));
        }
    }
}
