use crate::{
    ConversionErrors, Triple,
    conversion::{Conversion, IncrementalConversion},
    systems::{CoordinateTag, DirectionSystem, Family, PositionSystem, VectorSystem},
};
use lazy_static::lazy_static;

/// A dense `ROWS` x `COLS` table of conversions, indexed by
/// (source system, destination system).
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionTable<C, const ROWS: usize, const COLS: usize> {
    family: Family,
    cells: [[C; COLS]; ROWS],
}

impl<C: Copy + Default, const ROWS: usize, const COLS: usize> ConversionTable<C, ROWS, COLS> {
    /// A table where every cell holds the default (pass through) conversion.
    pub fn new(family: Family) -> Self {
        Self {
            family,
            cells: [[C::default(); COLS]; ROWS],
        }
    }

    /// Overwrites one cell. Indices outside the table are ignored.
    fn with(mut self, from: usize, to: usize, cell: C) -> Self {
        if let Some(slot) = self.cells.get_mut(from).and_then(|row| row.get_mut(to)) {
            *slot = cell;
        }
        self
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn rows(&self) -> usize {
        ROWS
    }

    pub fn cols(&self) -> usize {
        COLS
    }

    /// Checked lookup of the cell converting from `from` to `to`.
    pub fn get<S: CoordinateTag>(&self, from: S, to: S) -> Result<C, ConversionErrors> {
        self.cells
            .get(from.index())
            .and_then(|row| row.get(to.index()))
            .copied()
            .ok_or(ConversionErrors::NoTableEntry {
                family: self.family,
                from: from.name(),
                to: to.name(),
            })
    }
}

/// Every conversion table, built once per process.
#[derive(Clone, Debug)]
pub struct ConversionTables {
    pub position: ConversionTable<Conversion, 6, 6>,
    pub direction: ConversionTable<Conversion, 1, 1>,
    pub vector: ConversionTable<Conversion, 2, 2>,
    pub position_incremental: ConversionTable<IncrementalConversion, 1, 6>,
    pub vector_incremental: ConversionTable<IncrementalConversion, 1, 2>,
}

impl ConversionTables {
    fn build() -> Self {
        use PositionSystem::{CylindricalPolar, RectangularCartesian, SphericalPolar};

        let position = ConversionTable::new(Family::Position)
            .with(
                CylindricalPolar.index(),
                RectangularCartesian.index(),
                Conversion::CylindricalToCartesian,
            )
            .with(
                RectangularCartesian.index(),
                CylindricalPolar.index(),
                Conversion::CartesianToCylindrical,
            )
            .with(
                SphericalPolar.index(),
                RectangularCartesian.index(),
                Conversion::SphericalToCartesian,
            )
            .with(
                RectangularCartesian.index(),
                SphericalPolar.index(),
                Conversion::CartesianToSpherical,
            )
            .with(
                CylindricalPolar.index(),
                SphericalPolar.index(),
                Conversion::CylindricalToSpherical,
            )
            .with(
                SphericalPolar.index(),
                CylindricalPolar.index(),
                Conversion::SphericalToCylindrical,
            );

        let direction = ConversionTable::new(Family::Direction);

        let vector = ConversionTable::new(Family::Vector)
            .with(
                VectorSystem::Component.index(),
                VectorSystem::SphericalPolar.index(),
                Conversion::CartesianToSpherical,
            )
            .with(
                VectorSystem::SphericalPolar.index(),
                VectorSystem::Component.index(),
                Conversion::SphericalToCartesian,
            );

        let position_incremental = ConversionTable::new(Family::IncrementalPosition)
            .with(
                RectangularCartesian.index(),
                CylindricalPolar.index(),
                IncrementalConversion::Cylindrical,
            )
            .with(
                RectangularCartesian.index(),
                SphericalPolar.index(),
                IncrementalConversion::Spherical,
            );

        let vector_incremental = ConversionTable::new(Family::IncrementalVector).with(
            VectorSystem::Component.index(),
            VectorSystem::SphericalPolar.index(),
            IncrementalConversion::Spherical,
        );

        tracing::debug!("coordinate conversion tables built");

        Self {
            position,
            direction,
            vector,
            position_incremental,
            vector_incremental,
        }
    }
}

lazy_static! {
    static ref CONVERSION_TABLES: ConversionTables = ConversionTables::build();
}

/// Builds the conversion tables if they have not been built yet.
///
/// Every lookup builds the tables on first use, so calling this is optional;
/// it only moves the one time cost to a point of the caller's choosing.
pub fn initialize_conversion_tables() {
    lazy_static::initialize(&CONVERSION_TABLES);
}

/// The process wide conversion tables.
pub fn conversion_tables() -> &'static ConversionTables {
    &CONVERSION_TABLES
}

fn trace_pass_through<S: CoordinateTag>(from: S, to: S) {
    if from != to {
        let family = S::FAMILY;
        tracing::trace!(
            family = %family,
            from = from.name(),
            to = to.name(),
            "no conversion between coordinate systems, value passed through"
        );
    }
}

pub fn lookup_position(
    from: PositionSystem,
    to: PositionSystem,
) -> Result<Conversion, ConversionErrors> {
    CONVERSION_TABLES.position.get(from, to)
}

pub fn lookup_direction(
    from: DirectionSystem,
    to: DirectionSystem,
) -> Result<Conversion, ConversionErrors> {
    CONVERSION_TABLES.direction.get(from, to)
}

pub fn lookup_vector(from: VectorSystem, to: VectorSystem) -> Result<Conversion, ConversionErrors> {
    CONVERSION_TABLES.vector.get(from, to)
}

/// The incremental position table has a single row: increments must be
/// rectangular cartesian.
pub fn lookup_position_incremental(
    from: PositionSystem,
    to: PositionSystem,
) -> Result<IncrementalConversion, ConversionErrors> {
    CONVERSION_TABLES
        .position_incremental
        .get(from, to)
}

/// The incremental vector table has a single row: increments must be
/// components.
pub fn lookup_vector_incremental(
    from: VectorSystem,
    to: VectorSystem,
) -> Result<IncrementalConversion, ConversionErrors> {
    CONVERSION_TABLES
        .vector_incremental
        .get(from, to)
}

/// Converts a position from one coordinate system to another.
/// Angles are in degrees. NaN and infinite components are not rejected.
pub fn convert_position(
    from: PositionSystem,
    to: PositionSystem,
    value: Triple,
) -> Result<Triple, ConversionErrors> {
    let conversion = lookup_position(from, to)?;
    if conversion.is_identity() {
        trace_pass_through(from, to);
    }
    Ok(conversion.apply(value))
}

/// Converts Euler angles between direction systems.
pub fn convert_direction(
    from: DirectionSystem,
    to: DirectionSystem,
    value: Triple,
) -> Result<Triple, ConversionErrors> {
    let conversion = lookup_direction(from, to)?;
    if conversion.is_identity() {
        trace_pass_through(from, to);
    }
    Ok(conversion.apply(value))
}

/// Converts a vector between component and spherical polar form.
pub fn convert_vector(
    from: VectorSystem,
    to: VectorSystem,
    value: Triple,
) -> Result<Triple, ConversionErrors> {
    let conversion = lookup_vector(from, to)?;
    if conversion.is_identity() {
        trace_pass_through(from, to);
    }
    Ok(conversion.apply(value))
}

/// Applies a rectangular cartesian `increment` (expressed in `from`) to a
/// `base` position expressed in `to`, returning the result in `to`.
pub fn convert_position_incremental(
    from: PositionSystem,
    to: PositionSystem,
    increment: Triple,
    base: Triple,
) -> Result<Triple, ConversionErrors> {
    let conversion = lookup_position_incremental(from, to)?;
    Ok(conversion.apply(increment, base))
}

/// Applies a component `increment` to a `base` vector expressed in `to`.
pub fn convert_vector_incremental(
    from: VectorSystem,
    to: VectorSystem,
    increment: Triple,
    base: Triple,
) -> Result<Triple, ConversionErrors> {
    let conversion = lookup_vector_incremental(from, to)?;
    Ok(conversion.apply(increment, base))
}
