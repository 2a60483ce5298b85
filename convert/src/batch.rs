use crate::errors::ConvertErrors;
use colored::Colorize;
use coordinate_systems::{
    Triple,
    systems::{DirectionSystem, PositionSystem, VectorSystem},
};
use rotations::prelude::{EulerAngles, TransformMatrix};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// A list of conversions read from a RON file.
///
/// ```ron
/// (
///     jobs: [
///         Position(from: CylindricalPolar, to: RectangularCartesian, value: (2.0, 90.0, 5.0)),
///         EulerMatrix(angles: (azimuth: 10.0, elevation: 20.0, roll: 30.0)),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub jobs: Vec<Job>,
}

impl Batch {
    pub fn load(path: &Path) -> Result<Self, ConvertErrors> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConvertErrors> {
        Ok(ron::from_str(text)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Job {
    Position {
        from: PositionSystem,
        to: PositionSystem,
        value: [f64; 3],
    },
    Direction {
        from: DirectionSystem,
        to: DirectionSystem,
        value: [f64; 3],
    },
    Vector {
        from: VectorSystem,
        to: VectorSystem,
        value: [f64; 3],
    },
    PositionIncrement {
        from: PositionSystem,
        to: PositionSystem,
        increment: [f64; 3],
        base: [f64; 3],
    },
    VectorIncrement {
        from: VectorSystem,
        to: VectorSystem,
        increment: [f64; 3],
        base: [f64; 3],
    },
    EulerMatrix {
        angles: EulerAngles,
    },
    MatrixEuler {
        rows: [[f64; 3]; 3],
    },
    /// Rotations applied in order to the identity, angles in degrees.
    Rotations {
        steps: Vec<(f64, char)>,
    },
    Invert {
        rows: [[f64; 3]; 3],
    },
}

/// Result of running a `Job`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Output {
    Triple(Triple),
    Matrix(TransformMatrix),
    Euler(EulerAngles),
}

pub fn triple(values: &[f64]) -> Result<Triple, ConvertErrors> {
    match values {
        [a, b, c] => Ok(Triple::new(*a, *b, *c)),
        _ => Err(ConvertErrors::WrongValueCount {
            expected: 3,
            got: values.len(),
        }),
    }
}

pub fn matrix(values: &[f64]) -> Result<TransformMatrix, ConvertErrors> {
    match values {
        [e11, e12, e13, e21, e22, e23, e31, e32, e33] => Ok(TransformMatrix::new(
            *e11, *e12, *e13, *e21, *e22, *e23, *e31, *e32, *e33,
        )),
        _ => Err(ConvertErrors::WrongValueCount {
            expected: 9,
            got: values.len(),
        }),
    }
}

fn from_rows(rows: &[[f64; 3]; 3]) -> TransformMatrix {
    let [r1, r2, r3] = rows;
    TransformMatrix::new(
        r1[0], r1[1], r1[2], r2[0], r2[1], r2[2], r3[0], r3[1], r3[2],
    )
}

impl Job {
    pub fn run(&self) -> Result<Output, ConvertErrors> {
        let output = match self {
            Job::Position { from, to, value } => Output::Triple(
                coordinate_systems::convert_position(*from, *to, Triple::from(*value))?,
            ),
            Job::Direction { from, to, value } => Output::Triple(
                coordinate_systems::convert_direction(*from, *to, Triple::from(*value))?,
            ),
            Job::Vector { from, to, value } => Output::Triple(coordinate_systems::convert_vector(
                *from,
                *to,
                Triple::from(*value),
            )?),
            Job::PositionIncrement {
                from,
                to,
                increment,
                base,
            } => Output::Triple(coordinate_systems::convert_position_incremental(
                *from,
                *to,
                Triple::from(*increment),
                Triple::from(*base),
            )?),
            Job::VectorIncrement {
                from,
                to,
                increment,
                base,
            } => Output::Triple(coordinate_systems::convert_vector_incremental(
                *from,
                *to,
                Triple::from(*increment),
                Triple::from(*base),
            )?),
            Job::EulerMatrix { angles } => Output::Matrix(TransformMatrix::from(*angles)),
            Job::MatrixEuler { rows } => Output::Euler(EulerAngles::from(&from_rows(rows))),
            Job::Rotations { steps } => {
                let mut m = TransformMatrix::identity();
                for (angle, axis) in steps {
                    m.rotate(*angle, *axis)?;
                }
                Output::Matrix(m)
            }
            Job::Invert { rows } => Output::Matrix(from_rows(rows).invert()?),
        };
        Ok(output)
    }
}

impl Output {
    pub fn render(&self, precision: usize) -> String {
        match self {
            Output::Triple(t) => format!(
                "{} {:.p$} {:.p$} {:.p$}",
                "=>".green(),
                t[0],
                t[1],
                t[2],
                p = precision
            ),
            Output::Euler(e) => format!(
                "{} azimuth {:.p$} elevation {:.p$} roll {:.p$}",
                "=>".green(),
                e.azimuth,
                e.elevation,
                e.roll,
                p = precision
            ),
            Output::Matrix(m) => {
                let mut s = String::new();
                for i in 0..3 {
                    let lead = if i == 0 { "=>" } else { "  " };
                    s.push_str(&format!(
                        "{} {:.p$} {:.p$} {:.p$}",
                        lead.green(),
                        m.0[(i, 0)],
                        m.0[(i, 1)],
                        m.0[(i, 2)],
                        p = precision
                    ));
                    if i < 2 {
                        s.push('\n');
                    }
                }
                s
            }
        }
    }
}
