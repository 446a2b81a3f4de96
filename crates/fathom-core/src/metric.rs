//! The metric catalog: distance metrics, their neighbourhoods, and their
//! per-move increments.
//!
//! A [`Metric`] is a pure lookup key with no state. [`Metric::connectivity`]
//! answers which neighbourhood the metric propagates over at a given
//! dimensionality, and [`Metric::increment`] answers how much a move of a
//! given [`AxisShift`] class adds to a settled distance. Both are total
//! tables; the only failure in this module is parsing an unrecognized
//! metric name, which happens before any propagation state exists.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Displacement class of a neighbour offset: how many axes change by ±1.
///
/// The toroidal lattices enumerate neighbours grouped by this class, and
/// chamfer metrics assign one integer weight per class. Cityblock and
/// chessboard charge every class the same.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AxisShift {
    /// Exactly one axis changes (face-adjacent neighbour).
    Single,
    /// Two axes change (2D diagonal; 3D edge-adjacent neighbour).
    Double,
    /// Three axes change (3D space diagonal). Only arises in 3D.
    Triple,
}

impl AxisShift {
    /// Number of axes displaced by this class.
    pub fn axes(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }
}

/// Neighbourhood size of a lattice: which offsets count as adjacent.
///
/// `Four` and `Six` are the axis-aligned (von Neumann) neighbourhoods in
/// 2D and 3D; `Eight` and `TwentySix` add the diagonal classes (Moore).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// 2D, axis-aligned only.
    Four,
    /// 3D, axis-aligned only.
    Six,
    /// 2D, axis-aligned plus diagonals.
    Eight,
    /// 3D, all 26 surrounding cells.
    TwentySix,
}

impl Connectivity {
    /// Number of neighbours every cell has on a toroidal lattice.
    pub fn degree(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Six => 6,
            Self::Eight => 8,
            Self::TwentySix => 26,
        }
    }

    /// Dimensionality this neighbourhood belongs to.
    pub fn ndim(self) -> usize {
        match self {
            Self::Four | Self::Eight => 2,
            Self::Six | Self::TwentySix => 3,
        }
    }

    /// Whether offsets of the given [`AxisShift`] class are adjacent here.
    pub fn includes(self, shift: AxisShift) -> bool {
        match self {
            Self::Four | Self::Six => shift == AxisShift::Single,
            Self::Eight => shift <= AxisShift::Double,
            Self::TwentySix => true,
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-connectivity", self.degree())
    }
}

/// A grid distance metric.
///
/// Cityblock and chessboard are the exact L1 / L∞ grid distances.
/// Borgefors and quasi-euclidean are integer-scaled chamfer approximations
/// of Euclidean distance: borgefors weights moves 3/4 in 2D (≈ 1 : √2) and
/// 3/4/5 in 3D, quasi-euclidean weights 5/7 in 2D and 10/14/17 in 3D.
/// The scaled weights stay integral; callers wanting unit-scaled values
/// divide by the Single weight themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    /// L1 (Manhattan) distance; 4/6-connected.
    Cityblock,
    /// L∞ (Chebyshev) distance; 8/26-connected.
    Chessboard,
    /// Borgefors 3-4 (2D) / 3-4-5 (3D) chamfer distance.
    Borgefors,
    /// Quasi-euclidean 5-7 (2D) / 10-14-17 (3D) chamfer distance.
    Quasi,
}

impl Metric {
    /// Every recognized metric, in catalog order.
    pub const ALL: [Metric; 4] = [
        Metric::Cityblock,
        Metric::Chessboard,
        Metric::Borgefors,
        Metric::Quasi,
    ];

    /// The wire name this metric parses from and displays as.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cityblock => "city",
            Self::Chessboard => "chess",
            Self::Borgefors => "borges",
            Self::Quasi => "quasi",
        }
    }

    /// Whether this metric uses non-uniform (chamfer) increments.
    ///
    /// Chamfer metrics need their frontier sorted by distance each round,
    /// because one round can mix several settled distance values.
    pub fn is_chamfer(self) -> bool {
        matches!(self, Self::Borgefors | Self::Quasi)
    }

    /// Neighbourhood this metric propagates over at dimensionality `ndim`.
    ///
    /// Returns `None` iff `ndim` is not 2 or 3; the transform entry point
    /// maps that to [`TransformError::UnsupportedDimension`](crate::TransformError).
    pub fn connectivity(self, ndim: usize) -> Option<Connectivity> {
        match (self, ndim) {
            (Self::Cityblock, 2) => Some(Connectivity::Four),
            (Self::Cityblock, 3) => Some(Connectivity::Six),
            (_, 2) => Some(Connectivity::Eight),
            (_, 3) => Some(Connectivity::TwentySix),
            _ => None,
        }
    }

    /// Distance increment for a `shift`-class move at dimensionality `ndim`.
    ///
    /// `ndim` only distinguishes the quasi-euclidean scalings (5/7 in 2D,
    /// 10/14/17 in 3D); the other metrics weigh moves the same at every
    /// dimensionality. `Triple` shifts only arise in 3D.
    pub fn increment(self, ndim: usize, shift: AxisShift) -> u32 {
        match (self, shift) {
            (Self::Cityblock | Self::Chessboard, _) => 1,
            (Self::Borgefors, AxisShift::Single) => 3,
            (Self::Borgefors, AxisShift::Double) => 4,
            (Self::Borgefors, AxisShift::Triple) => 5,
            (Self::Quasi, AxisShift::Single) => {
                if ndim == 2 {
                    5
                } else {
                    10
                }
            }
            (Self::Quasi, AxisShift::Double) => {
                if ndim == 2 {
                    7
                } else {
                    14
                }
            }
            (Self::Quasi, AxisShift::Triple) => 17,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A metric name outside the catalog.
///
/// Produced by `str::parse::<Metric>()`; converts into
/// [`TransformError::UnknownMetric`](crate::TransformError) at the
/// transform boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMetric {
    /// The unrecognized name as given.
    pub name: String,
}

impl fmt::Display for UnknownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown metric '{}' (expected one of: city, chess, borges, quasi)",
            self.name
        )
    }
}

impl Error for UnknownMetric {}

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownMetric { name: s.to_owned() })
    }
}
