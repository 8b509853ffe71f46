//! Enumerated marker vocabularies for cell parsing.
//!
//! Each vocabulary is a small enum with an explicit pattern table, so every
//! marker the sample data uses is enumerated and matched exhaustively.
//! Detection is earliest-occurrence: the marker whose pattern appears at the
//! lowest byte offset wins. No two patterns in a vocabulary can begin at the
//! same offset.

/// Order-of-magnitude notations in thermal-expansion cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagnitudeMarker {
    /// "x10-6" power-of-ten notation
    PowerOfTen,
    /// "µ" micro prefix
    Micro,
}

impl MagnitudeMarker {
    pub const ALL: [MagnitudeMarker; 2] = [MagnitudeMarker::PowerOfTen, MagnitudeMarker::Micro];

    /// The literal text this marker matches in a normalized cell
    pub fn pattern(&self) -> &'static str {
        match self {
            MagnitudeMarker::PowerOfTen => "x10-6",
            MagnitudeMarker::Micro => "\u{b5}",
        }
    }

    /// Find the earliest magnitude marker in the input
    pub fn find(input: &str) -> Option<(usize, MagnitudeMarker)> {
        find_earliest(input, &Self::ALL, |m| m.pattern())
    }
}

/// Unit names in conductivity, toughness, and density cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitMarker {
    /// "W/m" thermal conductivity
    WattsPerMeter,
    /// "MPa" fracture toughness
    MegaPascals,
    /// "g/c" density (g/cc and g/cm3 share this prefix)
    GramsPerCubic,
    /// "C" temperature suffix left by degree-sign stripping
    Celsius,
}

impl UnitMarker {
    pub const ALL: [UnitMarker; 4] = [
        UnitMarker::WattsPerMeter,
        UnitMarker::MegaPascals,
        UnitMarker::GramsPerCubic,
        UnitMarker::Celsius,
    ];

    /// The literal text this marker matches in a normalized cell
    pub fn pattern(&self) -> &'static str {
        match self {
            UnitMarker::WattsPerMeter => "W/m",
            UnitMarker::MegaPascals => "MPa",
            UnitMarker::GramsPerCubic => "g/c",
            UnitMarker::Celsius => "C",
        }
    }

    /// Find the earliest unit marker in the input
    pub fn find(input: &str) -> Option<(usize, UnitMarker)> {
        find_earliest(input, &Self::ALL, |m| m.pattern())
    }
}

/// Tokens signaling the cell expresses a minimum-maximum pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeIndicator {
    /// "-" dash between range endpoints
    Dash,
    /// literal word "to" between range endpoints
    To,
}

impl RangeIndicator {
    pub const ALL: [RangeIndicator; 2] = [RangeIndicator::Dash, RangeIndicator::To];

    /// The literal text this indicator matches in a normalized cell
    pub fn pattern(&self) -> &'static str {
        match self {
            RangeIndicator::Dash => "-",
            RangeIndicator::To => "to",
        }
    }

    /// Find the earliest range indicator in the input
    pub fn find(input: &str) -> Option<(usize, RangeIndicator)> {
        find_earliest(input, &Self::ALL, |m| m.pattern())
    }
}

/// Temperature scale markers in melting-point cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
}

impl TemperatureUnit {
    /// The letter left behind after degree-sign stripping
    pub fn pattern(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "F",
            TemperatureUnit::Celsius => "C",
        }
    }

    /// Detect the temperature scale of a normalized melting-point cell.
    ///
    /// Fahrenheit takes precedence when both letters are present, matching
    /// the check order the sample data was cleaned with.
    pub fn detect(input: &str) -> Option<(usize, TemperatureUnit)> {
        if let Some(pos) = input.find(TemperatureUnit::Fahrenheit.pattern()) {
            Some((pos, TemperatureUnit::Fahrenheit))
        } else {
            input
                .find(TemperatureUnit::Celsius.pattern())
                .map(|pos| (pos, TemperatureUnit::Celsius))
        }
    }
}

/// Scan for the marker whose pattern occurs at the lowest byte offset
fn find_earliest<M: Copy>(
    input: &str,
    markers: &[M],
    pattern: impl Fn(&M) -> &'static str,
) -> Option<(usize, M)> {
    markers
        .iter()
        .filter_map(|marker| input.find(pattern(marker)).map(|pos| (pos, *marker)))
        .min_by_key(|(pos, _)| *pos)
}
