use std::fmt;

// ---------------------------------------------------------------------------
// Attribute – which per-particle statistic a file holds
// ---------------------------------------------------------------------------

/// The three per-particle statistics the simulation build writes out.
/// `ALL` is the left-to-right pane order of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Pressure,
    PressureForce,
    Velocity,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [
        Attribute::Pressure,
        Attribute::PressureForce,
        Attribute::Velocity,
    ];

    /// Filename prefix used by the simulation's stats writer.
    pub fn prefix(self) -> &'static str {
        match self {
            Attribute::Pressure => "psr",
            Attribute::PressureForce => "pfm",
            Attribute::Velocity => "vel",
        }
    }

    /// Pane title.
    pub fn title(self) -> &'static str {
        match self {
            Attribute::Pressure => "Pressure",
            Attribute::PressureForce => "Pressure Force",
            Attribute::Velocity => "Velocity",
        }
    }

    /// Position in [`Attribute::ALL`].
    pub fn index(self) -> usize {
        match self {
            Attribute::Pressure => 0,
            Attribute::PressureForce => 1,
            Attribute::Velocity => 2,
        }
    }

    /// Reverse of [`Attribute::prefix`], for deriving a run from a picked file.
    pub fn from_prefix(prefix: &str) -> Option<Attribute> {
        Attribute::ALL.into_iter().find(|a| a.prefix() == prefix)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// ---------------------------------------------------------------------------
// AttributeSeries – one attribute's values, in file order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct AttributeSeries {
    pub attribute: Attribute,
    pub values: Vec<f64>,
}

// ---------------------------------------------------------------------------
// StatsRun – the complete loaded run
// ---------------------------------------------------------------------------

/// One run's three series. `series[i]` belongs to `Attribute::ALL[i]`;
/// the three lengths are independent (the writer does not guarantee
/// equal sample counts across attributes).
#[derive(Debug, Clone)]
pub struct StatsRun {
    pub run_id: String,
    pub series: [AttributeSeries; 3],
}

impl StatsRun {
    pub fn series_for(&self, attribute: Attribute) -> &AttributeSeries {
        &self.series[attribute.index()]
    }

    /// Total sample count across the three series.
    pub fn total_samples(&self) -> usize {
        self.series.iter().map(|s| s.values.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pane_order_and_titles_are_fixed() {
        let titles: Vec<&str> = Attribute::ALL.iter().map(|a| a.title()).collect();
        assert_eq!(titles, ["Pressure", "Pressure Force", "Velocity"]);
    }

    #[test]
    fn prefix_roundtrips() {
        for a in Attribute::ALL {
            assert_eq!(Attribute::from_prefix(a.prefix()), Some(a));
            assert_eq!(Attribute::ALL[a.index()], a);
        }
        assert_eq!(Attribute::from_prefix("xyz"), None);
    }
}
