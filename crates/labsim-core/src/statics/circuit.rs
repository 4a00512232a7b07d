//! Series DC resistor circuit.

/// Smallest total resistance used in the current calculation, so a
/// zero-resistance configuration cannot divide by zero.
const MIN_TOTAL_RESISTANCE: f64 = 1e-4;

/// A voltage source driving three resistors in series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesCircuit {
    /// Source voltage in volts
    pub voltage: f64,

    /// The three resistances in ohms
    pub resistances: [f64; 3],
}

/// Derived quantities for the current circuit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSolution {
    /// Sum of resistances, floored at a small positive epsilon
    pub total_resistance: f64,

    /// Branch current in amperes
    pub current: f64,

    /// Voltage drop across each resistor in volts
    pub drops: [f64; 3],
}

impl SeriesCircuit {
    pub fn new(voltage: f64, resistances: [f64; 3]) -> Self {
        Self {
            voltage,
            resistances,
        }
    }

    /// Ohm's law over the series loop: I = V / ΣR, drop_k = I * R_k
    pub fn solve(&self) -> SeriesSolution {
        let total_resistance = self
            .resistances
            .iter()
            .sum::<f64>()
            .max(MIN_TOTAL_RESISTANCE);
        let current = self.voltage / total_resistance;
        let drops = [
            current * self.resistances[0],
            current * self.resistances[1],
            current * self.resistances[2],
        ];
        SeriesSolution {
            total_resistance,
            current,
            drops,
        }
    }
}

impl Default for SeriesCircuit {
    /// Sandbox defaults: 5 V and three 100 Ω resistors
    fn default() -> Self {
        Self::new(5.0, [100.0, 100.0, 100.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_three_equal_resistors() {
        let solution = SeriesCircuit::new(5.0, [100.0, 100.0, 100.0]).solve();
        assert_relative_eq!(solution.total_resistance, 300.0, epsilon = 1e-12);
        assert_relative_eq!(solution.current, 5.0 / 300.0, epsilon = 1e-12);
        for drop in solution.drops {
            assert_relative_eq!(drop, 5.0 / 3.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_zero_resistance_floored() {
        let solution = SeriesCircuit::new(5.0, [0.0, 0.0, 0.0]).solve();
        assert_eq!(solution.total_resistance, 1e-4);
        assert!(solution.current.is_finite());
    }
}
