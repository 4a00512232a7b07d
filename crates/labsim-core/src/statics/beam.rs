//! Simply supported beam with a center point load.

/// Beam parameters in the sandbox's engineering units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamParams {
    /// Point load at the center, in newtons
    pub force: f64,

    /// Span length in meters
    pub length: f64,

    /// Young's modulus in gigapascals
    pub modulus_gpa: f64,

    /// Second moment of area in cm⁴
    pub inertia_cm4: f64,
}

impl BeamParams {
    pub fn new(force: f64, length: f64, modulus_gpa: f64, inertia_cm4: f64) -> Self {
        Self {
            force,
            length,
            modulus_gpa,
            inertia_cm4,
        }
    }

    /// Deflection at mid-span: δ = F·L³ / (48·E·I), with the engineering
    /// units converted to SI (GPa → Pa, cm⁴ → m⁴) before the formula.
    pub fn center_deflection(&self) -> f64 {
        let e_si = self.modulus_gpa * 1e9;
        let i_si = self.inertia_cm4 * 1e-8;
        self.force * self.length.powi(3) / (48.0 * e_si * i_si)
    }
}

impl Default for BeamParams {
    /// Sandbox defaults: 100 N, 2 m, 200 GPa, 5000 cm⁴
    fn default() -> Self {
        Self::new(100.0, 2.0, 200.0, 5000.0)
    }
}
