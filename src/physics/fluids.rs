//! Phase and pipe property containers
//!
//! The two phases are distinct types rather than one struct with a flag:
//! only the liquid carries a bubble surface tension, and several closures
//! are written against "some phase" through the [`FluidProperties`] trait
//! without caring which one they got.

/// Shared capability of both phases.
///
/// Correlations that work on "a phase flowing alone" (Reynolds number,
/// single-phase pressure gradient, area ratio) take
/// `&dyn FluidProperties` so the same code serves gas and liquid.
pub trait FluidProperties {
    /// Density in kg/m³.
    fn density(&self) -> f64;

    /// Dynamic viscosity in Pa·s.
    fn dynamic_viscosity(&self) -> f64;

    /// Mass flow rate assigned to this phase in kg/s.
    fn mass_flowrate(&self) -> f64;
}

/// Gas phase properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gas {
    /// Density (kg/m³)
    pub density: f64,

    /// Dynamic viscosity (Pa·s)
    pub dynamic_viscosity: f64,

    /// Mass flow rate (kg/s)
    pub mass_flowrate: f64,
}

impl Gas {
    /// Create a gas phase.
    pub fn new(density: f64, dynamic_viscosity: f64, mass_flowrate: f64) -> Self {
        Self {
            density,
            dynamic_viscosity,
            mass_flowrate,
        }
    }
}

impl FluidProperties for Gas {
    fn density(&self) -> f64 {
        self.density
    }

    fn dynamic_viscosity(&self) -> f64 {
        self.dynamic_viscosity
    }

    fn mass_flowrate(&self) -> f64 {
        self.mass_flowrate
    }
}

/// Liquid phase properties.
///
/// Besides the shared phase properties, the liquid carries the surface
/// tension of gas bubbles suspended in it. The dispersed-bubble and slug
/// closures need it; the gas phase has no counterpart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Liquid {
    /// Density (kg/m³)
    pub density: f64,

    /// Dynamic viscosity (Pa·s)
    pub dynamic_viscosity: f64,

    /// Mass flow rate (kg/s)
    pub mass_flowrate: f64,

    /// Bubble surface tension (N/m)
    pub bubble_surface_tension: f64,
}

impl Liquid {
    /// Create a liquid phase.
    pub fn new(
        density: f64,
        dynamic_viscosity: f64,
        mass_flowrate: f64,
        bubble_surface_tension: f64,
    ) -> Self {
        Self {
            density,
            dynamic_viscosity,
            mass_flowrate,
            bubble_surface_tension,
        }
    }
}

impl FluidProperties for Liquid {
    fn density(&self) -> f64 {
        self.density
    }

    fn dynamic_viscosity(&self) -> f64 {
        self.dynamic_viscosity
    }

    fn mass_flowrate(&self) -> f64 {
        self.mass_flowrate
    }
}

/// Pipe geometry and orientation.
///
/// Inclination is taken in **degrees** at construction and stored in
/// radians; every downstream `sin`/`cos` works on the stored value.
/// The cross-sectional area is derived once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipe {
    /// Internal diameter (m)
    pub diameter: f64,

    /// Inclination from horizontal (radians; positive = upward flow)
    pub inclination: f64,

    /// Relative roughness ratio e/D (dimensionless)
    pub roughness: f64,

    /// Gravitational acceleration (m/s²)
    pub gravity: f64,

    /// Cross-sectional area πD²/4 (m²)
    pub area: f64,
}

/// Standard gravitational acceleration (m/s²).
pub(crate) const STANDARD_GRAVITY: f64 = 9.81;

impl Pipe {
    /// Create a pipe with standard gravity.
    ///
    /// `inclination_degrees` follows the Barnea 1987 convention:
    /// 0° horizontal, +90° vertical upward, −90° vertical downward.
    pub fn new(diameter: f64, inclination_degrees: f64, roughness: f64) -> Self {
        Self::with_gravity(diameter, inclination_degrees, roughness, STANDARD_GRAVITY)
    }

    /// Create a pipe with an explicit gravitational acceleration.
    pub fn with_gravity(
        diameter: f64,
        inclination_degrees: f64,
        roughness: f64,
        gravity: f64,
    ) -> Self {
        Self {
            diameter,
            inclination: inclination_degrees.to_radians(),
            roughness,
            gravity,
            area: std::f64::consts::FRAC_PI_4 * diameter * diameter,
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
