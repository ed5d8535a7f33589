//! Rigid-sphere particle advanced by a discrete-time linear state-space
//! model: `x_{k+1} = Phi * x_k + Gamma * u_k`.

use std::fmt;

use log::trace;

use crate::error::MatrixError;
use crate::math::matrix::Matrix;
use crate::math::solve::eye;

/// Number of state components: position xyz, velocity xyz, orientation
/// yaw/pitch/roll, and angular rates.
pub const STATE_SIZE: usize = 12;

/// Number of input components: normal force xyz, tangential force xyz.
pub const INPUT_SIZE: usize = 6;

/// Sample time used when none is supplied, in seconds.
pub const DEFAULT_SAMPLE_TIME: f64 = 0.001;

/// A solid sphere with a 12-dimensional state evolving independently of any
/// other particle.
///
/// The particle exclusively owns its state, transition, and input matrices;
/// the state vector is replaced wholesale on each [`Particle::update`] and
/// never mutated in place.
#[derive(Debug, Clone)]
pub struct Particle {
    radius: f64,
    mass: f64,
    moi: f64,
    dt: f64,
    state: Matrix,
    phi: Matrix,
    gamma: Matrix,
    u: Matrix,
}

impl Particle {
    /// Create a particle at the given position with zero velocity,
    /// orientation, and angular rates, using the default sample time.
    pub fn new(x: f64, y: f64, z: f64, mass: f64, radius: f64) -> Self {
        let mut state = Matrix::column(STATE_SIZE);
        state[(0, 0)] = x;
        state[(1, 0)] = y;
        state[(2, 0)] = z;
        Self::assemble(state, mass, radius)
    }

    /// Create a particle from a full 12 x 1 initial state vector.
    pub fn from_state(state: &Matrix, mass: f64, radius: f64) -> Result<Self, MatrixError> {
        if state.shape() != (STATE_SIZE, 1) {
            return Err(MatrixError::ShapeMismatch {
                expected: (STATE_SIZE, 1),
                found: state.shape(),
            });
        }
        Ok(Self::assemble(state.clone(), mass, radius))
    }

    fn assemble(state: Matrix, mass: f64, radius: f64) -> Self {
        let moi = moment_of_inertia(mass, radius);
        let dt = DEFAULT_SAMPLE_TIME;
        Particle {
            radius,
            mass,
            moi,
            dt,
            state,
            phi: build_phi(dt),
            gamma: build_gamma(dt, mass, radius, moi),
            u: Matrix::column(INPUT_SIZE),
        }
    }

    /// Advance the state by one sample period.
    pub fn update(&mut self) -> Result<(), MatrixError> {
        let next = self
            .phi
            .matmul(&self.state)?
            .add(&self.gamma.matmul(&self.u)?)?;
        self.state = next;
        trace!("advanced particle state by dt = {}", self.dt);
        Ok(())
    }

    /// Store the input forces. The normal components impart linear momentum
    /// only; the tangential components act at the sphere surface and create
    /// moments only. The input stays in effect until explicitly changed, so
    /// an impulse must be ended by setting it back to zero.
    pub fn set_u(&mut self, fnx: f64, fny: f64, fnz: f64, ftx: f64, fty: f64, ftz: f64) {
        self.u[(0, 0)] = fnx;
        self.u[(1, 0)] = fny;
        self.u[(2, 0)] = fnz;
        self.u[(3, 0)] = ftx;
        self.u[(4, 0)] = fty;
        self.u[(5, 0)] = ftz;
    }

    /// Set the mass, recompute the moment of inertia, and rebuild the input
    /// matrix that depends on them.
    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
        self.moi = moment_of_inertia(self.mass, self.radius);
        self.gamma = build_gamma(self.dt, self.mass, self.radius, self.moi);
    }

    /// Set the radius, recompute the moment of inertia, and rebuild the
    /// input matrix that depends on them.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.moi = moment_of_inertia(self.mass, self.radius);
        self.gamma = build_gamma(self.dt, self.mass, self.radius, self.moi);
    }

    /// Change the sample time and regenerate both the transition and input
    /// matrices. A zero sample time is rejected and leaves everything
    /// unchanged.
    pub fn set_sample_time(&mut self, dt: f64) -> Result<(), MatrixError> {
        if dt == 0.0 {
            return Err(MatrixError::InvalidParameter("sample time must be non-zero"));
        }
        self.dt = dt;
        self.phi = build_phi(dt);
        self.gamma = build_gamma(dt, self.mass, self.radius, self.moi);
        Ok(())
    }

    /// A defensive copy of the state vector.
    pub fn state(&self) -> Matrix {
        self.state.clone()
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn moment_of_inertia(&self) -> f64 {
        self.moi
    }

    pub fn sample_time(&self) -> f64 {
        self.dt
    }

    pub fn phi(&self) -> &Matrix {
        &self.phi
    }

    pub fn gamma(&self) -> &Matrix {
        &self.gamma
    }

    pub fn u(&self) -> &Matrix {
        &self.u
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "radius = {} meters", self.radius)?;
        writeln!(f, "mass = {} kg", self.mass)?;
        writeln!(f, "moment of inertia = {}", self.moi)?;
        writeln!(f, "sample time = {} seconds", self.dt)?;
        writeln!(f, "state (X):\n{}", self.state)?;
        writeln!(f, "dynamics matrix (Phi):\n{}", self.phi)?;
        writeln!(f, "input matrix (Gamma):\n{}", self.gamma)?;
        write!(f, "input vector (u):\n{}", self.u)
    }
}

/// Moment of inertia of a solid sphere: `2 * mass * radius^2 / 5`.
fn moment_of_inertia(mass: f64, radius: f64) -> f64 {
    2.0 * (mass * radius * radius) / 5.0
}

/// State-transition matrix: identity with first-order kinematic coupling of
/// each position row to its velocity column and each orientation row to its
/// angular-rate column.
fn build_phi(dt: f64) -> Matrix {
    let mut phi = eye(STATE_SIZE, STATE_SIZE);
    for axis in 0..3 {
        phi[(axis, axis + 3)] = dt;
        phi[(axis + 6, axis + 9)] = dt;
    }
    phi
}

/// Input matrix mapping `[fnx, fny, fnz, ftx, fty, ftz]` to state deltas.
///
/// Normal-force components accelerate the center of mass; tangential-force
/// components act at the sphere surface, so the rotational terms carry the
/// radius as a moment arm over the moment of inertia.
fn build_gamma(dt: f64, mass: f64, radius: f64, moi: f64) -> Matrix {
    let mut gamma = Matrix::new(STATE_SIZE, INPUT_SIZE);
    for axis in 0..3 {
        gamma[(axis, axis)] = dt * dt / (2.0 * mass);
        gamma[(axis + 3, axis)] = dt / mass;
        gamma[(axis + 6, axis + 3)] = radius * dt * dt / moi;
        gamma[(axis + 9, axis + 3)] = radius * dt / moi;
    }
    gamma
}
