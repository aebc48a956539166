//! Rusanov (local Lax-Friedrichs) flux for the Euler equations.
//!
//! F* = (F_l + F_r)/2 - s_max (q_r - q_l)/2,  s_max = max(|u_l| + c_l, |u_r| + c_r)
//!
//! The most diffusive of the built-in solvers, but defined for any pair of
//! states with positive density and pressure. The HLLC solver falls back to
//! it when its contact-speed estimate degenerates.

use crate::equations::Euler2D;
use crate::solver::{EulerState2D, PrimitiveState2D};

/// Rusanov numerical flux in the face-normal frame.
pub fn rusanov_flux_euler(
    w_l: &PrimitiveState2D,
    w_r: &PrimitiveState2D,
    gas: &Euler2D,
) -> EulerState2D {
    let s_max = (w_l.u.abs() + gas.sound_speed(w_l)).max(w_r.u.abs() + gas.sound_speed(w_r));

    let f_l = gas.normal_flux(w_l);
    let f_r = gas.normal_flux(w_r);
    let q_l = gas.to_conserved(w_l);
    let q_r = gas.to_conserved(w_r);

    0.5 * (f_l + f_r) - 0.5 * s_max * (q_r - q_l)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_rusanov_consistency() {
        let gas = Euler2D::new(1.4);
        let w = PrimitiveState2D::new(0.7, -0.3, 1.1, 2.0);
        let flux = rusanov_flux_euler(&w, &w, &gas);
        assert!((flux - gas.normal_flux(&w)).max_abs() < TOL);
    }

    #[test]
    fn test_rusanov_mirror_states_zero_mass_flux() {
        // A wall ghost state mirrors the normal velocity.
        let gas = Euler2D::new(1.4);
        let w = PrimitiveState2D::new(1.0, 0.4, 0.2, 1.0);
        let flux = rusanov_flux_euler(&w, &w.reflect(crate::types::Axis::X), &gas);
        assert!(flux.rho.abs() < TOL, "mass flux through wall: {}", flux.rho);
    }
}
