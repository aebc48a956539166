//! HLL (Harten-Lax-van Leer) approximate Riemann solver for the Euler equations.
//!
//! The HLL solver uses a two-wave approximation to the Riemann problem.
//! It is robust for strong shocks but smears contact discontinuities,
//! since the middle wave of the Euler system is not represented.
//!
//! F* = (s_r * F_l - s_l * F_r + s_l * s_r * (q_r - q_l)) / (s_r - s_l)
//!
//! where s_l and s_r are the left and right wave speed estimates.
//!
//! Reference: Toro, "Riemann Solvers and Numerical Methods for Fluid Dynamics"

use crate::equations::Euler2D;
use crate::solver::{EulerState2D, PrimitiveState2D};

/// Einfeldt wave speed estimates.
///
/// Bounds the fastest left- and right-going signals with the extreme of
/// the one-sided characteristics and the Roe-averaged ones:
///
/// s_l = min(u_l - c_l, ũ - c̃),  s_r = max(u_r + c_r, ũ + c̃)
///
/// Velocities are face-normal (`u`) and tangential (`v`).
pub fn einfeldt_speeds(w_l: &PrimitiveState2D, w_r: &PrimitiveState2D, gas: &Euler2D) -> (f64, f64) {
    let c_l = gas.sound_speed(w_l);
    let c_r = gas.sound_speed(w_r);

    let h_l = gas.enthalpy(w_l);
    let h_r = gas.enthalpy(w_r);

    // Roe averages (density-square-root weighting)
    let sqrt_rho_l = w_l.rho.sqrt();
    let sqrt_rho_r = w_r.rho.sqrt();
    let inv_sum = 1.0 / (sqrt_rho_l + sqrt_rho_r);

    let u_roe = (sqrt_rho_l * w_l.u + sqrt_rho_r * w_r.u) * inv_sum;
    let v_roe = (sqrt_rho_l * w_l.v + sqrt_rho_r * w_r.v) * inv_sum;
    let h_roe = (sqrt_rho_l * h_l + sqrt_rho_r * h_r) * inv_sum;
    let c_roe = ((gas.gamma - 1.0) * (h_roe - 0.5 * (u_roe * u_roe + v_roe * v_roe)))
        .max(0.0)
        .sqrt();

    let s_l = (w_l.u - c_l).min(u_roe - c_roe);
    let s_r = (w_r.u + c_r).max(u_roe + c_roe);
    (s_l, s_r)
}

/// HLL numerical flux in the face-normal frame.
///
/// # Arguments
/// * `w_l` - Left primitive state (u normal, v tangential)
/// * `w_r` - Right primitive state
/// * `gas` - Equation of state
///
/// # Returns
/// Numerical flux (mass, normal momentum, tangential momentum, energy)
pub fn hll_flux_euler(
    w_l: &PrimitiveState2D,
    w_r: &PrimitiveState2D,
    gas: &Euler2D,
) -> EulerState2D {
    let (s_l, s_r) = einfeldt_speeds(w_l, w_r, gas);

    if s_l >= 0.0 {
        // All waves go right, use left flux
        gas.normal_flux(w_l)
    } else if s_r <= 0.0 {
        // All waves go left, use right flux
        gas.normal_flux(w_r)
    } else {
        let f_l = gas.normal_flux(w_l);
        let f_r = gas.normal_flux(w_r);
        let q_l = gas.to_conserved(w_l);
        let q_r = gas.to_conserved(w_r);

        let inv_ds = 1.0 / (s_r - s_l);
        (s_r * f_l - s_l * f_r + s_l * s_r * (q_r - q_l)) * inv_ds
    }
}
