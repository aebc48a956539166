//! HLLC (HLL with Contact) approximate Riemann solver for the Euler equations.
//!
//! HLLC restores the middle (contact/shear) wave that HLL drops, so density
//! jumps and tangential velocity slips are transported without the HLL
//! smearing. Three waves S_L ≤ S* ≤ S_R split the (x, t) plane into four
//! regions; the flux at x/t = 0 is taken from whichever region contains it:
//!
//! | condition          | flux                         |
//! |--------------------|------------------------------|
//! | 0 ≤ S_L            | F_L                          |
//! | S_L < 0 ≤ S*       | F_L + S_L (U*_L - U_L)       |
//! | S* < 0 ≤ S_R       | F_R + S_R (U*_R - U_R)       |
//! | otherwise          | F_R                          |
//!
//! The contact speed follows from the pressure/momentum balance across the
//! outer waves:
//!
//! S* = (p_R - p_L + ρ_L u_L (S_L - u_L) - ρ_R u_R (S_R - u_R))
//!      / (ρ_L (S_L - u_L) - ρ_R (S_R - u_R))
//!
//! Reference: Toro, "Riemann Solvers and Numerical Methods for Fluid Dynamics", §10.4

use crate::equations::Euler2D;
use crate::solver::{EulerState2D, PrimitiveState2D};

use super::hll::einfeldt_speeds;
use super::rusanov::rusanov_flux_euler;

/// Magnitude below which the S* denominator is treated as degenerate.
///
/// For states with positive density and pressure the denominator is bounded
/// away from zero by ρ_L c_L + ρ_R c_R, so this only triggers for
/// near-vacuum pairs.
pub const STAR_DENOMINATOR_EPS: f64 = 1e-12;

/// Star-region conserved state behind the wave moving at `s`.
///
/// Rankine-Hugoniot across the outer wave with the contact at `s_star`.
#[inline]
fn star_state(w: &PrimitiveState2D, q: &EulerState2D, s: f64, s_star: f64) -> EulerState2D {
    let factor = w.rho * (s - w.u) / (s - s_star);
    EulerState2D {
        rho: factor,
        rho_u: factor * s_star,
        rho_v: factor * w.v,
        energy: factor
            * (q.energy / w.rho + (s_star - w.u) * (s_star + w.p / (w.rho * (s - w.u)))),
    }
}

/// Contact wave speed S*, or `None` when the denominator degenerates.
#[inline]
pub fn contact_speed(
    w_l: &PrimitiveState2D,
    w_r: &PrimitiveState2D,
    s_l: f64,
    s_r: f64,
) -> Option<f64> {
    let denom = w_l.rho * (s_l - w_l.u) - w_r.rho * (s_r - w_r.u);
    if denom.abs() < STAR_DENOMINATOR_EPS || !denom.is_finite() {
        return None;
    }
    let numer = w_r.p - w_l.p + w_l.rho * w_l.u * (s_l - w_l.u) - w_r.rho * w_r.u * (s_r - w_r.u);
    Some(numer / denom)
}

/// HLLC numerical flux in the face-normal frame.
///
/// # Arguments
/// * `w_l` - Left primitive state (u normal, v tangential)
/// * `w_r` - Right primitive state
/// * `gas` - Equation of state
///
/// # Returns
/// Numerical flux (mass, normal momentum, tangential momentum, energy).
/// Falls back to [`rusanov_flux_euler`] if the contact speed is undefined.
pub fn hllc_flux_euler(
    w_l: &PrimitiveState2D,
    w_r: &PrimitiveState2D,
    gas: &Euler2D,
) -> EulerState2D {
    let (s_l, s_r) = einfeldt_speeds(w_l, w_r, gas);

    if 0.0 <= s_l {
        return gas.normal_flux(w_l);
    }

    let Some(s_star) = contact_speed(w_l, w_r, s_l, s_r) else {
        return rusanov_flux_euler(w_l, w_r, gas);
    };

    if 0.0 <= s_star {
        let q_l = gas.to_conserved(w_l);
        gas.normal_flux(w_l) + s_l * (star_state(w_l, &q_l, s_l, s_star) - q_l)
    } else if 0.0 <= s_r {
        let q_r = gas.to_conserved(w_r);
        gas.normal_flux(w_r) + s_r * (star_state(w_r, &q_r, s_r, s_star) - q_r)
    } else {
        gas.normal_flux(w_r)
    }
}
