// src/analytics/greeks.rs
//! Selection of Greeks for display and export.
//!
//! The pricing engine always produces the full bundle. Callers that only
//! show part of it (the sensitivity chart, CSV columns) pick fields with a
//! [`GreekSet`].

use super::bs_analytic::Greeks;
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GreekSet: u32 {
        const NONE       = 0;
        const CALL_DELTA = 1 << 0;
        const PUT_DELTA  = 1 << 1;
        const GAMMA      = 1 << 2;
        const VEGA       = 1 << 3;
        const CALL_THETA = 1 << 4;
        const PUT_THETA  = 1 << 5;
        const CALL_RHO   = 1 << 6;
        const PUT_RHO    = 1 << 7;

        /// Call-side Greeks plotted against the swept variable
        const CHART = Self::CALL_DELTA.bits()
            | Self::GAMMA.bits()
            | Self::VEGA.bits()
            | Self::CALL_THETA.bits()
            | Self::CALL_RHO.bits();

        const ALL = Self::CHART.bits()
            | Self::PUT_DELTA.bits()
            | Self::PUT_THETA.bits()
            | Self::PUT_RHO.bits();
    }
}

/// Column names in bundle order
const NAMES: [(GreekSet, &str); 8] = [
    (GreekSet::CALL_DELTA, "call_delta"),
    (GreekSet::PUT_DELTA, "put_delta"),
    (GreekSet::GAMMA, "gamma"),
    (GreekSet::VEGA, "vega"),
    (GreekSet::CALL_THETA, "call_theta"),
    (GreekSet::PUT_THETA, "put_theta"),
    (GreekSet::CALL_RHO, "call_rho"),
    (GreekSet::PUT_RHO, "put_rho"),
];

impl GreekSet {
    /// Single flags contained in `self` with their names, in bundle order
    pub fn named_flags(self) -> Vec<(GreekSet, &'static str)> {
        NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .copied()
            .collect()
    }

    /// Names of the selected Greeks, in bundle order
    pub fn names(self) -> Vec<&'static str> {
        self.named_flags().into_iter().map(|(_, name)| name).collect()
    }

    /// Parse a comma-separated list such as `"gamma,vega"`, or `all` / `chart`
    pub fn parse_list(list: &str) -> Option<GreekSet> {
        let mut set = GreekSet::NONE;
        for item in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            let flag = match item.to_ascii_lowercase().as_str() {
                "all" => GreekSet::ALL,
                "chart" => GreekSet::CHART,
                other => NAMES
                    .iter()
                    .find(|(_, name)| *name == other)
                    .map(|(flag, _)| *flag)?,
            };
            set |= flag;
        }
        Some(set)
    }
}

impl Greeks {
    /// Value of a single Greek flag; `None` for empty or combined flags
    pub fn value_of(&self, flag: GreekSet) -> Option<f64> {
        let value = match flag {
            f if f == GreekSet::CALL_DELTA => self.call_delta,
            f if f == GreekSet::PUT_DELTA => self.put_delta,
            f if f == GreekSet::GAMMA => self.gamma,
            f if f == GreekSet::VEGA => self.vega,
            f if f == GreekSet::CALL_THETA => self.call_theta,
            f if f == GreekSet::PUT_THETA => self.put_theta,
            f if f == GreekSet::CALL_RHO => self.call_rho,
            f if f == GreekSet::PUT_RHO => self.put_rho,
            _ => return None,
        };
        Some(value)
    }

    /// Named projection of the bundle onto `set`, in bundle order
    pub fn select(&self, set: GreekSet) -> Vec<(&'static str, f64)> {
        set.named_flags()
            .into_iter()
            .filter_map(|(flag, name)| self.value_of(flag).map(|v| (name, v)))
            .collect()
    }
}
