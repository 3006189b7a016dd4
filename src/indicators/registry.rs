use once_cell::sync::Lazy;
use serde::Serialize;

use crate::indicators::Pillar;

// ============================================================================
// METADATA STRUCTS
// ============================================================================

/// Fixed normalization bounds for one indicator.
/// Hand-chosen constants, NOT derived from the observed sample: scores must
/// stay comparable across fetches and years, so these never get recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
    /// Lower raw values are better (e.g. debt-to-GDP, Gini).
    pub reverse: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct IndicatorMetadata {
    pub slug: String,
    pub name: String,
    /// World Bank series code (e.g. "NY.GDP.MKTP.KD.ZG").
    pub wb_code: String,
    pub pillar: Pillar,
    /// None = no calibrated bounds; a present value normalizes to a fixed
    /// neutral 0.5 instead of a scaled score.
    pub bounds: Option<Bounds>,
}

// Helper macro to reduce boilerplate
macro_rules! ind {
    // Pattern without bounds (neutral indicator)
    ($slug:expr, $name:expr, $code:expr, $pillar:expr) => {
        IndicatorMetadata {
            slug: $slug.to_string(),
            name: $name.to_string(),
            wb_code: $code.to_string(),
            pillar: $pillar,
            bounds: None,
        }
    };
    // Pattern with bounds (higher is better)
    ($slug:expr, $name:expr, $code:expr, $pillar:expr, $min:expr, $max:expr) => {
        ind!($slug, $name, $code, $pillar, $min, $max, false)
    };
    // Pattern with bounds and explicit direction
    ($slug:expr, $name:expr, $code:expr, $pillar:expr, $min:expr, $max:expr, $rev:expr) => {
        IndicatorMetadata {
            slug: $slug.to_string(),
            name: $name.to_string(),
            wb_code: $code.to_string(),
            pillar: $pillar,
            bounds: Some(Bounds { min: $min, max: $max, reverse: $rev }),
        }
    };
}

// ============================================================================
// STATIC INDICATOR REGISTRY (Lazy initialization, linear scan is fine at n=24)
// ============================================================================

static INDICATORS: Lazy<Vec<IndicatorMetadata>> = Lazy::new(|| {
    vec![
        // =====================================================================
        // FINANCIAL Pillar
        // =====================================================================
        ind!("gdp", "GDP (current US$)", "NY.GDP.MKTP.CD", Pillar::Financial),
        ind!("debt_to_gdp", "Central Government Debt (% of GDP)", "GC.DOD.TOTL.GD.ZS",
             Pillar::Financial, 0.0, 200.0, true),
        ind!("fx_reserves", "Reserves in Months of Imports", "FI.RES.XGLD.MO",
             Pillar::Financial, 0.0, 12.0),
        ind!("fdi", "FDI Net Inflows (% of GDP)", "BX.KLT.DINV.WD.GD.ZS",
             Pillar::Financial, -5.0, 10.0),
        ind!("trade_balance", "External Balance (% of GDP)", "NE.RSB.GNFS.ZS", Pillar::Financial),
        ind!("gdp_growth", "GDP Growth (annual %)", "NY.GDP.MKTP.KD.ZG",
             Pillar::Financial, -10.0, 15.0),

        // =====================================================================
        // SOCIAL Pillar
        // =====================================================================
        ind!("gini", "Gini Index", "SI.POV.GINI", Pillar::Social, 25.0, 65.0, true),
        ind!("consumption", "Household Consumption per Capita", "NE.CON.PRVT.PC.KD", Pillar::Social),
        ind!("savings", "Gross Savings (% of GDP)", "NY.GNS.ICTR.ZS", Pillar::Social, -10.0, 40.0),
        ind!("water", "Access to Basic Drinking Water (%)", "SH.H2O.BASW.ZS",
             Pillar::Social, 40.0, 100.0),
        ind!("life_expectancy", "Life Expectancy at Birth", "SP.DYN.LE00.IN",
             Pillar::Social, 40.0, 100.0),
        ind!("poverty", "Poverty Headcount at $2.15/day (%)", "SI.POV.DDAY",
             Pillar::Social, 0.0, 50.0, true),

        // =====================================================================
        // INSTITUTIONAL Pillar (WGI, all reported on a -2.5..+2.5 scale)
        // =====================================================================
        ind!("corruption_control", "Control of Corruption", "CC.EST",
             Pillar::Institutional, -2.5, 2.5),
        ind!("govt_effectiveness", "Government Effectiveness", "GE.EST",
             Pillar::Institutional, -2.5, 2.5),
        ind!("rule_of_law", "Rule of Law", "RL.EST",
             Pillar::Institutional, -2.5, 2.5),
        ind!("regulatory_quality", "Regulatory Quality", "RQ.EST",
             Pillar::Institutional, -2.5, 2.5),
        ind!("political_stability", "Political Stability", "PV.EST",
             Pillar::Institutional, -2.5, 2.5),
        ind!("voice_accountability", "Voice and Accountability", "VA.EST",
             Pillar::Institutional, -2.5, 2.5),

        // =====================================================================
        // INFRASTRUCTURE Pillar
        // =====================================================================
        ind!("road_density", "Road Density (km per 100 sq. km)", "IS.ROD.DNST.K2",
             Pillar::Infrastructure, 0.0, 200.0),
        ind!("paved_roads", "Paved Roads (% of total)", "IS.ROD.PAVE.ZS",
             Pillar::Infrastructure, 0.0, 100.0),
        ind!("electricity", "Access to Electricity (%)", "EG.ELC.ACCS.ZS",
             Pillar::Infrastructure, 0.0, 100.0),
        ind!("internet", "Internet Users (% of population)", "IT.NET.USER.ZS",
             Pillar::Infrastructure, 0.0, 100.0),
        ind!("mobile", "Mobile Subscriptions (per 100 people)", "IT.CEL.SETS.P2",
             Pillar::Infrastructure),
        ind!("logistics", "Logistics Performance Index", "LP.LPI.OVRL.XQ",
             Pillar::Infrastructure, 1.0, 5.0),
    ]
});

pub struct Registry;

impl Registry {
    /// Look up an indicator definition by slug.
    pub fn get_metadata(slug: &str) -> Option<&'static IndicatorMetadata> {
        INDICATORS.iter().find(|m| m.slug == slug)
    }

    /// All indicators belonging to one pillar.
    pub fn for_pillar(pillar: Pillar) -> Vec<&'static IndicatorMetadata> {
        INDICATORS.iter().filter(|m| m.pillar == pillar).collect()
    }

    pub fn all() -> &'static [IndicatorMetadata] {
        &INDICATORS
    }
}
