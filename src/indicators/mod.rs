use serde::Serialize;

pub mod registry;

/// The four thematic groups a resilience indicator can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pillar {
    Financial,
    Social,
    Institutional,
    Infrastructure,
}

impl Pillar {
    pub const ALL: [Pillar; 4] = [
        Pillar::Financial,
        Pillar::Social,
        Pillar::Institutional,
        Pillar::Infrastructure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::Financial => "financial",
            Pillar::Social => "social",
            Pillar::Institutional => "institutional",
            Pillar::Infrastructure => "infrastructure",
        }
    }
}
