use serde::Serialize;
use strum::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Hvac,
    Lighting,
    Water,
    Demand,
}

/// Curated advice shown next to the simulator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub impact: Impact,
    pub estimated_savings: &'static str,
}

static CATALOGUE: &[Recommendation] = &[
    Recommendation {
        id: 1,
        title: "Raise AC setpoint to 24°C",
        description: "Each degree above 22°C trims roughly 6% of cooling load with little comfort impact up to 24°C.",
        category: Category::Hvac,
        impact: Impact::High,
        estimated_savings: "12% of HVAC energy",
    },
    Recommendation {
        id: 2,
        title: "Enroll in the DISCOM demand-response program",
        description: "Shedding load during utility peak events earns a flat monthly rebate.",
        category: Category::Demand,
        impact: Impact::High,
        estimated_savings: "₹5,000 per month",
    },
    Recommendation {
        id: 3,
        title: "Pre-cool before peak tariff hours",
        description: "Run chillers harder in the early afternoon and coast through the evening peak.",
        category: Category::Hvac,
        impact: Impact::Medium,
        estimated_savings: "8% of peak-hour cost",
    },
    Recommendation {
        id: 4,
        title: "Switch corridor lighting to occupancy sensors",
        description: "Corridors and stairwells are unoccupied most of the day.",
        category: Category::Lighting,
        impact: Impact::Medium,
        estimated_savings: "1,200 kWh per month",
    },
    Recommendation {
        id: 5,
        title: "Fix leaks flagged by the night-flow baseline",
        description: "Water use between 01:00 and 04:00 above baseline usually indicates leaking fixtures.",
        category: Category::Water,
        impact: Impact::Low,
        estimated_savings: "6% of water use",
    },
];

/// Recommendations in display order.
pub fn recommendations() -> &'static [Recommendation] {
    CATALOGUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_is_ordered_and_unique() {
        let ids: Vec<u32> = recommendations().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn serializes_lowercase_enums() {
        let json = serde_json::to_value(&recommendations()[0]).unwrap();
        assert_eq!(json["category"], "hvac");
        assert_eq!(json["impact"], "high");
        assert!(json.get("estimatedSavings").is_some());
    }
}
