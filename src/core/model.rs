use serde::{Deserialize, Serialize};

/// Environmental readings for one location at one point in time.
///
/// A new reading is a new value; nothing in the pipeline mutates one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RiskFactors {
    /// Accumulated rainfall in mm
    pub rainfall: f64,
    /// Average slope in degrees
    pub slope: f64,
    /// Soil moisture percentage
    pub soil_moisture: f64,
    /// Deforested area percentage
    pub deforestation: f64,
    /// Area affected by road cutting, percentage
    pub road_cuts: f64,
}

impl RiskFactors {
    pub fn new(
        rainfall: f64,
        slope: f64,
        soil_moisture: f64,
        deforestation: f64,
        road_cuts: f64,
    ) -> Self {
        Self {
            rainfall,
            slope,
            soil_moisture,
            deforestation,
            road_cuts,
        }
    }

    /// Raw reading for a single factor.
    pub fn value(&self, factor: RiskFactor) -> f64 {
        match factor {
            RiskFactor::Rainfall => self.rainfall,
            RiskFactor::Slope => self.slope,
            RiskFactor::SoilMoisture => self.soil_moisture,
            RiskFactor::Deforestation => self.deforestation,
            RiskFactor::RoadCuts => self.road_cuts,
        }
    }
}

/// The five weighted inputs of the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskFactor {
    Rainfall,
    Slope,
    SoilMoisture,
    Deforestation,
    RoadCuts,
}

impl RiskFactor {
    pub const ALL: [RiskFactor; 5] = [
        Self::Rainfall,
        Self::Slope,
        Self::SoilMoisture,
        Self::Deforestation,
        Self::RoadCuts,
    ];

    /// Label used in contribution breakdowns
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rainfall => "Rainfall surge",
            Self::Slope => "Steep slope",
            Self::SoilMoisture => "Soil moisture",
            Self::Deforestation => "Vegetation loss",
            Self::RoadCuts => "Road cutting",
        }
    }

    /// Reading at which the factor's sub-score reaches 100.
    pub fn saturation_point(&self) -> f64 {
        match self {
            Self::Rainfall => 400.0,
            Self::Slope => 50.0,
            Self::SoilMoisture => 100.0,
            Self::Deforestation => 30.0,
            Self::RoadCuts => 30.0,
        }
    }

    /// Fusion weight. Weights sum to 1.0.
    pub fn weight(&self) -> f64 {
        match self {
            Self::Rainfall => 0.35,
            Self::Slope => 0.30,
            Self::SoilMoisture => 0.20,
            Self::Deforestation => 0.10,
            Self::RoadCuts => 0.05,
        }
    }
}

/// WGS84 coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}
