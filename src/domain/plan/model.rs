use crate::domain::pricing::PricingError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Meal subscription tier with a fixed per-meal price in rupiah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Diet,
    Protein,
    Royal,
}

impl Plan {
    pub const ALL: [Plan; 3] = [Plan::Diet, Plan::Protein, Plan::Royal];

    pub fn price_per_meal(&self) -> u32 {
        match self {
            Plan::Diet => 30_000,
            Plan::Protein => 40_000,
            Plan::Royal => 60_000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Diet => "diet",
            Plan::Protein => "protein",
            Plan::Royal => "royal",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Plan::Diet => "Diet Plan",
            Plan::Protein => "Protein Plan",
            Plan::Royal => "Royal Plan",
        }
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Plan {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diet" => Ok(Plan::Diet),
            "protein" => Ok(Plan::Protein),
            "royal" => Ok(Plan::Royal),
            other => Err(PricingError::UnknownPlan(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Breakfast, MealType::Lunch, MealType::Dinner];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
        }
    }
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MealType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealType::Breakfast),
            "lunch" => Ok(MealType::Lunch),
            "dinner" => Ok(MealType::Dinner),
            other => Err(PricingError::InvalidSelection(format!(
                "Invalid meal type: {}",
                other
            ))),
        }
    }
}

/// Weekday on which meals are delivered. Ordered Monday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DeliveryDay {
    pub const ALL: [DeliveryDay; 7] = [
        DeliveryDay::Monday,
        DeliveryDay::Tuesday,
        DeliveryDay::Wednesday,
        DeliveryDay::Thursday,
        DeliveryDay::Friday,
        DeliveryDay::Saturday,
        DeliveryDay::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryDay::Monday => "monday",
            DeliveryDay::Tuesday => "tuesday",
            DeliveryDay::Wednesday => "wednesday",
            DeliveryDay::Thursday => "thursday",
            DeliveryDay::Friday => "friday",
            DeliveryDay::Saturday => "saturday",
            DeliveryDay::Sunday => "sunday",
        }
    }
}

impl std::fmt::Display for DeliveryDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeliveryDay {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeliveryDay::ALL
            .iter()
            .copied()
            .find(|day| day.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| {
                PricingError::InvalidSelection(format!("Invalid delivery day: {}", s.trim()))
            })
    }
}
