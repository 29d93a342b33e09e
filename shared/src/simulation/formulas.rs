//! Agronomic formulas
//!
//! Pure functions turning weather, soil, herd, and land-use inputs into
//! solar radiation, growth rate, daily forage yield, and daily feed needs.

use crate::models::{
    Breed, DailyFeedNeed, FeedSupplement, ForageData, HealthStatus, HerdProperties, NutrientLevel,
    SoilParameters, SoilType, WeatherObservation,
};

// Constants for the Hargreaves-Samani model
const HARGREAVES_K: f64 = 0.0023;
/// Base temperature for growth in Celsius.
const BASE_TEMP: f64 = 10.0;
/// Maximum temperature for optimal growth in Celsius.
const MAX_TEMP: f64 = 30.0;
const TEMP_FACTOR: f64 = 0.5;
const HUMIDITY_FACTOR: f64 = 0.3;
const PRECIPITATION_FACTOR: f64 = 0.1;
const RADIATION_FACTOR: f64 = 0.2;

const BASE_GROWTH_RATE: f64 = 1.05;

// Feed demand coefficients, kg milk-equivalent per kg milk produced
const ENERGY_COEFFICIENT: f64 = 0.3;
const PROTEIN_COEFFICIENT: f64 = 0.15;

// Reference animal the per-cow demand scales against
const REFERENCE_WEIGHT_KG: f64 = 450.0;
const REFERENCE_FAT_PCT: f64 = 3.8;
const REFERENCE_PROTEIN_PCT: f64 = 3.2;

/// Hargreaves-Samani estimate of daily solar radiation from a temperature
/// range and sunrise/sunset epochs.
///
/// Equal min and max temperatures would zero the square-root term, so the
/// minimum is lowered by 10 °C in that case. That is an edge-case policy,
/// not physics. Callers must never pass `temp_max < temp_min`.
pub fn calculate_solar_radiation(temp_min: f64, temp_max: f64, sunrise: i64, sunset: i64) -> f64 {
    let temp_min = if temp_max == temp_min {
        temp_min - 10.0
    } else {
        temp_min
    };

    let daylight_hours = (sunset - sunrise).abs() as f64 / 3600.0;
    let temp_mean = (temp_max + temp_min) / 2.0;

    HARGREAVES_K * (temp_max - temp_min).sqrt() * (temp_mean + 17.8) * daylight_hours
}

/// Compounding daily growth multiplier.
///
/// Starts at the base rate and applies independent adjustments per factor.
/// The result is used as `rate^(day + 1)`, so each simulated day amplifies
/// yield exponentially; day index 0 already uses exponent 1.
pub fn calculate_growth_rate(weather: &WeatherObservation, soil: &SoilParameters) -> f64 {
    let mut rate = BASE_GROWTH_RATE;

    let temperature = weather.temperature_on(0);
    if temperature > 20.0 && temperature < 30.0 {
        rate += 0.01;
    } else if temperature < 10.0 || temperature > 35.0 {
        rate -= 0.01;
    }

    let radiation = weather.radiation_on(0);
    if radiation > 20.0 {
        rate += 0.01;
    } else if radiation < 10.0 {
        rate -= 0.01;
    }

    let retention = soil
        .water_retention
        .unwrap_or(SoilParameters::DEFAULT_WATER_RETENTION);
    if retention > 0.3 {
        rate += 0.01;
    } else if retention < 0.1 {
        rate -= 0.01;
    }

    match soil.nutrient_content {
        Some(NutrientLevel::High) => rate += 0.01,
        Some(NutrientLevel::Low) => rate -= 0.01,
        _ => {}
    }

    match soil.soil_type {
        Some(SoilType::Peat) => rate += 0.02,
        Some(SoilType::ClayLoam) => rate -= 0.02,
        _ => {}
    }

    rate
}

/// Daily forage yield in kg over the horizon. Negative values are a valid
/// deficit signal, not an error.
pub fn calculate_forage_yield(
    days: usize,
    weather: &WeatherObservation,
    soil: &SoilParameters,
    forage: &ForageData,
) -> Vec<f64> {
    let soil_retention = soil
        .water_retention
        .unwrap_or(SoilParameters::DEFAULT_WATER_RETENTION);
    let growth_rate = calculate_growth_rate(weather, soil);

    let arable_area = forage.arable_area.unwrap_or(ForageData::DEFAULT_AREA_HA);
    let grassland_area = forage
        .grassland_area
        .unwrap_or(ForageData::DEFAULT_AREA_HA);

    (0..days)
        .map(|i| {
            let temp = weather.temperature_on(i);
            let humidity = weather.humidity_on(i);
            let precipitation = weather.precipitation_on(i);
            let radiation = weather.radiation_on(i);

            let temp_effect = if temp > BASE_TEMP && temp < MAX_TEMP {
                TEMP_FACTOR * (temp - BASE_TEMP)
            } else {
                0.0
            };
            let humidity_effect = HUMIDITY_FACTOR * (100.0 - humidity);
            let precipitation_effect = PRECIPITATION_FACTOR * precipitation;
            let radiation_effect = RADIATION_FACTOR * radiation;

            (arable_area + grassland_area)
                * (temp_effect + humidity_effect + precipitation_effect + radiation_effect
                    - soil_retention)
                * growth_rate.powi(i as i32 + 1)
        })
        .collect()
}

/// Daily herd feed needs over the horizon. No day-to-day variation is
/// modeled, so every entry is identical.
pub fn calculate_feed_needs(days: usize, herd: &HerdProperties) -> Vec<DailyFeedNeed> {
    let milk_production = herd
        .milk_production
        .unwrap_or(HerdProperties::DEFAULT_MILK_PRODUCTION_KG);
    let herd_size = herd.herd_size.unwrap_or(HerdProperties::DEFAULT_HERD_SIZE);
    let weight = herd.weight.unwrap_or(REFERENCE_WEIGHT_KG);
    let fat_content = herd.fat_content.unwrap_or(REFERENCE_FAT_PCT);
    let protein_content = herd.protein_content.unwrap_or(REFERENCE_PROTEIN_PCT);

    let age_factor = if herd.age.is_some_and(|a| a > 5.0) {
        0.9
    } else {
        1.0
    };
    let breed_factor = herd.breed.map_or(1.0, Breed::feed_factor);
    let health_factor = herd.health_status.map_or(1.0, HealthStatus::feed_factor);
    let supplement_factor = herd
        .feed_supplement
        .map_or(1.0, FeedSupplement::feed_factor);

    let energy_per_cow = milk_production
        * ENERGY_COEFFICIENT
        * (weight / REFERENCE_WEIGHT_KG)
        * (fat_content / REFERENCE_FAT_PCT)
        * age_factor
        * health_factor
        * supplement_factor
        * breed_factor;
    let protein_per_cow = milk_production
        * PROTEIN_COEFFICIENT
        * (weight / REFERENCE_WEIGHT_KG)
        * (protein_content / REFERENCE_PROTEIN_PCT)
        * age_factor
        * health_factor
        * supplement_factor
        * breed_factor;

    vec![
        DailyFeedNeed {
            energy_kg: energy_per_cow * herd_size,
            protein_kg: protein_per_cow * herd_size,
        };
        days
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyValue;

    fn weather(temperature: f64, humidity: f64, precipitation: f64, radiation: f64) -> WeatherObservation {
        WeatherObservation {
            temperature: Some(DailyValue::Scalar(temperature)),
            humidity: Some(DailyValue::Scalar(humidity)),
            precipitation: Some(DailyValue::Scalar(precipitation)),
            radiation: Some(DailyValue::Scalar(radiation)),
            description: String::new(),
            country: None,
        }
    }

    #[test]
    fn solar_radiation_adjusts_equal_temperatures() {
        // min == max lowers the minimum by 10: daylight 10h, mean 5.
        let radiation = calculate_solar_radiation(10.0, 10.0, 0, 36_000);
        let expected = 0.0023 * 10.0f64.sqrt() * 22.8 * 10.0;
        assert!((radiation - expected).abs() < 1e-12);
        assert!((radiation - 1.658).abs() < 1e-3);
    }

    #[test]
    fn solar_radiation_is_nonnegative_for_valid_ranges() {
        let radiation = calculate_solar_radiation(8.0, 21.0, 1_700_000_000, 1_700_050_000);
        assert!(radiation >= 0.0);
    }

    #[test]
    fn growth_rate_favorable_conditions() {
        // 25 °C, radiation 25, retention 0.35, high nutrients: four bumps.
        let soil = SoilParameters {
            soil_type: None,
            water_retention: Some(0.35),
            nutrient_content: Some(NutrientLevel::High),
        };
        let rate = calculate_growth_rate(&weather(25.0, 50.0, 0.0, 25.0), &soil);
        assert!((rate - 1.09).abs() < 1e-12);
    }

    #[test]
    fn growth_rate_soil_type_adjustments() {
        let neutral = weather(15.0, 50.0, 0.0, 15.0);
        let mut soil = SoilParameters {
            soil_type: Some(SoilType::Peat),
            water_retention: Some(0.2),
            nutrient_content: Some(NutrientLevel::Medium),
        };
        assert!((calculate_growth_rate(&neutral, &soil) - 1.07).abs() < 1e-12);
        soil.soil_type = Some(SoilType::ClayLoam);
        assert!((calculate_growth_rate(&neutral, &soil) - 1.03).abs() < 1e-12);
    }

    #[test]
    fn forage_yield_compounds_by_growth_rate() {
        let w = weather(25.0, 60.0, 5.0, 18.0);
        let soil = SoilParameters::default();
        let forage = ForageData {
            arable_area: Some(10.0),
            grassland_area: Some(20.0),
            legume_share: None,
            nitrogen_input: None,
        };
        let rate = calculate_growth_rate(&w, &soil);
        let yields = calculate_forage_yield(5, &w, &soil, &forage);
        assert_eq!(yields.len(), 5);
        for i in 1..yields.len() {
            let ratio = yields[i] / yields[i - 1];
            assert!((ratio - rate).abs() < 1e-12);
        }
    }

    #[test]
    fn forage_yield_can_be_negative() {
        // Hot day outside the growth band with saturated humidity and no
        // radiation or rain: every positive term is zero, so retention
        // pushes the yield below zero.
        let w = weather(40.0, 100.0, 0.0, 0.0);
        let soil = SoilParameters {
            soil_type: None,
            water_retention: Some(0.3),
            nutrient_content: None,
        };
        let yields = calculate_forage_yield(3, &w, &soil, &ForageData::default());
        assert!(yields.iter().all(|y| *y < 0.0));
    }

    #[test]
    fn forage_yield_uses_per_day_series() {
        let w = WeatherObservation {
            temperature: Some(DailyValue::Series(vec![15.0, 25.0])),
            humidity: Some(DailyValue::Scalar(100.0)),
            precipitation: Some(DailyValue::Scalar(0.0)),
            radiation: Some(DailyValue::Scalar(15.0)),
            description: String::new(),
            country: None,
        };
        let soil = SoilParameters {
            soil_type: None,
            water_retention: Some(0.0),
            nutrient_content: None,
        };
        let forage = ForageData {
            arable_area: Some(0.5),
            grassland_area: Some(0.5),
            legume_share: None,
            nitrogen_input: None,
        };
        let rate = calculate_growth_rate(&w, &soil);
        let yields = calculate_forage_yield(3, &w, &soil, &forage);
        // Day 0: temp effect 2.5, radiation effect 3.0.
        assert!((yields[0] - 5.5 * rate).abs() < 1e-12);
        // Day 1: temp effect 7.5; day 2 clamps to the series' last entry.
        assert!((yields[1] - 10.5 * rate.powi(2)).abs() < 1e-12);
        assert!((yields[2] - 10.5 * rate.powi(3)).abs() < 1e-12);
    }

    #[test]
    fn feed_needs_reference_holstein_herd() {
        // 25 kg milk, reference weight/fat/protein, Holstein factor 1.2:
        // energy 9 kg per cow, 90 kg for ten cows.
        let herd = HerdProperties {
            breed: Some(Breed::Holstein),
            weight: Some(450.0),
            calving_interval: None,
            milk_production: Some(25.0),
            fat_content: Some(3.8),
            protein_content: Some(3.2),
            age: Some(3.0),
            health_status: Some(HealthStatus::Healthy),
            feed_supplement: Some(FeedSupplement::None),
            herd_size: Some(10.0),
        };
        let needs = calculate_feed_needs(1, &herd);
        assert_eq!(needs.len(), 1);
        assert!((needs[0].energy_kg - 90.0).abs() < 1e-9);
        assert!((needs[0].protein_kg - 45.0).abs() < 1e-9);
    }

    #[test]
    fn feed_needs_are_constant_across_days() {
        let needs = calculate_feed_needs(7, &HerdProperties::default());
        assert_eq!(needs.len(), 7);
        assert!(needs.iter().all(|n| *n == needs[0]));
    }

    #[test]
    fn feed_needs_sickness_and_age_modifiers() {
        let herd = HerdProperties {
            breed: Some(Breed::Ayrshire),
            weight: Some(450.0),
            calving_interval: None,
            milk_production: Some(20.0),
            fat_content: Some(3.8),
            protein_content: Some(3.2),
            age: Some(7.0),
            health_status: Some(HealthStatus::Sick),
            feed_supplement: None,
            herd_size: Some(1.0),
        };
        let needs = calculate_feed_needs(1, &herd);
        // 20 * 0.3 * 0.9 (age) * 1.3 (sick) = 7.02
        assert!((needs[0].energy_kg - 7.02).abs() < 1e-9);
    }
}
