// Unit conversions for provider values (OpenWeather reports SI units)

const MPS_TO_MPH: f64 = 2.237;

/// Convert Kelvin to Fahrenheit. No validation: any real input is accepted.
pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    (kelvin - 273.15) * 9.0 / 5.0 + 32.0
}

pub fn meters_per_second_to_mph(mps: f64) -> f64 {
    mps * MPS_TO_MPH
}
