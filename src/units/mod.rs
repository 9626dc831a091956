//! 단위 정의 및 변환 모듈 모음.

pub mod temperature;

pub use temperature::{
    convert_temperature, delta_to_kelvin, from_kelvin, to_celsius, to_kelvin, TemperatureUnit,
};
