mod data_province;

pub use data_province::{fallback_provinces, province_full_name};
