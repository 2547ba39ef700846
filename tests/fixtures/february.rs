//! Daily relative humidity (%) for February in three northern Italian cities.

pub const GENOVA: [f64; 28] = [
    81.0, 79.0, 77.0, 80.0, 84.0, 88.0, 90.0, 86.0, 75.0, 70.0, 68.0, 72.0, 74.0, 78.0, 82.0, 85.0,
    83.0, 80.0, 76.0, 73.0, 71.0, 69.0, 74.0, 79.0, 82.0, 84.0, 80.0, 77.0,
];

pub const MILANO: [f64; 28] = [
    92.0, 90.0, 88.0, 85.0, 80.0, 76.0, 72.0, 70.0, 74.0, 79.0, 83.0, 87.0, 90.0, 93.0, 91.0, 89.0,
    86.0, 84.0, 81.0, 78.0, 76.0, 75.0, 77.0, 80.0, 83.0, 86.0, 88.0, 90.0,
];

pub const TORINO: [f64; 28] = [
    70.0, 73.0, 76.0, 79.0, 83.0, 86.0, 88.0, 90.0, 92.0, 89.0, 85.0, 81.0, 77.0, 73.0, 70.0, 68.0,
    67.0, 69.0, 72.0, 75.0, 78.0, 81.0, 84.0, 86.0, 87.0, 85.0, 82.0, 79.0,
];

pub const CITIES: [(&str, &[f64]); 3] = [("Genova", &GENOVA), ("Milano", &MILANO), ("Torino", &TORINO)];
