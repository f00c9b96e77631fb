//! Group contributions of Joback & Reid (1987).
use super::JobackRecord;
use gcprop_core::parameter::{GroupRecord, GroupTable};
use once_cell::sync::Lazy;
use std::sync::Arc;

const NA: f64 = f64::NAN;

/// description, formula,
/// [tc, pc, vc, tb, tf, hf, gf, a, b, c, d, hm, hv, mua, mub]
///
/// hm and hv are in cal/mol.
#[rustfmt::skip]
const GROUPS: [(&str, &str, [f64; 15]); 41] = [
    // non-ring increments
    ("-CH3", "CH3", [0.0141, -0.0012, 65.0, 23.58, -5.10, -76.45, -43.96, 1.95e1, -8.08e-3, 1.53e-4, -9.67e-8, 217.0, 567.0, 548.29, -1.719]),
    ("-CH2-", "CH2", [0.0189, 0.0000, 56.0, 22.88, 11.27, -20.64, 8.42, -9.09e-1, 9.50e-2, -5.44e-5, 1.19e-8, 619.0, 532.0, 94.16, -0.199]),
    (">CH-", "CH", [0.0164, 0.0020, 41.0, 21.74, 12.64, 29.89, 58.36, -2.30e1, 2.04e-1, -2.65e-4, 1.20e-7, 179.0, 404.0, -322.15, 1.187]),
    (">C<", "C", [0.0067, 0.0043, 27.0, 18.25, 46.43, 82.23, 116.02, -6.62e1, 4.27e-1, -6.41e-4, 3.01e-7, -349.0, 152.0, -573.56, 2.307]),
    ("=CH2", "CH2", [0.0113, -0.0028, 56.0, 18.18, -4.32, -9.630, 3.77, 2.36e1, -3.81e-2, 1.72e-4, -1.03e-7, -113.0, 412.0, 495.01, -1.539]),
    ("=CH-", "CH", [0.0129, -0.0006, 46.0, 24.96, 8.73, 37.97, 48.53, -8.00, 1.05e-1, -9.63e-5, 3.56e-8, 643.0, 527.0, 82.28, -0.242]),
    ("=C<", "C", [0.0117, 0.0011, 38.0, 24.14, 11.14, 83.99, 92.36, -2.81e1, 2.08e-1, -3.06e-4, 1.46e-7, 732.0, 511.0, NA, NA]),
    ("=C=", "C", [0.0026, 0.0028, 36.0, 26.15, 17.78, 142.14, 136.70, 2.74e1, -5.57e-2, 1.01e-4, -5.02e-8, 1128.0, 636.0, NA, NA]),
    ("≡CH", "CH", [0.0027, -0.0008, 46.0, 9.20, -11.18, 79.30, 77.71, 2.45e1, -2.71e-2, 1.11e-4, -6.78e-8, 555.0, 276.0, NA, NA]),
    ("≡C-", "C", [0.0020, 0.0016, 37.0, 27.38, 64.32, 115.51, 109.82, 7.87, 2.01e-2, -8.33e-6, 1.39e-9, 992.0, 789.0, NA, NA]),
    // ring increments
    ("-CH2- (ring)", "CH2", [0.0100, 0.0025, 48.0, 27.15, 7.75, -26.80, -3.68, -6.03, 8.54e-2, -8.00e-6, -1.80e-8, 117.0, 573.0, 307.53, -0.798]),
    (">CH- (ring)", "CH", [0.0122, 0.0004, 38.0, 21.78, 19.88, 8.67, 40.99, -2.05e1, 1.62e-1, -1.60e-4, 6.24e-8, 775.0, 464.0, -394.29, 1.251]),
    (">C< (ring)", "C", [0.0042, 0.0061, 27.0, 21.32, 60.15, 79.72, 87.88, -9.09e1, 5.57e-1, -9.00e-4, 4.69e-7, -328.0, 154.0, NA, NA]),
    ("=CH- (ring)", "CH", [0.0082, 0.0011, 41.0, 26.73, 8.13, 2.09, 11.30, -2.14, 5.74e-2, -1.64e-6, -1.59e-8, 263.0, 608.0, 259.65, -0.702]),
    ("=C< (ring)", "C", [0.0143, 0.0008, 32.0, 31.01, 37.02, 46.43, 54.05, -8.25, 1.01e-1, -1.42e-4, 6.78e-8, 572.0, 731.0, -245.74, 0.912]),
    // halogen increments
    ("-F", "F", [0.0111, -0.0057, 27.0, -0.03, -15.78, -251.92, -247.19, 2.65e1, -9.13e-2, 1.91e-4, -1.03e-7, 334.0, -160.0, NA, NA]),
    ("-Cl", "Cl", [0.0105, -0.0049, 58.0, 38.13, 13.55, -71.55, -64.31, 3.33e1, -9.63e-2, 1.87e-4, -9.96e-8, 601.0, 1083.0, 625.45, -1.814]),
    ("-Br", "Br", [0.0133, 0.0057, 71.0, 66.86, 43.43, -29.48, -38.06, 2.86e1, -6.49e-2, 1.36e-4, -7.45e-8, 861.0, 1573.0, 738.91, -2.038]),
    ("-I", "I", [0.0068, -0.0034, 97.0, 93.84, 41.69, 21.06, 5.74, 3.21e1, -6.41e-2, 1.26e-4, -6.87e-8, 651.0, 2275.0, 809.55, -2.224]),
    // oxygen increments
    ("-OH (alcohol)", "OH", [0.0741, 0.0112, 28.0, 92.88, 44.45, -208.04, -189.20, 2.57e1, -6.91e-2, 1.77e-4, -9.88e-8, 575.0, 4022.0, 2173.72, -5.057]),
    ("-OH (phenol)", "OH", [0.0240, 0.0184, -25.0, 76.34, 82.83, -221.65, -197.37, -2.81, 1.11e-1, -1.16e-4, 4.94e-8, 1073.0, 2987.0, 3018.17, -7.314]),
    ("-O- (nonring)", "O", [0.0168, 0.0015, 18.0, 22.42, 22.23, -132.22, -105.00, 2.55e1, -6.32e-2, 1.11e-4, -5.48e-8, 284.0, 576.0, 122.09, -0.386]),
    ("-O- (ring)", "O", [0.0098, 0.0048, 13.0, 31.22, 23.05, -138.16, -98.22, 1.22e1, -1.26e-2, 6.03e-5, -3.86e-8, 1405.0, 1119.0, 440.24, -0.953]),
    (">C=O (nonring)", "CO", [0.0380, 0.0031, 62.0, 76.75, 61.20, -133.22, -120.50, 6.45, 6.70e-2, -3.57e-5, 2.86e-9, 1001.0, 2144.0, 340.35, -0.350]),
    (">C=O (ring)", "CO", [0.0284, 0.0028, 55.0, 94.97, 75.97, -164.50, -126.27, 3.04e1, -8.29e-2, 2.36e-4, -1.31e-7, 0.0, 1588.0, NA, NA]),
    ("O=CH- (aldehyde)", "CHO", [0.0379, 0.0030, 82.0, 72.24, 36.90, -162.03, -143.48, 3.09e1, -3.36e-2, 1.60e-4, -9.88e-8, 764.0, 2173.0, 740.92, -1.713]),
    ("-COOH (acid)", "COOH", [0.0791, 0.0077, 89.0, 169.09, 155.50, -426.72, -387.87, 2.41e1, 4.27e-2, 8.04e-5, -6.87e-8, 2641.0, 4669.0, 1317.23, -2.578]),
    ("-COO- (ester)", "COO", [0.0481, 0.0005, 82.0, 81.10, 53.60, -337.92, -301.95, 2.45e1, 4.02e-2, 4.02e-5, -4.52e-8, 1663.0, 2302.0, 483.88, -0.966]),
    ("=O (other)", "O", [0.0143, 0.0101, 36.0, -10.50, 2.08, -247.61, -250.83, 6.82, 1.96e-2, 1.27e-5, -1.78e-8, 866.0, 1412.0, 675.24, -1.340]),
    // nitrogen increments
    ("-NH2", "NH2", [0.0243, 0.0109, 38.0, 73.23, 66.89, -22.02, 14.07, 2.69e1, -4.12e-2, 1.64e-4, -9.76e-8, 840.0, 2578.0, NA, NA]),
    (">NH (nonring)", "NH", [0.0295, 0.0077, 35.0, 50.17, 52.66, 53.47, 89.39, -1.21, 7.62e-2, -4.86e-5, 1.05e-8, 1219.0, 1538.0, NA, NA]),
    (">NH (ring)", "NH", [0.0130, 0.0114, 29.0, 52.82, 101.51, 31.65, 75.61, 1.18e1, -2.30e-2, 1.07e-4, -6.28e-8, 1790.0, 1656.0, NA, NA]),
    (">N- (nonring)", "N", [0.0169, 0.0074, 9.0, 11.74, 48.84, 123.34, 163.16, -3.11e1, 2.27e-1, -3.20e-4, 1.46e-7, 1124.0, 453.0, NA, NA]),
    ("-N= (nonring)", "N", [0.0255, -0.0099, NA, 74.60, NA, 23.61, NA, NA, NA, NA, NA, NA, 797.0, NA, NA]),
    ("-N= (ring)", "N", [0.0085, 0.0076, 34.0, 57.55, 68.40, 55.52, 79.93, 8.83, -3.84e-3, 4.35e-5, -2.60e-8, 872.0, 1560.0, NA, NA]),
    ("=NH", "NH", [NA, NA, NA, 83.08, 68.91, 93.70, 119.66, 5.69, -4.12e-3, 1.28e-4, -8.88e-8, NA, 2908.0, NA, NA]),
    ("-CN", "CN", [0.0496, -0.0101, 91.0, 125.66, 59.89, 88.43, 89.22, 3.65e1, -7.33e-2, 1.84e-4, -1.03e-7, 577.0, 3071.0, NA, NA]),
    ("-NO2", "NO2", [0.0437, 0.0064, 91.0, 152.54, 127.24, -66.57, -16.83, 2.59e1, -3.74e-3, 1.29e-4, -8.88e-8, 2313.0, 4000.0, NA, NA]),
    // sulfur increments
    ("-SH", "SH", [0.0031, 0.0084, 63.0, 63.56, 20.09, -17.33, -22.99, 3.53e1, -7.58e-2, 1.85e-4, -1.03e-7, 564.0, 1645.0, NA, NA]),
    ("-S- (nonring)", "S", [0.0119, 0.0049, 54.0, 68.78, 34.40, 41.87, 33.12, 1.96e1, -5.61e-3, 4.02e-5, -2.76e-8, 987.0, 1629.0, NA, NA]),
    ("-S- (ring)", "S", [0.0019, 0.0051, 38.0, 52.10, 79.93, 39.10, 27.76, 1.67e1, 4.81e-3, 2.77e-5, -2.11e-8, 372.0, 1430.0, NA, NA]),
];

/// The built-in Joback table, shared by all [Joback](super::Joback) instances.
pub static JOBACK_TABLE: Lazy<Arc<GroupTable<JobackRecord>>> = Lazy::new(|| {
    let records = GROUPS
        .iter()
        .enumerate()
        .map(|(i, &(description, formula, row))| {
            GroupRecord::new(i, description, formula, JobackRecord::from_row(row))
        })
        .collect();
    Arc::new(
        GroupTable::from_records("Joback", records)
            .expect("the built-in Joback groups have dense indices and valid formulas"),
    )
});
