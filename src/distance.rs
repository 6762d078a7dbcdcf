// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

/// Radius of Earth used for road-network distances, in miles.
const EARTH_RADIUS: f64 = 3959.0;

/// Diameter of Earth used for road-network distances, in miles.
const EARTH_DIAMETER: f64 = EARTH_RADIUS + EARTH_RADIUS;

/// Calculates the great-circle distance between two lat-lon positions (in degrees)
/// on Earth using the `haversine formula <https://en.wikipedia.org/wiki/Haversine_formula>`_.
/// Returns the result in miles.
///
/// Used as the heuristic by [greedy_best_first](crate::greedy_best_first) and
/// [a_star](crate::a_star).
pub fn earth_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = lat1.to_radians();
    let lon1 = lon1.to_radians();
    let lat2 = lat2.to_radians();
    let lon2 = lon2.to_radians();

    let sin_dlat_half = ((lat2 - lat1) * 0.5).sin();
    let sin_dlon_half = ((lon2 - lon1) * 0.5).sin();

    let h = sin_dlat_half * sin_dlat_half + lat1.cos() * lat2.cos() * sin_dlon_half * sin_dlon_half;

    EARTH_DIAMETER * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_almost_eq {
        ($a:expr, $b:expr, $eps:expr) => {
            assert!(
                (($a - $b).abs() < $eps),
                "assertion failed: {} ≈ {}",
                $a,
                $b
            )
        };
    }

    #[test]
    fn zero_for_same_point() {
        assert_eq!(earth_distance(45.5152, -122.6784, 45.5152, -122.6784), 0.0);
    }

    #[test]
    fn symmetric() {
        let portland_to_salem = earth_distance(45.5152, -122.6784, 44.9429, -123.0351);
        let salem_to_portland = earth_distance(44.9429, -123.0351, 45.5152, -122.6784);
        assert_eq!(portland_to_salem, salem_to_portland);
    }

    #[test]
    fn one_degree_along_equator() {
        // 2πR / 360
        assert_almost_eq!(earth_distance(0.0, 0.0, 0.0, 1.0), 69.0975, 1e-3);
    }

    #[test]
    fn portland_to_eugene() {
        assert_almost_eq!(earth_distance(45.5152, -122.6784, 44.0521, -123.0868), 103.06, 0.5);
    }
}
