use nalgebra::Vector3;

// 전역 RNG 대신 시드를 직접 들고 다님. 같은 (픽셀, 프레임, 바운스)면 언제나 같은 값이 나와야 함
pub fn pcg_hash(input: u32) -> u32 {
    let state = input.wrapping_mul(747796405).wrapping_add(2891336453);
    let word = ((state >> ((state >> 28) + 4)) ^ state).wrapping_mul(277803737);
    (word >> 22) ^ word
}

/// 시드를 다음 해시 값으로 바꾸고 [0, 1] 범위의 실수를 돌려줌.
///
/// `u32::MAX` 근처의 해시는 f32 반올림 때문에 정확히 1.0이 될 수 있음.
pub fn random_float(seed: &mut u32) -> f32 {
    *seed = pcg_hash(*seed);
    *seed as f32 / u32::MAX as f32
}

pub fn random_range(min: f32, max: f32, seed: &mut u32) -> f32 {
    random_float(seed) * (max - min) + min
}

// x, y, z 순서로 뽑음. 순서가 바뀌면 결과 이미지도 바뀜
pub fn random_vec(min: f32, max: f32, seed: &mut u32) -> Vector3<f32> {
    let x = random_range(min, max, seed);
    let y = random_range(min, max, seed);
    let z = random_range(min, max, seed);
    Vector3::new(x, y, z)
}

// 기각 샘플링 없이 정육면체 안의 점을 정규화만 함.
// 세 값이 모두 0이면 NaN 벡터가 나오지만 확률이 너무 낮아서 그대로 둠
pub fn in_unit_sphere(seed: &mut u32) -> Vector3<f32> {
    random_vec(-1.0, 1.0, seed).normalize()
}

// GLSL reflect와 같음. axis가 정규화되어 있지 않아도 그대로 계산함
pub fn reflect(incident: &Vector3<f32>, axis: &Vector3<f32>) -> Vector3<f32> {
    incident - axis * (2.0 * axis.dot(incident))
}

pub fn mix(from: &Vector3<f32>, to: &Vector3<f32>, factor: f32) -> Vector3<f32> {
    from * (1.0 - factor) + to * factor
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::Vector3;

    use super::*;

    #[test]
    fn pcg_hash_known_values() {
        assert_eq!(pcg_hash(0), 129708002);
        assert_eq!(pcg_hash(1), 2831084092);
        assert_eq!(pcg_hash(42), 1223963391);
    }

    #[test]
    fn random_float_advances_seed() {
        let mut seed = 42;
        random_float(&mut seed);
        assert_eq!(seed, 1223963391);
        random_float(&mut seed);
        assert_eq!(seed, 2785308739);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = 1234;
        let mut b = 1234;
        let first: Vec<f32> = (0..32).map(|_| random_float(&mut a)).collect();
        let second: Vec<f32> = (0..32).map(|_| random_float(&mut b)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_rarely_collide() {
        let mut a = 7;
        let mut b = 8;
        let collisions = (0..64)
            .filter(|_| random_float(&mut a) == random_float(&mut b))
            .count();
        assert_eq!(collisions, 0);
    }

    #[test]
    fn random_range_stays_in_bounds() {
        let mut seed = 99;
        for _ in 0..1000 {
            let value = random_range(-0.5, 0.5, &mut seed);
            assert!((-0.5..=0.5).contains(&value));
        }
    }

    #[test]
    fn in_unit_sphere_is_normalized() {
        let mut seed = 5;
        for _ in 0..100 {
            assert_relative_eq!(in_unit_sphere(&mut seed).norm(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn reflect_flips_normal_component() {
        let reflected = reflect(&Vector3::new(1.0, -1.0, 0.0), &Vector3::y());
        assert_abs_diff_eq!(reflected, Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn mix_endpoints() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(3.0, 2.0, 1.0);
        assert_eq!(mix(&a, &b, 0.0), a);
        assert_eq!(mix(&a, &b, 1.0), b);
        assert_abs_diff_eq!(mix(&a, &b, 0.5), Vector3::new(2.0, 2.0, 2.0));
    }
}
