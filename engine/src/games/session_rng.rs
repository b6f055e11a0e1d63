use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable random source shared by every bot decision in a session.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    /// `true` with probability `p`, clamped to `[0, 1]`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.random_bool(p.clamp(0.0, 1.0))
    }

    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.random_range(0..items.len());
        Some(items[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        for _ in 0..20 {
            assert_eq!(a.random_range(0..100usize), b.random_range(0..100usize));
        }
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_choose_empty_is_none() {
        let mut rng = SessionRng::new(1);
        assert_eq!(rng.choose::<usize>(&[]), None);
    }

    #[test]
    fn test_choose_returns_member() {
        let mut rng = SessionRng::new(3);
        let items = [4usize, 9, 11];
        for _ in 0..50 {
            assert!(items.contains(&rng.choose(&items).unwrap()));
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = SessionRng::new(5);
        assert!(rng.chance(1.0));
        assert!(!rng.chance(0.0));
        assert!(rng.chance(2.5));
    }
}
