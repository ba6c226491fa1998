use rand::distributions::{Distribution, Standard};
use rand::{thread_rng, Rng};

use crate::{Modular, Residue};

/// Samples uniformly from `[0, P)`.
impl<const P: Residue> Distribution<Modular<P>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Modular<P> {
        Modular::from_canonical(rng.gen_range(0..Modular::<P>::MODULUS))
    }
}

impl<const P: Residue> Modular<P> {
    /// Generates a uniformly random value with the thread-local generator.
    #[inline]
    pub fn random() -> Self {
        thread_rng().gen()
    }

    /// Generates a uniformly random value with `rng`.
    #[inline]
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }
}
