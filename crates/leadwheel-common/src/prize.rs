//! Prize list and the random prize wheel

use parking_lot::Mutex;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Prizes offered by the wheel, in display order
pub const PRIZES: [&str; 8] = [
    "Desconto de 50%",
    "Frete Grátis",
    "Produto Grátis",
    "Cashback 20%",
    "Vale-compra R$ 100",
    "Desconto de 30%",
    "Brinde Especial",
    "Cupom R$ 50",
];

/// Uniform prize draw with replacement over [`PRIZES`].
///
/// The random source is owned by the wheel so it can be seeded for
/// reproducible draws.
pub struct PrizeWheel {
    rng: Mutex<StdRng>,
}

impl PrizeWheel {
    /// Wheel seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Wheel with a fixed seed, yielding the same draw sequence every time
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_default()
    }

    pub fn draw(&self) -> &'static str {
        let index = self.rng.lock().random_range(0..PRIZES.len());
        PRIZES[index]
    }

    pub fn prizes(&self) -> &'static [&'static str] {
        &PRIZES
    }
}

impl Default for PrizeWheel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PrizeWheel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrizeWheel")
            .field("prizes", &PRIZES.len())
            .finish()
    }
}
