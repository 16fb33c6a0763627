//src/dungeon/src/rng.rs
use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg32;

/// 地牢专用的确定性RNG，同一种子产生同一组房间
///
/// 范围取值等操作通过 `rand::Rng` 的通用实现获得
#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: Pcg32,
}

impl DungeonRng {
    /// 使用指定种子创建RNG
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RngCore for DungeonRng {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst)
    }
}
