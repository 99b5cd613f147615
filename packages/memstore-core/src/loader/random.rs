//! Seeded synthetic row source.

use std::marker::PhantomData;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::DataLoader;
use crate::codec::{BigEndian, ByteFormat};
use crate::error::{Result, StoreError};

/// Generates `num_rows x num_cols` values uniformly drawn from `0..max_value`.
///
/// The same seed always yields the same rows.
#[derive(Debug, Clone)]
pub struct RandomizedLoader<F: ByteFormat = BigEndian> {
    num_rows: usize,
    num_cols: usize,
    max_value: i32,
    seed: u64,
    _format: PhantomData<F>,
}

impl RandomizedLoader<BigEndian> {
    pub fn new(num_rows: usize, num_cols: usize, max_value: i32, seed: u64) -> Self {
        Self::with_format(num_rows, num_cols, max_value, seed)
    }
}

impl<F: ByteFormat> RandomizedLoader<F> {
    pub fn with_format(num_rows: usize, num_cols: usize, max_value: i32, seed: u64) -> Self {
        Self {
            num_rows,
            num_cols,
            max_value,
            seed,
            _format: PhantomData,
        }
    }
}

impl<F: ByteFormat> DataLoader for RandomizedLoader<F> {
    type Format = F;

    fn num_cols(&mut self) -> Result<usize> {
        Ok(self.num_cols)
    }

    fn rows(&mut self) -> Result<Vec<Vec<u8>>> {
        if self.max_value <= 0 {
            return Err(StoreError::InvalidConfig(format!(
                "max_value must be positive, got {}",
                self.max_value
            )));
        }

        let row_len = self
            .num_cols
            .checked_mul(F::FIELD_LEN)
            .ok_or(StoreError::CapacityOverflow {
                operation: "random row allocation",
            })?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let rows = (0..self.num_rows)
            .map(|_| {
                let mut row = vec![0u8; row_len];
                for col in 0..self.num_cols {
                    F::write_field(&mut row, col * F::FIELD_LEN, rng.gen_range(0..self.max_value));
                }
                row
            })
            .collect();
        Ok(rows)
    }
}
