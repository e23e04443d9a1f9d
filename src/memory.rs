//! The memory organization model: the four input parameters and the chip
//! grid derived from them.

use crate::error::MemgridError;

/// The four integers describing a memory built from identical chips.
///
/// Immutable once constructed; the constructor enforces that every field is
/// positive, so a value of this type always describes a plausible memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySpec {
    memory_capacity: u64,
    memory_word_size: u64,
    chip_capacity: u64,
    chip_word_size: u64,
}

impl MemorySpec {
    /// Creates a validated memory specification.
    ///
    /// # Errors
    ///
    /// Returns [`MemgridError::InvalidSpec`] if any parameter is zero.
    pub fn new(
        memory_capacity: u64,
        memory_word_size: u64,
        chip_capacity: u64,
        chip_word_size: u64,
    ) -> Result<Self, MemgridError> {
        if memory_capacity == 0
            || memory_word_size == 0
            || chip_capacity == 0
            || chip_word_size == 0
        {
            return Err(MemgridError::InvalidSpec(
                "All values must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            memory_capacity,
            memory_word_size,
            chip_capacity,
            chip_word_size,
        })
    }

    pub fn memory_capacity(&self) -> u64 {
        self.memory_capacity
    }

    pub fn memory_word_size(&self) -> u64 {
        self.memory_word_size
    }

    pub fn chip_capacity(&self) -> u64 {
        self.chip_capacity
    }

    pub fn chip_word_size(&self) -> u64 {
        self.chip_word_size
    }

    /// Derives the chip grid for this memory.
    ///
    /// Rows come from the capacity ratio and columns from the word-size
    /// ratio, both by floor division. A capacity that is not an exact
    /// multiple of the chip capacity silently truncates to fewer rows; the
    /// untruncated remainder simply does not appear in the diagram.
    ///
    /// # Errors
    ///
    /// Returns [`MemgridError::InvalidSpec`] when the chip is larger than
    /// the memory in either dimension (zero rows or columns), or when the
    /// grid exceeds `u32` bounds.
    pub fn grid_dimensions(&self) -> Result<GridDimensions, MemgridError> {
        let rows = self.memory_capacity / self.chip_capacity;
        let columns = self.memory_word_size / self.chip_word_size;

        if rows == 0 || columns == 0 {
            return Err(MemgridError::InvalidSpec(
                "Memory must be greater than or equal to chip".to_string(),
            ));
        }

        let rows = u32::try_from(rows).map_err(|_| {
            MemgridError::InvalidSpec(format!("chip grid has too many rows ({rows})"))
        })?;
        let columns = u32::try_from(columns).map_err(|_| {
            MemgridError::InvalidSpec(format!("chip grid has too many columns ({columns})"))
        })?;

        Ok(GridDimensions { rows, columns })
    }
}

/// Dimensions of the chip grid: `rows` chips stacked vertically per column,
/// `columns` chips per memory word. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    rows: u32,
    columns: u32,
}

impl GridDimensions {
    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Total number of chips in the grid.
    pub fn chip_count(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.columns)
    }
}

#[cfg(test)]
impl GridDimensions {
    /// Test constructor bypassing `MemorySpec`; generator tests build grids
    /// directly.
    pub fn for_tests(rows: u32, columns: u32) -> Self {
        assert!(rows >= 1 && columns >= 1);
        Self { rows, columns }
    }
}
