//! Core constants for the cart analytics system.
//!
//! Centralized constants to replace magic numbers throughout the
//! codebase.

/// Fixed-point arithmetic constants
pub mod fixed_point {
    /// 4-decimal fixed-point scale factor (prices, quantities)
    pub const SCALE_4: i64 = 10000;

    /// 2-decimal fixed-point scale factor (cent-denominated inputs)
    pub const SCALE_2: i64 = 100;
}

/// Collection capacity constants
pub mod capacity {
    /// Category accumulator pre-allocation (category cardinality is small)
    pub const CATEGORY_ACCUMULATOR: usize = 8;

    /// Advisory upper bound on line items per cart
    pub const DEFAULT_MAX_LINE_ITEMS: usize = 1000;
}
