//! Checked decimal operations that refuse to round.
//!
//! `Decimal::checked_add` and `checked_mul` only fail on overflow. When an exact result needs more
//! digits than the 96-bit mantissa holds they quietly drop scale instead, which would make a sum or
//! an adjusted amount silently wrong.

use rust_decimal::Decimal;

use crate::engine::AggregationError;

pub(crate) fn exact_add(left: Decimal, right: Decimal, operation: &'static str) -> Result<Decimal, AggregationError> {
    let sum = left.checked_add(right)
        .ok_or_else(|| AggregationError::overflow(operation))?;

    //NOTE: A reduced scale is only harmless if neither operand had digits past the kept scale
    let exact = sum.scale() >= left.scale().max(right.scale())
        || (fits_scale(left, sum.scale()) && fits_scale(right, sum.scale()));

    if exact {
        Ok(sum)
    } else {
        Err(AggregationError::precision_loss(operation))
    }
}

pub(crate) fn exact_mul(left: Decimal, right: Decimal, operation: &'static str) -> Result<Decimal, AggregationError> {
    let product = left.checked_mul(right)
        .ok_or_else(|| AggregationError::overflow(operation))?;

    let full_scale = left.scale() + right.scale();

    if product.scale() >= full_scale {
        return Ok(product);
    }

    //NOTE: The dropped digits of the full mantissa product must all be zero
    let dropped = full_scale - product.scale();
    let exact = left.mantissa().checked_mul(right.mantissa())
        .zip(10i128.checked_pow(dropped))
        .is_some_and(|(mantissa, divisor)| mantissa % divisor == 0);

    if exact {
        Ok(product)
    } else {
        Err(AggregationError::precision_loss(operation))
    }
}

fn fits_scale(value: Decimal, scale: u32) -> bool {
    value.round_dp(scale) == value
}
