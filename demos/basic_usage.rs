// ============================================================================
// Basic Usage Example
// ============================================================================

use columnar_decimal::prelude::*;

/// Registry a column-type layer would supply: MIN is NULL, MIN + 1 is EMPTY.
struct ColumnSentinels;

impl NarrowSentinels for ColumnSentinels {
    fn null_value(&self, width_bytes: usize) -> i64 {
        match width_bytes {
            1 => i8::MIN.into(),
            2 => i16::MIN.into(),
            4 => i32::MIN.into(),
            _ => i64::MIN,
        }
    }

    fn empty_value(&self, width_bytes: usize) -> i64 {
        self.null_value(width_bytes) + 1
    }
}

fn main() -> Result<(), DecimalError> {
    // Overflow rejections log at debug, zero divisors at trace
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Columnar Decimal Example ===\n");

    let price_ty = DecimalType::new(10, 2)?;
    let price: Decimal = "1999.95".parse()?;
    let qty = Decimal::from_raw(3, DecimalType::new(5, 0)?)?;
    println!("price = {price} ({:?}), qty = {qty}", price.width());

    let total = multiply::<i64, Checked>(price, qty, DecimalType::narrow_max(2))?;
    println!("total = {total}");

    let share = total.checked_div(qty, DecimalType::new(12, 4)?)?;
    println!("total / qty at scale 4 = {share}");
    println!("equal to price: {}", share == price);

    let tax = Decimal::parse("0.0825", DecimalType::new(5, 4)?)?;
    let taxed = total.checked_mul(tax, DecimalType::new(20, 6)?)?;
    println!("tax = {taxed} (wide: {})", taxed.is_wide());
    println!("tax rounded to cents = {}", taxed.rescale(price_ty)?);

    // Wide overflow is an error in checked mode
    let big = Decimal::wide(i128::MAX - 1, 0, 38)?;
    match add::<i128, Checked>(big, big, DecimalType::wide_max(0)) {
        Ok(d) => println!("unexpected sum {d}"),
        Err(e) => println!("checked add: {e}"),
    }
    let wrapped = add::<i128, Unchecked>(big, big, DecimalType::wide_max(0))?;
    println!("unchecked add wraps to {wrapped}");

    // Division by a zero divisor yields zero
    let zero = Decimal::zero(price_ty)?;
    println!("price / 0 = {}", price.checked_div(zero, price_ty)?);

    // Sentinels
    let null = Decimal::wide_null(0, 38)?;
    let narrow_null = Decimal::narrow(i64::from(i32::MIN), 0, 9)?;
    println!(
        "wide null: {}, narrow null: {}",
        null.is_null(),
        narrow_null.is_null_with(&ColumnSentinels)
    );

    // Conversions
    println!("as f64 = {}", price.to_f64());
    println!("rounded = {:?}", price.round_to_i64()?);
    println!("column bytes = {:?}", price.to_native_bytes()?.as_slice());
    println!("rust_decimal = {}", price.to_rust_decimal()?);

    Ok(())
}
