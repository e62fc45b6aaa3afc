/// Guard an indexed access with a bounds check.
///
/// `access` is the unchecked element expression. Arrays use their native
/// `length`; slices carry `$length`. A constant index into an array was
/// already checked at compile time and is returned as is, and a constant
/// index cannot be negative, so only the upper bound is tested for it.
pub fn range_check(
    container: &str,
    index: &str,
    access: &str,
    constant_index: bool,
    array: bool,
) -> String {
    if constant_index && array {
        return access.to_string();
    }

    let length = if array { "length" } else { "$length" };
    let mut check = format!("{index} >= {container}.{length}");
    if !constant_index {
        check = format!("({index} < 0 || {check})");
    }
    format!("({check} ? $throwRuntimeError(\"index out of range\") : {access})")
}
