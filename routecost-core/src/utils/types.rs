/// Alias to a scalar floating type.
///
/// NOTE: Prefer to use `f64` as a default floating type: the cost labels span six orders of
/// magnitude due to the shortfall penalty, and `f32` loses the small terms next to it.
pub type Float = f64;
