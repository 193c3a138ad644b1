/// A check applied to a candidate identifier.
///
/// Implementations never panic and answer `false` for anything they can't make sense of.
pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}
