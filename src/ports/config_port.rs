//! Configuration access port trait.

/// Section/key lookup over a configuration source.
///
/// Numeric values are read through [`get_string`](ConfigPort::get_string) so
/// that an unparseable value is reported instead of replaced by a default.
pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool;
}
