pub mod button;
pub mod chip;
pub mod container;
pub mod flex;
pub mod label;
pub mod slider;

#[cfg(test)]
pub(crate) mod test_util;
