/// Direction-corrected stepped ranges.
pub mod range;
